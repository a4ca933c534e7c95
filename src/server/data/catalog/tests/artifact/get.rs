use super::*;

/// A created artifact reads back unchanged by its generated id
#[tokio::test]
async fn roundtrips_created_artifact() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    let fetched = repository.get(created.id).await?;

    assert_eq!(fetched, created);

    Ok(())
}

/// Expect ItemNotFound for an id that was never created
#[tokio::test]
async fn returns_not_found_for_nonexistent_artifact() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository.get(1).await;

    assert!(matches!(
        result,
        Err(CatalogError::ItemNotFound { id: 1, .. })
    ));

    Ok(())
}
