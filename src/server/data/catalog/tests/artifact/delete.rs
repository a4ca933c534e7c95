use super::*;

/// A deleted artifact is gone on the next read
#[tokio::test]
async fn deletes_existing_artifact() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    repository.delete(created.id).await?;

    let fetched = repository.get(created.id).await;
    assert!(matches!(fetched, Err(CatalogError::ItemNotFound { .. })));

    Ok(())
}

/// Deleting an absent id reports ItemNotFound, never silent success
#[tokio::test]
async fn returns_not_found_for_nonexistent_artifact() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository.delete(1).await;

    assert!(matches!(
        result,
        Err(CatalogError::ItemNotFound { id: 1, .. })
    ));

    Ok(())
}
