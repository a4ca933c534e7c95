use super::*;

/// The stored path reads back through get and nothing else moves
#[tokio::test]
async fn updates_photo_url_and_leaves_other_fields_alone() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    repository
        .update_photo_url(created.id, "artifactimages/1/1_knife.jpg")
        .await?;

    let fetched = repository.get(created.id).await?;
    assert_eq!(
        fetched.photo_url.as_deref(),
        Some("artifactimages/1/1_knife.jpg")
    );
    assert_eq!(
        entity::artifact::Model {
            photo_url: None,
            ..fetched
        },
        created
    );

    Ok(())
}

/// Expect ItemNotFound when the artifact does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_artifact() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository
        .update_photo_url(1, "artifactimages/1/1_knife.jpg")
        .await;

    assert!(matches!(
        result,
        Err(CatalogError::ItemNotFound { id: 1, .. })
    ));

    Ok(())
}
