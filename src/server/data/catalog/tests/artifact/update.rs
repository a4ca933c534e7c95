use super::*;

/// Update overwrites every payload field and keeps the path id
#[tokio::test]
async fn overwrites_mutable_fields() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    let mut patch = artifact_payload("Trench Knife (1917)", artifact_type.id);
    patch.price = Decimal::new(5000, 2);
    patch.availability = false;

    let updated = repository.update(created.id, &patch).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Trench Knife (1917)");
    assert_eq!(updated.price, Decimal::new(5000, 2));
    assert!(!updated.availability);

    Ok(())
}

/// The photo URL set through the upload path survives a full overwrite
#[tokio::test]
async fn preserves_photo_url_on_overwrite() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;
    repository
        .update_photo_url(created.id, "artifactimages/1/1_knife.jpg")
        .await?;

    let updated = repository
        .update(created.id, &artifact_payload("Trench Knife (1917)", artifact_type.id))
        .await?;

    assert_eq!(
        updated.photo_url.as_deref(),
        Some("artifactimages/1/1_knife.jpg")
    );

    Ok(())
}

/// Expect ItemNotFound when updating an id that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_artifact() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository
        .update(1, &artifact_payload("Trench Knife", artifact_type.id))
        .await;

    assert!(matches!(
        result,
        Err(CatalogError::ItemNotFound { id: 1, .. })
    ));

    Ok(())
}
