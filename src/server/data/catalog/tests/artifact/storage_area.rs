use super::*;

/// Assigning to a storage area makes the item visible through
/// by_storage_area
#[tokio::test]
async fn assigns_artifact_to_storage_area() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;
    let area = test.catalog().insert_storage_area("Shelf A").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    repository.assign_to_storage_area(created.id, area.id).await?;

    let members = repository.by_storage_area(area.id).await?;
    assert!(members.iter().any(|a| a.id == created.id));

    Ok(())
}

/// Assignment to an absent area fails and leaves the item unchanged
#[tokio::test]
async fn assign_fails_for_nonexistent_storage_area() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    let result = repository.assign_to_storage_area(created.id, 999).await;
    assert!(matches!(
        result,
        Err(CatalogError::StorageAreaNotFound(999))
    ));

    let fetched = repository.get(created.id).await?;
    assert_eq!(fetched.storage_area_id, None);

    Ok(())
}

/// by_storage_area validates the area before returning members
#[tokio::test]
async fn by_storage_area_fails_for_nonexistent_area() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository.by_storage_area(999).await;

    assert!(matches!(
        result,
        Err(CatalogError::StorageAreaNotFound(999))
    ));

    Ok(())
}

/// clear_storage_area nulls membership without touching the items
#[tokio::test]
async fn clear_storage_area_releases_members() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;
    let area = test.catalog().insert_storage_area("Shelf A").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;
    repository.assign_to_storage_area(created.id, area.id).await?;

    let released = repository.clear_storage_area(area.id).await?;
    assert_eq!(released, 1);

    let fetched = repository.get(created.id).await?;
    assert_eq!(fetched.storage_area_id, None);

    Ok(())
}
