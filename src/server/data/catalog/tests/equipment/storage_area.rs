use super::*;

/// Equipment has no series; the storage-area flow still works end to end
#[tokio::test]
async fn assigns_equipment_to_storage_area() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let equipment_type = test.catalog().insert_equipment_type("Field Gear").await?;
    let area = test.catalog().insert_storage_area("Shelf B").await?;

    let repository = EquipmentRepository::new(&test.state.db);
    let created = repository
        .create(&equipment_payload("Mess Kit", equipment_type.id))
        .await?;

    repository.assign_to_storage_area(created.id, area.id).await?;

    let members = repository.by_storage_area(area.id).await?;
    assert!(members.iter().any(|e| e.id == created.id));

    Ok(())
}

/// Assignment to an absent area fails with the area's own error
#[tokio::test]
async fn assign_fails_for_nonexistent_storage_area() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let equipment_type = test.catalog().insert_equipment_type("Field Gear").await?;

    let repository = EquipmentRepository::new(&test.state.db);
    let created = repository
        .create(&equipment_payload("Mess Kit", equipment_type.id))
        .await?;

    let result = repository.assign_to_storage_area(created.id, 999).await;

    assert!(matches!(
        result,
        Err(CatalogError::StorageAreaNotFound(999))
    ));

    Ok(())
}
