use super::*;

use crate::model::mechanical_equipment::MechanicalEquipmentSearchFilterDto;

/// Vehicle model and serial number match exactly, ignoring case
#[tokio::test]
async fn search_filters_on_vehicle_model_and_serial() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let vehicle_part = test
        .catalog()
        .insert_mechanical_equipment_type("Vehicle Part")
        .await?;

    let repository = MechanicalEquipmentRepository::new(&test.state.db);
    let mut payload = mechanical_equipment_payload("Kübelwagen Gauge Cluster", vehicle_part.id);
    payload.vehicle_model = Some("Typ 82".to_string());
    payload.serial_number = Some("KW-4431".to_string());
    let expected = repository.create(&payload).await?;
    repository
        .create(&mechanical_equipment_payload(
            "Unmarked Gauge Cluster",
            vehicle_part.id,
        ))
        .await?;

    let filter = MechanicalEquipmentSearchFilterDto {
        vehicle_model: Some("typ 82".to_string()),
        serial_number: Some("kw-4431".to_string()),
        ..Default::default()
    };
    let results = repository.search(&filter).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, expected.id);

    Ok(())
}

/// Manufacturer and caliber names resolve through their lookup tables
#[tokio::test]
async fn search_filters_on_manufacturer_and_caliber() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let small_arm = test
        .catalog()
        .insert_mechanical_equipment_type("Small Arm")
        .await?;
    let manufacturer = test.catalog().insert_manufacturer("Mauser").await?;
    let caliber = test.catalog().insert_caliber_spec("7.92x57mm").await?;

    let repository = MechanicalEquipmentRepository::new(&test.state.db);
    let mut payload = mechanical_equipment_payload("Gewehr 98", small_arm.id);
    payload.manufacturer_id = Some(manufacturer.id);
    payload.caliber_spec_id = Some(caliber.id);
    let expected = repository.create(&payload).await?;

    let filter = MechanicalEquipmentSearchFilterDto {
        manufacturer: Some("mauser".to_string()),
        caliber_spec: Some("7.92X57MM".to_string()),
        ..Default::default()
    };
    let results = repository.search(&filter).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, expected.id);

    Ok(())
}

/// Simple search reads the name field only; other text fields don't match
#[tokio::test]
async fn simple_search_ignores_vehicle_model() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let vehicle_part = test
        .catalog()
        .insert_mechanical_equipment_type("Vehicle Part")
        .await?;

    let repository = MechanicalEquipmentRepository::new(&test.state.db);
    let mut payload = mechanical_equipment_payload("Gauge Cluster", vehicle_part.id);
    payload.vehicle_model = Some("Typ 82".to_string());
    repository.create(&payload).await?;

    let by_name = repository.simple_search("gauge").await?;
    assert_eq!(by_name.len(), 1);

    let by_model = repository.simple_search("Typ 82").await?;
    assert!(by_model.is_empty());

    Ok(())
}
