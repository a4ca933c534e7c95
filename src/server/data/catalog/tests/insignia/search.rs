use super::*;

use crate::model::insignia::InsigniaSearchFilterDto;

/// part_of_set is a hard constraint when populated
#[tokio::test]
async fn search_filters_on_part_of_set() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let insignia_type = test.catalog().insert_insignia_type("Cap Badge").await?;

    let repository = InsigniaRepository::new(&test.state.db);
    let mut in_set = insignia_payload("Collar Tabs", insignia_type.id);
    in_set.part_of_set = true;
    let expected = repository.create(&in_set).await?;
    repository
        .create(&insignia_payload("Loose Cap Badge", insignia_type.id))
        .await?;

    let filter = InsigniaSearchFilterDto {
        part_of_set: Some(true),
        ..Default::default()
    };
    let results = repository.search(&filter).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, expected.id);

    Ok(())
}

/// Material names resolve through the lookup table, case-insensitively
#[tokio::test]
async fn search_filters_on_material() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let insignia_type = test.catalog().insert_insignia_type("Cap Badge").await?;
    let brass = test.catalog().insert_material("Brass").await?;

    let repository = InsigniaRepository::new(&test.state.db);
    let mut payload = insignia_payload("Brass Cap Badge", insignia_type.id);
    payload.material_id = Some(brass.id);
    let expected = repository.create(&payload).await?;
    repository
        .create(&insignia_payload("Cloth Patch", insignia_type.id))
        .await?;

    let filter = InsigniaSearchFilterDto {
        material: Some("brass".to_string()),
        ..Default::default()
    };
    let results = repository.search(&filter).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, expected.id);

    let by_material = repository.by_material("BRASS").await?;
    assert_eq!(by_material.len(), 1);

    Ok(())
}
