use super::*;

use crate::model::artifact::ArtifactSearchFilterDto;

/// Price-range bounds are inclusive; out-of-range rows are excluded
#[tokio::test]
async fn filters_by_price_range() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    let in_range = repository
        .by_price_range(Decimal::new(4000, 2), Decimal::new(5000, 2))
        .await?;
    assert!(in_range.iter().any(|a| a.id == created.id));

    let out_of_range = repository
        .by_price_range(Decimal::new(10000, 2), Decimal::new(20000, 2))
        .await?;
    assert!(out_of_range.iter().all(|a| a.id != created.id));

    Ok(())
}

/// An unsatisfiable range yields no rows rather than an error
#[tokio::test]
async fn returns_empty_for_inverted_price_range() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    let results = repository
        .by_price_range(Decimal::new(5000, 2), Decimal::new(4000, 2))
        .await?;

    assert!(results.is_empty());

    Ok(())
}

/// Type names match case-insensitively against the lookup table
#[tokio::test]
async fn filters_by_type_case_insensitively() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let document = test.catalog().insert_artifact_type("Document").await?;
    let trench_art = test.catalog().insert_artifact_type("Trench Art").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let knife = repository
        .create(&artifact_payload("Trench Knife", trench_art.id))
        .await?;
    repository
        .create(&artifact_payload("Field Orders", document.id))
        .await?;

    let results = repository.by_type("trench art").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, knife.id);

    Ok(())
}

/// Rows without the attribute never match an origin filter
#[tokio::test]
async fn filters_by_origin_excluding_null_rows() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;
    let origin = test.catalog().insert_origin("Germany").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let mut with_origin = artifact_payload("Soldbuch", artifact_type.id);
    with_origin.origin_id = Some(origin.id);
    let tagged = repository.create(&with_origin).await?;
    repository
        .create(&artifact_payload("Unattributed Map", artifact_type.id))
        .await?;

    let results = repository.by_origin("germany").await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, tagged.id);

    let unknown = repository.by_origin("Atlantis").await?;
    assert!(unknown.is_empty());

    Ok(())
}

/// Era filtering behaves like origin filtering
#[tokio::test]
async fn filters_by_era() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;
    let era = test.catalog().insert_era("WWI").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let mut payload = artifact_payload("Trench Knife", artifact_type.id);
    payload.era_id = Some(era.id);
    let created = repository.create(&payload).await?;

    let results = repository.by_era("wwi").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, created.id);

    Ok(())
}

/// Populated filter fields are AND-combined; unset fields don't constrain
#[tokio::test]
async fn search_combines_filters_conjunctively() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let document = test.catalog().insert_artifact_type("Document").await?;
    let trench_art = test.catalog().insert_artifact_type("Trench Art").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let knife = repository
        .create(&artifact_payload("Trench Knife", trench_art.id))
        .await?;
    let mut cheap = artifact_payload("Trench Map", document.id);
    cheap.price = Decimal::new(500, 2);
    repository.create(&cheap).await?;

    let filter = ArtifactSearchFilterDto {
        name: Some("trench".to_string()),
        min_price: Some(Decimal::new(1000, 2)),
        artifact_type: Some("Trench Art".to_string()),
        ..Default::default()
    };
    let results = repository.search(&filter).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, knife.id);

    // An empty filter imposes no constraints at all
    let everything = repository.search(&ArtifactSearchFilterDto::default()).await?;
    assert_eq!(everything.len(), 2);

    Ok(())
}

/// Simple search matches the name field only, case-insensitively
#[tokio::test]
async fn simple_search_matches_name_substring() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let knife = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;
    repository
        .create(&artifact_payload("Ration Tin", artifact_type.id))
        .await?;

    let results = repository.simple_search("KNIFE").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, knife.id);

    Ok(())
}

/// Blank and whitespace-only queries return nothing
#[tokio::test]
async fn simple_search_returns_empty_for_blank_query() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    assert!(repository.simple_search("").await?.is_empty());
    assert!(repository.simple_search("   ").await?.is_empty());

    Ok(())
}
