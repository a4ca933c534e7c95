use super::*;

/// Expect Ok when creating a literature record
#[tokio::test]
async fn creates_literature() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let literature_type = test.catalog().insert_literature_type("Field Manual").await?;
    let binding_type = test.catalog().insert_binding_type("Softcover").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    let result = repository
        .create(&literature_payload(
            "Infantry Drill Regulations",
            literature_type.id,
            binding_type.id,
        ))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, "Infantry Drill Regulations");

    Ok(())
}

/// Titles are unique per category, compared case-insensitively
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let literature_type = test.catalog().insert_literature_type("Field Manual").await?;
    let binding_type = test.catalog().insert_binding_type("Softcover").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    repository
        .create(&literature_payload(
            "Infantry Drill Regulations",
            literature_type.id,
            binding_type.id,
        ))
        .await?;

    let duplicate = repository
        .create(&literature_payload(
            "infantry drill regulations",
            literature_type.id,
            binding_type.id,
        ))
        .await;

    assert!(matches!(duplicate, Err(CatalogError::Conflict(_))));

    Ok(())
}

/// An assigned ISBN must not repeat even under a different title
#[tokio::test]
async fn rejects_duplicate_isbn() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let literature_type = test.catalog().insert_literature_type("Field Manual").await?;
    let binding_type = test.catalog().insert_binding_type("Softcover").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    let mut first = literature_payload(
        "Infantry Drill Regulations",
        literature_type.id,
        binding_type.id,
    );
    first.isbn = Some("978-0-00-000000-2".to_string());
    repository.create(&first).await?;

    let mut second = literature_payload(
        "Cavalry Drill Regulations",
        literature_type.id,
        binding_type.id,
    );
    second.isbn = Some("978-0-00-000000-2".to_string());
    let result = repository.create(&second).await;

    assert!(matches!(result, Err(CatalogError::Conflict(_))));

    Ok(())
}

/// Records without an ISBN never collide with each other
#[tokio::test]
async fn allows_multiple_records_without_isbn() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let literature_type = test.catalog().insert_literature_type("Field Manual").await?;
    let binding_type = test.catalog().insert_binding_type("Softcover").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    repository
        .create(&literature_payload(
            "Infantry Drill Regulations",
            literature_type.id,
            binding_type.id,
        ))
        .await?;

    let second = repository
        .create(&literature_payload(
            "Cavalry Drill Regulations",
            literature_type.id,
            binding_type.id,
        ))
        .await;

    assert!(second.is_ok());

    Ok(())
}
