use super::*;

use crate::model::literature::LiteratureSearchFilterDto;

/// Author names resolve through the lookup table, case-insensitively
#[tokio::test]
async fn filters_by_author() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let literature_type = test.catalog().insert_literature_type("Memoir").await?;
    let binding_type = test.catalog().insert_binding_type("Hardcover").await?;
    let author = test.catalog().insert_author("Ernst Jünger").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    let mut payload = literature_payload("Storm of Steel", literature_type.id, binding_type.id);
    payload.author_id = Some(author.id);
    let created = repository.create(&payload).await?;
    repository
        .create(&literature_payload(
            "Anonymous Diary",
            literature_type.id,
            binding_type.id,
        ))
        .await?;

    let results = repository.by_author("ernst jünger").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, created.id);

    Ok(())
}

/// Publication-year bounds are inclusive on both ends
#[tokio::test]
async fn filters_by_publication_year_range() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let literature_type = test.catalog().insert_literature_type("Memoir").await?;
    let binding_type = test.catalog().insert_binding_type("Hardcover").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    let mut nineteen_twenty = literature_payload("Storm of Steel", literature_type.id, binding_type.id);
    nineteen_twenty.publication_year = Some(1920);
    let in_range = repository.create(&nineteen_twenty).await?;

    let mut nineteen_sixty = literature_payload("The Forgotten Soldier", literature_type.id, binding_type.id);
    nineteen_sixty.publication_year = Some(1967);
    repository.create(&nineteen_sixty).await?;

    let results = repository.by_publication_year_range(1914, 1920).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, in_range.id);

    Ok(())
}

/// ISBN filtering is an exact, case-insensitive match
#[tokio::test]
async fn filters_by_isbn() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let literature_type = test.catalog().insert_literature_type("Memoir").await?;
    let binding_type = test.catalog().insert_binding_type("Hardcover").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    let mut payload = literature_payload("Storm of Steel", literature_type.id, binding_type.id);
    payload.isbn = Some("978-0-14-243790-2".to_string());
    let created = repository.create(&payload).await?;

    let results = repository.by_isbn("978-0-14-243790-2").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, created.id);

    Ok(())
}

/// The structured filter AND-combines title, year range, and binding
#[tokio::test]
async fn search_combines_literature_filters() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let memoir = test.catalog().insert_literature_type("Memoir").await?;
    let hardcover = test.catalog().insert_binding_type("Hardcover").await?;
    let softcover = test.catalog().insert_binding_type("Softcover").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    let mut hardcover_payload = literature_payload("Storm of Steel", memoir.id, hardcover.id);
    hardcover_payload.publication_year = Some(1920);
    let expected = repository.create(&hardcover_payload).await?;

    let mut softcover_payload = literature_payload("Storm of Steel (Reprint)", memoir.id, softcover.id);
    softcover_payload.publication_year = Some(1985);
    repository.create(&softcover_payload).await?;

    let filter = LiteratureSearchFilterDto {
        title: Some("storm".to_string()),
        publication_year_from: Some(1914),
        publication_year_to: Some(1930),
        binding_type: Some("hardcover".to_string()),
        ..Default::default()
    };
    let results = repository.search(&filter).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, expected.id);

    Ok(())
}

/// Publisher and binding type resolve through their lookup tables
#[tokio::test]
async fn filters_by_publisher_and_binding_type() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let literature_type = test.catalog().insert_literature_type("Memoir").await?;
    let hardcover = test.catalog().insert_binding_type("Hardcover").await?;
    let publisher = test.catalog().insert_publisher("Penguin Classics").await?;

    let repository = LiteratureRepository::new(&test.state.db);
    let mut payload = literature_payload("Storm of Steel", literature_type.id, hardcover.id);
    payload.publisher_id = Some(publisher.id);
    let created = repository.create(&payload).await?;

    let by_publisher = repository.by_publisher("penguin classics").await?;
    assert_eq!(by_publisher.len(), 1);
    assert_eq!(by_publisher[0].id, created.id);

    let by_binding = repository.by_binding_type("HARDCOVER").await?;
    assert_eq!(by_binding.len(), 1);
    assert_eq!(by_binding[0].id, created.id);

    Ok(())
}
