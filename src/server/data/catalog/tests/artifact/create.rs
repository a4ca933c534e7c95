use super::*;

/// Expect Ok with a generated id when creating an artifact
#[tokio::test]
async fn creates_artifact() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Trench Knife");
    assert_eq!(created.price, Decimal::new(4250, 2));
    assert!(created.availability);
    assert_eq!(created.artifact_type_id, artifact_type.id);
    assert_eq!(created.photo_url, None);

    Ok(())
}

/// Expect Conflict when a second artifact reuses an existing name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await
        .unwrap();

    let duplicate = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await;
    assert!(matches!(duplicate, Err(CatalogError::Conflict(_))));

    // A different name must still go through
    let different = repository
        .create(&artifact_payload("Shell Casing Vase", artifact_type.id))
        .await;
    assert!(different.is_ok());

    Ok(())
}

/// The name-uniqueness check ignores case
#[tokio::test]
async fn rejects_duplicate_name_case_insensitively() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await
        .unwrap();

    let duplicate = repository
        .create(&artifact_payload("trench knife", artifact_type.id))
        .await;

    assert!(matches!(duplicate, Err(CatalogError::Conflict(_))));

    Ok(())
}

/// Expect a store error when required tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository.create(&artifact_payload("Trench Knife", 1)).await;

    assert!(matches!(result, Err(CatalogError::Db(_))));

    Ok(())
}
