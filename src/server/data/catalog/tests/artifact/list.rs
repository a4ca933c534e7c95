use super::*;

/// Offset pagination walks the whole category page by page
#[tokio::test]
async fn pages_through_artifacts() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    for name in ["Trench Knife", "Shell Casing Vase", "Ration Tin"] {
        repository
            .create(&artifact_payload(name, artifact_type.id))
            .await?;
    }

    let first_page = repository.list(1, 2).await?;
    let second_page = repository.list(2, 2).await?;

    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);

    Ok(())
}

/// A page past the end is empty, not an error
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let repository = ArtifactRepository::new(&test.state.db);
    let page = repository.list(5, 25).await?;

    assert!(page.is_empty());

    Ok(())
}
