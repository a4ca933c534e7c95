use super::*;

/// Assigning to a series makes the item visible through by_series
#[tokio::test]
async fn assigns_artifact_to_series() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;
    let series = test.catalog().insert_artifact_series("Trench Art 1916").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    repository.assign_to_series(created.id, series.id).await?;

    let members = repository.by_series(series.id).await?;
    assert!(members.iter().any(|a| a.id == created.id));

    Ok(())
}

/// Expect SeriesNotFound when the series id is absent
#[tokio::test]
async fn assign_fails_for_nonexistent_series() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;

    let result = repository.assign_to_series(created.id, 999).await;
    assert!(matches!(
        result,
        Err(CatalogError::SeriesNotFound { id: 999, .. })
    ));

    // Membership stays untouched on failure
    let fetched = repository.get(created.id).await?;
    assert_eq!(fetched.series_id, None);

    Ok(())
}

/// Expect ItemNotFound when the artifact id is absent
#[tokio::test]
async fn assign_fails_for_nonexistent_artifact() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let series = test.catalog().insert_artifact_series("Trench Art 1916").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository.assign_to_series(1, series.id).await;

    assert!(matches!(
        result,
        Err(CatalogError::ItemNotFound { id: 1, .. })
    ));

    Ok(())
}

/// by_series validates the series before returning members
#[tokio::test]
async fn by_series_fails_for_nonexistent_series() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let repository = ArtifactRepository::new(&test.state.db);
    let result = repository.by_series(999).await;

    assert!(matches!(
        result,
        Err(CatalogError::SeriesNotFound { id: 999, .. })
    ));

    Ok(())
}

/// An existing series with no members yields an empty list
#[tokio::test]
async fn by_series_returns_empty_for_memberless_series() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let series = test.catalog().insert_artifact_series("Trench Art 1916").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let members = repository.by_series(series.id).await?;

    assert!(members.is_empty());

    Ok(())
}

/// clear_series nulls membership without touching the items
#[tokio::test]
async fn clear_series_releases_members() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let artifact_type = test.catalog().insert_artifact_type("Document").await?;
    let series = test.catalog().insert_artifact_series("Trench Art 1916").await?;

    let repository = ArtifactRepository::new(&test.state.db);
    let created = repository
        .create(&artifact_payload("Trench Knife", artifact_type.id))
        .await?;
    repository.assign_to_series(created.id, series.id).await?;

    let released = repository.clear_series(series.id).await?;
    assert_eq!(released, 1);

    let fetched = repository.get(created.id).await?;
    assert_eq!(fetched.series_id, None);

    Ok(())
}
