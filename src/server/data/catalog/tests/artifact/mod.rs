mod create;
mod delete;
mod filters;
mod get;
mod list;
mod photo_url;
mod series;
mod storage_area;
mod update;

use homebase_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::{
    model::artifact::ArtifactPayload,
    server::{data::catalog::artifact::ArtifactRepository, error::catalog::CatalogError},
};

/// Baseline artifact payload individual tests tweak per case.
fn artifact_payload(name: &str, artifact_type_id: i32) -> ArtifactPayload {
    ArtifactPayload {
        name: name.to_string(),
        availability: true,
        price: Decimal::new(4250, 2),
        artifact_type_id,
        origin_id: None,
        era_id: None,
        description: "Pattern 1907 example in field-worn condition".to_string(),
        storage_area_id: None,
        series_id: None,
    }
}
