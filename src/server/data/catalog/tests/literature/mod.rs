mod create;
mod filters;

use homebase_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::{
    model::literature::LiteraturePayload,
    server::{data::catalog::literature::LiteratureRepository, error::catalog::CatalogError},
};

/// Baseline literature payload individual tests tweak per case.
fn literature_payload(
    title: &str,
    literature_type_id: i32,
    binding_type_id: i32,
) -> LiteraturePayload {
    LiteraturePayload {
        title: title.to_string(),
        availability: true,
        price: Decimal::new(1850, 2),
        author_id: None,
        publication_year: None,
        publisher_id: None,
        isbn: None,
        literature_type_id,
        binding_type_id,
        description: "Reprint of the original field manual".to_string(),
        storage_area_id: None,
        series_id: None,
    }
}
