mod search;

use homebase_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::{
    model::insignia::InsigniaPayload, server::data::catalog::insignia::InsigniaRepository,
};

fn insignia_payload(name: &str, insignia_type_id: i32) -> InsigniaPayload {
    InsigniaPayload {
        name: name.to_string(),
        availability: true,
        price: Decimal::new(1200, 2),
        insignia_type_id,
        part_of_set: false,
        origin_id: None,
        era_id: None,
        material_id: None,
        description: "Single issue example with original pin".to_string(),
        storage_area_id: None,
        series_id: None,
    }
}
