mod storage_area;

use homebase_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::{
    model::equipment::EquipmentPayload,
    server::{data::catalog::equipment::EquipmentRepository, error::catalog::CatalogError},
};

fn equipment_payload(name: &str, equipment_type_id: i32) -> EquipmentPayload {
    EquipmentPayload {
        name: name.to_string(),
        availability: true,
        price: Decimal::new(3500, 2),
        equipment_type_id,
        origin_id: None,
        era_id: None,
        material_id: None,
        description: "Complete with original straps".to_string(),
        storage_area_id: None,
    }
}
