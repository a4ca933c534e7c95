mod search;

use homebase_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::{
    model::mechanical_equipment::MechanicalEquipmentPayload,
    server::data::catalog::mechanical_equipment::MechanicalEquipmentRepository,
};

fn mechanical_equipment_payload(
    name: &str,
    mechanical_equipment_type_id: i32,
) -> MechanicalEquipmentPayload {
    MechanicalEquipmentPayload {
        name: name.to_string(),
        availability: true,
        price: Decimal::new(125000, 2),
        mechanical_equipment_type_id,
        caliber_spec_id: None,
        vehicle_model: None,
        serial_number: None,
        manufacturer_id: None,
        era_id: None,
        origin_id: None,
        material_id: None,
        description: "Deactivated to current proof-house standards".to_string(),
        storage_area_id: None,
    }
}
