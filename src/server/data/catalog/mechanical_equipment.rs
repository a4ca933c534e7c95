use entity::lookups::{caliber_spec, era, manufacturer, material, mechanical_equipment_type, origin};
use entity::mechanical_equipment::{ActiveModel, Column, Entity};
use sea_orm::{sea_query::SimpleExpr, ActiveValue, ColumnTrait, Condition};

use crate::{
    model::{
        catalog::ItemKind,
        mechanical_equipment::{MechanicalEquipmentPayload, MechanicalEquipmentSearchFilterDto},
    },
    server::data::{
        catalog::item::{non_empty, text_contains, text_eq, CatalogEntity, ItemRepository},
        lookup,
    },
};

pub type MechanicalEquipmentRepository<'a, C> = ItemRepository<'a, C, Entity>;

impl CatalogEntity for Entity {
    type Active = ActiveModel;
    type Payload = MechanicalEquipmentPayload;
    type Filter = MechanicalEquipmentSearchFilterDto;

    const KIND: ItemKind = ItemKind::MechanicalEquipment;

    fn id_column() -> Column {
        Column::Id
    }

    fn name_column() -> Column {
        Column::Name
    }

    fn price_column() -> Column {
        Column::Price
    }

    fn photo_url_column() -> Column {
        Column::PhotoUrl
    }

    fn storage_area_column() -> Column {
        Column::StorageAreaId
    }

    fn origin_column() -> Option<Column> {
        Some(Column::OriginId)
    }

    fn era_column() -> Option<Column> {
        Some(Column::EraId)
    }

    fn material_column() -> Option<Column> {
        Some(Column::MaterialId)
    }

    fn type_condition(name: &str) -> SimpleExpr {
        Column::MechanicalEquipmentTypeId
            .in_subquery(lookup::ids_by_name::<mechanical_equipment_type::Entity>(name))
    }

    fn payload_name(payload: &MechanicalEquipmentPayload) -> &str {
        &payload.name
    }

    fn insert_model(payload: &MechanicalEquipmentPayload) -> ActiveModel {
        ActiveModel {
            name: ActiveValue::Set(payload.name.clone()),
            availability: ActiveValue::Set(payload.availability),
            price: ActiveValue::Set(payload.price),
            mechanical_equipment_type_id: ActiveValue::Set(payload.mechanical_equipment_type_id),
            caliber_spec_id: ActiveValue::Set(payload.caliber_spec_id),
            vehicle_model: ActiveValue::Set(payload.vehicle_model.clone()),
            serial_number: ActiveValue::Set(payload.serial_number.clone()),
            manufacturer_id: ActiveValue::Set(payload.manufacturer_id),
            era_id: ActiveValue::Set(payload.era_id),
            origin_id: ActiveValue::Set(payload.origin_id),
            material_id: ActiveValue::Set(payload.material_id),
            description: ActiveValue::Set(payload.description.clone()),
            storage_area_id: ActiveValue::Set(payload.storage_area_id),
            ..Default::default()
        }
    }

    fn overwrite_model(id: i32, payload: &MechanicalEquipmentPayload) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(id),
            ..Self::insert_model(payload)
        }
    }

    fn filter_condition(filter: &MechanicalEquipmentSearchFilterDto) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = non_empty(&filter.name) {
            condition = condition.add(text_contains(Column::Name, name));
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(Column::Price.lte(max_price));
        }
        if let Some(mechanical_equipment_type) = non_empty(&filter.mechanical_equipment_type) {
            condition = condition.add(Self::type_condition(mechanical_equipment_type));
        }
        if let Some(caliber_spec) = non_empty(&filter.caliber_spec) {
            condition = condition.add(
                Column::CaliberSpecId
                    .in_subquery(lookup::ids_by_name::<caliber_spec::Entity>(caliber_spec)),
            );
        }
        if let Some(vehicle_model) = non_empty(&filter.vehicle_model) {
            condition = condition.add(text_eq(Column::VehicleModel, vehicle_model));
        }
        if let Some(serial_number) = non_empty(&filter.serial_number) {
            condition = condition.add(text_eq(Column::SerialNumber, serial_number));
        }
        if let Some(manufacturer) = non_empty(&filter.manufacturer) {
            condition = condition.add(
                Column::ManufacturerId
                    .in_subquery(lookup::ids_by_name::<manufacturer::Entity>(manufacturer)),
            );
        }
        if let Some(origin) = non_empty(&filter.origin) {
            condition =
                condition.add(Column::OriginId.in_subquery(lookup::ids_by_name::<origin::Entity>(
                    origin,
                )));
        }
        if let Some(era) = non_empty(&filter.era) {
            condition = condition
                .add(Column::EraId.in_subquery(lookup::ids_by_name::<era::Entity>(era)));
        }
        if let Some(material) = non_empty(&filter.material) {
            condition = condition.add(
                Column::MaterialId.in_subquery(lookup::ids_by_name::<material::Entity>(material)),
            );
        }

        condition
    }
}
