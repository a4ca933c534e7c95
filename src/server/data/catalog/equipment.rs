use entity::equipment::{ActiveModel, Column, Entity};
use entity::lookups::{equipment_type, era, material, origin};
use sea_orm::{sea_query::SimpleExpr, ActiveValue, ColumnTrait, Condition};

use crate::{
    model::{
        catalog::ItemKind,
        equipment::{EquipmentPayload, EquipmentSearchFilterDto},
    },
    server::data::{
        catalog::item::{non_empty, text_contains, CatalogEntity, ItemRepository},
        lookup,
    },
};

pub type EquipmentRepository<'a, C> = ItemRepository<'a, C, Entity>;

impl CatalogEntity for Entity {
    type Active = ActiveModel;
    type Payload = EquipmentPayload;
    type Filter = EquipmentSearchFilterDto;

    const KIND: ItemKind = ItemKind::Equipment;

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
        Column::EquipmentTypeId.in_subquery(lookup::ids_by_name::<equipment_type::Entity>(name))
    }

    fn payload_name(payload: &EquipmentPayload) -> &str {
        &payload.name
    }

    fn insert_model(payload: &EquipmentPayload) -> ActiveModel {
        ActiveModel {
            name: ActiveValue::Set(payload.name.clone()),
            availability: ActiveValue::Set(payload.availability),
            price: ActiveValue::Set(payload.price),
            equipment_type_id: ActiveValue::Set(payload.equipment_type_id),
            origin_id: ActiveValue::Set(payload.origin_id),
            era_id: ActiveValue::Set(payload.era_id),
            material_id: ActiveValue::Set(payload.material_id),
            description: ActiveValue::Set(payload.description.clone()),
            storage_area_id: ActiveValue::Set(payload.storage_area_id),
            ..Default::default()
        }
    }

    fn overwrite_model(id: i32, payload: &EquipmentPayload) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(id),
            ..Self::insert_model(payload)
        }
    }

    fn filter_condition(filter: &EquipmentSearchFilterDto) -> Condition {
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
        if let Some(equipment_type) = non_empty(&filter.equipment_type) {
            condition = condition.add(Self::type_condition(equipment_type));
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
