use entity::insignia::{ActiveModel, Column, Entity};
use entity::lookups::{era, insignia_type, material, origin};
use sea_orm::{sea_query::SimpleExpr, ActiveValue, ColumnTrait, Condition};

use crate::{
    model::{
        catalog::ItemKind,
        insignia::{InsigniaPayload, InsigniaSearchFilterDto},
    },
    server::data::{
        catalog::item::{non_empty, text_contains, CatalogEntity, ItemRepository, SeriesBoundEntity},
        lookup,
    },
};

pub type InsigniaRepository<'a, C> = ItemRepository<'a, C, Entity>;

impl CatalogEntity for Entity {
    type Active = ActiveModel;
    type Payload = InsigniaPayload;
    type Filter = InsigniaSearchFilterDto;

    const KIND: ItemKind = ItemKind::Insignia;

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
        Column::InsigniaTypeId.in_subquery(lookup::ids_by_name::<insignia_type::Entity>(name))
    }

    fn payload_name(payload: &InsigniaPayload) -> &str {
        &payload.name
    }

    fn insert_model(payload: &InsigniaPayload) -> ActiveModel {
        ActiveModel {
            name: ActiveValue::Set(payload.name.clone()),
            availability: ActiveValue::Set(payload.availability),
            price: ActiveValue::Set(payload.price),
            insignia_type_id: ActiveValue::Set(payload.insignia_type_id),
            part_of_set: ActiveValue::Set(payload.part_of_set),
            origin_id: ActiveValue::Set(payload.origin_id),
            era_id: ActiveValue::Set(payload.era_id),
            material_id: ActiveValue::Set(payload.material_id),
            description: ActiveValue::Set(payload.description.clone()),
            storage_area_id: ActiveValue::Set(payload.storage_area_id),
            series_id: ActiveValue::Set(payload.series_id),
            ..Default::default()
        }
    }

    fn overwrite_model(id: i32, payload: &InsigniaPayload) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(id),
            ..Self::insert_model(payload)
        }
    }

    fn filter_condition(filter: &InsigniaSearchFilterDto) -> Condition {
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
        if let Some(insignia_type) = non_empty(&filter.insignia_type) {
            condition = condition.add(Self::type_condition(insignia_type));
        }
        if let Some(part_of_set) = filter.part_of_set {
            condition = condition.add(Column::PartOfSet.eq(part_of_set));
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

impl SeriesBoundEntity for Entity {
    type Series = entity::insignia_series::Entity;

    fn series_column() -> Column {
        Column::SeriesId
    }
}
