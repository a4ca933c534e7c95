use entity::artifact::{ActiveModel, Column, Entity};
use entity::lookups::{artifact_type, era, origin};
use sea_orm::{sea_query::SimpleExpr, ActiveValue, ColumnTrait, Condition};

use crate::{
    model::{
        artifact::{ArtifactPayload, ArtifactSearchFilterDto},
        catalog::ItemKind,
    },
    server::data::{
        catalog::item::{non_empty, text_contains, CatalogEntity, ItemRepository, SeriesBoundEntity},
        lookup,
    },
};

pub type ArtifactRepository<'a, C> = ItemRepository<'a, C, Entity>;

impl CatalogEntity for Entity {
    type Active = ActiveModel;
    type Payload = ArtifactPayload;
    type Filter = ArtifactSearchFilterDto;

    const KIND: ItemKind = ItemKind::Artifact;

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

    fn type_condition(name: &str) -> SimpleExpr {
        Column::ArtifactTypeId.in_subquery(lookup::ids_by_name::<artifact_type::Entity>(name))
    }

    fn payload_name(payload: &ArtifactPayload) -> &str {
        &payload.name
    }

    fn insert_model(payload: &ArtifactPayload) -> ActiveModel {
        ActiveModel {
            name: ActiveValue::Set(payload.name.clone()),
            availability: ActiveValue::Set(payload.availability),
            price: ActiveValue::Set(payload.price),
            artifact_type_id: ActiveValue::Set(payload.artifact_type_id),
            origin_id: ActiveValue::Set(payload.origin_id),
            era_id: ActiveValue::Set(payload.era_id),
            description: ActiveValue::Set(payload.description.clone()),
            storage_area_id: ActiveValue::Set(payload.storage_area_id),
            series_id: ActiveValue::Set(payload.series_id),
            ..Default::default()
        }
    }

    fn overwrite_model(id: i32, payload: &ArtifactPayload) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(id),
            ..Self::insert_model(payload)
        }
    }

    fn filter_condition(filter: &ArtifactSearchFilterDto) -> Condition {
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
        if let Some(artifact_type) = non_empty(&filter.artifact_type) {
            condition = condition.add(Self::type_condition(artifact_type));
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

        condition
    }
}

impl SeriesBoundEntity for Entity {
    type Series = entity::artifact_series::Entity;

    fn series_column() -> Column {
        Column::SeriesId
    }
}
