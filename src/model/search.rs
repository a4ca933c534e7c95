use serde::{Deserialize, Serialize};

use crate::model::{
    artifact::ArtifactDto, equipment::EquipmentDto, insignia::InsigniaDto,
    literature::LiteratureDto, mechanical_equipment::MechanicalEquipmentDto,
};

/// Composite result of a free-text search fanned out across every item
/// category. A category with no matches contributes an empty list, never an
/// error.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SimpleSearchResultsDto {
    pub literatures: Vec<LiteratureDto>,
    pub artifacts: Vec<ArtifactDto>,
    pub insignias: Vec<InsigniaDto>,
    pub equipment: Vec<EquipmentDto>,
    pub mechanical_equipment: Vec<MechanicalEquipmentDto>,
}
