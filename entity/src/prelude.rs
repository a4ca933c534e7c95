pub use super::artifact::Entity as Artifact;
pub use super::artifact_series::Entity as ArtifactSeries;
pub use super::equipment::Entity as Equipment;
pub use super::insignia::Entity as Insignia;
pub use super::insignia_series::Entity as InsigniaSeries;
pub use super::literature::Entity as Literature;
pub use super::literature_series::Entity as LiteratureSeries;
pub use super::lookups::artifact_type::Entity as ArtifactType;
pub use super::lookups::author::Entity as Author;
pub use super::lookups::binding_type::Entity as BindingType;
pub use super::lookups::caliber_spec::Entity as CaliberSpec;
pub use super::lookups::equipment_type::Entity as EquipmentType;
pub use super::lookups::era::Entity as Era;
pub use super::lookups::insignia_type::Entity as InsigniaType;
pub use super::lookups::literature_type::Entity as LiteratureType;
pub use super::lookups::manufacturer::Entity as Manufacturer;
pub use super::lookups::material::Entity as Material;
pub use super::lookups::mechanical_equipment_type::Entity as MechanicalEquipmentType;
pub use super::lookups::origin::Entity as Origin;
pub use super::lookups::publisher::Entity as Publisher;
pub use super::mechanical_equipment::Entity as MechanicalEquipment;
pub use super::storage_area::Entity as StorageArea;
