use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Tag identifying one of the five item categories.
///
/// The serialized form doubles as the wire tag the upload collaborator sends
/// and as the directory prefix photos are stored under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Literature,
    Insignia,
    Artifact,
    Equipment,
    MechanicalEquipment,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Literature => "literature",
            Self::Insignia => "insignia",
            Self::Artifact => "artifact",
            Self::Equipment => "equipment",
            Self::MechanicalEquipment => "mechanicalequipment",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MechanicalEquipment => write!(f, "mechanical equipment"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Error returned when an entity-type tag does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownItemKind(pub String);

impl fmt::Display for UnknownItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported entity type: {}", self.0)
    }
}

impl std::error::Error for UnknownItemKind {}

impl FromStr for ItemKind {
    type Err = UnknownItemKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "literature" => Ok(Self::Literature),
            "insignia" => Ok(Self::Insignia),
            "artifact" => Ok(Self::Artifact),
            "equipment" => Ok(Self::Equipment),
            "mechanicalequipment" => Ok(Self::MechanicalEquipment),
            other => Err(UnknownItemKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::ItemKind;

    #[test]
    fn parses_wire_tags_case_insensitively() {
        assert_eq!(
            ItemKind::from_str("Literature").unwrap(),
            ItemKind::Literature
        );
        assert_eq!(
            ItemKind::from_str("mechanicalequipment").unwrap(),
            ItemKind::MechanicalEquipment
        );
    }

    #[test]
    fn rejects_unknown_tags() {
        assert!(ItemKind::from_str("vehicle").is_err());
    }
}
