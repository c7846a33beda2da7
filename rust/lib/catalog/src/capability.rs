//! Per-entity-type configuration.

use serde::{Deserialize, Serialize};

/// What an entity type's records carry besides a name.
///
/// Chosen once per entity type. Association variants name the collection
/// (by entity key) their references point into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Capability {
    Plain,
    Colored,
    SingleParent { parent: String },
    MultiAssociated { selectable: String },
}

impl Capability {
    pub fn has_color(&self) -> bool {
        matches!(self, Capability::Colored)
    }

    pub fn requires_parent(&self) -> bool {
        matches!(self, Capability::SingleParent { .. })
    }

    pub fn multi_select(&self) -> bool {
        matches!(self, Capability::MultiAssociated { .. })
    }

    /// Key of the collection that parent or selection ids refer to.
    pub fn related_key(&self) -> Option<&str> {
        match self {
            Capability::SingleParent { parent } => Some(parent),
            Capability::MultiAssociated { selectable } => Some(selectable),
            _ => None,
        }
    }
}

/// Configuration of one admin list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Stable key (`fuel_types`).
    pub key: String,
    /// Singular display title used in messages (`نوع وقود`).
    pub title: String,
    pub capability: Capability,
}

impl EntityConfig {
    pub fn new(key: &str, title: &str, capability: Capability) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            capability,
        }
    }

    pub fn brands() -> Self {
        Self::new("brands", "ماركة", Capability::Plain)
    }

    pub fn models() -> Self {
        Self::new(
            "models",
            "موديل",
            Capability::SingleParent { parent: "brands".into() },
        )
    }

    pub fn trims() -> Self {
        Self::new(
            "trims",
            "فئة",
            Capability::SingleParent { parent: "models".into() },
        )
    }

    pub fn colors() -> Self {
        Self::new("colors", "لون", Capability::Colored)
    }

    pub fn fuel_types() -> Self {
        Self::new(
            "fuel_types",
            "نوع وقود",
            Capability::MultiAssociated { selectable: "models".into() },
        )
    }

    pub fn transmissions() -> Self {
        Self::new(
            "transmissions",
            "ناقل حركة",
            Capability::MultiAssociated { selectable: "models".into() },
        )
    }

    pub fn drive_types() -> Self {
        Self::new(
            "drive_types",
            "نظام دفع",
            Capability::MultiAssociated { selectable: "models".into() },
        )
    }

    pub fn legal_statuses() -> Self {
        Self::new("legal_statuses", "حالة قانونية", Capability::Colored)
    }

    pub fn customs_statuses() -> Self {
        Self::new("customs_statuses", "حالة جمركية", Capability::Plain)
    }

    pub fn source_classifications() -> Self {
        Self::new("source_classifications", "تصنيف مصدر", Capability::Plain)
    }

    /// Every built-in dealership screen.
    pub fn dealership_presets() -> Vec<Self> {
        vec![
            Self::brands(),
            Self::models(),
            Self::trims(),
            Self::colors(),
            Self::fuel_types(),
            Self::transmissions(),
            Self::drive_types(),
            Self::legal_statuses(),
            Self::customs_statuses(),
            Self::source_classifications(),
        ]
    }
}
