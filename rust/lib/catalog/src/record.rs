//! Entity records and the form input that creates or edits them.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// What a record carries besides id, name and order.
///
/// The variant always matches the [`Capability`](crate::Capability) of the
/// record's entity type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Attributes {
    #[default]
    Plain,
    Colored { hex_code: Option<HexColor> },
    SingleParent { parent_id: String },
    MultiAssociated { selected_ids: Vec<String> },
}

impl Attributes {
    pub fn hex_code(&self) -> Option<&HexColor> {
        match self {
            Attributes::Colored { hex_code } => hex_code.as_ref(),
            _ => None,
        }
    }

    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Attributes::SingleParent { parent_id } => Some(parent_id),
            _ => None,
        }
    }

    pub fn selected_ids(&self) -> &[String] {
        match self {
            Attributes::MultiAssociated { selected_ids } => selected_ids,
            _ => &[],
        }
    }
}

/// One row of a reference-data list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordWire", into = "RecordWire")]
pub struct EntityRecord {
    pub id: String,
    pub name: String,
    /// 1-based display position.
    pub order: u32,
    pub attributes: Attributes,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            order,
            attributes: Attributes::Plain,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Flat JSON shape handed to the presentation layer:
/// `{id, name, order, hexCode?, parentId?, selectedIds?}`.
///
/// The capability is not on the wire: a colored record without a color
/// reads back as `Plain`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordWire {
    id: String,
    name: String,
    order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hex_code: Option<HexColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_ids: Option<Vec<String>>,
}

impl From<RecordWire> for EntityRecord {
    fn from(wire: RecordWire) -> Self {
        let attributes = match (wire.hex_code, wire.parent_id, wire.selected_ids) {
            (_, _, Some(selected_ids)) => Attributes::MultiAssociated { selected_ids },
            (_, Some(parent_id), None) => Attributes::SingleParent { parent_id },
            (Some(hex_code), None, None) => Attributes::Colored { hex_code: Some(hex_code) },
            (None, None, None) => Attributes::Plain,
        };
        Self {
            id: wire.id,
            name: wire.name,
            order: wire.order,
            attributes,
        }
    }
}

impl From<EntityRecord> for RecordWire {
    fn from(record: EntityRecord) -> Self {
        let mut wire = RecordWire {
            id: record.id,
            name: record.name,
            order: record.order,
            hex_code: None,
            parent_id: None,
            selected_ids: None,
        };
        match record.attributes {
            Attributes::Plain => {}
            Attributes::Colored { hex_code } => wire.hex_code = hex_code,
            Attributes::SingleParent { parent_id } => wire.parent_id = Some(parent_id),
            Attributes::MultiAssociated { selected_ids } => wire.selected_ids = Some(selected_ids),
        }
        wire
    }
}

/// Raw editor input for add/update. Nothing here is validated yet; fields
/// the entity type does not use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub hex_code: Option<String>,
    pub parent_id: Option<String>,
    pub selected_ids: Vec<String>,
}

impl Draft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, hex_code: impl Into<String>) -> Self {
        self.hex_code = Some(hex_code.into());
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_selection(mut self, selected_ids: Vec<String>) -> Self {
        self.selected_ids = selected_ids;
        self
    }

    /// Pre-fill from an existing record (edit flow).
    pub fn from_record(record: &EntityRecord) -> Self {
        Self {
            name: record.name.clone(),
            hex_code: record.attributes.hex_code().map(|c| c.to_string()),
            parent_id: record.attributes.parent_id().map(str::to_string),
            selected_ids: record.attributes.selected_ids().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat_camel_case() {
        let record = EntityRecord::new("7", "أبيض", 1).with_attributes(Attributes::Colored {
            hex_code: Some(HexColor::parse("#FFFFFF").unwrap()),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"id": "7", "name": "أبيض", "order": 1, "hexCode": "#FFFFFF"}));
    }

    #[test]
    fn plain_record_omits_optional_fields() {
        let value = serde_json::to_value(EntityRecord::new("1", "بنزين", 1)).unwrap();
        assert_eq!(value, json!({"id": "1", "name": "بنزين", "order": 1}));
    }

    #[test]
    fn deserializes_selection() {
        let record: EntityRecord = serde_json::from_value(json!({
            "id": "3", "name": "هجين", "order": 2, "selectedIds": ["1", "2"]
        }))
        .unwrap();
        assert_eq!(record.attributes.selected_ids(), ["1", "2"]);
        assert_eq!(record.attributes.parent_id(), None);
    }

    #[test]
    fn deserializes_parent() {
        let record: EntityRecord = serde_json::from_value(json!({
            "id": "m1", "name": "Camry", "order": 1, "parentId": "toyota"
        }))
        .unwrap();
        assert_eq!(
            record.attributes,
            Attributes::SingleParent { parent_id: "toyota".into() }
        );
    }

    #[test]
    fn deserialize_rejects_bad_color() {
        let result = serde_json::from_value::<EntityRecord>(json!({
            "id": "c1", "name": "x", "order": 1, "hexCode": "white"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn draft_from_record_prefills() {
        let record = EntityRecord::new("f1", "ديزل", 2).with_attributes(Attributes::MultiAssociated {
            selected_ids: vec!["1".into()],
        });
        let draft = Draft::from_record(&record);
        assert_eq!(draft.name, "ديزل");
        assert_eq!(draft.selected_ids, vec!["1".to_string()]);
        assert_eq!(draft.hex_code, None);
        assert_eq!(draft.parent_id, None);
    }
}
