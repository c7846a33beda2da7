//! Validation rules shared by the controller and the editor.

use showroom_core::ValidationError;

use crate::association::validate_selection;
use crate::capability::Capability;
use crate::color::HexColor;
use crate::record::{Attributes, Draft};

/// The trimmed name, or `EmptyName`.
pub fn normalized_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Blank color text means "no color".
fn optional_color(text: Option<&str>) -> Result<Option<HexColor>, ValidationError> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(t) => HexColor::parse(t).map(Some),
    }
}

/// Build the record attributes a draft describes for `capability`.
///
/// Fields the capability does not use are ignored.
pub fn attributes_for(capability: &Capability, draft: &Draft) -> Result<Attributes, ValidationError> {
    match capability {
        Capability::Plain => Ok(Attributes::Plain),
        Capability::Colored => Ok(Attributes::Colored {
            hex_code: optional_color(draft.hex_code.as_deref())?,
        }),
        Capability::SingleParent { .. } => {
            let parent_id = draft.parent_id.as_deref().map(str::trim).unwrap_or_default();
            if parent_id.is_empty() {
                return Err(ValidationError::MissingParent);
            }
            Ok(Attributes::SingleParent {
                parent_id: parent_id.to_string(),
            })
        }
        Capability::MultiAssociated { .. } => {
            if !validate_selection(&draft.selected_ids, true) {
                return Err(ValidationError::EmptySelection);
            }
            Ok(Attributes::MultiAssociated {
                selected_ids: draft.selected_ids.clone(),
            })
        }
    }
}

/// Validate a draft: name first, then the capability's fields.
pub fn check(capability: &Capability, draft: &Draft) -> Result<(String, Attributes), ValidationError> {
    let name = normalized_name(&draft.name)?;
    let attributes = attributes_for(capability, draft)?;
    Ok((name, attributes))
}

/// Every failing rule, in the order the form shows them.
pub fn collect_errors(capability: &Capability, draft: &Draft) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if let Err(e) = normalized_name(&draft.name) {
        errors.push(e);
    }
    if let Err(e) = attributes_for(capability, draft) {
        errors.push(e);
    }
    errors
}
