//! Resolving record references into display names.
//!
//! References are plain ids into another collection. Deleting a record in
//! that collection does not cascade, so ids may dangle; dangling ids are
//! skipped silently.

use std::collections::HashMap;

use crate::record::EntityRecord;

/// Join the names of `selected_ids` found in `selectable`, in input order.
///
/// Ids with no match are dropped. Returns an empty string when nothing
/// resolves.
pub fn resolve_names(selected_ids: &[String], selectable: &[EntityRecord], separator: &str) -> String {
    let by_id: HashMap<&str, &str> = selectable
        .iter()
        .map(|r| (r.id.as_str(), r.name.as_str()))
        .collect();

    selected_ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Name of the parent record, if it still exists.
pub fn resolve_parent_name<'a>(parent_id: &str, parents: &'a [EntityRecord]) -> Option<&'a str> {
    parents
        .iter()
        .find(|p| p.id == parent_id)
        .map(|p| p.name.as_str())
}

/// `true` iff the selection is optional or non-empty.
pub fn validate_selection(selected_ids: &[String], required: bool) -> bool {
    !required || !selected_ids.is_empty()
}

/// Chip toggle: remove `id` if selected, append it otherwise.
///
/// Returns whether `id` is selected afterwards.
pub fn toggle_selection(selected_ids: &mut Vec<String>, id: &str) -> bool {
    let before = selected_ids.len();
    selected_ids.retain(|s| s != id);
    if selected_ids.len() == before {
        selected_ids.push(id.to_string());
        true
    } else {
        false
    }
}
