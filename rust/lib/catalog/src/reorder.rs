//! Reorder engine: pure moves over a record list.
//!
//! Every function takes the current arrangement and returns a new one.
//! Records keep their id and attributes; only position and `order` change.
//! After an effective move the whole list is renumbered by position.

use crate::record::EntityRecord;

/// Set `order = position + 1` for every record.
pub fn renumber(records: &mut [EntityRecord]) {
    for (i, record) in records.iter_mut().enumerate() {
        record.order = i as u32 + 1;
    }
}

/// Swap the record at `index` with the one above it.
///
/// `index == 0` (or out of range) returns the input unchanged.
pub fn move_up(records: &[EntityRecord], index: usize) -> Vec<EntityRecord> {
    if index == 0 || index >= records.len() {
        return records.to_vec();
    }
    let mut out = records.to_vec();
    out.swap(index - 1, index);
    renumber(&mut out);
    out
}

/// Swap the record at `index` with the one below it.
///
/// The last index (or out of range) returns the input unchanged.
pub fn move_down(records: &[EntityRecord], index: usize) -> Vec<EntityRecord> {
    if index + 1 >= records.len() {
        return records.to_vec();
    }
    let mut out = records.to_vec();
    out.swap(index, index + 1);
    renumber(&mut out);
    out
}

/// Drag-and-drop: remove the record at `from` and insert it at `to`.
///
/// `to` is an index into the list after removal and is clamped to its end.
/// Out-of-range `from` returns the input unchanged.
pub fn move_to(records: &[EntityRecord], from: usize, to: usize) -> Vec<EntityRecord> {
    if from >= records.len() {
        return records.to_vec();
    }
    let mut out = records.to_vec();
    let dragged = out.remove(from);
    let to = to.min(out.len());
    out.insert(to, dragged);
    renumber(&mut out);
    out
}
