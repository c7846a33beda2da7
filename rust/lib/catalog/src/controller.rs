//! List controller: the canonical ordered collection for one entity type.
//!
//! A screen holds one controller per entity type. All mutations go through
//! it so ids stay unique and `order` stays consistent with the configured
//! [`DeletePolicy`].
//!
//! ## Modes
//!
//! ```text
//!            enter_sortable (long-press)
//!  Browsing ─────────────────────────────▶ Sortable
//!     ▲                                       │
//!     └────────────── exit_sortable ──────────┘
//! ```
//!
//! Update and delete need `Browsing`. Moves and `reorder` need `Sortable`.
//! `add` works in either mode.

use std::collections::HashSet;
use std::sync::Arc;

use showroom_core::{CatalogConfig, CatalogError, ClockIds, DeletePolicy, IdSource};
use tracing::{debug, info, warn};

use crate::association::{resolve_names, resolve_parent_name};
use crate::capability::{Capability, EntityConfig};
use crate::editor::Editor;
use crate::feedback::{Feedback, HapticKind, NoFeedback};
use crate::messages::{DeletePrompt, Messages};
use crate::record::{Draft, EntityRecord};
use crate::reorder;
use crate::search::filter_by_name;
use crate::validate;

/// Draws from the id source before `add` gives up.
const MAX_ID_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Browsing,
    Sortable,
}

impl ListMode {
    pub fn label(&self) -> &'static str {
        match self {
            ListMode::Browsing => "browsing",
            ListMode::Sortable => "sortable",
        }
    }
}

pub struct ListController {
    entity: EntityConfig,
    config: CatalogConfig,
    records: Vec<EntityRecord>,
    mode: ListMode,
    pending_delete: Option<String>,
    ids: Arc<dyn IdSource>,
    feedback: Arc<dyn Feedback>,
    messages: Messages,
}

impl ListController {
    /// Empty list in `Browsing` mode with clock ids and no feedback.
    pub fn new(entity: EntityConfig, config: CatalogConfig) -> Self {
        let messages = Messages::new(&config.locale);
        Self {
            entity,
            config,
            records: Vec::new(),
            mode: ListMode::Browsing,
            pending_delete: None,
            ids: Arc::new(ClockIds::new()),
            feedback: Arc::new(NoFeedback),
            messages,
        }
    }

    /// Seed the collection (e.g. from a saved snapshot). Records are kept
    /// sorted by `order`; equal orders keep their relative position. A
    /// repeated id keeps its first record only. Under
    /// [`DeletePolicy::Renumber`] orders are renumbered to `1..N`.
    pub fn with_records(mut self, records: Vec<EntityRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut records: Vec<EntityRecord> = records
            .into_iter()
            .filter(|r| {
                let fresh = seen.insert(r.id.clone());
                if !fresh {
                    warn!(entity = %self.entity.key, id = %r.id, "dropping seeded record with repeated id");
                }
                fresh
            })
            .collect();
        records.sort_by_key(|r| r.order);
        if self.config.delete_policy == DeletePolicy::Renumber {
            reorder::renumber(&mut records);
        }
        self.records = records;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_feedback(mut self, feedback: Arc<dyn Feedback>) -> Self {
        self.feedback = feedback;
        self
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn entity(&self) -> &EntityConfig {
        &self.entity
    }

    pub fn capability(&self) -> &Capability {
        &self.entity.capability
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    /// Records in array order.
    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }

    /// Records sorted by `order`. Ties keep array order.
    pub fn ordered(&self) -> Vec<&EntityRecord> {
        let mut out: Vec<&EntityRecord> = self.records.iter().collect();
        out.sort_by_key(|r| r.order);
        out
    }

    pub fn get(&self, id: &str) -> Option<&EntityRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose name matches `query`, in display order.
    pub fn search(&self, query: &str) -> Vec<&EntityRecord> {
        filter_by_name(self.ordered(), query)
    }

    /// Secondary line for a row: the parent name or the joined names of the
    /// associated records. `related` is the collection the capability points
    /// into. Empty when nothing resolves.
    pub fn label_for(&self, record: &EntityRecord, related: &[EntityRecord]) -> String {
        match &self.entity.capability {
            Capability::SingleParent { .. } => record
                .attributes
                .parent_id()
                .and_then(|id| resolve_parent_name(id, related))
                .unwrap_or_default()
                .to_string(),
            Capability::MultiAssociated { .. } => resolve_names(
                record.attributes.selected_ids(),
                related,
                &self.config.list_separator,
            ),
            Capability::Plain | Capability::Colored => String::new(),
        }
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Validate `draft` and append a new record at the end of the list.
    pub fn add(&mut self, draft: Draft) -> Result<EntityRecord, CatalogError> {
        let (name, attributes) = validate::check(&self.entity.capability, &draft).map_err(|e| {
            debug!(entity = %self.entity.key, error = %e, "add rejected");
            e
        })?;

        let id = self.fresh_id()?;
        let order = self.next_order();
        let record = EntityRecord {
            id,
            name,
            order,
            attributes,
        };
        self.records.push(record.clone());

        info!(entity = %self.entity.key, id = %record.id, order, "record added");
        self.feedback.toast(&self.messages.added(&self.entity.title));
        Ok(record)
    }

    /// Replace name and capability fields of an existing record.
    /// `id` and `order` never change.
    pub fn update(&mut self, id: &str, draft: Draft) -> Result<EntityRecord, CatalogError> {
        self.require_mode(ListMode::Browsing, "update")?;
        let idx = self
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        let (name, attributes) = validate::check(&self.entity.capability, &draft).map_err(|e| {
            debug!(entity = %self.entity.key, id, error = %e, "update rejected");
            e
        })?;

        let record = &mut self.records[idx];
        record.name = name;
        record.attributes = attributes;
        let updated = record.clone();

        info!(entity = %self.entity.key, id, "record updated");
        self.feedback.toast(&self.messages.updated(&self.entity.title));
        Ok(updated)
    }

    /// Remove a record. Returns `false` when the id is already gone.
    pub fn delete(&mut self, id: &str) -> Result<bool, CatalogError> {
        self.require_mode(ListMode::Browsing, "delete")?;
        let Some(idx) = self.position(id) else {
            debug!(entity = %self.entity.key, id, "delete of missing record ignored");
            return Ok(false);
        };

        self.records.remove(idx);
        if self.config.delete_policy == DeletePolicy::Renumber {
            reorder::renumber(&mut self.records);
        }
        if self.pending_delete.as_deref() == Some(id) {
            self.pending_delete = None;
        }

        info!(entity = %self.entity.key, id, remaining = self.records.len(), "record deleted");
        self.feedback.toast(&self.messages.deleted(&self.entity.title));
        Ok(true)
    }

    // ── Delete confirmation ─────────────────────────────────────────

    /// Ask for confirmation before deleting `id`. Returns the record that
    /// would be deleted so the dialog can show its name.
    pub fn request_delete(&mut self, id: &str) -> Result<&EntityRecord, CatalogError> {
        self.require_mode(ListMode::Browsing, "delete")?;
        let idx = self
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.pending_delete = Some(id.to_string());
        debug!(entity = %self.entity.key, id, "delete awaiting confirmation");
        Ok(&self.records[idx])
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Dialog text for the pending delete, if any.
    pub fn delete_prompt(&self) -> Option<DeletePrompt> {
        let record = self.get(self.pending_delete.as_deref()?)?;
        Some(self.messages.delete_prompt(&self.entity.title, &record.name))
    }

    /// Delete the pending record.
    pub fn confirm_delete(&mut self) -> Result<bool, CatalogError> {
        let id = self.pending_delete.take().ok_or(CatalogError::NothingPending)?;
        self.delete(&id)
    }

    pub fn cancel_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            debug!(entity = %self.entity.key, id = %id, "delete cancelled");
        }
    }

    // ── Sortable mode ───────────────────────────────────────────────

    /// Long-press on the list.
    pub fn enter_sortable(&mut self) {
        if self.mode == ListMode::Sortable {
            return;
        }
        self.mode = ListMode::Sortable;
        self.pending_delete = None;
        self.feedback.haptic(HapticKind::LongPress);
        debug!(entity = %self.entity.key, "entered sortable mode");
    }

    pub fn exit_sortable(&mut self) {
        if self.mode == ListMode::Browsing {
            return;
        }
        self.mode = ListMode::Browsing;
        debug!(entity = %self.entity.key, "left sortable mode");
    }

    pub fn move_up(&mut self, index: usize) -> Result<&[EntityRecord], CatalogError> {
        self.require_mode(ListMode::Sortable, "move")?;
        let moved = reorder::move_up(&self.records, index);
        self.apply_move(moved, false);
        Ok(&self.records)
    }

    pub fn move_down(&mut self, index: usize) -> Result<&[EntityRecord], CatalogError> {
        self.require_mode(ListMode::Sortable, "move")?;
        let moved = reorder::move_down(&self.records, index);
        self.apply_move(moved, false);
        Ok(&self.records)
    }

    /// Drag-and-drop of the row at `from` onto position `to`.
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<&[EntityRecord], CatalogError> {
        self.require_mode(ListMode::Sortable, "move")?;
        let moved = reorder::move_to(&self.records, from, to);
        self.apply_move(moved, true);
        Ok(&self.records)
    }

    /// Accept a full new arrangement and renumber by position.
    ///
    /// `arrangement` must hold every current id exactly once. Only the ids
    /// are read; stored fields win over whatever the caller passed.
    pub fn reorder(&mut self, arrangement: &[EntityRecord]) -> Result<&[EntityRecord], CatalogError> {
        self.require_mode(ListMode::Sortable, "reorder")?;
        if arrangement.len() != self.records.len() {
            warn!(
                entity = %self.entity.key,
                expected = self.records.len(),
                got = arrangement.len(),
                "reorder length mismatch"
            );
            return Err(CatalogError::InvalidPermutation(format!(
                "expected {} records, got {}",
                self.records.len(),
                arrangement.len()
            )));
        }

        let mut seen = HashSet::with_capacity(arrangement.len());
        let mut next = Vec::with_capacity(arrangement.len());
        for item in arrangement {
            if !seen.insert(item.id.as_str()) {
                warn!(entity = %self.entity.key, id = %item.id, "reorder repeats an id");
                return Err(CatalogError::InvalidPermutation(format!("duplicate id '{}'", item.id)));
            }
            let stored = self.get(&item.id).ok_or_else(|| {
                warn!(entity = %self.entity.key, id = %item.id, "reorder names an unknown id");
                CatalogError::InvalidPermutation(format!("unknown id '{}'", item.id))
            })?;
            next.push(stored.clone());
        }

        reorder::renumber(&mut next);
        self.records = next;
        info!(entity = %self.entity.key, count = self.records.len(), "records reordered");
        self.feedback.toast(&self.messages.reordered());
        Ok(&self.records)
    }

    // ── Editors ─────────────────────────────────────────────────────

    /// Empty editor for a new record. `candidates` is the related
    /// collection for association types; pass `&[]` otherwise.
    pub fn open_create(&self, candidates: &[EntityRecord]) -> Editor {
        Editor::create(&self.entity, candidates.to_vec(), &self.config)
    }

    /// Editor pre-filled from the record `id`.
    pub fn open_edit(&self, id: &str, candidates: &[EntityRecord]) -> Result<Editor, CatalogError> {
        let record = self
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        Ok(Editor::edit(
            &self.entity,
            record,
            candidates.to_vec(),
            &self.config,
        ))
    }

    // ── Internals ───────────────────────────────────────────────────

    fn require_mode(&self, wanted: ListMode, operation: &'static str) -> Result<(), CatalogError> {
        if self.mode == wanted {
            return Ok(());
        }
        debug!(entity = %self.entity.key, operation, mode = self.mode.label(), "operation blocked by mode");
        Err(CatalogError::WrongMode {
            operation,
            mode: self.mode.label(),
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// `count + 1` on a contiguous list. Past the highest order when gaps
    /// are kept, so orders stay unique.
    fn next_order(&self) -> u32 {
        let highest = self.records.iter().map(|r| r.order).max().unwrap_or(0);
        highest.max(self.records.len() as u32) + 1
    }

    fn fresh_id(&self) -> Result<String, CatalogError> {
        let mut last = String::new();
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.position(&id).is_none() {
                return Ok(id);
            }
            warn!(entity = %self.entity.key, id = %id, "id source returned a taken id");
            last = id;
        }
        Err(CatalogError::IdCollision(last))
    }

    /// A move that leaves the id sequence as it was changes nothing, not
    /// even gapped orders.
    fn apply_move(&mut self, moved: Vec<EntityRecord>, drop: bool) {
        if moved.iter().map(|r| &r.id).eq(self.records.iter().map(|r| &r.id)) {
            return;
        }
        self.records = moved;
        self.feedback.haptic(HapticKind::Move);
        debug!(entity = %self.entity.key, "record moved");
        if drop {
            self.feedback.toast(&self.messages.reordered());
        }
    }
}
