//! Editor form state for creating or editing one record.
//!
//! The form shows the fields the entity's [`Capability`] enables, checks
//! them on every change, and keeps the submit button disabled while any
//! rule fails. Candidate lists (parents or selectable items) come from the
//! related collection and get a search field once they grow past the
//! configured threshold.

use showroom_core::{CatalogConfig, CatalogError, ValidationError};
use tracing::debug;

use crate::association::toggle_selection;
use crate::capability::{Capability, EntityConfig};
use crate::controller::ListController;
use crate::messages::Messages;
use crate::record::{Draft, EntityRecord};
use crate::search::filter_by_name;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone)]
pub struct Editor {
    entity: EntityConfig,
    mode: EditorMode,
    name: String,
    hex_code: String,
    parent_id: Option<String>,
    selected_ids: Vec<String>,
    query: String,
    candidates: Vec<EntityRecord>,
    config: CatalogConfig,
    /// Parent the edited record already had. Accepted even when it no
    /// longer resolves.
    initial_parent: Option<String>,
}

impl Editor {
    pub fn create(entity: &EntityConfig, candidates: Vec<EntityRecord>, config: &CatalogConfig) -> Self {
        Self {
            entity: entity.clone(),
            mode: EditorMode::Create,
            name: String::new(),
            hex_code: String::new(),
            parent_id: None,
            selected_ids: Vec::new(),
            query: String::new(),
            candidates,
            config: config.clone(),
            initial_parent: None,
        }
    }

    pub fn edit(
        entity: &EntityConfig,
        record: &EntityRecord,
        candidates: Vec<EntityRecord>,
        config: &CatalogConfig,
    ) -> Self {
        let draft = Draft::from_record(record);
        Self {
            entity: entity.clone(),
            mode: EditorMode::Edit {
                id: record.id.clone(),
            },
            name: draft.name,
            hex_code: draft.hex_code.unwrap_or_default(),
            parent_id: draft.parent_id.clone(),
            selected_ids: draft.selected_ids,
            query: String::new(),
            candidates,
            config: config.clone(),
            initial_parent: draft.parent_id,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn capability(&self) -> &Capability {
        &self.entity.capability
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hex_code(&self) -> &str {
        &self.hex_code
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected_ids
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    // ── Field input ─────────────────────────────────────────────────

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_color(&mut self, hex_code: &str) {
        self.hex_code = hex_code.to_string();
    }

    pub fn select_parent(&mut self, id: &str) {
        self.parent_id = Some(id.to_string());
    }

    /// Tap on a chip. Returns whether `id` is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        toggle_selection(&mut self.selected_ids, id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.iter().any(|s| s == id)
    }

    // ── Candidates ──────────────────────────────────────────────────

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn shows_search(&self) -> bool {
        self.config.wants_search(self.candidates.len())
    }

    /// Candidates to render. The query only applies while the search
    /// field is shown.
    pub fn visible_candidates(&self) -> Vec<&EntityRecord> {
        if self.shows_search() {
            filter_by_name(&self.candidates, &self.query)
        } else {
            self.candidates.iter().collect()
        }
    }

    // ── Validation ──────────────────────────────────────────────────

    /// Current input as a draft, limited to the fields the capability uses.
    pub fn draft(&self) -> Draft {
        let capability = &self.entity.capability;
        Draft {
            name: self.name.clone(),
            hex_code: capability.has_color().then(|| self.hex_code.clone()),
            parent_id: if capability.requires_parent() {
                self.parent_id.clone()
            } else {
                None
            },
            selected_ids: if capability.multi_select() {
                self.selected_ids.clone()
            } else {
                Vec::new()
            },
        }
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        let mut errors = validate::collect_errors(&self.entity.capability, &self.draft());
        if let Some(err) = self.unknown_parent() {
            errors.push(err);
        }
        errors
    }

    pub fn first_error(&self) -> Option<ValidationError> {
        self.errors().into_iter().next()
    }

    /// Alert text for the first failing rule.
    pub fn first_error_message(&self, messages: &Messages) -> Option<String> {
        self.first_error().map(|e| messages.validation(&e))
    }

    pub fn can_submit(&self) -> bool {
        self.errors().is_empty()
    }

    fn unknown_parent(&self) -> Option<ValidationError> {
        if !self.entity.capability.requires_parent() {
            return None;
        }
        let id = self.parent_id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
        if self.initial_parent.as_deref() == Some(id) || self.candidates.iter().any(|c| c.id == id) {
            None
        } else {
            Some(ValidationError::UnknownParent(id.to_string()))
        }
    }

    // ── Submit ──────────────────────────────────────────────────────

    /// Add or update through `controller`. Fields are cleared on success;
    /// on failure the form keeps its input.
    pub fn submit(&mut self, controller: &mut ListController) -> Result<EntityRecord, CatalogError> {
        if let Some(err) = self.first_error() {
            debug!(entity = %self.entity.key, error = %err, "submit blocked");
            return Err(err.into());
        }
        let draft = self.draft();
        let record = match &self.mode {
            EditorMode::Create => controller.add(draft)?,
            EditorMode::Edit { id } => controller.update(id, draft)?,
        };
        self.clear();
        Ok(record)
    }

    /// Empty every input field. Mode and candidates stay.
    pub fn clear(&mut self) {
        self.name.clear();
        self.hex_code.clear();
        self.parent_id = None;
        self.selected_ids.clear();
        self.query.clear();
    }
}
