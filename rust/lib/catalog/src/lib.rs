//! Showroom catalog - ordered reference-data lists for the dealership app.
//!
//! Every admin screen (brands, models, colors, fuel types, ...) manages one
//! ordered collection of named records with the same workflow:
//!
//! - browse the list in `order`
//! - add / edit through an editor form that validates before submit
//! - delete behind a confirmation gate
//! - long-press into sortable mode and reorder by move buttons or drag
//!
//! The screen owns one [`ListController`] per entity type. What a record
//! carries besides its name is decided once per entity type by its
//! [`Capability`]: nothing, a color, one parent, or a set of associated ids.
//!
//! # Example
//!
//! ```ignore
//! use showroom_catalog::{Draft, EntityConfig, ListController};
//! use showroom_core::CatalogConfig;
//!
//! let mut fuels = ListController::new(EntityConfig::fuel_types(), CatalogConfig::default());
//! let diesel = fuels.add(Draft::named("ديزل").with_selection(vec!["camry".into()]))?;
//!
//! fuels.enter_sortable();
//! fuels.move_up(1)?;
//! fuels.exit_sortable();
//! ```

pub mod association;
pub mod capability;
pub mod color;
pub mod controller;
pub mod editor;
pub mod feedback;
pub mod messages;
pub mod record;
pub mod reorder;
pub mod search;
pub mod validate;

pub use association::{resolve_names, resolve_parent_name, toggle_selection, validate_selection};
pub use capability::{Capability, EntityConfig};
pub use color::{HexColor, is_hex_color};
pub use controller::{ListController, ListMode};
pub use editor::{Editor, EditorMode};
pub use feedback::{Feedback, FeedbackEvent, HapticKind, NoFeedback, RecordingFeedback};
pub use messages::{DeletePrompt, Messages};
pub use record::{Attributes, Draft, EntityRecord};
pub use search::{filter_by_name, matches_query};
