//! Shortcut reconciliation engine for desktop keybinding configuration
//!
//! This crate provides the core logic behind a shortcut configurator:
//! - GTK-style accelerator parsing with canonical serialization
//! - A binding-store abstraction over the live configuration backend
//! - Conflict detection across all active bindings
//! - Validated, versioned preset profiles stored as TOML
//! - Clean-slate preset application: disable everything in scope, then
//!   apply exactly the preset, leaving protected keys untouched
//! - Key-name classification for grouping shortcuts in a cheat sheet

pub mod accel;
pub mod capability;
pub mod category;
pub mod conflict;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod preset;
pub mod schema;
pub mod store;

// Re-export public types
pub use accel::{canonicalize, Accelerator, Binding, Modifier};
pub use capability::{capability_from, probe_from_env, CaptureCapability};
pub use category::{classify, CategoryRule, Pattern, DEFAULT_CATEGORY, RULES};
pub use conflict::{Conflict, ConflictDetector};
pub use engine::{Phase, ReconcileEngine, ReconciliationResult, WriteFailure};
pub use error::{AccelError, EngineError, PersistenceError, PresetError, StoreError};
pub use persistence::PresetLibrary;
pub use preset::{PresetAssignment, PresetDefinition, PresetDocument, PresetMeta};
pub use schema::{
    SchemaDescriptor, CUSTOM_BINDING_SCHEMA, CUSTOM_PATH_PREFIX, CUSTOM_SCHEMA, KNOWN_SCHEMAS,
};
pub use store::{BindingEntry, BindingStore, EntryId, MemoryStore};
