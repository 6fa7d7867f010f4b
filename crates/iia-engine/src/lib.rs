//! Selection engine for the IIA module planner.
//!
//! Owns the only piece of session state, the [`SelectionSet`], and derives
//! everything else from it on every mutation:
//!
//! - [`propagate`] recomputes per-module availability and evicts selections
//!   that are no longer allowed
//! - [`evaluate`] recomputes per-area eligibility
//! - [`SelectionController`] ties both together and publishes
//!   [`ViewState`](iia_model::ViewState) snapshots
//!
//! # Example
//!
//! ```ignore
//! use iia_engine::SelectionController;
//!
//! let catalog = iia_ingest::load_embedded()?;
//! let mut controller = SelectionController::new(&catalog);
//! let view = controller.toggle("3A1");
//! assert!(view.is_available("3A3"));
//! ```

#![deny(unsafe_code)]

mod availability;
mod controller;
mod eligibility;
mod selection;

// === Session ===
pub use controller::SelectionController;
pub use selection::SelectionSet;

// === Recompute Pipeline ===
pub use availability::{Availability, apply_rules, propagate, settle};
pub use eligibility::{Eligibility, evaluate, is_eligible};
