//! Data model for IIA module selection.
//!
//! - [`Catalog`]: immutable store of [`Module`]s and [`Area`]s, built from raw
//!   [`ModuleRecord`] / [`AreaRecord`] rows and a [`RuleBook`]
//! - [`AreaRule`]: the closed set of area eligibility predicates
//! - [`SelectionPolicy`]: per-term and management quotas
//! - [`ViewState`]: snapshot handed to presentation layers

#![deny(unsafe_code)]

pub mod area;
pub mod catalog;
pub mod error;
pub mod module;
pub mod policy;
pub mod term;
pub mod view;

pub use area::{Area, AreaId, AreaRecord, AreaRule, RuleBook};
pub use catalog::Catalog;
pub use error::{MalformedRecordError, RecordKind, Result};
pub use module::{Module, ModuleId, ModuleRecord};
pub use policy::SelectionPolicy;
pub use term::Term;
pub use view::{AreaDescription, AreaState, ModuleState, ViewState};
