//! Catalog ingestion for the IIA module planner.
//!
//! This crate turns catalog files into a validated [`Catalog`](iia_model::Catalog):
//!
//! - **Module list**: headerless CSV, `code,name,term,set[,prerequisite]`
//! - **Area list**: headerless CSV, `name,description,codes...`
//! - **Rule book**: TOML mapping area names to eligibility rules, plus an
//!   optional quota policy override
//!
//! A default catalog is embedded in the crate; a catalog directory can be
//! supplied instead (see [`catalog_dir`]).
//!
//! # Example
//!
//! ```ignore
//! use iia_ingest::{CatalogSource, catalog_dir, load};
//!
//! let source = CatalogSource::from_dir(catalog_dir(None));
//! let catalog = load(&source)?;
//! println!("{} modules", catalog.module_count());
//! ```

#![deny(unsafe_code)]

mod embedded;
mod error;
mod loader;
mod paths;
mod records;
mod rules;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use loader::{CatalogSource, load, load_dir, load_embedded};

// === Paths ===
pub use paths::{AREAS_FILE, CATALOG_ENV_VAR, MODULE_LIST_FILE, RULES_FILE, catalog_dir};

// === Record Readers ===
pub use records::{read_area_records, read_module_records};
pub use rules::parse_rule_book;
