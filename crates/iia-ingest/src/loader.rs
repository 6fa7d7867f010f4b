//! Catalog loading from the embedded data or from a catalog directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use iia_model::{AreaRecord, Catalog, ModuleRecord, RecordKind, RuleBook};

use crate::embedded;
use crate::error::{IngestError, Result};
use crate::paths::{AREAS_FILE, MODULE_LIST_FILE, RULES_FILE};
use crate::records::{read_area_records, read_module_records};
use crate::rules::parse_rule_book;

/// Where a catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary.
    #[default]
    Embedded,
    /// A directory holding `ModuleList.csv`, `Areas.csv`, and optionally
    /// `rules.toml`.
    Directory(PathBuf),
}

impl CatalogSource {
    /// Pick a directory source when one is given, otherwise the embedded one.
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map_or(CatalogSource::Embedded, CatalogSource::Directory)
    }
}

/// Load a catalog from `source`. All-or-nothing: any unreadable file or
/// malformed record aborts the load.
pub fn load(source: &CatalogSource) -> Result<Catalog> {
    match source {
        CatalogSource::Embedded => load_embedded(),
        CatalogSource::Directory(dir) => load_dir(dir),
    }
}

/// Load the embedded IIA catalog.
pub fn load_embedded() -> Result<Catalog> {
    let modules = read_module_records(
        embedded::MODULE_LIST.as_bytes(),
        "embedded ModuleList.csv",
    )?;
    let areas = read_area_records(embedded::AREAS.as_bytes(), "embedded Areas.csv")?;
    let rules = parse_rule_book(embedded::RULES, "embedded rules.toml")?;
    let catalog = build(
        &modules,
        &areas,
        &rules,
        "embedded ModuleList.csv",
        "embedded Areas.csv",
    )?;
    tracing::info!(
        modules = catalog.module_count(),
        areas = catalog.area_count(),
        "loaded embedded catalog"
    );
    Ok(catalog)
}

/// Load a catalog directory.
///
/// `rules.toml` is optional; without it every area uses the default
/// simple-threshold rule and the default policy.
pub fn load_dir(dir: &Path) -> Result<Catalog> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let module_path = dir.join(MODULE_LIST_FILE);
    let area_path = dir.join(AREAS_FILE);
    let rules_path = dir.join(RULES_FILE);

    let modules = read_module_records(open(&module_path)?, &module_path.display().to_string())?;
    let areas = read_area_records(open(&area_path)?, &area_path.display().to_string())?;
    let rules = if rules_path.is_file() {
        let content =
            std::fs::read_to_string(&rules_path).map_err(|source| IngestError::FileRead {
                path: rules_path.clone(),
                source,
            })?;
        parse_rule_book(&content, &rules_path.display().to_string())?
    } else {
        tracing::debug!(path = %rules_path.display(), "no rule book, using defaults");
        RuleBook::default()
    };

    let catalog = build(
        &modules,
        &areas,
        &rules,
        &module_path.display().to_string(),
        &area_path.display().to_string(),
    )?;
    tracing::info!(
        dir = %dir.display(),
        modules = catalog.module_count(),
        areas = catalog.area_count(),
        "loaded catalog"
    );
    Ok(catalog)
}

fn open(path: &Path) -> Result<File> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn build(
    modules: &[ModuleRecord],
    areas: &[AreaRecord],
    rules: &RuleBook,
    module_file: &str,
    area_file: &str,
) -> Result<Catalog> {
    Catalog::from_records(modules, areas, rules).map_err(|source| {
        let file = match source.kind() {
            RecordKind::Module => module_file,
            RecordKind::Area => area_file,
        };
        IngestError::Malformed {
            file: file.to_string(),
            source,
        }
    })
}
