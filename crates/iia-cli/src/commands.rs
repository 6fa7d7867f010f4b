use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info_span, warn};

use iia_cli::shell::run_session;
use iia_cli::summary::{
    areas_table, describe_text, eligibility_table, modules_table, selection_line, view_table,
};
use iia_engine::SelectionController;
use iia_ingest::{CatalogSource, catalog_dir, load};
use iia_model::Catalog;

use crate::cli::{CheckArgs, DescribeArgs, OutputFormatArg};

/// Resolve the catalog source (flag, then environment, then built-in) and
/// load it.
pub fn load_catalog(dir: Option<PathBuf>) -> Result<Catalog> {
    let source = CatalogSource::from_dir(catalog_dir(dir));
    let context = match &source {
        CatalogSource::Embedded => "load built-in catalog".to_string(),
        CatalogSource::Directory(path) => format!("load catalog from {}", path.display()),
    };
    load(&source).context(context)
}

pub fn run_modules(catalog: &Catalog) -> Result<()> {
    println!("{}", modules_table(catalog));
    Ok(())
}

pub fn run_areas(catalog: &Catalog) -> Result<()> {
    println!("{}", areas_table(catalog));
    Ok(())
}

pub fn run_describe(catalog: &Catalog, args: &DescribeArgs) -> Result<()> {
    let controller = SelectionController::new(catalog);
    let Some(description) = controller.describe_area(&args.area) else {
        bail!("unknown area '{}'", args.area);
    };
    println!("{}", describe_text(&description));
    Ok(())
}

pub fn run_check(catalog: &Catalog, args: &CheckArgs) -> Result<()> {
    let span = info_span!("check", codes = args.codes.len());
    let _guard = span.enter();

    let mut controller = SelectionController::new(catalog);
    let mut view = controller.snapshot();
    for code in &args.codes {
        let code = code.trim().to_ascii_uppercase();
        if catalog.modules_with_code(&code).is_empty() {
            warn!(%code, "unknown module code ignored");
        }
        view = controller.toggle(&code);
    }

    match args.format {
        OutputFormatArg::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&view).context("serialize view state")?
            );
        }
        OutputFormatArg::Table => {
            println!("{}", view_table(catalog, &view));
            println!("{}", eligibility_table(&view));
            println!("{}", selection_line(&view));
        }
    }
    Ok(())
}

pub fn run_shell(catalog: &Catalog) -> Result<()> {
    let mut controller = SelectionController::new(catalog);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut controller, stdin.lock(), stdout.lock())
}
