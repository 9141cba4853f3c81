use std::error::Error;
use std::path::{Path, PathBuf};

use dotenv::dotenv;
use tracing::{info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{OUTPUT_DIR, PREVIEW_SIZE};
use crate::distance::matrix::create_dm;
use crate::domain::provinces::{validate, PROVINCES};
use crate::domain::types::FareTable;
use crate::export::csv_export::export_all;
use crate::pricing::derive_all;
use crate::report::{print_banner, print_preview};

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_span_events(fmt::format::FmtSpan::CLOSE))
        .try_init()?;

    Ok(())
}

/// Derive all fare tables from the built-in province table and write them to `output_dir`.
pub fn generate(output_dir: &Path) -> Result<(Vec<FareTable>, Vec<PathBuf>), Box<dyn Error>> {
    validate(&PROVINCES)?;

    let dm = {
        let span = span!(Level::INFO, "distance_matrix");
        let _guard = span.enter();
        create_dm(&PROVINCES)
    };

    let tables = {
        let span = span!(Level::INFO, "derive_fares");
        let _guard = span.enter();
        derive_all(&PROVINCES, &dm)
    };

    let paths = {
        let span = span!(Level::INFO, "export", dir = %output_dir.display());
        let _guard = span.enter();
        export_all(&tables, output_dir)?
    };

    Ok((tables, paths))
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;

    info!(
        "Generating fare matrices for {} provinces into '{}'",
        PROVINCES.len(),
        OUTPUT_DIR
    );

    let (tables, paths) = generate(Path::new(OUTPUT_DIR))?;

    print_banner(&tables, &paths);
    if let Some(bus) = tables.first() {
        print_preview(bus, PREVIEW_SIZE);
    }

    info!("Finished: {} files written", paths.len());
    Ok(())
}
