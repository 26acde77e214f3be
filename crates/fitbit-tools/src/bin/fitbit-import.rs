use activity_core::settings::ImportSettings;
use anyhow::{Context, Result};
use fitbit_tools::{bootstrap, commands};

fn main() -> Result<()> {
    let settings = ImportSettings::load();

    bootstrap::setup_logging(&settings.log.log_level, settings.log.log_file.as_ref())?;
    tracing::info!("fitbit-import v{} starting", env!("CARGO_PKG_VERSION"));

    // The output file is only touched once every export has loaded.
    let store = commands::import_store(&settings)?;

    match &settings.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            commands::write_report(&store, std::io::BufWriter::new(file))?;
        }
        None => {
            commands::write_report(&store, std::io::stdout().lock())?;
        }
    }

    Ok(())
}
