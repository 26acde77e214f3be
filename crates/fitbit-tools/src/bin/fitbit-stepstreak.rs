use activity_core::settings::StreakSettings;
use anyhow::Result;
use fitbit_tools::{bootstrap, commands};

fn main() -> Result<()> {
    let settings = StreakSettings::load();

    bootstrap::setup_logging(&settings.log.log_level, settings.log.log_file.as_ref())?;
    tracing::info!("fitbit-stepstreak v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Step goal: {}, precedence: {:?}",
        settings.step_goal,
        settings.precedence
    );

    let report = commands::run_streak(&settings)?;
    println!("{}", commands::streak_sentence(&report));

    Ok(())
}
