// Calendar Grid
// Prints the configured empty template as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;

use calendar_grid::services::settings::SettingsService;
use calendar_grid::{Template, TemplateBuilder};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting calendar-grid");

    let service = match std::env::args_os().nth(1) {
        Some(path) => SettingsService::new(PathBuf::from(path)),
        None => SettingsService::with_default_path(),
    };
    let settings = service.load()?;

    let template: Template<Value> = TemplateBuilder::new()
        .build_from_settings(&settings)
        .with_context(|| format!("Failed to build {} template", settings.view))?;

    let json = serde_json::to_string_pretty(&template).context("Failed to serialize template")?;
    println!("{}", json);
    Ok(())
}
