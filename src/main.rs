use clap::Parser;
use cm_gator::core::render;
use cm_gator::utils::{logger, validation::Validate};
use cm_gator::{AxlClient, CliConfig, LocationReportBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.debug);
    tracing::info!("Starting cm-gator");
    if cli.debug {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    colored::control::set_override(settings.color);

    // One authenticated session for the whole run.
    let client = match AxlClient::new(settings.connection) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Could not set up the AXL client: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let builder = LocationReportBuilder::new(&client, settings.report);
    let reports = builder.build().await;

    print!("{}", render::render_reports(&reports));
    tracing::info!("Report complete: {} locations", reports.len());

    Ok(())
}
