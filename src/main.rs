use checkout_wizard::application::config::{CheckoutConfig, UnknownCategoryPolicy};
use checkout_wizard::application::controller::CheckoutController;
use checkout_wizard::domain::locale::Locale;
use checkout_wizard::infrastructure::json_lines::JsonLinesSink;
use checkout_wizard::infrastructure::logging::init_tracing;
use checkout_wizard::infrastructure::simulated_auth::{DEFAULT_DELAY, SimulatedAuthenticator};
use checkout_wizard::infrastructure::static_catalog::StaticCatalog;
use checkout_wizard::interfaces::script::event_reader::ScriptReader;
use checkout_wizard::interfaces::script::runner::ScriptRunner;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Checkout script: one JSON event per line
    input: PathBuf,

    /// Insert the authentication step after payment
    #[arg(long)]
    with_auth: bool,

    /// Reject providers with an unrecognised category instead of showing the airtime form
    #[arg(long)]
    strict_categories: bool,

    /// Initial locale key
    #[arg(long, default_value = "en")]
    locale: String,

    /// Simulated authentication delay in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    auth_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing("info");

    let policy = if cli.strict_categories {
        UnknownCategoryPolicy::Reject
    } else {
        UnknownCategoryPolicy::Fallback
    };
    let config = CheckoutConfig::default()
        .with_auth_step(cli.with_auth)
        .with_unknown_category(policy)
        .with_default_locale(Locale::new(cli.locale));

    // Completed transactions go to stdout, logs to stderr
    let sink = JsonLinesSink::new(io::stdout());
    let mut controller = CheckoutController::new(config, Box::new(sink));

    let catalog = StaticCatalog::new();
    let authenticator = SimulatedAuthenticator::new(Duration::from_millis(cli.auth_delay_ms));
    let runner = ScriptRunner::new(&catalog, &authenticator);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ScriptReader::new(file);
    for (line, command) in reader.commands() {
        match command {
            Ok(command) => {
                if let Err(e) = runner.run(&mut controller, command).await {
                    error!(line, "Error processing event: {}", e);
                }
            }
            Err(e) => {
                error!(line, "Error reading event: {}", e);
            }
        }
    }

    Ok(())
}
