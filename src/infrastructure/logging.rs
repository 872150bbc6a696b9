use crate::domain::ports::TransactionSink;
use crate::domain::transaction::TransactionData;
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Logs completed transactions instead of submitting them anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

#[async_trait]
impl TransactionSink for LoggingSink {
    async fn emit(&self, transaction: TransactionData) -> Result<()> {
        let payload = serde_json::to_string(&transaction)?;
        info!(transaction = %payload, "Payment submitted");
        Ok(())
    }
}

/// Initializes the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` overrides `default_directives`.
pub fn init_tracing(default_directives: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
