use crate::domain::ports::TransactionSink;
use crate::domain::transaction::TransactionData;
use crate::error::Result;
use async_trait::async_trait;
use std::io::Write;
use tokio::sync::Mutex;

/// Writes each completed transaction as one JSON line.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> TransactionSink for JsonLinesSink<W> {
    async fn emit(&self, transaction: TransactionData) -> Result<()> {
        let mut writer = self.writer.lock().await;
        serde_json::to_writer(&mut *writer, &transaction)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
