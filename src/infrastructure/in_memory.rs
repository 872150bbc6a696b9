use crate::domain::ports::TransactionSink;
use crate::domain::transaction::TransactionData;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory sink for completed transactions.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// controller and inspect the other. Ideal for testing or embedding where the
/// host polls for results.
#[derive(Default, Clone)]
pub struct InMemorySink {
    completed: Arc<RwLock<Vec<TransactionData>>>,
}

impl InMemorySink {
    /// Creates a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every transaction emitted so far, oldest first.
    pub async fn completed(&self) -> Vec<TransactionData> {
        self.completed.read().await.clone()
    }
}

#[async_trait]
impl TransactionSink for InMemorySink {
    async fn emit(&self, transaction: TransactionData) -> Result<()> {
        let mut completed = self.completed.write().await;
        completed.push(transaction);
        Ok(())
    }
}
