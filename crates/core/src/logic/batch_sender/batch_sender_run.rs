use crate::prelude::*;

use futures::{stream, StreamExt};

impl<B: TransactionBuilder> BatchSender<B> {
    /// Submits one transfer per recipient and records every outcome.
    ///
    /// At most `max_in_flight` submissions are awaited at once, with the
    /// default of one the next transfer is only built after the previous one
    /// was answered. Records always come back in recipient order.
    pub async fn send_all(&self, recipients: &[RecipientAddress]) -> Vec<SubmissionRecord> {
        let total = recipients.len();
        let records = stream::iter(recipients.iter().enumerate())
            .map(|(index, address)| self.send_one(index, total, address))
            .buffered(self.max_in_flight().get())
            .collect::<Vec<_>>()
            .await;

        let succeeded = records.iter().filter(|r| r.is_success()).count();
        info!(
            "Batch done: {succeeded} of {total} transfers submitted, {} failed",
            total - succeeded
        );
        records
    }

    async fn send_one(
        &self,
        index: usize,
        total: usize,
        address: &RecipientAddress,
    ) -> SubmissionRecord {
        info!("[{}/{total}] Attempting to send to: {address}", index + 1);
        let msg = self
            .transaction_builder()
            .send(&address.normalized(), self.amount());
        match self.transaction_builder().submit(self.memo(), msg).await {
            Ok(response) => {
                debug!("Sent to {address}, tx hash {}", response.tx_hash());
                SubmissionRecord::submitted(address.clone(), response.tx_hash())
            }
            Err(e) => {
                warn!("Failed to send to {address}: {e}");
                SubmissionRecord::failed(address.clone(), e.to_string())
            }
        }
    }
}
