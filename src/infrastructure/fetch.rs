//! One-shot dataset fetch service.
//!
//! Issues a single HTTP GET for the dataset, decodes and validates the body,
//! and reports the outcome back to the runtime as a raw message. No retry,
//! no polling, no configured timeout: one attempt per application lifetime.

use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    domain::dataset::{Dataset, DatasetError},
};

/// The compiled-in dataset endpoint. Deliberately not configurable: the
/// viewer has no configuration surface for its data source.
pub const DATASET_ENDPOINT: &str =
    "https://run.mocky.io/v3/0deee043-edd8-48d0-add7-9de0a602df0e";

/// Why the fetch failed: the transport, or the payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] DatasetError),
}

/// DatasetService performs the one-shot fetch in a background task.
///
/// It communicates exclusively by message passing; the cancellation token
/// guards against delivering a result after the runner has torn down (state
/// must never be updated past teardown).
pub struct DatasetService {
    url: String,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    cancel_token: CancellationToken,
}

pub type NewDatasetService = (
    CancellationToken, // teardown signal
    DatasetService,
);

impl DatasetService {
    /// Create a new DatasetService targeting `url`.
    pub fn new(url: impl Into<String>, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewDatasetService {
        let cancel_token = CancellationToken::new();
        (
            cancel_token.clone(),
            Self {
                url: url.into(),
                raw_tx,
                cancel_token,
            },
        )
    }

    /// Run the fetch in a background task.
    pub fn run(self) {
        tokio::spawn(async move {
            self.run_service().await;
        });
    }

    async fn run_service(self) {
        tokio::select! {
            // Teardown before the fetch resolves: discard the result silently
            biased;
            _ = self.cancel_token.cancelled() => {
                log::info!("DatasetService cancelled before fetch completed");
            }

            result = Self::fetch(&self.url) => {
                let msg = match result {
                    Ok(dataset) => {
                        log::info!(
                            "fetched dataset: {} rows x {} columns",
                            dataset.row_count(),
                            dataset.column_count()
                        );
                        RawMsg::DatasetLoaded(dataset)
                    }
                    Err(e) => {
                        log::error!("dataset fetch failed: {e}");
                        RawMsg::LoadFailed(e.to_string())
                    }
                };
                // The receiver may already be gone during shutdown
                let _ = self.raw_tx.send(msg);
            }
        }
    }

    /// Perform the GET and decode the response body.
    pub async fn fetch(url: &str) -> Result<Dataset, FetchError> {
        let response = reqwest::get(url).await?.error_for_status()?;
        let body = response.text().await?;
        Ok(Dataset::from_json(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let decode = FetchError::Decode(DatasetError::RowCountMismatch { labels: 2, rows: 1 });
        assert_eq!(
            decode.to_string(),
            "decode error: dataset has 2 row labels but 1 data rows"
        );
    }

    #[tokio::test]
    async fn test_cancelled_service_sends_nothing() {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        // Unroutable address so the fetch can never resolve first
        let (cancel_token, service) = DatasetService::new("http://192.0.2.1/dataset", raw_tx);

        cancel_token.cancel();
        service.run_service().await;

        assert!(raw_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_send_after_receiver_drop_is_silent() {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        drop(raw_rx);

        // Must not panic even though the receiver is gone
        let _ = raw_tx.send(RawMsg::LoadFailed("late result".to_string()));
    }
}
