//! Background worker that performs document loads on the tokio runtime.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::{load, LoadOutcome, LoadRequest};
use crate::extract::DocumentExtractor;

/// Serves [`LoadRequest`]s one at a time.
///
/// Create with [`LoadWorker::new`], then spawn [`run`](Self::run) on the
/// runtime.
pub struct LoadWorker {
    extractor: Arc<dyn DocumentExtractor>,
}

impl LoadWorker {
    pub fn new(extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self { extractor }
    }

    /// Run until `request_rx` is closed.  Requests are processed strictly in
    /// order; each outcome is sent before the next request is read.
    pub async fn run(
        self,
        mut request_rx: mpsc::Receiver<LoadRequest>,
        outcome_tx: mpsc::Sender<LoadOutcome>,
    ) {
        while let Some(request) = request_rx.recv().await {
            log::info!("loader: request #{} ({})", request.id, request.source.label());

            let result = load(self.extractor.as_ref(), &request.source).await;
            if let Err(e) = &result {
                log::warn!("loader: request #{} failed: {e}", request.id);
            }

            let outcome = LoadOutcome {
                id: request.id,
                source: request.source,
                result,
            };
            if outcome_tx.send(outcome).await.is_err() {
                log::debug!("loader: outcome receiver dropped");
                break;
            }
        }

        log::info!("loader: request channel closed, worker shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{ExtractionError, MockExtractor};
    use crate::loader::LoadSource;

    fn spawn_worker(
        extractor: MockExtractor,
    ) -> (mpsc::Sender<LoadRequest>, mpsc::Receiver<LoadOutcome>) {
        let (request_tx, request_rx) = mpsc::channel(4);
        let (outcome_tx, outcome_rx) = mpsc::channel(4);
        let worker = LoadWorker::new(Arc::new(extractor));
        tokio::spawn(worker.run(request_rx, outcome_tx));
        (request_tx, outcome_rx)
    }

    #[tokio::test]
    async fn document_request_yields_script() {
        let (tx, mut rx) = spawn_worker(MockExtractor::pages(&["Alice: Hi\nBob: Yo"]));

        tx.send(LoadRequest {
            id: 1,
            source: LoadSource::Document("scene.pdf".into()),
        })
        .await
        .unwrap();

        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(outcome.id, 1);
        assert_eq!(outcome.result.unwrap().lines(), ["Alice: Hi", "Bob: Yo"]);
    }

    #[tokio::test]
    async fn failed_extraction_is_reported_not_swallowed() {
        let (tx, mut rx) = spawn_worker(MockExtractor::failing(ExtractionError::Parse(
            "truncated".into(),
        )));

        tx.send(LoadRequest {
            id: 7,
            source: LoadSource::Document("broken.pdf".into()),
        })
        .await
        .unwrap();

        let outcome = rx.recv().await.expect("outcome");
        assert_eq!(outcome.id, 7);
        assert_eq!(
            outcome.result.unwrap_err(),
            ExtractionError::Parse("truncated".into())
        );
    }

    #[tokio::test]
    async fn outcomes_arrive_in_request_order() {
        let (tx, mut rx) = spawn_worker(MockExtractor::pages(&["x"]));

        for id in 1..=3 {
            tx.send(LoadRequest {
                id,
                source: LoadSource::Text(format!("line {id}")),
            })
            .await
            .unwrap();
        }

        for id in 1..=3 {
            let outcome = rx.recv().await.expect("outcome");
            assert_eq!(outcome.id, id);
            assert_eq!(outcome.result.unwrap().lines(), [format!("line {id}")]);
        }
    }

    #[tokio::test]
    async fn worker_stops_when_requests_close() {
        let (tx, mut rx) = spawn_worker(MockExtractor::pages(&[]));
        drop(tx);
        assert!(rx.recv().await.is_none());
    }
}
