use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use reader_logging::reader_info;

use crate::fetch::{FetchSettings, HeadlinesFetcher, NewsApiConfig, ReqwestHeadlinesFetcher};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    FetchHeadlines {
        request_id: RequestId,
        category: Option<String>,
    },
}

/// Bridge between the UI-driven caller and the async fetcher.
///
/// Commands are executed on a background thread owning a tokio runtime; a new
/// command does not cancel an in-flight one, so results may complete out of
/// order. Each event echoes the request id it belongs to.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: NewsApiConfig, settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestHeadlinesFetcher::new(config, settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn enqueue_fetch(&self, request_id: RequestId, category: Option<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchHeadlines {
            request_id,
            category,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|event_rx| event_rx.try_recv().ok())
    }
}

async fn handle_command(
    fetcher: &dyn HeadlinesFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchHeadlines {
            request_id,
            category,
        } => {
            reader_info!(
                "FetchHeadlines request_id={} category={}",
                request_id,
                category.as_deref().unwrap_or("all")
            );
            let result = fetcher.fetch_headlines(category.as_deref()).await;
            let _ = event_tx.send(EngineEvent::HeadlinesFetched { request_id, result });
        }
    }
}
