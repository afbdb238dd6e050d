//! Runs gateway calls on worker threads and hands results back to the UI
//! thread over a channel.
//!
//! Requests are never cancelled. When two searches overlap, whichever
//! finishes last is the one the UI shows.

use crate::domain::{Exercise, Quote};
use crate::infrastructure::RemoteGateway;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayEvent {
    Quote(Quote),
    Exercises { query: String, results: Vec<Exercise> },
}

pub struct BackgroundTasks {
    gateway: Arc<RemoteGateway>,
    tx: Sender<GatewayEvent>,
    rx: Receiver<GatewayEvent>,
}

impl BackgroundTasks {
    pub fn new(gateway: Arc<RemoteGateway>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { gateway, tx, rx }
    }

    pub fn request_quote(&self) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(GatewayEvent::Quote(gateway.fetch_daily_quote()));
        });
    }

    pub fn request_exercises(&self, query: &str) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        let query = query.to_string();
        thread::spawn(move || {
            let results = gateway.search_exercises(&query);
            let _ = tx.send(GatewayEvent::Exercises { query, results });
        });
    }

    /// Everything that has arrived so far, without blocking.
    pub fn drain(&self) -> Vec<GatewayEvent> {
        self.rx.try_iter().collect()
    }

    pub fn wait(&self, timeout: Duration) -> Option<GatewayEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::OfflineQuoteSource;

    fn tasks() -> BackgroundTasks {
        BackgroundTasks::new(Arc::new(RemoteGateway::new(
            Box::new(OfflineQuoteSource),
            Duration::ZERO,
        )))
    }

    #[test]
    fn test_quote_request_delivers_fallback() {
        let tasks = tasks();
        tasks.request_quote();

        let event = tasks.wait(Duration::from_secs(5));
        assert_eq!(event, Some(GatewayEvent::Quote(Quote::fallback())));
    }

    #[test]
    fn test_exercise_request_delivers_results() {
        let tasks = tasks();
        tasks.request_exercises("abs");

        match tasks.wait(Duration::from_secs(5)) {
            Some(GatewayEvent::Exercises { query, results }) => {
                assert_eq!(query, "abs");
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].name, "Plank");
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(tasks.drain().is_empty());
    }
}
