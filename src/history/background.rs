//! Non-blocking history sink
//!
//! Records are handed to a writer thread over an unbounded channel, so the
//! caller never waits on disk I/O. Reads travel through the same channel and
//! therefore see every record queued before them.

use std::thread::{self, JoinHandle};

use chrono::{DateTime, Local};
use crossbeam::channel::{self, Sender};
use tracing::{debug, warn};

use super::HistorySink;

enum Message {
    Record {
        expression: String,
        result: f64,
        at: DateTime<Local>,
    },
    Recent { limit: usize, reply: Sender<Vec<String>> },
}

/// Wraps a sink behind a writer thread
///
/// Dropping the handle closes the channel; the thread writes whatever is
/// still queued and is joined before `drop` returns.
pub struct BackgroundHistory {
    sender: Option<Sender<Message>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundHistory {
    pub fn spawn<S>(sink: S) -> Self
    where
        S: HistorySink + Send + 'static,
    {
        let (sender, receiver) = channel::unbounded::<Message>();
        let worker = thread::Builder::new()
            .name("history-writer".to_string())
            .spawn(move || {
                for message in receiver.iter() {
                    match message {
                        Message::Record {
                            expression,
                            result,
                            at,
                        } => sink.record_at(&expression, result, at),
                        Message::Recent { limit, reply } => {
                            let _ = reply.send(sink.recent(limit));
                        }
                    }
                }
                debug!("history writer finished");
            });

        match worker {
            Ok(handle) => Self {
                sender: Some(sender),
                worker: Some(handle),
            },
            Err(e) => {
                warn!("Could not start history writer: {}", e);
                Self {
                    sender: None,
                    worker: None,
                }
            }
        }
    }
}

impl HistorySink for BackgroundHistory {
    fn record(
        &self,
        expression: &str,
        result: f64,
    ) {
        self.record_at(expression, result, Local::now())
    }

    fn record_at(
        &self,
        expression: &str,
        result: f64,
        at: DateTime<Local>,
    ) {
        let Some(sender) = &self.sender else {
            return;
        };
        let message = Message::Record {
            expression: expression.to_string(),
            result,
            at,
        };
        if sender.send(message).is_err() {
            warn!("History writer has stopped; entry dropped");
        }
    }

    fn recent(
        &self,
        limit: usize,
    ) -> Vec<String> {
        let Some(sender) = &self.sender else {
            return Vec::new();
        };
        let (reply, response) = channel::bounded(1);
        if sender.send(Message::Recent { limit, reply }).is_err() {
            warn!("History writer has stopped");
            return Vec::new();
        }
        response.recv().unwrap_or_default()
    }
}

impl Drop for BackgroundHistory {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("History writer panicked");
            }
        }
    }
}
