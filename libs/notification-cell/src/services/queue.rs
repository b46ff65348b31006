use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use shared_config::AppConfig;

use crate::models::EmailMessage;
use crate::services::mailer::Mailer;

pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Sending half of the outgoing email queue.
///
/// Enqueueing never waits: when the queue is full or the worker is gone the
/// message is dropped and a warning is logged.
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    sender: mpsc::Sender<EmailMessage>,
}

impl NotificationQueue {
    /// Bare queue without a worker. The caller owns the receiving half.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<EmailMessage>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Creates the queue and spawns the worker that delivers through [`Mailer`].
    pub fn start(config: Arc<AppConfig>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (queue, receiver) = Self::channel(capacity);
        let mailer = Mailer::new(&config);

        if !mailer.is_configured() {
            warn!("Email sender not configured, notifications will fail and be logged");
        }

        let handle = tokio::spawn(run_worker(mailer, receiver));
        (queue, handle)
    }

    pub fn enqueue(&self, message: EmailMessage) -> bool {
        match self.sender.try_send(message) {
            Ok(()) => true,
            Err(TrySendError::Full(message)) => {
                warn!("Notification queue full, dropping email {} to {}", message.id, message.to);
                false
            }
            Err(TrySendError::Closed(message)) => {
                warn!("Notification worker stopped, dropping email {} to {}", message.id, message.to);
                false
            }
        }
    }
}

/// Drains the queue until every sender is dropped. Failures are logged, never retried.
pub async fn run_worker(mailer: Mailer, mut receiver: mpsc::Receiver<EmailMessage>) {
    info!("Notification worker started");

    while let Some(message) = receiver.recv().await {
        match mailer.send(&message).await {
            Ok(()) => info!("Email {} delivered to {}", message.id, message.to),
            Err(e) => error!("Failed to send email {} to {}: {}", message.id, message.to, e),
        }
    }

    info!("Notification worker stopped");
}
