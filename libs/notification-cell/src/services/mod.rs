pub mod mailer;
pub mod queue;

pub use mailer::Mailer;
pub use queue::NotificationQueue;
