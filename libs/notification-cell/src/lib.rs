pub mod error;
pub mod models;
pub mod services;

pub use error::MailerError;
pub use models::EmailMessage;
pub use services::{Mailer, NotificationQueue};
