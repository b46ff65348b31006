use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Email sender is not configured")]
    NotConfigured,

    #[error("Email request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}
