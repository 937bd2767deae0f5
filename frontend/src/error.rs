use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("browser document is not available")]
    NoDocument,

    #[error("could not attach `{event}` listener: {detail}")]
    Listener { event: &'static str, detail: String },
}
