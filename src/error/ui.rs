use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Failed to set up terminal: {source}")]
    TerminalSetup {
        #[source]
        source: std::io::Error,
    },
}
