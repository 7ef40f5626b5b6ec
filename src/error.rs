pub type EnhanceResult<T> = Result<T, EnhanceError>;

/// everything that can end an upload, enhancement or download attempt
#[derive(thiserror::Error, Debug)]
pub enum EnhanceError {
    #[error("no image selected")]
    NoFileSelected,

    /// the service answered with a non-success status and a readable message
    #[error("service error: {0}")]
    Service(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("settings error: {0}")]
    Settings(String),
}

impl EnhanceError {
    /// text shown in the blocking alert
    pub fn user_message(&self) -> String {
        match self {
            EnhanceError::NoFileSelected => "Please upload an image first.".to_owned(),
            EnhanceError::Service(msg) => format!("Error: {msg}"),
            EnhanceError::Transport(msg) | EnhanceError::MalformedResponse(msg) => {
                format!("An error occurred: {msg}")
            }
            EnhanceError::Io(e) => format!("An error occurred: {e}"),
            EnhanceError::Settings(msg) => format!("An error occurred: {msg}"),
        }
    }
}

impl From<reqwest::Error> for EnhanceError {
    fn from(e: reqwest::Error) -> Self {
        EnhanceError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_texts_are_stable() {
        assert_eq!(
            EnhanceError::NoFileSelected.user_message(),
            "Please upload an image first."
        );
        assert_eq!(
            EnhanceError::Service("bad format".into()).user_message(),
            "Error: bad format"
        );
        assert_eq!(
            EnhanceError::Transport("connection refused".into()).user_message(),
            "An error occurred: connection refused"
        );
        assert!(EnhanceError::MalformedResponse("x".into())
            .user_message()
            .starts_with("An error occurred: "));
    }

    #[test]
    fn io_errors_convert() {
        let err: EnhanceError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.user_message(), "An error occurred: gone");
    }
}
