use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("cannot encode task list: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("encoded task list is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("no task id left after {0}")]
    IdsExhausted(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::messages::Message;

    #[test]
    fn io_error_is_reported_once() {
        let error = StoreError::from(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        let text = Message::TaskFileWriteFailed(error.to_string()).to_string();

        assert_eq!(text, "Failed to write task file: permission denied");
    }
}
