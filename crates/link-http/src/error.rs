use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkHeaderError {
    #[error("link header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLarge { current_size: usize, max_size: usize },

    #[error("invalid link header value: {reason}")]
    InvalidValue { reason: String },
}

impl LinkHeaderError {
    pub fn too_large(current_size: usize, max_size: usize) -> Self {
        Self::TooLarge { current_size, max_size }
    }

    pub fn invalid_value<S: ToString>(str: S) -> Self {
        Self::InvalidValue { reason: str.to_string() }
    }
}
