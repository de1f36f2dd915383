use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AstError {
    // Construction errors
    #[error("{node} at line {line} is missing its {slot}")]
    MissingChild {
        node: &'static str,
        slot: String,
        line: usize,
    },

    #[error("tokens do not match the {sample} sample: expected {expected}, found {found}")]
    SampleMismatch {
        sample: String,
        expected: String,
        found: String,
    },

    // Rendering errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("rendered tree is not valid UTF-8: {0}")]
    Utf8Error(#[from] FromUtf8Error),
}

impl AstError {
    /// Create a missing-child error for the node anchored at `line`
    pub fn missing_child(node: &'static str, slot: impl Into<String>, line: usize) -> Self {
        AstError::MissingChild {
            node,
            slot: slot.into(),
            line,
        }
    }
}

// Type alias for Result with AstError
pub type AstResult<T> = Result<T, AstError>;

// Helper trait for turning an absent child slot into a construction error
pub trait Required<T> {
    fn required(self, node: &'static str, slot: &str, line: usize) -> AstResult<T>;
}

impl<T> Required<T> for Option<T> {
    fn required(self, node: &'static str, slot: &str, line: usize) -> AstResult<T> {
        self.ok_or_else(|| AstError::missing_child(node, slot, line))
    }
}
