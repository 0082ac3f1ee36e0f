use core::fmt::{Display, Formatter, Result as FmtResult};
use ::serde::de::Error as DeError;

/// The error of the native deserializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerdeError {
    /// Message
    pub msg: String,
}

impl Display for SerdeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for SerdeError {}

impl DeError for SerdeError {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Self {
            msg: msg.to_string(),
        }
    }
}
