use crate::*;
use core::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error;

/// Result type used by the conversion functions.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Description of a node in a node tree, one step of an error trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDescription {
    /// Key of a map entry, or the position of a sequence element.
    pub name: String,
    /// Human readable label of the type that was being parsed, may be empty.
    pub user_type: String,
    /// The actual kind of the node.
    pub kind: NodeKind,
    /// True if `name` is a sequence position.
    pub indexed: bool,
}

impl NodeDescription {
    /// Describe a map entry.
    pub fn key(name: impl Into<String>, user_type: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            user_type: user_type.into(),
            kind,
            indexed: false,
        }
    }

    /// Describe a sequence element.
    pub fn index(index: usize, kind: NodeKind) -> Self {
        Self {
            name: index.to_string(),
            user_type: String::new(),
            kind,
            indexed: true,
        }
    }
}

impl Display for NodeDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.indexed {
            write!(f, "[{}]", self.name)?;
        } else {
            f.write_str(&self.name)?;
        }
        if !self.user_type.is_empty() {
            write!(f, " ({})", self.user_type)?;
        }
        Ok(())
    }
}

/// The reason of a conversion failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The node is not of the kind the converter requires.
    #[error("unexpected node type, expected {expected}, got {actual}")]
    KindMismatch {
        /// Required kind.
        expected: NodeKind,
        /// Kind of the node.
        actual: NodeKind,
    },
    /// A sequence or map has the wrong number of children.
    #[error("wrong number of elements, expected {expected}, got {actual}")]
    SizeMismatch {
        /// Required size.
        expected: usize,
        /// Size of the node.
        actual: usize,
    },
    /// The scalar text is not a literal of the target type.
    #[error("invalid {ty} literal `{text}`")]
    Parse {
        /// Target type.
        ty: &'static str,
        /// Scalar text.
        text: String,
    },
    /// The number can not be represented by the target type.
    #[error("value `{text}` is out of range for {ty}")]
    Range {
        /// Target type.
        ty: &'static str,
        /// Scalar text.
        text: String,
    },
    /// A required map key is absent.
    #[error("no such key: {0}")]
    KeyNotFound(String),
    /// A map entry no field of a record claimed.
    #[error("unknown property `{0}`")]
    UnknownProperty(String),
    /// A required field of a record is absent.
    #[error("missing property `{0}`")]
    MissingProperty(String),
    /// A failure reported by the native serde deserializer.
    #[error("failed to convert node: {0}")]
    Native(String),
    /// A failure reported by a user defined conversion.
    #[error("{0}")]
    Custom(String),
}

/// An error that occurred during the conversion of a node tree to a value.
///
/// The trace starts at the failing node and ends at the outermost node,
/// each enclosing converter appends its own description.
///
/// ```
/// use yaml_param::{node, parse_value};
/// let err = parse_value::<[u8; 2]>(&node!([1, 300])).unwrap_err();
/// assert_eq!(err.message(), "value `300` is out of range for u8");
/// assert_eq!(err.format(), "[1]: value `300` is out of range for u8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertError {
    /// Reason of the failure.
    pub kind: ErrorKind,
    /// Trace from the failing node to the root node.
    pub trace: Vec<NodeDescription>,
}

impl ConvertError {
    /// Create a new error without trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            trace: Vec::new(),
        }
    }

    /// Create an error with a custom message, for user defined conversions.
    pub fn custom(msg: impl Display) -> Self {
        Self::new(ErrorKind::Custom(msg.to_string()))
    }

    /// Create a kind mismatch error.
    pub fn kind_mismatch(expected: NodeKind, node: &Node) -> Self {
        Self::new(ErrorKind::KindMismatch {
            expected,
            actual: node.kind(),
        })
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::SizeMismatch { expected, actual })
    }

    /// A human readable description of the error, without the trace.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Append a node description to the trace.
    pub fn append_trace(mut self, description: NodeDescription) -> Self {
        self.trace.push(description);
        self
    }

    /// Format the node trace from the root node to the failing node.
    ///
    /// An empty string is returned if the root node itself failed.
    pub fn format_trace(&self) -> String {
        let mut s = String::new();
        for (i, description) in self.trace.iter().rev().enumerate() {
            if i > 0 {
                s += " → ";
            }
            s += &description.to_string();
        }
        s
    }

    /// Format the whole error as a string.
    pub fn format(&self) -> String {
        if self.trace.is_empty() {
            self.message()
        } else {
            format!("{}: {}", self.format_trace(), self.message())
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.format())
    }
}

impl std::error::Error for ConvertError {}

impl From<ErrorKind> for ConvertError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
