//! Loading documents with `serde_yaml`, the parser behind the node tree.
use crate::*;
use ::serde::Deserialize;
use serde_yaml::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, trace};

/// The error of loading and preprocessing documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Cause.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid YAML.
    #[error("invalid YAML{}: {source}", in_file(.path))]
    Syntax {
        /// Path of the file, if the document came from one.
        path: Option<PathBuf>,
        /// Cause.
        #[source]
        source: serde_yaml::Error,
    },
    /// A tag handler got a node of the wrong kind.
    #[error("{tag} needs a string, got {kind}")]
    TagArgument {
        /// The tag, such as `!include`.
        tag: String,
        /// Kind of the tagged node.
        kind: NodeKind,
    },
    /// The path of an `!include` expanded to nothing.
    #[error("tried to include empty path")]
    EmptyInclude,
    /// A file includes itself, directly or through other files.
    #[error("include cycle: {} includes itself", .path.display())]
    IncludeCycle {
        /// The file that was included again.
        path: PathBuf,
    },
}

fn in_file(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

/// Parse a single document from a string.
///
/// An empty string is a null document.
///
/// ```
/// use yaml_param::{node, parse_document};
/// let n = parse_document("a: [1, 2.5, x]").unwrap();
/// assert_eq!(n, node!({"a" => node!([1, 2.5, "x"])}));
/// ```
pub fn parse_document(doc: &str) -> Result<Node, LoadError> {
    let value = serde_yaml::from_str::<Value>(doc)
        .map_err(|source| LoadError::Syntax { path: None, source })?;
    Ok(from_value(value))
}

/// Parse every document of a multi-document string.
///
/// ```
/// use yaml_param::{node, parse_documents};
/// let docs = parse_documents("---\na: 1\n---\n- b\n").unwrap();
/// assert_eq!(docs, vec![node!({"a" => 1}), node!(["b"])]);
/// ```
pub fn parse_documents(doc: &str) -> Result<Vec<Node>, LoadError> {
    serde_yaml::Deserializer::from_str(doc)
        .map(|de| {
            Value::deserialize(de)
                .map(from_value)
                .map_err(|source| LoadError::Syntax { path: None, source })
        })
        .collect()
}

/// Read and parse a document from a file.
pub fn load_document(path: impl AsRef<Path>) -> Result<Node, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading document");
    let doc = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_yaml::from_str::<Value>(&doc).map_err(|source| LoadError::Syntax {
        path: Some(path.to_path_buf()),
        source,
    })?;
    Ok(from_value(value))
}

/// Convert a `serde_yaml` value into a node, keeping the number texts and the tags.
pub fn from_value(value: Value) -> Node {
    match value {
        Value::Null => Node::new(Yaml::Null),
        Value::Bool(b) => Node::from(b),
        Value::Number(n) if n.is_f64() => Node::new(Yaml::Float(n.to_string())),
        Value::Number(n) => Node::new(Yaml::Int(n.to_string())),
        Value::String(s) => Node::from(s),
        Value::Sequence(seq) => seq.into_iter().map(from_value).collect::<Yaml>().into(),
        Value::Mapping(m) => m
            .into_iter()
            .map(|(k, v)| (from_value(k), from_value(v)))
            .collect::<Yaml>()
            .into(),
        Value::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            trace!(%tag, "tagged node");
            from_value(tagged.value).tag(tag)
        }
    }
}
