//! Conversion from nodes to statically-typed values.
//!
//! Every target type implements [`FromNode`], composite converters call it again for each child,
//! and append the description of the failing child to the error trace on the way out.
//! Asking for a type without an implementation is a build error:
//!
//! ```compile_fail
//! struct NoConversion;
//! let _ = yaml_param::parse_value::<NoConversion>(&yaml_param::node!(null));
//! ```
pub use self::record::RecordParser;
use crate::*;

mod composite;
mod primitive;
mod record;

/// Types that can be converted from a [`Node`].
///
/// Implement it to register a conversion for a user type,
/// the [`impl_from_node!`] macro covers the common case of a struct parsed from a map.
///
/// ```
/// use yaml_param::{node, parse_value, ConvertError, ConvertResult, FromNode, Node};
///
/// #[derive(Debug, PartialEq)]
/// struct Even(u32);
///
/// impl FromNode for Even {
///     fn from_node(node: &Node) -> ConvertResult<Self> {
///         match parse_value::<u32>(node)? {
///             n if n % 2 == 0 => Ok(Even(n)),
///             n => Err(ConvertError::custom(format!("{} is odd", n))),
///         }
///     }
/// }
///
/// assert_eq!(parse_value::<Vec<Even>>(&node!([2, 4])).unwrap(), vec![Even(2), Even(4)]);
/// let err = parse_value::<Vec<Even>>(&node!([2, 3])).unwrap_err();
/// assert_eq!(err.to_string(), "[1]: 3 is odd");
/// ```
#[diagnostic::on_unimplemented(
    message = "no YAML conversion defined for `{Self}`",
    label = "`{Self}` can not be parsed from a node",
    note = "implement `FromNode` for it, or use `impl_from_node!` for a struct"
)]
pub trait FromNode: Sized {
    /// Convert the node, or explain why it can not be converted.
    fn from_node(node: &Node) -> ConvertResult<Self>;
}

/// Parse a node into a type `T`.
///
/// ```
/// use yaml_param::{node, parse_value, ErrorKind};
/// assert_eq!(parse_value::<i32>(&node!(42)).unwrap(), 42);
/// let err = parse_value::<i32>(&node!("abc")).unwrap_err();
/// assert!(matches!(err.kind, ErrorKind::Parse { .. }));
/// ```
pub fn parse_value<T: FromNode>(node: &Node) -> ConvertResult<T> {
    T::from_node(node)
}

/// Parse the child `key` of a map node into `output`, if the key exists.
///
/// A missing key keeps the current value of `output`,
/// a key that fails to parse returns the error with the key in its trace.
///
/// ```
/// use yaml_param::{node, set_if_exists};
/// let n = node!({"port" => 8080});
/// let mut port = 80u16;
/// let mut host = String::from("localhost");
/// set_if_exists(&mut port, &n, "port").unwrap();
/// set_if_exists(&mut host, &n, "host").unwrap();
/// assert_eq!(port, 8080);
/// assert_eq!(host, "localhost");
/// ```
pub fn set_if_exists<T: FromNode>(output: &mut T, node: &Node, key: &str) -> ConvertResult<()> {
    if let Some(child) = node.get(key) {
        *output = T::from_node(child)
            .map_err(|e| e.append_trace(NodeDescription::key(key, "", child.kind())))?;
    }
    Ok(())
}

/// Convert the child `key` of a map node with the native serde deserializer.
///
/// A missing key is [`ErrorKind::KeyNotFound`],
/// and a [`SerdeError`](crate::serde::SerdeError) is turned into [`ErrorKind::Native`] here,
/// it never reaches the caller in its own form.
///
/// ```
/// use yaml_param::{convert_child, node, ErrorKind};
/// let n = node!({"ids" => node!([1, 2])});
/// assert_eq!(convert_child::<Vec<u8>>(&n, "ids").unwrap(), vec![1, 2]);
/// let err = convert_child::<Vec<u8>>(&n, "names").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::KeyNotFound("names".into()));
/// ```
#[cfg(feature = "serde")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
pub fn convert_child<T>(node: &Node, key: &str) -> ConvertResult<T>
where
    T: ::serde::de::DeserializeOwned,
{
    let child = node
        .get(key)
        .ok_or_else(|| ConvertError::new(ErrorKind::KeyNotFound(key.to_string())))?;
    crate::serde::from_node(child).map_err(|e| {
        ConvertError::new(ErrorKind::Native(e.to_string()))
            .append_trace(NodeDescription::key(key, "", child.kind()))
    })
}
