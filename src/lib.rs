//! Typed conversion of YAML node trees with localized diagnostics.
//!
//! The major purpose of this crate is to turn a loaded document into the statically-typed
//! parameters of a program, and to tell the user exactly where a document went wrong.
//!
//! ```
//! use yaml_param::{node, parse_value};
//! use std::collections::HashMap;
//!
//! let n = node!({"a" => node!({"b" => node!([1, 2, "x"])})});
//! let err = parse_value::<HashMap<String, HashMap<String, Vec<i32>>>>(&n).unwrap_err();
//! assert_eq!(err.format_trace(), "a → b → [2]");
//! assert_eq!(err.to_string(), "a → b → [2]: invalid i32 literal `x`");
//! ```
//!
//! Conversions are defined by the [`FromNode`] trait,
//! asking for a type without a conversion is rejected at build time.
//! Loading and preprocessing documents from files is provided by the `loader` feature.
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::convert::*;
pub use crate::error::*;
pub use crate::expect::*;
#[cfg(feature = "loader")]
pub use crate::load::*;
pub use crate::node::*;
#[cfg(feature = "loader")]
pub use crate::preprocess::*;
pub use crate::yaml::*;

/// Create [`Node`] items literally.
///
/// Literals will be transformed to [`Yaml`] automatically,
/// sequences and maps use the bracket and brace forms.
///
/// ```
/// use yaml_param::{node, Yaml};
/// let k = "a";
/// assert_eq!(node!(k), node!("a"));
/// assert_eq!(node!(null), node!(Yaml::Null));
/// let n = node!({"a" => node!([1, 2]), "b" => node!({})});
/// assert_eq!(n.len(), 2);
/// ```
#[macro_export]
macro_rules! node {
    (null) => {
        $crate::Node::new($crate::Yaml::Null)
    };
    ([]) => {
        $crate::Node::new($crate::Yaml::Seq($crate::Seq::new()))
    };
    ({}) => {
        $crate::Node::new($crate::Yaml::Map($crate::Map::new()))
    };
    ([$($v:expr),+ $(,)?]) => {
        $crate::Node::new($crate::yaml_seq![$($v),+])
    };
    ({$($k:expr => $v:expr),+ $(,)?}) => {
        $crate::Node::new($crate::yaml_map!{$($k => $v),+})
    };
    ($yaml:expr) => {
        $crate::Node::from($yaml)
    };
}

/// Create [`Yaml::Seq`] items literally.
///
/// ```
/// use yaml_param::{node, yaml_seq};
/// yaml_seq![node!("a"), "b", 3];
/// ```
#[macro_export]
macro_rules! yaml_seq {
    ($($v:expr),* $(,)?) => {
        $crate::Yaml::Seq(::std::vec![$($crate::Node::from($v)),*])
    };
}

/// Create [`Yaml::Map`] items literally.
///
/// ```
/// use yaml_param::{node, yaml_map};
/// yaml_map! {
///     "a" => "b",
///     node!("c") => node!([1, 2]),
/// };
/// ```
#[macro_export]
macro_rules! yaml_map {
    ($($k:expr => $v:expr),* $(,)?) => {{
        let mut m = $crate::Map::new();
        $(m.insert($crate::Node::from($k), $crate::Node::from($v));)*
        $crate::Yaml::Map(m)
    }};
}

mod convert;
mod error;
mod expect;
#[cfg(feature = "loader")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "loader")))]
mod load;
mod node;
#[cfg(feature = "loader")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "loader")))]
mod preprocess;
#[cfg(feature = "serde")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
pub mod serde;
#[cfg(test)]
mod tests;
mod yaml;
