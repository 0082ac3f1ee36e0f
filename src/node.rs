use crate::*;
use core::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};

macro_rules! impl_from {
    ($($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for Node {
            fn from(v: $ty) -> Self {
                Self::new(Yaml::from(v))
            }
        })+
    };
}

/// The structural category of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Null, an empty value or `~`
    Null,
    /// Boolean, number or string
    Scalar,
    /// Sequence
    Sequence,
    /// Map
    Map,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Null => "null",
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Map => "map",
        })
    }
}

/// Document node, includes the tag and the YAML data.
///
/// This type will ignore the tag when comparison and hashing.
///
/// ```
/// use std::collections::HashSet;
/// use yaml_param::{Node, Yaml};
/// let mut s = HashSet::new();
/// s.insert(Node::new("a".into()));
/// s.insert(Node::new("a".into()).tag("!x".into()));
/// assert_eq!(s.len(), 1);
/// ```
///
/// There is a convenient macro [`node!`] to create nodes literally.
///
/// The accessors only read the tree, a node is never changed by the conversion layer.
///
/// ```
/// use yaml_param::{node, NodeKind};
/// let n = node!({"a" => node!([1, 2])});
/// assert_eq!(n.kind(), NodeKind::Map);
/// assert_eq!(n.get("a").map(|a| a.len()), Some(2));
/// assert!(n.get("b").is_none());
/// ```
#[derive(Eq, Clone)]
pub struct Node {
    /// Tag of the node, such as `!include`, empty if not tagged
    pub tag: String,
    /// YAML data
    pub yaml: Yaml,
}

impl Node {
    /// Create node from YAML data.
    pub fn new(yaml: Yaml) -> Self {
        Self {
            tag: String::new(),
            yaml,
        }
    }

    /// Builder function for the tag.
    pub fn tag(mut self, tag: String) -> Self {
        self.tag = tag;
        self
    }

    /// The actual structural kind of this node.
    pub fn kind(&self) -> NodeKind {
        self.yaml.kind()
    }

    /// Check the value is null.
    pub fn is_null(&self) -> bool {
        self.yaml == Yaml::Null
    }

    /// The text of a scalar node.
    ///
    /// Booleans are written as `true` and `false`.
    ///
    /// ```
    /// use yaml_param::node;
    /// assert_eq!(node!(42).as_scalar(), Some("42"));
    /// assert_eq!(node!(false).as_scalar(), Some("false"));
    /// assert_eq!(node!(null).as_scalar(), None);
    /// ```
    pub fn as_scalar(&self) -> Option<&str> {
        match &self.yaml {
            Yaml::Bool(true) => Some("true"),
            Yaml::Bool(false) => Some("false"),
            Yaml::Int(s) | Yaml::Float(s) | Yaml::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The children of a sequence node.
    pub fn as_seq(&self) -> Option<&Seq> {
        match &self.yaml {
            Yaml::Seq(a) => Some(a),
            _ => None,
        }
    }

    /// The entries of a map node.
    pub fn as_map(&self) -> Option<&Map> {
        match &self.yaml {
            Yaml::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Number of children of a sequence or map node, zero for others.
    pub fn len(&self) -> usize {
        match &self.yaml {
            Yaml::Seq(a) => a.len(),
            Yaml::Map(m) => m.len(),
            _ => 0,
        }
    }

    /// Return true if the node has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the child of a map node by the text of its key.
    ///
    /// Returns [`None`] if the key is missing or the node is not a map.
    pub fn get(&self, key: &str) -> Option<&Self> {
        let m = self.as_map()?;
        m.get(&Self::from(key)).or_else(|| {
            m.iter()
                .find(|(k, _)| k.as_scalar() == Some(key))
                .map(|(_, v)| v)
        })
    }

    /// Get the child of a map node by keys recursively.
    ///
    /// ```
    /// use yaml_param::node;
    /// let n = node!({"a" => node!({"b" => 30.})});
    /// assert_eq!(n.get_path(&["a", "b"]), Some(&node!(30.)));
    /// assert_eq!(n.get_path(&["a", "c"]), None);
    /// ```
    pub fn get_path(&self, keys: &[&str]) -> Option<&Self> {
        keys.iter().try_fold(self, |n, key| n.get(key))
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_fmt(format_args!("Node{:?}", &self.yaml))
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.yaml.hash(state)
    }
}

impl PartialEq for Node {
    fn eq(&self, rhs: &Self) -> bool {
        self.yaml == rhs.yaml
    }
}

impl From<Yaml> for Node {
    fn from(yaml: Yaml) -> Self {
        Self::new(yaml)
    }
}

impl_from!(
    (), bool, char, &str, String, &String, usize, u8, u16, u32, u64, u128, isize, i8, i16, i32,
    i64, i128, f32, f64, Seq, Map,
);
