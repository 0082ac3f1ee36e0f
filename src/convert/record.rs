use crate::*;
use std::collections::HashSet;

/// Parse a map node field by field into a struct.
///
/// Each parsed field is marked as claimed, [`RecordParser::finish`] rejects the entries no field claimed.
///
/// ```
/// use yaml_param::{node, ConvertResult, FromNode, Node, RecordParser};
///
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl FromNode for Server {
///     fn from_node(node: &Node) -> ConvertResult<Self> {
///         let mut rec = RecordParser::new(node)?;
///         let server = Self {
///             host: rec.field("host", "string")?,
///             port: rec.field_or_default("port", "port number")?,
///         };
///         rec.finish()?;
///         Ok(server)
///     }
/// }
///
/// let n = node!({"host" => "localhost", "port" => "http"});
/// let err = yaml_param::parse_value::<Server>(&n).err().unwrap();
/// assert_eq!(err.to_string(), "port (port number): invalid u16 literal `http`");
/// ```
pub struct RecordParser<'a> {
    map: &'a Map,
    claimed: HashSet<&'a str>,
}

impl<'a> RecordParser<'a> {
    /// Start parsing a map node.
    pub fn new(node: &'a Node) -> ConvertResult<Self> {
        let map = node
            .as_map()
            .ok_or_else(|| ConvertError::kind_mismatch(NodeKind::Map, node))?;
        Ok(Self {
            map,
            claimed: HashSet::new(),
        })
    }

    fn lookup(&mut self, key: &str) -> Option<&'a Node> {
        let map = self.map;
        let (k, v) = map.iter().find(|(k, _)| k.as_scalar() == Some(key))?;
        self.claimed.extend(k.as_scalar());
        Some(v)
    }

    /// Parse an optional field, [`None`] if the key is missing.
    pub fn field_optional<T: FromNode>(
        &mut self,
        key: &str,
        user_type: &str,
    ) -> ConvertResult<Option<T>> {
        match self.lookup(key) {
            Some(n) => T::from_node(n)
                .map(Some)
                .map_err(|e| e.append_trace(NodeDescription::key(key, user_type, n.kind()))),
            None => Ok(None),
        }
    }

    /// Parse a required field.
    pub fn field<T: FromNode>(&mut self, key: &str, user_type: &str) -> ConvertResult<T> {
        self.field_optional(key, user_type)?
            .ok_or_else(|| ConvertError::new(ErrorKind::MissingProperty(key.to_string())))
    }

    /// Parse an optional field, the default value of `T` if the key is missing.
    pub fn field_or_default<T>(&mut self, key: &str, user_type: &str) -> ConvertResult<T>
    where
        T: FromNode + Default,
    {
        self.field_optional(key, user_type)
            .map(Option::unwrap_or_default)
    }

    /// Check the keys against the field names before parsing any field,
    /// fail on the first entry in document order that matches no field.
    pub fn expect_fields(&self, fields: &[&str]) -> ConvertResult<()> {
        self.check_keys(|key| fields.iter().any(|f| *f == key))
    }

    /// Finish parsing, fail on the first entry no field claimed.
    ///
    /// Field errors come first here, since the entries are checked after the fields were parsed.
    /// Call [`RecordParser::expect_fields`] beforehand to report unknown entries first.
    pub fn finish(self) -> ConvertResult<()> {
        self.check_keys(|key| self.claimed.contains(key))
    }

    fn check_keys(&self, known: impl Fn(&str) -> bool) -> ConvertResult<()> {
        for k in self.map.keys() {
            match k.as_scalar() {
                Some(key) if known(key) => {}
                Some(key) => {
                    return Err(ConvertError::new(ErrorKind::UnknownProperty(key.to_string())))
                }
                None => return Err(ConvertError::kind_mismatch(NodeKind::Scalar, k)),
            }
        }
        Ok(())
    }
}

/// Implement [`FromNode`] for a struct parsed from a map node.
///
/// Each field is marked `required` or `optional` and has a human readable type label,
/// which shows up in the error trace.
/// An optional field that is missing from the document takes its [`Default`] value.
/// Entries that match no field are rejected before any field is parsed.
///
/// ```
/// use yaml_param::{impl_from_node, node, parse_value};
///
/// #[derive(Debug, PartialEq)]
/// struct Camera {
///     name: String,
///     fps: f32,
///     serials: Vec<u32>,
/// }
///
/// impl_from_node!(Camera {
///     required name: "string",
///     required fps: "frame rate",
///     optional serials: "list of serial numbers",
/// });
///
/// let camera = parse_value::<Camera>(&node!({"name" => "left", "fps" => 30})).unwrap();
/// assert_eq!(camera, Camera { name: "left".into(), fps: 30., serials: vec![] });
/// let err = parse_value::<Camera>(&node!({"name" => "left"})).unwrap_err();
/// assert_eq!(err.to_string(), "missing property `fps`");
/// ```
#[macro_export]
macro_rules! impl_from_node {
    (@field $rec:ident, required, $field:ident, $label:expr) => {
        $rec.field(stringify!($field), $label)?
    };
    (@field $rec:ident, optional, $field:ident, $label:expr) => {
        $rec.field_or_default(stringify!($field), $label)?
    };
    ($ty:ident { $($mode:ident $field:ident: $label:expr),* $(,)? }) => {
        impl $crate::FromNode for $ty {
            fn from_node(node: &$crate::Node) -> $crate::ConvertResult<Self> {
                let mut rec = $crate::RecordParser::new(node)?;
                rec.expect_fields(&[$(stringify!($field)),*])?;
                Ok(Self {
                    $($field: $crate::impl_from_node!(@field rec, $mode, $field, $label),)*
                })
            }
        }
    };
}
