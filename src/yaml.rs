use crate::*;
use core::iter::FromIterator;
use ritelinked::LinkedHashMap;

macro_rules! impl_from {
    ($(impl $($from_ty:ty),+ => $ty:ident)+) => {
        $($(impl From<$from_ty> for Yaml {
            fn from(s: $from_ty) -> Self {
                Self::$ty(s.to_string())
            }
        })+)+
    };
}

macro_rules! impl_from_float {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Yaml {
            fn from(v: $ty) -> Self {
                Self::Float(if v.is_nan() {
                    ".nan".to_string()
                } else if v.is_infinite() {
                    (if v > 0. { ".inf" } else { "-.inf" }).to_string()
                } else {
                    v.to_string()
                })
            }
        })+
    };
}

macro_rules! impl_iter {
    ($(impl $($item:ty),+ => $ty:ident)+) => {
        $($(impl FromIterator<$item> for Yaml {
            fn from_iter<T: IntoIterator<Item = $item>>(iter: T) -> Self {
                Self::$ty(iter.into_iter().collect())
            }
        })+)+
    };
}

/// The sequence data structure of YAML.
pub type Seq = Vec<Node>;
/// The map data structure of YAML, keeps the document order of the entries.
pub type Map = LinkedHashMap<Node, Node>;

/// YAML data types, but it is recommended to use [`Node`] for shorten code.
///
/// Numbers keep the text they were written with,
/// the conversion layer decides how wide the target is.
///
/// ```
/// use yaml_param::Yaml;
///
/// assert_eq!(Yaml::Int("20".into()), 20.into());
/// assert_eq!(Yaml::Float("0.5".into()), 0.5.into());
/// ```
#[derive(Hash, Eq, PartialEq, Debug, Clone)]
pub enum Yaml {
    /// Null
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(String),
    /// Float
    Float(String),
    /// String
    Str(String),
    /// Sequence
    Seq(Seq),
    /// Map
    Map(Map),
}

impl Yaml {
    /// The structural kind of this data.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Null => NodeKind::Null,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_) => NodeKind::Scalar,
            Self::Seq(_) => NodeKind::Sequence,
            Self::Map(_) => NodeKind::Map,
        }
    }
}

impl From<()> for Yaml {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Yaml {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl_from! {
    impl char, &str, String, &String => Str
    impl usize, u8, u16, u32, u64, u128, isize, i8, i16, i32, i64, i128 => Int
}

// The YAML spelling of the non-finite values
impl_from_float!(f32, f64);

impl From<Seq> for Yaml {
    fn from(a: Seq) -> Self {
        Self::Seq(a)
    }
}

impl From<Map> for Yaml {
    fn from(m: Map) -> Self {
        Self::Map(m)
    }
}

impl_iter! {
    impl Node => Seq
    impl (Node, Node) => Map
}
