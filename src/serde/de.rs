use super::SerdeError;
use crate::{FromNode, Map, Node, Seq, Yaml};
use ::serde::de::{
    DeserializeOwned, DeserializeSeed, EnumAccess, Error, Expected, MapAccess, SeqAccess,
    Unexpected, VariantAccess, Visitor,
};
use ::serde::{Deserialize, Deserializer};
use core::fmt::{Formatter, Result as FmtResult};

macro_rules! impl_visitor {
    (@) => { () };
    (@$ty:ty, $name:ident) => { $name };
    ($(fn $method:ident$(($ty:ty))?)+) => {
        $(fn $method<E>(self$(, v: $ty)?) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Node::from(impl_visitor!(@$($ty, v)?)))
        })+
    };
}

macro_rules! impl_deserializer {
    ($(fn $method:ident($($variant:ident)|+) => $visit:ident($ty:ty))+) => {
        $(fn $method<V>(self, visitor: V) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'de>,
        {
            match &self.yaml {
                $(Yaml::$variant(_))|+ => {
                    visitor.$visit(<$ty>::from_node(self).map_err(SerdeError::custom)?)
                }
                _ => Err(unexpected(self, &visitor)),
            }
        })+
    };
}

/// Deserialize a node to a specific type.
///
/// ```
/// use yaml_param::{node, serde::from_node};
/// let n = node!([node!([1, 2]), node!([3])]);
/// assert_eq!(from_node::<Vec<Vec<u8>>>(&n).unwrap(), vec![vec![1, 2], vec![3]]);
/// ```
pub fn from_node<D>(node: &Node) -> Result<D, SerdeError>
where
    D: DeserializeOwned,
{
    D::deserialize(node)
}

#[cold]
fn unexpected(node: &Node, exp: &dyn Expected) -> SerdeError {
    let ty = match &node.yaml {
        Yaml::Null => Unexpected::Unit,
        Yaml::Bool(b) => Unexpected::Bool(*b),
        Yaml::Int(n) => match n.parse() {
            Ok(n) => Unexpected::Signed(n),
            Err(_) => Unexpected::Other("integer"),
        },
        Yaml::Float(n) => match n.parse() {
            Ok(n) => Unexpected::Float(n),
            Err(_) => Unexpected::Other("float"),
        },
        Yaml::Str(s) => Unexpected::Str(s),
        Yaml::Seq(_) => Unexpected::Seq,
        Yaml::Map(_) => Unexpected::Map,
    };
    SerdeError::invalid_type(ty, exp)
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, fmt: &mut Formatter) -> FmtResult {
        fmt.write_str("YAML value")
    }

    impl_visitor! {
        fn visit_bool(bool)
        fn visit_i64(i64)
        fn visit_u64(u64)
        fn visit_i128(i128)
        fn visit_u128(u128)
        fn visit_f64(f64)
        fn visit_str(&str)
        fn visit_string(String)
        fn visit_none
        fn visit_unit
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut a = Seq::new();
        while let Some(e) = seq.next_element()? {
            a.push(e);
        }
        Ok(Node::from(a))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut m = Map::new();
        while let Some((k, v)) = map.next_entry()? {
            m.insert(k, v);
        }
        Ok(Node::from(m))
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct SeqVisitor<I>(I);

impl<'de, I> SeqAccess<'de> for SeqVisitor<I>
where
    I: Iterator<Item = &'de Node>,
{
    type Error = SerdeError;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        match self.0.next() {
            Some(e) => seed.deserialize(e).map(Some),
            None => Ok(None),
        }
    }
}

struct MapVisitor<'de, I>(I, Option<&'de Node>);

impl<'de, I> MapAccess<'de> for MapVisitor<'de, I>
where
    I: Iterator<Item = (&'de Node, &'de Node)>,
{
    type Error = SerdeError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.0.next() {
            Some((k, v)) => {
                self.1 = Some(v);
                seed.deserialize(k).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        match self.1.take() {
            Some(v) => seed.deserialize(v),
            None => Err(SerdeError::custom("map value requested before its key")),
        }
    }
}

struct EnumVisitor<'de>(&'de Node, Option<&'de Node>);

impl<'de> EnumAccess<'de> for EnumVisitor<'de> {
    type Error = SerdeError;
    type Variant = VariantVisitor<'de>;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant), Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        let visitor = VariantVisitor(self.1);
        seed.deserialize(self.0).map(|v| (v, visitor))
    }
}

struct VariantVisitor<'de>(Option<&'de Node>);

impl<'de> VariantAccess<'de> for VariantVisitor<'de> {
    type Error = SerdeError;

    fn unit_variant(self) -> Result<(), Self::Error> {
        match self.0 {
            Some(v) => Deserialize::deserialize(v),
            None => Ok(()),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        match self.0 {
            Some(v) => seed.deserialize(v),
            None => Err(Error::invalid_type(
                Unexpected::UnitVariant,
                &"newtype variant",
            )),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Some(node) => match &node.yaml {
                Yaml::Seq(a) => visitor.visit_seq(SeqVisitor(a.iter())),
                _ => Err(unexpected(node, &"tuple variant")),
            },
            None => Err(Error::invalid_type(
                Unexpected::UnitVariant,
                &"tuple variant",
            )),
        }
    }

    fn struct_variant<V>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            Some(node) => match &node.yaml {
                Yaml::Map(m) => visitor.visit_map(MapVisitor(m.iter(), None)),
                _ => Err(unexpected(node, &"struct variant")),
            },
            None => Err(Error::invalid_type(
                Unexpected::UnitVariant,
                &"struct variant",
            )),
        }
    }
}

impl<'de> Deserializer<'de> for &'de Node {
    type Error = SerdeError;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match &self.yaml {
            Yaml::Null => visitor.visit_unit(),
            Yaml::Bool(v) => visitor.visit_bool(*v),
            Yaml::Int(n) => match (n.parse(), n.parse()) {
                (Ok(n), _) => visitor.visit_i64(n),
                (_, Ok(n)) => visitor.visit_u64(n),
                _ => visitor.visit_i128(i128::from_node(self).map_err(SerdeError::custom)?),
            },
            Yaml::Float(_) => visitor.visit_f64(f64::from_node(self).map_err(SerdeError::custom)?),
            Yaml::Str(s) => visitor.visit_borrowed_str(s),
            Yaml::Seq(a) => visitor.visit_seq(SeqVisitor(a.iter())),
            Yaml::Map(m) => visitor.visit_map(MapVisitor(m.iter(), None)),
        }
    }

    impl_deserializer! {
        fn deserialize_i8(Int) => visit_i8(i8)
        fn deserialize_i16(Int) => visit_i16(i16)
        fn deserialize_i32(Int) => visit_i32(i32)
        fn deserialize_i64(Int) => visit_i64(i64)
        fn deserialize_i128(Int) => visit_i128(i128)
        fn deserialize_u8(Int) => visit_u8(u8)
        fn deserialize_u16(Int) => visit_u16(u16)
        fn deserialize_u32(Int) => visit_u32(u32)
        fn deserialize_u64(Int) => visit_u64(u64)
        fn deserialize_u128(Int) => visit_u128(u128)
        fn deserialize_f32(Int | Float) => visit_f32(f32)
        fn deserialize_f64(Int | Float) => visit_f64(f64)
        fn deserialize_char(Str) => visit_char(char)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match &self.yaml {
            Yaml::Bool(b) => visitor.visit_bool(*b),
            _ => Err(unexpected(self, &visitor)),
        }
    }

    /// Any scalar has a text, numbers and booleans included.
    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.as_scalar() {
            Some(s) => visitor.visit_borrowed_str(s),
            None => Err(unexpected(self, &visitor)),
        }
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_byte_buf(visitor)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match &self.yaml {
            Yaml::Str(s) => visitor.visit_borrowed_bytes(s.as_bytes()),
            Yaml::Seq(a) => visitor.visit_seq(SeqVisitor(a.iter())),
            _ => Err(unexpected(self, &visitor)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match &self.yaml {
            Yaml::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        if self.is_null() {
            visitor.visit_unit()
        } else {
            Err(unexpected(self, &visitor))
        }
    }

    fn deserialize_unit_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match &self.yaml {
            Yaml::Seq(a) => visitor.visit_seq(SeqVisitor(a.iter())),
            _ => Err(unexpected(self, &visitor)),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match &self.yaml {
            Yaml::Map(m) => visitor.visit_map(MapVisitor(m.iter(), None)),
            _ => Err(unexpected(self, &visitor)),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match &self.yaml {
            Yaml::Seq(a) => visitor.visit_seq(SeqVisitor(a.iter())),
            Yaml::Map(m) => visitor.visit_map(MapVisitor(m.iter(), None)),
            _ => Err(unexpected(self, &visitor)),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match &self.yaml {
            Yaml::Map(m) if m.len() == 1 => match m.iter().next() {
                Some((k, v)) => visitor.visit_enum(EnumVisitor(k, Some(v))),
                None => Err(unexpected(self, &"map with single pair")),
            },
            Yaml::Map(_) => Err(unexpected(self, &"map with single pair")),
            Yaml::Str(_) => visitor.visit_enum(EnumVisitor(self, None)),
            _ => Err(unexpected(self, &visitor)),
        }
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}
