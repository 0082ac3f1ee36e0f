use crate::*;
use ritelinked::LinkedHashMap;
use std::collections::{BTreeMap, HashMap};

macro_rules! impl_map {
    ($($ty:ident),+ $(,)?) => {
        $(impl<T: FromNode> FromNode for $ty<String, T> {
            fn from_node(node: &Node) -> ConvertResult<Self> {
                parse_entries(node)
            }
        })+
    };
}

/// Convert the elements in order, stop at the first failure.
fn parse_elements<T: FromNode>(seq: &Seq) -> ConvertResult<Vec<T>> {
    let mut v = Vec::with_capacity(seq.len());
    for (i, n) in seq.iter().enumerate() {
        let element =
            T::from_node(n).map_err(|e| e.append_trace(NodeDescription::index(i, n.kind())))?;
        v.push(element);
    }
    Ok(v)
}

/// Convert the values of a map node, keyed by the scalar text of the keys.
///
/// Duplicated keys are not possible in [`Map`], but if two keys share the same text,
/// the later entry wins.
fn parse_entries<T, M>(node: &Node) -> ConvertResult<M>
where
    T: FromNode,
    M: Default + Extend<(String, T)>,
{
    let m = node
        .as_map()
        .ok_or_else(|| ConvertError::kind_mismatch(NodeKind::Map, node))?;
    let mut output = M::default();
    for (k, v) in m {
        let name = k
            .as_scalar()
            .ok_or_else(|| ConvertError::kind_mismatch(NodeKind::Scalar, k))?;
        let value = T::from_node(v)
            .map_err(|e| e.append_trace(NodeDescription::key(name, "", v.kind())))?;
        output.extend(Some((name.to_string(), value)));
    }
    Ok(output)
}

impl<T: FromNode, const N: usize> FromNode for [T; N] {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        let seq = node
            .as_seq()
            .ok_or_else(|| ConvertError::kind_mismatch(NodeKind::Sequence, node))?;
        if seq.len() != N {
            return Err(ConvertError::size_mismatch(N, seq.len()));
        }
        // Only a length of exactly N fits the array
        parse_elements(seq)?
            .try_into()
            .map_err(|v: Vec<T>| ConvertError::size_mismatch(N, v.len()))
    }
}

/// A null node is an empty sequence, as if an optional list was written empty.
impl<T: FromNode> FromNode for Vec<T> {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        match &node.yaml {
            Yaml::Null => Ok(Vec::new()),
            Yaml::Seq(seq) => parse_elements(seq),
            _ => Err(ConvertError::kind_mismatch(NodeKind::Sequence, node)),
        }
    }
}

impl<T: FromNode> FromNode for Option<T> {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        if node.is_null() {
            Ok(None)
        } else {
            T::from_node(node).map(Some)
        }
    }
}

impl<T: FromNode> FromNode for Box<T> {
    fn from_node(node: &Node) -> ConvertResult<Self> {
        T::from_node(node).map(Box::new)
    }
}

impl_map!(HashMap, BTreeMap, LinkedHashMap);
