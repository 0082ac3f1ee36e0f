use super::*;
use crate::serde::{from_node, SerdeError};
use ::serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, PartialEq, Deserialize)]
struct Lens {
    focal: f32,
    #[serde(default)]
    aperture: Option<f32>,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Mount {
    Fixed,
    Motorized(u16),
    Gimbal { pan: i16, tilt: i16 },
    Rail(u8, u8),
}

#[test]
fn test_convert_child() {
    let n = node!({
        "lens" => node!({"focal" => 4.5}),
        "ids" => node!([1, 2]),
    });
    let lens = convert_child::<Lens>(&n, "lens").unwrap();
    assert_eq!(
        lens,
        Lens {
            focal: 4.5,
            aperture: None,
        }
    );
    assert_eq!(convert_child::<Vec<u64>>(&n, "ids").unwrap(), vec![1, 2]);
    assert_eq!(convert_child::<Node>(&n, "ids").unwrap(), node!([1, 2]));
}

#[test]
fn test_convert_child_scalar_text() {
    let n = node!({"port" => 8080, "gain" => 1.5, "auto" => true, "name" => "left"});
    for (key, text) in [("port", "8080"), ("gain", "1.5"), ("auto", "true"), ("name", "left")] {
        assert_eq!(convert_child::<String>(&n, key).unwrap(), text);
    }
    let err = convert_child::<String>(&node!({"ids" => node!([1])}), "ids").unwrap_err();
    assert_eq!(
        err.to_string(),
        "ids: failed to convert node: invalid type: sequence, expected a string"
    );
}

#[test]
fn test_convert_child_missing() {
    let n = node!({"lens" => node!({"focal" => 4.5})});
    let err = convert_child::<Lens>(&n, "zoom").unwrap_err();
    assert_eq!(err.kind, ErrorKind::KeyNotFound("zoom".into()));
    assert!(err.trace.is_empty());
    assert_eq!(err.to_string(), "no such key: zoom");
    let err = convert_child::<u8>(&node!([1]), "zoom").unwrap_err();
    assert_eq!(err.kind, ErrorKind::KeyNotFound("zoom".into()));
}

#[test]
fn test_convert_child_native_error() {
    let n = node!({"lens" => node!({"focal" => "wide"})});
    let err = convert_child::<Lens>(&n, "lens").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Native(_)));
    assert_eq!(err.trace, vec![NodeDescription::key("lens", "", NodeKind::Map)]);
    assert!(err.to_string().starts_with("lens: failed to convert node: "));
    let n = node!({"id" => 300});
    let err = convert_child::<u8>(&n, "id").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::Native("value `300` is out of range for u8".into())
    );
}

#[test]
fn test_enum() {
    let n = node!([
        "fixed",
        node!({"motorized" => 20}),
        node!({"gimbal" => node!({"pan" => -90, "tilt" => 45})}),
        node!({"rail" => node!([1, 2])}),
    ]);
    assert_eq!(
        from_node::<Vec<Mount>>(&n).unwrap(),
        vec![
            Mount::Fixed,
            Mount::Motorized(20),
            Mount::Gimbal { pan: -90, tilt: 45 },
            Mount::Rail(1, 2),
        ]
    );
    assert!(from_node::<Mount>(&node!({"fixed" => 1, "rail" => 2})).is_err());
    assert!(from_node::<Mount>(&node!("motorized")).is_err());
}

#[test]
fn test_native_values() {
    assert_eq!(from_node::<Option<String>>(&node!(null)).unwrap(), None);
    assert_eq!(from_node::<Option<String>>(&node!("a")).unwrap(), Some("a".into()));
    assert_eq!(from_node::<(u8, char)>(&node!([1, "c"])).unwrap(), (1, 'c'));
    assert_eq!(from_node::<f64>(&node!(3)).unwrap(), 3.);
    assert_eq!(from_node::<i64>(&node!("0x10")).err(), Some(SerdeError {
        msg: "invalid type: string \"0x10\", expected i64".into(),
    }));
    assert_eq!(from_node::<u16>(&node!(0x10)).unwrap(), 16);
    let m = from_node::<BTreeMap<String, bool>>(&node!({"b" => false, "a" => true})).unwrap();
    assert_eq!(m.into_iter().collect::<Vec<_>>(), vec![
        ("a".to_string(), true),
        ("b".to_string(), false),
    ]);
}

#[test]
fn test_node_deserialize() {
    let n = node!({
        "a" => node!([1, -2, 2.5, "x", true, node!(null)]),
        "b" => node!({}),
    });
    assert_eq!(from_node::<Node>(&n).unwrap(), n);
    let n = node!(u64::MAX);
    assert_eq!(from_node::<Node>(&n).unwrap(), n);
    for v in [f64::INFINITY, f64::NEG_INFINITY] {
        let n = from_node::<Node>(&node!(v)).unwrap();
        assert_eq!(n, node!(v));
        assert_eq!(from_node::<f64>(&n).unwrap(), v);
    }
    let n = from_node::<Node>(&node!(f64::NAN)).unwrap();
    assert_eq!(n.as_scalar(), Some(".nan"));
}
