use super::*;
use std::{collections::BTreeMap, fs, path::Path};

#[derive(Debug, PartialEq)]
struct Camera {
    serial: u32,
    resolution: [u32; 2],
    fps: f32,
}

impl_from_node!(Camera {
    required serial: "serial number",
    required resolution: "resolution",
    required fps: "frame rate",
});

#[derive(Debug, PartialEq)]
struct Setup {
    cameras: BTreeMap<String, Camera>,
}

impl_from_node!(Setup {
    required cameras: "camera map",
});

#[test]
fn test_parse_document() {
    let n = parse_document("a: 1\nb: [x, 2.5, ~, true]\nc: {d: -3}\n").unwrap();
    assert_eq!(
        n,
        node!({
            "a" => 1,
            "b" => node!(["x", 2.5, node!(null), true]),
            "c" => node!({"d" => -3}),
        })
    );
    assert_eq!(n.get_path(&["c", "d"]).map(Node::kind), Some(NodeKind::Scalar));
    assert_eq!(parse_document("").unwrap(), node!(null));
    // Keys keep the document order
    let n = parse_document("z: 1\ny: 2\nx: 3\n").unwrap();
    let keys = n
        .as_map()
        .unwrap()
        .keys()
        .filter_map(Node::as_scalar)
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["z", "y", "x"]);
}

#[test]
fn test_parse_number_text() {
    let n = parse_document("[1, -2, 2.5, '3']").unwrap();
    let seq = n.as_seq().unwrap();
    assert_eq!(seq[0].yaml, Yaml::Int("1".into()));
    assert_eq!(seq[1].yaml, Yaml::Int("-2".into()));
    assert_eq!(seq[2].kind(), NodeKind::Scalar);
    assert!(matches!(seq[2].yaml, Yaml::Float(_)));
    assert_eq!(seq[3].yaml, Yaml::Str("3".into()));
    // Quoted or not, the converters only see the text
    let n = node!([seq[0].clone(), seq[3].clone()]);
    assert_eq!(parse_value::<Vec<i32>>(&n).unwrap(), vec![1, 3]);
}

#[test]
fn test_parse_documents() {
    let docs = parse_documents("---\na: 1\n---\n- b\n- c\n").unwrap();
    assert_eq!(docs, vec![node!({"a" => 1}), node!(["b", "c"])]);
}

#[test]
fn test_tags() {
    let n = parse_document("a: !include other.yaml\nb: !custom [1]\nc: plain\n").unwrap();
    assert_eq!(n.get("a").map(|n| n.tag.as_str()), Some("!include"));
    assert_eq!(n.get("a").and_then(Node::as_scalar), Some("other.yaml"));
    assert_eq!(n.get("b").map(|n| n.tag.as_str()), Some("!custom"));
    assert_eq!(n.get("b").map(Node::kind), Some(NodeKind::Sequence));
    assert_eq!(n.get("c").map(|n| n.tag.as_str()), Some(""));
}

#[test]
fn test_syntax_error() {
    let err = parse_document("a: [1, 2\n").unwrap_err();
    assert!(matches!(err, LoadError::Syntax { path: None, .. }));
    assert!(err.to_string().starts_with("invalid YAML: "));
}

#[test]
fn test_load_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.yaml");
    fs::write(&path, "port: 8080\nhosts: [a, b]\n").unwrap();
    let n = load_document(&path).unwrap();
    let mut port = 0u16;
    set_if_exists(&mut port, &n, "port").unwrap();
    assert_eq!(port, 8080);
    assert_eq!(parse_value::<Vec<String>>(n.get("hosts").unwrap()).unwrap(), vec!["a", "b"]);

    fs::write(&path, "port: [8080\n").unwrap();
    let err = load_document(&path).unwrap_err();
    match &err {
        LoadError::Syntax { path: Some(p), .. } => assert_eq!(p, &path),
        err => panic!("unexpected error: {}", err),
    }
    let prefix = format!("invalid YAML in {}: ", path.display());
    assert!(err.to_string().starts_with(&prefix));
}

#[test]
fn test_load_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let err = load_document(&path).unwrap_err();
    match &err {
        LoadError::Io { path: p, source } => {
            assert_eq!(p, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        err => panic!("unexpected error: {}", err),
    }
    assert!(err.to_string().starts_with("failed to open "));
}

#[test]
fn test_cameras() {
    let n = load_document(Path::new(TEST_DATA).join("cameras.yaml")).unwrap();
    let err = parse_value::<Setup>(&n).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::SizeMismatch {
            expected: 2,
            actual: 3,
        }
    );
    assert_eq!(
        err.trace,
        vec![
            NodeDescription::key("resolution", "resolution", NodeKind::Sequence),
            NodeDescription::key("right", "", NodeKind::Map),
            NodeDescription::key("cameras", "camera map", NodeKind::Map),
        ]
    );
    assert_eq!(
        err.to_string(),
        "cameras (camera map) → right → resolution (resolution): \
         wrong number of elements, expected 2, got 3"
    );

    // Without the broken camera, everything converts
    let mut n = n;
    if let Yaml::Map(m) = &mut n.yaml {
        if let Some(Yaml::Map(cameras)) = m.get_mut(&node!("cameras")).map(|n| &mut n.yaml) {
            cameras.remove(&node!("right"));
        }
    }
    let setup = parse_value::<Setup>(&n).unwrap();
    assert_eq!(
        setup.cameras["left"],
        Camera {
            serial: 1234,
            resolution: [1920, 1080],
            fps: 30.,
        }
    );
    assert_eq!(setup.cameras.len(), 1);
}
