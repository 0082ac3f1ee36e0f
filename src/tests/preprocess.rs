use super::*;
use std::path::Path;

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn expand_file(doc: &str, file: &str, variables: &Variables) -> Node {
    let mut n = parse_document(doc).unwrap();
    preprocess_with_file_path(&mut n, file, variables).unwrap();
    n
}

fn expand_dir(doc: &str, dir: &str, variables: &Variables) -> Node {
    let mut n = parse_document(doc).unwrap();
    preprocess_with_directory_path(&mut n, dir, variables).unwrap();
    n
}

fn data(name: &str) -> String {
    Path::new(TEST_DATA).join(name).display().to_string()
}

#[test]
fn test_expand_simple() {
    let v = vars(&[("test", "aap")]);
    for (doc, expected) in [
        ("thing: !expand $test", "aap"),
        ("thing: !expand $test/noot", "aap/noot"),
        ("thing: !expand aap/$test/mies", "aap/aap/mies"),
    ] {
        let n = expand_file(doc, "/example/location", &v);
        assert_eq!(n, node!({"thing" => expected}), "{}", doc);
    }
}

#[test]
fn test_expand_brackets() {
    let v = vars(&[("test", "noot")]);
    for (doc, expected) in [
        ("thing: !expand ${test}", "noot"),
        ("thing: !expand ${test}mies", "nootmies"),
        ("thing: !expand aap${test}mies", "aapnootmies"),
        ("thing: !expand aap${test", "aap${test"),
    ] {
        let n = expand_file(doc, "/example/location", &v);
        assert_eq!(n, node!({"thing" => expected}), "{}", doc);
    }
}

#[test]
fn test_expand_plain() {
    let v = vars(&[("a", "1")]);
    assert_eq!(expand_variables("no variables", &v), "no variables");
    assert_eq!(expand_variables("$a$a${a}", &v), "111");
    assert_eq!(expand_variables("cost: 5$ ${}", &v), "cost: 5$ ${}");
    assert_eq!(expand_variables("$b-$a", &v), "-1");
    assert_eq!(expand_variables("$a_b ${a}_b", &v), " 1_b");
}

#[test]
fn test_expand_dir() {
    let n = expand_file("thing: !expand $DIR", "/example/location", &Variables::new());
    assert_eq!(n, node!({"thing" => "/example"}));
    let n = expand_dir("thing: !expand $DIR", "/example/location", &Variables::new());
    assert_eq!(n, node!({"thing" => "/example/location"}));
    // Built-in variables win over the caller's
    let n = expand_dir("thing: !expand $DIR", "/a", &vars(&[("DIR", "/b")]));
    assert_eq!(n, node!({"thing" => "/a"}));
}

#[test]
fn test_expand_dir_empty() {
    let doc = "thing: !expand $DIR/other.yaml";
    let n = expand_file(doc, "file.yaml", &Variables::new());
    assert_eq!(n, node!({"thing" => "./other.yaml"}));
    let n = expand_dir(doc, "", &Variables::new());
    assert_eq!(n, node!({"thing" => "./other.yaml"}));
}

#[test]
fn test_expand_file() {
    let n = expand_file("thing: !expand $FILE", "path/file.yaml", &Variables::new());
    assert_eq!(n, node!({"thing" => "path/file.yaml"}));
    let n = expand_dir("thing: !expand $FILE", "", &vars(&[("FILE", "stale.yaml")]));
    assert_eq!(n, node!({"thing" => ""}));
}

#[test]
fn test_expand_nested() {
    let doc = "a: [!expand $x, {b: !expand $x}]\nc: !custom $x\nd: $x\n";
    let n = expand_dir(doc, "", &vars(&[("x", "1")]));
    assert_eq!(n.get_path(&["a"]), Some(&node!(["1", node!({"b" => "1"})])));
    assert_eq!(n.get("c").map(|n| n.tag.as_str()), Some("!custom"));
    assert_eq!(n.get("c").and_then(Node::as_scalar), Some("$x"));
    assert_eq!(n.get("d").and_then(Node::as_scalar), Some("$x"));
    // The expanded text is an ordinary scalar for the converters
    let err = parse_value::<Vec<u8>>(n.get("a").unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "[1]: unexpected node type, expected scalar, got map");
}

#[test]
fn test_include() {
    let n = preprocess_file(data("include.yaml"), &Variables::new()).unwrap();
    assert_eq!(n.get_path(&["b", "foo"]).and_then(Node::as_scalar), Some("bar"));
    assert_eq!(n.get("b").map(|n| n.tag.as_str()), Some(""));
    assert_eq!(parse_value::<u8>(n.get("a").unwrap()).unwrap(), 1);
}

#[test]
fn test_include_recursive() {
    let n = preprocess_file(data("recursive_include.yaml"), &Variables::new()).unwrap();
    assert_eq!(n.get_path(&["a", "b", "foo"]).and_then(Node::as_scalar), Some("bar"));
}

#[test]
fn test_include_relative() {
    let n = preprocess_file(data("dir_include.yaml"), &Variables::new()).unwrap();
    let child = Path::new(TEST_DATA).join("sub").join("child.yaml");
    assert_eq!(
        n.get_path(&["child", "here"]).and_then(Node::as_scalar),
        Some(child.display().to_string().as_str())
    );
    assert_eq!(n.get_path(&["child", "up", "foo"]).and_then(Node::as_scalar), Some("bar"));
    let list = format!("{}/list.yaml", TEST_DATA);
    assert_eq!(n.get("list"), Some(&node!([list])));
}

#[test]
fn test_include_variables() {
    let doc = "x: !include $DATA/included.yaml\ny: !include included.yaml\n";
    let n = expand_dir(doc, TEST_DATA, &vars(&[("DATA", TEST_DATA)]));
    assert_eq!(n, node!({"x" => node!({"foo" => "bar"}), "y" => node!({"foo" => "bar"})}));
}

#[test]
fn test_include_cycle() {
    let err = preprocess_file(data("cycle_a.yaml"), &Variables::new()).unwrap_err();
    match &err {
        LoadError::IncludeCycle { path } => {
            assert_eq!(path, &Path::new(TEST_DATA).join("cycle_a.yaml"));
        }
        err => panic!("unexpected error: {}", err),
    }
    assert!(err.to_string().ends_with("cycle_a.yaml includes itself"));
}

#[test]
fn test_include_errors() {
    let err = preprocess_file(data("bad_include.yaml"), &Variables::new()).unwrap_err();
    assert!(matches!(
        &err,
        LoadError::TagArgument { tag, kind: NodeKind::Sequence } if tag == "!include"
    ));
    assert_eq!(err.to_string(), "!include needs a string, got sequence");

    let mut n = parse_document("a: !include $NOTHING").unwrap();
    let err = preprocess_with_directory_path(&mut n, TEST_DATA, &Variables::new()).unwrap_err();
    assert!(matches!(err, LoadError::EmptyInclude));

    let mut n = parse_document("a: !include missing.yaml").unwrap();
    let err = preprocess_with_directory_path(&mut n, TEST_DATA, &Variables::new()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));

    let err = preprocess_file(data("missing.yaml"), &Variables::new()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
