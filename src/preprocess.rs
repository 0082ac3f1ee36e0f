//! Preprocessing of loaded documents.
//!
//! Two tags are handled:
//!
//! + `!include <path>` replaces the node with the preprocessed content of another file,
//!   a relative path is resolved from the directory of the including file.
//! + `!expand <text>` replaces the node with the text after variable expansion.
//!
//! Both expand `$NAME` and `${NAME}` variables.
//! Besides the caller's variables, `DIR` is the directory of the current file and
//! `FILE` is the current file itself.
use crate::*;
use std::{
    collections::BTreeMap,
    path::{Component, Path, PathBuf},
};
use tracing::debug;

/// Variables for the `!expand` and `!include` tags.
pub type Variables = BTreeMap<String, String>;

struct PathInfo {
    dir: PathBuf,
    file: Option<PathBuf>,
}

impl PathInfo {
    fn for_file(file: &Path) -> Self {
        Self {
            dir: file.parent().map(Path::to_path_buf).unwrap_or_default(),
            file: Some(file.to_path_buf()),
        }
    }

    fn for_directory(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            file: None,
        }
    }

    fn variables(&self, base: &Variables) -> Variables {
        let mut variables = base.clone();
        let dir = if self.dir.as_os_str().is_empty() {
            ".".to_string()
        } else {
            self.dir.display().to_string()
        };
        variables.insert("DIR".into(), dir);
        match &self.file {
            Some(file) => variables.insert("FILE".into(), file.display().to_string()),
            None => variables.remove("FILE"),
        };
        variables
    }
}

/// Expand `$NAME` and `${NAME}` in the text.
///
/// Unknown variables expand to an empty string,
/// a `$` that starts no variable name is kept as is.
///
/// ```
/// use yaml_param::{expand_variables, Variables};
/// let mut vars = Variables::new();
/// vars.insert("test".into(), "aap".into());
/// assert_eq!(expand_variables("$test/noot", &vars), "aap/noot");
/// assert_eq!(expand_variables("x${test}y", &vars), "xaapy");
/// assert_eq!(expand_variables("$missing.yaml", &vars), ".yaml");
/// assert_eq!(expand_variables("5$", &vars), "5$");
/// ```
pub fn expand_variables(text: &str, variables: &Variables) -> String {
    let is_name = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('$') {
        output += &rest[..pos];
        let after = &rest[pos + 1..];
        let (name, tail) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], &braced[end + 1..]),
                None => ("", after),
            }
        } else {
            let end = after.find(|c| !is_name(c)).unwrap_or(after.len());
            (&after[..end], &after[end..])
        };
        if name.is_empty() {
            output.push('$');
            rest = after;
        } else {
            if let Some(value) = variables.get(name) {
                output += value;
            }
            rest = tail;
        }
    }
    output += rest;
    output
}

/// Lexically normalize a path, without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut output = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match output.components().next_back() {
                Some(Component::Normal(_)) => {
                    output.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => output.push(".."),
            },
            c => output.push(c),
        }
    }
    output
}

fn tag_argument<'a>(node: &'a Node) -> Result<&'a str, LoadError> {
    node.as_scalar().ok_or_else(|| LoadError::TagArgument {
        tag: node.tag.clone(),
        kind: node.kind(),
    })
}

struct Preprocessor<'a> {
    base: &'a Variables,
    chain: Vec<PathBuf>,
}

impl Preprocessor<'_> {
    fn process(&mut self, node: &mut Node, info: &PathInfo) -> Result<(), LoadError> {
        let variables = info.variables(self.base);
        self.process_node(node, info, &variables)
    }

    fn process_node(
        &mut self,
        node: &mut Node,
        info: &PathInfo,
        variables: &Variables,
    ) -> Result<(), LoadError> {
        if node.tag == "!include" {
            let path = expand_variables(tag_argument(node)?, variables);
            if path.is_empty() {
                return Err(LoadError::EmptyInclude);
            }
            let path = normalize(&info.dir.join(path));
            if self.chain.contains(&path) {
                return Err(LoadError::IncludeCycle { path });
            }
            debug!(path = %path.display(), "including document");
            let mut included = load_document(&path)?;
            let child = PathInfo::for_file(&path);
            self.chain.push(path);
            let result = self.process(&mut included, &child);
            self.chain.pop();
            result?;
            *node = included;
        } else if node.tag == "!expand" {
            let text = expand_variables(tag_argument(node)?, variables);
            debug!(%text, "expanded variables");
            *node = Node::from(text);
        } else {
            match &mut node.yaml {
                Yaml::Seq(seq) => {
                    for n in seq.iter_mut() {
                        self.process_node(n, info, variables)?;
                    }
                }
                Yaml::Map(m) => {
                    for (_, n) in m.iter_mut() {
                        self.process_node(n, info, variables)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn preprocess(root: &mut Node, info: PathInfo, variables: &Variables) -> Result<(), LoadError> {
    let mut preprocessor = Preprocessor {
        base: variables,
        chain: info.file.as_deref().map(normalize).into_iter().collect(),
    };
    preprocessor.process(root, &info)
}

/// Preprocess a document that was loaded from `file`.
///
/// ```
/// use yaml_param::{node, parse_document, preprocess_with_file_path, Variables};
/// let mut n = parse_document("thing: !expand $DIR/other.yaml").unwrap();
/// preprocess_with_file_path(&mut n, "/example/location", &Variables::new()).unwrap();
/// assert_eq!(n, node!({"thing" => "/example/other.yaml"}));
/// ```
pub fn preprocess_with_file_path(
    root: &mut Node,
    file: impl AsRef<Path>,
    variables: &Variables,
) -> Result<(), LoadError> {
    preprocess(root, PathInfo::for_file(file.as_ref()), variables)
}

/// Preprocess a document that belongs to `directory`, `FILE` is not defined.
pub fn preprocess_with_directory_path(
    root: &mut Node,
    directory: impl AsRef<Path>,
    variables: &Variables,
) -> Result<(), LoadError> {
    preprocess(root, PathInfo::for_directory(directory.as_ref()), variables)
}

/// Load a document from a file and preprocess it.
pub fn preprocess_file(path: impl AsRef<Path>, variables: &Variables) -> Result<Node, LoadError> {
    let path = path.as_ref();
    let mut node = load_document(path)?;
    preprocess_with_file_path(&mut node, path, variables)?;
    Ok(node)
}
