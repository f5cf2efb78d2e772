use crate::dependency_resolution::domain::{GoMetadata, ModuleReplacement};
use crate::shared::error::DeplisterError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Pseudo-modules `go mod graph` emits for the toolchain requirement
const TOOLCHAIN_MODULES: [&str; 2] = ["go", "toolchain"];

/// One object of the `go list -m -json all` stream
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ModuleInfo {
    pub path: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub main: bool,
    #[serde(default)]
    pub indirect: bool,
    #[serde(default)]
    pub replace: Option<Replacement>,
    #[serde(default)]
    pub go_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct Replacement {
    pub path: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl ModuleInfo {
    pub fn metadata(&self) -> GoMetadata {
        GoMetadata {
            indirect: self.indirect,
            replace: self.replace.as_ref().map(|r| ModuleReplacement {
                path: r.path.clone(),
                version: r.version.clone(),
            }),
            go_version: self.go_version.clone(),
        }
    }
}

/// Parses the stream of concatenated JSON objects printed by `go list -m -json`
///
/// The objects are pretty-printed over many lines, so the input is read as a
/// value stream rather than line by line.
pub(super) fn parse_module_list(output: &str) -> Result<Vec<ModuleInfo>> {
    serde_json::Deserializer::from_str(output)
        .into_iter::<ModuleInfo>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| {
            DeplisterError::invalid_project(format!("`go list -m -json all` output is not valid JSON: {}", e))
                .into()
        })
}

/// Parses `go mod graph` into `(from, to)` module-path edges
///
/// Versions are stripped. A node printed without a version is the main
/// module and becomes `root`.
pub(super) fn parse_module_graph(output: &str, root: &str) -> Result<BTreeSet<(String, String)>> {
    let mut edges = BTreeSet::new();
    for (index, line) in output.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(from), Some(to), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(DeplisterError::invalid_project(format!(
                "`go mod graph` line {} is malformed: '{}'",
                index + 1,
                line
            ))
            .into());
        };

        let to = module_path(to);
        if TOOLCHAIN_MODULES.contains(&to) {
            continue;
        }
        let from = match from.split_once('@') {
            Some((path, _)) => path,
            None => root,
        };
        edges.insert((from.to_string(), to.to_string()));
    }
    Ok(edges)
}

fn module_path(node: &str) -> &str {
    node.split_once('@').map_or(node, |(path, _)| path)
}
