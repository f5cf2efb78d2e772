use crate::dependency_resolution::domain::NpmMetadata;
use crate::shared::error::DeplisterError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

pub(super) const PACKAGE_LOCK: &str = "package-lock.json";

const NODE_MODULES: &str = "node_modules/";

/// Newest lockfile layout this parser understands
const MAX_LOCKFILE_VERSION: u32 = 3;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageLock {
    #[serde(default)]
    lockfile_version: Option<u32>,
    /// Flat install tree used by lockfile v2 and v3
    #[serde(default)]
    packages: BTreeMap<String, PackageEntry>,
    /// Nested tree used by lockfile v1
    #[serde(default)]
    dependencies: BTreeMap<String, LegacyEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageEntry {
    version: Option<String>,
    resolved: Option<String>,
    integrity: Option<String>,
    #[serde(default)]
    dev: bool,
    #[serde(default)]
    peer: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    dev_optional: bool,
    #[serde(default)]
    link: bool,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default)]
    optional_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    peer_dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct LegacyEntry {
    #[serde(default)]
    version: String,
    resolved: Option<String>,
    integrity: Option<String>,
    #[serde(default)]
    dev: bool,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    requires: BTreeMap<String, String>,
    #[serde(default)]
    dependencies: BTreeMap<String, LegacyEntry>,
}

/// A package installed according to the lockfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct LockedPackage {
    pub version: String,
    pub metadata: NpmMetadata,
}

/// Packages keyed by name plus the requirement edges between them
#[derive(Debug, Default)]
pub(super) struct LockedGraph {
    pub packages: BTreeMap<String, LockedPackage>,
    pub edges: BTreeSet<(String, String)>,
}

/// Parses package-lock.json in any of the v1, v2 or v3 layouts
///
/// The same package name can be installed at several places in the tree.
/// The shallowest (hoisted) copy supplies the node record, and the
/// requirements of every copy are merged onto that name.
pub(super) fn parse_package_lock(content: &str) -> Result<LockedGraph> {
    let lock: PackageLock = serde_json::from_str(content).map_err(|e| {
        DeplisterError::invalid_project(format!("{} is not valid JSON: {}", PACKAGE_LOCK, e))
    })?;

    if let Some(version) = lock.lockfile_version.filter(|v| *v > MAX_LOCKFILE_VERSION) {
        return Err(DeplisterError::invalid_project(format!(
            "{} uses lockfileVersion {}, only versions 1 to {} are supported",
            PACKAGE_LOCK, version, MAX_LOCKFILE_VERSION
        ))
        .into());
    }

    if lock.packages.is_empty() {
        Ok(from_legacy_tree(&lock.dependencies))
    } else {
        Ok(from_package_tree(&lock.packages))
    }
}

fn from_package_tree(packages: &BTreeMap<String, PackageEntry>) -> LockedGraph {
    let mut entries: Vec<(&str, usize, &str, &PackageEntry)> = packages
        .iter()
        .filter_map(|(key, entry)| {
            package_name(key).map(|name| (name, nesting_depth(key), key.as_str(), entry))
        })
        .collect();
    entries.sort_by_key(|(_, depth, key, _)| (*depth, *key));

    let mut graph = LockedGraph::default();
    for (name, _, _, entry) in entries {
        if !graph.packages.contains_key(name) {
            let version = if entry.link {
                // Workspace links carry their version on the link target
                entry
                    .resolved
                    .as_ref()
                    .and_then(|target| packages.get(target))
                    .and_then(|target| target.version.clone())
            } else {
                entry.version.clone()
            };
            graph.packages.insert(
                name.to_string(),
                LockedPackage {
                    version: version.unwrap_or_default(),
                    metadata: NpmMetadata {
                        resolved: entry.resolved.clone().filter(|_| !entry.link),
                        integrity: entry.integrity.clone(),
                        dev: entry.dev || entry.dev_optional,
                        peer: entry.peer,
                        optional: entry.optional,
                        declared_as: None,
                    },
                },
            );
        }

        let requirements = entry
            .dependencies
            .keys()
            .chain(entry.optional_dependencies.keys())
            .chain(entry.peer_dependencies.keys());
        for dep in requirements {
            graph.edges.insert((name.to_string(), dep.clone()));
        }
    }
    graph
}

fn from_legacy_tree(dependencies: &BTreeMap<String, LegacyEntry>) -> LockedGraph {
    let mut graph = LockedGraph::default();
    let mut queue = VecDeque::from([dependencies]);

    // Breadth-first so hoisted entries are seen before nested ones
    while let Some(level) = queue.pop_front() {
        for (name, entry) in level {
            graph
                .packages
                .entry(name.clone())
                .or_insert_with(|| LockedPackage {
                    version: entry.version.clone(),
                    metadata: NpmMetadata {
                        resolved: entry.resolved.clone(),
                        integrity: entry.integrity.clone(),
                        dev: entry.dev,
                        optional: entry.optional,
                        ..Default::default()
                    },
                });
            for dep in entry.requires.keys() {
                graph.edges.insert((name.clone(), dep.clone()));
            }
            if !entry.dependencies.is_empty() {
                queue.push_back(&entry.dependencies);
            }
        }
    }
    graph
}

/// `node_modules/a/node_modules/@scope/b` -> `@scope/b`; workspace and root keys -> None
fn package_name(key: &str) -> Option<&str> {
    let start = key.rfind(NODE_MODULES)? + NODE_MODULES.len();
    Some(&key[start..]).filter(|name| !name.is_empty())
}

fn nesting_depth(key: &str) -> usize {
    key.matches(NODE_MODULES).count()
}
