use std::collections::BTreeMap;

/// Section of package.json a direct npm dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NpmDependencyKind {
    Production,
    Development,
    Peer,
    Optional,
}

impl NpmDependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NpmDependencyKind::Production => "production",
            NpmDependencyKind::Development => "development",
            NpmDependencyKind::Peer => "peer",
            NpmDependencyKind::Optional => "optional",
        }
    }
}

/// Lock entry metadata for an npm package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NpmMetadata {
    pub resolved: Option<String>,
    pub integrity: Option<String>,
    pub dev: bool,
    pub peer: bool,
    pub optional: bool,
    /// Set only for packages the project's package.json declares itself
    pub declared_as: Option<NpmDependencyKind>,
}

/// Target of a `replace` directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReplacement {
    pub path: String,
    pub version: Option<String>,
}

/// Module metadata reported by `go list -m -json`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoMetadata {
    pub indirect: bool,
    pub replace: Option<ModuleReplacement>,
    pub go_version: Option<String>,
}

/// Ecosystem-specific metadata attached to a graph node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeMetadata {
    Npm(NpmMetadata),
    Go(GoMetadata),
    /// Free-form key/value metadata for collectors without a typed schema
    Generic(BTreeMap<String, String>),
}

impl Default for NodeMetadata {
    fn default() -> Self {
        NodeMetadata::Generic(BTreeMap::new())
    }
}

impl NodeMetadata {
    /// Whether the ecosystem's tooling flags this node as an indirect requirement
    pub fn marks_indirect(&self) -> bool {
        match self {
            NodeMetadata::Go(go) => go.indirect,
            NodeMetadata::Npm(_) => false,
            NodeMetadata::Generic(props) => props.get("indirect").is_some_and(|v| v == "true"),
        }
    }

    /// Derives the `dependencyType` report property from the ecosystem's rules
    ///
    /// npm: the declaring package.json section for direct dependencies,
    /// otherwise the lock flags in the order dev, peer, optional.
    /// Go: `direct` or `indirect`.
    pub fn dependency_type(&self, is_direct: bool) -> Option<&'static str> {
        match self {
            NodeMetadata::Npm(npm) => {
                if let (true, Some(kind)) = (is_direct, npm.declared_as) {
                    return Some(kind.as_str());
                }
                let kind = if npm.dev {
                    NpmDependencyKind::Development
                } else if npm.peer {
                    NpmDependencyKind::Peer
                } else if npm.optional {
                    NpmDependencyKind::Optional
                } else {
                    NpmDependencyKind::Production
                };
                Some(kind.as_str())
            }
            NodeMetadata::Go(_) => Some(if is_direct { "direct" } else { "indirect" }),
            NodeMetadata::Generic(_) => None,
        }
    }

    /// Flattens the metadata into the free-form report properties
    pub fn properties(&self) -> BTreeMap<String, String> {
        let mut props = BTreeMap::new();
        match self {
            NodeMetadata::Npm(npm) => {
                if let Some(resolved) = &npm.resolved {
                    props.insert("resolved".to_string(), resolved.clone());
                }
                if let Some(integrity) = &npm.integrity {
                    props.insert("integrity".to_string(), integrity.clone());
                }
                for (key, flag) in [("dev", npm.dev), ("peer", npm.peer), ("optional", npm.optional)] {
                    if flag {
                        props.insert(key.to_string(), "true".to_string());
                    }
                }
            }
            NodeMetadata::Go(go) => {
                props.insert("indirect".to_string(), go.indirect.to_string());
                if let Some(replace) = &go.replace {
                    props.insert("replaced_by".to_string(), replace.path.clone());
                    if let Some(version) = &replace.version {
                        props.insert("replaced_version".to_string(), version.clone());
                    }
                }
                if let Some(go_version) = &go.go_version {
                    props.insert("go_version".to_string(), go_version.clone());
                }
            }
            NodeMetadata::Generic(map) => props.extend(map.clone()),
        }
        props
    }
}

/// Raw record for a single node as supplied by a collector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRecord {
    version: String,
    metadata: NodeMetadata,
}

impl NodeRecord {
    pub fn new(version: impl Into<String>, metadata: NodeMetadata) -> Self {
        Self {
            version: version.into(),
            metadata,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn metadata(&self) -> &NodeMetadata {
        &self.metadata
    }
}
