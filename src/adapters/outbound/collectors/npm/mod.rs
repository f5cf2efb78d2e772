mod package_json;
mod package_lock;

use crate::dependency_resolution::domain::{
    Ecosystem, NodeMetadata, NodeRecord, NpmDependencyKind, NpmMetadata,
};
use crate::ports::outbound::{CollectedDependencies, DependencyCollector, ManifestReader};
use crate::shared::error::DeplisterError;
use crate::shared::Result;
use package_json::{DeclaredDependency, PackageJson, PACKAGE_JSON};
use package_lock::{parse_package_lock, PACKAGE_LOCK};
use std::collections::HashMap;
use std::path::Path;

/// Identity of the project itself, matching the root key of package-lock.json
const NPM_ROOT: &str = "";

/// NpmCollector adapter reading package.json and package-lock.json
///
/// Without a lockfile only the declared requirements are known; they are
/// reported with their declared ranges as versions.
pub struct NpmCollector<R> {
    reader: R,
}

impl<R: ManifestReader> NpmCollector<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_package_json(&self, project_path: &Path) -> Result<PackageJson> {
        let content = self.reader.read_manifest(project_path, PACKAGE_JSON)?;
        serde_json::from_str(&content).map_err(|e| {
            DeplisterError::invalid_project(format!("{} is not valid JSON: {}", PACKAGE_JSON, e))
                .into()
        })
    }
}

impl<R: ManifestReader> DependencyCollector for NpmCollector<R> {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn detect(&self, project_path: &Path) -> bool {
        self.reader.manifest_exists(project_path, PACKAGE_JSON)
    }

    fn collect(&self, project_path: &Path) -> Result<CollectedDependencies> {
        let declared = self.read_package_json(project_path)?.declared();
        let mut collected = CollectedDependencies::new(Ecosystem::Npm, NPM_ROOT);

        for dep in &declared {
            collected.declared_direct.insert(dep.name.clone());
            collected
                .edges
                .push((NPM_ROOT.to_string(), dep.name.clone()));
        }
        let kinds: HashMap<&str, NpmDependencyKind> = declared
            .iter()
            .map(|dep| (dep.name.as_str(), dep.kind))
            .collect();

        if !self.reader.manifest_exists(project_path, PACKAGE_LOCK) {
            collected
                .nodes
                .extend(declared.iter().map(|dep| (dep.name.clone(), declared_only(dep))));
            return Ok(collected);
        }

        let content = self.reader.read_manifest(project_path, PACKAGE_LOCK)?;
        let locked = parse_package_lock(&content)?;

        for (name, package) in locked.packages {
            let mut metadata = package.metadata;
            metadata.declared_as = kinds.get(name.as_str()).copied();
            collected
                .nodes
                .push((name, NodeRecord::new(package.version, NodeMetadata::Npm(metadata))));
        }

        // Declared but not installed: still reported, at the declared range
        let missing: Vec<(String, NodeRecord)> = declared
            .iter()
            .filter(|dep| !collected.nodes.iter().any(|(name, _)| *name == dep.name))
            .map(|dep| (dep.name.clone(), declared_only(dep)))
            .collect();
        collected.nodes.extend(missing);
        collected.edges.extend(locked.edges);

        Ok(collected)
    }
}

fn declared_only(dep: &DeclaredDependency) -> NodeRecord {
    NodeRecord::new(
        dep.range.clone(),
        NodeMetadata::Npm(NpmMetadata {
            dev: dep.kind == NpmDependencyKind::Development,
            peer: dep.kind == NpmDependencyKind::Peer,
            optional: dep.kind == NpmDependencyKind::Optional,
            declared_as: Some(dep.kind),
            ..Default::default()
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct InMemoryReader {
        files: BTreeMap<&'static str, &'static str>,
    }

    impl InMemoryReader {
        fn new(files: &[(&'static str, &'static str)]) -> Self {
            Self {
                files: files.iter().copied().collect(),
            }
        }
    }

    impl ManifestReader for InMemoryReader {
        fn manifest_exists(&self, _project_path: &Path, file_name: &str) -> bool {
            self.files.contains_key(file_name)
        }

        fn read_manifest(&self, project_path: &Path, file_name: &str) -> Result<String> {
            self.files
                .get(file_name)
                .map(|content| content.to_string())
                .ok_or_else(|| {
                    DeplisterError::ProjectNotFound {
                        path: project_path.to_path_buf(),
                        suggestion: format!("{} is missing", file_name),
                    }
                    .into()
                })
        }
    }

    const PACKAGE: &str = r#"{
        "name": "web",
        "dependencies": {"express": "^4.18.2"},
        "devDependencies": {"jest": "^29.7.0"}
    }"#;

    const LOCK: &str = r#"{
        "lockfileVersion": 3,
        "packages": {
            "": {"name": "web"},
            "node_modules/express": {"version": "4.18.2", "dependencies": {"accepts": "~1.3.8"}},
            "node_modules/accepts": {"version": "1.3.8"},
            "node_modules/jest": {"version": "29.7.0", "dev": true}
        }
    }"#;

    fn node<'a>(collected: &'a CollectedDependencies, name: &str) -> &'a NodeRecord {
        &collected.nodes.iter().find(|(n, _)| n == name).unwrap().1
    }

    #[test]
    fn test_detect_requires_package_json() {
        let collector = NpmCollector::new(InMemoryReader::new(&[("package.json", "{}")]));
        assert!(collector.detect(Path::new(".")));

        let collector = NpmCollector::new(InMemoryReader::new(&[("go.mod", "")]));
        assert!(!collector.detect(Path::new(".")));
    }

    #[test]
    fn test_collect_with_lockfile() {
        let collector = NpmCollector::new(InMemoryReader::new(&[
            ("package.json", PACKAGE),
            ("package-lock.json", LOCK),
        ]));
        let collected = collector.collect(Path::new(".")).unwrap();

        assert_eq!(collected.root, "");
        assert_eq!(collected.nodes.len(), 3);
        assert!(collected.declared_direct.contains("express"));
        assert!(collected.declared_direct.contains("jest"));
        assert!(collected
            .edges
            .contains(&("express".to_string(), "accepts".to_string())));
        assert!(collected
            .edges
            .contains(&("".to_string(), "jest".to_string())));

        let jest = node(&collected, "jest");
        assert_eq!(jest.version(), "29.7.0");
        assert_eq!(jest.metadata().dependency_type(true), Some("development"));
        assert_eq!(node(&collected, "accepts").metadata().dependency_type(false), Some("production"));
    }

    #[test]
    fn test_collect_without_lockfile_uses_declared_ranges() {
        let collector = NpmCollector::new(InMemoryReader::new(&[("package.json", PACKAGE)]));
        let collected = collector.collect(Path::new(".")).unwrap();

        assert_eq!(collected.nodes.len(), 2);
        assert_eq!(node(&collected, "express").version(), "^4.18.2");
        assert_eq!(collected.edges.len(), 2);
    }

    #[test]
    fn test_declared_but_not_installed_is_kept() {
        let collector = NpmCollector::new(InMemoryReader::new(&[
            ("package.json", r#"{"dependencies": {"express": "^4.18.2", "left-pad": "^1.3.0"}}"#),
            ("package-lock.json", LOCK),
        ]));
        let collected = collector.collect(Path::new(".")).unwrap();
        assert_eq!(node(&collected, "left-pad").version(), "^1.3.0");
    }

    #[test]
    fn test_malformed_package_json_is_invalid_project() {
        let collector = NpmCollector::new(InMemoryReader::new(&[("package.json", "[1, 2")]));
        let err = collector.collect(Path::new(".")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DeplisterError>(),
            Some(DeplisterError::InvalidProject { .. })
        ));
    }

    #[test]
    fn test_missing_package_json_is_project_not_found() {
        let collector = NpmCollector::new(InMemoryReader::new(&[]));
        let err = collector.collect(Path::new(".")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DeplisterError>(),
            Some(DeplisterError::ProjectNotFound { .. })
        ));
    }
}
