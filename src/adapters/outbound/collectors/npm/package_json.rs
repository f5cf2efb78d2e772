use crate::dependency_resolution::domain::NpmDependencyKind;
use serde::Deserialize;
use std::collections::BTreeMap;

pub(super) const PACKAGE_JSON: &str = "package.json";

/// The parts of package.json that declare requirements
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    peer_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    optional_dependencies: BTreeMap<String, String>,
}

/// A requirement declared by the project itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct DeclaredDependency {
    pub name: String,
    pub range: String,
    pub kind: NpmDependencyKind,
}

impl PackageJson {
    /// Declared requirements; a name listed in several sections keeps the first
    /// of production, development, peer, optional
    pub fn declared(&self) -> Vec<DeclaredDependency> {
        let sections = [
            (&self.dependencies, NpmDependencyKind::Production),
            (&self.dev_dependencies, NpmDependencyKind::Development),
            (&self.peer_dependencies, NpmDependencyKind::Peer),
            (&self.optional_dependencies, NpmDependencyKind::Optional),
        ];

        let mut declared: BTreeMap<&str, DeclaredDependency> = BTreeMap::new();
        for (section, kind) in sections {
            for (name, range) in section {
                declared
                    .entry(name.as_str())
                    .or_insert_with(|| DeclaredDependency {
                        name: name.clone(),
                        range: range.clone(),
                        kind,
                    });
            }
        }
        declared.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_sections() {
        let pkg: PackageJson = serde_json::from_str(
            r#"{
                "name": "web",
                "dependencies": {"express": "^4.18.2"},
                "devDependencies": {"jest": "^29.0.0"},
                "peerDependencies": {"react": ">=18"},
                "optionalDependencies": {"fsevents": "^2.3.3"}
            }"#,
        )
        .unwrap();

        let declared = pkg.declared();
        let kinds: Vec<(&str, NpmDependencyKind)> =
            declared.iter().map(|d| (d.name.as_str(), d.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("express", NpmDependencyKind::Production),
                ("fsevents", NpmDependencyKind::Optional),
                ("jest", NpmDependencyKind::Development),
                ("react", NpmDependencyKind::Peer),
            ]
        );
        assert_eq!(declared[0].range, "^4.18.2");
    }

    #[test]
    fn test_name_in_two_sections_keeps_production() {
        let pkg: PackageJson = serde_json::from_str(
            r#"{"dependencies": {"ms": "2.1.3"}, "devDependencies": {"ms": "^2.0.0"}}"#,
        )
        .unwrap();
        let declared = pkg.declared();
        assert_eq!(declared.len(), 1);
        assert_eq!(declared[0].kind, NpmDependencyKind::Production);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let pkg: PackageJson = serde_json::from_str(r#"{"name": "empty"}"#).unwrap();
        assert!(pkg.declared().is_empty());
    }
}
