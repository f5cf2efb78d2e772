use serde::Serialize;
use std::fmt;

/// Package manager a dependency graph was collected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Npm,
    Go,
}

impl Ecosystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::Go => "go",
        }
    }

    /// Whether the project root is listed among a direct dependency's parents.
    ///
    /// npm reports the root like any other requirer. Go's root is the main
    /// module alias and is always left out.
    pub fn reports_root_parent(&self) -> bool {
        matches!(self, Ecosystem::Npm)
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
