use crate::dependency_resolution::domain::ResolvedDependency;
use crate::shared::error::DeplisterError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ReportFilter - Drops report records whose name matches an exclusion pattern
///
/// Filtering happens after resolution, so the paths and parents reported
/// for the remaining dependencies still describe the full graph.
/// Patterns support `*` for zero or more characters and are case-sensitive.
#[derive(Debug)]
pub struct ReportFilter {
    patterns: Vec<ExcludePattern>,
}

impl ReportFilter {
    /// Creates a new ReportFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (empty, too long, bad characters, wildcards only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(DeplisterError::Validation {
                message: format!(
                    "Too many exclusion patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns only the dependencies that match no pattern
    pub fn filter(&self, dependencies: Vec<ResolvedDependency>) -> Vec<ResolvedDependency> {
        dependencies
            .into_iter()
            .filter(|dep| !self.matches(&dep.name))
            .collect()
    }

    /// Checks every pattern so each one records whether it was used
    fn matches(&self, name: &str) -> bool {
        self.patterns
            .iter()
            .fold(false, |matched, pattern| pattern.matches(name) || matched)
    }

    /// Patterns that did not match any dependency during filtering
    pub fn unmatched_patterns(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.as_str())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: GlobMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        Ok(Self {
            matcher: GlobMatcher::compile(&pattern),
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = self.matcher.matches(name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Anchored `*` glob split into its literal segments
#[derive(Debug)]
struct GlobMatcher {
    segments: Vec<String>,
}

impl GlobMatcher {
    fn compile(pattern: &str) -> Self {
        Self {
            segments: pattern.split('*').map(str::to_string).collect(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        // One segment means no wildcard at all
        let (first, rest) = match self.segments.split_first() {
            Some(split) => split,
            None => return false,
        };
        if rest.is_empty() {
            return name == first;
        }

        let Some(mut remaining) = name.strip_prefix(first.as_str()) else {
            return false;
        };

        let (last, middle) = rest.split_last().unwrap_or((first, &[]));
        for segment in middle {
            match remaining.find(segment.as_str()) {
                Some(pos) => remaining = &remaining[pos + segment.len()..],
                None => return false,
            }
        }
        remaining.ends_with(last.as_str())
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> anyhow::Error { DeplisterError::Validation { message }.into() };

    if pattern.is_empty() {
        return Err(invalid("Exclusion pattern cannot be empty".to_string()));
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(invalid(format!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        )));
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        return Err(invalid(format!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric characters and - _ . @ / ~ + * are allowed.",
            ch, pattern
        )));
    }

    if pattern.chars().all(|c| c == '*') {
        return Err(invalid(format!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        )));
    }

    Ok(())
}

/// npm names carry `@scope/` and Go module paths carry `/`, `~` and `+`
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/' | '~' | '+' | '*')
}
