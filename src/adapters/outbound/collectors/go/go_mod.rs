use crate::shared::error::DeplisterError;
use crate::shared::Result;

pub(super) const GO_MOD: &str = "go.mod";

/// One `require` entry of go.mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct GoRequirement {
    pub path: String,
    pub version: String,
    /// Marked with an `// indirect` comment
    pub indirect: bool,
}

/// The directives of go.mod the collector needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct GoModFile {
    pub module: String,
    pub requirements: Vec<GoRequirement>,
}

impl GoModFile {
    /// Requirements the module declares itself
    pub fn direct_requirements(&self) -> impl Iterator<Item = &GoRequirement> {
        self.requirements.iter().filter(|req| !req.indirect)
    }
}

/// Parses the `module` directive and every `require` entry, block or single-line
pub(super) fn parse_go_mod(content: &str) -> Result<GoModFile> {
    let mut module = None;
    let mut requirements = Vec::new();
    let mut in_require_block = false;

    for (index, raw_line) in content.lines().enumerate() {
        let (code, comment) = split_comment(raw_line);
        let line = code.trim();
        if line.is_empty() {
            continue;
        }

        if in_require_block {
            if line == ")" {
                in_require_block = false;
            } else {
                requirements.push(parse_requirement(line, comment, index + 1)?);
            }
            continue;
        }

        let mut words = line.splitn(2, char::is_whitespace);
        let directive = words.next().unwrap_or_default();
        let rest = words.next().unwrap_or_default().trim();
        match directive {
            "module" => module = Some(unquote(rest).to_string()),
            "require" if rest == "(" => in_require_block = true,
            "require" => requirements.push(parse_requirement(rest, comment, index + 1)?),
            _ => {}
        }
    }

    match module {
        Some(module) if !module.is_empty() => Ok(GoModFile {
            module,
            requirements,
        }),
        _ => Err(DeplisterError::invalid_project(format!(
            "{} has no module directive",
            GO_MOD
        ))
        .into()),
    }
}

fn parse_requirement(entry: &str, comment: Option<&str>, line_number: usize) -> Result<GoRequirement> {
    let mut fields = entry.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(path), Some(version)) => Ok(GoRequirement {
            path: unquote(path).to_string(),
            version: version.to_string(),
            indirect: comment.is_some_and(|c| c.trim() == "indirect" || c.trim().starts_with("indirect;")),
        }),
        _ => Err(DeplisterError::invalid_project(format!(
            "{} line {}: malformed require entry '{}'",
            GO_MOD, line_number, entry
        ))
        .into()),
    }
}

fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.find("//") {
        Some(pos) => (&line[..pos], Some(&line[pos + 2..])),
        None => (line, None),
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '`')
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO_MOD_CONTENT: &str = r#"
// Service entry point
module example.com/app

go 1.21

require github.com/spf13/cobra v1.8.0

require (
	github.com/pkg/errors v0.9.1
	golang.org/x/text v0.14.0 // indirect
	"github.com/quoted/mod" v1.0.0
)

replace github.com/pkg/errors => github.com/fork/errors v0.9.2
"#;

    #[test]
    fn test_parse_module_and_requirements() {
        let go_mod = parse_go_mod(GO_MOD_CONTENT).unwrap();
        assert_eq!(go_mod.module, "example.com/app");
        assert_eq!(go_mod.requirements.len(), 4);
        assert_eq!(
            go_mod.requirements[0],
            GoRequirement {
                path: "github.com/spf13/cobra".to_string(),
                version: "v1.8.0".to_string(),
                indirect: false,
            }
        );
        assert!(go_mod.requirements[2].indirect);
        assert_eq!(go_mod.requirements[3].path, "github.com/quoted/mod");
    }

    #[test]
    fn test_direct_requirements_skip_indirect() {
        let go_mod = parse_go_mod(GO_MOD_CONTENT).unwrap();
        let direct: Vec<&str> = go_mod
            .direct_requirements()
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(
            direct,
            vec!["github.com/spf13/cobra", "github.com/pkg/errors", "github.com/quoted/mod"]
        );
    }

    #[test]
    fn test_missing_module_directive() {
        let err = parse_go_mod("go 1.21\n").unwrap_err();
        assert!(err.to_string().contains("no module directive"));
    }

    #[test]
    fn test_malformed_require_entry() {
        let err = parse_go_mod("module a\nrequire (\n\tgithub.com/only/path\n)\n").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_single_line_require_with_indirect_comment() {
        let go_mod = parse_go_mod(
            "module example.com/app\n\nrequire golang.org/x/sys v0.15.0 // indirect\nrequire github.com/spf13/pflag v1.0.5\n",
        )
        .unwrap();

        assert_eq!(go_mod.requirements.len(), 2);
        assert_eq!(go_mod.requirements[0].path, "golang.org/x/sys");
        assert!(go_mod.requirements[0].indirect);
        assert!(!go_mod.requirements[1].indirect);
        let direct: Vec<&str> = go_mod.direct_requirements().map(|r| r.path.as_str()).collect();
        assert_eq!(direct, vec!["github.com/spf13/pflag"]);
    }
}
