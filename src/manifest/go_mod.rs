//! go.mod parser for Go projects
//!
//! Handles:
//! - require statements (single and block)
//! - `// indirect` comments
//! - replace/exclude/retract and other directives (skipped)

use crate::domain::ManifestEntry;
use crate::error::ManifestError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directives that carry no requirements and are skipped, including their blocks
const SKIPPED_DIRECTIVES: &[&str] = &[
    "module",
    "go",
    "toolchain",
    "godebug",
    "replace",
    "exclude",
    "retract",
    "tool",
    "ignore",
];

/// Parser for go.mod files
#[derive(Debug, Clone)]
pub struct GoModParser {
    /// Path used in error messages
    path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    Require { start: usize },
    Skipped { start: usize },
}

impl GoModParser {
    /// Create a parser that reports errors against the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse all require entries from go.mod content, in file order
    pub fn parse(&self, content: &str) -> Result<Vec<ManifestEntry>, ManifestError> {
        let mut entries = Vec::new();
        let mut block = Block::None;

        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            let (code, comment) = split_comment(line);
            let code = code.trim();

            if code.is_empty() {
                continue;
            }

            match block {
                Block::Require { .. } | Block::Skipped { .. } if code == ")" => {
                    block = Block::None;
                }
                Block::Require { .. } => {
                    entries.push(self.parse_requirement(code, comment, line_no)?);
                }
                Block::Skipped { .. } => {}
                Block::None => {
                    let (directive, rest) = split_directive(code);
                    let opens_block = rest == "(";

                    // `require ()` and friends declare nothing
                    if is_empty_block(rest) {
                        debug!("empty '{}' block at line {}", directive, line_no);
                    } else if directive == "require" {
                        if opens_block {
                            block = Block::Require { start: line_no };
                        } else {
                            entries.push(self.parse_requirement(rest, comment, line_no)?);
                        }
                    } else if opens_block {
                        if !SKIPPED_DIRECTIVES.contains(&directive) {
                            debug!("skipping unknown go.mod block '{}' at line {}", directive, line_no);
                        }
                        block = Block::Skipped { start: line_no };
                    } else if code == ")" {
                        return Err(ManifestError::go_mod_parse_error(
                            &self.path,
                            line_no,
                            "unexpected ')' outside of a block",
                        ));
                    } else if !SKIPPED_DIRECTIVES.contains(&directive) {
                        debug!("skipping unknown go.mod directive '{}' at line {}", directive, line_no);
                    }
                }
            }
        }

        match block {
            Block::None => Ok(entries),
            Block::Require { start } | Block::Skipped { start } => Err(
                ManifestError::go_mod_parse_error(&self.path, start, "unterminated block"),
            ),
        }
    }

    fn parse_requirement(
        &self,
        code: &str,
        comment: Option<&str>,
        line_no: usize,
    ) -> Result<ManifestEntry, ManifestError> {
        let fields: Vec<&str> = code.split_whitespace().collect();
        let [module, version] = fields.as_slice() else {
            return Err(ManifestError::go_mod_parse_error(
                &self.path,
                line_no,
                format!("malformed require line '{}': expected module path and version", code),
            ));
        };

        let module = unquote(module);
        if module.is_empty() {
            return Err(ManifestError::go_mod_parse_error(
                &self.path,
                line_no,
                "empty module path",
            ));
        }

        let version = unquote(version);
        if !version.starts_with('v') {
            return Err(ManifestError::go_mod_parse_error(
                &self.path,
                line_no,
                format!("invalid version '{}' for {}", version, module),
            ));
        }

        let indirect = comment.is_some_and(is_indirect_comment);
        Ok(ManifestEntry::new(module, version, indirect).at_line(line_no))
    }
}

/// Read and parse a go.mod file from disk
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })?;

    let entries = GoModParser::new(path).parse(&content)?;
    debug!("read {} require entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Split a line into code and the text of its trailing `//` comment
fn split_comment(line: &str) -> (&str, Option<&str>) {
    match line.find("//") {
        Some(idx) => (&line[..idx], Some(line[idx + 2..].trim())),
        None => (line, None),
    }
}

fn is_empty_block(rest: &str) -> bool {
    rest.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .is_some_and(|inner| inner.trim().is_empty())
}

/// Split `directive rest...` on the first whitespace or opening parenthesis
fn split_directive(code: &str) -> (&str, &str) {
    let end = code
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(code.len());
    (&code[..end], code[end..].trim())
}

/// `// indirect` or `// indirect; other notes`
fn is_indirect_comment(comment: &str) -> bool {
    comment
        .split(|c: char| c == ';' || c.is_whitespace())
        .next()
        .is_some_and(|word| word == "indirect")
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}
