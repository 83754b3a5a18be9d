//! Node.js version detection and the runtime version gate.
//!
//! The gate is advisory: a version below [`REQUIRED_NODE_MAJOR`] selects the
//! legacy dependency tier and produces a warning, never an error. Only a
//! wholly unparseable version string (or a missing `node` binary) is fatal,
//! since nothing sensible can be scaffolded without knowing the runtime.

use std::fmt;
use std::process::Command;

use crate::error::{Result, ScaffoldError};

/// Minimum recommended Node.js major version.
pub const REQUIRED_NODE_MAJOR: u32 = 20;

/// A semver-like version with major.minor.patch components.
///
/// Unlike strict semver, minor and patch are optional on parse and default
/// to zero: `node --version` variants like `v20` or `20.1` must not break
/// the major-version comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl NodeVersion {
    /// Parse the first numeric version found in a string.
    ///
    /// Handles common formats:
    /// - `"v20.11.1"`
    /// - `"20.11.1"`
    /// - `"v21"`
    /// - `"node v18.19"`
    pub fn parse(s: &str) -> Option<Self> {
        let start = s.find(|c: char| c.is_ascii_digit())?;
        let mut segments = s[start..]
            .split('.')
            .map(|seg| seg.chars().take_while(char::is_ascii_digit).collect::<String>());

        let major: u32 = segments.next()?.parse().ok()?;
        let minor = segments.next().and_then(|s| s.parse().ok()).unwrap_or(0);
        let patch = segments.next().and_then(|s| s.parse().ok()).unwrap_or(0);

        Some(Self {
            major,
            minor,
            patch,
        })
    }

    /// The version gate: true iff the major component meets the recommended
    /// minimum. Minor and patch are deliberately ignored.
    pub fn meets_minimum(&self) -> bool {
        self.major >= REQUIRED_NODE_MAJOR
    }
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Run `node --version` and parse the output.
///
/// The binary is located via PATH lookup first so a missing install produces
/// a targeted error rather than a raw spawn failure.
pub fn detect_node_version() -> Result<NodeVersion> {
    let node = which::which("node").map_err(ScaffoldError::NodeNotFound)?;
    tracing::debug!(path = %node.display(), "found node executable");

    let output = Command::new(&node).arg("--version").output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if let Some(v) = NodeVersion::parse(&stdout) {
        return Ok(v);
    }

    // Some runtimes print version info to stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    NodeVersion::parse(&stderr)
        .ok_or_else(|| ScaffoldError::VersionUnparseable(stdout.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_format() {
        let v = NodeVersion::parse("v20.11.1").unwrap();
        assert_eq!(
            v,
            NodeVersion {
                major: 20,
                minor: 11,
                patch: 1
            }
        );
    }

    #[test]
    fn test_parse_bare_version() {
        let v = NodeVersion::parse("18.19.0").unwrap();
        assert_eq!(v.major, 18);
    }

    #[test]
    fn test_parse_missing_segments_default_to_zero() {
        let v = NodeVersion::parse("v21").unwrap();
        assert_eq!(
            v,
            NodeVersion {
                major: 21,
                minor: 0,
                patch: 0
            }
        );

        let v = NodeVersion::parse("20.1").unwrap();
        assert_eq!(
            v,
            NodeVersion {
                major: 20,
                minor: 1,
                patch: 0
            }
        );
    }

    #[test]
    fn test_parse_with_surrounding_text() {
        let v = NodeVersion::parse("node v18.19").unwrap();
        assert_eq!(v.major, 18);
        assert_eq!(v.minor, 19);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(NodeVersion::parse("no version here").is_none());
        assert!(NodeVersion::parse("").is_none());
    }

    #[test]
    fn test_gate_threshold() {
        assert!(!NodeVersion::parse("v18.19.0").unwrap().meets_minimum());
        assert!(NodeVersion::parse("v20.0.0").unwrap().meets_minimum());
        assert!(NodeVersion::parse("v21.2.0").unwrap().meets_minimum());
    }

    #[test]
    fn test_gate_ignores_minor_and_patch() {
        // 19.99.99 still fails, 20.0.0 still passes
        assert!(!NodeVersion::parse("19.99.99").unwrap().meets_minimum());
        assert!(NodeVersion::parse("20").unwrap().meets_minimum());
    }

    #[test]
    fn test_version_display() {
        let v = NodeVersion {
            major: 20,
            minor: 11,
            patch: 1,
        };
        assert_eq!(v.to_string(), "20.11.1");
    }
}
