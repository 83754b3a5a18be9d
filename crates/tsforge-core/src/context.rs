//! The variable context available to template substitution for a single run.
//!
//! Built once, after the version gate and the framework decision, and before
//! any template is rendered. Every field is populated at construction; the
//! renderer runs in strict mode, so a template referencing anything outside
//! this set fails the run.

use serde::Serialize;

use crate::version::NodeVersion;

/// Immutable substitution values for one scaffolding run.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// Detected Node.js major version, e.g. `"20"`.
    pub node_version: String,
    /// Project name from the manifest (or the default).
    pub project_name: String,
    /// Compiled entry point recorded in scripts and the Dockerfile.
    pub entrypoint: String,
    pub secrets: SecretsPassthrough,
    pub github: GithubPassthrough,
}

/// GitHub Actions `secrets.*` expressions, passed through verbatim.
///
/// The values are themselves Handlebars syntax: substituting
/// `${{secrets.GITHUB_TOKEN}}` in the workflow template re-emits the literal
/// `${{ secrets.GITHUB_TOKEN }}` so the generated workflow contains a live
/// Actions expression, not a resolved value.
#[derive(Debug, Clone, Serialize)]
pub struct SecretsPassthrough {
    #[serde(rename = "GITHUB_TOKEN")]
    pub github_token: String,
}

/// GitHub Actions `github.*` context expressions, passed through verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct GithubPassthrough {
    pub run_number: String,
    pub actor: String,
}

impl TemplateContext {
    pub fn new(version: &NodeVersion, project_name: &str, use_express: bool) -> Self {
        let entrypoint = if use_express {
            "dist/server.js"
        } else {
            "dist/main.js"
        };

        Self {
            node_version: version.major.to_string(),
            project_name: project_name.to_string(),
            entrypoint: entrypoint.to_string(),
            secrets: SecretsPassthrough {
                github_token: "{{ secrets.GITHUB_TOKEN }}".to_string(),
            },
            github: GithubPassthrough {
                run_number: "{{ github.run_number }}".to_string(),
                actor: "{{ github.actor }}".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrypoint_follows_framework_decision() {
        let v = NodeVersion::parse("v20.11.1").unwrap();
        let with = TemplateContext::new(&v, "demo", true);
        let without = TemplateContext::new(&v, "demo", false);

        assert_eq!(with.entrypoint, "dist/server.js");
        assert_eq!(without.entrypoint, "dist/main.js");
    }

    #[test]
    fn test_node_version_is_major_only() {
        let v = NodeVersion::parse("v20.11.1").unwrap();
        let ctx = TemplateContext::new(&v, "demo", true);
        assert_eq!(ctx.node_version, "20");
    }

    #[test]
    fn test_passthrough_values_are_template_syntax() {
        let v = NodeVersion::parse("v20.11.1").unwrap();
        let ctx = TemplateContext::new(&v, "demo", true);
        assert_eq!(ctx.secrets.github_token, "{{ secrets.GITHUB_TOKEN }}");
        assert_eq!(ctx.github.run_number, "{{ github.run_number }}");
        assert_eq!(ctx.github.actor, "{{ github.actor }}");
    }
}
