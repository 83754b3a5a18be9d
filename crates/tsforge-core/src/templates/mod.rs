//! Template system for tsforge project scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module. Each catalog entry is typed: `Render` entries go through
//! the strict-mode Handlebars [`renderer::TemplateRenderer`], `Verbatim` entries are
//! copied byte-for-byte to their output path.
//!
//! ## Template variables
//!
//! Rendered templates use Handlebars syntax against [`crate::context::TemplateContext`]:
//! - `{{node_version}}` — detected Node.js major version
//! - `{{project_name}}` — name from the target `package.json`
//! - `{{entrypoint}}` — compiled entry point (`dist/server.js` or `dist/main.js`)
//! - `{{secrets.GITHUB_TOKEN}}`, `{{github.run_number}}`, `{{github.actor}}` —
//!   passthrough GitHub Actions expressions (see [`crate::context`])
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Add a catalog entry in [`catalog`] with its output path and kind
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay
//! in sync. The `include_str!` paths are relative to that file and checked at
//! compile-time.

pub mod embedded;
pub mod renderer;

/// How a catalog entry is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Substitute variables from the context (strict: unknown placeholders fail).
    Render,
    /// Copy byte-for-byte, no substitution.
    Verbatim,
}

/// One bundled template and its fixed output location.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Short identifier used in error messages.
    pub name: &'static str,
    /// Embedded template text.
    pub source: &'static str,
    /// Output path relative to the project root.
    pub output_path: &'static str,
    pub kind: TemplateKind,
}

/// The fixed emission catalog for one run.
///
/// The framework decision selects the source entry points: the Express
/// `app.ts`/`server.ts` pair, or the single minimal `main.ts`. Everything
/// else is emitted in both cases.
pub fn catalog(use_express: bool) -> Vec<TemplateFile> {
    use TemplateKind::{Render, Verbatim};

    let mut files = vec![
        TemplateFile {
            name: "dockerfile",
            source: embedded::DOCKERFILE,
            output_path: "Dockerfile",
            kind: Render,
        },
        TemplateFile {
            name: "workflow",
            source: embedded::WORKFLOW,
            output_path: ".github/workflows/build.yaml",
            kind: Render,
        },
        TemplateFile {
            name: "gitignore",
            source: embedded::GITIGNORE,
            output_path: ".gitignore",
            kind: Verbatim,
        },
        TemplateFile {
            name: "eslintignore",
            source: embedded::ESLINTIGNORE,
            output_path: ".eslintignore",
            kind: Verbatim,
        },
        TemplateFile {
            name: "eslintrc",
            source: embedded::ESLINTRC,
            output_path: ".eslintrc.json",
            kind: Verbatim,
        },
        TemplateFile {
            name: "dockerignore",
            source: embedded::DOCKERIGNORE,
            output_path: ".dockerignore",
            kind: Verbatim,
        },
        TemplateFile {
            name: "prettierrc",
            source: embedded::PRETTIERRC,
            output_path: ".prettierrc",
            kind: Verbatim,
        },
        TemplateFile {
            name: "readme",
            source: embedded::README,
            output_path: "README.md",
            kind: Verbatim,
        },
        TemplateFile {
            name: "tsconfig",
            source: embedded::TSCONFIG,
            output_path: "tsconfig.json",
            kind: Verbatim,
        },
    ];

    if use_express {
        files.push(TemplateFile {
            name: "app",
            source: embedded::EXPRESS_APP,
            output_path: "src/app.ts",
            kind: Verbatim,
        });
        files.push(TemplateFile {
            name: "server",
            source: embedded::EXPRESS_SERVER,
            output_path: "src/server.ts",
            kind: Verbatim,
        });
    } else {
        files.push(TemplateFile {
            name: "main",
            source: embedded::MINIMAL_MAIN,
            output_path: "src/main.ts",
            kind: Verbatim,
        });
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(use_express: bool) -> Vec<&'static str> {
        catalog(use_express).iter().map(|t| t.output_path).collect()
    }

    #[test]
    fn test_catalog_express_source_pair() {
        let paths = paths(true);
        assert!(paths.contains(&"src/app.ts"));
        assert!(paths.contains(&"src/server.ts"));
        assert!(!paths.contains(&"src/main.ts"));
    }

    #[test]
    fn test_catalog_minimal_single_entry_point() {
        let paths = paths(false);
        assert!(paths.contains(&"src/main.ts"));
        assert!(!paths.contains(&"src/app.ts"));
        assert!(!paths.contains(&"src/server.ts"));
    }

    #[test]
    fn test_only_dockerfile_and_workflow_are_rendered() {
        for t in catalog(true) {
            let expect_render = matches!(t.output_path, "Dockerfile" | ".github/workflows/build.yaml");
            assert_eq!(t.kind == TemplateKind::Render, expect_render, "{}", t.name);
        }
    }

    #[test]
    fn test_output_paths_are_unique() {
        for use_express in [true, false] {
            let mut paths = paths(use_express);
            let total = paths.len();
            paths.sort_unstable();
            paths.dedup();
            assert_eq!(paths.len(), total);
        }
    }

    #[test]
    fn test_embedded_templates_not_empty() {
        for t in catalog(true).iter().chain(catalog(false).iter()) {
            assert!(!t.source.is_empty(), "{} is empty", t.name);
        }
    }
}
