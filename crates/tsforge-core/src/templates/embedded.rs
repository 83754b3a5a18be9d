//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/tsforge-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here,
//! and do NOT edit the two `.tmpl` files without checking that their Handlebars
//! variables still match what [`crate::context::TemplateContext`] provides.

// -------------------------------------------------------
// Rendered templates (Handlebars substitution)
// -------------------------------------------------------

pub const DOCKERFILE: &str = include_str!("../../../../templates/docker/Dockerfile.tmpl");
pub const WORKFLOW: &str = include_str!("../../../../templates/workflows/build.yaml.tmpl");

// -------------------------------------------------------
// Verbatim configuration and ignore files
// -------------------------------------------------------

pub const GITIGNORE: &str = include_str!("../../../../templates/config/gitignore");
pub const ESLINTIGNORE: &str = include_str!("../../../../templates/config/eslintignore");
pub const ESLINTRC: &str = include_str!("../../../../templates/config/eslintrc.json");
pub const DOCKERIGNORE: &str = include_str!("../../../../templates/docker/dockerignore");
pub const PRETTIERRC: &str = include_str!("../../../../templates/config/prettierrc");
pub const README: &str = include_str!("../../../../templates/config/README.md");
pub const TSCONFIG: &str = include_str!("../../../../templates/config/tsconfig.json");

// -------------------------------------------------------
// Source entry points
// -------------------------------------------------------

pub const EXPRESS_APP: &str = include_str!("../../../../templates/src/app.ts");
pub const EXPRESS_SERVER: &str = include_str!("../../../../templates/src/server.ts");
pub const MINIMAL_MAIN: &str = include_str!("../../../../templates/src/main.ts");
