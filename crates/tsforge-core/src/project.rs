//! Project directory setup and template emission.
//!
//! ## Output layout
//!
//! ```text
//! <project>/
//! ├── package.json              # pre-existing, merged in place
//! ├── Dockerfile                # rendered
//! ├── .github/workflows/build.yaml  # rendered
//! ├── .gitignore .eslintignore .eslintrc.json
//! ├── .dockerignore .prettierrc tsconfig.json README.md
//! └── src/                      # app.ts + server.ts, or main.ts
//! ```
//!
//! Emission assumes a freshly initialized directory: output paths are fixed
//! and existing files at those paths are overwritten without conflict
//! detection. A failure mid-loop aborts the run and leaves the files written
//! so far in place; there is no rollback.

use std::path::{Path, PathBuf};

use crate::context::TemplateContext;
use crate::error::Result;
use crate::templates::{self, TemplateFile, TemplateKind};
use crate::templates::renderer::TemplateRenderer;

/// Create the directories every run needs, idempotently.
pub fn create_project_dirs(project_root: &Path) -> Result<()> {
    std::fs::create_dir_all(project_root.join("src"))?;
    std::fs::create_dir_all(project_root.join(".github/workflows"))?;
    Ok(())
}

/// Materialize one catalog entry under the project root.
///
/// Rendered entries go through the strict-mode renderer; verbatim entries are
/// copied as-is. Parent directories are created on demand. Returns the path
/// written, for progress reporting.
pub fn write_template(
    project_root: &Path,
    template: &TemplateFile,
    renderer: &TemplateRenderer,
    ctx: &TemplateContext,
) -> Result<PathBuf> {
    let contents = match template.kind {
        TemplateKind::Render => renderer.render(template.name, template.source, ctx)?,
        TemplateKind::Verbatim => template.source.to_string(),
    };

    let out = project_root.join(template.output_path);
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, contents)?;
    tracing::debug!(path = %out.display(), kind = ?template.kind, "wrote project file");

    Ok(out)
}

/// Emit the entire catalog for one run. Strictly sequential; stops at the
/// first failure.
pub fn scaffold(
    project_root: &Path,
    ctx: &TemplateContext,
    use_express: bool,
) -> Result<Vec<PathBuf>> {
    create_project_dirs(project_root)?;

    let renderer = TemplateRenderer::new();
    let mut written = Vec::new();
    for template in templates::catalog(use_express) {
        written.push(write_template(project_root, &template, &renderer, ctx)?);
    }
    Ok(written)
}
