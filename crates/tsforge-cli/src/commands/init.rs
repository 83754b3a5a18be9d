use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use tsforge_core::context::TemplateContext;
use tsforge_core::manifest::Manifest;
use tsforge_core::profile::{self, RuntimeTier};
use tsforge_core::project;
use tsforge_core::templates;
use tsforge_core::templates::renderer::TemplateRenderer;
use tsforge_core::version::{self, REQUIRED_NODE_MAJOR};

use crate::output;

/// The one scaffolding run: version gate, framework prompt, template
/// emission, manifest merge.
///
/// Strictly linear. The manifest is read before anything is written so that a
/// missing or broken `package.json` aborts with the target directory
/// untouched. A failure later in the run leaves already-written files in
/// place; the directory is assumed to be freshly initialized, so partial
/// output is re-runnable rather than destructive.
pub async fn run() -> Result<()> {
    output::print_header("tsforge init");

    // Version gate: advisory only, selects the dependency tier.
    output::print_step(1, 4, "Checking Node.js version");
    let node_version = version::detect_node_version()?;
    let tier = RuntimeTier::from_version(&node_version);
    if tier == RuntimeTier::Legacy {
        output::print_warning(&format!("You are using Node.js {node_version}"));
        output::print_warning(&format!(
            "This project recommends Node.js {REQUIRED_NODE_MAJOR} or higher"
        ));
        output::print_hint("Consider upgrading Node.js for better compatibility:");
        output::print_hint("https://nodejs.org/");
        println!();
    }

    let use_express = prompt_use_express(true)?;

    // Read the manifest before any write so input errors abort cleanly.
    output::print_step(2, 4, "Reading package.json");
    let manifest_path = Path::new("package.json");
    let mut manifest = Manifest::load(manifest_path)?;

    let ctx = TemplateContext::new(&node_version, manifest.project_name(), use_express);
    tracing::info!(
        project = %ctx.project_name,
        tier = tier.as_str(),
        express = use_express,
        "scaffolding project"
    );

    // Emit the catalog, one file at a time.
    output::print_step(3, 4, "Writing project files");
    let project_root = Path::new(".");
    project::create_project_dirs(project_root)?;

    let renderer = TemplateRenderer::new();
    let catalog = templates::catalog(use_express);
    let bar = ProgressBar::new(catalog.len() as u64).with_style(
        ProgressStyle::with_template("  {bar:24} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    for template in &catalog {
        bar.set_message(template.output_path);
        project::write_template(project_root, template, &renderer, &ctx)?;
        bar.inc(1);
    }
    bar.finish_and_clear();
    for template in &catalog {
        println!("  + {}", template.output_path);
    }

    // Merge the dependency profile into the manifest and rewrite it.
    output::print_step(4, 4, "Updating package.json");
    manifest.apply_profile(&profile::select(tier, use_express));
    manifest.save(manifest_path)?;

    output::print_success("Project setup completed!");
    println!();
    println!("  Next steps:");
    println!("    1. npm ci");
    println!("    2. npm run dev    (start development server)");
    println!("    3. npm run build  (build for production)");
    println!("    4. npm start      (run production build)");
    println!();

    Ok(())
}

/// Ask the single framework question.
///
/// Non-interactive runs (no attached terminal) take the default without
/// blocking, so the tool works in CI and under test harnesses.
fn prompt_use_express(default: bool) -> Result<bool> {
    if !console::user_attended() {
        tracing::debug!(default, "no terminal attached, using default answer");
        return Ok(default);
    }

    Ok(Confirm::new()
        .with_prompt("Would you like to use Express.js in your project?")
        .default(default)
        .interact()?)
}
