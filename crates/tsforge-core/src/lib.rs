//! Core library for the tsforge scaffolder.
//!
//! Provides everything behind the `tsforge` CLI: the Node.js version gate,
//! dependency profile selection, the `package.json` model and merge, and the
//! embedded template catalog with its strict-mode Handlebars renderer.
//!
//! The CLI drives one linear run: detect version, ask the framework question,
//! read the manifest, emit the catalog, merge the profile, rewrite the
//! manifest. Each step lives in its own module here and is independently
//! testable without a terminal.

pub mod context;
pub mod error;
pub mod manifest;
pub mod profile;
pub mod project;
pub mod templates;
pub mod version;
