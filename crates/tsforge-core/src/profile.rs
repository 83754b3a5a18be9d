//! Dependency profiles: the package, version, and script entries merged into
//! the target project's `package.json`.
//!
//! Profiles are pure data keyed by two independent axes:
//! - **runtime tier** — `modern` (Node >= 20) or `legacy`, selecting version
//!   constraints compatible with the installed runtime;
//! - **framework decision** — whether the Express.js additions are engaged.
//!
//! Selection is additive: the base tooling profile always applies, and the
//! Express profile layers its entries on top.

use std::collections::BTreeMap;

use crate::version::NodeVersion;

/// Runtime tier selected by the version gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeTier {
    /// Node >= 20: current toolchain versions.
    Modern,
    /// Older runtimes: last known-compatible toolchain versions.
    Legacy,
}

impl RuntimeTier {
    pub fn from_version(version: &NodeVersion) -> Self {
        if version.meets_minimum() {
            Self::Modern
        } else {
            Self::Legacy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }
}

/// A bundle of dependency and script entries to merge into the manifest.
///
/// Never mutated after construction; the merge into the manifest is
/// append/override by key (see [`crate::manifest::Manifest::apply_profile`]).
#[derive(Debug, Clone, Default)]
pub struct DependencyProfile {
    pub dependencies: BTreeMap<&'static str, &'static str>,
    pub dev_dependencies: BTreeMap<&'static str, &'static str>,
    pub scripts: BTreeMap<&'static str, &'static str>,
}

/// Build the full profile for a (tier, framework) combination.
pub fn select(tier: RuntimeTier, use_express: bool) -> DependencyProfile {
    let mut profile = base(tier);

    profile.scripts.insert("build", "tsc");
    if use_express {
        profile.scripts.insert("start", "node dist/server.js");
        profile.scripts.insert("dev", "nodemon src/server.ts");

        let express = express_additions(tier);
        profile.dependencies.extend(express.dependencies);
        profile.dev_dependencies.extend(express.dev_dependencies);
    } else {
        profile.scripts.insert("start", "node dist/main.js");
        profile.scripts.insert("dev", "nodemon src/main.ts");
    }

    profile
}

/// Base TypeScript tooling, required regardless of the framework decision.
fn base(tier: RuntimeTier) -> DependencyProfile {
    let dev_dependencies: BTreeMap<_, _> = match tier {
        RuntimeTier::Modern => [
            ("@types/node", "^20.10.5"),
            ("typescript", "^5.3.3"),
            ("ts-node", "^10.9.2"),
            ("nodemon", "^3.0.2"),
            ("eslint", "^8.56.0"),
            ("@typescript-eslint/parser", "^6.15.0"),
            ("@typescript-eslint/eslint-plugin", "^6.15.0"),
            ("prettier", "^3.1.1"),
            ("eslint-config-prettier", "^9.1.0"),
            ("eslint-plugin-prettier", "^5.0.1"),
        ]
        .into(),
        RuntimeTier::Legacy => [
            ("@types/node", "^14.x"),
            ("typescript", "^4.x"),
            ("ts-node", "^9.x"),
            ("nodemon", "^2.x"),
            ("eslint", "^7.32.0"),
            ("@typescript-eslint/parser", "^4.33.0"),
            ("@typescript-eslint/eslint-plugin", "^4.33.0"),
            ("prettier", "^2.8.8"),
            ("eslint-config-prettier", "^8.5.0"),
            ("eslint-plugin-prettier", "^4.2.1"),
        ]
        .into(),
    };

    DependencyProfile {
        dev_dependencies,
        ..Default::default()
    }
}

/// Express.js runtime and type-declaration packages.
fn express_additions(tier: RuntimeTier) -> DependencyProfile {
    let (dependencies, dev_dependencies): (BTreeMap<_, _>, BTreeMap<_, _>) = match tier {
        RuntimeTier::Modern => (
            [("express", "^4.18.2"), ("dotenv", "^16.3.1")].into(),
            [("@types/express", "^4.17.21")].into(),
        ),
        RuntimeTier::Legacy => (
            [("express", "^4.17.1"), ("dotenv", "^8.2.0")].into(),
            [("@types/express", "^4.17.13")].into(),
        ),
    };

    DependencyProfile {
        dependencies,
        dev_dependencies,
        ..Default::default()
    }
}
