// Rust guideline compliant 2026-02-06

//! Per-invocation state shared by commands.

use anyhow::{Context as _, Result};
use rewear_app::{AppError, Session};
use rewear_core::{sample, Config, ItemCatalog};
use std::path::{Path, PathBuf};

/// Loaded configuration, catalog and session for one command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration.
    pub config: Config,
    /// Catalog snapshot.
    pub catalog: ItemCatalog,
    /// Caller identity.
    pub session: Session,
}

impl Context {
    /// Loads the catalog for a loaded configuration.
    ///
    /// An explicit `catalog` path must exist. Otherwise the configured path
    /// is used when present, falling back to the built-in demo catalog.
    ///
    /// # Arguments
    ///
    /// * `config` - Effective configuration
    /// * `config_dir` - Directory the configured catalog path is relative to
    /// * `catalog` - Optional catalog path overriding the configuration
    /// * `session` - Caller identity
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit catalog file is missing
    /// - The catalog file cannot be parsed
    pub fn load(
        config: Config,
        config_dir: &Path,
        catalog: Option<&Path>,
        session: Session,
    ) -> Result<Self> {
        let catalog = match catalog {
            Some(path) => load_catalog(path)?,
            None => {
                let path = resolve_path(config_dir, &config.catalog_path);
                if path.exists() {
                    load_catalog(&path)?
                } else {
                    tracing::info!(path = %path.display(), "catalog not found, using demo catalog");
                    sample::sample_catalog()
                }
            }
        };

        Ok(Self {
            config,
            catalog,
            session,
        })
    }

    /// Builds a context around an in-memory catalog.
    pub fn with_catalog(config: Config, catalog: ItemCatalog, session: Session) -> Self {
        Self {
            config,
            catalog,
            session,
        }
    }
}

fn resolve_path(config_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config_dir.join(path)
    }
}

fn load_catalog(path: &Path) -> Result<ItemCatalog> {
    ItemCatalog::load(path)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to load catalog {}", path.display()))
}

/// Loads `config.toml` from a directory, applying environment overrides.
///
/// # Errors
///
/// Returns an error if the file or an override is invalid.
pub fn load_config(config_dir: &Path) -> Result<Config> {
    Ok(Config::load(config_dir).map_err(AppError::from)?)
}

/// Builds the demo session used by the command line.
///
/// # Arguments
///
/// * `anonymous` - Act as a signed-out visitor
/// * `admin` - Act as a moderator
/// * `points` - Override the demo user's points balance
pub fn demo_session(anonymous: bool, admin: bool, points: Option<u32>) -> Session {
    if anonymous {
        return Session::anonymous();
    }
    let mut user = sample::sample_user();
    if let Some(points) = points {
        user.points = points;
    }
    if admin {
        Session::admin(user)
    } else {
        Session::member(user)
    }
}
