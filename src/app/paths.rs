// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! Candidates are tried in order; the first one present wins:
//!
//! | Source | Set by |
//! |--------|--------|
//! | [`ConfigDirSource::Explicit`] | callers of the `_with_override` functions (tests) |
//! | [`ConfigDirSource::CommandLine`] | `--config-dir`, via [`init_cli_overrides`] |
//! | [`ConfigDirSource::Environment`] | `PROFILE_DECK_CONFIG_DIR` |
//! | [`ConfigDirSource::Platform`] | the `dirs` crate plus [`APP_DIR_NAME`] |

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory created under the platform config root.
pub const APP_DIR_NAME: &str = "ProfileDeck";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "PROFILE_DECK_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which candidate produced the config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Explicit,
    CommandLine,
    Environment,
    Platform,
}

/// Records the `--config-dir` flag. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let requested = config_dir.filter(|dir| !dir.trim().is_empty());
    if CLI_CONFIG_DIR.set(requested.map(PathBuf::from)).is_err() {
        log::warn!("config directory override already set, ignoring the new one");
    }
}

/// Resolves the config directory and reports where it came from.
///
/// `None` only when no override is set and the platform has no config root.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<(PathBuf, ConfigDirSource)> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    let env = std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    pick(explicit, cli, env, dirs::config_dir)
}

fn pick(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<PathBuf>,
    platform_root: impl FnOnce() -> Option<PathBuf>,
) -> Option<(PathBuf, ConfigDirSource)> {
    explicit
        .map(|dir| (dir, ConfigDirSource::Explicit))
        .or_else(|| cli.map(|dir| (dir, ConfigDirSource::CommandLine)))
        .or_else(|| env.map(|dir| (dir, ConfigDirSource::Environment)))
        .or_else(|| platform_root().map(|root| (root.join(APP_DIR_NAME), ConfigDirSource::Platform)))
}

/// Config directory with `override_path` taking precedence over everything.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let (dir, source) = resolve_config_dir(override_path)?;
    log::debug!("config directory {} ({:?})", dir.display(), source);
    Some(dir)
}
