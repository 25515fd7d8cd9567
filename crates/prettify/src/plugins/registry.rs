use anyhow::Result;

use super::optional::probe_optional_plugins;
use super::optional::FILE_TYPES;
use super::optional::OPTIONAL_PLUGINS;
use crate::environment::Environment;

/// The file types and plugin module identifiers enabled for this run.
/// Built once at startup from the static tables and the installed
/// packages, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
  pub file_types: Vec<String>,
  pub plugins: Vec<String>,
}

/// Probes every optional plugin concurrently and folds the results in
/// table order, so the registry is deterministic for a fixed set of
/// installed packages.
pub async fn resolve_registry<TEnvironment: Environment>(environment: &TEnvironment) -> Result<Registry> {
  let probe_results = probe_optional_plugins(environment).await?;

  let mut file_types: Vec<String> = FILE_TYPES.iter().map(|file_type| file_type.to_string()).collect();
  let mut plugins = Vec::new();
  for (plugin, is_installed) in OPTIONAL_PLUGINS.iter().zip(probe_results) {
    if is_installed {
      // always appended as a pair
      file_types.push(plugin.extension.to_string());
      plugins.push(plugin.identifier());
    }
  }

  Ok(Registry { file_types, plugins })
}
