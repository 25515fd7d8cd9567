use crate::arg_parser::CliArgs;
use crate::plugins::Registry;

const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".nyc_output"];

/// The effective configuration for a run after applying the registry
/// as defaults for anything not specified on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
  pub write: bool,
  pub excludes: Vec<String>,
  pub file_types: Vec<String>,
  pub plugins: Vec<String>,
  pub config: Option<String>,
  pub silent: bool,
}

/// Explicitly provided flags replace the registry defaults entirely.
/// There is no merging.
pub fn resolve_options(args: CliArgs, registry: Registry) -> ResolvedOptions {
  ResolvedOptions {
    write: args.write,
    excludes: args
      .excludes
      .unwrap_or_else(|| DEFAULT_EXCLUDES.iter().map(|exclude| exclude.to_string()).collect()),
    file_types: args.file_types.unwrap_or(registry.file_types),
    plugins: args.plugins.unwrap_or(registry.plugins),
    config: args.config,
    silent: args.silent,
  }
}
