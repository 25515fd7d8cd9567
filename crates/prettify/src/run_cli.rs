use std::path::PathBuf;

use anyhow::Result;
use crossterm::style::Stylize;
use thiserror::Error;

use crate::arg_parser::CliArgs;
use crate::arg_parser::ParseArgsError;
use crate::environment::Environment;
use crate::format::format_files;
use crate::formatter::FormatterResolver;
use crate::plugins::resolve_registry;
use crate::resolution::resolve_options;
use crate::resolution::ResolvedOptions;

#[derive(Debug, Error)]
#[error("{inner:#}")]
pub struct AppError {
  pub inner: anyhow::Error,
  pub exit_code: i32,
}

impl From<anyhow::Error> for AppError {
  fn from(inner: anyhow::Error) -> Self {
    AppError { inner, exit_code: 1 }
  }
}

impl From<ParseArgsError> for AppError {
  fn from(err: ParseArgsError) -> Self {
    AppError {
      exit_code: err.exit_code(),
      inner: anyhow::Error::new(err),
    }
  }
}

pub async fn run_cli<TEnvironment: Environment>(
  args: CliArgs,
  environment: &TEnvironment,
  formatter_resolver: &impl FormatterResolver<TEnvironment>,
) -> Result<()> {
  let registry = resolve_registry(environment).await?;
  log_verbose!(environment, "Detected plugins: {:?}", registry.plugins);
  let options = resolve_options(args, registry);
  let formatter = formatter_resolver.resolve(environment, &options)?;
  let changed_files = format_files(environment, &*formatter, &options).await?;
  output_report(environment, &options, &changed_files);
  Ok(())
}

fn output_report<TEnvironment: Environment>(environment: &TEnvironment, options: &ResolvedOptions, changed_files: &[PathBuf]) {
  if changed_files.is_empty() {
    if !options.silent {
      environment.log(&format!("{} no changes needed", "format:".green()));
    }
    return;
  }

  let title = if options.write { "changed files:" } else { "files that need formatting:" };
  environment.log("format:");
  environment.log(&title.bold().to_string());
  environment.log(
    &changed_files
      .iter()
      .map(|file_path| file_path.display().to_string())
      .collect::<Vec<_>>()
      .join("\n"),
  );
}
