use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;

use super::Environment;
use crate::utils::Logger;

#[derive(Clone)]
pub struct RealEnvironmentOptions {
  pub is_verbose: bool,
}

#[derive(Clone)]
pub struct RealEnvironment {
  logger: Logger,
  is_verbose: bool,
}

impl RealEnvironment {
  pub fn new(options: &RealEnvironmentOptions) -> RealEnvironment {
    RealEnvironment {
      logger: Logger::new(),
      is_verbose: options.is_verbose,
    }
  }
}

impl Environment for RealEnvironment {
  fn read_file(&self, file_path: &Path) -> Result<String> {
    log_verbose!(self, "Reading file: {}", file_path.display());
    let file_text = fs::read_to_string(file_path).with_context(|| format!("Error reading {}", file_path.display()))?;
    Ok(file_text)
  }

  fn write_file(&self, file_path: &Path, file_text: &str) -> Result<()> {
    log_verbose!(self, "Writing file: {}", file_path.display());
    fs::write(file_path, file_text).with_context(|| format!("Error writing {}", file_path.display()))?;
    Ok(())
  }

  fn path_exists(&self, file_path: &Path) -> bool {
    log_verbose!(self, "Checking path exists: {}", file_path.display());
    file_path.exists()
  }

  fn glob(&self, base: &Path, file_patterns: &[String]) -> Result<Vec<PathBuf>> {
    log_verbose!(self, "Globbing: {:?}", file_patterns);
    let mut override_builder = ignore::overrides::OverrideBuilder::new(base);
    for file_pattern in file_patterns {
      override_builder
        .add(file_pattern)
        .with_context(|| format!("Error parsing file pattern: {}", file_pattern))?;
    }
    let overrides = override_builder.build().context("Error building file patterns")?;

    let walker = ignore::WalkBuilder::new(base)
      .overrides(overrides)
      .standard_filters(false)
      .follow_links(false)
      .build();

    let mut file_paths = Vec::new();
    for entry in walker {
      let entry = entry.context("Error walking files")?;
      if entry.file_type().map(|file_type| file_type.is_file()).unwrap_or(false) {
        file_paths.push(entry.into_path());
      }
    }

    file_paths.sort();
    Ok(file_paths)
  }

  fn cwd(&self) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Error getting the current working directory")?;
    Ok(cwd)
  }

  fn log(&self, text: &str) {
    self.logger.log(text);
  }

  fn log_stderr(&self, text: &str) {
    self.logger.log_stderr(text);
  }

  fn is_verbose(&self) -> bool {
    self.is_verbose
  }
}
