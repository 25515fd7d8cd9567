use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::environment::Environment;
use crate::resolution::ResolvedOptions;

mod prettier;
#[cfg(test)]
mod test_formatter;

pub use prettier::*;
#[cfg(test)]
pub use test_formatter::*;

/// Seam to the external formatter.
#[async_trait(?Send)]
pub trait Formatter {
  /// Returns `Ok(None)` when the text is already formatted and
  /// `Ok(Some(text))` when the formatted output differs.
  async fn format_text(&self, file_path: &Path, file_text: &str) -> Result<Option<String>>;
}

/// Creates the formatter for a run once the options are resolved.
pub trait FormatterResolver<TEnvironment: Environment> {
  fn resolve(&self, environment: &TEnvironment, options: &ResolvedOptions) -> Result<Box<dyn Formatter>>;
}
