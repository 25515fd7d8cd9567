use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use super::Formatter;
use super::FormatterResolver;
use crate::environment::Environment;
use crate::resolution::ResolvedOptions;

/// Formatter used by the CLI tests. Canonical form is "every line free
/// of trailing whitespace and the text ending with one newline".
#[derive(Clone, Default)]
pub struct TestFormatter {
  requests: Arc<Mutex<Vec<PathBuf>>>,
  error_texts: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl TestFormatter {
  pub fn formatted_paths(&self) -> Vec<PathBuf> {
    self.requests.lock().clone()
  }

  pub fn set_error(&self, file_path: &Path, message: &str) {
    self.error_texts.lock().insert(file_path.to_path_buf(), message.to_string());
  }
}

#[async_trait(?Send)]
impl Formatter for TestFormatter {
  async fn format_text(&self, file_path: &Path, file_text: &str) -> Result<Option<String>> {
    self.requests.lock().push(file_path.to_path_buf());
    if let Some(message) = self.error_texts.lock().get(file_path) {
      bail!("{}", message);
    }

    let mut formatted_text = file_text.lines().map(|line| line.trim_end()).collect::<Vec<_>>().join("\n");
    formatted_text.push('\n');

    if formatted_text == file_text {
      Ok(None)
    } else {
      Ok(Some(formatted_text))
    }
  }
}

/// Hands the same `TestFormatter` to every run and records the options
/// it was resolved with so tests can assert on them.
#[derive(Clone, Default)]
pub struct TestFormatterResolver {
  formatter: TestFormatter,
  resolved_options: Arc<Mutex<Option<ResolvedOptions>>>,
}

impl TestFormatterResolver {
  pub fn formatter(&self) -> &TestFormatter {
    &self.formatter
  }

  pub fn resolved_options(&self) -> Option<ResolvedOptions> {
    self.resolved_options.lock().clone()
  }
}

impl<TEnvironment: Environment> FormatterResolver<TEnvironment> for TestFormatterResolver {
  fn resolve(&self, _environment: &TEnvironment, options: &ResolvedOptions) -> Result<Box<dyn Formatter>> {
    *self.resolved_options.lock() = Some(options.clone());
    Ok(Box::new(self.formatter.clone()))
  }
}
