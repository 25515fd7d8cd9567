use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;

/// Seam over the filesystem and console so the whole CLI
/// can be driven in-memory from tests.
pub trait Environment: Clone + Send + Sync + 'static {
  fn read_file(&self, file_path: &Path) -> Result<String>;
  fn write_file(&self, file_path: &Path, file_text: &str) -> Result<()>;
  fn path_exists(&self, file_path: &Path) -> bool;
  /// Finds the files under `base` matching the provided patterns.
  /// Patterns prefixed with `!` are exclusions. The result is sorted.
  fn glob(&self, base: &Path, file_patterns: &[String]) -> Result<Vec<PathBuf>>;
  fn cwd(&self) -> Result<PathBuf>;
  fn log(&self, text: &str);
  fn log_stderr(&self, text: &str);
  fn is_verbose(&self) -> bool;
}

// use a macro here so the expression provided is only evaluated when in verbose mode
macro_rules! log_verbose {
    ($environment:expr, $($arg:tt)*) => {
        if $environment.is_verbose() {
            let mut text = String::from("[VERBOSE]: ");
            text.push_str(&format!($($arg)*));
            $environment.log_stderr(&text);
        }
    }
}
