use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use parking_lot::Mutex;

use super::Environment;

#[derive(Clone)]
pub struct TestEnvironment {
  files: Arc<Mutex<HashMap<PathBuf, String>>>,
  logged_messages: Arc<Mutex<Vec<String>>>,
  logged_errors: Arc<Mutex<Vec<String>>>,
  is_verbose: Arc<Mutex<bool>>,
}

impl TestEnvironment {
  pub fn new() -> TestEnvironment {
    TestEnvironment {
      files: Arc::new(Mutex::new(HashMap::new())),
      logged_messages: Arc::new(Mutex::new(Vec::new())),
      logged_errors: Arc::new(Mutex::new(Vec::new())),
      is_verbose: Arc::new(Mutex::new(false)),
    }
  }

  pub fn take_logged_messages(&self) -> Vec<String> {
    self.logged_messages.lock().drain(..).collect()
  }

  pub fn take_logged_errors(&self) -> Vec<String> {
    self.logged_errors.lock().drain(..).collect()
  }

  pub fn set_verbose(&self, value: bool) {
    *self.is_verbose.lock() = value;
  }
}

impl Environment for TestEnvironment {
  fn read_file(&self, file_path: &Path) -> Result<String> {
    let files = self.files.lock();
    match files.get(file_path) {
      Some(file_text) => Ok(file_text.clone()),
      None => bail!("Could not find file at path {}", file_path.display()),
    }
  }

  fn write_file(&self, file_path: &Path, file_text: &str) -> Result<()> {
    let mut files = self.files.lock();
    files.insert(file_path.to_path_buf(), String::from(file_text));
    Ok(())
  }

  fn path_exists(&self, file_path: &Path) -> bool {
    let files = self.files.lock();
    // a directory exists when any stored file lives under it
    files.keys().any(|key| key == file_path || key.starts_with(file_path))
  }

  fn glob(&self, _base: &Path, file_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let includes_set = file_patterns_to_glob_set(file_patterns.iter().filter(|p| !p.starts_with('!')).map(|p| p.to_owned()))?;
    let excludes_set = file_patterns_to_glob_set(file_patterns.iter().filter(|p| p.starts_with('!')).map(|p| String::from(&p[1..])))?;
    let files = self.files.lock();

    let mut file_paths = Vec::new();
    for key in files.keys() {
      let is_excluded = excludes_set.is_match(key) || key.ancestors().skip(1).any(|dir| excludes_set.is_match(dir));
      if includes_set.is_match(key) && !is_excluded {
        file_paths.push(key.clone());
      }
    }

    file_paths.sort();
    Ok(file_paths)
  }

  fn cwd(&self) -> Result<PathBuf> {
    Ok(PathBuf::from("/"))
  }

  fn log(&self, text: &str) {
    self.logged_messages.lock().push(String::from(text));
  }

  fn log_stderr(&self, text: &str) {
    self.logged_errors.lock().push(String::from(text));
  }

  fn is_verbose(&self) -> bool {
    *self.is_verbose.lock()
  }
}

fn file_patterns_to_glob_set(file_patterns: impl Iterator<Item = String>) -> Result<GlobSet> {
  let mut builder = GlobSetBuilder::new();
  for file_pattern in file_patterns {
    builder.add(Glob::new(&file_pattern)?);
  }
  Ok(builder.build()?)
}
