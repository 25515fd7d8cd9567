use std::path::PathBuf;

use anyhow::Result;

use crate::environment::Environment;
use crate::formatter::Formatter;
use crate::resolution::ResolvedOptions;

/// Walks the tree for matching files and formats each one, returning
/// the paths whose formatted text differs. In write mode the differing
/// files are rewritten in place before being collected.
pub async fn format_files<TEnvironment: Environment>(
  environment: &TEnvironment,
  formatter: &dyn Formatter,
  options: &ResolvedOptions,
) -> Result<Vec<PathBuf>> {
  let file_paths = resolve_file_paths(environment, options)?;
  log_verbose!(environment, "Found {} file(s) to format", file_paths.len());

  let mut changed_files = Vec::new();
  for file_path in file_paths {
    let file_text = match environment.read_file(&file_path) {
      Ok(file_text) => file_text,
      Err(err) => {
        output_error(environment, &file_path, "Error reading file", &err);
        continue;
      }
    };
    match formatter.format_text(&file_path, &file_text).await {
      Ok(Some(formatted_text)) => {
        if formatted_text != file_text {
          if options.write {
            if let Err(err) = environment.write_file(&file_path, &formatted_text) {
              output_error(environment, &file_path, "Error writing file", &err);
              continue;
            }
          }
          changed_files.push(file_path);
        }
      }
      Ok(None) => {} // already formatted
      Err(err) => output_error(environment, &file_path, "Error formatting", &err),
    }
  }

  Ok(changed_files)
}

fn resolve_file_paths<TEnvironment: Environment>(environment: &TEnvironment, options: &ResolvedOptions) -> Result<Vec<PathBuf>> {
  let mut file_patterns = Vec::new();

  // the registry may pair the same extension with several plugins
  let mut file_types: Vec<&str> = Vec::new();
  for file_type in &options.file_types {
    if !file_types.contains(&file_type.as_str()) {
      file_types.push(file_type);
    }
  }
  for file_type in file_types {
    file_patterns.push(format!("**/*.{}", file_type));
  }

  for exclude in &options.excludes {
    let exclude = exclude.trim_end_matches('/');
    file_patterns.push(format!("!**/{}", exclude));
    file_patterns.push(format!("!**/{}/**/*", exclude));
  }

  environment.glob(&environment.cwd()?, &file_patterns)
}

fn output_error<TEnvironment: Environment>(environment: &TEnvironment, file_path: &std::path::Path, text: &str, error: &anyhow::Error) {
  environment.log_stderr(&format!("{}: {}\n    {:#}", text, file_path.display(), error));
}
