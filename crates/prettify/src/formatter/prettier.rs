use std::path::Path;
use std::path::PathBuf;
use std::process::Stdio;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::Formatter;
use super::FormatterResolver;
use crate::environment::Environment;
use crate::resolution::ResolvedOptions;

pub struct PrettierFormatterResolver;

impl<TEnvironment: Environment> FormatterResolver<TEnvironment> for PrettierFormatterResolver {
  fn resolve(&self, environment: &TEnvironment, options: &ResolvedOptions) -> Result<Box<dyn Formatter>> {
    Ok(Box::new(PrettierFormatter::resolve(environment, options)?))
  }
}

/// Formats by spawning the prettier executable per file and piping
/// the text over stdin/stdout.
pub struct PrettierFormatter {
  executable_path: PathBuf,
  plugins: Vec<String>,
  config: Option<String>,
}

impl PrettierFormatter {
  pub fn resolve<TEnvironment: Environment>(environment: &TEnvironment, options: &ResolvedOptions) -> Result<Self> {
    let executable_path = resolve_prettier_executable(environment)?;
    log_verbose!(environment, "Using prettier at: {}", executable_path.display());

    // the registry pairs extensions with identifiers, so identifiers
    // shared by several extensions show up multiple times
    let mut plugins: Vec<String> = Vec::new();
    for plugin in &options.plugins {
      if !plugins.contains(plugin) {
        plugins.push(plugin.clone());
      }
    }

    Ok(PrettierFormatter {
      executable_path,
      plugins,
      config: options.config.clone(),
    })
  }
}

fn resolve_prettier_executable<TEnvironment: Environment>(environment: &TEnvironment) -> Result<PathBuf> {
  if let Ok(executable_path) = which::which("prettier") {
    return Ok(executable_path);
  }
  let local_bin = environment.cwd()?.join("node_modules").join(".bin").join("prettier");
  if environment.path_exists(&local_bin) {
    return Ok(local_bin);
  }
  bail!("Could not find the prettier executable on the PATH or in node_modules/.bin. Install it with `npm install prettier`.")
}

#[async_trait(?Send)]
impl Formatter for PrettierFormatter {
  async fn format_text(&self, file_path: &Path, file_text: &str) -> Result<Option<String>> {
    let mut command = tokio::process::Command::new(&self.executable_path);
    command.arg("--stdin-filepath").arg(file_path);
    if let Some(config) = &self.config {
      command.arg("--config").arg(config);
    }
    for plugin in &self.plugins {
      command.arg("--plugin").arg(plugin);
    }
    command.stdin(Stdio::piped()).stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = command.spawn().context("Error spawning prettier")?;
    let mut stdin = child.stdin.take().context("Expected a handle to the child's stdin")?;
    let (write_result, output) = tokio::join!(
      async move {
        stdin.write_all(file_text.as_bytes()).await?;
        stdin.shutdown().await?;
        Ok::<(), std::io::Error>(())
      },
      child.wait_with_output(),
    );
    let output = output.context("Error waiting on prettier")?;

    if !output.status.success() {
      let stderr_text = String::from_utf8_lossy(&output.stderr);
      bail!("prettier exited with {}: {}", output.status, stderr_text.trim());
    }
    // surface a write failure only when the child did not already fail
    write_result.context("Error writing to prettier's stdin")?;

    let formatted_text = String::from_utf8(output.stdout).context("prettier returned invalid utf-8")?;
    if formatted_text == file_text {
      Ok(None)
    } else {
      Ok(Some(formatted_text))
    }
  }
}
