use anyhow::Result;
use thiserror::Error;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
  pub write: bool,
  pub excludes: Option<Vec<String>>,
  pub file_types: Option<Vec<String>>,
  pub config: Option<String>,
  pub silent: bool,
  pub plugins: Option<Vec<String>>,
  pub verbose: bool,
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ParseArgsError(#[from] anyhow::Error);

impl ParseArgsError {
  /// Usage errors exit with clap's code; help and version output exit zero.
  pub fn exit_code(&self) -> i32 {
    match self.0.downcast_ref::<clap::Error>() {
      Some(err) => err.exit_code(),
      None => 1,
    }
  }
}

pub fn parse_args(args: Vec<String>) -> Result<CliArgs, ParseArgsError> {
  inner_parse_args(args).map_err(ParseArgsError)
}

fn inner_parse_args(args: Vec<String>) -> Result<CliArgs> {
  let cli_parser = create_cli_parser();
  let matches = match cli_parser.try_get_matches_from(&args) {
    Ok(result) => result,
    Err(err) => return Err(err.into()),
  };

  Ok(CliArgs {
    write: matches.get_flag("write"),
    excludes: values_to_vec(matches.get_many("exclude")),
    file_types: values_to_vec(matches.get_many("file-types")),
    config: matches.get_one::<String>("config").map(String::from),
    silent: matches.get_flag("silent"),
    plugins: values_to_vec(matches.get_many("plugins")),
    verbose: matches.get_flag("verbose"),
  })
}

fn values_to_vec(values: Option<clap::parser::ValuesRef<String>>) -> Option<Vec<String>> {
  values.map(|x| x.map(std::string::ToString::to_string).collect())
}

pub fn create_cli_parser() -> clap::Command {
  use clap::Arg;
  use clap::Command;

  Command::new("prettify")
    .bin_name("prettify")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Formats files with prettier, loading any prettier plugins installed in node_modules.")
    .override_usage("prettify [OPTIONS]")
    .after_help(
      r#"EXAMPLES:
  Report the files that need formatting:

    prettify

  Overwrite files in place:

    prettify -w

  Only format typescript files:

    prettify --file-types ts tsx"#,
    )
    .arg(
      Arg::new("write")
        .long("write")
        .alias("w")
        .short('w')
        .help("Overwrite files in place instead of only reporting them.")
        .action(clap::ArgAction::SetTrue),
    )
    .arg(
      Arg::new("exclude")
        .long("exclude")
        .alias("e")
        .short('e')
        .value_name("paths")
        .help("Paths to skip during traversal. Defaults to node_modules and .nyc_output.")
        .num_args(1..),
    )
    .arg(
      Arg::new("file-types")
        .long("file-types")
        .alias("fileTypes")
        .short('f')
        .value_name("extensions")
        .help("File types to format. This overrides the detected file types entirely.")
        .num_args(1..),
    )
    .arg(
      Arg::new("config")
        .long("config")
        .alias("conf")
        .short('c')
        .value_name("path")
        .help("Path to a prettier configuration file, passed through to prettier.")
        .num_args(1),
    )
    .arg(
      Arg::new("silent")
        .long("silent")
        .short('s')
        .help("Suppress the success message when no changes are needed.")
        .action(clap::ArgAction::SetTrue),
    )
    .arg(
      Arg::new("plugins")
        .long("plugins")
        .value_name("modules")
        .help("Plugin modules to load. This overrides the detected plugins entirely.")
        .num_args(1..),
    )
    .arg(
      Arg::new("verbose")
        .long("verbose")
        .help("Prints additional diagnostic information.")
        .action(clap::ArgAction::SetTrue),
    )
}
