#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![deny(clippy::unused_async)]

#[macro_use]
mod environment;

use environment::RealEnvironment;
use environment::RealEnvironmentOptions;
use formatter::PrettierFormatterResolver;
use run_cli::AppError;

mod arg_parser;
mod format;
mod formatter;
mod plugins;
mod resolution;
mod run_cli;
mod shutdown;
mod utils;

#[cfg(test)]
mod test_helpers;

fn main() {
  let rt = tokio::runtime::Builder::new_current_thread().enable_io().enable_time().build().unwrap();
  rt.block_on(async move {
    match run().await {
      Ok(_) => {}
      Err(err) => {
        let result = format!("{:#}", err.inner);
        if !result.is_empty() {
          if err.exit_code == 0 {
            // help and version output
            #[allow(clippy::print_stdout)]
            {
              println!("{}", result);
            }
          } else {
            #[allow(clippy::print_stderr)]
            {
              eprintln!("{}", result);
            }
          }
        }
        std::process::exit(err.exit_code);
      }
    }
  });
}

async fn run() -> Result<(), AppError> {
  let args = arg_parser::parse_args(std::env::args().collect())?;
  let environment = RealEnvironment::new(&RealEnvironmentOptions { is_verbose: args.verbose });

  let result = shutdown::run_with_signal_drain(&environment, run_cli::run_cli(args, &environment, &PrettierFormatterResolver)).await;
  result.map_err(Into::into)
}
