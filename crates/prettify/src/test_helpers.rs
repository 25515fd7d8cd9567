use crate::arg_parser::parse_args;
use crate::environment::TestEnvironment;
use crate::formatter::FormatterResolver;
use crate::formatter::TestFormatterResolver;
use crate::run_cli::run_cli;
use crate::run_cli::AppError;

pub fn run_test_cli(args: Vec<&str>, environment: &TestEnvironment) -> Result<(), AppError> {
  run_test_cli_with_resolver(args, environment, &TestFormatterResolver::default())
}

pub fn run_test_cli_with_resolver(
  args: Vec<&str>,
  environment: &TestEnvironment,
  formatter_resolver: &impl FormatterResolver<TestEnvironment>,
) -> Result<(), AppError> {
  let mut args: Vec<String> = args.into_iter().map(String::from).collect();
  args.insert(0, String::from(""));
  let args = parse_args(args)?;
  environment.set_verbose(args.verbose);

  let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
  rt.block_on(async move { Ok(run_cli(args, environment, formatter_resolver).await?) })
}
