mod commands;
mod logging;
mod prompt;

pub use commands::{RunConfig, run_radial_command};
pub use prompt::{DEFAULT_MAX_ATTEMPTS, PromptError, PromptSpec, prompt_positive_integer};

use clap::Parser;
use hydrogen_core::domain::HydrogenError;
use std::io::{BufRead, Write};

pub fn run_from_env() -> i32 {
    logging::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    match run_with_io(args, &mut input, &mut output) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_hydrogen_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            eprintln!("{}", diagnostic.fatal_exit_line());
            diagnostic.exit_code()
        }
    }
}

pub fn run_with_io<I, S, R, W>(args: I, input: &mut R, output: &mut W) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let full_args = std::iter::once("hydrogen-radial".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args, input, output)
}

fn parse_and_dispatch<R, W>(args: Vec<String>, input: &mut R, output: &mut W) -> Result<i32, CliError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    match Cli::try_parse_from(&args) {
        Ok(cli) => run_radial_command(&cli.run.into_config(), input, output),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(output, "{}", err).map_err(anyhow::Error::from)?;
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "hydrogen-radial",
    version,
    about = "Plot radial probability densities of a hydrogen-like atom"
)]
struct Cli {
    #[command(flatten)]
    run: commands::RunArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(HydrogenError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    pub fn as_hydrogen_error(&self) -> HydrogenError {
        match self {
            Self::Usage(message) => {
                HydrogenError::input_validation("INPUT.CLI_USAGE", message.trim_end())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => HydrogenError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, run_with_io};
    use hydrogen_core::domain::HydrogenErrorCategory;
    use std::io::Cursor;

    fn run_cli(args: &[&str], lines: &str) -> (Result<i32, CliError>, String) {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_with_io(args.iter().copied(), &mut input, &mut output);
        (result, String::from_utf8(output).expect("output is utf-8"))
    }

    #[test]
    fn help_is_written_and_exits_cleanly() {
        let (result, output) = run_cli(&["--help"], "");
        assert_eq!(result.expect("help should succeed"), 0);
        assert!(output.contains("--principal"));
        assert!(output.contains("--no-plot"));
    }

    #[test]
    fn non_positive_flag_is_a_usage_error() {
        let (result, _) = run_cli(&["--principal", "0", "--no-plot"], "");
        let error = result.expect_err("n=0 should be rejected");
        assert!(matches!(error, CliError::Usage(_)));

        let diagnostic = error.as_hydrogen_error();
        assert_eq!(
            diagnostic.category(),
            HydrogenErrorCategory::InputValidationError
        );
        assert_eq!(diagnostic.code(), "INPUT.CLI_USAGE");
        assert_eq!(diagnostic.exit_code(), 2);
    }

    #[test]
    fn principal_flag_is_capped() {
        let (result, _) = run_cli(&["--principal", "101", "--no-plot"], "");
        assert!(matches!(result, Err(CliError::Usage(_))));

        let (result, output) = run_cli(&["-z", "1", "-n", "100", "--no-plot"], "");
        assert_eq!(result.expect("n=100 is accepted"), 0);
        assert!(output.contains("(100 subshells)"));
    }

    #[test]
    fn output_conflicts_with_no_plot() {
        let (result, _) = run_cli(&["--no-plot", "--output", "chart.png"], "");
        assert!(matches!(result, Err(CliError::Usage(_))));
    }

    #[test]
    fn prompts_follow_flags_in_order() {
        let (result, output) = run_cli(&["--no-plot", "--max-attempts", "3"], "1\n2\n");
        assert_eq!(result.expect("run should succeed"), 0);

        let charge_prompt = output
            .find("How many protons are in the nucleus of this hydrogenic atom? ")
            .expect("charge prompt");
        let principal_prompt = output
            .find("What is the value of the principle quantum number? ")
            .expect("principal prompt");
        assert!(charge_prompt < principal_prompt);
        assert!(output.contains("Hydrogen-like atom: Z=1, n=2 (2 subshells)"));
    }

    #[test]
    fn exhausted_attempts_map_to_input_exit_code() {
        let (result, _) = run_cli(&["--no-plot", "--max-attempts", "2"], "a\nb\nc\n");
        let error = result.expect_err("attempts should run out");
        let diagnostic = error.as_hydrogen_error();
        assert_eq!(diagnostic.code(), "INPUT.PROMPT_ATTEMPTS");
        assert_eq!(diagnostic.exit_code(), 2);
        assert_eq!(diagnostic.fatal_exit_line(), "FATAL EXIT CODE: 2");
    }

    #[test]
    fn internal_errors_are_reported_as_io() {
        let error = CliError::from(anyhow::anyhow!("stdout closed"));
        let diagnostic = error.as_hydrogen_error();
        assert_eq!(diagnostic.code(), "IO.CLI");
        assert_eq!(diagnostic.exit_code(), 3);
    }
}
