use hydrogen_core::common::constants::MAX_PRINCIPAL_QUANTUM_NUMBER;
use hydrogen_core::domain::HydrogenError;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::warn;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSpec {
    pub subject: &'static str,
    pub prompt: &'static str,
    pub not_an_integer: &'static str,
    pub max_value: u32,
    pub max_attempts: u32,
}

impl PromptSpec {
    pub const fn nuclear_charge(max_attempts: u32) -> Self {
        Self {
            subject: "nuclear charge",
            prompt: "How many protons are in the nucleus of this hydrogenic atom? ",
            not_an_integer: "That's not an integer.",
            max_value: u32::MAX,
            max_attempts,
        }
    }

    pub const fn principal_quantum_number(max_attempts: u32) -> Self {
        Self {
            subject: "principal quantum number",
            prompt: "What is the value of the principle quantum number? ",
            not_an_integer: "That is not an integer.",
            max_value: MAX_PRINCIPAL_QUANTUM_NUMBER,
            max_attempts,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input ended before a valid {subject} was entered")]
    EndOfInput { subject: &'static str },
    #[error("no valid {subject} after {attempts} attempts")]
    AttemptsExhausted {
        subject: &'static str,
        attempts: u32,
    },
    #[error("failed to read {subject}: {source}")]
    Read {
        subject: &'static str,
        source: std::io::Error,
    },
    #[error("failed to write {subject} prompt: {source}")]
    Write {
        subject: &'static str,
        source: std::io::Error,
    },
}

impl From<PromptError> for HydrogenError {
    fn from(error: PromptError) -> Self {
        match error {
            PromptError::EndOfInput { .. } => {
                HydrogenError::input_validation("INPUT.PROMPT_EOF", error.to_string())
            }
            PromptError::AttemptsExhausted { .. } => {
                HydrogenError::input_validation("INPUT.PROMPT_ATTEMPTS", error.to_string())
            }
            PromptError::Read { .. } | PromptError::Write { .. } => {
                HydrogenError::io_system("IO.PROMPT", error.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    NotAnInteger,
    NotPositive,
    TooLarge,
}

/// Asks for a positive integer until one is entered or `spec.max_attempts` runs out.
///
/// Every rejected line prints a message and re-prompts; nothing else is kept.
pub fn prompt_positive_integer<R, W>(
    input: &mut R,
    output: &mut W,
    spec: &PromptSpec,
) -> Result<u32, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let write_error = |source| PromptError::Write {
        subject: spec.subject,
        source,
    };

    for attempt in 1..=spec.max_attempts {
        write!(output, "{}", spec.prompt).map_err(write_error)?;
        output.flush().map_err(write_error)?;

        // Undecodable bytes are kept as U+FFFD and rejected like any other text.
        let mut line = Vec::new();
        let read = input
            .read_until(b'\n', &mut line)
            .map_err(|source| PromptError::Read {
                subject: spec.subject,
                source,
            })?;
        if read == 0 {
            return Err(PromptError::EndOfInput {
                subject: spec.subject,
            });
        }

        let line = String::from_utf8_lossy(&line);
        let entered = line.trim();
        match parse_positive_integer(entered, spec.max_value) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                warn!(
                    subject = spec.subject,
                    attempt,
                    entered,
                    ?rejection,
                    "rejected input"
                );
                let written = match rejection {
                    Rejection::NotAnInteger => writeln!(output, "{}", spec.not_an_integer),
                    Rejection::NotPositive => writeln!(output, "Value must be a positive integer."),
                    Rejection::TooLarge => {
                        writeln!(output, "Value must be at most {}.", spec.max_value)
                    }
                };
                written.map_err(write_error)?;
            }
        }
    }

    Err(PromptError::AttemptsExhausted {
        subject: spec.subject,
        attempts: spec.max_attempts,
    })
}

fn parse_positive_integer(text: &str, max_value: u32) -> Result<u32, Rejection> {
    let value = text.parse::<i64>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow => Rejection::TooLarge,
        IntErrorKind::NegOverflow => Rejection::NotPositive,
        _ => Rejection::NotAnInteger,
    })?;

    if value <= 0 {
        return Err(Rejection::NotPositive);
    }
    u32::try_from(value)
        .ok()
        .filter(|value| *value <= max_value)
        .ok_or(Rejection::TooLarge)
}
