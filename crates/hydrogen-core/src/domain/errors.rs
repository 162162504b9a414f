use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ComputeResult<T> = Result<T, HydrogenError>;

/// Failure classes, each with its own process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HydrogenErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl HydrogenErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

/// Categorized failure shared by every stage of a run.
///
/// `code` is a stable dotted identifier (`INPUT.PROMPT_EOF`, `RUN.RADIAL_ORACLE`)
/// that ends up in the diagnostic line printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydrogenError {
    category: HydrogenErrorCategory,
    code: &'static str,
    message: String,
}

impl HydrogenError {
    pub fn new(
        category: HydrogenErrorCategory,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub fn input_validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(HydrogenErrorCategory::InputValidationError, code, message)
    }

    pub fn io_system(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(HydrogenErrorCategory::IoSystemError, code, message)
    }

    pub fn computation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(HydrogenErrorCategory::ComputationError, code, message)
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(HydrogenErrorCategory::InternalError, code, message)
    }

    pub const fn category(&self) -> HydrogenErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    /// `ERROR: [CODE] message`, the first stderr line of a failed run.
    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.code, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl Display for HydrogenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.name(),
            self.code,
            self.message
        )
    }
}

impl Error for HydrogenError {}
