//! Centralised error hierarchy for the **Narlang evaluator**.
//!
//! Evaluation failures are described by [`RuntimeError`], a `{kind, message}`
//! pair.  Every node signals failure by returning one of these through the
//! crate‑wide [`Result`] alias; only [`crate::ast::RootNode`] turns it into a
//! plain return value.
//!
//! Failures while loading a tree (reading the file, decoding JSON) live in
//! [`NarError`]; they happen before evaluation starts.
//!
//! The module **does not** print diagnostics itself

use std::fmt;
use std::io;
use thiserror::Error;

use log::info;

/// Category of an evaluation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operand of the wrong variant for the requested operator.
    TypeMismatch,

    /// Lookup or assignment of an identifier that was never declared.
    UndefinedVariable,

    DivisionByZero,

    /// Left‑hand side of an assignment does not name a variable.
    InvalidAssignmentTarget,

    /// `if`/`while` condition evaluated to something other than a boolean.
    ConditionNotBoolean,

    /// The print sink rejected a write.
    Output,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::TypeMismatch => "TypeMismatch",
            ErrorKind::UndefinedVariable => "UndefinedVariable",
            ErrorKind::DivisionByZero => "DivisionByZero",
            ErrorKind::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorKind::ConditionNotBoolean => "ConditionNotBoolean",
            ErrorKind::Output => "Output",
        };

        f.write_str(name)
    }
}

/// Structured evaluation failure: a kind plus a human‑readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Runtime error ({kind}): {message}")]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

impl RuntimeError {
    pub fn new<S: Into<String>>(kind: ErrorKind, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating {} error: {}", kind, message);

        RuntimeError { kind, message }
    }

    pub fn type_mismatch<S: Into<String>>(msg: S) -> Self {
        Self::new(ErrorKind::TypeMismatch, msg)
    }

    pub fn undefined_variable(name: &str) -> Self {
        Self::new(
            ErrorKind::UndefinedVariable,
            format!("Undefined variable '{}'.", name),
        )
    }

    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero, "Division by zero.")
    }

    pub fn invalid_assignment_target<S: Into<String>>(msg: S) -> Self {
        Self::new(ErrorKind::InvalidAssignmentTarget, msg)
    }

    pub fn condition_not_boolean<S: Into<String>>(msg: S) -> Self {
        Self::new(ErrorKind::ConditionNotBoolean, msg)
    }

    pub fn output(err: io::Error) -> Self {
        Self::new(ErrorKind::Output, format!("Failed to write output: {}", err))
    }
}

/// Failure while loading a syntax tree from disk or memory.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NarError {
    /// The tree file could not be opened or read.
    #[error("Failed to read syntax tree: {0}")]
    Io(#[from] io::Error),

    /// The tree document could not be decoded.
    #[error("Malformed syntax tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate‑wide `Result` alias for evaluation.
pub type Result<T> = std::result::Result<T, RuntimeError>;
