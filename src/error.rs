//! Error types for the generation engine.
//!
//! Every fallible operation in this crate returns `CodegenResult<T>`, an
//! alias for `Result<T, CodegenError>`.
//!
//! Errors fall into two classes. Fatal errors (a broken run configuration or
//! a contract violation inside the engine) abort the whole generation run.
//! Everything else only aborts the table that was being processed, and the
//! orchestrator moves on to the next one.
//!
//! ```
//! use mapper_codegen::error::{CodegenError, CodegenResult};
//!
//! fn load() -> CodegenResult<()> {
//!     Err(CodegenError::Configuration("mappers is required".to_string()))
//! }
//!
//! match load() {
//!     Err(e) if e.is_fatal() => eprintln!("aborting run: {}", e),
//!     Err(e) => eprintln!("skipping table: {}", e),
//!     Ok(()) => {}
//! }
//! ```

use thiserror::Error;

use crate::codegen::metadata::ColumnId;

/// Result type alias for engine operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// The main error type for the generation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Run configuration is missing a required key or holds an invalid value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A fuzz position outside left/right/all reached the predicate synthesizer
    #[error("Invalid fuzz position: {0}")]
    InvalidFuzzPosition(String),

    /// Sequence-generated column on a table without a generation statement
    #[error("Table '{table}' has a sequence-generated column but no generated key statement")]
    MissingGeneratedKey { table: String },

    /// Large-object column whose type code has no symbolic JDBC name
    #[error("Column '{column}' has unknown JDBC type code {code}")]
    UnknownJdbcType { column: String, code: i32 },

    /// Column id that does not belong to the table being processed
    #[error("Table '{table}' has no column with id {id}")]
    UnknownColumn { table: String, id: ColumnId },

    /// Table metadata fixture could not be read or parsed
    #[error("Metadata error: {0}")]
    Metadata(String),
}

impl CodegenError {
    /// Whether this error terminates the whole run rather than the current table.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CodegenError::Configuration(_) | CodegenError::InvalidFuzzPosition(_)
        )
    }
}
