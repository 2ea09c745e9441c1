//! Error module.
//!
//! This module defines the error type used through-out the program.

use sections2shell_lib::parser::ParserError;
use thiserror::Error;

use std::io::Error as IOError;

#[derive(Error, Debug)]
/// THE error type.
pub enum Error {
    /// Thrown when the disassembly contains something unreadable.
    #[error("{0}")]
    Parsing(#[from] ParserError),
    /// Thrown when reading the disassembly or writing the arrays failed.
    #[error("Input/Output failed: {0}")]
    InputOutput(#[from] IOError),
}
