use thiserror::Error;

use std::{fmt, num::ParseIntError};

use super::Rule;

#[derive(Debug, Error)]
pub enum ParserError {
    /// A byte token of an instruction line is not a valid hex number.
    #[error("Invalid byte `{token}` in instruction line: {source}")]
    InvalidByte {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Rule::*;
        let s = match self {
            EOI => "end of line",
            ws => "a tab or space",
            hex_digit => "a lowercase hex digit",
            address => "an address",
            section_name => "a section name",
            header => "'Disassembly of section .<name>:'",
            byte => "a byte",
            bytes => "instruction bytes",
            text => "the instruction text",
            instruction => "an instruction",
            symbol_name => "a symbol name",
            symbol => "a symbol definition",
            line => "a section header, an instruction or a symbol definition",
        };
        write!(f, "{}", s)
    }
}
