//! # objdump disassembly parser
//!
//! Recovers sections, instruction bytes and symbol labels from the textual
//! output of `objdump -D`. Only sections whose name starts with a given
//! prefix are collected, everything else is skipped silently.
//!
//! # Example
//! ```
//! # use sections2shell_lib::parser::{DisassemblyParser, Entry};
//! let disassembly = r#"
//! Disassembly of section .spasm_text:
//!
//! 0000000000000000 <entry>:
//!    0:	90                   	nop
//!    1:	c3                   	ret
//!
//! Disassembly of section .text:
//!
//! 0000000000001000 <main>:
//!     1000:	31 c0                	xor    %eax,%eax
//! "#;
//!
//! let sections = DisassemblyParser::parse(disassembly.lines(), "spasm_")
//!     .expect("Parsing went well");
//!
//! assert_eq!(sections.len(), 1);
//! assert_eq!(
//!     sections["spasm_text"],
//!     vec![
//!         Entry::Label("entry".into()),
//!         Entry::Instruction(vec![0x90], "nop".into()),
//!         Entry::Instruction(vec![0xc3], "ret".into()),
//!     ]
//! );
//! ```

pub mod ast;
pub mod parser;

pub use ast::{Comment, Entry, Label, SectionName, Sections};
pub use parser::{DisassemblyParser, Line, ParserError, ParserState, SectionCollector};
