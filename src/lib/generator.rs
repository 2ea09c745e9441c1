//! Everything related to turning collected [`Sections`] into C source.
//!
//! Configure a [`CodeGenerator`] and feed it the output of the
//! [`DisassemblyParser`](crate::parser::DisassemblyParser).
//!
//! # Example
//!
//! ```
//! # use sections2shell_lib::{parser::DisassemblyParser, generator::CodeGeneratorBuilder};
//! let disassembly = "Disassembly of section .spasm_text:\n   0:\t90\tnop";
//!
//! let sections = DisassemblyParser::parse(disassembly.lines(), "spasm_")
//!     .expect("Parsing went well");
//! let generator = CodeGeneratorBuilder::default()
//!     .with_comment_column(20_usize)
//!     .build()
//!     .expect("Valid configuration");
//!
//! assert_eq!(
//!     generator.generate(&sections),
//!     "const unsigned char spasm_text[] = {\n    0x90,           /* nop */\n};\n\n"
//! );
//! ```
use derive_builder::Builder;
use log::trace;
use pad::PadStr;

use crate::parser::{Entry, Sections};

/// The column trailing comments are aligned to, if nothing else is configured.
pub const DEFAULT_COMMENT_COLUMN: usize = 40;

/// Indentation of the byte literals inside an initializer.
const INDENT: &str = "    ";

/// Renders [`Sections`] as `const unsigned char` arrays.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(prefix = "with"))]
pub struct CodeGenerator {
    /// Only emit declarations, no initializers.
    #[builder(default)]
    pub header_only: bool,
    /// Column at which comments are placed.
    #[builder(default = "DEFAULT_COMMENT_COLUMN")]
    pub comment_column: usize,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        CodeGenerator {
            header_only: false,
            comment_column: DEFAULT_COMMENT_COLUMN,
        }
    }
}

/// Render `sections` with the given options.
///
/// Shortcut for configuring a [`CodeGenerator`] and calling
/// [`CodeGenerator::generate`].
pub fn render(sections: &Sections, header_only: bool, comment_column: usize) -> String {
    CodeGenerator {
        header_only,
        comment_column,
    }
    .generate(sections)
}

impl CodeGenerator {
    /// Generate one array per section, in the order of `sections`.
    pub fn generate(&self, sections: &Sections) -> String {
        let mut result = String::new();
        for (name, entries) in sections {
            trace!("Generating {} entries for {:?}", entries.len(), name);
            self.push_section(&mut result, name, entries);
        }
        result
    }
    fn push_section(&self, result: &mut String, name: &str, entries: &[Entry]) {
        result.push_str("const unsigned char ");
        result.push_str(name);
        result.push_str("[]");
        if self.header_only {
            result.push_str(";\n");
            return;
        }
        result.push_str(" = {\n");
        for entry in entries {
            result.push_str(&self.entry_line(entry));
            result.push('\n');
        }
        result.push_str("};\n\n");
    }
    /// A single line of the initializer, without newline.
    ///
    /// Labels become a comment on their own line, instructions are followed
    /// by their disassembly as comment.
    pub fn entry_line(&self, entry: &Entry) -> String {
        if entry.is_label() {
            return format!(
                "{}/* {}: */",
                "".pad_to_width(self.comment_column),
                entry.comment()
            );
        }
        let literals = byte_literals(entry.bytes());
        let padded = if literals.len() < self.comment_column {
            literals.pad_to_width(self.comment_column)
        } else {
            literals + " "
        };
        format!("{}/* {} */", padded, entry.comment())
    }
}

/// Indented, comma-terminated byte literals, i.e. `    0x48, 0x89, 0xe5,`.
fn byte_literals(bytes: &[u8]) -> String {
    let mut s = String::from(INDENT);
    for (i, byte) in bytes.iter().enumerate() {
        if i != 0 {
            s.push_str(", ");
        }
        s += &format!("0x{:02x}", byte);
    }
    s.push(',');
    s
}
