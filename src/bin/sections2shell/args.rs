use sections2shell_lib::generator::CodeGenerator;
use structopt::{clap::AppSettings, StructOpt};

#[derive(Debug, StructOpt)]
#[structopt(
    usage = "objdump -D <binary> | sections2shell [--header] [<prefix>]",
    setting = AppSettings::AllowLeadingHyphen
)]
/// Convert the disassembly of prefixed sections into C byte arrays.
///
/// The output of `objdump -D` is read from stdin. Every section whose name
/// starts with the given prefix is written to stdout as a
/// `const unsigned char` array, each instruction on its own line and
/// commented with its disassembly.
pub struct Args {
    /// Only emit the array declarations.
    ///
    /// Use this to generate a header file to accompany the definitions.
    /// Giving it more than once has no further effect.
    #[structopt(long, multiple = true)]
    pub header: bool,
    /// Column at which the comments are aligned.
    #[structopt(long, value_name = "COLUMN", default_value = "40")]
    pub comment_column: usize,
    /// Only sections starting with this prefix are converted.
    ///
    /// Anything that is not a known flag is taken as prefix, even if it
    /// starts with a hyphen.
    #[structopt(name = "PREFIX", default_value = "spasm_")]
    pub prefix: String,
}

impl Args {
    /// Create the generator configured by these arguments.
    pub fn generator(&self) -> CodeGenerator {
        CodeGenerator {
            header_only: self.header,
            comment_column: self.comment_column,
        }
    }
}
