use proptest::prelude::*;

use crate::{
    generator::{render, DEFAULT_COMMENT_COLUMN},
    parser::{DisassemblyParser, Entry},
};

/// Parse and render in one go, like the `sections2shell` binary does.
fn convert(input: &str, prefix: &str, header_only: bool) -> String {
    let sections = DisassemblyParser::parse(input.lines(), prefix).expect("Parsing failed");
    render(&sections, header_only, DEFAULT_COMMENT_COLUMN)
}

const OBJDUMP: &str = "
shellcode.o:     file format elf64-x86-64


Disassembly of section .text:

0000000000000000 <main>:
   0:\t55                   \tpush   %rbp
   1:\tc3                   \tret

Disassembly of section .spasm_text:

0000000000000000 <spasm_entry>:
   0:\t48 31 c0             \txor    %rax,%rax
   3:\t0f 05                \tsyscall
   5:\tc3                   \tret

Disassembly of section .spasm_data:

0000000000000000 <message>:
   0:\t68 69                \tpush   $0x69
";

#[test]
fn single_nop() {
    let out = convert("Disassembly of section .spasm_text:\n0: 90 nop\n", "spasm_", false);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "const unsigned char spasm_text[] = {");
    assert_eq!(lines[1], format!("{:<40}/* nop */", "    0x90,"));
    assert_eq!(lines[2], "};");
}

#[test]
fn other_sections_are_absent() {
    let out = convert("Disassembly of section .other:\n0: 90 nop\n", "spasm_", false);
    assert_eq!(out, "");
}

#[test]
fn symbol_before_instructions() {
    let input = "Disassembly of section .spasm_text:\n\
                 0000000000001000 <my_func>:\n\
                 1000:\tc3\tret\n";
    let out = convert(input, "spasm_", false);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[1].trim(), "/* my_func: */");
    assert!(!lines[1].contains("0x"));
    assert!(lines[2].starts_with("    0xc3,"));
}

#[test]
fn objdump_output() {
    let out = convert(OBJDUMP, "spasm_", false);
    let expected = [
        "const unsigned char spasm_text[] = {".to_string(),
        format!("{:40}/* spasm_entry: */", ""),
        format!("{:<40}/* xor    %rax,%rax */", "    0x48, 0x31, 0xc0,"),
        format!("{:<40}/* syscall */", "    0x0f, 0x05,"),
        format!("{:<40}/* ret */", "    0xc3,"),
        "};".to_string(),
        "".to_string(),
        "const unsigned char spasm_data[] = {".to_string(),
        format!("{:40}/* message: */", ""),
        format!("{:<40}/* push   $0x69 */", "    0x68, 0x69,"),
        "};".to_string(),
    ]
    .join("\n")
        + "\n\n";
    assert_eq!(out, expected);
}

#[test]
fn objdump_output_header_only() {
    assert_eq!(
        convert(OBJDUMP, "spasm_", true),
        "const unsigned char spasm_text[];\nconst unsigned char spasm_data[];\n"
    );
}

#[test]
fn custom_prefix() {
    let out = convert(OBJDUMP, "te", true);
    assert_eq!(out, "const unsigned char text[];\n");
}

/// Lines that never match any of the recognised shapes.
fn noise() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("\t...".to_string()),
        Just("shellcode.o:     file format elf64-x86-64".to_string()),
        "[G-Z ]{0,30}",
    ]
}

/// Lines that are recognised.
fn valid_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "spasm_[a-z]{1,3}|other_[a-z]{1,3}"
            .prop_map(|name| format!("Disassembly of section .{}:", name)),
        (any::<u16>(), prop::collection::vec(any::<u8>(), 1..8), "[a-z]{1,6}").prop_map(
            |(addr, bytes, text)| {
                let bytes: Vec<_> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
                format!("{:4x}:\t{} \t{}", addr, bytes.join(" "), text)
            }
        ),
        (any::<u32>(), "[a-z_]{1,10}")
            .prop_map(|(addr, name)| format!("{:016x} <{}>:", addr, name)),
    ]
}

proptest! {
    #[test]
    fn noise_does_not_change_output(
        lines in prop::collection::vec((valid_line(), prop::option::of(noise())), 0..40),
        header_only in any::<bool>(),
    ) {
        let clean: Vec<&str> = lines.iter().map(|(line, _)| line.as_str()).collect();
        let mut noisy = vec![];
        for (line, noise) in &lines {
            if let Some(noise) = noise {
                noisy.push(noise.as_str());
            }
            noisy.push(line.as_str());
        }
        let clean = DisassemblyParser::parse(&clean, "spasm_").unwrap();
        let noisy = DisassemblyParser::parse(&noisy, "spasm_").unwrap();
        prop_assert_eq!(&clean, &noisy);
        prop_assert_eq!(
            render(&clean, header_only, DEFAULT_COMMENT_COLUMN),
            render(&noisy, header_only, DEFAULT_COMMENT_COLUMN)
        );
    }

    #[test]
    fn only_prefixed_sections_survive(
        lines in prop::collection::vec(valid_line(), 0..40),
    ) {
        let sections = DisassemblyParser::parse(&lines, "spasm_").unwrap();
        for name in sections.keys() {
            prop_assert!(name.starts_with("spasm_"));
        }
    }

    #[test]
    fn entries_keep_input_order(
        names in prop::collection::vec("[a-z_]{1,10}", 0..20),
    ) {
        let mut input = vec!["Disassembly of section .spasm_text:".to_string()];
        for (i, name) in names.iter().enumerate() {
            input.push(format!("{:016x} <{}>:", i, name));
        }
        let sections = DisassemblyParser::parse(&input, "spasm_").unwrap();
        let labels: Vec<_> = names.into_iter().map(Entry::Label).collect();
        prop_assert_eq!(&sections["spasm_text"], &labels);
    }
}
