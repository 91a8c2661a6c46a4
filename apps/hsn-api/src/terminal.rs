//! Interactive terminal interface: a line-based read-validate-print loop.

use std::io::{self, BufRead, Write};

use hsn_core::{validate, MasterTable};

/// Runs the prompt loop against the loaded table. Exits on EOF or when the
/// user types `exit`/`quit` (case-insensitive).
pub fn run(table: &MasterTable) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(&mut stdin.lock(), &mut stdout, table)
}

/// Loop body over explicit reader/writer handles so tests can drive it with
/// in-memory buffers.
fn run_loop(
    input: &mut impl BufRead,
    output: &mut impl Write,
    table: &MasterTable,
) -> io::Result<()> {
    writeln!(output, "\nHSN Code Validator (Type 'exit' to quit)")?;

    let mut line = String::new();
    loop {
        write!(output, "\nEnter HSN Code: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let code = line.trim();
        if code.eq_ignore_ascii_case("exit") || code.eq_ignore_ascii_case("quit") {
            break;
        }

        let result = validate(code, table);
        if result.valid {
            writeln!(output, "✅ Valid: {}", result.description.unwrap_or_default())?;
        } else {
            writeln!(output, "❌ Invalid: {}", result.reason.unwrap_or_default())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsn_core::ReferenceEntry;

    fn table() -> MasterTable {
        MasterTable::from_entries([ReferenceEntry {
            code: "1010".to_string(),
            description: "Live animals".to_string(),
        }])
    }

    fn run_session(input: &str) -> String {
        let mut output = Vec::new();
        run_loop(&mut input.as_bytes(), &mut output, &table()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_valid_code_prints_description() {
        let output = run_session("1010\nexit\n");

        assert!(output.contains("✅ Valid: Live animals"));
    }

    #[test]
    fn test_invalid_code_prints_reason() {
        let output = run_session("10A0\nexit\n");

        assert!(output.contains("❌ Invalid: HSN code must be numeric"));
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let output = run_session("QUIT\n");

        // Nothing validated; only the banner and one prompt.
        assert!(!output.contains("Valid:"));
        assert!(!output.contains("Invalid:"));
    }

    #[test]
    fn test_eof_ends_the_loop() {
        let output = run_session("1010\n");

        assert!(output.contains("✅ Valid: Live animals"));
    }

    #[test]
    fn test_banner_and_prompt_are_printed() {
        let output = run_session("exit\n");

        assert!(output.contains("HSN Code Validator (Type 'exit' to quit)"));
        assert!(output.contains("Enter HSN Code: "));
    }
}
