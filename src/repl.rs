use std::io::{self, BufRead, Write};

use log::debug;

use crate::{evaluate, util::num::format_number};

/// First line printed when the prompt starts.
pub const BANNER: &str = "reckon | type expressions like: 12+7*3-4/2";
/// Printed in place of a result when evaluation fails.
pub const INVALID_EXPRESSION: &str = "Invalid expression";
/// Printed before each line is read.
pub const PROMPT: &str = "> ";

/// Runs the interactive prompt until the input is exhausted.
///
/// Each non-blank line is evaluated on its own and answered with
/// `= <result>` or with [`INVALID_EXPRESSION`], followed by an empty line.
/// Blank lines are skipped. The details of a failed evaluation are only
/// logged; the user sees the generic message.
///
/// # Parameters
/// - `input`: Source of expression lines, usually locked stdin.
/// - `output`: Destination for the banner, prompts and results.
///
/// # Errors
/// Returns an error if reading from `input` or writing to `output` fails.
///
/// # Example
/// ```
/// use reckon::repl::run;
///
/// let mut output = Vec::new();
/// run("2+3\n".as_bytes(), &mut output).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("= 5"));
/// ```
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{BANNER}")?;
    writeln!(output, "Press CTRL + D to quit\n")?;

    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match evaluate(&line) {
            Ok(value) => writeln!(output, "= {}\n", format_number(value))?,
            Err(e) => {
                debug!("{line:?}: {e}");
                writeln!(output, "{INVALID_EXPRESSION}\n")?;
            },
        }
    }

    Ok(())
}
