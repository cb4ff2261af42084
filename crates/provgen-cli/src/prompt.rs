use std::io::{self, BufRead, Write};

use provgen_core::InputRejection;

/// Ask `question` until `parse` accepts the answer.
///
/// Rejections are reported on `output` and the question is repeated.
/// End of input is an error.
pub fn prompt_until<T, I, O>(
    input: &mut I,
    output: &mut O,
    question: &str,
    parse: impl Fn(&str) -> Result<T, InputRejection>,
) -> io::Result<T>
where
    I: BufRead,
    O: Write,
{
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid value was entered",
            ));
        }

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                tracing::debug!(event = "input_rejected", reason = %rejection);
                writeln!(output, "{}", retry_hint(&rejection))?;
            }
        }
    }
}

fn retry_hint(rejection: &InputRejection) -> String {
    match rejection {
        InputRejection::NotNumeric(_) => "Please enter a whole number.".to_string(),
        other => format!("Invalid value: {other}."),
    }
}
