use anyhow::{Context, Result};
use secrecy::SecretString;
use std::io::{self, BufRead, Write};

/// Reads a single line from the user, without its trailing newline.
pub fn interactive_prompt(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    read_prompt(&mut stdin.lock(), &mut io::stderr(), prompt)
}

pub fn secret_prompt(prompt: &str) -> Result<SecretString> {
    interactive_prompt(prompt).map(SecretString::from)
}

fn read_prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut response = String::new();
    input
        .read_line(&mut response)
        .context("failed to read from stdin")?;

    let trimmed = response.trim_end_matches(['\r', '\n']).len();
    response.truncate(trimmed);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::read_prompt;
    use std::io::Cursor;

    #[test]
    fn strips_line_endings() {
        let mut output = Vec::new();
        let answer = read_prompt(
            &mut Cursor::new("cook@hennypenny.com\r\n"),
            &mut output,
            "Email",
        )
        .unwrap();

        assert_eq!(answer, "cook@hennypenny.com");
        assert_eq!(String::from_utf8(output).unwrap(), "Email: ");
    }

    #[test]
    fn end_of_input_is_empty() {
        let answer = read_prompt(&mut Cursor::new(""), &mut Vec::new(), "Email").unwrap();
        assert_eq!(answer, "");
    }
}
