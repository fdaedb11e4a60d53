//! Interactive stdin prompts. The CLI surface is prompt-driven: an input
//! report path and an annotations path with a default, no flags.

use std::io::{self, BufRead, Write};

/// Print `message` and read one trimmed line from stdin.
pub fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt with a fallback used when the reply is empty.
pub fn prompt_with_default(message: &str, default: &str) -> io::Result<String> {
    let reply = prompt(&format!("{message} (default: {default}): "))?;
    if reply.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(reply)
    }
}
