use anyhow::Result;
use dialoguer::Input;
use is_terminal::IsTerminal;
use std::io::{self, BufRead, Write};

/// Show `prompt` and read one line of input.
///
/// Interactive sessions go through dialoguer; piped stdin is read directly
/// so scripted answers (`echo y | slcli ...`) still work.
pub fn read_answer(prompt: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        let answer = Input::<String>::new()
            .with_prompt(format!("{} [y/N]", prompt))
            .allow_empty(true)
            .interact_text()?;
        return Ok(answer);
    }

    let mut stdout = io::stdout();
    write!(stdout, "{} [y/N]> ", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
