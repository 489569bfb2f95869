use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prompt user on stderr and return their trimmed input. Stdout is left for results.
pub fn prompt(message: &str) -> Result<String> {
    write_prompt(&mut std::io::stderr().lock(), message)?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
pub fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
pub fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    Ok(parse_yes_no(&input, default_yes))
}

fn parse_yes_no(input: &str, default_yes: bool) -> bool {
    let input = input.to_lowercase();
    if input.is_empty() {
        default_yes
    } else {
        input == "y" || input == "yes"
    }
}

/// Prompt for one of `options`, accepting either the 1-based number or the text.
/// Empty input returns None.
pub fn prompt_choice(message: &str, options: &[&str]) -> Result<Option<String>> {
    write_choices(&mut std::io::stderr().lock(), message, options)?;
    let input = prompt("> ")?;
    Ok(resolve_choice(&input, options))
}

fn write_prompt(out: &mut impl Write, message: &str) -> Result<()> {
    write!(out, "{}", message).context("Failed to write prompt")?;
    out.flush().context("Failed to flush stderr")
}

fn write_choices(out: &mut impl Write, message: &str, options: &[&str]) -> Result<()> {
    writeln!(out, "{}", message).context("Failed to write prompt")?;
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "  {:>2}. {}", i + 1, option).context("Failed to write prompt")?;
    }
    Ok(())
}

fn resolve_choice(input: &str, options: &[&str]) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    if let Ok(index) = input.parse::<usize>() {
        if index >= 1 && index <= options.len() {
            return Some(options[index - 1].to_string());
        }
    }
    Some(input.to_string())
}
