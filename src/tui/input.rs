//! Raw-mode prompts for the interactive flow.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, format_number, print_error, reset_terminal};

/// Map a 1-based cursor position in raw digits to a 1-based position in the
/// comma-formatted display string.
fn digit_cursor_to_display(digits: &str, cursor_pos: usize) -> usize {
    let n = digits.len();
    if n == 0 || cursor_pos <= 1 {
        return 1;
    }
    let digits_before = cursor_pos - 1;
    let first_group = match n % 3 {
        0 => 3,
        r => r,
    };
    let commas = if digits_before <= first_group {
        0
    } else {
        1 + (digits_before - first_group - 1) / 3
    };
    digits_before + commas + 1
}

/// Format a string of digits with comma separators
fn format_digits(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    match s.parse::<usize>() {
        Ok(n) => format_number(n),
        Err(_) => s.to_string(),
    }
}

/// Ask for the password length until the user enters a positive integer.
/// Returns None when the user cancels (Esc/CTRL+Q).
pub fn prompt_length(prompt: &str) -> Option<usize> {
    loop {
        match read_number(prompt)? {
            0 => print_error("Please enter a positive number."),
            n => return Some(n),
        }
    }
}

/// Read one number with live comma formatting and cursor movement.
/// Empty or unparseable input reads as 0 so the caller re-prompts;
/// None means the user cancelled.
fn read_number(prompt: &str) -> Option<usize> {
    let mut digits = String::new();
    let mut cursor_pos = 1; // 1-based: 1 = before first digit
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return read_number_line(prompt),
    };

    print!("{}: ", prompt);
    flush();

    let mut last_display_len = 0;

    loop {
        match read() {
            Ok(Event::Key(key_event)) => {
                match key_event.code {
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        digits.clear();
                        cursor_pos = 1;
                    }
                    KeyCode::Enter => {
                        break;
                    }
                    KeyCode::Backspace => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                            digits.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos <= digits.len() {
                            digits.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Left => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if cursor_pos < digits.len() + 1 {
                            cursor_pos += 1;
                        }
                    }
                    KeyCode::Home => {
                        cursor_pos = 1;
                    }
                    KeyCode::End => {
                        cursor_pos = digits.len() + 1;
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        // usize::MAX is 20 digits; stop before the parse can fail
                        if digits.len() < 19 {
                            digits.insert(cursor_pos - 1, c);
                            cursor_pos += 1;
                        }
                    }
                    _ => {}
                }

                // Redraw with formatting
                let formatted = format_digits(&digits);
                print!("\r{}: {}", prompt, " ".repeat(last_display_len + 1));
                print!("\r{}: {}", prompt, formatted);
                flush();
                last_display_len = formatted.len();

                // Position cursor within formatted display
                let display_col = digit_cursor_to_display(&digits, cursor_pos);
                print!("\x1b[{}G", prompt.len() + 2 + display_col);
                flush();
            }
            Err(_) => break,
            _ => {}
        }
    }

    drop(_guard);
    println!();

    if cancelled {
        None
    } else {
        Some(digits.parse().unwrap_or(0))
    }
}

/// Line-based fallback when raw mode is unavailable.
fn read_number_line(prompt: &str) -> Option<usize> {
    print!("{}: ", prompt);
    flush();

    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().parse().unwrap_or(0)),
    }
}

/// Single-keypress yes/no prompt. Keys other than y/n are ignored until one
/// is pressed. Returns None when the user cancels (Esc/CTRL+Q).
pub fn prompt_yes_no(prompt: &str) -> Option<bool> {
    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return prompt_yes_no_line(prompt),
    };

    print!("{} [y/n]: ", prompt);
    flush();

    let mut answer = None;

    loop {
        match read() {
            Ok(Event::Key(key_event)) => match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Esc => break,
                KeyCode::Char(c) => match c.to_ascii_lowercase() {
                    'y' => {
                        answer = Some(true);
                        break;
                    }
                    'n' => {
                        answer = Some(false);
                        break;
                    }
                    _ => {}
                },
                _ => {}
            },
            Err(_) => break,
            _ => {}
        }
    }

    // Disable raw mode BEFORE echoing the answer so the newline prints clean
    guard.disable();
    match answer {
        Some(true) => println!("y"),
        Some(false) => println!("n"),
        None => println!(),
    }
    answer
}

/// Line-based fallback when raw mode is unavailable.
fn prompt_yes_no_line(prompt: &str) -> Option<bool> {
    loop {
        print!("{} [y/n]: ", prompt);
        flush();

        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Some(true),
            "n" | "no" => return Some(false),
            _ => print_error("Please enter y or n."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_cursor_to_display() {
        // "1234" renders as "1,234": digit positions 1..=5 map past the comma
        assert_eq!(digit_cursor_to_display("1234", 1), 1);
        assert_eq!(digit_cursor_to_display("1234", 2), 2);
        assert_eq!(digit_cursor_to_display("1234", 3), 4);
        assert_eq!(digit_cursor_to_display("1234", 5), 6);
        assert_eq!(digit_cursor_to_display("", 1), 1);
    }

    #[test]
    fn test_format_digits() {
        assert_eq!(format_digits(""), "");
        assert_eq!(format_digits("42"), "42");
        assert_eq!(format_digits("1234567"), "1,234,567");
    }
}
