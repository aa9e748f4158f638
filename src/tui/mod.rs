//! Interactive password generation flow.

mod input;
mod text;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::pass;
use crate::pass::charset::{self, Selection};
use crate::terminal::{clear, print_error, reset_terminal};

/// Run the interactive flow: collect a length and a class selection, then
/// generate and display one password. An empty selection restarts the whole
/// flow, length prompt included.
pub fn run() {
    reset_terminal();
    clear();

    loop {
        text::print_banner();

        let Some(length) = input::prompt_length("Desired password length") else {
            return;
        };

        println!();
        text::print_class_header();
        let Some(selection) = prompt_selection() else {
            return;
        };
        println!();

        if selection.is_empty() {
            text::print_empty_selection();
            continue;
        }

        let pool = charset::build(selection);
        match pass::generate(length, &pool, selection) {
            Ok(mut password) => {
                text::print_password(&password);
                offer_clipboard(&password);
                password.zeroize();
                return;
            }
            Err(e) => {
                print_error(&e.to_string());
                println!();
            }
        }
    }
}

/// Ask the three class questions in pool order.
fn prompt_selection() -> Option<Selection> {
    Some(Selection {
        letters: input::prompt_yes_no("  Letters (a-z, A-Z)?")?,
        digits: input::prompt_yes_no("  Digits (0-9)?")?,
        symbols: input::prompt_yes_no("  Symbols (!, @, #, ...)?")?,
    })
}

/// Offer to copy the password to the clipboard.
fn offer_clipboard(password: &str) {
    if input::prompt_yes_no("Copy to clipboard?") != Some(true) {
        return;
    }

    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(password.to_string()) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                text::clipboard_copied();
            }
            Err(e) => text::clipboard_error(&e.to_string()),
        },
        Err(e) => text::clipboard_error(&e.to_string()),
    }
}
