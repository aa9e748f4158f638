//! Flow text: banner, section headers, and result display.

use crate::rng;
use crate::terminal::{box_bottom, box_line, box_line_center, box_top, print_error};

pub fn print_banner() {
    box_top("Password Generator");
    box_line_center("Esc/CTRL+Q: quit | CTRL+U: clear input");
    box_line("");
    box_line(&format!("Entropy source: {}", rng::source_name()));
    box_bottom();
    println!();
}

pub fn print_class_header() {
    println!("Include the following (y/n):");
}

pub fn print_empty_selection() {
    print_error("You must choose at least one character type. Restarting...");
    println!();
}

pub fn print_password(password: &str) {
    println!();
    println!("Your generated password:");
    println!("{password}");
    println!();
}

pub fn clipboard_copied() {
    println!("*** -COPIED TO CLIPBOARD- ***");
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}
