mod exits;
mod pass;
mod rng;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    // Password material must never land in a core dump
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    tui::run();
}
