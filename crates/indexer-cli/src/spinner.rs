//! Spinner feedback for command phases.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Create a ticking spinner with a message.
pub fn spinner(msg: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress bar template"),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Clear a spinner and print its success state line.
///
/// Consumes the spinner, so a phase reaches a terminal state exactly once.
pub fn succeed(pb: ProgressBar, msg: &str) {
    pb.finish_and_clear();
    println!("{} {}", "✔".green(), msg);
}

/// Clear a spinner and print its failure state line to stderr.
pub fn fail(pb: ProgressBar, msg: &str) {
    pb.finish_and_clear();
    eprintln!("{} {}", "✖".red(), msg);
}
