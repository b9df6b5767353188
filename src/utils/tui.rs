use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Spinner shown on stderr while a feed is downloaded and converted.
///
/// Stdout may be carrying calendar documents, so the spinner never draws there.
pub fn feed_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["-", "\\", "|", "/", " "]);
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
