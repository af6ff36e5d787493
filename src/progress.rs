use std::sync::{Arc, OnceLock};

use indicatif::{ProgressBar, ProgressStyle};

/// Callback type for reporting download progress.
/// Arguments: source URL, bytes written so far, total bytes (0 if unknown), is_complete
pub type ProgressFn = Arc<dyn Fn(&str, u64, u64, bool) + Send + Sync>;

const BAR_TEMPLATE: &str =
    "{msg} [{wide_bar}] {binary_bytes}/{binary_total_bytes} ({binary_bytes_per_sec}, ETA {eta})";
const SPINNER_TEMPLATE: &str = "{spinner} {msg} {binary_bytes} ({binary_bytes_per_sec})";

/// Returns a progress function that draws an indicatif bar on stderr.
///
/// The bar is created on the first call, so each returned function is good
/// for a single download. Sizes are shown in binary units (KiB, MiB, ...).
pub fn default_progress_fn() -> ProgressFn {
    let bar: OnceLock<ProgressBar> = OnceLock::new();
    Arc::new(move |src: &str, current: u64, total: u64, complete: bool| {
        let bar = bar.get_or_init(|| new_bar(src, total));
        bar.set_position(current);
        if complete {
            bar.finish();
        }
    })
}

fn new_bar(src: &str, total: u64) -> ProgressBar {
    let bar = if total > 0 {
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        ProgressBar::new(total).with_style(style)
    } else {
        let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        ProgressBar::new_spinner().with_style(style)
    };
    bar.with_message(display_name(src))
}

/// Last path segment of `src` without any query string.
fn display_name(src: &str) -> String {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    path.rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or(path)
        .to_owned()
}
