//! Reading progress bar

use maud::{Markup, html};

/// Percentage of the page scrolled, in [0, 100].
///
/// Pages that cannot scroll report 0.
pub fn progress_percent(offset: f64, max_offset: f64) -> f64 {
    if max_offset <= 0.0 {
        return 0.0;
    }
    (offset / max_offset * 100.0).clamp(0.0, 100.0)
}

/// Renders the progress bar pinned to the top of the viewport
pub fn scroll_progress(percent: f64) -> Markup {
    html! {
        div class="scroll-progress" role="progressbar"
            aria-valuemin="0" aria-valuemax="100" aria-valuenow=(format!("{:.0}", percent)) {
            div class="scroll-progress-bar" style=(format!("width: {:.2}%;", percent)) {}
        }
    }
}
