//! Theming wrapper component

use maud::{Markup, html};

use crate::theme::ThemeMode;

/// Wraps chrome and content in the mode's palette
///
/// Sets `data-theme` on the wrapper. The palette variables are keyed on that
/// attribute in the bundled stylesheet, so flipping it recolors everything
/// inside.
pub fn theme_root(mode: ThemeMode, body: Markup) -> Markup {
    html! {
        div class="theme-root" data-theme=(mode.as_str()) {
            (body)
        }
    }
}
