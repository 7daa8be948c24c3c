//! Scroll-to-top affordance markup

use maud::{Markup, html};

use crate::scroll::BACK_TO_TOP_ANCHOR;

/// Renders the anchor marker the affordance scrolls back to
///
/// Sits directly below the fixed header and takes up the toolbar height.
pub fn anchor_marker() -> Markup {
    html! {
        div id=(BACK_TO_TOP_ANCHOR) class="chrome-toolbar-spacer" {}
    }
}

/// Renders the clickable affordance content
///
/// # Arguments
///
/// * `img_src`: Resolved path of the scroll image
///
/// # Returns
///
/// Single affordance element
pub fn affordance(img_src: &str) -> Markup {
    html! {
        div class="scroll-top" role="presentation" {
            img alt="scroll" src=(img_src) class="scroll-top-jump";
        }
    }
}

/// Renders the floating host for the affordance
///
/// The host holds the affordance as currently rendered by its transition
/// (nothing while hidden) plus a template of it for the client runtime to
/// mount once the page scrolls past `threshold`.
///
/// # Arguments
///
/// * `threshold`: Scroll offset that triggers the affordance
/// * `current`: Current transition render, `None` while hidden
/// * `child`: Affordance content for the client template
///
/// # Returns
///
/// Affordance host markup
pub fn scroll_top_host(threshold: f64, current: Option<Markup>, child: &Markup) -> Markup {
    html! {
        div class="scroll-top-host"
            data-threshold=(threshold)
            data-anchor=(BACK_TO_TOP_ANCHOR) {
            @if let Some(rendered) = current {
                (rendered)
            }
            template class="scroll-top-template" {
                (child)
            }
        }
    }
}
