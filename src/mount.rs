//! One-shot mount-time document effects

use std::cell::Cell;

use tracing::debug;

use crate::dom::{Document, HeadNode};

/// Id of the server-rendered style block dropped on first client render.
pub const SERVER_STYLE_ID: &str = "jss-server-side";

/// Animated background script appended to the head.
pub const BACKGROUND_SCRIPT: &str = "/background/canvas-nest.js";

/// Script node loading the animated background.
pub fn background_script() -> HeadNode {
    HeadNode::script(BACKGROUND_SCRIPT)
        .attr("size", 150)
        .attr("alpha", 0.6)
        .attr("zIndex", -1)
        .attr("async", true)
}

/// Effects that run the first time the chrome mounts in a document.
#[derive(Debug, Default)]
pub struct MountEffects {
    mounted: Cell<bool>,
}

impl MountEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Removes the server style block and injects the background script.
    ///
    /// Returns `false` without touching the document if already mounted.
    pub fn mount(&self, document: &dyn Document) -> bool {
        if self.mounted.replace(true) {
            return false;
        }

        if document.remove_by_id(SERVER_STYLE_ID) {
            debug!("removed server-side styles");
        }
        document.append_head(background_script());
        true
    }
}
