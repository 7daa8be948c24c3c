//! Smooth scroll back to the page anchor

use std::rc::Rc;

use tracing::debug;

use crate::dom::{Document, Host, ScrollBehavior, ScrollBlock, ScrollIntoViewOptions};

/// Id of the marker rendered just below the header.
pub const BACK_TO_TOP_ANCHOR: &str = "back-to-top-anchor";

/// Reference to the node an event originated from.
///
/// Only the owning document matters to the chrome, which lets the affordance
/// work inside nested documents such as embedded frames.
#[derive(Clone, Default)]
pub struct NodeRef {
    owner_document: Option<Rc<dyn Document>>,
}

impl NodeRef {
    pub fn in_document(document: Rc<dyn Document>) -> Self {
        Self {
            owner_document: Some(document),
        }
    }

    /// Node not attached to any document.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn owner_document(&self) -> Option<&Rc<dyn Document>> {
        self.owner_document.as_ref()
    }
}

/// Pointer activation of the affordance.
#[derive(Clone, Default)]
pub struct ActivationEvent {
    pub target: NodeRef,
}

impl ActivationEvent {
    pub fn click(target: NodeRef) -> Self {
        Self { target }
    }
}

/// Scrolls the anchor into view on activation.
#[derive(Clone)]
pub struct AnchorScroller {
    anchor_id: String,
    document: Option<Rc<dyn Document>>,
}

impl AnchorScroller {
    /// Creates a scroller for `BACK_TO_TOP_ANCHOR`, falling back to the host
    /// document for events without an owner document.
    pub fn new(host: &Host) -> Self {
        Self {
            anchor_id: BACK_TO_TOP_ANCHOR.to_string(),
            document: host.document.clone(),
        }
    }

    pub fn with_anchor(mut self, anchor_id: impl Into<String>) -> Self {
        self.anchor_id = anchor_id.into();
        self
    }

    pub fn anchor_id(&self) -> &str {
        &self.anchor_id
    }

    /// Requests a smooth, centered scroll to the anchor.
    ///
    /// Returns whether a scroll was requested. A missing document or anchor
    /// is not an error: the activation is simply ignored.
    pub fn activate(&self, event: &ActivationEvent) -> bool {
        let Some(document) = event
            .target
            .owner_document()
            .or(self.document.as_ref())
        else {
            debug!("activation outside any document, ignored");
            return false;
        };

        let Some(anchor) = document.query_by_id(&self.anchor_id) else {
            debug!(anchor = %self.anchor_id, "anchor not mounted, ignored");
            return false;
        };

        document.scroll_into_view(
            &anchor,
            ScrollIntoViewOptions {
                behavior: ScrollBehavior::Smooth,
                block: ScrollBlock::Center,
            },
        );
        true
    }
}
