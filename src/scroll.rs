//! Scroll-triggered "back to top" affordance
//!
//! The affordance is built from three parts: an observer that turns scroll
//! offsets into a past-threshold signal, an animator that mounts and zooms the
//! affordance on that signal, and a scroller that brings the page anchor back
//! into view on click. `ScrollTop` wires them together.

pub mod anchor;
pub mod animator;
pub mod observer;
pub mod top;

pub use anchor::{ActivationEvent, AnchorScroller, BACK_TO_TOP_ANCHOR, NodeRef};
pub use animator::{TransitionPhase, TransitionTimeouts, VisibilityAnimator};
pub use observer::{ScrollObserver, ScrollTriggerOptions, past_threshold};
pub use top::ScrollTop;
