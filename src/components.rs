//! Reusable HTML components for the page chrome
//!
//! This module provides Maud component functions for each part of the chrome
//! (head, header, progress bar, footer, scroll affordance) and the layout that
//! arranges them around page content.

pub mod footer;
pub mod head;
pub mod header;
pub mod layout;
pub mod progress;
pub mod scroll_top;
pub mod seo;
pub mod theme;
