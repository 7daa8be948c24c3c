//! Page chrome for generated static sites.

mod assets;
pub mod components;
mod config;
pub mod dom;
mod error;
pub mod mount;
pub mod scroll;
mod site;
pub mod theme;

pub use assets::write_assets;
pub use components::layout::{Layout, LayoutProps, compose};
pub use components::seo::SeoMeta;
pub use config::{Config, ImageResolver};
pub use error::ChromeError;
pub use scroll::{
    ActivationEvent, AnchorScroller, BACK_TO_TOP_ANCHOR, NodeRef, ScrollObserver, ScrollTop,
    ScrollTriggerOptions, TransitionPhase, VisibilityAnimator,
};
pub use site::write_site;
pub use theme::{ModeProvider, SessionModeProvider, ThemeMode, ThemeModeBundle, ThemeModeCoordinator};
