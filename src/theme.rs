//! Light/dark theme mode relay
//!
//! The mode is owned by a provider above the chrome. The coordinator reads it
//! once per render pass into a `ThemeModeBundle`, and every component of that
//! pass receives the same bundle, so header, content and footer can never
//! disagree on the mode.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use tracing::debug;

use crate::error::ChromeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// The other mode. Applying it twice returns the starting mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: "#fafafa",
                paper: "#ffffff",
                text: "rgba(0, 0, 0, 0.87)",
                primary: "#3f51b5",
            },
            Self::Dark => Palette {
                background: "#303030",
                paper: "#424242",
                text: "#ffffff",
                primary: "#7986cb",
            },
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ChromeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ChromeError::InvalidThemeMode(s.to_string())),
        }
    }
}

/// Colors exposed to the page as CSS custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub paper: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
}

impl Palette {
    /// Declarations of the palette variables.
    pub fn css_variables(&self) -> String {
        format!(
            "--chrome-bg: {}; --chrome-paper: {}; --chrome-text: {}; --chrome-primary: {};",
            self.background, self.paper, self.text, self.primary
        )
    }
}

/// Stylesheet rules binding each mode's palette to the theming wrapper's
/// `data-theme` attribute.
pub fn palette_css() -> String {
    ThemeMode::ALL
        .iter()
        .map(|mode| {
            format!(
                ".theme-root[data-theme=\"{}\"] {{ {} }}\n",
                mode,
                mode.palette().css_variables()
            )
        })
        .collect()
}

/// Source of truth for the mode. Initialization and persistence are the
/// provider's business.
pub trait ModeProvider {
    fn mode(&self) -> ThemeMode;
    fn toggle(&self);
}

/// Mode held for the lifetime of one page session.
#[derive(Debug, Default)]
pub struct SessionModeProvider {
    mode: Cell<ThemeMode>,
}

impl SessionModeProvider {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Cell::new(initial),
        }
    }
}

impl ModeProvider for SessionModeProvider {
    fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    fn toggle(&self) {
        self.mode.set(self.mode.get().toggled());
    }
}

/// Toggle callback handed to descendants.
#[derive(Clone)]
pub struct ThemeToggle(Rc<dyn ModeProvider>);

impl ThemeToggle {
    pub fn invoke(&self) {
        self.0.toggle();
        debug!(mode = %self.0.mode(), "theme toggled");
    }
}

impl fmt::Debug for ThemeToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThemeToggle").finish()
    }
}

/// Mode snapshot plus toggle, passed down one render pass.
#[derive(Debug, Clone)]
pub struct ThemeModeBundle {
    pub mode: ThemeMode,
    pub toggle: ThemeToggle,
}

/// Relays the provider's mode and toggle to the chrome.
#[derive(Clone)]
pub struct ThemeModeCoordinator {
    provider: Rc<dyn ModeProvider>,
}

impl ThemeModeCoordinator {
    pub fn new(provider: Rc<dyn ModeProvider>) -> Self {
        Self { provider }
    }

    /// Coordinator over a fresh session provider.
    pub fn with_initial(mode: ThemeMode) -> Self {
        Self::new(Rc::new(SessionModeProvider::new(mode)))
    }

    pub fn mode(&self) -> ThemeMode {
        self.provider.mode()
    }

    pub fn toggle(&self) {
        self.bundle().toggle.invoke();
    }

    /// Reads the mode once for a render pass.
    pub fn bundle(&self) -> ThemeModeBundle {
        ThemeModeBundle {
            mode: self.provider.mode(),
            toggle: ThemeToggle(Rc::clone(&self.provider)),
        }
    }
}
