//! Zoom transition around a single child element

use std::time::Duration;

use maud::{Markup, html};
use tracing::debug;

use crate::error::{ChromeError, Result};

/// Enter and exit durations of the zoom transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimeouts {
    pub enter: Duration,
    pub exit: Duration,
}

impl Default for TransitionTimeouts {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(225),
            exit: Duration::from_millis(195),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Exited,
    Entering,
    Entered,
    Exiting,
}

impl TransitionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exited => "exited",
            Self::Entering => "entering",
            Self::Entered => "entered",
            Self::Exiting => "exiting",
        }
    }
}

/// Shows its child while `in` is true, zooming it in and out.
///
/// The child is mounted the moment the transition starts entering and is
/// unmounted as soon as the exit transition has run its course.
#[derive(Debug, Clone)]
pub struct VisibilityAnimator {
    child: Markup,
    phase: TransitionPhase,
    elapsed: Duration,
    timeouts: TransitionTimeouts,
}

impl VisibilityAnimator {
    /// Wraps exactly one child element.
    ///
    /// # Errors
    ///
    /// Returns `ChromeError::ChildCount` when `children` is empty or holds
    /// more than one element.
    pub fn new(children: Vec<Markup>) -> Result<Self> {
        let count = children.len();
        let mut children = children.into_iter();
        match (children.next(), children.next()) {
            (Some(child), None) => Ok(Self {
                child,
                phase: TransitionPhase::Exited,
                elapsed: Duration::ZERO,
                timeouts: TransitionTimeouts::default(),
            }),
            _ => Err(ChromeError::ChildCount(count)),
        }
    }

    pub fn with_timeouts(mut self, timeouts: TransitionTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn child(&self) -> &Markup {
        &self.child
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != TransitionPhase::Exited
    }

    /// Starts the enter or exit transition. Reversing mid-transition picks up
    /// from the current progress.
    pub fn set_in(&mut self, visible: bool) {
        let progress = self.progress();
        match (visible, self.phase) {
            (true, TransitionPhase::Exited) => {
                debug!("affordance mounted");
                self.start(TransitionPhase::Entering, Duration::ZERO);
            }
            (true, TransitionPhase::Exiting) => {
                let elapsed = self.timeouts.enter.mul_f64(progress);
                self.start(TransitionPhase::Entering, elapsed);
            }
            (false, TransitionPhase::Entered) => {
                self.start(TransitionPhase::Exiting, Duration::ZERO);
            }
            (false, TransitionPhase::Entering) => {
                let elapsed = self.timeouts.exit.mul_f64(1.0 - progress);
                self.start(TransitionPhase::Exiting, elapsed);
            }
            _ => {}
        }
    }

    /// Advances the transition clock by one frame.
    pub fn advance(&mut self, dt: Duration) {
        match self.phase {
            TransitionPhase::Entering => {
                self.elapsed += dt;
                if self.elapsed >= self.timeouts.enter {
                    self.start(TransitionPhase::Entered, Duration::ZERO);
                }
            }
            TransitionPhase::Exiting => {
                self.elapsed += dt;
                if self.elapsed >= self.timeouts.exit {
                    debug!("affordance unmounted");
                    self.start(TransitionPhase::Exited, Duration::ZERO);
                }
            }
            TransitionPhase::Exited | TransitionPhase::Entered => {}
        }
    }

    /// Runs the current transition to its end.
    pub fn settle(&mut self) {
        let remaining = match self.phase {
            TransitionPhase::Entering => self.timeouts.enter.saturating_sub(self.elapsed),
            TransitionPhase::Exiting => self.timeouts.exit.saturating_sub(self.elapsed),
            TransitionPhase::Exited | TransitionPhase::Entered => return,
        };
        self.advance(remaining);
    }

    /// Linear visibility in [0, 1].
    pub fn progress(&self) -> f64 {
        match self.phase {
            TransitionPhase::Exited => 0.0,
            TransitionPhase::Entered => 1.0,
            TransitionPhase::Entering => fraction(self.elapsed, self.timeouts.enter),
            TransitionPhase::Exiting => 1.0 - fraction(self.elapsed, self.timeouts.exit),
        }
    }

    /// Eased zoom scale in [0, 1].
    pub fn scale(&self) -> f64 {
        let inv = 1.0 - self.progress();
        1.0 - inv * inv * inv
    }

    /// Renders the child inside the zoom wrapper, or nothing when unmounted.
    pub fn render(&self) -> Option<Markup> {
        if !self.is_mounted() {
            return None;
        }

        let duration = match self.phase {
            TransitionPhase::Exiting => self.timeouts.exit,
            _ => self.timeouts.enter,
        };
        let style = format!(
            "transform: scale({:.3}); transition: transform {}ms cubic-bezier(0.4, 0, 0.2, 1) 0ms;",
            self.scale(),
            duration.as_millis()
        );

        Some(html! {
            div class="zoom" data-phase=(self.phase.as_str()) style=(style) {
                (self.child)
            }
        })
    }

    fn start(&mut self, phase: TransitionPhase, elapsed: Duration) {
        self.phase = phase;
        self.elapsed = elapsed;
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}
