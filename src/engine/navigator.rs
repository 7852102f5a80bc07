//! Linear slide navigation with a non-interruptible transition window.
//!
//! The navigator never sleeps. A navigation request records when the
//! transition started; [`Navigator::tick`] lands it once
//! [`TRANSITION_DELAY`] has passed. The UI polls `tick` every frame and asks
//! for a repaint after [`Navigator::remaining`].

use std::time::Duration;

use crate::config::{TOTAL_SLIDES, TRANSITION_DELAY};
use crate::domain::Slide;
use crate::utils::app_time::{AppInstant, elapsed_between};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle(usize),
    Transitioning {
        from: usize,
        to: usize,
        started_at: AppInstant,
    },
}

/// Side effects the caller is expected to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The experience began: start background music
    Started,
    /// A transition began: play the slide cue (unless muted)
    TransitionStarted { from: usize, to: usize },
    /// A transition landed on `index`
    Arrived(usize),
    /// The hidden message was revealed: fire the heart burst
    HiddenRevealed,
}

/// Keys the navigator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowRight,
    ArrowLeft,
    Space,
    Enter,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    phase: Phase,
    has_started: bool,
    hidden_revealed: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle(0),
            has_started: false,
            hidden_revealed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The slide on screen. During a transition this is still the origin slide.
    pub fn current_index(&self) -> usize {
        match self.phase {
            Phase::Idle(index) => index,
            Phase::Transitioning { from, .. } => from,
        }
    }

    pub fn current_slide(&self) -> Slide {
        Slide::from_index(self.current_index()).unwrap_or(Slide::FIRST)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn has_started(&self) -> bool {
        self.has_started
    }

    pub fn hidden_revealed(&self) -> bool {
        self.hidden_revealed
    }

    pub fn can_advance(&self) -> bool {
        matches!(self.phase, Phase::Idle(i) if i + 1 < TOTAL_SLIDES)
    }

    pub fn can_retreat(&self) -> bool {
        matches!(self.phase, Phase::Idle(i) if i > 0)
    }

    /// One-shot gate enabling keyboard navigation.
    pub fn begin(&mut self) -> Option<NavEvent> {
        if self.has_started {
            return None;
        }
        self.has_started = true;
        log::info!("Presentation started");
        Some(NavEvent::Started)
    }

    pub fn advance(&mut self, now: AppInstant) -> Option<NavEvent> {
        match self.phase {
            Phase::Idle(i) if i + 1 < TOTAL_SLIDES => self.start_transition(i, i + 1, now),
            _ => self.ignored("advance"),
        }
    }

    pub fn retreat(&mut self, now: AppInstant) -> Option<NavEvent> {
        match self.phase {
            Phase::Idle(i) if i > 0 => self.start_transition(i, i - 1, now),
            _ => self.ignored("retreat"),
        }
    }

    /// Jumps to any slide in range, the current one included.
    pub fn jump_to(&mut self, target: usize, now: AppInstant) -> Option<NavEvent> {
        match self.phase {
            Phase::Idle(i) if target < TOTAL_SLIDES => self.start_transition(i, target, now),
            _ => self.ignored("jump"),
        }
    }

    /// Lands a pending transition once the window has elapsed.
    pub fn tick(&mut self, now: AppInstant) -> Option<NavEvent> {
        let Phase::Transitioning { from, to, started_at } = self.phase else {
            return None;
        };
        if elapsed_between(started_at, now) < TRANSITION_DELAY {
            return None;
        }

        self.phase = Phase::Idle(to);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_navigation {
            log::info!("[nav] {} -> {} landed", from, to);
        }
        #[cfg(not(debug_assertions))]
        let _ = from;

        Some(NavEvent::Arrived(to))
    }

    /// Time left in the current transition window, if one is running.
    pub fn remaining(&self, now: AppInstant) -> Option<Duration> {
        match self.phase {
            Phase::Transitioning { started_at, .. } => {
                Some(TRANSITION_DELAY.saturating_sub(elapsed_between(started_at, now)))
            }
            Phase::Idle(_) => None,
        }
    }

    /// 0.0 at the start of a transition, 1.0 when idle or done
    pub fn transition_progress(&self, now: AppInstant) -> f32 {
        match self.phase {
            Phase::Transitioning { started_at, .. } => {
                let elapsed = elapsed_between(started_at, now).as_secs_f32();
                (elapsed / TRANSITION_DELAY.as_secs_f32()).clamp(0.0, 1.0)
            }
            Phase::Idle(_) => 1.0,
        }
    }

    /// Keyboard navigation. Ignored before `begin` and while a text field has focus.
    pub fn handle_key(
        &mut self,
        key: NavKey,
        text_input_focused: bool,
        now: AppInstant,
    ) -> Option<NavEvent> {
        if !self.has_started || text_input_focused {
            return None;
        }
        match key {
            NavKey::ArrowRight | NavKey::Space | NavKey::Enter => self.advance(now),
            NavKey::ArrowLeft => self.retreat(now),
        }
    }

    /// Reveals the hidden message. Only works on the reveal slide and only once.
    pub fn reveal_hidden(&mut self) -> Option<NavEvent> {
        if self.hidden_revealed || self.phase != Phase::Idle(Slide::HiddenReveal.index()) {
            return None;
        }
        self.hidden_revealed = true;
        Some(NavEvent::HiddenRevealed)
    }

    fn start_transition(&mut self, from: usize, to: usize, now: AppInstant) -> Option<NavEvent> {
        self.phase = Phase::Transitioning {
            from,
            to,
            started_at: now,
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_navigation {
            log::info!("[nav] {} -> {} started", from, to);
        }

        Some(NavEvent::TransitionStarted { from, to })
    }

    fn ignored(&self, request: &str) -> Option<NavEvent> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_navigation {
            log::info!("[nav] {} ignored in {:?}", request, self.phase);
        }
        #[cfg(not(debug_assertions))]
        let _ = request;

        None
    }
}
