use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use pageflow_core::classify::swipe_is_fast;
use pageflow_core::{AppConfig, Deck, SectionNavigator, SpeedClass, TransitionIntent};

use crate::fx::ParticleField;
use crate::input::Action;
use crate::widgets::DotsWidget;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation
    Normal,
    /// Help overlay
    Help,
}

/// Scroll hint lifecycle: shown at startup, dimmed after a quiet period,
/// hidden for good on the first interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    Visible,
    Dimmed,
    Hidden,
}

/// Press anchor for a drag-swipe gesture
#[derive(Debug, Clone, Copy)]
struct SwipeAnchor {
    row: u16,
    at: Instant,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Loaded section deck
    pub deck: Deck,
    /// Section navigator (owns the intensity classifier)
    pub navigator: SectionNavigator,
    /// Current application mode
    pub mode: Mode,
    /// Scroll hint state
    pub hint: HintState,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Background effects toggle
    pub effects_enabled: bool,
    /// Particle backdrop
    pub particles: ParticleField,
    /// Speed tier of the most recent transition, for the status bar
    pub last_speed: Option<SpeedClass>,
    /// Last drawn frame area, used for mouse hit-testing
    pub viewport: Rect,
    /// App start time, drives the shimmer phase and hint auto-dim
    started: Instant,
    /// Net wheel direction of the burst accumulating this tick
    wheel_net: i32,
    /// Wheel events in the accumulating burst
    wheel_events: u32,
    swipe: Option<SwipeAnchor>,
}

impl App {
    pub fn new(config: AppConfig, deck: Deck) -> Self {
        let navigator = SectionNavigator::new(deck.len(), config.motion.clone());
        let effects_enabled = config.ui.effects_enabled();
        let hint = if config.ui.show_hint {
            HintState::Visible
        } else {
            HintState::Hidden
        };
        Self {
            config,
            deck,
            navigator,
            mode: Mode::Normal,
            hint,
            status_message: None,
            should_quit: false,
            effects_enabled,
            particles: ParticleField::new(0x70617265),
            last_speed: None,
            viewport: Rect::default(),
            started: Instant::now(),
            wheel_net: 0,
            wheel_events: 0,
            swipe: None,
        }
    }

    /// Phase for the title shimmer, one sweep roughly every three seconds.
    pub fn shimmer_phase(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started).as_secs_f64() * 0.35
    }

    /// Periodic update: transition lifecycle, idle reset, wheel-burst flush,
    /// hint auto-dim and the particle backdrop.
    pub fn on_tick(&mut self, now: Instant) {
        self.navigator.tick(now);
        self.flush_wheel(now);

        if self.hint == HintState::Visible
            && now.saturating_duration_since(self.started) >= self.config.ui.hint_dim_after()
        {
            self.hint = HintState::Dimmed;
        }

        if self.effects_enabled {
            self.particles.advance();
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Normal => Mode::Help,
                    Mode::Help => Mode::Normal,
                };
            }
            Action::ExitMode => {
                self.mode = Mode::Normal;
            }
            Action::ToggleEffects => {
                self.effects_enabled = !self.effects_enabled;
                if !self.effects_enabled {
                    self.particles.clear();
                }
                self.set_status(if self.effects_enabled {
                    "Effects on"
                } else {
                    "Effects off"
                });
            }
            // Discrete key triggers bypass the classifier and always count
            // as fast.
            Action::NextSection => {
                let intent = self.navigator.request_next(true, now);
                self.note_transition(intent);
            }
            Action::PrevSection => {
                let intent = self.navigator.request_prev(true, now);
                self.note_transition(intent);
            }
            Action::FirstSection => {
                let intent = self.navigator.request_go_to(0, true, now);
                self.note_transition(intent);
            }
            Action::LastSection => {
                let last = self.navigator.total_sections() - 1;
                let intent = self.navigator.request_go_to(last, true, now);
                self.note_transition(intent);
            }
            Action::GoToSection(index) => {
                self.jump_to(index, now);
            }
            Action::None => {}
        }
    }

    /// Jump straight to a section, as a dot click does: the trigger counts
    /// as fast when it skips over at least one section.
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        let distant = index.abs_diff(self.navigator.current_index()) > 1;
        let intent = self.navigator.request_go_to(index, distant, now);
        self.note_transition(intent);
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.accumulate_wheel(1),
            MouseEventKind::ScrollUp => self.accumulate_wheel(-1),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = DotsWidget::hit_test(
                    self.viewport,
                    self.deck.len(),
                    mouse.column,
                    mouse.row,
                ) {
                    self.jump_to(index, now);
                } else {
                    self.swipe = Some(SwipeAnchor {
                        row: mouse.row,
                        at: now,
                    });
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(anchor) = self.swipe.take() {
                    self.finish_swipe(anchor, mouse.row, now);
                }
            }
            _ => {}
        }
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        // The section offset is recomputed from the viewport every frame, so
        // a resize only needs the new hit-test geometry.
        self.viewport = Rect::new(0, 0, width, height);
    }

    /// Collect one wheel event into the burst being accumulated this tick.
    /// Wheel input during a transition is dropped, not buffered.
    fn accumulate_wheel(&mut self, direction: i32) {
        if self.navigator.is_transitioning() {
            return;
        }
        self.wheel_net += direction;
        self.wheel_events += 1;
    }

    /// Normalize the accumulated burst into a single scroll event, classify
    /// it, and navigate in the burst's net direction.
    fn flush_wheel(&mut self, now: Instant) {
        if self.wheel_events == 0 {
            return;
        }
        let events = self.wheel_events;
        let net = self.wheel_net;
        self.wheel_events = 0;
        self.wheel_net = 0;

        if net == 0 || self.navigator.is_transitioning() {
            return;
        }

        let magnitude = events as f64 * self.config.motion.wheel_step;
        let verdict = self.navigator.record_scroll(magnitude, now);
        let intent = if net > 0 {
            self.navigator.request_next(verdict.is_fast, now)
        } else {
            self.navigator.request_prev(verdict.is_fast, now)
        };
        self.note_transition(intent);
        self.hide_hint();
    }

    fn finish_swipe(&mut self, anchor: SwipeAnchor, release_row: u16, now: Instant) {
        if self.navigator.is_transitioning() {
            return;
        }
        // Dragging upward moves forward, like a touch swipe.
        let delta = anchor.row as f64 - release_row as f64;
        let elapsed = now.saturating_duration_since(anchor.at);
        let motion = &self.config.motion;

        if delta.abs() > motion.swipe_threshold_rows && elapsed < motion.swipe_window() {
            let fast = swipe_is_fast(
                elapsed,
                delta,
                motion.swipe_threshold_rows,
                motion.swipe_window(),
            );
            debug!(delta, elapsed_ms = elapsed.as_millis() as u64, fast, "swipe");
            let intent = if delta > 0.0 {
                self.navigator.request_next(fast, now)
            } else {
                self.navigator.request_prev(fast, now)
            };
            self.note_transition(intent);
        }
    }

    /// Record an accepted transition: hide the hint and drop any transient
    /// status notice. A `None` intent was a silent no-op and changes nothing.
    fn note_transition(&mut self, intent: Option<TransitionIntent>) {
        if let Some(intent) = intent {
            self.last_speed = Some(intent.speed);
            self.hide_hint();
            self.clear_status();
        }
    }

    pub fn hide_hint(&mut self) {
        self.hint = HintState::Hidden;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
