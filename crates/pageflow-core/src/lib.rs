pub mod classify;
pub mod config;
pub mod deck;
pub mod error;
pub mod navigator;
pub mod templates;

pub use classify::{Intensity, IntensityClassifier, Verdict};
pub use config::{AppConfig, MotionConfig, UiConfig};
pub use deck::{Deck, Section};
pub use error::{Error, Result};
pub use navigator::{SectionNavigator, SpeedClass, Transition, TransitionIntent};
