//! Decorative effects
//!
//! Purely presentational: the particle drift backdrop and the hologram
//! shimmer on section titles. Nothing in here reads or writes navigator
//! state; effects can be toggled off without touching navigation.

pub mod hologram;
pub mod particles;

pub use hologram::shimmer_line;
pub use particles::ParticleField;
