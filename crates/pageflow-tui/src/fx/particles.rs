//! Drifting particle backdrop
//!
//! A bounded population of glowing motes that spawn at random positions,
//! drift slowly upward and fade out. Randomness comes from an internal LCG
//! so the field is deterministic for a given seed, which keeps it testable
//! and free of external dependencies.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;

use crate::theme::NightDrive;

const MAX_PARTICLES: usize = 48;
/// Ticks between spawn attempts
const SPAWN_INTERVAL: u32 = 2;
const LIFE_DECAY: f64 = 0.008;

#[derive(Debug, Clone)]
struct Particle {
    /// Position in [0, 1] viewport coordinates
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    life: f64,
}

/// Deterministic particle field.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    state: u64,
    spawn_timer: u32,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(MAX_PARTICLES),
            state: seed | 1,
            spawn_timer: 0,
        }
    }

    /// Next pseudo-random value in [0, 1).
    fn rand(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as f64 / (1u64 << 31) as f64
    }

    /// Advance the simulation one tick.
    pub fn advance(&mut self) {
        self.spawn_timer += 1;
        if self.spawn_timer >= SPAWN_INTERVAL && self.particles.len() < MAX_PARTICLES {
            self.spawn_timer = 0;
            let x = self.rand();
            let y = self.rand();
            let vx = (self.rand() - 0.5) * 0.002;
            let vy = -0.001 - self.rand() * 0.003;
            let life = 0.6 + self.rand() * 0.4;
            self.particles.push(Particle { x, y, vx, vy, life });
        }

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.life -= LIFE_DECAY;
        }

        self.particles
            .retain(|p| p.life > 0.0 && (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
    }

    /// Drop every live particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Paint the field into the frame buffer. Only blank cells are touched,
    /// so the field can be drawn after the section content without covering
    /// any text.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buf = frame.buffer_mut();
        for p in &self.particles {
            let col = area.x + (p.x * (area.width - 1) as f64) as u16;
            let row = area.y + (p.y * (area.height - 1) as f64) as u16;
            let (glyph, color) = appearance(p);
            if let Some(cell) = buf.cell_mut((col, row)) {
                if cell.symbol() == " " {
                    cell.set_char(glyph);
                    cell.set_style(Style::default().fg(color));
                }
            }
        }
    }
}

/// Glyph and color for a particle at its current life stage. Brighter and
/// heavier while young, fading toward the background as it dies.
fn appearance(p: &Particle) -> (char, Color) {
    if p.life > 0.7 {
        (
            '✦',
            blend(NightDrive::CYAN, NightDrive::MAGENTA, p.x),
        )
    } else if p.life > 0.35 {
        ('∙', NightDrive::GREY1)
    } else {
        ('·', NightDrive::GREY2)
    }
}

fn blend(a: Color, b: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => Color::Rgb(
            (ar as f64 + (br as f64 - ar as f64) * t) as u8,
            (ag as f64 + (bg as f64 - ag as f64) * t) as u8,
            (ab as f64 + (bb as f64 - ab as f64) * t) as u8,
        ),
        _ => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_is_bounded() {
        let mut field = ParticleField::new(7);
        for _ in 0..2000 {
            field.advance();
        }
        assert!(field.len() <= MAX_PARTICLES);
        assert!(!field.is_empty());
    }

    #[test]
    fn test_particles_stay_in_unit_square() {
        let mut field = ParticleField::new(42);
        for _ in 0..500 {
            field.advance();
            for p in &field.particles {
                assert!((0.0..=1.0).contains(&p.x));
                assert!((0.0..=1.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = ParticleField::new(9);
        let mut b = ParticleField::new(9);
        for _ in 0..100 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_clear_empties_field() {
        let mut field = ParticleField::new(3);
        for _ in 0..50 {
            field.advance();
        }
        field.clear();
        assert!(field.is_empty());
    }
}
