//! Hologram shimmer for section titles
//!
//! Renders a string with a per-character color gradient whose phase slides
//! over time, giving the active title a slow holographic sweep. Stateless:
//! the caller supplies the phase.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::NightDrive;

/// Build a shimmering line from `text` at the given phase (any non-negative
/// value; one full sweep per unit).
pub fn shimmer_line(text: &str, phase: f64) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Line::default();
    }
    let len = chars.len() as f64;

    let spans: Vec<Span<'static>> = chars
        .into_iter()
        .enumerate()
        .map(|(i, ch)| {
            let t = (i as f64 / len + phase).rem_euclid(1.0);
            Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(gradient(t))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    Line::from(spans)
}

/// Cyan to magenta and back, so the sweep wraps without a seam.
fn gradient(t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let s = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
    lerp_color(NightDrive::CYAN, NightDrive::MAGENTA, s)
}

fn lerp_color(a: Color, b: Color, t: f64) -> Color {
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
    fn test_one_span_per_char() {
        let line = shimmer_line("Pageflow", 0.0);
        assert_eq!(line.spans.len(), 8);
    }

    #[test]
    fn test_empty_text() {
        let line = shimmer_line("", 0.3);
        assert!(line.spans.is_empty());
    }

    #[test]
    fn test_phase_shifts_colors() {
        let a = shimmer_line("abc", 0.0);
        let b = shimmer_line("abc", 0.25);
        let fg = |line: &Line, i: usize| line.spans[i].style.fg;
        assert_ne!(fg(&a, 0), fg(&b, 0));
    }

    #[test]
    fn test_gradient_wraps_without_seam() {
        // Phase 0 and phase 1 are the same point on the cycle.
        let a = shimmer_line("abcd", 0.0);
        let b = shimmer_line("abcd", 1.0);
        for i in 0..4 {
            assert_eq!(a.spans[i].style.fg, b.spans[i].style.fg);
        }
    }
}
