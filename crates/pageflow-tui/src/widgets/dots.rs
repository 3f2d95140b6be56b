//! Navigation dot rail
//!
//! One dot per section along the right edge, vertically centered. The rail
//! doubles as a mouse target: `hit_test` maps a click back to a section
//! index with a one-column tolerance on either side.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme::NightDrive;

pub struct DotsWidget;

impl DotsWidget {
    /// Rail geometry, or `None` when the viewport is too small to host it.
    pub fn area(frame_area: Rect, total: usize) -> Option<Rect> {
        let total = u16::try_from(total).ok()?;
        if total == 0 || frame_area.width < 8 || frame_area.height < total + 2 {
            return None;
        }
        let x = frame_area.right().checked_sub(3)?;
        let y = frame_area.y + (frame_area.height - total) / 2;
        Some(Rect::new(x, y, 1, total))
    }

    pub fn render(frame: &mut Frame, frame_area: Rect, app: &App, now: Instant) {
        if !app.config.ui.show_dots {
            return;
        }
        let Some(area) = Self::area(frame_area, app.deck.len()) else {
            return;
        };

        let active = app.navigator.indicator_index(now);
        let preparing = app.navigator.preparing_index();

        for i in 0..app.deck.len() {
            let (glyph, style) = if i == active {
                (
                    "●",
                    Style::default()
                        .fg(NightDrive::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
            } else if preparing == Some(i) {
                ("◉", Style::default().fg(NightDrive::FG1))
            } else {
                ("○", Style::default().fg(NightDrive::GREY1))
            };
            let rect = Rect::new(area.x, area.y + i as u16, 1, 1);
            frame.render_widget(Paragraph::new(glyph).style(style), rect);
        }
    }

    /// Map a mouse position to the dot index under it.
    pub fn hit_test(frame_area: Rect, total: usize, column: u16, row: u16) -> Option<usize> {
        let area = Self::area(frame_area, total)?;
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        if column + 1 < area.x || column > area.x + 1 {
            return None;
        }
        Some((row - area.y) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_maps_rows_to_indices() {
        let frame = Rect::new(0, 0, 80, 24);
        let area = DotsWidget::area(frame, 3).expect("rail fits");
        assert_eq!(area.height, 3);

        for i in 0..3 {
            let hit = DotsWidget::hit_test(frame, 3, area.x, area.y + i as u16);
            assert_eq!(hit, Some(i));
        }
    }

    #[test]
    fn test_hit_test_tolerates_neighbor_columns() {
        let frame = Rect::new(0, 0, 80, 24);
        let area = DotsWidget::area(frame, 3).expect("rail fits");
        assert_eq!(DotsWidget::hit_test(frame, 3, area.x - 1, area.y), Some(0));
        assert_eq!(DotsWidget::hit_test(frame, 3, area.x + 1, area.y), Some(0));
        assert_eq!(DotsWidget::hit_test(frame, 3, area.x - 2, area.y), None);
    }

    #[test]
    fn test_hit_test_misses_outside_rail() {
        let frame = Rect::new(0, 0, 80, 24);
        assert_eq!(DotsWidget::hit_test(frame, 3, 10, 12), None);
        let area = DotsWidget::area(frame, 3).expect("rail fits");
        assert_eq!(DotsWidget::hit_test(frame, 3, area.x, area.y + 3), None);
    }

    #[test]
    fn test_tiny_viewport_has_no_rail() {
        assert!(DotsWidget::area(Rect::new(0, 0, 4, 24), 3).is_none());
        assert!(DotsWidget::area(Rect::new(0, 0, 80, 3), 3).is_none());
        assert!(DotsWidget::area(Rect::default(), 3).is_none());
        assert_eq!(DotsWidget::hit_test(Rect::default(), 3, 0, 0), None);
    }
}
