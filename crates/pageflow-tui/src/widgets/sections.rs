//! The fullpage section stack
//!
//! Every section virtually occupies one full viewport of rows; the stack is
//! drawn translated by the eased transition offset. Each terminal row maps
//! back to (section, row-within-section), which clips partially visible
//! sections for free during a transition.

use std::time::Instant;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::fx;
use crate::motion;
use crate::theme::NightDrive;

pub struct SectionsWidget;

impl SectionsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let rows = area.height;
        let offset = motion::section_offset(
            app.navigator.transition(),
            app.navigator.current_index(),
            rows,
            now,
        )
        .round() as i64;
        let active = app.navigator.indicator_index(now);

        for y in 0..rows {
            let virtual_row = y as i64 + offset;
            let section_idx = virtual_row.div_euclid(rows as i64);
            if section_idx < 0 || section_idx as usize >= app.deck.len() {
                continue;
            }
            let row_in_section = virtual_row.rem_euclid(rows as i64) as u16;

            if let Some(line) =
                Self::section_row(app, section_idx as usize, row_in_section, rows, active, now)
            {
                let rect = Rect::new(area.x, area.y + y, area.width, 1);
                frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
            }
        }
    }

    /// Content line for one row of a section, or `None` for padding rows.
    /// The content block (title, tagline, body) is vertically centered.
    fn section_row(
        app: &App,
        index: usize,
        row: u16,
        rows: u16,
        active: usize,
        now: Instant,
    ) -> Option<Line<'static>> {
        let section = app.deck.get(index)?;
        let body_len = section.body.len() as u16;
        let content_height = 2 + if body_len > 0 { 1 + body_len } else { 0 };
        let top = rows.saturating_sub(content_height) / 2;
        let rel = row.checked_sub(top)?;

        let is_active = index == active;
        // The incoming section keeps a muted "preparing" look for the whole
        // transition window.
        let is_preparing = app.navigator.preparing_index() == Some(index) && !is_active;

        match rel {
            0 => Some(Self::title_line(app, section, is_active, is_preparing, now)),
            1 => {
                let style = if is_active {
                    Style::default()
                        .fg(NightDrive::FG1)
                        .add_modifier(Modifier::ITALIC)
                } else {
                    Style::default().fg(NightDrive::GREY2)
                };
                Some(Line::styled(section.tagline.clone(), style))
            }
            r if r >= 3 && r - 3 < body_len => {
                let text = section.body[(r - 3) as usize].clone();
                let style = if is_active {
                    Style::default().fg(NightDrive::FG0)
                } else if is_preparing {
                    Style::default().fg(NightDrive::GREY1)
                } else {
                    Style::default().fg(NightDrive::GREY2)
                };
                Some(Line::styled(text, style))
            }
            _ => None,
        }
    }

    fn title_line(
        app: &App,
        section: &pageflow_core::Section,
        is_active: bool,
        is_preparing: bool,
        now: Instant,
    ) -> Line<'static> {
        if is_active && app.effects_enabled {
            return fx::shimmer_line(&section.title, app.shimmer_phase(now));
        }
        let style = if is_active {
            Style::default()
                .fg(NightDrive::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if is_preparing {
            Style::default()
                .fg(NightDrive::FG1)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(NightDrive::GREY1)
        };
        Line::styled(section.title.clone(), style)
    }
}
