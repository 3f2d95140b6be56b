use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pageflow_core::SpeedClass;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::theme::NightDrive;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let mode_str = match app.mode {
            Mode::Help => "HELP".to_string(),
            Mode::Normal => Self::speed_label(app).to_uppercase(),
        };

        let position = format!(
            "{}/{}",
            app.navigator.indicator_index(now) + 1,
            app.navigator.total_sections()
        );

        let streak = app.navigator.classifier().consecutive_fast();

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else if streak > 0 {
            format!(" {} | {} | streak {}", mode_str, position, streak)
        } else {
            format!(" {} | {}", mode_str, position)
        };

        let help_hint = " q:quit ?:help ↑/↓:navigate 1-9:jump ";
        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(NightDrive::FG0).bg(NightDrive::BG2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(NightDrive::BG2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(NightDrive::GREY1).bg(NightDrive::BG2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }

    /// Label of the transition speed currently in flight, falling back to
    /// the most recent one.
    fn speed_label(app: &App) -> &'static str {
        app.navigator
            .transition()
            .map(|t| t.speed())
            .or(app.last_speed)
            .unwrap_or(SpeedClass::Normal)
            .label()
    }
}
