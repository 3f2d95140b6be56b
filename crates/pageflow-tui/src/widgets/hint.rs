//! Scroll hint
//!
//! A one-line prompt near the bottom of the viewport. Arrow and message
//! reverse on the last section; the whole thing fades to a dimmer style
//! after a quiet period and disappears for good on the first interaction.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, HintState};
use crate::theme::NightDrive;

pub struct HintWidget;

impl HintWidget {
    pub fn render(frame: &mut Frame, frame_area: Rect, app: &App) {
        if !app.config.ui.show_hint || app.hint == HintState::Hidden {
            return;
        }
        if frame_area.height < 4 {
            return;
        }

        let text = if app.navigator.at_last() {
            "↑ Press Up or scroll back to return to the top"
        } else {
            "↓ Scroll, swipe or press Down · fast scrolling speeds up the transitions"
        };

        let style = match app.hint {
            HintState::Visible => Style::default().fg(NightDrive::FG1),
            HintState::Dimmed => Style::default().fg(NightDrive::GREY2),
            HintState::Hidden => return,
        };

        let rect = Rect::new(
            frame_area.x,
            frame_area.bottom().saturating_sub(3),
            frame_area.width,
            1,
        );
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            rect,
        );
    }
}
