use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::NightDrive;

pub struct HelpWidget;

const BINDINGS: &[(&str, &str)] = &[
    ("↓ / PgDn / Space", "next section"),
    ("↑ / PgUp", "previous section"),
    ("Home / g", "first section"),
    ("End / G", "last section"),
    ("1-9", "jump to section"),
    ("wheel / drag", "scroll or swipe"),
    ("e", "toggle effects"),
    ("q", "quit"),
];

impl HelpWidget {
    /// Render the key map overlay, centered over everything else
    pub fn render(frame: &mut Frame) {
        let area = frame.area();

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(NightDrive::ACCENT))
            .style(Style::default().bg(NightDrive::BG1));

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = vec![Line::default()];
        for (key, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>18}", key),
                    Style::default()
                        .fg(NightDrive::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", action), Style::default().fg(NightDrive::FG0)),
            ]));
        }
        lines.push(Line::default());
        lines.push(
            Line::styled(
                "press any key to close",
                Style::default().fg(NightDrive::GREY1),
            )
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
