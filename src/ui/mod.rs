pub mod capability;
pub mod color;
pub mod layout;
pub mod present;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::state::AppState, ui::present::CanvasView};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if !layout::fits(area.width, area.height) {
        let warning = Paragraph::new("Terminal too small.")
            .block(Block::default().borders(Borders::ALL).title("thunder"));
        frame.render_widget(warning, area);
        return;
    }

    if let (Some(surface), Some(capability)) =
        (state.effect.surface(), state.support.capability())
    {
        frame.render_widget(
            CanvasView::new(surface, capability, state.effect.tint_filter()),
            area,
        );
    }

    if let Some(label) = state.effect.options().class_name.as_deref() {
        render_class_badge(frame, area, label);
    }
}

fn render_class_badge(frame: &mut Frame, area: Rect, label: &str) {
    let width = badge_width(label).min(area.width);
    let badge_area = Rect {
        x: area.right().saturating_sub(width.saturating_add(1)),
        y: area.y,
        width,
        height: 1,
    };
    let badge = Paragraph::new(Line::from(format!(" {label} "))).style(
        Style::default()
            .fg(Color::Gray)
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(badge, badge_area);
}

fn badge_width(label: &str) -> u16 {
    u16::try_from(label.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}
