//! Controls panel listing the key bindings

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::keymap::Keymap;

pub fn render(keymap: &Keymap, area: Rect, f: &mut Frame) {
    let lines: Vec<Line> = keymap
        .bindings()
        .iter()
        .map(|binding| {
            Line::from(vec![
                Span::styled(
                    format!(" [{}] ", binding.key),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(binding.label),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Dispatch ")),
        area,
    );
}
