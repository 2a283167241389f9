// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fixed-choice selector widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// A titled list of choices with one highlighted
pub struct SelectorWidget<'a> {
    title: &'a str,
    options: &'a [&'a str],
    selected: usize,
    focused: bool,
}

impl<'a> SelectorWidget<'a> {
    /// Create a new selector
    pub fn new(title: &'a str, options: &'a [&'a str], selected: usize) -> Self {
        Self {
            title,
            options,
            selected,
            focused: false,
        }
    }

    /// Mark the selector as having keyboard focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SelectorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                if i == self.selected {
                    Line::from(Span::styled(
                        format!("> {}", option),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {}", option),
                        Style::default().fg(Color::White),
                    ))
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
