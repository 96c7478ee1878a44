//! Field rendering utilities for forms

use crate::state::{FormField, SelectField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active))
}

/// Draw a text-like form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let text_style = if field.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let display_value = field.display_value();
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            cursor,
        ]))
    };

    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .block(field_block(&field.label, is_active)),
        area,
    );
}

/// Draw a select. Single selects show the chosen option between arrows,
/// multi-selects list every option with a checkbox.
pub fn draw_select(frame: &mut Frame, area: Rect, select: &SelectField, is_active: bool) {
    let block = field_block(&select.label, is_active);

    if !select.multiple {
        let chosen = select
            .selected_labels()
            .first()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "---------".to_string());
        let arrow_style = border_style(is_active);
        let line = Line::from(vec![
            Span::styled("◂ ", arrow_style),
            Span::raw(chosen),
            Span::styled(" ▸", arrow_style),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    if select.options.is_empty() {
        let empty = Paragraph::new("(нет вариантов)")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row in view
    let visible_rows = area.height.saturating_sub(2).max(1) as usize;
    let skip = select.cursor.saturating_sub(visible_rows - 1);
    let items: Vec<ListItem> = select
        .options
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible_rows)
        .map(|(idx, option)| {
            let mark = if option.selected { "[x]" } else { "[ ]" };
            let style = if is_active && idx == select.cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if option.selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{mark} {}", option.label),
                style,
            )))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
