//! Entry tables view

use crate::app::App;
use crate::state::EntryTable;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the published, scheduled and draft tables stacked vertically
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let tables = app.state.tables.tables();
    if tables.is_empty() {
        let content = Paragraph::new("Постов нет.\nНажмите 'n', чтобы создать пост.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" Посты ").borders(Borders::ALL));
        frame.render_widget(content, area);
        return;
    }

    // Every table gets its rows plus borders, the last one takes the rest
    let constraints: Vec<Constraint> = tables
        .iter()
        .enumerate()
        .map(|(idx, table)| {
            if idx + 1 == tables.len() {
                Constraint::Min(3)
            } else {
                Constraint::Length(table.rows.len().max(1) as u16 + 2)
            }
        })
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let selected = app.state.tables.selected_index();
    let mut offset = 0;
    for (table, chunk) in tables.iter().zip(chunks.iter()) {
        draw_table(frame, *chunk, table, selected.checked_sub(offset));
        offset += table.rows.len();
    }
}

/// Draw one table; `selected` is the highlighted row relative to this table
fn draw_table(frame: &mut Frame, area: Rect, table: &EntryTable, selected: Option<usize>) {
    let has_selection = selected.is_some_and(|idx| idx < table.rows.len());
    let border_color = if has_selection {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {} ({}) ", table.kind.title(), table.rows.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if table.rows.is_empty() {
        let empty = Paragraph::new("(пусто)")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let is_selected = selected == Some(idx);
            let prefix = if is_selected { "▸" } else { " " };
            let headline_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!("{prefix} ")),
                Span::styled(
                    format!("{:>3}. ", row.ordinal),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(row.headline.clone(), headline_style),
                Span::styled(
                    format!("  {}", row.blog_name),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(
                    format!("  {}", row.pub_date_display()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
