//! Post form view

use super::field_renderer::{draw_field, draw_select};
use crate::app::App;
use crate::state::{FormFocus, FormMethod, PostForm, PublishMode};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Characters of a preview source shown before it is cut off
const PREVIEW_SOURCE_CHARS: usize = 48;

/// Draw the create or update form
pub fn draw_post_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let title = match form.target().method {
        FormMethod::Post => " Новый пост ".to_string(),
        FormMethod::Put => format!(" Редактирование: {} ", form.target().action),
    };
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let date_height = if form.is_pub_date_visible() { 3 } else { 0 };
    let preview_height = if form.preview.visible { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Blog
            Constraint::Length(3),              // Headline
            Constraint::Length(4),              // Summary
            Constraint::Min(4),                 // Body
            Constraint::Length(3),              // Image
            Constraint::Length(preview_height), // Preview
            Constraint::Length(3),              // Author search
            Constraint::Length(6),              // Authors + tags
            Constraint::Length(3),              // Publish mode
            Constraint::Length(date_height),    // Publication date
            Constraint::Length(BUTTON_HEIGHT),  // Buttons
        ])
        .split(inner);

    let focus = form.focus;
    draw_select(frame, chunks[0], &form.blog, focus == FormFocus::Blog);
    draw_field(frame, chunks[1], &form.headline, focus == FormFocus::Headline);
    draw_field(frame, chunks[2], &form.summary, focus == FormFocus::Summary);
    draw_field(frame, chunks[3], &form.body, focus == FormFocus::Body);
    draw_field(frame, chunks[4], &form.image, focus == FormFocus::Image);
    if form.preview.visible {
        draw_preview(frame, chunks[5], form);
    }
    draw_field(
        frame,
        chunks[6],
        &form.author_search,
        focus == FormFocus::AuthorSearch,
    );

    let select_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[7]);
    draw_select(
        frame,
        select_chunks[0],
        &form.authors,
        focus == FormFocus::Authors,
    );
    draw_select(frame, select_chunks[1], &form.tags, focus == FormFocus::Tags);

    draw_publish_mode(frame, chunks[8], form);
    if form.is_pub_date_visible() {
        draw_field(frame, chunks[9], &form.pub_date, focus == FormFocus::PubDate);
    }
    draw_buttons(frame, chunks[10], form);
}

fn draw_preview(frame: &mut Frame, area: Rect, form: &PostForm) {
    let src = form.preview.src.as_deref().unwrap_or_default();
    let shown: String = src.chars().take(PREVIEW_SOURCE_CHARS).collect();
    let ellipsis = if src.chars().count() > PREVIEW_SOURCE_CHARS {
        "…"
    } else {
        ""
    };
    let line = Line::from(vec![
        Span::styled(" Превью: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{shown}{ellipsis}"), Style::default().fg(Color::Blue)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_publish_mode(frame: &mut Frame, area: Rect, form: &PostForm) {
    let is_active = form.focus == FormFocus::PublishMode;
    let spans: Vec<Span> = [PublishMode::Now, PublishMode::Later]
        .into_iter()
        .flat_map(|mode| {
            let chosen = form.publish_mode() == mode;
            let mark = if chosen { "(•)" } else { "( )" };
            let style = if chosen && is_active {
                Style::default().fg(Color::Cyan)
            } else if chosen {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [
                Span::styled(format!("{mark} {}", mode.label()), style),
                Span::raw("   "),
            ]
        })
        .collect();

    let border = if is_active { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" Публикация ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &PostForm) {
    let visible = form.visible_buttons();
    let constraints: Vec<Constraint> = visible
        .iter()
        .map(|button| Constraint::Length(button.label().chars().count() as u16 + 4))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let is_active = form.focus == FormFocus::Buttons;
    let current = form.current_button();
    let enabled = !form.buttons_disabled();
    for (idx, button) in visible.iter().enumerate() {
        let is_selected = is_active && current == Some(*button);
        render_button(frame, chunks[idx], button.label(), is_selected, enabled);
    }
}
