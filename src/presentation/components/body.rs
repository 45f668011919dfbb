use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Tabs},
};

use crate::form::{FieldState, FieldValue};

use super::super::view::UiContext;

pub fn render_body(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_section_tabs(frame, chunks[0], ctx);
    render_field_list(frame, chunks[1], ctx);
}

fn render_section_tabs(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let titles: Vec<Line<'_>> = ctx
        .form
        .sections
        .iter()
        .map(|section| Line::from(section.title.clone()))
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(ctx.title.to_string())
                .borders(Borders::ALL),
        )
        .select(ctx.form.section_index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_field_list(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let Some(section) = ctx.form.active_section() else {
        frame.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let items: Vec<ListItem<'static>> = section.fields.iter().map(field_item).collect();
    let mut list_state = ListState::default();
    list_state.select(Some(ctx.form.field_index()));

    let list = List::new(items)
        .block(
            Block::default()
                .title(section.title.clone())
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn field_item(field: &FieldState) -> ListItem<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<32}", field.spec.label),
        Style::default().fg(Color::Cyan),
    )];
    match &field.value {
        FieldValue::Text(buffer) => spans.push(Span::raw(buffer.clone())),
        FieldValue::Select { .. } => spans.push(Span::styled(
            format!("‹ {} ›", field.display_value()),
            Style::default().fg(Color::Magenta),
        )),
    }
    if let Some(error) = &field.error {
        spans.push(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        ));
    }
    ListItem::new(Line::from(spans))
}
