use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{form::FormState, grid::GridState};

use super::components::{render_body, render_footer, render_modal};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub form: &'a FormState,
    pub status_message: &'a str,
    pub dirty: bool,
    pub download_ready: bool,
    pub help: &'a str,
    pub modal: Option<ModalRender<'a>>,
}

pub struct ModalRender<'a> {
    pub grid: &'a GridState,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    render_body(frame, chunks[0], &ctx);
    render_footer(frame, chunks[1], &ctx);

    if let Some(modal) = &ctx.modal {
        render_modal(frame, modal);
    }
}
