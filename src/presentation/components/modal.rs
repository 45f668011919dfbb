use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Clear, Row, Table},
};

use crate::grid::{GridColumn, RowState};

use super::super::view::ModalRender;
use super::layout::modal_rect;

const HEADERS: [&str; 8] = [
    "Generation Name",
    "MVA",
    "Qty",
    "Total MVA",
    "PF",
    "MVAR",
    "MW",
    "MVAR (calc)",
];

const WIDTHS: [Constraint; 8] = [
    Constraint::Min(16),
    Constraint::Length(8),
    Constraint::Length(5),
    Constraint::Length(10),
    Constraint::Length(7),
    Constraint::Length(8),
    Constraint::Length(8),
    Constraint::Length(11),
];

pub fn render_modal(frame: &mut Frame<'_>, modal: &ModalRender<'_>) {
    let grid = modal.grid;
    let height = (grid.rows().len() + 7).min(frame.area().height as usize) as u16;
    let width = frame.area().width.saturating_sub(4).min(92).max(48);
    let area = modal_rect(frame.area(), width, height.max(8));
    frame.render_widget(Clear, area);

    let (focus_row, focus_col) = grid.focus();
    let header = Row::new(HEADERS.map(Cell::from))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let mut rows: Vec<Row<'_>> = grid
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            data_row(row, (index == focus_row).then_some(focus_col))
        })
        .collect();
    rows.push(totals_row(grid));

    let table = Table::new(rows, WIDTHS).header(header).block(
        Block::default()
            .title(format!(
                "PRC-025 Synchronous Generation ({})",
                grid.row_count_label()
            ))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn data_row<'a>(row: &'a RowState, focus: Option<GridColumn>) -> Row<'a> {
    let editable = |column: GridColumn, text: &'a str| {
        let mut style = Style::default();
        if column.index() < row.flagged.len() && row.flagged[column.index()] {
            style = style.fg(Color::Red).add_modifier(Modifier::BOLD);
        }
        if focus == Some(column) {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::UNDERLINED);
        }
        Cell::from(Span::styled(text, style))
    };
    let derived = |text: &'a str| {
        Cell::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
    };

    Row::new(vec![
        editable(GridColumn::Name, &row.name),
        editable(GridColumn::RatedMva, &row.rated_mva),
        editable(GridColumn::Quantity, &row.quantity),
        derived(&row.total_mva),
        editable(GridColumn::PowerFactor, &row.power_factor),
        editable(GridColumn::ReactiveMvar, &row.reactive_mvar),
        derived(&row.real_mw),
        derived(&row.reactive_calc),
    ])
}

fn totals_row(grid: &crate::grid::GridState) -> Row<'static> {
    let totals = grid.totals();
    Row::new(vec![
        Cell::from("Totals"),
        Cell::from(""),
        Cell::from(""),
        Cell::from(totals.total_mva),
        Cell::from(""),
        Cell::from(totals.reactive_mvar),
        Cell::from(totals.real_mw),
        Cell::from(totals.reactive_calc),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
}
