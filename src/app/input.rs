use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic commands over the raw key stream. `Primary` is the single
/// action slot: submit when the sheet is submit-ready, download when a
/// generated workbook is waiting, save when the criteria modal is open.
#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Primary,
    Quit,
    AddRow,
    RemoveRow,
    SwitchSection(i32),
    NextField,
    PrevField,
    NextRow,
    PrevRow,
    Dismiss,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Primary,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            KeyCode::Char('n') | KeyCode::Char('N') => KeyCommand::AddRow,
            KeyCode::Char('d') | KeyCode::Char('D') => KeyCommand::RemoveRow,
            KeyCode::Tab => {
                let delta = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    -1
                } else {
                    1
                };
                KeyCommand::SwitchSection(delta)
            }
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab => KeyCommand::NextField,
        KeyCode::BackTab => KeyCommand::PrevField,
        KeyCode::Down => KeyCommand::NextRow,
        KeyCode::Up => KeyCommand::PrevRow,
        KeyCode::Esc => KeyCommand::Dismiss,
        _ => KeyCommand::Edit(*key),
    }
}
