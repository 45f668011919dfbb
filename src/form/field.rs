use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{FieldKind, FieldSpec};

#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select { options: Vec<String>, selected: usize },
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: FieldValue,
    pub dirty: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn from_spec(spec: FieldSpec) -> Self {
        let value = match &spec.kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Select(options) => FieldValue::Select {
                options: options.clone(),
                selected: 0,
            },
        };
        FieldState {
            spec,
            value,
            dirty: false,
            error: None,
        }
    }

    /// Applies a key press to this field. Returns true when the value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match &mut self.value {
            FieldValue::Text(buffer) => match key.code {
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        return false;
                    }
                    buffer.push(c);
                    self.after_edit();
                    true
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    self.after_edit();
                    true
                }
                KeyCode::Delete => {
                    buffer.clear();
                    self.after_edit();
                    true
                }
                _ => false,
            },
            FieldValue::Select { options, selected } => match key.code {
                KeyCode::Left => {
                    if *selected == 0 {
                        *selected = options.len().saturating_sub(1);
                    } else {
                        *selected -= 1;
                    }
                    self.after_edit();
                    true
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    if !options.is_empty() {
                        *selected = (*selected + 1) % options.len();
                    }
                    self.after_edit();
                    true
                }
                _ => false,
            },
        }
    }

    /// The string transmitted for this field in the flattened payload.
    pub fn wire_value(&self) -> String {
        match &self.value {
            FieldValue::Text(buffer) => buffer.clone(),
            FieldValue::Select { options, selected } => {
                options.get(*selected).cloned().unwrap_or_default()
            }
        }
    }

    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(buffer) => buffer.clone(),
            FieldValue::Select { options, selected } => {
                let value = options.get(*selected).map(String::as_str).unwrap_or("");
                if value.is_empty() {
                    "<none>".to_string()
                } else {
                    value.to_string()
                }
            }
        }
    }

    pub fn set_select_value(&mut self, value: &str) -> bool {
        if let FieldValue::Select { options, selected } = &mut self.value
            && let Some(index) = options.iter().position(|opt| opt == value)
        {
            *selected = index;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        match &mut self.value {
            FieldValue::Text(buffer) => buffer.clear(),
            FieldValue::Select { selected, .. } => *selected = 0,
        }
        self.dirty = false;
        self.error = None;
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldSpec;
    use crossterm::event::{KeyCode, KeyEvent};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn text_field_edits_accumulate() {
        let mut field = FieldState::from_spec(FieldSpec::text("lineNumber", "Line Number"));
        assert!(field.handle_key(&press(KeyCode::Char('4'))));
        assert!(field.handle_key(&press(KeyCode::Char('2'))));
        assert_eq!(field.wire_value(), "42");
        assert!(field.dirty);
        assert!(field.handle_key(&press(KeyCode::Backspace)));
        assert_eq!(field.wire_value(), "4");
        assert!(field.handle_key(&press(KeyCode::Delete)));
        assert_eq!(field.wire_value(), "");
    }

    #[test]
    fn select_cycles_and_wraps() {
        let mut field = FieldState::from_spec(FieldSpec::select(
            "hotLineInd",
            "Hot Line Indication",
            &["", "Yes", "No"],
        ));
        assert_eq!(field.wire_value(), "");
        assert!(field.handle_key(&press(KeyCode::Right)));
        assert_eq!(field.wire_value(), "Yes");
        assert!(field.handle_key(&press(KeyCode::Left)));
        assert!(field.handle_key(&press(KeyCode::Left)));
        assert_eq!(field.wire_value(), "No");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut field = FieldState::from_spec(FieldSpec::select(
            "busScheme",
            "Bus Scheme",
            &["", "Ring_Bus"],
        ));
        field.handle_key(&press(KeyCode::Right));
        field.reset();
        assert_eq!(field.wire_value(), "");
        assert!(!field.dirty);
    }
}
