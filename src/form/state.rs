use crate::domain::SectionSpec;

use super::{field::FieldState, section::SectionState};

#[derive(Debug, Clone)]
pub struct FormState {
    pub sections: Vec<SectionState>,
    section_index: usize,
    field_index: usize,
}

impl FormState {
    pub fn from_catalog(catalog: &[SectionSpec]) -> Self {
        let mut state = Self {
            sections: catalog.iter().map(SectionState::from_spec).collect(),
            section_index: 0,
            field_index: 0,
        };
        state.normalize_focus();
        state
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn field_index(&self) -> usize {
        self.field_index
    }

    pub fn active_section(&self) -> Option<&SectionState> {
        self.sections.get(self.section_index)
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.active_section()
            .and_then(|section| section.fields.get(self.field_index))
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        self.normalize_focus();
        let index = self.field_index;
        self.sections
            .get_mut(self.section_index)
            .and_then(|section| section.fields.get_mut(index))
    }

    pub fn focus_next_field(&mut self) {
        self.normalize_focus();
        let Some(section) = self.active_section() else {
            return;
        };
        if self.field_index + 1 < section.fields.len() {
            self.field_index += 1;
        } else {
            self.advance_section(1);
        }
    }

    pub fn focus_prev_field(&mut self) {
        self.normalize_focus();
        if self.field_index > 0 {
            self.field_index -= 1;
        } else {
            self.advance_section(-1);
            if let Some(section) = self.active_section() {
                self.field_index = section.fields.len().saturating_sub(1);
            }
        }
    }

    pub fn focus_next_section(&mut self, delta: i32) {
        self.advance_section(delta);
    }

    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.sections
            .iter()
            .flat_map(|section| section.fields.iter())
            .find(|field| field.spec.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FieldState> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.fields.iter_mut())
            .find(|field| field.spec.id == id)
    }

    /// Wire value of a named field; empty when the field is unknown.
    pub fn value(&self, id: &str) -> String {
        self.field(id)
            .map(|field| field.wire_value())
            .unwrap_or_default()
    }

    pub fn set_text_value(&mut self, id: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(id)
            && let super::field::FieldValue::Text(buffer) = &mut field.value
        {
            *buffer = value.into();
        }
    }

    pub fn set_select_value(&mut self, id: &str, value: &str) -> bool {
        self.field_mut(id)
            .map(|field| field.set_select_value(value))
            .unwrap_or(false)
    }

    /// Clears every field back to its default, the form-reset step of a
    /// successful submission.
    pub fn reset_fields(&mut self) {
        for section in &mut self.sections {
            for field in &mut section.fields {
                field.reset();
            }
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.sections
            .iter()
            .any(|section| section.fields.iter().any(|field| field.dirty))
    }

    fn advance_section(&mut self, delta: i32) {
        let len = self.sections.len() as i32;
        if len == 0 {
            return;
        }
        let mut next = self.section_index as i32 + delta;
        next = ((next % len) + len) % len;
        self.section_index = next as usize;
        self.field_index = 0;
        self.normalize_focus();
    }

    fn normalize_focus(&mut self) {
        if self.sections.is_empty() {
            self.section_index = 0;
            self.field_index = 0;
            return;
        }
        if self.section_index >= self.sections.len() {
            self.section_index = 0;
        }
        let field_len = self.sections[self.section_index].fields.len();
        if field_len == 0 {
            self.field_index = 0;
        } else if self.field_index >= field_len {
            self.field_index = field_len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{self, CSV_UPLOAD, RELAY_LOADABILITY};
    use crossterm::event::{KeyCode, KeyEvent};

    fn form() -> FormState {
        FormState::from_catalog(&domain::standard_catalog())
    }

    #[test]
    fn field_navigation_wraps_across_sections() {
        let mut state = form();
        let first_len = state.sections[0].fields.len();
        for _ in 0..first_len {
            state.focus_next_field();
        }
        assert_eq!(state.section_index(), 1);
        assert_eq!(state.field_index(), 0);
        state.focus_prev_field();
        assert_eq!(state.section_index(), 0);
        assert_eq!(state.field_index(), first_len - 1);
    }

    #[test]
    fn values_round_trip_by_wire_name() {
        let mut state = form();
        state.set_text_value("lineNumber", "L-1207");
        assert_eq!(state.value("lineNumber"), "L-1207");
        assert!(state.set_select_value(RELAY_LOADABILITY, "PRC_025_Synchronous"));
        assert_eq!(state.value(RELAY_LOADABILITY), "PRC_025_Synchronous");
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut state = form();
        state.set_text_value("relayLocation", "Substation A");
        state.set_text_value(CSV_UPLOAD, "/tmp/faults.csv");
        state
            .field_mut("relayLocation")
            .expect("field")
            .handle_key(&KeyEvent::from(KeyCode::Char('!')));
        assert!(state.is_dirty());
        state.reset_fields();
        assert_eq!(state.value("relayLocation"), "");
        assert_eq!(state.value(CSV_UPLOAD), "");
        assert!(!state.is_dirty());
    }
}
