use crate::domain::SectionSpec;

use super::field::FieldState;

#[derive(Debug, Clone)]
pub struct SectionState {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldState>,
}

impl SectionState {
    pub fn from_spec(spec: &SectionSpec) -> Self {
        SectionState {
            id: spec.id.clone(),
            title: spec.title.clone(),
            fields: spec
                .fields
                .iter()
                .cloned()
                .map(FieldState::from_spec)
                .collect(),
        }
    }
}
