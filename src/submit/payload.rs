use indexmap::IndexMap;

use crate::{domain::WIRE_FIELDS, form::FormState, grid::SavedRow};

/// The flattened field mapping sent as the `formData` multipart part.
///
/// Insertion order is serialization order; grid fields are numbered from 1
/// with no gaps.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    fields: IndexMap<String, String>,
}

impl SubmissionPayload {
    pub fn collect(form: &FormState, rows: &[SavedRow]) -> Self {
        let mut fields = IndexMap::new();
        for id in WIRE_FIELDS {
            fields.insert(id.to_string(), form.value(id));
        }

        if !rows.is_empty() {
            fields.insert("generatorCount".to_string(), rows.len().to_string());
            for (index, row) in rows.iter().enumerate() {
                let n = index + 1;
                fields.insert(format!("generatorName{n}"), row.name.clone());
                fields.insert(format!("generatorMVA{n}"), row.mva.clone());
                fields.insert(format!("generatorQty{n}"), row.qty.clone());
                fields.insert(format!("generatorTotalMVA{n}"), row.total.clone());
                fields.insert(format!("generatorRatedPF{n}"), row.pf.clone());
                fields.insert(format!("staticReactivePower{n}"), row.q.clone());
            }
        }

        SubmissionPayload { fields }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.fields)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{self, RELAY_LOADABILITY},
        form::FormState,
    };

    fn saved(name: &str, mva: &str) -> SavedRow {
        SavedRow {
            name: name.to_string(),
            mva: mva.to_string(),
            qty: "1".to_string(),
            total: mva.to_string(),
            pf: "0.9".to_string(),
            q: String::new(),
            mw: String::new(),
            qcalc: String::new(),
        }
    }

    #[test]
    fn payload_carries_every_wire_field() {
        let mut form = FormState::from_catalog(&domain::standard_catalog());
        form.set_text_value("relayLocation", "Substation A");
        let payload = SubmissionPayload::collect(&form, &[]);
        assert_eq!(payload.len(), WIRE_FIELDS.len());
        assert_eq!(payload.get("relayLocation"), Some("Substation A"));
        assert_eq!(payload.get("remoteBFGU"), Some(""));
        assert_eq!(payload.get("generatorCount"), None);
    }

    #[test]
    fn grid_fields_are_numbered_contiguously_from_one() {
        let form = FormState::from_catalog(&domain::standard_catalog());
        let rows = vec![saved("GenA", "2"), saved("GenB", "5"), saved("GenC", "1")];
        let payload = SubmissionPayload::collect(&form, &rows);
        assert_eq!(payload.get("generatorCount"), Some("3"));
        assert_eq!(payload.get("generatorName1"), Some("GenA"));
        assert_eq!(payload.get("generatorName2"), Some("GenB"));
        assert_eq!(payload.get("generatorName3"), Some("GenC"));
        assert_eq!(payload.get("generatorName4"), None);
        assert_eq!(payload.get("generatorMVA2"), Some("5"));
        assert_eq!(payload.get("staticReactivePower1"), Some(""));
    }

    #[test]
    fn json_encoding_preserves_field_order() {
        let mut form = FormState::from_catalog(&domain::standard_catalog());
        form.set_select_value(RELAY_LOADABILITY, "PRC_025_Synchronous");
        let payload = SubmissionPayload::collect(&form, &[saved("GenA", "2")]);
        let json = payload.to_json().expect("payload encodes");
        let relay = json.find("\"relayLocation\"").expect("first wire field");
        let count = json.find("\"generatorCount\"").expect("count after fields");
        let name = json.find("\"generatorName1\"").expect("rows after count");
        assert!(relay < count && count < name);
        assert!(json.contains("\"relayLoadbility\":\"PRC_025_Synchronous\""));
    }
}
