use thiserror::Error;

/// Wire name of the relay-loadability select that triggers the PRC-025 modal.
pub const RELAY_LOADABILITY: &str = "relayLoadbility";

/// Select option that opens the synchronous-generation criteria modal.
pub const PRC_025_SYNCHRONOUS: &str = "PRC_025_Synchronous";

/// Wire name of the CSV attachment path field. Not part of the flattened
/// payload; the file itself travels as its own multipart part.
pub const CSV_UPLOAD: &str = "csvUpload";

/// Every field the submission payload promises, in serialization order.
pub const WIRE_FIELDS: [&str; 26] = [
    "relayLocation",
    "lineNumber",
    "remoteLocation",
    "nominalSystemVoltage",
    "breakerRating",
    "conductorRating",
    "ctrW",
    "ctrX",
    "ptry",
    "prcApplicability",
    "busScheme",
    "secondlines",
    "numberOfTaps",
    "autoXfmrAtRemote",
    "numberOfBreakers",
    "noOfDistributionTransformers",
    RELAY_LOADABILITY,
    "syncReference",
    "syncSource",
    "hotLineInd",
    "vazPtRatio",
    "vbzPtRatio",
    "vczPtRatio",
    "remoteCTR",
    "remoteBFPU",
    "remoteBFGU",
];

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Select(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn text(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
        }
    }

    pub fn select(id: &str, label: &str, options: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select(options.iter().map(|opt| opt.to_string()).collect()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl SectionSpec {
    fn new(id: &str, title: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            fields,
        }
    }
}

const YES_NO: &[&str] = &["", "Yes", "No"];

/// The fixed catalog behind the line protection calculation sheet.
pub fn standard_catalog() -> Vec<SectionSpec> {
    vec![
        SectionSpec::new(
            "line",
            "Line",
            vec![
                FieldSpec::text("relayLocation", "Relay Location"),
                FieldSpec::text("lineNumber", "Line Number"),
                FieldSpec::text("remoteLocation", "Remote Location"),
                FieldSpec::text("nominalSystemVoltage", "Nominal System Voltage (kV)"),
                FieldSpec::text("breakerRating", "Breaker Rating (A)"),
                FieldSpec::text("conductorRating", "Conductor Rating (A)"),
            ],
        ),
        SectionSpec::new(
            "instrument",
            "CT / PT",
            vec![
                FieldSpec::text("ctrW", "CT Ratio (W)"),
                FieldSpec::text("ctrX", "CT Ratio (X)"),
                FieldSpec::text("ptry", "PT Ratio (Y)"),
                FieldSpec::text("vazPtRatio", "VAZ PT Ratio"),
                FieldSpec::text("vbzPtRatio", "VBZ PT Ratio"),
                FieldSpec::text("vczPtRatio", "VCZ PT Ratio"),
                FieldSpec::text("remoteCTR", "Remote CT Ratio"),
            ],
        ),
        SectionSpec::new(
            "config",
            "Configuration",
            vec![
                FieldSpec::select("prcApplicability", "PRC Applicability", YES_NO),
                FieldSpec::select(
                    "busScheme",
                    "Bus Scheme",
                    &[
                        "",
                        "Single_Bus",
                        "Double_Bus",
                        "Ring_Bus",
                        "Breaker_And_A_Half",
                    ],
                ),
                FieldSpec::text("secondlines", "Second Lines on Tower"),
                FieldSpec::text("numberOfTaps", "Number of Taps"),
                FieldSpec::select("autoXfmrAtRemote", "Auto Transformer at Remote", YES_NO),
                FieldSpec::text("numberOfBreakers", "Number of Breakers"),
                FieldSpec::text("noOfDistributionTransformers", "Distribution Transformers"),
                FieldSpec::select(
                    RELAY_LOADABILITY,
                    "Relay Loadability Criteria",
                    &[
                        "",
                        "PRC_023_Facility",
                        PRC_025_SYNCHRONOUS,
                        "PRC_025_Asynchronous",
                    ],
                ),
            ],
        ),
        SectionSpec::new(
            "sync",
            "Sync / Remote",
            vec![
                FieldSpec::text("syncReference", "Synchronism Reference"),
                FieldSpec::text("syncSource", "Synchronism Source"),
                FieldSpec::select("hotLineInd", "Hot Line Indication", YES_NO),
                FieldSpec::text("remoteBFPU", "Remote Breaker Failure PU"),
                FieldSpec::text("remoteBFGU", "Remote Breaker Failure GU"),
            ],
        ),
        SectionSpec::new(
            "attachment",
            "Attachment",
            vec![FieldSpec::text(CSV_UPLOAD, "Aspen CSV Export (path)")],
        ),
    ]
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field catalog is missing required field '{0}'")]
    MissingField(String),
    #[error("field '{0}' must be a select")]
    NotASelect(String),
    #[error("select '{field}' does not offer option '{option}'")]
    MissingOption { field: String, option: String },
}

/// Initialization contract: every promised wire name must exist, and the
/// loadability select must carry the modal trigger option. Checked once,
/// before the terminal is touched.
pub fn check_catalog(catalog: &[SectionSpec]) -> Result<(), ConfigError> {
    let find = |id: &str| {
        catalog
            .iter()
            .flat_map(|section| section.fields.iter())
            .find(|field| field.id == id)
    };

    for id in WIRE_FIELDS.iter().chain([CSV_UPLOAD].iter()) {
        if find(id).is_none() {
            return Err(ConfigError::MissingField((*id).to_string()));
        }
    }

    let loadability =
        find(RELAY_LOADABILITY).ok_or_else(|| ConfigError::MissingField(RELAY_LOADABILITY.to_string()))?;
    match &loadability.kind {
        FieldKind::Select(options) => {
            if !options.iter().any(|opt| opt == PRC_025_SYNCHRONOUS) {
                return Err(ConfigError::MissingOption {
                    field: RELAY_LOADABILITY.to_string(),
                    option: PRC_025_SYNCHRONOUS.to_string(),
                });
            }
        }
        FieldKind::Text => return Err(ConfigError::NotASelect(RELAY_LOADABILITY.to_string())),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_satisfies_contract() {
        let catalog = standard_catalog();
        check_catalog(&catalog).expect("standard catalog must pass its own contract");
    }

    #[test]
    fn missing_wire_field_is_rejected() {
        let mut catalog = standard_catalog();
        for section in &mut catalog {
            section.fields.retain(|field| field.id != "remoteBFGU");
        }
        let err = check_catalog(&catalog).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref id) if id == "remoteBFGU"));
    }

    #[test]
    fn loadability_without_trigger_option_is_rejected() {
        let mut catalog = standard_catalog();
        for section in &mut catalog {
            for field in &mut section.fields {
                if field.id == RELAY_LOADABILITY {
                    field.kind = FieldKind::Select(vec![String::new()]);
                }
            }
        }
        let err = check_catalog(&catalog).unwrap_err();
        assert!(matches!(err, ConfigError::MissingOption { .. }));
    }

    #[test]
    fn loadability_as_text_is_rejected() {
        let mut catalog = standard_catalog();
        for section in &mut catalog {
            for field in &mut section.fields {
                if field.id == RELAY_LOADABILITY {
                    field.kind = FieldKind::Text;
                }
            }
        }
        let err = check_catalog(&catalog).unwrap_err();
        assert!(matches!(err, ConfigError::NotASelect(_)));
    }
}
