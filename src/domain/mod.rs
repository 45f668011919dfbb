mod catalog;

pub use catalog::{
    CSV_UPLOAD, ConfigError, FieldKind, FieldSpec, PRC_025_SYNCHRONOUS, RELAY_LOADABILITY,
    SectionSpec, WIRE_FIELDS, check_catalog, standard_catalog,
};
