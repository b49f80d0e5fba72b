pub mod csv;
pub mod json;
pub mod xml;

use crate::records::ProductRecord;
use std::fmt;
use std::io;

/// Error raised while writing an output artifact
#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Csv(::csv::Error),
    Json(serde_json::Error),
    Xml(quick_xml::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Csv(e) => write!(f, "CSV error: {}", e),
            ExportError::Json(e) => write!(f, "JSON error: {}", e),
            ExportError::Xml(e) => write!(f, "XML error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<::csv::Error> for ExportError {
    fn from(err: ::csv::Error) -> Self {
        ExportError::Csv(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Json(err)
    }
}

impl From<quick_xml::Error> for ExportError {
    fn from(err: quick_xml::Error) -> Self {
        ExportError::Xml(err)
    }
}

/// Write the collected records to CSV, JSON and XML under one base name
///
/// Each format is produced independently; an empty record list is reported
/// with a warning per format and nothing is written.
pub fn save_all(records: &[ProductRecord], base_filename: &str) -> Result<(), ExportError> {
    csv::save(records, &format!("{}.csv", base_filename))?;
    json::save(records, &format!("{}.json", base_filename))?;
    xml::save(records, &format!("{}.xml", base_filename))?;
    Ok(())
}
