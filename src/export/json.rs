use crate::export::ExportError;
use crate::records::ProductRecord;
use std::fs::File;
use std::io::Write;

/// Write the records to a JSON file, or warn and skip when there are none
pub fn save(records: &[ProductRecord], filename: &str) -> Result<(), ExportError> {
    if records.is_empty() {
        ::log::warn!("No records to save, skipping {}", filename);
        return Ok(());
    }

    let file = File::create(filename)?;
    write(records, file)?;

    ::log::info!("JSON saved: {}", filename);
    Ok(())
}

/// Write the records as a pretty-printed JSON array to any writer
///
/// Non-ASCII text is kept as-is; field order follows the struct declaration.
pub fn write<W: Write>(records: &[ProductRecord], writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}
