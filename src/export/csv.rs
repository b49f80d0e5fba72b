use crate::export::ExportError;
use crate::records::ProductRecord;
use std::fs::File;
use std::io::Write;

const HEADER: [&str; 9] = [
    "title",
    "article",
    "category",
    "price",
    "availability",
    "description",
    "details",
    "images",
    "url",
];

/// UTF-8 byte order mark
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Write the records to a CSV file, or warn and skip when there are none
pub fn save(records: &[ProductRecord], filename: &str) -> Result<(), ExportError> {
    if records.is_empty() {
        ::log::warn!("No records to save, skipping {}", filename);
        return Ok(());
    }

    let mut file = File::create(filename)?;
    file.write_all(BOM)?;
    write(records, &mut file)?;

    ::log::info!("CSV saved: {}", filename);
    Ok(())
}

/// Write the header row and one row per record to any writer
pub fn write<W: Write>(records: &[ProductRecord], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for record in records {
        let images = record.images.join("; ");
        wtr.write_record([
            record.title.as_str(),
            record.article.as_str(),
            record.category.as_str(),
            record.price.as_str(),
            record.availability.as_str(),
            record.description.as_str(),
            record.details.as_str(),
            images.as_str(),
            record.url.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
