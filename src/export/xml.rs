use crate::export::ExportError;
use crate::records::ProductRecord;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs::File;
use std::io::Write as _;

/// Write the records to an XML file, or warn and skip when there are none
pub fn save(records: &[ProductRecord], filename: &str) -> Result<(), ExportError> {
    if records.is_empty() {
        ::log::warn!("No records to save, skipping {}", filename);
        return Ok(());
    }

    let mut file = File::create(filename)?;
    write(records, &mut file)?;
    file.flush()?;

    ::log::info!("XML saved: {}", filename);
    Ok(())
}

/// Write a `products` tree with one `product` element per record
///
/// The root carries a `total` attribute and `images` expands to one `image`
/// element per URL.
pub fn write<W: std::io::Write>(records: &[ProductRecord], writer: W) -> Result<(), ExportError> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("products");
    root.push_attribute(("total", records.len().to_string().as_str()));
    xml.write_event(Event::Start(root))?;

    for record in records {
        xml.write_event(Event::Start(BytesStart::new("product")))?;

        write_field(&mut xml, "url", &record.url)?;
        write_field(&mut xml, "title", &record.title)?;
        write_field(&mut xml, "article", &record.article)?;
        write_field(&mut xml, "category", &record.category)?;
        write_field(&mut xml, "availability", &record.availability)?;
        write_field(&mut xml, "description", &record.description)?;
        write_field(&mut xml, "details", &record.details)?;
        write_field(&mut xml, "price", &record.price)?;

        xml.write_event(Event::Start(BytesStart::new("images")))?;
        for image in &record.images {
            write_field(&mut xml, "image", image)?;
        }
        xml.write_event(Event::End(BytesEnd::new("images")))?;

        xml.write_event(Event::End(BytesEnd::new("product")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("products")))?;
    Ok(())
}

fn write_field<W: std::io::Write>(
    xml: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), quick_xml::Error> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
