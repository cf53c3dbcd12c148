//! Word document export
//!
//! Writes a minimal WordprocessingML package: one paragraph per blank-line
//! separated block, 6pt spacing after, line breaks kept inside a block.

use std::io::{Cursor, Seek, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// 6pt in twentieths of a point
const SPACE_AFTER_TWIPS: u32 = 120;

/// Render `content` as .docx bytes
pub fn to_docx(content: &str) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    write_docx(content, &mut buf)?;
    Ok(buf.into_inner())
}

pub fn write_docx<W: Write + Seek>(content: &str, writer: W) -> Result<()> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(writer);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS.as_bytes())?;

    zip.start_file("word/document.xml", options)?;
    zip.write_all(document_xml(content)?.as_bytes())?;

    zip.finish()?;
    Ok(())
}

/// Body XML for `word/document.xml`
pub fn document_xml(content: &str) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
    writer.write_event(Event::Start(
        BytesStart::new("w:document").with_attributes([("xmlns:w", WORDML_NS)]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;
    for block in content.split("\n\n") {
        write_paragraph(&mut writer, block)?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_paragraph<W: Write>(writer: &mut Writer<W>, block: &str) -> Result<()> {
    let space_after = SPACE_AFTER_TWIPS.to_string();
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;
    writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    writer.write_event(Event::Empty(
        BytesStart::new("w:spacing").with_attributes([("w:after", space_after.as_str())]),
    ))?;
    writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;
    for (i, line) in block.split('\n').enumerate() {
        if i > 0 {
            writer.write_event(Event::Empty(BytesStart::new("w:br")))?;
        }
        writer.write_event(Event::Start(
            BytesStart::new("w:t").with_attributes([("xml:space", "preserve")]),
        ))?;
        writer.write_event(Event::Text(BytesText::new(line)))?;
        writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_document_xml_paragraph_per_block() {
        let xml = document_xml("first block\n\nsecond\nline two\n\nthird").unwrap();
        assert_eq!(xml.matches("<w:p>").count(), 3);
        assert_eq!(xml.matches("<w:br/>").count(), 1);
        assert!(xml.contains(r#"<w:spacing w:after="120"/>"#));
    }

    #[test]
    fn test_document_xml_escapes_markup() {
        let xml = document_xml("Tyres & <wheels>").unwrap();
        assert!(xml.contains("Tyres &amp; &lt;wheels&gt;"));
        assert!(!xml.contains("<wheels>"));
    }

    #[test]
    fn test_docx_package_parts() {
        let bytes = to_docx("H1: 225/45R19 Tyres\n\nBody").unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"word/document.xml".to_string()));

        let mut doc = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut doc)
            .unwrap();
        assert!(doc.contains("H1: 225/45R19 Tyres"));
    }
}
