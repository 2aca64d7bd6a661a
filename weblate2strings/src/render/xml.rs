//! Built-in Android-style `strings.xml` rendering, for embedders that do
//! not want an external template governing the output markup.

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use super::Render;
use crate::{error::Error, types::TranslationSet};

/// Renders a `<resources>` document with one `<string name="...">` element
/// per key. Text content is XML-escaped.
#[derive(Debug, Default)]
pub struct XmlRenderer;

impl Render for XmlRenderer {
    fn render(&self, strings: &TranslationSet) -> Result<Vec<u8>, Error> {
        let mut buffer = Vec::new();
        let mut xml_writer = Writer::new(&mut buffer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        for (name, value) in strings {
            let mut element = BytesStart::new("string");
            element.push_attribute(("name", name.as_str()));
            xml_writer.write_event(Event::Start(element))?;
            xml_writer.write_event(Event::Text(BytesText::new(value)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
            xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(buffer)
    }
}
