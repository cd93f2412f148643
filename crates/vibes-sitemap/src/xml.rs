//! Sitemap protocol XML serialization.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::entry::SitemapEntry;
use crate::error::SitemapError;

/// Sitemap protocol namespace.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serialize entries into a `<urlset>` document.
///
/// # Errors
///
/// Returns [`SitemapError::Xml`] if the writer fails.
pub fn to_xml(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(SitemapError::xml)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer
        .write_event(Event::Start(urlset))
        .map_err(SitemapError::xml)?;

    for entry in entries {
        write_url(&mut writer, entry)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(SitemapError::xml)?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner()).map_err(SitemapError::xml)?;
    xml.push('\n');
    Ok(xml)
}

fn write_url(writer: &mut Writer<Cursor<Vec<u8>>>, entry: &SitemapEntry) -> Result<(), SitemapError> {
    writer
        .write_event(Event::Start(BytesStart::new("url")))
        .map_err(SitemapError::xml)?;

    write_element(writer, "loc", &entry.location)?;
    if let Some(last_modified) = &entry.last_modified {
        write_element(writer, "lastmod", last_modified)?;
    }
    write_element(writer, "changefreq", entry.change_frequency.as_str())?;
    write_element(writer, "priority", &format!("{:.1}", entry.priority))?;

    writer
        .write_event(Event::End(BytesEnd::new("url")))
        .map_err(SitemapError::xml)
}

fn write_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(SitemapError::xml)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(SitemapError::xml)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(SitemapError::xml)
}
