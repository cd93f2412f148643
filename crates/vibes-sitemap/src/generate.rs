//! Sitemap entry generation.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use vibes_content::{ContentIndex, locale};

use crate::entry::{ChangeFrequency, RouteCatalog, SitemapEntry};
use crate::url::BaseUrl;

const HOME_PRIORITY: f32 = 1.0;
const FEATURE_PRIORITY: f32 = 0.9;
const DETAIL_PRIORITY: f32 = 0.8;
const CONTENT_PRIORITY: f32 = 0.7;

/// Entries in insertion order, unique by location.
#[derive(Default)]
struct EntryList {
    entries: Vec<SitemapEntry>,
    positions: HashMap<String, usize>,
}

impl EntryList {
    fn push(&mut self, entry: SitemapEntry) {
        if let Some(&position) = self.positions.get(&entry.location) {
            let existing = &mut self.entries[position];
            tracing::debug!(location = %entry.location, "Duplicate sitemap location, keeping first entry");
            if existing.last_modified.is_none() {
                existing.last_modified = entry.last_modified;
            }
            return;
        }
        self.positions
            .insert(entry.location.clone(), self.entries.len());
        self.entries.push(entry);
    }
}

/// Split a configured path into non-empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Build the sitemap entries for every supported language.
///
/// Per language: the home page, each feature route and each detail page; then
/// every content page in the index. Locations are unique: when a content page
/// has the same URL as a route entry, the route entry is kept and inherits the
/// page's last-modified date.
#[must_use]
pub fn generate(
    index: &ContentIndex,
    catalog: &RouteCatalog,
    base_url: &BaseUrl,
) -> Vec<SitemapEntry> {
    let mut list = EntryList::default();

    for language in locale::supported_languages() {
        let code = language.code();

        list.push(SitemapEntry {
            location: base_url.join([code]),
            change_frequency: ChangeFrequency::Daily,
            priority: HOME_PRIORITY,
            last_modified: None,
        });

        for route in &catalog.feature_routes {
            list.push(SitemapEntry {
                location: base_url.join(std::iter::once(code).chain(segments(&route.path))),
                change_frequency: route.change_frequency,
                priority: FEATURE_PRIORITY,
                last_modified: None,
            });
        }

        for id in &catalog.detail_ids {
            let location = base_url.join(
                std::iter::once(code)
                    .chain(segments(&catalog.detail_prefix))
                    .chain(std::iter::once(id.as_str())),
            );
            list.push(SitemapEntry {
                location,
                change_frequency: ChangeFrequency::Monthly,
                priority: DETAIL_PRIORITY,
                last_modified: None,
            });
        }
    }

    for page in index.list_all_pages() {
        if let Some(date) = &page.last_modified
            && !is_w3c_datetime(date)
        {
            tracing::debug!(url = %page.url, last_modified = %date, "lastModified is not a W3C date");
        }
        list.push(SitemapEntry {
            location: base_url.join_path(&page.url),
            change_frequency: ChangeFrequency::Weekly,
            priority: CONTENT_PRIORITY,
            last_modified: page.last_modified,
        });
    }

    tracing::debug!(entries = list.entries.len(), "Generated sitemap");
    list.entries
}

/// Check for a W3C datetime: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or a full
/// RFC 3339 timestamp.
pub(crate) fn is_w3c_datetime(value: &str) -> bool {
    let is_year = |s: &str| s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit());

    match value.len() {
        4 => is_year(value),
        7 => NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").is_ok(),
        10 => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        _ => DateTime::parse_from_rfc3339(value).is_ok(),
    }
}
