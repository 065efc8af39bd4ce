use atom_syndication::{Content, Entry, Feed, FixedDateTime, Link, WriteConfig};
use chrono::{DateTime, NaiveTime, Utc};
use std::time::{Duration, UNIX_EPOCH};

use super::error::FeedServiceError;
use super::identifiers::{entry_id, feed_id, place_url};
use crate::domain::imagery::ImageryDate;

pub const FEED_TITLE: &str = "Street view updates";
pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

/// 2022-10-15T00:00:00Z
const FEED_UPDATED_UNIX_SECS: u64 = 1_665_792_000;

/// Timestamp advertised as the feed's own `updated` value.
///
/// Constant so that identical location sets always render identical feeds.
pub fn feed_updated() -> FixedDateTime {
    DateTime::<Utc>::from(UNIX_EPOCH + Duration::from_secs(FEED_UPDATED_UNIX_SECS)).fixed_offset()
}

/// One location with a known imagery date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: String,
    pub title: String,
    pub link: String,
    pub content: String,
    pub updated: ImageryDate,
}

impl FeedEntry {
    pub fn new(location: &str, updated: ImageryDate) -> Self {
        Self {
            id: entry_id(location, updated),
            title: format!("Update for {}", location),
            link: place_url(location),
            content: format!("{} was updated {}", location, updated.hyphenated()),
            updated,
        }
    }

    fn to_atom(&self) -> Entry {
        let mut link = Link::default();
        link.set_href(self.link.clone());

        let mut content = Content::default();
        content.set_content_type(Some("text".to_string()));
        content.set_value(Some(self.content.clone()));

        let mut entry = Entry::default();
        entry.set_title(self.title.clone());
        entry.set_id(self.id.clone());
        entry.set_updated(
            self.updated
                .date()
                .and_time(NaiveTime::MIN)
                .and_utc()
                .fixed_offset(),
        );
        entry.set_links(vec![link]);
        entry.set_content(Some(content));
        entry
    }
}

/// Feed for a sorted set of locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub title: String,
    pub id: String,
    pub updated: FixedDateTime,
    pub entries: Vec<FeedEntry>,
}

impl FeedDocument {
    pub fn new(sorted_locations: &[String]) -> Self {
        Self {
            title: FEED_TITLE.to_string(),
            id: feed_id(sorted_locations),
            updated: feed_updated(),
            entries: Vec::new(),
        }
    }

    pub fn to_atom(&self) -> Feed {
        let mut feed = Feed::default();
        feed.set_title(self.title.clone());
        feed.set_id(self.id.clone());
        feed.set_updated(self.updated);
        feed.set_entries(
            self.entries
                .iter()
                .map(FeedEntry::to_atom)
                .collect::<Vec<_>>(),
        );
        feed
    }

    /// Render as an indented Atom document
    pub fn to_xml(&self) -> Result<String, FeedServiceError> {
        let config = WriteConfig {
            write_document_declaration: true,
            indent_size: Some(2),
        };
        let buffer = self
            .to_atom()
            .write_with_config(Vec::new(), config)
            .map_err(|e| FeedServiceError::Serialization(e.to_string()))?;

        String::from_utf8(buffer).map_err(|e| FeedServiceError::Serialization(e.to_string()))
    }
}
