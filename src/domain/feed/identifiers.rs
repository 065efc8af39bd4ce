use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::domain::imagery::ImageryDate;

const FEED_ID_PREFIX: &str = "urn:street-view-updates:feed:";
const ITEM_ID_PREFIX: &str = "urn:street-view-updates:item:";
const PLACE_URL_PREFIX: &str = "https://www.google.com/maps/place/";

/// URL-safe, unpadded base64 of the raw string bytes
pub fn encode_location(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}

/// Feed identifier for an already sorted location set
pub fn feed_id(sorted_locations: &[String]) -> String {
    format!("{}{}", FEED_ID_PREFIX, encode_location(&sorted_locations.join(" ")))
}

pub fn entry_id(location: &str, updated: ImageryDate) -> String {
    format!(
        "{}{}:{}",
        ITEM_ID_PREFIX,
        encode_location(location),
        updated.compact()
    )
}

/// Google Maps place page for a location
pub fn place_url(location: &str) -> String {
    format!("{}{}", PLACE_URL_PREFIX, query_escape(location))
}

/// Escape a string for use in a URL query, spaces become `+`
pub fn query_escape(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}
