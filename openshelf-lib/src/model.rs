//! Canonical records for catalog data.
//!
//! The search and subject endpoints return differently shaped documents for
//! the same concepts, so the API layer normalizes every response into
//! [`BookSummary`] or [`WorkDetail`] immediately after deserialization.
//! Rendering code only ever sees these two types.

use chrono::NaiveDateTime;

/// Base URL of the cover image endpoint, completed with a cover id and size.
const COVER_URL: &str = "https://covers.openlibrary.org/b/id";

/// Image used for cards when a work has no cover id.
pub const CARD_PLACEHOLDER_URL: &str = "https://via.placeholder.com/200x280?text=No+Cover";

/// Image used on the detail panel when a work has no cover id.
pub const DETAIL_PLACEHOLDER_URL: &str = "https://via.placeholder.com/300x400?text=No+Cover";

/// A single book as returned by the search or subject-listing endpoints.
///
/// Every field is optional at the source so each one carries its own
/// fallback at render time, see [`Card`][crate::card::Card]. A summary is
/// derived fresh from the latest response and lives for one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookSummary {
    /// Title of the work, when the record carries one.
    pub title: Option<String>,
    /// Author names in catalog order, possibly empty.
    pub authors: Vec<String>,
    /// Cover identifier for the cover image endpoint.
    pub cover_id: Option<i64>,
    /// Stable work identifier, the final segment of the record's key.
    pub work_id: Option<String>,
}

impl BookSummary {
    /// URL of the large cover image, or the card placeholder when the
    /// summary has no cover id.
    #[must_use]
    pub fn cover_url(&self) -> String {
        self.cover_id
            .map_or_else(|| CARD_PLACEHOLDER_URL.to_owned(), cover_image_url)
    }
}

/// A single work as returned by the work-detail endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkDetail {
    /// Title of the work, when present.
    pub title: Option<String>,
    /// Cover identifiers, first one is used for the detail panel.
    pub covers: Vec<i64>,
    /// Plain-text description, unwrapped from either response shape.
    pub description: Option<String>,
    /// Subject labels attached to the work.
    pub subjects: Vec<String>,
    /// When the record was created in the catalog.
    pub created: Option<NaiveDateTime>,
}

impl WorkDetail {
    /// URL of the first cover image, or the detail placeholder when the
    /// work has no covers.
    #[must_use]
    pub fn cover_url(&self) -> String {
        self.covers
            .first()
            .copied()
            .map_or_else(|| DETAIL_PLACEHOLDER_URL.to_owned(), cover_image_url)
    }

    /// The creation timestamp formatted as a readable date, `None` when the
    /// record carries no usable timestamp.
    #[must_use]
    pub fn created_display(&self) -> Option<String> {
        self.created.map(|dt| dt.format("%-d %B %Y").to_string())
    }
}

fn cover_image_url(id: i64) -> String {
    format!("{COVER_URL}/{id}-L.jpg")
}

/// Extracts the work identifier from a hierarchical catalog key.
///
/// Keys look like `/works/OL893415W`, the identifier is the final path
/// segment. An empty segment yields `None` rather than an empty id.
pub(crate) fn work_id_from_key(key: &str) -> Option<String> {
    key.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::{work_id_from_key, BookSummary, WorkDetail};

    fn summary() -> BookSummary {
        BookSummary {
            title: Some("Dune".to_owned()),
            authors: vec!["Frank Herbert".to_owned()],
            cover_id: Some(11_481_354),
            work_id: Some("OL893415W".to_owned()),
        }
    }

    #[test]
    fn summary_cover_url_uses_cover_id() {
        assert_eq!(
            "https://covers.openlibrary.org/b/id/11481354-L.jpg",
            summary().cover_url()
        );
    }

    #[test]
    fn summary_without_cover_falls_back_to_placeholder() {
        let summary = BookSummary {
            cover_id: None,
            ..summary()
        };
        assert_eq!(super::CARD_PLACEHOLDER_URL, summary.cover_url());
    }

    #[test]
    fn detail_cover_url_uses_first_cover() {
        let detail = WorkDetail {
            title: None,
            covers: vec![240_727, 240_728],
            description: None,
            subjects: vec![],
            created: None,
        };
        assert_eq!(
            "https://covers.openlibrary.org/b/id/240727-L.jpg",
            detail.cover_url()
        );
    }

    #[test]
    fn detail_without_covers_falls_back_to_placeholder() {
        let detail = WorkDetail {
            title: None,
            covers: vec![],
            description: None,
            subjects: vec![],
            created: None,
        };
        assert_eq!(super::DETAIL_PLACEHOLDER_URL, detail.cover_url());
    }

    #[test]
    fn created_display_formats_a_readable_date() {
        let created = chrono::NaiveDate::from_ymd_opt(2009, 12, 11)
            .unwrap()
            .and_hms_opt(1, 57, 19)
            .unwrap();
        let detail = WorkDetail {
            title: None,
            covers: vec![],
            description: None,
            subjects: vec![],
            created: Some(created),
        };

        assert_eq!(Some("11 December 2009".to_owned()), detail.created_display());
    }

    #[test]
    fn work_id_is_final_key_segment() {
        assert_eq!(
            Some("OL893415W".to_owned()),
            work_id_from_key("/works/OL893415W")
        );
    }

    #[test]
    fn work_id_of_trailing_slash_key_is_none() {
        assert_eq!(None, work_id_from_key("/works/"));
    }
}
