//! Pure rendering of a [`BookSummary`] into a display card.
//!
//! Every field has a deterministic fallback so building a card can never
//! fail, no matter how sparse the source record is. Cards carry no network
//! or storage access, the search and recommendation pipelines both render
//! through this type.

use crate::model::BookSummary;

/// Title text used when a record has no title.
pub const TITLE_FALLBACK: &str = "Title unavailable";

/// Author text used when a record has no author names.
pub const AUTHOR_FALLBACK: &str = "Author unknown";

/// A single clickable unit of the result listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// URL of the cover image, always present (placeholder when unknown).
    pub cover_url: String,
    /// Title text, always present.
    pub title: String,
    /// Author names joined by `", "`, always present.
    pub byline: String,
    /// Work id to navigate to for details. `None` renders no target
    /// instead of a dangling one.
    pub work_id: Option<String>,
}

impl From<BookSummary> for Card {
    fn from(summary: BookSummary) -> Self {
        let cover_url = summary.cover_url();
        let BookSummary {
            title,
            authors,
            work_id,
            ..
        } = summary;

        let byline = if authors.is_empty() {
            AUTHOR_FALLBACK.to_owned()
        } else {
            authors.join(", ")
        };

        Self {
            cover_url,
            title: title.unwrap_or_else(|| TITLE_FALLBACK.to_owned()),
            byline,
            work_id,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  by {}", self.byline)?;
        write!(f, "  cover: {}", self.cover_url)?;
        if let Some(id) = &self.work_id {
            write!(f, "\n  work: {id}")?;
        }
        Ok(())
    }
}
