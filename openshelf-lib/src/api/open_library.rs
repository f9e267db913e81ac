//! Open Library endpoint bindings.
//!
//! Each endpoint has its own response model because the catalog uses
//! different field names for the same concepts (`author_name` strings on
//! search documents, `{name}` objects on subject works). All of them
//! normalize into the canonical record types before leaving this module.

use chrono::NaiveDateTime;
use log::{info, trace};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::{
    model::{self, BookSummary, WorkDetail},
    Error, ErrorKind,
};

use super::Client;

const SEARCH_URL: &str = "https://openlibrary.org/search.json";
const SUBJECT_URL: &str = "https://openlibrary.org/subjects";
const WORK_URL: &str = "https://openlibrary.org/works";

/// Fixed result-count limit for free-text searches.
pub(crate) const SEARCH_LIMIT: usize = 20;

/// Fixed result-count limit for subject listings.
pub(crate) const SUBJECT_LIMIT: usize = 12;

// Characters that must not pass through unencoded inside a query value.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Timestamp format of the catalog's `created.value` field.
const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn search_books<C: Client>(query: &str) -> Result<Vec<BookSummary>, Error> {
    info!("Searching the catalog for '{query}'");
    let encoded = utf8_percent_encode(query, QUERY_ENCODE_SET);
    let url = format!("{SEARCH_URL}?q={encoded}&limit={SEARCH_LIMIT}");

    let client = C::default();
    let SearchModel { docs } = client.get_json(&url)?;

    trace!("Search returned {} documents", docs.len());
    Ok(docs.into_iter().map(Doc::into_summary).collect())
}

pub(crate) fn works_by_subject<C: Client>(subject: &str) -> Result<Vec<BookSummary>, Error> {
    info!("Listing catalog works for the subject '{subject}'");
    let url = format!("{SUBJECT_URL}/{subject}.json?limit={SUBJECT_LIMIT}");

    let client = C::default();
    let SubjectModel { works } = client.get_json(&url)?;

    trace!("Subject listing returned {} works", works.len());
    Ok(works.into_iter().map(SubjectWork::into_summary).collect())
}

pub(crate) fn get_work<C: Client>(id: &str) -> Result<WorkDetail, Error> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::new(ErrorKind::NoValue, "No work id provided"));
    }

    info!("Fetching the catalog record for work '{id}'");
    let url = format!("{WORK_URL}/{id}.json");

    let client = C::default();
    let work: WorkModel = client.get_json(&url)?;

    trace!("Request was successful");
    Ok(work.into_detail())
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchModel {
    #[serde(default)]
    docs: Vec<Doc>,
}

/// A document from the search endpoint.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Doc {
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
    cover_i: Option<i64>,
    key: Option<String>,
}

impl Doc {
    fn into_summary(self) -> BookSummary {
        BookSummary {
            title: self.title,
            authors: self.author_name,
            cover_id: self.cover_i,
            work_id: self.key.as_deref().and_then(model::work_id_from_key),
        }
    }
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SubjectModel {
    #[serde(default)]
    works: Vec<SubjectWork>,
}

/// A work from the subject-listing endpoint. Authors come as objects here
/// rather than the plain strings of the search endpoint.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SubjectWork {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<SubjectAuthor>,
    cover_id: Option<i64>,
    key: Option<String>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SubjectAuthor {
    name: String,
}

impl SubjectWork {
    fn into_summary(self) -> BookSummary {
        BookSummary {
            title: self.title,
            authors: self.authors.into_iter().map(|a| a.name).collect(),
            cover_id: self.cover_id,
            work_id: self.key.as_deref().and_then(model::work_id_from_key),
        }
    }
}

/// A record from the work-detail endpoint.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct WorkModel {
    title: Option<String>,
    #[serde(default)]
    covers: Vec<i64>,
    description: Option<Description>,
    #[serde(default)]
    subjects: Vec<String>,
    created: Option<Wrapped>,
}

/// The catalog serves descriptions either as a plain string or wrapped in a
/// `{type, value}` object. Both unwrap to the same text.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(untagged)]
enum Description {
    Text(String),
    Typed { value: String },
}

impl Description {
    fn into_text(self) -> String {
        match self {
            Self::Text(value) | Self::Typed { value } => value,
        }
    }
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Wrapped {
    value: String,
}

impl WorkModel {
    fn into_detail(self) -> WorkDetail {
        WorkDetail {
            title: self.title,
            covers: self.covers,
            description: self.description.map(Description::into_text),
            subjects: self.subjects,
            // An unparseable timestamp degrades to the "unknown" fallback
            // downstream rather than failing the whole detail view.
            created: self
                .created
                .and_then(|w| NaiveDateTime::parse_from_str(&w.value, CREATED_FORMAT).ok()),
        }
    }
}
