#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
pub mod card;
mod error;
pub mod model;
pub mod theme;

pub use error::{Error, ErrorKind};

use log::trace;
use model::{BookSummary, WorkDetail};
use rand::seq::SliceRandom;

type Client = reqwest::blocking::Client;

/// Topics the recommendation listing draws from.
pub const RECOMMENDED_SUBJECTS: [&str; 5] =
    ["fiction", "science", "history", "fantasy", "mystery"];

/// Picks one recommendation topic uniformly at random.
#[must_use]
pub fn random_subject() -> &'static str {
    RECOMMENDED_SUBJECTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(RECOMMENDED_SUBJECTS[0])
}

/// Searches the catalog for works matching a free-text `query`.
///
/// The query is percent-encoded and the result count is capped at a fixed
/// limit. An empty result list is an informational outcome, not an error.
/// Callers are expected to pass a non-empty trimmed query, a blank query
/// still issues a request but cannot match anything useful.
///
/// # Errors
///
/// An `Err` is returned when the request fails or when the response cannot
/// be deserialized.
#[inline]
pub fn search_books(query: &str) -> Result<Vec<BookSummary>, Error> {
    trace!("Search books with the query '{query}'");
    api::open_library::search_books::<Client>(query)
}

/// Lists catalog works filed under `subject`.
///
/// Used for recommendations, the result count is capped at a fixed limit
/// smaller than the search one.
///
/// # Errors
///
/// An `Err` is returned when the request fails or when the response cannot
/// be deserialized.
#[inline]
pub fn works_by_subject(subject: &str) -> Result<Vec<BookSummary>, Error> {
    trace!("List works for the subject '{subject}'");
    api::open_library::works_by_subject::<Client>(subject)
}

/// Fetches the detail record of a single work by its `id`.
///
/// # Errors
///
/// An `Err` of [`ErrorKind::NoValue`] is returned for a blank `id` without
/// touching the network. An `Err` is returned when the request fails or
/// when the response cannot be deserialized.
#[inline]
pub fn work_detail(id: &str) -> Result<WorkDetail, Error> {
    trace!("Fetch the work detail of '{id}'");
    api::open_library::get_work::<Client>(id)
}
