//! Pure rendering of pipeline outcomes.
//!
//! Each pipeline collapses its result into an explicit view value and a
//! render function turns that value into the complete output text for the
//! run. Rendering never touches the network or the terminal, so every
//! pipeline's output can be tested in isolation, and a render is always a
//! full replacement of whatever a previous run printed.

use openshelf::{
    card::{Card, TITLE_FALLBACK},
    model::WorkDetail,
};

pub const RESULTS_HEADING: &str = "Search results";
pub const NO_RESULTS: &str = "No results found.";
pub const SEARCH_FAILED: &str = "An error occurred while searching.";
pub const DETAIL_FAILED: &str = "Failed to load the book details.";
pub const NO_DESCRIPTION: &str = "No description.";
pub const SUBJECTS_FALLBACK: &str = "Unavailable";
pub const CREATED_FALLBACK: &str = "Unknown";

/// Terminal state of one search run.
pub enum SearchView {
    /// At least one result, already shaped into cards.
    Results(Vec<Card>),
    /// The catalog answered with zero documents.
    Empty,
    /// The request or its deserialization failed.
    Failed,
}

pub fn render_search(view: &SearchView) -> String {
    let body = match view {
        SearchView::Results(cards) => join_cards(cards),
        SearchView::Empty => NO_RESULTS.to_owned(),
        SearchView::Failed => SEARCH_FAILED.to_owned(),
    };

    format!("{RESULTS_HEADING}\n\n{body}")
}

/// Renders the recommendation listing. A failed or empty listing renders
/// nothing at all, recommendations have no user-visible error state.
pub fn render_recommendations(subject: &str, cards: &[Card]) -> String {
    if cards.is_empty() {
        return String::new();
    }
    format!("Recommended reading: {subject}\n\n{}", join_cards(cards))
}

/// Terminal state of one detail run.
pub enum DetailView {
    Loaded(Box<WorkDetail>),
    Failed,
}

pub fn render_detail(view: &DetailView) -> String {
    let detail = match view {
        DetailView::Failed => return DETAIL_FAILED.to_owned(),
        DetailView::Loaded(detail) => detail,
    };

    let title = detail.title.as_deref().unwrap_or(TITLE_FALLBACK);
    let description = detail.description.as_deref().unwrap_or(NO_DESCRIPTION);
    let subjects = if detail.subjects.is_empty() {
        SUBJECTS_FALLBACK.to_owned()
    } else {
        detail.subjects.join(", ")
    };
    let created = detail
        .created_display()
        .unwrap_or_else(|| CREATED_FALLBACK.to_owned());

    format!(
        "{title}\n  cover: {}\n\nDescription: {description}\nSubjects: {subjects}\nCreated: {created}",
        detail.cover_url()
    )
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use openshelf::model::{BookSummary, DETAIL_PLACEHOLDER_URL};

    use super::*;

    fn dune_cards() -> Vec<Card> {
        ["Dune", "Dune Messiah"]
            .into_iter()
            .map(|title| {
                Card::from(BookSummary {
                    title: Some(title.to_owned()),
                    authors: vec!["Frank Herbert".to_owned()],
                    cover_id: Some(11_481_354),
                    work_id: Some("OL893415W".to_owned()),
                })
            })
            .collect()
    }

    fn card_count(output: &str) -> usize {
        output.matches("\n  by ").count()
    }

    #[test]
    fn two_results_render_exactly_two_cards_under_the_heading() {
        let output = render_search(&SearchView::Results(dune_cards()));

        assert!(output.starts_with(RESULTS_HEADING));
        assert_eq!(2, card_count(&output));
    }

    #[test]
    fn a_render_is_a_full_replacement_of_the_previous_one() {
        // Rendering is stateless: a later render holds nothing of an
        // earlier one, which is how stale cards get cleared.
        let first = render_search(&SearchView::Results(dune_cards()));
        let second = render_search(&SearchView::Empty);

        assert_eq!(2, card_count(&first));
        assert_eq!(0, card_count(&second));
        assert!(!second.contains("Dune"));
    }

    #[test]
    fn zero_results_render_exactly_one_placeholder_and_no_cards() {
        let output = render_search(&SearchView::Empty);

        assert_eq!(1, output.matches(NO_RESULTS).count());
        assert_eq!(0, card_count(&output));
    }

    #[test]
    fn a_failed_search_renders_exactly_one_error_message() {
        let output = render_search(&SearchView::Failed);

        assert_eq!(1, output.matches(SEARCH_FAILED).count());
        assert_eq!(0, card_count(&output));
        assert!(!output.contains(NO_RESULTS));
    }

    #[test]
    fn empty_recommendations_render_nothing() {
        assert_eq!("", render_recommendations("fantasy", &[]));
    }

    #[test]
    fn recommendations_render_the_subject_and_its_cards() {
        let output = render_recommendations("fantasy", &dune_cards());

        assert!(output.starts_with("Recommended reading: fantasy"));
        assert_eq!(2, card_count(&output));
    }

    #[test]
    fn a_failed_detail_renders_exactly_the_error_message() {
        assert_eq!(DETAIL_FAILED, render_detail(&DetailView::Failed));
    }

    #[test]
    fn bare_detail_renders_every_fallback() {
        let detail = WorkDetail {
            title: None,
            covers: vec![],
            description: None,
            subjects: vec![],
            created: None,
        };
        let output = render_detail(&DetailView::Loaded(Box::new(detail)));

        assert!(output.starts_with(TITLE_FALLBACK));
        assert!(output.contains(DETAIL_PLACEHOLDER_URL));
        assert!(output.contains(&format!("Description: {NO_DESCRIPTION}")));
        assert!(output.contains(&format!("Subjects: {SUBJECTS_FALLBACK}")));
        assert!(output.ends_with(&format!("Created: {CREATED_FALLBACK}")));
    }

    #[test]
    fn loaded_detail_renders_its_fields() {
        let detail = WorkDetail {
            title: Some("Dune".to_owned()),
            covers: vec![11_481_354],
            description: Some("A tale.".to_owned()),
            subjects: vec!["Science fiction".to_owned(), "Deserts".to_owned()],
            created: None,
        };
        let output = render_detail(&DetailView::Loaded(Box::new(detail)));

        assert!(output.starts_with("Dune\n"));
        assert!(output.contains("Description: A tale."));
        assert!(output.contains("Subjects: Science fiction, Deserts"));
    }
}
