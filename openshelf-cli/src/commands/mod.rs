use crate::{interact, view};

use openshelf::{
    card::Card,
    theme::{self, FileStore},
};

use clap::Subcommand;
use eyre::eyre;
use log::{error, info, trace};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search the catalog for books matching a free-text query
    ///
    /// Prints one card per result. With the `--interact` flag a result can
    /// be selected to open its detail view in the same run.
    #[clap(arg_required_else_help = true)]
    Search {
        /// The free-text query, must not be empty
        query: String,
    },

    /// List recommended books for a subject
    ///
    /// When no subject is given one is picked at random from a fixed list
    /// of topics.
    Browse {
        /// The subject to list, e.g. `fantasy`
        subject: Option<String>,
    },

    /// Show the detail view of a single work
    #[clap(arg_required_else_help = true)]
    Show {
        /// The work id, e.g. `OL893415W`
        id: String,
    },

    /// Read or flip the presentation theme
    Theme {
        #[clap(subcommand)]
        command: ThemeCommands,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between dark and light mode and persist the choice
    Toggle,
}

impl Commands {
    pub fn execute(
        self,
        store: &FileStore,
        interact: bool,
    ) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Commands::Search { query } => search(&query, store, interact),
            Commands::Browse { subject } => Ok(browse(subject)),
            Commands::Show { id } => Ok(show(&id)),
            Commands::Theme { command } => Ok(match command {
                ThemeCommands::Show => theme::load_theme(store).to_string(),
                ThemeCommands::Toggle => {
                    let theme = theme::toggle_theme(store);
                    format!("Switched to {theme}")
                }
            }),
        }
    }
}

fn search(
    query: &str,
    store: &FileStore,
    interact: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(eyre!("The search query must not be empty").into());
    }

    info!("Loading search results..");
    let view = match openshelf::search_books(query) {
        Ok(books) if books.is_empty() => view::SearchView::Empty,
        Ok(books) => view::SearchView::Results(books.into_iter().map(Card::from).collect()),
        Err(err) => {
            error!("Search failed: {err}");
            view::SearchView::Failed
        }
    };
    info!("Done");

    let mut output = view::render_search(&view);

    if interact {
        if let view::SearchView::Results(cards) = &view {
            let card = interact::user_select_card(cards, theme::load_theme(store))?;
            let detail = match &card.work_id {
                Some(id) => show(id),
                None => "The selected result has no detail record".to_owned(),
            };
            output.push_str("\n\n");
            output.push_str(&detail);
        }
    }

    Ok(output)
}

fn browse(subject: Option<String>) -> String {
    let subject = subject.unwrap_or_else(|| {
        let topic = openshelf::random_subject().to_owned();
        trace!("No subject given, picked '{topic}' at random");
        topic
    });

    info!("Loading recommendations..");
    let cards = match openshelf::works_by_subject(&subject) {
        Ok(works) => works.into_iter().map(Card::from).collect::<Vec<_>>(),
        // recommendations fail quietly, the log line is the only trace
        Err(err) => {
            error!("Error loading recommendations: {err}");
            vec![]
        }
    };
    info!("Done");

    view::render_recommendations(&subject, &cards)
}

fn show(id: &str) -> String {
    info!("Loading the book details..");
    let view = match openshelf::work_detail(id) {
        Ok(detail) => view::DetailView::Loaded(Box::new(detail)),
        Err(err) => {
            error!("Could not load the work detail: {err}");
            view::DetailView::Failed
        }
    };
    info!("Done");

    view::render_detail(&view)
}
