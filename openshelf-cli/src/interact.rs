use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme as PromptTheme};
use eyre::{eyre, Context, Result};
use openshelf::{card::Card, theme::Theme};

/// Lets the user pick one search result to open its detail view.
pub fn user_select_card(cards: &[Card], theme: Theme) -> Result<&Card> {
    let items = cards
        .iter()
        .map(|card| format!("{} ({})", card.title, card.byline))
        .collect::<Vec<_>>();

    let index = user_select("Open a result", &items, theme)?;
    cards
        .get(index)
        .ok_or_else(|| eyre!("Internal error: user selection should be a valid index"))
}

fn user_select<S: ToString>(prompt: &str, items: &[S], theme: Theme) -> Result<usize> {
    // Light terminals get the plain prompt, dark ones the colorful one.
    let prompt_theme: Box<dyn PromptTheme> = match theme {
        Theme::Dark => Box::new(ColorfulTheme::default()),
        Theme::Light => Box::new(SimpleTheme),
    };

    let selection = dialoguer::Select::with_theme(prompt_theme.as_ref())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))?;

    if let Some(index) = selection {
        Ok(index)
    } else {
        Err(eyre!("No selection made - cancelling operation"))
    }
}
