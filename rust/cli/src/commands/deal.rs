//! Deal command: two random hands from a seeded deck, compared.

use crate::error::CliError;
use crate::formatters::format_showdown;
use showdown_engine::compare::Showdown;
use showdown_engine::deck::Deck;
use std::io::Write;

/// Handle the deal command.
///
/// Shuffles a fresh deck with `seed` (random when `None`), deals two hands
/// and prints them with the comparison result. The same seed always deals
/// the same hands.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let (Some(first), Some(second)) = (deck.deal_hand(), deck.deal_hand()) else {
        return Err(CliError::InvalidInput(
            "deck ran out of cards while dealing".into(),
        ));
    };

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "{}", format_showdown(&Showdown::evaluate(first, second)))?;
    Ok(())
}
