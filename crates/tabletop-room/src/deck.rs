//! Deck construction and shuffling.

use rand::Rng;
use tabletop_protocol::{CardToken, SPECIAL_PREFIX};

/// Number of tokens in the main deck (`"01"`..`"54"`).
pub const MAIN_DECK_SIZE: usize = 54;

/// Number of tokens in the special deck (`"glads/01"`..`"glads/10"`).
pub const SPECIAL_DECK_SIZE: usize = 10;

/// Shuffles `items` in place with a backward Fisher–Yates pass.
///
/// For `i` from the last index down to 1, swaps `items[i]` with a
/// uniformly chosen `items[j]`, `j <= i`. Every ordering is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Builds the 54-card main deck in random order.
pub fn new_main_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<CardToken> {
    let mut deck: Vec<CardToken> = (1..=MAIN_DECK_SIZE)
        .map(|i| CardToken(format!("{i:02}")))
        .collect();
    shuffle(&mut deck, rng);
    deck
}

/// Builds the 10-card special deck in random order.
pub fn new_special_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<CardToken> {
    let mut deck: Vec<CardToken> = (1..=SPECIAL_DECK_SIZE)
        .map(|i| CardToken(format!("{SPECIAL_PREFIX}{i:02}")))
        .collect();
    shuffle(&mut deck, rng);
    deck
}
