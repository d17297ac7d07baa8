use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::hand::{Hand, HAND_SIZE};

/// A 52-card deck with its own seeded RNG, so a seed always reproduces the
/// same deal. Comparison never touches it.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals the next five cards, or `None` once fewer than five remain.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.remaining() < HAND_SIZE {
            return None;
        }
        let end = self.position + HAND_SIZE;
        let cards: [Card; HAND_SIZE] = self.cards[self.position..end].try_into().ok()?;
        self.position = end;
        Some(Hand::new(cards))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
