use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::card::Card;

pub const DEFAULT_COLUMNS: usize = 4;

/// Result of a pair check, reported so the front end can show feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Matched,
    NoMatch,
}

/// The 0/1/2 currently-open cards, tracked by slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Empty,
    One(usize),
    Two(usize, usize),
}

/// The game board: a fixed grid of card slots plus the selection state
/// machine. Matched pairs leave their slot empty so the remaining cards
/// never move.
///
/// Every operation degrades to a silent no-op under an invalid
/// precondition; nothing here returns an error.
#[derive(Debug, Clone)]
pub struct Board {
    slots: Vec<Option<Card>>,
    selection: Selection,
    attempts: u32,
    pairs_found: u32,
    total_pairs: u32,
    columns: usize,
    won: bool,
}

impl Board {
    /// Build a shuffled board with two cards per image.
    ///
    /// Card ids are `"1".."n"` for one copy of each pair and the base index
    /// plus 90 (`"91".."9n"`) for the partner copy. The matching rule in
    /// [`Board::check_pair`] depends on exactly this assignment.
    pub fn new(images: &[String], columns: usize) -> Self {
        Self::with_rng(images, columns, &mut rand::thread_rng())
    }

    /// Deterministic variant for tests and the headless simulator.
    pub fn seeded(images: &[String], columns: usize, seed: u64) -> Self {
        Self::with_rng(images, columns, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(images: &[String], columns: usize, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(images.len() * 2);
        for (idx, image) in images.iter().enumerate() {
            let base = idx + 1;
            cards.push(Card::new(base.to_string(), image.clone()));
            cards.push(Card::new((base + 90).to_string(), image.clone()));
        }
        cards.shuffle(rng);

        Self {
            slots: cards.into_iter().map(Some).collect(),
            selection: Selection::Empty,
            attempts: 0,
            pairs_found: 0,
            total_pairs: images.len() as u32,
            columns: columns.max(1),
            won: false,
        }
    }

    /// Flip the card in `slot` face-up and add it to the selection.
    ///
    /// No-op when the game is won, two cards are already open, the slot is
    /// empty (its pair was matched away), or the slot is already the open
    /// card.
    pub fn flip(&mut self, slot: usize) {
        if self.won {
            return;
        }

        let first = match self.selection {
            Selection::Two(..) => return,
            Selection::One(first) if first == slot => return,
            Selection::One(first) => Some(first),
            Selection::Empty => None,
        };

        let card = match self.slots.get_mut(slot) {
            Some(Some(card)) => card,
            _ => return,
        };
        card.flip();
        log::debug!("Flipped card {} in slot {}", card.id(), slot);

        self.selection = match first {
            None => Selection::One(slot),
            Some(first) => {
                self.attempts += 1;
                Selection::Two(first, slot)
            }
        };
    }

    /// Compare the two open cards. No-op (returns `None`) unless exactly
    /// two cards are open.
    ///
    /// A match removes both cards from the board; a miss turns them
    /// face-down again. Either way the selection clears.
    pub fn check_pair(&mut self) -> Option<CheckOutcome> {
        let (a, b) = match self.selection {
            Selection::Two(a, b) => (a, b),
            _ => return None,
        };

        let matched = match (&self.slots[a], &self.slots[b]) {
            (Some(first), Some(second)) => ids_match(first.id(), second.id()),
            _ => false,
        };

        if matched {
            self.slots[a] = None;
            self.slots[b] = None;
            self.pairs_found += 1;
            log::debug!("Pair {} of {} found", self.pairs_found, self.total_pairs);
        } else {
            for slot in [a, b] {
                if let Some(card) = self.slots[slot].as_mut() {
                    card.reset();
                }
            }
        }

        self.selection = Selection::Empty;

        if self.pairs_found == self.total_pairs {
            self.won = true;
            log::info!("All {} pairs found in {} attempts", self.total_pairs, self.attempts);
        }

        Some(if matched {
            CheckOutcome::Matched
        } else {
            CheckOutcome::NoMatch
        })
    }

    /// Row-major card slots; `None` marks the gap left by a matched pair.
    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn open_count(&self) -> usize {
        match self.selection {
            Selection::Empty => 0,
            Selection::One(_) => 1,
            Selection::Two(..) => 2,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn pairs_found(&self) -> u32 {
        self.pairs_found
    }

    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    pub fn is_won(&self) -> bool {
        self.won
    }
}

/// The matching rule, kept exactly as the game defines it: the ids match
/// when the first character of one equals the last character of the other.
/// With ids assigned as base / base+90 this pairs "3" with "93" and never
/// crosses pairs (for up to eight pairs). It is an id rule, not an image
/// comparison, and must stay that way.
fn ids_match(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    match (a.first(), a.last(), b.first(), b.last()) {
        (Some(a_first), Some(a_last), Some(b_first), Some(b_last)) => {
            a_first == b_last || a_last == b_first
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_ids_match() {
        assert!(ids_match("1", "91"));
        assert!(ids_match("91", "1"));
        assert!(ids_match("3", "93"));
        assert!(ids_match("6", "96"));
    }

    #[test]
    fn unrelated_ids_do_not_match() {
        assert!(!ids_match("1", "95"));
        assert!(!ids_match("95", "1"));
        assert!(!ids_match("2", "3"));
        assert!(!ids_match("92", "93"));
        assert!(!ids_match("", "1"));
    }

    #[test]
    fn seeded_boards_are_reproducible() {
        let images: Vec<String> = (0..6).map(|i| format!("img{i}.png")).collect();
        let a = Board::seeded(&images, DEFAULT_COLUMNS, 7);
        let b = Board::seeded(&images, DEFAULT_COLUMNS, 7);
        let ids = |board: &Board| -> Vec<String> {
            board
                .slots()
                .iter()
                .filter_map(|s| s.as_ref().map(|c| c.id().to_string()))
                .collect()
        };
        assert_eq!(ids(&a), ids(&b));
    }
}
