//! The table search.

use super::completion::complete_set;
use super::SetTriple;
use crate::cards::Table;

/// Find the first valid set on the table, or `None`.
///
/// Examines every position pair `(i, j)` with `i < j` in ascending
/// lexicographic order, computes the pair's unique completion, and checks
/// whether that card is also on the table. The enumeration order is a
/// deterministic tie-break: when several sets exist, the earliest pair
/// wins, and the result is `[card_i, card_j, completion]` in that order.
///
/// An empty result is the expected no-set outcome of a round, not an
/// error.
#[must_use]
pub fn find_set(table: &Table) -> Option<SetTriple> {
    let cards = table.cards();

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            // Distinct table positions always hold distinct cards, so the
            // completion is defined; skip defensively if it is not.
            let Ok(third) = complete_set(cards[i], cards[j]) else {
                continue;
            };
            if table.contains(third) {
                return Some(SetTriple([cards[i], cards[j], third]));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::rules::is_valid_set;

    fn table_of(cards: &[Card]) -> Table {
        let mut table = Table::new();
        for &card in cards {
            table.place(card);
        }
        table
    }

    #[test]
    fn test_finds_set_among_first_three() {
        let table = table_of(&[
            Card::new([0, 0, 0, 0]),
            Card::new([1, 1, 1, 1]),
            Card::new([2, 2, 2, 2]),
            Card::new([0, 1, 2, 0]),
        ]);

        let found = find_set(&table).unwrap();
        assert_eq!(
            found.cards(),
            [
                Card::new([0, 0, 0, 0]),
                Card::new([1, 1, 1, 1]),
                Card::new([2, 2, 2, 2]),
            ]
        );
    }

    #[test]
    fn test_no_set_on_small_table() {
        // Any two cards alone cannot contain their completion.
        let table = table_of(&[Card::new([0, 0, 0, 0]), Card::new([1, 1, 1, 1])]);
        assert!(find_set(&table).is_none());
    }

    #[test]
    fn test_no_set_returns_none() {
        // Four cards whose pairwise completions all lie off the table.
        let table = table_of(&[
            Card::new([0, 0, 0, 0]),
            Card::new([0, 0, 0, 1]),
            Card::new([0, 0, 1, 0]),
            Card::new([0, 1, 0, 0]),
        ]);
        assert!(find_set(&table).is_none());
    }

    #[test]
    fn test_earliest_pair_wins() {
        // Two sets coexist; the pair (0, 1) enumerates first.
        let table = table_of(&[
            Card::new([0, 0, 0, 0]),
            Card::new([1, 1, 1, 1]),
            Card::new([0, 1, 2, 0]),
            Card::new([1, 2, 0, 1]),
            Card::new([2, 0, 1, 2]),
            Card::new([2, 2, 2, 2]),
        ]);

        let found = find_set(&table).unwrap();
        assert_eq!(found.cards()[0], Card::new([0, 0, 0, 0]));
        assert_eq!(found.cards()[1], Card::new([1, 1, 1, 1]));
        assert_eq!(found.cards()[2], Card::new([2, 2, 2, 2]));
    }

    #[test]
    fn test_found_set_is_valid() {
        let table = table_of(&[
            Card::new([2, 1, 0, 2]),
            Card::new([0, 1, 1, 0]),
            Card::new([1, 1, 2, 1]),
        ]);

        let found = find_set(&table).unwrap();
        let [a, b, c] = found.cards();
        assert!(is_valid_set(a, b, c));
    }

    #[test]
    fn test_empty_table() {
        assert!(find_set(&Table::new()).is_none());
    }
}
