//! Clue mask to fact encoding
//!
//! A gray letter is only globally absent when no other copy of it in the same
//! guess was colored. Otherwise the gray only rules out that one position,
//! since the colored copy proves the letter is in the secret.

use super::fact::{Fact, FactGroup};
use crate::core::{ClueMask, CluePosition, WORD_LENGTH, Word};

/// Encode the feedback for `guess` at `attempt` as a fact group
///
/// # Examples
/// ```
/// use wordle_asp::core::{ClueMask, Word};
/// use wordle_asp::encoding::{encode, Fact};
///
/// let guess = Word::new("sleep").unwrap();
/// let secret = Word::new("spelt").unwrap();
/// let mask = ClueMask::score(&guess, &secret);
/// let group = encode(&guess, &mask, 1);
///
/// // The second E is gray, but E is green at position 2, so only
/// // position 3 is ruled out.
/// assert!(group.facts().contains(&Fact::Excluded { letter: b'e', position: 3 }));
/// assert!(!group.facts().contains(&Fact::Absent { letter: b'e' }));
/// ```
#[must_use]
pub fn encode(guess: &Word, mask: &ClueMask, attempt: usize) -> FactGroup {
    let mut facts: Vec<Fact> = Vec::with_capacity(WORD_LENGTH + 1);

    for (position, &state) in mask.positions().iter().enumerate() {
        let letter = guess.char_at(position);
        let fact = match state {
            CluePosition::Green => Fact::Green { letter, position },
            CluePosition::Yellow => Fact::Yellow {
                letter,
                position,
                attempt,
            },
            CluePosition::Gray if colored_elsewhere(guess, *mask, letter, position) => {
                Fact::Excluded { letter, position }
            }
            CluePosition::Gray => Fact::Absent { letter },
        };

        if !facts.contains(&fact) {
            facts.push(fact);
        }
    }

    facts.push(Fact::Attempt { attempt });
    FactGroup::new(attempt, facts)
}

fn colored_elsewhere(guess: &Word, mask: ClueMask, letter: u8, position: usize) -> bool {
    (0..WORD_LENGTH).any(|other| {
        other != position
            && guess.char_at(other) == letter
            && mask.at(other) != CluePosition::Gray
    })
}

/// Recover the clue mask that produced `group` for `guess`
///
/// Positions named by green or yellow facts take that color; every other
/// position is gray.
#[must_use]
pub fn decode(guess: &Word, group: &FactGroup) -> ClueMask {
    let mut positions = [CluePosition::Gray; WORD_LENGTH];

    for fact in group {
        match *fact {
            Fact::Green { letter, position } if guess.char_at(position) == letter => {
                positions[position] = CluePosition::Green;
            }
            Fact::Yellow {
                letter, position, ..
            } if guess.char_at(position) == letter => {
                positions[position] = CluePosition::Yellow;
            }
            _ => {}
        }
    }

    ClueMask::new(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CluePosition::{Gray, Green, Yellow};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn encodes_each_color() {
        let guess = word("slate");
        let mask = ClueMask::new([Green, Yellow, Green, Yellow, Gray]);
        let group = encode(&guess, &mask, 2);

        assert_eq!(
            group.facts(),
            &[
                Fact::Green {
                    letter: b's',
                    position: 0
                },
                Fact::Yellow {
                    letter: b'l',
                    position: 1,
                    attempt: 2
                },
                Fact::Green {
                    letter: b'a',
                    position: 2
                },
                Fact::Yellow {
                    letter: b't',
                    position: 3,
                    attempt: 2
                },
                Fact::Absent { letter: b'e' },
                Fact::Attempt { attempt: 2 },
            ]
        );
        assert_eq!(group.attempt(), 2);
    }

    #[test]
    fn gray_copy_of_green_letter_is_positional() {
        let guess = word("sleep");
        let mask = ClueMask::score(&guess, &word("spelt"));
        let group = encode(&guess, &mask, 1);

        assert!(group.facts().contains(&Fact::Excluded {
            letter: b'e',
            position: 3
        }));
        assert!(!group.facts().contains(&Fact::Absent { letter: b'e' }));
    }

    #[test]
    fn gray_copy_of_yellow_letter_is_positional() {
        let guess = word("eerie");
        let mask = ClueMask::score(&guess, &word("there"));
        let group = encode(&guess, &mask, 4);

        assert!(group.facts().contains(&Fact::Excluded {
            letter: b'e',
            position: 1
        }));
        assert!(group.facts().contains(&Fact::Absent { letter: b'i' }));
        assert!(!group.facts().contains(&Fact::Absent { letter: b'e' }));
    }

    #[test]
    fn repeated_absent_letter_is_emitted_once() {
        let guess = word("geese");
        let mask = ClueMask::score(&guess, &word("stand"));
        let group = encode(&guess, &mask, 1);

        let absent_e = group
            .iter()
            .filter(|&&f| f == Fact::Absent { letter: b'e' })
            .count();
        assert_eq!(absent_e, 1);
    }

    #[test]
    fn attempt_marker_is_always_last() {
        let guess = word("crane");
        let group = encode(&guess, &ClueMask::SOLVED, 5);
        assert_eq!(group.facts().last(), Some(&Fact::Attempt { attempt: 5 }));
    }

    #[test]
    fn decode_recovers_the_mask() {
        let cases = [
            ("slate", "stale"),
            ("sleep", "spelt"),
            ("speed", "erase"),
            ("eerie", "there"),
            ("lolly", "hello"),
            ("geese", "lathe"),
            ("abcde", "fghij"),
            ("crane", "crane"),
        ];

        for (guess, secret) in cases {
            let guess = word(guess);
            let mask = ClueMask::score(&guess, &word(secret));
            let group = encode(&guess, &mask, 1);
            assert_eq!(decode(&guess, &group), mask, "{guess} vs {secret}");
        }
    }

    #[test]
    fn never_globally_excludes_a_colored_letter() {
        let cases = [
            ("sleep", "spelt"),
            ("lolly", "hello"),
            ("eerie", "there"),
            ("aabaa", "ccacc"),
            ("geese", "lathe"),
        ];

        for (guess, secret) in cases {
            let guess = word(guess);
            let mask = ClueMask::score(&guess, &word(secret));
            let group = encode(&guess, &mask, 1);

            for (i, &state) in mask.positions().iter().enumerate() {
                if state != Gray {
                    let letter = guess.char_at(i);
                    assert!(
                        !group.facts().contains(&Fact::Absent { letter }),
                        "{guess} vs {secret}: {} is colored but marked absent",
                        char::from(letter)
                    );
                }
            }
        }
    }
}
