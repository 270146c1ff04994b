use proptest::prelude::*;

use crate::domain::tricks::Trick;
use crate::domain::{card_beats, test_gens, test_prelude, Card, PlayerId, Suit};

/// Reference winner: scan in play order, replacing the best only on a strict beat.
fn oracle_winner(plays: &[(PlayerId, Card)], trump: Suit) -> PlayerId {
    let lead = plays[0].1.suit;
    let mut best = plays[0];
    for &play in &plays[1..] {
        if card_beats(play.1, best.1, lead, trump) {
            best = play;
        }
    }
    best.0
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The winner holds a trump if any was played, else a lead-suit card, and
    /// no card of that group outscores it.
    #[test]
    fn prop_winner_is_best_of_contest_suit(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let mut trick = Trick::new(trump);
        for &(p, c) in &plays {
            trick.add(p, c);
        }
        let (winner, card) = trick.winning_play().unwrap();
        let lead = plays[0].1.suit;
        let any_trump = plays.iter().any(|(_, c)| c.suit == trump);
        let contest = if any_trump { trump } else { lead };

        prop_assert_eq!(card.suit, contest);
        for (_, other) in plays.iter().filter(|(_, c)| c.suit == contest) {
            prop_assert!(card.points(trump) >= other.points(trump));
        }
        prop_assert_eq!(winner, oracle_winner(&plays, trump));
    }

    /// Trick points are the sum of the card points under the trick's trump.
    #[test]
    fn prop_trick_points_sum(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let mut trick = Trick::new(trump);
        for &(p, c) in &plays {
            trick.add(p, c);
        }
        let expected: u16 = plays.iter().map(|(_, c)| c.points(trump)).sum();
        prop_assert_eq!(trick.points(), expected);
    }
}
