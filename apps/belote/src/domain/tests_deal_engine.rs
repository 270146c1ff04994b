use std::collections::HashSet;
use std::sync::Arc;

use rand::{RngCore, SeedableRng};

use crate::ai::{PlayerView, RandomStrategy, Strategy, StrategyError};
use crate::domain::rules::{RuleConfig, DECK_SIZE, HAND_SIZE, TRICKS_PER_DEAL};
use crate::domain::state::Team;
use crate::domain::{
    standard_table, table_with, Card, DealEngine, DealOptions, Deck, GameRng, Phase, Player,
    Suit, Trick,
};
use crate::errors::domain::DomainError;

struct AlwaysAccept;

impl Strategy for AlwaysAccept {
    fn name(&self) -> &'static str {
        "always-accept"
    }

    fn decide_card(
        &self,
        _view: &PlayerView<'_>,
        legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card, StrategyError> {
        legal.first().copied().ok_or(StrategyError::NoLegalCards)
    }

    fn accept_candidate(
        &self,
        _candidate: Card,
        _view: &PlayerView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<bool, StrategyError> {
        Ok(true)
    }
}

struct NeverAccept;

impl Strategy for NeverAccept {
    fn name(&self) -> &'static str {
        "never-accept"
    }

    fn decide_card(
        &self,
        _view: &PlayerView<'_>,
        legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card, StrategyError> {
        legal.first().copied().ok_or(StrategyError::NoLegalCards)
    }

    fn accept_candidate(
        &self,
        _candidate: Card,
        _view: &PlayerView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<bool, StrategyError> {
        Ok(false)
    }
}

/// Plays a card it does not hold.
struct Cheater;

impl Strategy for Cheater {
    fn name(&self) -> &'static str {
        "cheater"
    }

    fn decide_card(
        &self,
        view: &PlayerView<'_>,
        _legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card, StrategyError> {
        Deck::new()
            .cards()
            .iter()
            .copied()
            .find(|c| !view.hand.contains(c))
            .ok_or(StrategyError::NoLegalCards)
    }

    fn accept_candidate(
        &self,
        _candidate: Card,
        _view: &PlayerView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<bool, StrategyError> {
        Ok(false)
    }
}

struct Broken;

impl Strategy for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn decide_card(
        &self,
        _view: &PlayerView<'_>,
        _legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card, StrategyError> {
        Err(StrategyError::Internal("boom".into()))
    }

    fn accept_candidate(
        &self,
        _candidate: Card,
        _view: &PlayerView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<bool, StrategyError> {
        Ok(false)
    }
}

fn random_table() -> Vec<Player> {
    standard_table(Arc::new(RandomStrategy::new()))
}

fn start(players: Vec<Player>, rules: RuleConfig, seed: u64) -> DealEngine {
    DealEngine::start(
        players,
        DealOptions {
            rules,
            draft_start: 0,
        },
        GameRng::seed_from_u64(seed),
    )
    .unwrap()
}

#[test]
fn start_leaves_full_hands_and_empty_deck() {
    for seed in 0..20 {
        let engine = start(random_table(), RuleConfig::default(), seed);
        assert_eq!(engine.phase(), Phase::Playing { trick_no: 1 });
        assert_eq!(engine.deck_len(), 0);
        assert!(engine.players().iter().all(|p| p.hand.len() == HAND_SIZE));
        assert_eq!(engine.trump(), engine.candidate().suit);
    }
}

#[test]
fn seat_zero_takes_a_diamonds_candidate() {
    let table = || standard_table(Arc::new(AlwaysAccept));
    let seed = (0..200)
        .find(|&s| start(table(), RuleConfig::default(), s).candidate().suit == Suit::Diamonds)
        .expect("some seed reveals a Diamonds candidate");

    let engine = start(table(), RuleConfig::default(), seed);
    assert_eq!(engine.trump(), Suit::Diamonds);
    assert_eq!(engine.taker(), Some(0));
    assert!(engine.players()[0].hand.contains(engine.candidate()));
    assert!(engine.players().iter().all(|p| p.hand.len() == HAND_SIZE));
    assert_eq!(engine.deck_len(), 0);
}

#[test]
fn bidding_starts_at_the_draft_offset() {
    let engine = DealEngine::start(
        standard_table(Arc::new(AlwaysAccept)),
        DealOptions {
            rules: RuleConfig::default(),
            draft_start: 2,
        },
        GameRng::seed_from_u64(3),
    )
    .unwrap();
    assert_eq!(engine.taker(), Some(2));
    assert_eq!(engine.leader(), 2);
}

#[test]
fn no_taker_still_fixes_trump_and_fills_hands() {
    let engine = start(standard_table(Arc::new(NeverAccept)), RuleConfig::default(), 8);
    assert_eq!(engine.taker(), None);
    assert_eq!(engine.trump(), engine.candidate().suit);
    assert_eq!(engine.deck_len(), 0);
    assert!(engine.players().iter().all(|p| p.hand.len() == HAND_SIZE));
    // The returned candidate is the last card dealt.
    assert_eq!(
        engine.players()[3].hand.cards().last(),
        Some(&engine.candidate())
    );
}

#[test]
fn full_deal_conserves_cards_and_points() {
    for seed in 0..20 {
        let mut engine = start(random_table(), RuleConfig::default(), seed);
        let result = engine.play_out().unwrap();

        assert_eq!(engine.phase(), Phase::Scored);
        assert_eq!(result.tricks.len(), usize::from(TRICKS_PER_DEAL));
        assert_eq!(result.team_points.total(), 152);

        let played: HashSet<Card> = result
            .tricks
            .iter()
            .flat_map(|t| t.plays.iter().map(|&(_, c)| c))
            .collect();
        assert_eq!(played.len(), DECK_SIZE);
        assert!(engine.players().iter().all(|p| p.hand.is_empty()));
    }
}

#[test]
fn last_trick_bonus_goes_to_last_winner() {
    let mut engine = start(random_table(), RuleConfig::strict(), 4);
    let result = engine.play_out().unwrap();
    assert_eq!(result.team_points.total(), 162);

    let last = result.tricks.last().unwrap();
    let team = Team::from_seat(usize::from(last.winner));
    let card_points: u32 = result
        .tricks
        .iter()
        .filter(|t| Team::from_seat(usize::from(t.winner)) == team)
        .map(|t| u32::from(t.points))
        .sum();
    assert_eq!(result.team_points.get(team), card_points + 10);
}

#[test]
fn trick_outcome_reports_reward_and_leader() {
    let mut engine = start(random_table(), RuleConfig::default(), 21);
    let outcome = engine.play_next_trick(1, Some(0)).unwrap();

    assert!(!outcome.done);
    assert_eq!(outcome.info.plays.len(), 4);
    assert_eq!(engine.leader(), usize::from(outcome.info.winner));
    let same_team = Team::from_seat(usize::from(outcome.info.winner)) == Team::from_seat(1);
    let expected = if same_team {
        u32::from(outcome.info.trick_points)
    } else {
        0
    };
    assert_eq!(outcome.reward, expected);
    assert_eq!(outcome.observation.tricks_progress, 1.0 / 8.0);
    assert_eq!(outcome.observation.hand_size, 7.0 / 8.0);
    assert_eq!(outcome.observation.trump_one_hot[engine.trump().index()], 1.0);
}

#[test]
fn controlled_action_selects_from_legal_set() {
    // Seat 0 leads the first trick, so its legal set is the whole hand.
    let mut engine = start(random_table(), RuleConfig::default(), 13);
    let first_card = engine.players()[0].hand.cards()[2];
    let outcome = engine.play_next_trick(0, Some(2)).unwrap();
    assert_eq!(outcome.info.plays[0], (0, first_card));
}

#[test]
fn out_of_range_action_still_plays_a_legal_card() {
    for seed in 0..10 {
        let mut engine = start(random_table(), RuleConfig::default(), seed);
        while engine.phase() != Phase::Scored {
            engine.play_next_trick(2, Some(99)).unwrap();
        }
        assert_eq!(engine.team_points().total(), 152);
    }
}

#[test]
fn playing_after_the_last_trick_is_a_phase_error() {
    let mut engine = start(random_table(), RuleConfig::default(), 2);
    engine.play_out().unwrap();
    assert_eq!(
        engine.play_next_trick(0, None).unwrap_err(),
        DomainError::phase_mismatch("Playing", Phase::Scored)
    );
}

#[test]
fn unknown_controlled_player_is_rejected() {
    let mut engine = start(random_table(), RuleConfig::default(), 2);
    assert_eq!(
        engine.play_next_trick(9, None).unwrap_err(),
        DomainError::UnknownPlayer(9)
    );
}

#[test]
fn malformed_tables_are_rejected() {
    let mut three = random_table();
    three.pop();
    let err = DealEngine::start(three, DealOptions::default(), GameRng::seed_from_u64(0))
        .err()
        .unwrap();
    assert!(matches!(err, DomainError::InvalidTable(_)));

    let mut dup = random_table();
    dup[3].id = 0;
    let err = DealEngine::start(dup, DealOptions::default(), GameRng::seed_from_u64(0))
        .err()
        .unwrap();
    assert!(matches!(err, DomainError::InvalidTable(_)));
}

#[test]
fn card_outside_legal_set_is_illegal() {
    let random: Arc<dyn Strategy> = Arc::new(RandomStrategy::new());
    let players = table_with([
        Arc::new(Cheater),
        Arc::clone(&random),
        Arc::clone(&random),
        random,
    ]);
    let mut engine = start(players, RuleConfig::default(), 1);
    let err = engine.play_next_trick(1, None).unwrap_err();
    assert!(matches!(err, DomainError::IllegalPlay { player: 0, .. }));
}

#[test]
fn strategy_failure_is_propagated() {
    let mut engine = start(standard_table(Arc::new(Broken)), RuleConfig::default(), 1);
    let err = engine.play_out().unwrap_err();
    assert_eq!(
        err,
        DomainError::strategy(0, StrategyError::Internal("boom".into()))
    );
}

#[test]
fn legal_cards_for_a_leader_is_the_whole_hand() {
    let engine = start(random_table(), RuleConfig::default(), 6);
    let trick = Trick::new(engine.trump());
    assert_eq!(
        engine.legal_cards(3, &trick).unwrap(),
        engine.players()[3].hand.cards()
    );
    assert!(engine.legal_cards(4, &trick).is_err());
}

#[test]
fn same_seed_same_deal() {
    let mut a = start(random_table(), RuleConfig::default(), 77);
    let mut b = start(random_table(), RuleConfig::default(), 77);
    assert_eq!(a.play_out().unwrap(), b.play_out().unwrap());
}
