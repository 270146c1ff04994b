//! Deal engine: one Belote deal from a fresh deck to the final score.
//!
//! `start` runs Dealing, Bidding and Completing in one go and leaves the engine
//! in `Playing`. Tricks are then played one at a time with `play_next_trick`
//! (the episode driver) or all at once with `play_out` (the match loop).

use std::collections::HashSet;

use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::ai::{ExternalStrategy, PlayerView, Strategy};
use crate::domain::dealing::{complete_hands, deal_initial, run_bidding};
use crate::domain::deck::Deck;
use crate::domain::observation::Observation;
use crate::domain::player::Player;
use crate::domain::rules::{RuleConfig, HAND_SIZE, PLAYERS, TRICKS_PER_DEAL};
use crate::domain::scoring::TeamScores;
use crate::domain::state::{play_order, position_from, Phase, PlayerId, Seat, Team};
use crate::domain::tricks::{legal_moves, Trick, TrickRecord};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Generator behind every random decision of a deal.
pub type GameRng = ChaCha8Rng;

/// Per-deal settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealOptions {
    pub rules: RuleConfig,
    /// Seat first offered the candidate. It also leads the first trick.
    pub draft_start: Seat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickInfo {
    pub winner: PlayerId,
    /// Card points of the trick, bonus excluded.
    pub trick_points: u16,
    pub plays: Vec<(PlayerId, Card)>,
}

/// What `play_next_trick` reports to the controlled player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrickOutcome {
    pub observation: Observation,
    /// Points awarded for the trick when the controlled player's team won it, else 0.
    pub reward: u32,
    pub done: bool,
    pub info: TrickInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealResult {
    pub trump: Suit,
    pub candidate: Card,
    /// `None` when nobody took the candidate.
    pub taker: Option<PlayerId>,
    pub team_points: TeamScores,
    pub tricks: Vec<TrickRecord>,
}

struct ResolvedTrick {
    trick: Trick,
    led_by: Seat,
    winner: PlayerId,
    winner_seat: Seat,
    awarded: u32,
}

pub struct DealEngine {
    players: Vec<Player>,
    deck: Deck,
    rules: RuleConfig,
    rng: GameRng,
    phase: Phase,
    trump: Suit,
    candidate: Card,
    taker: Option<PlayerId>,
    leader: Seat,
    tricks_completed: u8,
    team_points: TeamScores,
    completed: Vec<TrickRecord>,
}

impl DealEngine {
    /// Shuffle, deal, run the candidate round and complete all hands.
    ///
    /// `players` are in seating order; ids must be unique. Fails with
    /// `InvalidTable` on a malformed table.
    pub fn start(
        mut players: Vec<Player>,
        options: DealOptions,
        mut rng: GameRng,
    ) -> Result<Self, DomainError> {
        validate_table(&players)?;
        let draft_start = options.draft_start % PLAYERS;

        let mut phase = Phase::Dealing;
        debug!(phase = ?phase, draft_start, "deal starting");
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        deal_initial(&mut deck, &mut players)?;

        phase = transition(phase, Phase::Bidding);
        let outcome = run_bidding(&mut deck, &mut players, draft_start, &mut rng)?;

        phase = transition(phase, Phase::Completing);
        complete_hands(&mut deck, &mut players, outcome.taker)?;
        debug_assert!(deck.is_empty(), "deck must be exhausted after completion");
        debug_assert!(players.iter().all(|p| p.hand.len() == HAND_SIZE));

        phase = transition(phase, Phase::Playing { trick_no: 1 });
        let taker = outcome.taker.map(|seat| players[seat].id);

        Ok(Self {
            players,
            deck,
            rules: options.rules,
            rng,
            phase,
            trump: outcome.trump,
            candidate: outcome.candidate,
            taker,
            leader: draft_start,
            tricks_completed: 0,
            team_points: TeamScores::new(),
            completed: Vec::with_capacity(usize::from(TRICKS_PER_DEAL)),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn candidate(&self) -> Card {
        self.candidate
    }

    pub fn taker(&self) -> Option<PlayerId> {
        self.taker
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn tricks_completed(&self) -> u8 {
        self.tricks_completed
    }

    /// Seat leading the next trick.
    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn team_points(&self) -> TeamScores {
        self.team_points
    }

    pub fn completed_tricks(&self) -> &[TrickRecord] {
        &self.completed
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Cards the player at `seat` may play into `trick`.
    pub fn legal_cards(&self, seat: Seat, trick: &Trick) -> Result<Vec<Card>, DomainError> {
        let player = self
            .players
            .get(seat)
            .ok_or(DomainError::UnknownPlayer(seat as PlayerId))?;
        let partner_winning = self.partner_winning(trick, seat)?;
        Ok(legal_moves(
            player.hand.cards(),
            trick,
            partner_winning,
            &self.rules,
        ))
    }

    /// Play one full trick.
    ///
    /// With `Some(action)` the controlled player's card is `legal[action]`, or
    /// a random legal card when the index is out of range. With `None` every
    /// seat, the controlled one included, uses its own strategy.
    pub fn play_next_trick(
        &mut self,
        controlled: PlayerId,
        action: Option<usize>,
    ) -> Result<TrickOutcome, DomainError> {
        let controlled_seat = self.seat_of(controlled)?;
        let resolved = self.play_trick(action.map(|a| (controlled_seat, a)))?;

        let controlled_team = self.players[controlled_seat].team;
        let reward = if self.players[resolved.winner_seat].team == controlled_team {
            resolved.awarded
        } else {
            0
        };
        let observation = self.observe(controlled_seat, &resolved.trick, resolved.led_by)?;

        Ok(TrickOutcome {
            observation,
            reward,
            done: self.phase == Phase::Scored,
            info: TrickInfo {
                winner: resolved.winner,
                trick_points: resolved.trick.points(),
                plays: resolved.trick.plays().to_vec(),
            },
        })
    }

    /// Play every remaining trick with the seated strategies.
    pub fn play_out(&mut self) -> Result<DealResult, DomainError> {
        while matches!(self.phase, Phase::Playing { .. }) {
            self.play_trick(None)?;
        }
        Ok(self.result())
    }

    /// Snapshot of the deal so far; final once the phase is `Scored`.
    pub fn result(&self) -> DealResult {
        DealResult {
            trump: self.trump,
            candidate: self.candidate,
            taker: self.taker,
            team_points: self.team_points,
            tricks: self.completed.clone(),
        }
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    fn play_trick(&mut self, external: Option<(Seat, usize)>) -> Result<ResolvedTrick, DomainError> {
        let trick_no = match self.phase {
            Phase::Playing { trick_no } => trick_no,
            other => return Err(DomainError::phase_mismatch("Playing", other)),
        };
        let led_by = self.leader;
        let mut trick = Trick::new(self.trump);

        for seat in play_order(led_by) {
            let partner_winning = self.partner_winning(&trick, seat)?;
            let player = &self.players[seat];
            let legal = legal_moves(player.hand.cards(), &trick, partner_winning, &self.rules);
            let view = PlayerView {
                player: player.id,
                seat,
                team: player.team,
                hand: player.hand.cards(),
                trump: Some(self.trump),
                trick: trick.plays(),
                partner_winning,
                tricks_completed: self.tricks_completed,
                team_points: self.team_points,
            };
            let decision = match external {
                Some((controlled, action)) if controlled == seat => {
                    ExternalStrategy::new(action).decide_card(&view, &legal, &mut self.rng)
                }
                _ => player.strategy.decide_card(&view, &legal, &mut self.rng),
            };
            let card = decision.map_err(|e| DomainError::strategy(player.id, e))?;
            let id = player.id;
            if !legal.contains(&card) {
                return Err(DomainError::IllegalPlay { player: id, card });
            }

            self.players[seat].hand.remove(card)?;
            trick.add(id, card);
            debug!(trick_no, player = id, card = %card, "card played");
        }

        let winner = trick.determine_winner()?;
        let winner_seat = self.seat_of(winner)?;
        let points = trick.points();
        let bonus = if trick_no == TRICKS_PER_DEAL {
            self.rules.last_trick_bonus
        } else {
            0
        };
        let awarded = u32::from(points) + u32::from(bonus);
        self.team_points.add(self.players[winner_seat].team, awarded);
        self.tricks_completed += 1;
        self.leader = winner_seat;
        self.completed.push(TrickRecord {
            trick_no,
            plays: trick.plays().to_vec(),
            winner,
            points,
        });
        info!(trick_no, winner, points, bonus, "trick won");

        self.phase = if self.tricks_completed >= TRICKS_PER_DEAL {
            info!(
                team_one = self.team_points.get(Team::One),
                team_two = self.team_points.get(Team::Two),
                trump = %self.trump,
                "deal scored"
            );
            Phase::Scored
        } else {
            Phase::Playing {
                trick_no: trick_no + 1,
            }
        };

        Ok(ResolvedTrick {
            trick,
            led_by,
            winner,
            winner_seat,
            awarded,
        })
    }

    /// Observation for the controlled seat after `trick` resolved.
    ///
    /// The legal ratio is measured against the resolved trick's lead suit.
    fn observe(&self, seat: Seat, trick: &Trick, led_by: Seat) -> Result<Observation, DomainError> {
        let hand = self.players[seat].hand.cards();
        let partner_winning = self.partner_winning(trick, seat)?;
        let legal = legal_moves(hand, trick, partner_winning, &self.rules);
        Ok(Observation::new(
            legal.len(),
            hand.len(),
            self.tricks_completed,
            trick.points(),
            position_from(led_by, seat),
            self.trump,
        ))
    }

    fn partner_winning(&self, trick: &Trick, seat: Seat) -> Result<bool, DomainError> {
        if trick.is_empty() {
            return Ok(false);
        }
        let winner_seat = self.seat_of(trick.determine_winner()?)?;
        Ok(winner_seat != seat && self.players[winner_seat].team == self.players[seat].team)
    }

    fn seat_of(&self, id: PlayerId) -> Result<Seat, DomainError> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::UnknownPlayer(id))
    }
}

fn transition(from: Phase, to: Phase) -> Phase {
    debug!(from = ?from, to = ?to, "deal phase transition");
    to
}

fn validate_table(players: &[Player]) -> Result<(), DomainError> {
    if players.len() != PLAYERS {
        return Err(DomainError::InvalidTable(format!(
            "expected {PLAYERS} players, got {}",
            players.len()
        )));
    }
    let mut seen = HashSet::with_capacity(PLAYERS);
    for p in players {
        if !seen.insert(p.id) {
            return Err(DomainError::InvalidTable(format!(
                "duplicate player id {}",
                p.id
            )));
        }
    }
    Ok(())
}
