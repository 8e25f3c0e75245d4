//! Game state: the base engine.
//!
//! `GameState` owns everything a single game needs:
//! - seat identities and hands
//! - draw and discard piles
//! - turn index, direction and active color
//! - action history
//! - the RNG for shuffles and Wild flips
//!
//! It knows how to deal, validate and apply a play, draw with reshuffle,
//! and advance the turn. It does not interpret action cards; that belongs
//! to `effects`, and sequencing a whole turn belongs to `rules`.
//!
//! ## Card conservation
//!
//! Cards are created once, when the deck is built, and only move between
//! piles and hands afterwards. The multiset of [`GameState::cards`] is the
//! standard 108-card deck for every reachable state.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::config::{cards_needed, TurnOrder, UnoConfig};
use super::error::{MoveError, SetupError};
use super::identity::Identity;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{standard_deck, Card, Color};
use crate::zones::{DiscardPile, DrawPile};

/// Turn direction around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Seat order ascending.
    #[default]
    Clockwise,
    /// Seat order descending.
    CounterClockwise,
}

impl Direction {
    /// Seat offset for one step: +1 or -1.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Cards a draw delivered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Cards appended to the hand, in draw order.
    pub drawn: SmallVec<[Card; 4]>,
    /// Whether the discard pile was reshuffled into the draw pile.
    pub reshuffled: bool,
    /// Units that could not be drawn because no card was left anywhere.
    pub shortfall: usize,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    config: UnoConfig,
    players: PlayerMap<Identity>,
    hands: PlayerMap<Vec<Card>>,
    draw_pile: DrawPile,
    discard: DiscardPile,
    turn: PlayerId,
    direction: Direction,
    active_color: Color,
    turn_number: u32,
    history: Vector<ActionRecord>,
    rng: GameRng,
}

impl GameState {
    /// Create a game: build and shuffle the deck, deal, and flip the first card.
    ///
    /// Seat order follows `players`. The first seat moves first.
    pub fn new(players: Vec<Identity>, config: UnoConfig, mut rng: GameRng) -> Result<Self, SetupError> {
        config.validate(players.len())?;
        for (i, player) in players.iter().enumerate() {
            if players[..i].contains(player) {
                return Err(SetupError::DuplicatePlayer(player.name().to_string()));
            }
        }

        let player_count = players.len();
        let mut draw_pile = DrawPile::from_cards(standard_deck());
        draw_pile.shuffle(&mut rng);

        let mut hands = PlayerMap::with_default(player_count);
        let first = deal(&mut draw_pile, &mut hands, config.hand_size)?;

        // A Wild flip names a random color; Wild itself is never active.
        let active_color = if first.is_wild() {
            Color::random(&mut rng)
        } else {
            first.color
        };

        tracing::debug!(
            players = player_count,
            seed = rng.seed(),
            flip = %first,
            active = %active_color,
            "dealt new game"
        );

        Ok(Self {
            config,
            players: PlayerMap::from(players),
            hands,
            draw_pile,
            discard: DiscardPile::new(first),
            turn: PlayerId::new(0),
            direction: Direction::Clockwise,
            active_color,
            turn_number: 1,
            history: Vector::new(),
            rng,
        })
    }

    // === Seats ===

    #[must_use]
    pub fn config(&self) -> &UnoConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Identities in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Identity)> {
        self.players.iter()
    }

    #[must_use]
    pub fn identity(&self, seat: PlayerId) -> Option<&Identity> {
        self.players.get(seat)
    }

    #[must_use]
    pub fn seat_of(&self, identity: &Identity) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| *p == identity)
            .map(|(seat, _)| seat)
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> PlayerId {
        self.turn
    }

    /// Identity whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Identity {
        &self.players[self.turn]
    }

    /// Seat that moves after the current one in the current direction.
    #[must_use]
    pub fn next_seat(&self) -> PlayerId {
        self.seat_after(self.turn)
    }

    fn seat_after(&self, seat: PlayerId) -> PlayerId {
        let count = self.player_count() as isize;
        let next = (seat.index() as isize + self.direction.step()).rem_euclid(count);
        PlayerId::new(next as u8)
    }

    // === Hands and piles ===

    /// A seat's hand in display order. Empty for an unknown seat.
    #[must_use]
    pub fn hand(&self, seat: PlayerId) -> &[Card] {
        self.hands.get(seat).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn hand_of(&self, identity: &Identity) -> Option<&[Card]> {
        self.seat_of(identity).map(|seat| self.hand(seat))
    }

    /// Hand sizes in seat order.
    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        PlayerMap::new(self.player_count(), |seat| self.hands[seat].len())
    }

    #[must_use]
    pub fn is_hand_empty(&self, seat: PlayerId) -> bool {
        self.hand(seat).is_empty()
    }

    #[must_use]
    pub fn top_of_discard(&self) -> Card {
        self.discard.top()
    }

    /// The color the next card must match. Never `Color::Wild`.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Every card in the game: draw pile, discard pile, then hands in seat order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile
            .iter()
            .chain(self.discard.iter())
            .chain(self.hands.values().flat_map(|hand| hand.iter()))
    }

    // === Progress ===

    /// Turn number, starting at 1 and incremented by every advance.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// First seat to have emptied its hand.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.is_empty())
            .map(|(seat, _)| seat)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Append a successful action to the history.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }

    /// Split off an independent RNG stream, e.g. for automated players.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Moves ===

    /// Play the card at `index` in `seat`'s hand.
    ///
    /// Checks, in order: turn ownership (under `TurnOrder::Enforced`), the
    /// index, legality against the discard top and active color, and for a
    /// Wild card a concrete color choice. `chosen` is ignored for other cards.
    ///
    /// On success the card leaves the hand, becomes the discard top, and sets
    /// the active color. The turn does not advance. On failure nothing changes.
    pub fn attempt_play(
        &mut self,
        seat: PlayerId,
        index: usize,
        chosen: Option<Color>,
    ) -> Result<Card, MoveError> {
        self.check_turn(seat)?;

        let hand = &self.hands[seat];
        let card = *hand
            .get(index)
            .ok_or(MoveError::IndexOutOfRange { index, len: hand.len() })?;

        let top = self.discard.top();
        if !card.can_play(&top, self.active_color) {
            return Err(MoveError::InvalidMove {
                card,
                top,
                active: self.active_color,
            });
        }

        let next_color = if card.is_wild() {
            match chosen {
                Some(color) if color.is_concrete() => color,
                _ => return Err(MoveError::MissingColorChoice { card }),
            }
        } else {
            card.color
        };

        self.hands[seat].remove(index);
        self.discard.push(card);
        self.active_color = next_color;

        tracing::debug!(%seat, %card, active = %next_color, left = self.hands[seat].len(), "card played");
        Ok(card)
    }

    /// Draw `count` cards into `seat`'s hand, checking turn ownership under
    /// `TurnOrder::Enforced`.
    pub fn draw_cards(&mut self, seat: PlayerId, count: usize) -> Result<DrawOutcome, MoveError> {
        self.check_turn(seat)?;
        self.force_draw(seat, count)
    }

    /// Draw `count` cards into `seat`'s hand regardless of whose turn it is.
    ///
    /// An empty draw pile is rebuilt from the discard pile minus its top.
    /// If both are exhausted the unit is skipped and counted as shortfall.
    pub fn force_draw(&mut self, seat: PlayerId, count: usize) -> Result<DrawOutcome, MoveError> {
        self.check_seat(seat)?;

        let mut outcome = DrawOutcome::default();
        for _ in 0..count {
            if self.draw_pile.is_empty() {
                let recovered = self.draw_pile.reshuffle_from(&mut self.discard, &mut self.rng);
                outcome.reshuffled |= recovered > 0;
            }
            match self.draw_pile.draw_top() {
                Some(card) => {
                    self.hands[seat].push(card);
                    outcome.drawn.push(card);
                }
                None => outcome.shortfall += 1,
            }
        }

        if outcome.shortfall > 0 {
            tracing::error!(
                %seat,
                requested = count,
                shortfall = outcome.shortfall,
                "draw and discard piles both exhausted"
            );
        }
        tracing::debug!(%seat, drawn = outcome.drawn.len(), reshuffled = outcome.reshuffled, "cards drawn");
        Ok(outcome)
    }

    /// Move the turn one seat in the current direction.
    pub fn advance_turn(&mut self) {
        self.turn = self.next_seat();
        self.turn_number += 1;
    }

    /// Move the turn past the next seat without starting a new turn.
    ///
    /// The passed-over seat never acts, so `turn_number` stays put and
    /// history turns remain consecutive.
    pub fn skip_seat(&mut self) {
        self.turn = self.next_seat();
    }

    /// Flip the direction of play. Returns the new direction.
    pub fn reverse_direction(&mut self) -> Direction {
        self.direction = self.direction.reversed();
        self.direction
    }

    fn check_seat(&self, seat: PlayerId) -> Result<(), MoveError> {
        if seat.index() < self.player_count() {
            Ok(())
        } else {
            Err(MoveError::UnknownSeat(seat))
        }
    }

    fn check_turn(&self, seat: PlayerId) -> Result<(), MoveError> {
        self.check_seat(seat)?;
        if self.config.turn_order == TurnOrder::Enforced && seat != self.turn {
            return Err(MoveError::NotYourTurn {
                player: seat,
                current: self.turn,
            });
        }
        Ok(())
    }

    /// Replace hands and the discard top with chosen cards, keeping the
    /// 108-card multiset intact. Everything else goes to the draw pile.
    #[cfg(test)]
    pub(crate) fn rig(&mut self, top: Card, active: Color, hands: &[&[Card]]) {
        fn take(pool: &mut Vec<Card>, card: Card) -> Card {
            let pos = pool
                .iter()
                .position(|&c| c == card)
                .unwrap_or_else(|| panic!("no {card} left to rig"));
            pool.remove(pos)
        }

        let mut pool = standard_deck();
        self.discard = DiscardPile::new(take(&mut pool, top));
        for (i, cards) in hands.iter().enumerate() {
            let seat = PlayerId::new(i as u8);
            self.hands[seat] = cards.iter().map(|&c| take(&mut pool, c)).collect();
        }
        for seat in PlayerId::all(self.player_count()).skip(hands.len()) {
            self.hands[seat] = (0..self.config.hand_size).filter_map(|_| pool.pop()).collect();
        }
        self.draw_pile = DrawPile::from_cards(pool);
        self.active_color = active;
    }
}

/// Deal `hand_size` cards to each seat in seat order, then flip one card.
fn deal(
    draw_pile: &mut DrawPile,
    hands: &mut PlayerMap<Vec<Card>>,
    hand_size: usize,
) -> Result<Card, SetupError> {
    let needed = cards_needed(hand_size, hands.player_count());
    if draw_pile.len() < needed {
        return Err(SetupError::NotEnoughCards {
            needed,
            available: draw_pile.len(),
        });
    }

    for seat in PlayerId::all(hands.player_count()) {
        for _ in 0..hand_size {
            if let Some(card) = draw_pile.draw_top() {
                hands[seat].push(card);
            }
        }
    }

    draw_pile.draw_top().ok_or(SetupError::NotEnoughCards {
        needed,
        available: 0,
    })
}
