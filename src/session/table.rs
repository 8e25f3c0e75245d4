//! A live game as a front end sees it.
//!
//! `Table` speaks in identities instead of seats, always enforces turn
//! ownership, refuses moves after the game has ended, and drives automated
//! players. It returns events and reports; sending them anywhere is the
//! front end's job.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::{Action, Direction, GameRng, GameState, Identity, MoveError, PlayerId, SetupError, UnoConfig};
use crate::effects::AppliedEffect;
use crate::policy::PlayerPolicy;
use crate::rules::{ActionOutcome, RulesEngine, UnoRules};

/// Why a table rejected a move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("{0} is not seated at this table")]
    NotSeated(String),

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// One completed action, ready to announce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEvent {
    pub player: Identity,
    pub outcome: ActionOutcome,
    /// The outcome's effects with each seat replaced by its player.
    pub effects: Vec<AppliedEffect<Identity>>,
    /// Set when this action won the game.
    pub winner: Option<Identity>,
}

impl std::fmt::Display for TableEvent {
    /// Public announcement. Drawn cards are counted, never shown.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            ActionOutcome::Played { card, .. } => {
                write!(f, "{} played {card}", self.player)?;
                for effect in &self.effects {
                    write!(f, "; {effect}")?;
                }
            }
            ActionOutcome::Drew { cards } if cards.len() == 1 => {
                write!(f, "{} drew a card", self.player)?;
            }
            ActionOutcome::Drew { cards } => write!(f, "{} drew {} cards", self.player, cards.len())?,
            ActionOutcome::Passed => write!(f, "{} passed", self.player)?,
        }
        if let Some(winner) = &self.winner {
            write!(f, "\n🎉 {winner} wins!")?;
        }
        Ok(())
    }
}

/// Public view of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub top: Card,
    pub active_color: Color,
    pub direction: Direction,
    pub current: Identity,
    /// Hand sizes in seat order.
    pub hand_counts: Vec<(Identity, usize)>,
    pub winner: Option<Identity>,
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Top card: {}", self.top)?;
        if self.top.is_wild() {
            write!(f, " (color: {})", self.active_color)?;
        }
        writeln!(f)?;
        match &self.winner {
            Some(winner) => writeln!(f, "Winner: {winner}")?,
            None => writeln!(f, "Current: {}", self.current)?,
        }
        writeln!(f)?;
        for (i, (player, count)) in self.hand_counts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{player}: {count}")?;
        }
        Ok(())
    }
}

/// A hand numbered for its owner, starting at 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandListing(pub Vec<Card>);

impl HandListing {
    /// Card shown as number `n`.
    #[must_use]
    pub fn numbered(&self, n: usize) -> Option<Card> {
        n.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }
}

impl std::fmt::Display for HandListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {card}", i + 1)?;
        }
        Ok(())
    }
}

/// One game plus the rules and RNG that drive it.
#[derive(Clone, Debug)]
pub struct Table {
    state: GameState,
    rules: UnoRules,
    policy_rng: GameRng,
}

impl Table {
    /// Seat `players` in order and deal.
    pub fn new(players: Vec<Identity>, config: UnoConfig, rng: GameRng) -> Result<Self, SetupError> {
        let mut state = GameState::new(players, config, rng)?;
        let policy_rng = state.fork_rng();
        let rules = UnoRules::from_config(state.config());
        Ok(Self {
            state,
            rules,
            policy_rng,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> UnoRules {
        self.rules
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Identity> {
        self.state.winner().and_then(|seat| self.state.identity(seat))
    }

    /// Take `action` on behalf of `who`.
    pub fn act(&mut self, who: &Identity, action: Action) -> Result<TableEvent, TableError> {
        let seat = self
            .state
            .seat_of(who)
            .ok_or_else(|| TableError::NotSeated(who.display_name()))?;
        if self.state.is_over() {
            return Err(TableError::GameOver);
        }

        match self.rules.apply_action(&mut self.state, seat, &action) {
            Ok(outcome) => Ok(self.event(seat, outcome)),
            Err(err) => {
                if err.is_card_choice() {
                    tracing::debug!(player = %who, ?action, %err, "move rejected");
                } else {
                    tracing::warn!(player = %who, ?action, %err, "move rejected");
                }
                Err(err.into())
            }
        }
    }

    /// Play the card at 0-based `index`.
    pub fn play(&mut self, who: &Identity, index: usize, color: Option<Color>) -> Result<TableEvent, TableError> {
        self.act(who, Action::Play { index, color })
    }

    pub fn draw(&mut self, who: &Identity) -> Result<TableEvent, TableError> {
        self.act(who, Action::Draw)
    }

    pub fn pass(&mut self, who: &Identity) -> Result<TableEvent, TableError> {
        self.act(who, Action::Pass)
    }

    /// Let automated players act until a human is up or the game ends.
    ///
    /// Stops after `max_automated_turns` actions so an all-automated table
    /// cannot spin forever. A decision the rules reject is replaced by a draw.
    pub fn run_automated<P: PlayerPolicy + ?Sized>(&mut self, policy: &P) -> Vec<TableEvent> {
        let mut events = Vec::new();

        for _ in 0..self.state.config().max_automated_turns {
            if self.state.is_over() || !self.state.current_player().is_automated() {
                break;
            }

            let seat = self.state.current_seat();
            let decision = policy.decide(
                &self.state.top_of_discard(),
                self.state.active_color(),
                self.state.hand(seat),
                &mut self.policy_rng,
            );

            let outcome = match self.rules.apply_action(&mut self.state, seat, &decision.into_action()) {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::warn!(%seat, ?decision, %err, "automated move rejected, drawing instead");
                    match self.rules.apply_action(&mut self.state, seat, &Action::Draw) {
                        Ok(outcome) => outcome,
                        Err(err) => {
                            tracing::warn!(%seat, %err, "automated draw rejected");
                            break;
                        }
                    }
                }
            };
            events.push(self.event(seat, outcome));
        }

        events
    }

    /// Public status: top card, whose turn, hand sizes.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        let sizes = self.state.hand_sizes();
        StatusReport {
            top: self.state.top_of_discard(),
            active_color: self.state.active_color(),
            direction: self.state.direction(),
            current: self.state.current_player().clone(),
            hand_counts: self
                .state
                .players()
                .map(|(seat, player)| (player.clone(), sizes[seat]))
                .collect(),
            winner: self.winner().cloned(),
        }
    }

    /// `who`'s hand for private display, or `None` if they are not seated.
    #[must_use]
    pub fn hand_listing(&self, who: &Identity) -> Option<HandListing> {
        self.state.hand_of(who).map(|hand| HandListing(hand.to_vec()))
    }

    fn identity_at(&self, seat: PlayerId) -> Identity {
        self.state
            .identity(seat)
            .cloned()
            .unwrap_or_else(|| Identity::automated(seat.to_string()))
    }

    fn event(&self, seat: PlayerId, outcome: ActionOutcome) -> TableEvent {
        let player = self.identity_at(seat);
        let effects = match &outcome {
            ActionOutcome::Played { effects, .. } => effects
                .iter()
                .map(|effect| effect.clone().map_player(|seat| self.identity_at(seat)))
                .collect(),
            _ => Vec::new(),
        };
        let winner = self.winner().cloned();
        if let Some(winner) = &winner {
            tracing::debug!(%winner, "game won");
        }
        TableEvent {
            player,
            outcome,
            effects,
            winner,
        }
    }
}
