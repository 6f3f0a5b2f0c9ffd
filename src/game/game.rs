//! The turn loop.
//!
//! Players are stored once in a table; the turn order is a FIFO of
//! `PlayerId`s. Each turn:
//!
//! 1. Take the front player
//! 2. Roll; `candidate = position + roll`
//! 3. `candidate > win_score` is an overshoot and nothing moves
//! 4. Otherwise move to `candidate` and follow at most one jump
//! 5. Win iff the final position is exactly `win_score`
//! 6. Otherwise the player goes to the back of the queue
//!
//! There is no turn cap. A board whose jumps keep every player from ever
//! reaching the goal will make [`Game::play`] run forever, and with
//! history retention on it will also grow memory on every turn.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::board::Board;
use crate::core::{ConfigError, GameError, GameRng, Player, PlayerId, Result};
use crate::dice::{Dice, RollSource};

use super::turn::{GamePhase, GameResult, TurnOutcome, TurnRecord};

/// A game of snakes and ladders.
#[derive(Clone, Debug)]
pub struct Game<S = GameRng> {
    board: Board,
    dice: Dice<S>,
    players: Vec<Player>,
    turn_order: VecDeque<PlayerId>,
    phase: GamePhase,
    history: Vec<TurnRecord>,
    retain_history: bool,
    turns: u64,
    winner: Option<PlayerId>,
}

impl<S: RollSource> Game<S> {
    /// Seat `players` in the given order.
    ///
    /// Every seated player starts on cell 0, whatever position it carried
    /// in.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoPlayers`] for an empty list,
    /// [`ConfigError::TooManyPlayers`] beyond 255.
    pub fn new(board: Board, dice: Dice<S>, mut players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(ConfigError::NoPlayers.into());
        }
        if players.len() > usize::from(u8::MAX) {
            return Err(ConfigError::TooManyPlayers(players.len()).into());
        }

        for player in &mut players {
            player.set_position(0);
        }
        let turn_order = PlayerId::all(players.len()).collect();

        Ok(Self {
            board,
            dice,
            players,
            turn_order,
            phase: GamePhase::NotStarted,
            history: Vec::new(),
            retain_history: true,
            turns: 0,
            winner: None,
        })
    }

    /// Keep every turn record (the default), or only the latest one.
    ///
    /// Turning retention off bounds memory for layouts that may never
    /// finish.
    pub fn retain_history(&mut self, retain: bool) {
        self.retain_history = retain;
        if !retain && self.history.len() > 1 {
            self.history.drain(..self.history.len() - 1);
        }
    }

    /// Play until someone wins.
    ///
    /// Never returns on a layout where no player can reach the goal. With
    /// history retained, such a run keeps allocating a record per turn; see
    /// [`retain_history`](Self::retain_history).
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] if the game already finished.
    pub fn play(&mut self) -> Result<GameResult> {
        self.play_with(|_| {})
    }

    /// Play until someone wins, handing every turn to `observer` as it
    /// completes.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] if the game already finished.
    pub fn play_with<F>(&mut self, mut observer: F) -> Result<GameResult>
    where
        F: FnMut(&TurnRecord),
    {
        if self.phase == GamePhase::Finished {
            return Err(GameError::GameOver);
        }

        self.phase = GamePhase::TurnInProgress;
        info!(
            win_score = self.win_score(),
            players = self.players.len(),
            dice = %self.dice,
            "game started"
        );

        loop {
            let record = self.step()?;
            observer(record);
            if record.won {
                break;
            }
        }

        self.result().ok_or(GameError::GameOver)
    }

    /// Play exactly one turn.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once a player has won
    /// - [`GameError::OutOfRange`] if position arithmetic escapes the board
    pub fn step(&mut self) -> Result<&TurnRecord> {
        if self.phase == GamePhase::Finished {
            return Err(GameError::GameOver);
        }
        self.phase = GamePhase::TurnInProgress;

        let id = *self.turn_order.front().ok_or(GameError::GameOver)?;
        let win_score = self.board.size();
        let roll = self.dice.roll_detailed();
        let from = self.players[id.index()].position();
        let candidate = from.saturating_add(roll.total());

        let (outcome, position) = if candidate > win_score {
            (TurnOutcome::Overshoot, from)
        } else {
            match self.board.cell_at(candidate)?.effect() {
                Some(jump) => (TurnOutcome::Jumped(*jump), jump.destination()),
                None => (TurnOutcome::Moved, candidate),
            }
        };

        self.turn_order.pop_front();
        let player = &mut self.players[id.index()];
        player.set_position(position);

        let won = outcome != TurnOutcome::Overshoot && position == win_score;
        self.turns = self.turns.saturating_add(1);
        let record = TurnRecord {
            turn: self.turns,
            player: id,
            name: player.name().to_string(),
            roll,
            from,
            outcome,
            position,
            won,
        };
        debug!(
            turn = record.turn,
            player = %record.name,
            roll = record.roll.total(),
            from,
            position,
            outcome = ?record.outcome,
            "turn played"
        );

        if won {
            self.phase = GamePhase::Finished;
            self.winner = Some(id);
            info!(winner = %record.name, turns = record.turn, "game finished");
        } else {
            self.turn_order.push_back(id);
        }

        if !self.retain_history {
            self.history.clear();
        }
        self.history.push(record);
        Ok(&self.history[self.history.len() - 1])
    }
}

impl<S> Game<S> {
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Position a player must land on exactly to win.
    #[must_use]
    pub fn win_score(&self) -> u32 {
        self.board.size()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dice(&self) -> &Dice<S> {
        &self.dice
    }

    /// All players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Who plays next, front first. Empty after the winner's turn only if
    /// there was a single player.
    pub fn turn_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.turn_order.iter().copied()
    }

    /// Every turn played so far, or only the latest one when history
    /// retention is off.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Turns played, all players included.
    #[must_use]
    pub fn turns_played(&self) -> u64 {
        self.turns
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The result, once finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let winner = self.winner?;
        let player = self.player(winner)?;
        Some(GameResult {
            winner,
            name: player.name().to_string(),
            position: player.position(),
            turns: self.turns,
        })
    }
}
