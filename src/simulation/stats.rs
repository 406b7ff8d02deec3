use std::fmt;

use super::GameRecord;
use crate::game::{GameOutcome, Player};

/// Aggregate results over many simulated games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationStats {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    /// Games an agent stopped before a win or draw.
    pub aborted: usize,
    total_moves: usize,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.total_moves += game.length();
        match game.outcome() {
            GameOutcome::Win(Player::PlayerOne) => self.player_one_wins += 1,
            GameOutcome::Win(Player::PlayerTwo) => self.player_two_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => self.aborted += 1,
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::PlayerOne => self.player_one_wins,
            Player::PlayerTwo => self.player_two_wins,
        }
    }

    /// Share of games won by `player`, 0.0 when nothing was played.
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(player) as f64 / self.games as f64
    }

    pub fn draw_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f64 / self.games as f64
    }

    /// Average game length in moves
    pub fn average_length(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played:   {}", self.games)?;
        for player in [Player::PlayerOne, Player::PlayerTwo] {
            writeln!(
                f,
                "{} ({}) wins: {} ({:.1}%)",
                player.name(),
                player.symbol(),
                self.wins(player),
                self.win_rate(player) * 100.0
            )?;
        }
        writeln!(f, "Draws:          {} ({:.1}%)", self.draws, self.draw_rate() * 100.0)?;
        if self.aborted > 0 {
            writeln!(f, "Aborted:        {}", self.aborted)?;
        }
        write!(f, "Average length: {:.1} moves", self.average_length())
    }
}
