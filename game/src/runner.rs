use std::ops::ControlFlow;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior, interval};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;

use common::games::snake::{Autopilot, Difficulty, Scene, SnakeSession, TickOutcome};
use common::log;

use crate::command::Command;

pub struct RunSummary {
    pub scores: Vec<u32>,
    pub difficulty: Difficulty,
}

/// Owns the session and feeds it frames and player commands. With the
/// autopilot enabled it also plays, retrying until `games` rounds are done.
pub struct GameRunner {
    session: SnakeSession,
    autopilot: bool,
    games: u32,
    scores: Vec<u32>,
}

impl GameRunner {
    pub fn new(session: SnakeSession, autopilot: bool, games: u32) -> Self {
        Self {
            session,
            autopilot,
            games: games.max(1),
            scores: Vec::new(),
        }
    }

    pub fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        let result = match command {
            Command::Steer(direction) => {
                self.session.steer(direction);
                Ok(())
            }
            Command::Start => self.session.start(),
            Command::Retry => self.session.retry(),
            Command::SetDifficulty(difficulty) => self
                .session
                .set_difficulty(difficulty)
                .inspect(|_| log!("Difficulty set to {}", difficulty)),
            Command::Quit => return ControlFlow::Break(()),
        };

        if let Err(e) = result {
            log!("{}", e);
        }
        ControlFlow::Continue(())
    }

    pub fn on_frame(&mut self, now: std::time::Instant) -> ControlFlow<()> {
        if self.autopilot {
            match self.session.scene() {
                Scene::MainMenu => {
                    if let Err(e) = self.session.start() {
                        log!("Autopilot could not start: {}", e);
                    }
                }
                Scene::Playing => {
                    let direction =
                        Autopilot::calculate_move(self.session.snake(), self.session.board());
                    self.session.steer(direction);
                }
                Scene::GameOver { .. } => {}
            }
        }

        match self.session.on_frame(now) {
            Some(TickOutcome::Died { score }) => self.on_game_over(score),
            Some(TickOutcome::Ate { score, next_food: None }) => {
                log!("Board is full at score {}", score);
                ControlFlow::Continue(())
            }
            _ => ControlFlow::Continue(()),
        }
    }

    fn on_game_over(&mut self, score: u32) -> ControlFlow<()> {
        self.scores.push(score);
        log!("Game {} finished with score {}", self.scores.len(), score);

        if !self.autopilot {
            log!("Type 'retry' to return to the menu");
            return ControlFlow::Continue(());
        }
        if self.scores.len() >= self.games as usize {
            return ControlFlow::Break(());
        }
        if let Err(e) = self.session.retry() {
            log!("Autopilot could not retry: {}", e);
        }
        ControlFlow::Continue(())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            scores: self.scores.clone(),
            difficulty: self.session.difficulty(),
        }
    }

    /// Polls the session every `frame_interval` until the player quits, the
    /// autopilot is done, stdin closes in manual play, or Ctrl+C arrives.
    pub async fn run(mut self, frame_interval: Duration) -> RunSummary {
        let mut frames = interval(frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
        let mut stdin_open = true;

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            let flow = tokio::select! {
                now = frames.tick() => self.on_frame(Instant::into_std(now)),
                line = lines.next(), if stdin_open => match line {
                    Some(Ok(line)) if line.trim().is_empty() => ControlFlow::Continue(()),
                    Some(Ok(line)) => match line.parse::<Command>() {
                        Ok(command) => self.handle_command(command),
                        Err(e) => {
                            log!("{}", e);
                            ControlFlow::Continue(())
                        }
                    },
                    Some(Err(e)) => {
                        log!("Failed to read input: {}", e);
                        stdin_open = false;
                        ControlFlow::Continue(())
                    }
                    None => {
                        stdin_open = false;
                        if self.autopilot {
                            ControlFlow::Continue(())
                        } else {
                            ControlFlow::Break(())
                        }
                    }
                },
                _ = &mut shutdown => {
                    log!("Shutdown signal received");
                    ControlFlow::Break(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        self.summary()
    }
}
