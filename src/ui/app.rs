use std::io;
use std::time::{Duration, Instant};

use crate::ai::{Agent, RandomAgent};
use crate::game::{step, Event, GameOutcome, GameState, Mode, Player, Transition};
use crossterm::event::{self, Event as TermEvent, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use super::input::{self, MenuChoice};
use super::{game_view, menu_view};

/// Longest wait for a key before the loop redraws and checks the bot timer.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which screen of the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    ModeSelect,
    Playing,
    PlayAgain,
    Farewell,
}

/// Session settings decided before the first game.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Skip the menu and always play this mode.
    pub fixed_mode: Option<Mode>,
    pub bot_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fixed_mode: None,
            bot_delay: Duration::from_millis(500),
        }
    }
}

pub struct App<A: Agent = RandomAgent> {
    screen: Screen,
    game_state: GameState,
    bot: A,
    settings: Settings,
    /// When the pending bot move may be played.
    bot_due: Option<Instant>,
    should_quit: bool,
    message: Option<String>,
}

impl App<RandomAgent> {
    pub fn new(settings: Settings) -> Self {
        Self::with_bot(settings, RandomAgent::from_os_rng())
    }
}

impl<A: Agent> App<A> {
    pub fn with_bot(settings: Settings, bot: A) -> Self {
        let mode = settings.fixed_mode.unwrap_or(Mode::PlayerVsPlayer);
        App {
            screen: Screen::Welcome,
            game_state: GameState::new(mode),
            bot,
            settings,
            bot_due: None,
            should_quit: false,
            message: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Wait for a key, but never past the bot's deadline.
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = match self.bot_due {
            Some(due) => due.saturating_duration_since(Instant::now()).min(POLL_INTERVAL),
            None => POLL_INTERVAL,
        };
        if event::poll(timeout)? {
            if let TermEvent::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !input::is_press(&key) {
            return;
        }

        match self.screen {
            Screen::Welcome => self.leave_welcome(),
            Screen::ModeSelect => match input::menu_choice(&key) {
                Some(MenuChoice::Start(mode)) => self.start_game(mode),
                Some(MenuChoice::Exit) => self.screen = Screen::Farewell,
                None => {}
            },
            Screen::Playing => {
                if let Some(game_input) = input::game_input(&key) {
                    let transition = step(&self.game_state, game_input);
                    self.apply(transition);
                }
            }
            Screen::PlayAgain => match input::play_again(&key) {
                Some(true) => self.leave_welcome(),
                Some(false) => self.screen = Screen::Farewell,
                None => self.message = Some("Please press 'y' or 'n'.".to_string()),
            },
            Screen::Farewell => self.should_quit = true,
        }
    }

    /// Advance timers. Plays the bot's move once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.screen != Screen::Playing || !self.game_state.is_bot_turn() {
            self.bot_due = None;
            return;
        }
        if self.game_state.is_terminal() {
            return;
        }
        match self.bot_due {
            None => self.bot_due = Some(now + self.settings.bot_delay),
            Some(due) if now >= due => {
                self.bot_due = None;
                let transition = self.game_state.bot_take_turn(&mut self.bot);
                self.apply(transition);
            }
            Some(_) => {}
        }
    }

    /// Next game, either straight into the fixed mode or via the menu.
    fn leave_welcome(&mut self) {
        match self.settings.fixed_mode {
            Some(mode) => self.start_game(mode),
            None => {
                self.message = None;
                self.screen = Screen::ModeSelect;
            }
        }
    }

    fn start_game(&mut self, mode: Mode) {
        self.game_state = GameState::new(mode);
        self.bot_due = None;
        self.message = None;
        self.screen = Screen::Playing;
        tracing::info!(mode = mode.label(), "new game");
    }

    fn apply(&mut self, transition: Transition) {
        self.game_state = transition.state;
        self.message = match transition.event {
            Event::Rejected(err) => Some(format!("Can't drop there: {}.", err)),
            Event::Quit => Some("Game abandoned.".to_string()),
            Event::NoLegalColumn => Some("The bot has no move left. It's a draw!".to_string()),
            Event::Dropped { .. } => self.outcome_message(),
            Event::Ignored | Event::CursorMoved { .. } => None,
        };
        if self.game_state.is_terminal() {
            self.bot_due = None;
            self.screen = Screen::PlayAgain;
        }
    }

    fn outcome_message(&self) -> Option<String> {
        match self.game_state.outcome() {
            GameOutcome::Win(player) if self.game_state.mode() == Mode::PlayerVsBot => {
                if player == Player::PlayerTwo {
                    Some("Bot wins!".to_string())
                } else {
                    Some("You beat the bot!".to_string())
                }
            }
            GameOutcome::Win(player) => Some(format!("{} wins!", player.name())),
            GameOutcome::Draw => Some("It's a draw!".to_string()),
            GameOutcome::InProgress => None,
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Welcome => menu_view::render_welcome(frame),
            Screen::ModeSelect => menu_view::render_mode_select(frame),
            Screen::Playing | Screen::PlayAgain => game_view::render(
                frame,
                &self.game_state,
                &self.message,
                self.screen == Screen::PlayAgain,
            ),
            Screen::Farewell => menu_view::render_farewell(frame),
        }
    }
}
