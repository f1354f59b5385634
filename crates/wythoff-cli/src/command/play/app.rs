use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind};
use log::debug;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span, Text},
};
use wythoff_engine::{Actor, GameSession, Move, MoveKind, SessionState};

use crate::{
    record::GameRecorder,
    tui::{App, Runtime},
    ui::widgets::{PilesDisplay, TurnLogDisplay, style},
};

const TICK_INTERVAL: Duration = Duration::from_millis(50);
const NOTICE_DURATION: Duration = Duration::from_secs(2);
const CHEATING_MESSAGE: &str = "Cheating is not allowed!";

#[derive(Debug)]
struct Notice {
    text: String,
    style: Style,
    expires_at: Instant,
}

/// Number typed by the player; never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AmountInput {
    value: u32,
    /// The next digit replaces the value instead of extending it.
    fresh: bool,
}

impl Default for AmountInput {
    fn default() -> Self {
        Self {
            value: 1,
            fresh: true,
        }
    }
}

impl AmountInput {
    fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1).max(1);
    }

    fn push_digit(&mut self, digit: u32) {
        let value = if self.fresh {
            Some(digit)
        } else {
            self.value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
        };
        match value {
            Some(0) => *self = Self::default(),
            Some(value) => {
                self.value = value;
                self.fresh = false;
            }
            None => {}
        }
    }

    fn pop_digit(&mut self) {
        match self.value / 10 {
            0 => *self = Self::default(),
            value => self.value = value,
        }
    }
}

/// Terminal front end of a [`GameSession`].
#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    recorder: GameRecorder,
    amount: AmountInput,
    notice: Option<Notice>,
    ai_delay: Duration,
    ai_due: Option<Instant>,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(session: GameSession, ai_delay: Duration) -> Self {
        Self {
            session,
            recorder: GameRecorder::new(),
            amount: AmountInput::default(),
            notice: None,
            ai_delay,
            ai_due: None,
            is_exiting: false,
        }
    }

    /// Ends the run, capturing the game in progress (if any move was made).
    pub fn finish(mut self) -> (GameSession, GameRecorder) {
        self.recorder.capture(&self.session);
        (self.session, self.recorder)
    }

    fn accepts_human_move(&self) -> bool {
        self.session.state().is_awaiting_human_move() && self.ai_due.is_none()
    }

    fn handle_key(&mut self, code: KeyCode, now: Instant) {
        if let KeyCode::Char('q') = code {
            self.is_exiting = true;
            return;
        }
        if self.session.is_terminal() {
            if let KeyCode::Char('r') = code {
                self.rematch();
            }
            return;
        }
        if !self.accepts_human_move() {
            return;
        }
        match code {
            KeyCode::Char('f') => self.submit(MoveKind::First, now),
            KeyCode::Char('s') => self.submit(MoveKind::Second, now),
            KeyCode::Char('b') => self.submit(MoveKind::Both, now),
            KeyCode::Char('h') => self.show_hint(now),
            KeyCode::Char('+') | KeyCode::Up => self.amount.increment(),
            KeyCode::Char('-') | KeyCode::Down => self.amount.decrement(),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    self.amount.push_digit(digit);
                }
            }
            KeyCode::Backspace => self.amount.pop_digit(),
            _ => {}
        }
    }

    fn submit(&mut self, kind: MoveKind, now: Instant) {
        let mv = Move::from_kind(kind, self.amount.value);
        match self.session.apply_human_move(mv) {
            Ok(()) => {
                self.amount = AmountInput::default();
                self.notice = None;
                if self.session.state().is_awaiting_automated_move() {
                    self.ai_due = Some(now + self.ai_delay);
                }
            }
            Err(e) => {
                debug!("rejected {mv}: {e}");
                self.notice = Some(Notice {
                    text: CHEATING_MESSAGE.to_owned(),
                    style: style::WARNING,
                    expires_at: now + NOTICE_DURATION,
                });
            }
        }
    }

    fn show_hint(&mut self, now: Instant) {
        let Some(hint) = self.session.hint() else {
            return;
        };
        let text = match hint.kind() {
            Some(MoveKind::First) => format!("Hint: take {} from the first pile", hint.first_delta()),
            Some(MoveKind::Second) => {
                format!("Hint: take {} from the second pile", hint.second_delta())
            }
            _ => format!("Hint: take {} from both piles", hint.first_delta()),
        };
        self.notice = Some(Notice {
            text,
            style: style::DEFAULT,
            expires_at: now + NOTICE_DURATION,
        });
    }

    fn rematch(&mut self) {
        self.recorder.capture(&self.session);
        if self.session.reset().is_ok() {
            self.amount = AmountInput::default();
            self.notice = None;
            self.ai_due = None;
        }
    }

    fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.expires_at <= now) {
            self.notice = None;
        }
        if self.ai_due.is_some_and(|due| due <= now) {
            self.ai_due = None;
            if let Err(e) = self.session.apply_automated_move() {
                debug!("automated move skipped: {e}");
            }
        }
    }

    fn status_line(&self) -> Line<'_> {
        if let Some(notice) = &self.notice {
            return Line::styled(notice.text.as_str(), notice.style);
        }
        match self.session.state() {
            SessionState::Terminal {
                winner: Actor::Human,
            } => Line::styled("You win!", style::WIN),
            SessionState::Terminal {
                winner: Actor::Automated,
            } => Line::styled("AI wins!", style::LOSS),
            SessionState::AwaitingAutomatedMove => Line::styled("AI is thinking...", style::DIM),
            SessionState::AwaitingHumanMove => Line::styled("Your move", style::DEFAULT),
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(TICK_INTERVAL));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) {
        if let Some(key) = event.as_key_event()
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key.code, Instant::now());
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [streak_area, piles_area, amount_area, status_area, log_area, help_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(PilesDisplay::HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .spacing(1)
            .areas(frame.area());

        let streak = Text::from(format!(
            "Losing streak: {}",
            self.session.losing_streak()
        ))
        .style(style::DEFAULT)
        .centered();

        let border_style = if self.session.is_terminal() {
            style::DIM
        } else {
            style::DEFAULT
        };
        let piles = PilesDisplay::new(self.session.position()).border_style(border_style);

        let amount_style = if self.accepts_human_move() {
            style::PILE
        } else {
            style::DIM
        };
        let amount = Line::from(vec![
            Span::styled("Amount: ", style::DEFAULT),
            Span::styled(self.amount.value.to_string(), amount_style),
        ])
        .centered();

        let help_text = if self.session.is_terminal() {
            "Controls: R (Rematch) | Q (Quit)"
        } else {
            "Controls: F S B (Reduce First/Second/Both) | 0-9 + - (Amount) | H (Hint) | Q (Quit)"
        };
        let help = Text::from(help_text).style(style::DIM).centered();

        frame.render_widget(streak, streak_area);
        frame.render_widget(piles, piles_area);
        frame.render_widget(amount, amount_area);
        frame.render_widget(self.status_line().centered(), status_area);
        frame.render_widget(TurnLogDisplay::new(self.session.history()), log_area);
        frame.render_widget(help, help_area);
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.tick(Instant::now());
    }
}
