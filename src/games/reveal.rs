use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::thread_rng;

use crate::data::QuizData;
use crate::error::Fallible;
use crate::session::reveal::{
    AnswerOutcome, CellState, GRID_CELLS, GRID_COLUMNS, KeywordOutcome, RevealSession,
};
use crate::terminal::{TICK_MS, TerminalGuard, ansi_bg, poll_keys};

const CELL_WIDTH: usize = 14;

enum Focus
{
    Grid,
    Answer
    {
        index: usize,
        buffer: String,
    },
    Keyword
    {
        buffer: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Control
{
    Continue,
    Restart,
    Quit,
}

struct Board
{
    session: RevealSession,
    selected: usize,
    focus: Focus,
    message: Option<String>,
}

pub fn run_with_data(data: &QuizData) -> Fallible<()>
{
    let mut term = TerminalGuard::enter()?;
    let mut rng = thread_rng();
    let session = RevealSession::start(&data.keywords, &data.questions, &mut rng)?;
    let mut board = Board::new(session);
    let mut last_draw: Option<Instant> = None;

    loop {
        for key in poll_keys()? {
            match board.handle_key(&key)? {
                Control::Continue => {}
                Control::Restart => {
                    board = Board::new(RevealSession::start(
                        &data.keywords,
                        &data.questions,
                        &mut rng,
                    )?);
                }
                Control::Quit => return Ok(()),
            }
        }

        if last_draw.is_none_or(|at| at.elapsed() >= Duration::from_millis(TICK_MS)) {
            term.draw(&board.lines())?;
            last_draw = Some(Instant::now());
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

impl Board
{
    fn new(session: RevealSession) -> Self
    {
        Self {
            session,
            selected: 0,
            focus: Focus::Grid,
            message: None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Fallible<Control>
    {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Control::Quit);
        }

        match &mut self.focus {
            Focus::Grid => return Ok(self.handle_grid_key(key.code)),
            Focus::Answer { index, buffer } => match key.code {
                KeyCode::Esc => self.focus = Focus::Grid,
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(ch) => buffer.push(ch),
                KeyCode::Enter => {
                    let (index, given) = (*index, std::mem::take(buffer));
                    self.focus = Focus::Grid;
                    self.submit_answer(index, &given)?;
                }
                _ => {}
            },
            Focus::Keyword { buffer } => match key.code {
                KeyCode::Esc => self.focus = Focus::Grid,
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(ch) => buffer.push(ch),
                KeyCode::Enter => {
                    let given = std::mem::take(buffer);
                    self.submit_keyword(&given);
                }
                _ => {}
            },
        }
        Ok(Control::Continue)
    }

    fn handle_grid_key(&mut self, code: KeyCode) -> Control
    {
        let rows = GRID_CELLS / GRID_COLUMNS;
        let (row, col) = (self.selected / GRID_COLUMNS, self.selected % GRID_COLUMNS);
        match code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => return Control::Restart,
            KeyCode::Left => {
                self.selected = row * GRID_COLUMNS + (col + GRID_COLUMNS - 1) % GRID_COLUMNS;
            }
            KeyCode::Right => self.selected = row * GRID_COLUMNS + (col + 1) % GRID_COLUMNS,
            KeyCode::Up => self.selected = ((row + rows - 1) % rows) * GRID_COLUMNS + col,
            KeyCode::Down => self.selected = ((row + 1) % rows) * GRID_COLUMNS + col,
            KeyCode::Enter if self.session.outcome().is_none() => {
                if self.session.is_locked(self.selected) {
                    self.message = Some(format!(
                        "Question {} is already answered.",
                        self.selected + 1
                    ));
                } else {
                    self.message = None;
                    self.focus = Focus::Answer {
                        index: self.selected,
                        buffer: String::new(),
                    };
                }
            }
            KeyCode::Tab if self.session.outcome().is_none() => {
                self.message = None;
                self.focus = Focus::Keyword {
                    buffer: String::new(),
                };
            }
            _ => {}
        }
        Control::Continue
    }

    fn submit_answer(&mut self, index: usize, given: &str) -> Fallible<()>
    {
        self.message = match self.session.submit_answer(index, given)? {
            AnswerOutcome::Correct => {
                Some(format!("Correct! Clue: {}", self.session.clue(index)))
            }
            AnswerOutcome::Incorrect => {
                Some(format!("Wrong answer. Cell {} is lost.", index + 1))
            }
            AnswerOutcome::Locked => None,
        };
        if let Some(outcome) = self.session.outcome() {
            self.message = Some(outcome.describe().to_string());
        }
        Ok(())
    }

    fn submit_keyword(&mut self, given: &str)
    {
        match self.session.submit_keyword(given) {
            KeywordOutcome::Correct => {
                self.message = Some(format!(
                    "Correct! The keyword is: {}",
                    self.session.keyword().keyword
                ));
                self.focus = Focus::Grid;
            }
            KeywordOutcome::Incorrect => {
                self.message = Some("Incorrect. Try again!".to_string());
            }
            KeywordOutcome::Ignored => self.focus = Focus::Grid,
        }
    }

    fn lines(&self) -> Vec<String>
    {
        let session = &self.session;
        let mut lines = vec![
            "Quiz Games - Picture Reveal".to_string(),
            format!(
                "Revealed: {}/{}  Lost: {}  Keyword: {} characters",
                session.correct_count(),
                GRID_CELLS,
                session.incorrect_count(),
                session.keyword_len()
            ),
            String::new(),
        ];

        for row in 0..GRID_CELLS / GRID_COLUMNS {
            let mut line = String::new();
            for col in 0..GRID_COLUMNS {
                let index = row * GRID_COLUMNS + col;
                line.push_str(&self.render_cell(index));
                line.push(' ');
            }
            lines.push(line);
        }
        lines.push(String::new());

        match &self.focus {
            Focus::Grid => {
                if let Some(outcome) = session.outcome() {
                    lines.push(outcome.describe().to_string());
                    lines.push(format!(
                        "Keyword: {}  Image: {}",
                        session.keyword().keyword,
                        session.keyword().image_path
                    ));
                } else {
                    lines.push(format!("Selected: {}", session.label(self.selected)));
                }
            }
            Focus::Answer { index, buffer } => {
                if let Some(question) = session.question(*index) {
                    lines.push(format!("Question {}: {}", index + 1, question.question));
                }
                lines.push(format!(
                    "Hint: The answer has {} characters",
                    session.answer_len(*index).unwrap_or_default()
                ));
                lines.push(format!("Answer: {buffer}_"));
            }
            Focus::Keyword { buffer } => {
                lines.push(format!(
                    "Hint: The keyword has {} characters",
                    session.keyword_len()
                ));
                lines.push(format!("Keyword: {buffer}_"));
            }
        }

        if let Some(message) = &self.message {
            lines.push(message.clone());
        } else {
            lines.push(String::new());
        }
        lines.push(match self.focus {
            Focus::Grid => "Arrows: move  ENTER: answer  TAB: guess keyword  r: restart  ESC: quit",
            _ => "ENTER: submit  Backspace: edit  ESC: back",
        }
        .to_string());
        lines
    }

    fn render_cell(&self, index: usize) -> String
    {
        let marker = if index == self.selected { '>' } else { ' ' };
        let text = match self.session.cell(index) {
            CellState::Revealed => self.session.clue(index),
            CellState::Hidden | CellState::Failed => format!("{}", index + 1),
        };
        let text: String = text.chars().take(CELL_WIDTH - 2).collect();
        let body = format!("{marker}{text:^width$}", width = CELL_WIDTH - 1);
        match self.session.cell(index) {
            CellState::Hidden => ansi_bg(&body, 60, 60, 60),
            CellState::Revealed => ansi_bg(&body, 0, 150, 70),
            CellState::Failed => ansi_bg(&body, 200, 0, 0),
        }
    }
}
