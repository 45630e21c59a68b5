use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::ThreadRng;
use rand::thread_rng;

use crate::data::WordListName;
use crate::error::Fallible;
use crate::session::flashcard::{Drill, FlashcardConfig, FlashcardSession, Phase};
use crate::session::format_clock;
use crate::terminal::{TICK_MS, TerminalGuard, is_quit, poll_keys, progress_bar};

const SECOND: Duration = Duration::from_secs(1);
const BAR_WIDTH: usize = 30;

pub const DEFAULT_TIME_LIMIT: u32 = 60;
pub const DEFAULT_MAX_WORDS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action
{
    Quit,
    Start,
    Score(bool),
    Reset,
}

pub fn run_with_config(config: FlashcardConfig, list: WordListName) -> Fallible<()>
{
    let words = list.words();
    let mut term = TerminalGuard::enter()?;
    let mut drill: Drill<ThreadRng> = Drill::default();
    let mut next_second = Instant::now() + SECOND;
    let mut last_draw: Option<Instant> = None;

    loop {
        for key in poll_keys()? {
            match key_action(drill.phase(), &key) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Start) => {
                    drill.start(config, &words, thread_rng())?;
                    next_second = Instant::now() + SECOND;
                }
                Some(Action::Score(known)) => {
                    drill.score(known)?;
                }
                Some(Action::Reset) => drill.reset(),
                None => {}
            }
        }

        let now = Instant::now();
        while drill.phase() == Some(Phase::Running) && now >= next_second {
            drill.tick();
            next_second += SECOND;
        }

        if last_draw.is_none_or(|at| at.elapsed() >= Duration::from_millis(TICK_MS)) {
            let lines = match drill.session() {
                None => idle_lines(&config, list, words.len()),
                Some(session) => match session.phase() {
                    Phase::Running => running_lines(session),
                    Phase::Finished(_) => summary_lines(session),
                },
            };
            term.draw(&lines)?;
            last_draw = Some(Instant::now());
        }

        std::thread::sleep(Duration::from_millis(1));
    }
}

fn key_action(phase: Option<Phase>, key: &KeyEvent) -> Option<Action>
{
    if is_quit(key) {
        return Some(Action::Quit);
    }
    match (phase, key.code) {
        (None, KeyCode::Enter) => Some(Action::Start),
        (Some(Phase::Running), KeyCode::Char('k' | 'y') | KeyCode::Right) => {
            Some(Action::Score(true))
        }
        (Some(Phase::Running), KeyCode::Char('u' | 'n') | KeyCode::Left) => {
            Some(Action::Score(false))
        }
        (Some(_), KeyCode::Char('r')) => Some(Action::Reset),
        (Some(Phase::Finished(_)), KeyCode::Enter) => Some(Action::Reset),
        (Some(Phase::Finished(_)), KeyCode::Char(' ')) => Some(Action::Quit),
        _ => None,
    }
}

fn idle_lines(config: &FlashcardConfig, list: WordListName, list_len: usize) -> Vec<String>
{
    vec![
        "Quiz Games - Flashcard Drill".to_string(),
        String::new(),
        format!("Word list: {list} ({list_len} words)"),
        format!("Time limit: {}", format_clock(config.time_limit())),
        format!("Max words: {}", config.max_words()),
        format!("Weighting: {}", config.weighting()),
        String::new(),
        "Press ENTER to start, ESC to quit.".to_string(),
    ]
}

fn running_lines<R>(session: &FlashcardSession<R>) -> Vec<String>
{
    vec![
        format!(
            "Score: {}  {}",
            session.score_line(),
            progress_bar(session.progress(), BAR_WIDTH)
        ),
        format!(
            "Word {}/{}",
            session.shown().len() + 1,
            session.max_words()
        ),
        String::new(),
        format!("    {}", session.current().unwrap_or_default()),
        String::new(),
        format!("Time left: {}", format_clock(session.remaining_secs())),
        "k/Right: known  u/Left: unknown  r: reset  ESC: quit".to_string(),
    ]
}

fn summary_lines<R>(session: &FlashcardSession<R>) -> Vec<String>
{
    let mut lines = vec![format!(
        "Game Over! You got {} words correct!",
        session.known().len()
    )];
    if let Some(outcome) = session.outcome() {
        lines.push(outcome.describe().to_string());
    }
    lines.push(String::new());
    for (idx, scored) in session.shown().iter().enumerate() {
        let mark = if scored.known { "\u{2705}" } else { "\u{274c}" };
        lines.push(format!("{:>3}. {} {}", idx + 1, scored.word, mark));
    }
    lines.push(String::new());
    lines.push("Press ENTER or r to play again, SPACE to exit.".to_string());
    lines
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::session::Outcome;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent
    {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_actions_per_phase()
    {
        assert_eq!(key_action(None, &key(KeyCode::Enter)), Some(Action::Start));
        assert_eq!(key_action(None, &key(KeyCode::Char('k'))), None);

        let running = Some(Phase::Running);
        assert_eq!(
            key_action(running, &key(KeyCode::Char('k'))),
            Some(Action::Score(true))
        );
        assert_eq!(key_action(running, &key(KeyCode::Left)), Some(Action::Score(false)));
        assert_eq!(key_action(running, &key(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(key_action(running, &key(KeyCode::Enter)), None);

        let finished = Some(Phase::Finished(Outcome::TimeExpired));
        assert_eq!(key_action(finished, &key(KeyCode::Char('k'))), None);
        assert_eq!(key_action(finished, &key(KeyCode::Enter)), Some(Action::Reset));
        assert_eq!(key_action(finished, &key(KeyCode::Esc)), Some(Action::Quit));
    }
}
