use log::{debug, info};
use rand::Rng;

use crate::error::{Fallible, GameError, invalid_config};
use crate::session::Outcome;
use crate::shuffle::{Weighting, WeightedDeck};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlashcardConfig
{
    time_limit: u32,
    max_words: usize,
    weighting: Weighting,
}

impl FlashcardConfig
{
    pub fn new(time_limit: u32, max_words: usize, weighting: Weighting) -> Fallible<Self>
    {
        let config = Self {
            time_limit,
            max_words,
            weighting,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Fallible<()>
    {
        if self.time_limit == 0 {
            return invalid_config("time limit must be positive");
        }
        if self.max_words == 0 {
            return invalid_config("max word count must be positive");
        }
        Ok(())
    }

    pub fn time_limit(&self) -> u32
    {
        self.time_limit
    }

    pub fn max_words(&self) -> usize
    {
        self.max_words
    }

    pub fn weighting(&self) -> Weighting
    {
        self.weighting
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredWord
{
    pub word: String,
    pub known: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase
{
    Running,
    Finished(Outcome),
}

/// One flashcard drill, from start to its terminal outcome.
///
/// The countdown only advances through [`FlashcardSession::tick`], so dropping
/// the session (see [`Drill::reset`]) leaves nothing running.
pub struct FlashcardSession<R>
{
    deck: WeightedDeck<String, R>,
    current: Option<String>,
    shown: Vec<ScoredWord>,
    known: Vec<String>,
    unknown: Vec<String>,
    remaining_secs: u32,
    max_words: usize,
    phase: Phase,
}

impl<R> FlashcardSession<R>
where
    R: Rng,
{
    pub fn start(config: FlashcardConfig, words: &[String], rng: R) -> Fallible<Self>
    {
        config.validate()?;
        if words.is_empty() {
            return invalid_config("word list is empty");
        }
        let max_words = config.max_words.min(words.len());
        if max_words < config.max_words {
            debug!(
                "Word cap {} exceeds list size, capping at {max_words}",
                config.max_words
            );
        }
        info!(
            "Starting flashcard drill: {} words, {}s, weighting {}",
            words.len(),
            config.time_limit,
            config.weighting
        );

        let mut session = Self {
            deck: WeightedDeck::new(words.iter().cloned(), config.weighting, rng),
            current: None,
            shown: Vec::new(),
            known: Vec::new(),
            unknown: Vec::new(),
            remaining_secs: config.time_limit,
            max_words,
            phase: Phase::Running,
        };
        session.advance()?;
        Ok(session)
    }

    /// Scores the displayed word. Returns `false` once the session is finished.
    pub fn score(&mut self, known: bool) -> Fallible<bool>
    {
        if self.phase != Phase::Running {
            return Ok(false);
        }
        self.record_current(known);
        if self.shown.len() >= self.max_words {
            self.finish(Outcome::CapReached);
        } else {
            self.advance()?;
        }
        Ok(true)
    }

    /// One second of the countdown.
    pub fn tick(&mut self) -> Phase
    {
        if self.phase == Phase::Running {
            self.remaining_secs = self.remaining_secs.saturating_sub(1);
            if self.remaining_secs == 0 {
                self.record_current(false);
                self.finish(Outcome::TimeExpired);
            }
        }
        self.phase
    }

    fn advance(&mut self) -> Fallible<()>
    {
        let next = self.deck.draw().ok_or(GameError::DeckExhausted)?;
        self.current = Some(next);
        Ok(())
    }

    fn record_current(&mut self, known: bool)
    {
        let Some(word) = self.current.take() else {
            return;
        };
        if known {
            self.known.push(word.clone());
        } else {
            self.unknown.push(word.clone());
        }
        self.shown.push(ScoredWord { word, known });
    }

    fn finish(&mut self, outcome: Outcome)
    {
        info!(
            "Flashcard drill finished ({outcome:?}): {}/{} known",
            self.known.len(),
            self.shown.len()
        );
        self.phase = Phase::Finished(outcome);
    }
}

impl<R> FlashcardSession<R>
{
    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome>
    {
        match self.phase {
            Phase::Running => None,
            Phase::Finished(outcome) => Some(outcome),
        }
    }

    pub fn current(&self) -> Option<&str>
    {
        self.current.as_deref()
    }

    pub fn remaining_secs(&self) -> u32
    {
        self.remaining_secs
    }

    pub fn max_words(&self) -> usize
    {
        self.max_words
    }

    pub fn shown(&self) -> &[ScoredWord]
    {
        &self.shown
    }

    pub fn known(&self) -> &[String]
    {
        &self.known
    }

    pub fn unknown(&self) -> &[String]
    {
        &self.unknown
    }

    pub fn progress(&self) -> f64
    {
        if self.shown.is_empty() {
            0.0
        } else {
            self.known.len() as f64 / self.shown.len() as f64
        }
    }

    pub fn score_line(&self) -> String
    {
        format!("{}/{}", self.known.len(), self.shown.len())
    }
}

/// Owns the current drill, if any. No session means idle.
pub struct Drill<R>
{
    session: Option<FlashcardSession<R>>,
}

impl<R> Default for Drill<R>
{
    fn default() -> Self
    {
        Self { session: None }
    }
}

impl<R> Drill<R>
where
    R: Rng,
{
    /// Replaces any current session. On error the drill is left as it was.
    pub fn start(&mut self, config: FlashcardConfig, words: &[String], rng: R) -> Fallible<()>
    {
        self.session = Some(FlashcardSession::start(config, words, rng)?);
        Ok(())
    }

    pub fn score(&mut self, known: bool) -> Fallible<bool>
    {
        match self.session.as_mut() {
            Some(session) => session.score(known),
            None => Ok(false),
        }
    }

    pub fn tick(&mut self) -> Option<Phase>
    {
        self.session.as_mut().map(|session| session.tick())
    }
}

impl<R> Drill<R>
{
    pub fn reset(&mut self)
    {
        if self.session.take().is_some() {
            info!("Flashcard drill reset");
        }
    }

    pub fn session(&self) -> Option<&FlashcardSession<R>>
    {
        self.session.as_ref()
    }

    pub fn phase(&self) -> Option<Phase>
    {
        self.session.as_ref().map(|session| session.phase())
    }

    pub fn is_idle(&self) -> bool
    {
        self.session.is_none()
    }
}
