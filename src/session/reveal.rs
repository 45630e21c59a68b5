use std::collections::BTreeSet;

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::{Fallible, GameError};
use crate::session::{Outcome, answers_match};

pub const GRID_CELLS: usize = 12;
pub const GRID_COLUMNS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct KeywordRecord
{
    #[serde(default = "default_keyword")]
    pub keyword: String,
    #[serde(rename = "imageDir", alias = "imagePath", default = "default_image")]
    pub image_path: String,
    #[serde(default)]
    pub clues: Vec<String>,
}

fn default_keyword() -> String
{
    "DEFAULT".to_string()
}

fn default_image() -> String
{
    "image.png".to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord
{
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState
{
    Hidden,
    Revealed,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome
{
    Correct,
    Incorrect,
    /// Already answered, or the session is over. Nothing changed.
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordOutcome
{
    Correct,
    Incorrect,
    Ignored,
}

pub struct RevealSession
{
    keyword: KeywordRecord,
    questions: Vec<QuestionRecord>,
    correct: BTreeSet<usize>,
    incorrect: BTreeSet<usize>,
    keyword_solved: bool,
}

impl RevealSession
{
    /// Picks a keyword uniformly and the first twelve questions of a uniform shuffle.
    pub fn start(
        keywords: &[KeywordRecord],
        questions: &[QuestionRecord],
        rng: &mut impl Rng,
    ) -> Fallible<Self>
    {
        if questions.len() < GRID_CELLS {
            return Err(GameError::NotEnoughQuestions {
                needed: GRID_CELLS,
                found: questions.len(),
            });
        }
        let keyword = keywords
            .choose(rng)
            .ok_or(GameError::EmptyKeywordPool)?
            .clone();

        let mut pool = questions.to_vec();
        pool.shuffle(rng);
        pool.truncate(GRID_CELLS);

        info!("Starting picture reveal with image {}", keyword.image_path);
        debug!("Selected keyword {:?} and {} questions", keyword.keyword, pool.len());

        Ok(Self {
            keyword,
            questions: pool,
            correct: BTreeSet::new(),
            incorrect: BTreeSet::new(),
            keyword_solved: false,
        })
    }

    /// Single attempt per question: a wrong answer forfeits the cell for good.
    pub fn submit_answer(&mut self, index: usize, text: &str) -> Fallible<AnswerOutcome>
    {
        let question = self
            .questions
            .get(index)
            .ok_or(GameError::NoSuchQuestion(index))?;
        if self.is_locked(index) || self.outcome().is_some() {
            return Ok(AnswerOutcome::Locked);
        }

        if answers_match(&question.answer, text) {
            self.correct.insert(index);
            debug!("Question {} answered correctly", index + 1);
            if self.correct.len() == GRID_CELLS {
                info!("All cells revealed");
            }
            Ok(AnswerOutcome::Correct)
        } else {
            self.incorrect.insert(index);
            debug!("Question {} forfeited", index + 1);
            Ok(AnswerOutcome::Incorrect)
        }
    }

    pub fn submit_keyword(&mut self, text: &str) -> KeywordOutcome
    {
        if self.outcome().is_some() {
            return KeywordOutcome::Ignored;
        }
        if answers_match(&self.keyword.keyword, text) {
            self.keyword_solved = true;
            info!("Keyword solved");
            KeywordOutcome::Correct
        } else {
            KeywordOutcome::Incorrect
        }
    }

    pub fn outcome(&self) -> Option<Outcome>
    {
        if self.keyword_solved {
            Some(Outcome::KeywordSolved)
        } else if self.correct.len() == GRID_CELLS {
            Some(Outcome::FullReveal)
        } else {
            None
        }
    }

    pub fn is_locked(&self, index: usize) -> bool
    {
        self.correct.contains(&index) || self.incorrect.contains(&index)
    }

    pub fn cell(&self, index: usize) -> CellState
    {
        if self.keyword_solved || self.correct.contains(&index) {
            CellState::Revealed
        } else if self.incorrect.contains(&index) {
            CellState::Failed
        } else {
            CellState::Hidden
        }
    }

    pub fn cells(&self) -> Vec<CellState>
    {
        (0..GRID_CELLS).map(|index| self.cell(index)).collect()
    }

    pub fn clue(&self, index: usize) -> String
    {
        self.keyword
            .clues
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Clue{}", index + 1))
    }

    /// Shown on the question's button: its number until solved, then its clue.
    pub fn label(&self, index: usize) -> String
    {
        if self.correct.contains(&index) {
            self.clue(index)
        } else {
            format!("Question {}", index + 1)
        }
    }

    pub fn question(&self, index: usize) -> Option<&QuestionRecord>
    {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[QuestionRecord]
    {
        &self.questions
    }

    pub fn answer_len(&self, index: usize) -> Option<usize>
    {
        self.question(index)
            .map(|question| question.answer.chars().count())
    }

    pub fn keyword_len(&self) -> usize
    {
        self.keyword.keyword.chars().count()
    }

    pub fn keyword(&self) -> &KeywordRecord
    {
        &self.keyword
    }

    pub fn correct_count(&self) -> usize
    {
        self.correct.len()
    }

    pub fn incorrect_count(&self) -> usize
    {
        self.incorrect.len()
    }
}
