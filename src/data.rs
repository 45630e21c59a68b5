use std::{fmt, fs};
use std::path::Path;

use clap::ValueEnum;
use log::{info, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Fallible, GameError};
use crate::session::reveal::{GRID_CELLS, KeywordRecord, QuestionRecord};
use crate::words::{KEYWORDS, QUESTIONS, SENO_WORDS, ZENITH_WORDS};

pub const KEYWORDS_FILE: &str = "keywords.json";
pub const QUESTIONS_FILE: &str = "questions.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum WordListName
{
    #[default]
    Seno,
    Zenith,
}

impl WordListName
{
    pub fn words(self) -> Vec<String>
    {
        let list = match self {
            WordListName::Seno => SENO_WORDS,
            WordListName::Zenith => ZENITH_WORDS,
        };
        list.iter().map(|word| word.to_string()).collect()
    }
}

impl fmt::Display for WordListName
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            WordListName::Seno => f.write_str("seno"),
            WordListName::Zenith => f.write_str("zenith"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuizData
{
    pub keywords: Vec<KeywordRecord>,
    pub questions: Vec<QuestionRecord>,
}

impl QuizData
{
    pub fn builtin() -> Self
    {
        let keywords = KEYWORDS
            .iter()
            .map(|entry| KeywordRecord {
                keyword: entry.keyword.to_string(),
                image_path: entry.image_path.to_string(),
                clues: entry.clues.iter().map(|clue| clue.to_string()).collect(),
            })
            .collect();
        let questions = QUESTIONS
            .iter()
            .map(|(question, answer)| QuestionRecord {
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect();
        Self {
            keywords,
            questions,
        }
    }

    /// A reveal session needs one keyword and a full grid of questions.
    pub fn validate(&self) -> Fallible<()>
    {
        if self.keywords.is_empty() {
            return Err(GameError::EmptyKeywordPool);
        }
        if self.questions.len() < GRID_CELLS {
            return Err(GameError::NotEnoughQuestions {
                needed: GRID_CELLS,
                found: self.questions.len(),
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct KeywordsFile
{
    #[serde(default)]
    keywords: Vec<KeywordRecord>,
}

#[derive(Deserialize)]
struct QuestionsFile
{
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Fallible<T>
{
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| GameError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_quiz_dir(dir: &Path) -> Fallible<QuizData>
{
    let keywords: KeywordsFile = read_json(&dir.join(KEYWORDS_FILE))?;
    let questions: QuestionsFile = read_json(&dir.join(QUESTIONS_FILE))?;
    info!(
        "Loaded {} keywords and {} questions from {}",
        keywords.keywords.len(),
        questions.questions.len(),
        dir.display()
    );
    let data = QuizData {
        keywords: keywords.keywords,
        questions: questions.questions,
    };
    data.validate()?;
    Ok(data)
}

/// Loads quiz data from `dir`, falling back to the built-in set on any failure.
pub fn load_quiz(dir: Option<&Path>) -> QuizData
{
    let Some(dir) = dir else {
        return QuizData::builtin();
    };
    match load_quiz_dir(dir) {
        Ok(data) => data,
        Err(err) => {
            warn!("Error loading quiz data: {err}. Falling back to built-in data.");
            QuizData::builtin()
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use tempfile::tempdir;

    fn questions_json(count: usize) -> String
    {
        let entries: Vec<String> = (0..count)
            .map(|n| format!(r#"{{"question": "{n} + 1?", "answer": "{}"}}"#, n + 1))
            .collect();
        format!(r#"{{"questions": [{}]}}"#, entries.join(", "))
    }

    fn write_quiz(dir: &Path, keywords: &str, questions: &str) -> Fallible<()>
    {
        fs::write(dir.join(KEYWORDS_FILE), keywords)?;
        fs::write(dir.join(QUESTIONS_FILE), questions)?;
        Ok(())
    }

    #[test]
    fn builtin_data_fills_a_grid() -> Fallible<()>
    {
        let data = QuizData::builtin();
        assert!(!data.keywords.is_empty());
        assert!(data.questions.len() >= GRID_CELLS);
        data.validate()
    }

    #[test]
    fn preset_lists_are_distinct()
    {
        let seno = WordListName::Seno.words();
        let zenith = WordListName::Zenith.words();
        assert!(!seno.is_empty());
        assert!(!zenith.is_empty());
        assert_ne!(seno, zenith);
    }

    #[test]
    fn loads_json_with_defaults() -> Fallible<()>
    {
        let dir = tempdir()?;
        write_quiz(
            dir.path(),
            r#"{"keywords": [
                {"keyword": "Moon", "imageDir": "moon.jpg", "clues": ["Night", "Tide"]},
                {"clues": []}
            ]}"#,
            &questions_json(GRID_CELLS),
        )?;

        let data = load_quiz_dir(dir.path())?;
        assert_eq!(data.keywords.len(), 2);
        assert_eq!(data.keywords[0].image_path, "moon.jpg");
        assert_eq!(data.keywords[0].clues, vec!["Night", "Tide"]);
        assert_eq!(data.keywords[1].keyword, "DEFAULT");
        assert_eq!(data.keywords[1].image_path, "image.png");
        assert_eq!(data.questions.len(), GRID_CELLS);
        assert_eq!(data.questions[0].question, "0 + 1?");
        assert_eq!(data.questions[0].answer, "1");
        Ok(())
    }

    #[test]
    fn malformed_json_is_reported() -> Fallible<()>
    {
        let dir = tempdir()?;
        write_quiz(dir.path(), "{ not json", &questions_json(GRID_CELLS))?;
        assert!(matches!(
            load_quiz_dir(dir.path()),
            Err(GameError::Json { .. })
        ));
        Ok(())
    }

    #[test]
    fn missing_files_fall_back_to_builtin() -> Fallible<()>
    {
        let dir = tempdir()?;
        assert!(matches!(load_quiz_dir(dir.path()), Err(GameError::Io(_))));
        let data = load_quiz(Some(dir.path()));
        assert_eq!(data.questions.len(), QUESTIONS.len());
        Ok(())
    }

    #[test]
    fn empty_keyword_pool_falls_back_to_builtin() -> Fallible<()>
    {
        let dir = tempdir()?;
        write_quiz(dir.path(), r#"{"keywords": []}"#, &questions_json(20))?;
        assert!(matches!(
            load_quiz_dir(dir.path()),
            Err(GameError::EmptyKeywordPool)
        ));
        let data = load_quiz(Some(dir.path()));
        assert_eq!(data.keywords.len(), KEYWORDS.len());
        assert_eq!(data.questions.len(), QUESTIONS.len());
        Ok(())
    }

    #[test]
    fn short_question_pool_falls_back_to_builtin() -> Fallible<()>
    {
        let dir = tempdir()?;
        write_quiz(
            dir.path(),
            r#"{"keywords": [{"keyword": "Moon", "imageDir": "moon.jpg"}]}"#,
            &questions_json(GRID_CELLS - 1),
        )?;
        assert!(matches!(
            load_quiz_dir(dir.path()),
            Err(GameError::NotEnoughQuestions { needed: 12, found: 11 })
        ));
        let data = load_quiz(Some(dir.path()));
        assert_eq!(data.keywords[0].keyword, KEYWORDS[0].keyword);
        Ok(())
    }
}
