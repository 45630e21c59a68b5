use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::data::{WordListName, load_quiz};
use crate::error::{Fallible, GameError};
use crate::games;
use crate::games::flashcard::{DEFAULT_MAX_WORDS, DEFAULT_TIME_LIMIT};
use crate::session::flashcard::FlashcardConfig;
use crate::shuffle::Weighting;

#[derive(Parser)]
#[command(name = "quiz-games", version, about = "Terminal quiz and flashcard games")]
struct Cli
{
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command
{
    /// List available games.
    List,
    /// Timed flashcard drill.
    Flashcards(FlashcardArgs),
    /// Answer questions to uncover a hidden picture.
    Reveal(RevealArgs),
}

#[derive(Args, Clone, Debug)]
struct FlashcardArgs
{
    /// Session length in seconds.
    #[arg(long = "time", default_value_t = DEFAULT_TIME_LIMIT)]
    time_limit: u32,
    /// Stop after this many words.
    #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,
    #[arg(long, value_enum, default_value_t = Weighting::Fixed)]
    weighting: Weighting,
    /// Preset word list.
    #[arg(long, value_enum, default_value_t = WordListName::Seno)]
    list: WordListName,
}

impl Default for FlashcardArgs
{
    fn default() -> Self
    {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            max_words: DEFAULT_MAX_WORDS,
            weighting: Weighting::default(),
            list: WordListName::default(),
        }
    }
}

#[derive(Args, Clone, Debug, Default)]
struct RevealArgs
{
    /// Directory holding keywords.json and questions.json.
    #[arg(long)]
    data: Option<PathBuf>,
}

pub fn entrypoint() -> Fallible<()>
{
    let cli = Cli::parse();
    match cli.command {
        None => interactive_menu(),
        Some(Command::List) => {
            list_games();
            Ok(())
        }
        Some(Command::Flashcards(args)) => run_flashcards(&args),
        Some(Command::Reveal(args)) => run_reveal(&args),
    }
}

fn run_flashcards(args: &FlashcardArgs) -> Fallible<()>
{
    let config = FlashcardConfig::new(args.time_limit, args.max_words, args.weighting)?;
    games::flashcard::run_with_config(config, args.list)
}

fn run_reveal(args: &RevealArgs) -> Fallible<()>
{
    let data = load_quiz(args.data.as_deref());
    games::reveal::run_with_data(&data)
}

fn run_game(name: &str) -> Fallible<()>
{
    match name {
        "flashcards" => run_flashcards(&FlashcardArgs::default()),
        "reveal" => run_reveal(&RevealArgs::default()),
        _ => Err(GameError::UnknownGame(name.to_string())),
    }
}

fn interactive_menu() -> Fallible<()>
{
    let registry = games::registry();
    println!("Quiz Games");
    println!();
    println!("Select a game:");
    for (idx, game) in registry.iter().enumerate() {
        println!("  {}. {} - {}", idx + 1, game.name, game.description);
    }
    println!();
    print!("Enter number or name (default 1, q to quit): ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let choice = input.trim();

    if choice.is_empty() {
        return run_game(registry[0].name);
    }
    if choice.eq_ignore_ascii_case("q") {
        return Ok(());
    }
    if let Ok(index) = choice.parse::<usize>() {
        if index >= 1 && index <= registry.len() {
            return run_game(registry[index - 1].name);
        }
    }

    match games::find(choice) {
        Some(name) => run_game(name),
        None => Err(GameError::UnknownGame(choice.to_string())),
    }
}

fn list_games()
{
    println!("Available games:");
    for game in games::registry() {
        println!("  {:<10} - {}", game.name, game.description);
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent()
    {
        Cli::command().debug_assert();
    }

    #[test]
    fn flashcard_options_parse() -> Result<(), clap::Error>
    {
        let cli = Cli::try_parse_from([
            "quiz-games",
            "flashcards",
            "--time",
            "90",
            "--max-words",
            "5",
            "--weighting",
            "short",
            "--list",
            "zenith",
        ])?;
        match cli.command {
            Some(Command::Flashcards(args)) => {
                assert_eq!(args.time_limit, 90);
                assert_eq!(args.max_words, 5);
                assert_eq!(args.weighting, Weighting::InverseLength);
                assert_eq!(args.list, WordListName::Zenith);
            }
            _ => panic!("expected flashcards command"),
        }
        Ok(())
    }

    #[test]
    fn flashcard_defaults() -> Result<(), clap::Error>
    {
        let cli = Cli::try_parse_from(["quiz-games", "flashcards"])?;
        match cli.command {
            Some(Command::Flashcards(args)) => {
                assert_eq!(args.time_limit, DEFAULT_TIME_LIMIT);
                assert_eq!(args.max_words, DEFAULT_MAX_WORDS);
                assert_eq!(args.weighting, Weighting::Fixed);
                assert_eq!(args.list, WordListName::Seno);
            }
            _ => panic!("expected flashcards command"),
        }
        Ok(())
    }

    #[test]
    fn zero_time_limit_is_rejected()
    {
        let args = FlashcardArgs {
            time_limit: 0,
            ..FlashcardArgs::default()
        };
        assert!(matches!(
            run_flashcards(&args),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn unknown_weighting_is_a_parse_error()
    {
        let parsed = Cli::try_parse_from(["quiz-games", "flashcards", "--weighting", "random"]);
        assert!(parsed.is_err());
    }
}
