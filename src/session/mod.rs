pub mod flashcard;
pub mod reveal;

/// Why a session stopped accepting input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome
{
    FullReveal,
    KeywordSolved,
    TimeExpired,
    CapReached,
}

impl Outcome
{
    pub fn describe(self) -> &'static str
    {
        match self {
            Outcome::FullReveal => "You revealed the entire image!",
            Outcome::KeywordSolved => "You guessed the keyword and revealed the entire image!",
            Outcome::TimeExpired => "Time is up.",
            Outcome::CapReached => "Word limit reached.",
        }
    }
}

/// Case-insensitive comparison of a player's input against a stored answer.
/// Only the input is trimmed.
pub fn answers_match(expected: &str, given: &str) -> bool
{
    given.trim().to_lowercase() == expected.to_lowercase()
}

pub fn format_clock(seconds: u32) -> String
{
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn matching_trims_and_folds_case()
    {
        assert!(answers_match("Paris", " paris "));
        assert!(answers_match("Paris", "PARIS"));
        assert!(!answers_match("Paris", "pariss"));
        assert!(answers_match("Hà Nội", "hà nội"));
    }

    #[test]
    fn clock_is_minutes_and_seconds()
    {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(125), "02:05");
    }
}
