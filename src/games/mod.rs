pub mod flashcard;
pub mod reveal;

pub struct GameDescriptor
{
    pub name: &'static str,
    pub description: &'static str,
}

pub fn registry() -> Vec<GameDescriptor>
{
    vec![GameDescriptor {
        name: "flashcards",
        description: "Timed flashcard drill with weighted word order",
    },
    GameDescriptor {
        name: "reveal",
        description: "Answer questions to uncover a hidden picture",
    }]
}

pub fn find(name: &str) -> Option<&'static str>
{
    registry()
        .into_iter()
        .find(|game| game.name.eq_ignore_ascii_case(name))
        .map(|game| game.name)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn lookup_ignores_case()
    {
        assert_eq!(find("Reveal"), Some("reveal"));
        assert_eq!(find("FLASHCARDS"), Some("flashcards"));
        assert_eq!(find("wordle"), None);
    }
}
