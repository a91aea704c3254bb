use ael_core::{BracketKind, join_tokens, tokenize};
use ael_lib::TitleFormatter;

/// Drops bracketed tags, so `Final Fantasy VII (USA) [!]` shows as
/// `Final Fantasy VII`. Names made only of tags are kept as they are.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CleanTitle;

impl TitleFormatter for CleanTitle {
    fn format_title(&self, name: &str) -> String {
        let tokens = tokenize(name);
        let cleaned = join_tokens(tokens.iter().filter(|t| t.kind == BracketKind::Plain));
        if cleaned.is_empty() {
            name.trim().to_string()
        } else {
            cleaned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        assert_eq!(CleanTitle.format_title("Final Fantasy VII (USA) [!]"), "Final Fantasy VII");
        assert_eq!(CleanTitle.format_title("Tomb Raider (Europe) (Disc 1)"), "Tomb Raider");
    }

    #[test]
    fn keeps_text_between_tags() {
        assert_eq!(CleanTitle.format_title("[BIOS] PSX (v3.0)"), "PSX");
        assert_eq!(CleanTitle.format_title("Game (USA) - Extra {hack}"), "Game - Extra");
    }

    #[test]
    fn tag_only_names_survive() {
        assert_eq!(CleanTitle.format_title("[BIOS]"), "[BIOS]");
        assert_eq!(CleanTitle.format_title(""), "");
    }
}
