use super::*;
use proptest::prelude::*;

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn splits_title_and_tags() {
    let tokens = tokenize("Final Fantasy VII (USA) (Disc 1) [!] {Extra}");
    assert_eq!(
        texts(&tokens),
        vec!["Final Fantasy VII", "(USA)", "(Disc 1)", "[!]", "{Extra}"]
    );
    let kinds: Vec<BracketKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BracketKind::Plain,
            BracketKind::Paren,
            BracketKind::Paren,
            BracketKind::Square,
            BracketKind::Curly,
        ]
    );
}

#[test]
fn empty_input_gives_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
}

#[test]
fn drops_trurip_dash_separator() {
    let tokens = tokenize("Final Fantasy I (USA) - (Disc 1 of 2)");
    assert_eq!(texts(&tokens), vec!["Final Fantasy I", "(USA)", "(Disc 1 of 2)"]);
}

#[test]
fn dash_attached_to_text_is_kept() {
    let tokens = tokenize("Final Fantasy I - (Disc 1 of 2)");
    assert_eq!(texts(&tokens), vec!["Final Fantasy I -", "(Disc 1 of 2)"]);
}

#[test]
fn drops_dash_between_tags() {
    let tokens = tokenize("Game (USA) - (Disc 1 of 2) - [!]");
    assert_eq!(texts(&tokens), vec!["Game", "(USA)", "(Disc 1 of 2)", "[!]"]);
}

#[test]
fn keeps_dashes_inside_text() {
    let tokens = tokenize("Zelda - A Link to the Past (USA)");
    assert_eq!(texts(&tokens), vec!["Zelda - A Link to the Past", "(USA)"]);
}

#[test]
fn leading_bracket_tag() {
    let tokens = tokenize("[BIOS] PSX bios (EU)");
    assert_eq!(texts(&tokens), vec!["[BIOS]", "PSX bios", "(EU)"]);
    assert_eq!(tokens[0].kind, BracketKind::Square);
}

#[test]
fn unclosed_bracket_is_skipped() {
    let tokens = tokenize("Broken (USA");
    assert_eq!(texts(&tokens), vec!["Broken", "USA"]);
    assert!(tokens.iter().all(|t| t.kind == BracketKind::Plain));

    let tokens = tokenize("Game [a (Disc 1)");
    assert_eq!(texts(&tokens), vec!["Game", "a", "(Disc 1)"]);
    assert_eq!(tokens[2].kind, BracketKind::Paren);
}

#[test]
fn adjacent_tags_without_spaces() {
    let tokens = tokenize("Game(USA)(Rev A)");
    assert_eq!(texts(&tokens), vec!["Game", "(USA)", "(Rev A)"]);
}

#[test]
fn first_closer_ends_the_tag() {
    let tokens = tokenize("Game (a (b)) c");
    assert_eq!(texts(&tokens), vec!["Game", "(a (b)", ") c"]);
}

#[test]
fn join_tokens_uses_single_spaces() {
    let tokens = tokenize("Game   (USA)  [!]");
    assert_eq!(join_tokens(&tokens), "Game (USA) [!]");
}

proptest! {
    #[test]
    fn never_yields_dash_or_empty_tokens(s in "[ a-zA-Z0-9()\\[\\]{}-]{0,40}") {
        for token in tokenize(&s) {
            prop_assert!(!token.text.is_empty());
            prop_assert_ne!(token.text.as_str(), "-");
            prop_assert_eq!(token.text.trim(), token.text.as_str());
        }
    }

    #[test]
    fn retokenizing_keeps_bracketed_tokens(s in "[ a-zA-Z0-9()\\[\\]{}-]{0,40}") {
        let first = tokenize(&s);
        let second = tokenize(&join_tokens(&first));
        let bracketed = |tokens: &[Token]| -> Vec<Token> {
            tokens
                .iter()
                .filter(|t| t.kind != BracketKind::Plain)
                .cloned()
                .collect()
        };
        prop_assert_eq!(bracketed(&first), bracketed(&second));
        prop_assert_eq!(join_tokens(&first), join_tokens(&second));
    }
}
