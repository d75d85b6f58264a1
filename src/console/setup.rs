//! Startup prompts: symbol, pieces per player, turn limit.

use super::terminal::Console;
use crate::games::mobility::Symbol;
use crate::settings::{
    SetupError, check_pieces, check_turns, parse_pieces, parse_symbol, parse_turns,
};
use anyhow::Result;
use tracing::{debug, instrument};

/// Asks `question` until `parse` accepts the answer.
///
/// A pre-answer is tried first; if it fails its error is shown and the
/// question is asked as usual. Blank lines re-ask without a message.
fn ask_until_valid<T>(
    console: &mut dyn Console,
    question: &str,
    preset: Option<Result<T, SetupError>>,
    parse: impl Fn(&str) -> Result<T, SetupError>,
) -> Result<T> {
    match preset {
        Some(Ok(value)) => return Ok(value),
        Some(Err(e)) => console.say(&e.to_string())?,
        None => {}
    }
    loop {
        let answer = console.ask(question)?;
        if answer.trim().is_empty() {
            continue;
        }
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(error = %e, "Setup answer rejected");
                console.say(&e.to_string())?;
            }
        }
    }
}

/// Asks which symbol the human plays.
#[instrument(skip(console))]
pub fn ask_symbol(console: &mut dyn Console, preset: Option<Symbol>) -> Result<Symbol> {
    ask_until_valid(
        console,
        "Do you want to be the first player 'X' or the second player 'O'? (X/O)\n",
        preset.map(Ok),
        parse_symbol,
    )
}

/// Asks for the number of pieces per player.
#[instrument(skip(console))]
pub fn ask_pieces(console: &mut dyn Console, side: usize, preset: Option<u32>) -> Result<usize> {
    ask_until_valid(
        console,
        "Please, provide the number of pieces per player:\n",
        preset.map(|n| check_pieces(n, side)),
        |text| parse_pieces(text, side),
    )
}

/// Asks for the turn limit.
#[instrument(skip(console))]
pub fn ask_turns(console: &mut dyn Console, preset: Option<u32>) -> Result<u32> {
    ask_until_valid(
        console,
        "Please, provide the number of turns:\n",
        preset.map(check_turns),
        parse_turns,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use crate::games::mobility::SIDE;
    use std::io::Cursor;

    fn run<T>(script: &str, f: impl FnOnce(&mut dyn Console) -> Result<T>) -> (T, String) {
        let mut term = Terminal::new(Cursor::new(script.to_string()), Vec::new());
        let value = f(&mut term).unwrap();
        let (_, out) = term.into_parts();
        (value, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_symbol_reasks_until_valid() {
        let (symbol, out) = run("\nmaybe\no\n", |c| ask_symbol(c, None));
        assert_eq!(symbol, Symbol::O);
        assert_eq!(out.matches("(X/O)").count(), 3);
        assert_eq!(out.matches("'X' or 'O' as answer").count(), 1);
    }

    #[test]
    fn test_too_many_pieces_reasked() {
        let (pieces, out) = run("25\nten\n24\n", |c| ask_pieces(c, SIDE, None));
        assert_eq!(pieces, 24);
        assert!(out.contains("too many pieces"));
        assert!(out.contains("'ten' is not a positive whole number"));
    }

    #[test]
    fn test_valid_preset_skips_prompt() {
        let (turns, out) = run("", |c| ask_turns(c, Some(4)));
        assert_eq!(turns, 4);
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_preset_falls_back_to_prompt() {
        let (turns, out) = run("3\n", |c| ask_turns(c, Some(0)));
        assert_eq!(turns, 3);
        assert!(out.starts_with("Number of turns cannot be zero"));
        assert!(out.contains("provide the number of turns"));
    }
}
