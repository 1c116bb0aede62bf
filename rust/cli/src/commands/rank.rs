//! `rank` command: evaluate a hand given as text.

use casino_engine::cards::parse_cards;
use casino_engine::hand::best_hand;
use std::collections::HashSet;
use std::io::Write;

use crate::error::CliError;
use crate::ui;

/// Ranks the best five-card hand among 5 to 7 cards.
///
/// Cards may be given as separate arguments or in one quoted string.
pub fn handle_rank_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let text = cards.join(" ");
    let cards = parse_cards(&text)?;
    if !(5..=7).contains(&cards.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = cards
        .iter()
        .filter(|card| !seen.insert(**card))
        .map(ToString::to_string)
        .collect();
    if !duplicates.is_empty() {
        duplicates.sort();
        duplicates.dedup();
        return Err(CliError::InvalidInput(format!(
            "Duplicate card(s) detected: {}",
            duplicates.join(", ")
        )));
    }
    let rank = best_hand(&cards)?;
    writeln!(out, "{}", ui::format_cards(&cards))?;
    writeln!(out, "{}", rank)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(args: &[&str]) -> Result<String, CliError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_rank_command(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn ranks_seven_cards() {
        let out = rank(&["Ah 2h 3h 4h 5h", "Kc", "Kd"]).unwrap();
        assert!(out.contains("Straight Flush [5]"), "{out}");
    }

    #[test]
    fn rejects_wrong_count() {
        assert!(matches!(
            rank(&["Ah", "Kd", "Qc"]),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_repeated_cards() {
        match rank(&["As As As As As"]) {
            Err(CliError::InvalidInput(msg)) => assert_eq!(msg, "Duplicate card(s) detected: As"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
        assert!(matches!(
            rank(&["Ah Kd Qc Js Th", "Kd"]),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_bad_card_text() {
        assert!(matches!(rank(&["Ah Kd Qc Js 1x"]), Err(CliError::Engine(_))));
    }
}
