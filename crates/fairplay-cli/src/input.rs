//! Parsing of the player's menu input.

use fairplay_core::MoveSet;

/// One line of player input, interpreted
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Move(String),
    Exit,
    Help,
    Invalid,
}

/// `0` exits, `?` asks for help, `1..=n` picks by menu number and an exact
/// label picks by name.
pub fn parse_selection(input: &str, moves: &MoveSet) -> Selection {
    let input = input.trim();
    match input {
        "0" => return Selection::Exit,
        "?" => return Selection::Help,
        _ => {}
    }

    if let Ok(number) = input.parse::<usize>() {
        return match number.checked_sub(1).and_then(|i| moves.index(i)) {
            Some(index) => Selection::Move(moves.label(index).to_string()),
            None => Selection::Invalid,
        };
    }

    if moves.contains(input) {
        Selection::Move(input.to_string())
    } else {
        Selection::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_menu_numbers_are_one_based() {
        assert_eq!(parse_selection("1", &moves()), Selection::Move("Rock".into()));
        assert_eq!(parse_selection("3", &moves()), Selection::Move("Scissors".into()));
    }

    #[test]
    fn test_out_of_range_number() {
        assert_eq!(parse_selection("4", &moves()), Selection::Invalid);
        assert_eq!(parse_selection("-1", &moves()), Selection::Invalid);
    }

    #[test]
    fn test_exit_and_help() {
        assert_eq!(parse_selection("0", &moves()), Selection::Exit);
        assert_eq!(parse_selection(" ? ", &moves()), Selection::Help);
    }

    #[test]
    fn test_label_selection_is_exact() {
        assert_eq!(parse_selection("Paper", &moves()), Selection::Move("Paper".into()));
        assert_eq!(parse_selection("paper", &moves()), Selection::Invalid);
        assert_eq!(parse_selection("", &moves()), Selection::Invalid);
    }
}
