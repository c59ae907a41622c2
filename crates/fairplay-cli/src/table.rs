//! Help screen: the outcome table for a move set.

use fairplay_core::{MoveSet, WinnerResolver};

const CORNER: &str = "PC \\ USER";

/// Bordered table, one row per computer move, one column per player move.
/// Cells read from the player's side.
pub fn render(moves: &MoveSet) -> String {
    let outcomes = WinnerResolver::new(moves).table();

    let mut rows: Vec<Vec<&str>> = Vec::with_capacity(moves.len() + 1);
    rows.push(std::iter::once(CORNER).chain(moves.iter()).collect());
    for (pc_move, row) in moves.iter().zip(&outcomes) {
        rows.push(
            std::iter::once(pc_move)
                .chain(row.iter().map(|o| o.as_str()))
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..=moves.len())
        .map(|col| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0))
        .collect();

    let border: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .collect::<String>()
        + "+\n";

    let mut out = border.clone();
    for (i, row) in rows.iter().enumerate() {
        for (cell, width) in row.iter().zip(&widths) {
            out.push_str(&format!("| {:<width$} ", cell, width = width));
        }
        out.push_str("|\n");
        if i == 0 {
            out.push_str(&border);
        }
    }
    out.push_str(&border);
    out
}

/// Two worked examples using the first three moves
pub fn examples(moves: &MoveSet) -> Vec<String> {
    let resolver = WinnerResolver::new(moves);
    let labels = moves.labels();
    let first = &labels[0];

    labels[1..3]
        .iter()
        .filter_map(|other| {
            let outcome = resolver.resolve(first, other).ok()?;
            Some(format!(
                "If you choose {} and the computer chooses {}, you {}",
                first,
                other,
                outcome.as_str().to_lowercase()
            ))
        })
        .collect()
}
