//! Formatting utilities for terminal output

use crate::core::Board;

/// Draw a board as a boxed grid
///
/// # Examples
/// ```
/// use word_hunt::core::Board;
/// use word_hunt::output::formatters::format_board;
///
/// let board = Board::parse("ab/cd").unwrap();
/// assert_eq!(format_board(&board), "┌───┬───┐\n│ A │ B │\n├───┼───┤\n│ C │ D │\n└───┴───┘");
/// ```
#[must_use]
pub fn format_board(board: &Board) -> String {
    let n = board.size();
    let rule = |left: &str, mid: &str, right: &str| {
        format!("{left}{}{right}", vec!["───"; n].join(mid))
    };

    let mut lines = vec![rule("┌", "┬", "┐")];
    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            lines.push(rule("├", "┼", "┤"));
        }
        let cells: Vec<String> = row.iter().map(|c| format!(" {c} ")).collect();
        lines.push(format!("│{}│", cells.join("│")));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

/// Describe a path as 1-based `(row,col)` steps
///
/// # Examples
/// ```
/// use word_hunt::core::Board;
/// use word_hunt::output::formatters::format_path;
///
/// let board = Board::parse("cat/ats/xxx").unwrap();
/// assert_eq!(format_path(&board, &[0, 1, 2]), "C(1,1) → A(1,2) → T(1,3)");
/// ```
#[must_use]
pub fn format_path(board: &Board, path: &[usize]) -> String {
    path.iter()
        .map(|&i| {
            let (row, col) = board.position(i);
            format!("{}({},{})", board.cells()[i], row + 1, col + 1)
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_has_one_line_per_row_plus_rules() {
        let board = Board::parse("abcdefghijklmnop").unwrap();
        let text = format_board(&board);
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("│ E │ F │ G │ H │"));
    }

    #[test]
    fn empty_path_is_empty() {
        let board = Board::parse("a").unwrap();
        assert_eq!(format_path(&board, &[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_overflow_is_clamped() {
        assert_eq!(create_progress_bar(500.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-5.0, 100.0, 4), "░░░░");
    }
}
