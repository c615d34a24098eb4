//! Property-based tests for the tic-tac-toe engine.

use common::games::tictactoe::{
    Board, CELL_COUNT, History, Mark, WIN_LINES, calculate_winner,
};
use proptest::prelude::*;

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Empty), Just(Mark::X), Just(Mark::O)]
}

fn arb_player_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(arb_mark()).prop_map(Board::from_cells)
}

/// Sequences of clicks, legal or not, including out-of-range indices.
fn arb_clicks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..20)
}

fn complete_lines(board: &Board, mark: Mark) -> usize {
    WIN_LINES
        .iter()
        .filter(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
        .count()
}

fn play(clicks: &[usize]) -> History {
    clicks
        .iter()
        .fold(History::new(), |history, &index| history.apply_move(index))
}

proptest! {
    #[test]
    fn completed_line_wins(board in arb_board(), line in 0usize..8, mark in arb_player_mark()) {
        let board = WIN_LINES[line]
            .iter()
            .fold(board, |board, &index| board.with_mark(index, mark));
        let opponent = mark.opponent().unwrap();
        prop_assume!(complete_lines(&board, opponent) == 0);

        prop_assert_eq!(calculate_winner(&board), Some(mark));
    }

    #[test]
    fn no_completed_line_means_no_winner(board in arb_board()) {
        prop_assume!(complete_lines(&board, Mark::X) == 0);
        prop_assume!(complete_lines(&board, Mark::O) == 0);

        prop_assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn rejected_move_returns_equal_history(clicks in arb_clicks(), index in 0usize..12) {
        let history = play(&clicks);
        let next = history.apply_move(index);

        if history.try_apply_move(index).is_err() {
            prop_assert_eq!(&next, &history);
        } else {
            prop_assert_eq!(next.len(), history.len() + 1);
        }
    }

    #[test]
    fn undo_reverts_legal_move(clicks in arb_clicks(), index in 0usize..CELL_COUNT) {
        let history = play(&clicks);
        prop_assume!(history.try_apply_move(index).is_ok());

        prop_assert_eq!(history.apply_move(index).undo(), history);
    }

    #[test]
    fn undo_after_rejected_move_drops_true_last_board(clicks in arb_clicks(), index in 0usize..12) {
        let history = play(&clicks);
        prop_assume!(history.try_apply_move(index).is_err());

        prop_assert_eq!(history.apply_move(index).undo(), history.undo());
    }

    #[test]
    fn turn_flips_only_on_accepted_moves(clicks in arb_clicks()) {
        let mut history = History::new();
        prop_assert_eq!(history.current_turn(), Mark::X);

        for index in clicks {
            let before = history.current_turn();
            let next = history.apply_move(index);
            if next.len() > history.len() {
                prop_assert_eq!(next.current().get(index), Some(before));
                prop_assert_eq!(Some(next.current_turn()), before.opponent());
            } else {
                prop_assert_eq!(next.current_turn(), before);
            }
            history = next;
        }
    }

    #[test]
    fn history_never_shrinks_below_initial_board(clicks in arb_clicks(), undos in 0usize..25) {
        let history = (0..undos).fold(play(&clicks), |history, _| history.undo());

        prop_assert!(history.len() >= 1);
        prop_assert_eq!(history.boards()[0], Board::new());
    }
}
