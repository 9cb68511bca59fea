//! Move-selection behavior of the engine against fixed board positions

use tacticq::{
    Engine, EngineConfig, Error,
    tictactoe::{Board, Cell, GameStatus, Player},
};

fn engine() -> Engine {
    Engine::new(EngineConfig::new().with_seed(42))
}

fn board(s: &str) -> Board {
    Board::from_string(s).expect("valid board string")
}

#[test]
fn engine_takes_every_single_cell_win() {
    // For each win line, give O two pieces and leave the third cell empty;
    // the engine must complete the line regardless of Q-values
    for line in tacticq::tictactoe::WIN_LINES {
        for empty_slot in 0..3 {
            let mut cells = [Cell::Empty; 9];
            let mut expected = 0;
            for (i, &idx) in line.iter().enumerate() {
                if i == empty_slot {
                    expected = idx;
                } else {
                    cells[idx] = Cell::O;
                }
            }
            // Two X pieces somewhere off the line keep the position plausible
            let mut placed = 0;
            for idx in 0..9 {
                if placed == 2 {
                    break;
                }
                if cells[idx] == Cell::Empty && idx != expected {
                    cells[idx] = Cell::X;
                    placed += 1;
                }
            }

            let b = Board::from_cells(&cells).unwrap();
            if b.status() != GameStatus::InProgress {
                continue; // filler pieces may have completed an X line
            }

            let mv = engine().select_move(&b, Player::O).unwrap();
            assert_eq!(
                mv, expected,
                "expected win at {expected} on board\n{b}"
            );
        }
    }
}

#[test]
fn engine_blocks_opponent_threat() {
    // X two-in-a-row with the third cell empty and no O win available
    for (s, expected) in [("XX..O....", 2), ("X..X...O.", 6), ("..X.XO...", 6)] {
        let mv = engine().select_move(&board(s), Player::O).unwrap();
        assert_eq!(mv, expected, "expected block at {expected} for '{s}'");
    }
}

#[test]
fn empty_board_with_empty_table_goes_center() {
    let mv = engine().select_move(&Board::new(), Player::O).unwrap();
    assert_eq!(mv, 4);
}

#[test]
fn block_scenario_from_symbol_o() {
    // [X, X, _, _, O, ...] -> block at 2
    let mv = engine().select_move(&board("XX..O...."), Player::O).unwrap();
    assert_eq!(mv, 2);
}

#[test]
fn win_scenario_from_symbol_o() {
    // [O, O, _, _, X, ...] -> win at 2
    let mv = engine().select_move(&board("OO..X...."), Player::O).unwrap();
    assert_eq!(mv, 2);
}

#[test]
fn full_board_signals_no_legal_move() {
    let result = engine().select_move(&board("XOXXOOOXX"), Player::O);
    assert!(matches!(result, Err(Error::NoLegalMove)));
}

#[test]
fn malformed_boards_rejected_before_the_core() {
    assert!(matches!(
        Board::from_string("XX..O"),
        Err(Error::InvalidBoardLength { .. })
    ));
    assert!(matches!(
        Board::from_string("XX..Q...."),
        Err(Error::InvalidCellCharacter { .. })
    ));
}

#[test]
fn reset_returns_all_zero_report() {
    let mut engine = engine();
    engine.train(5).expect("training should succeed");
    engine.reset();

    let report = engine.report();
    assert_eq!(report.q_table_size, 0);
    assert_eq!(report.total_games, 0);
    assert_eq!(report.wins, 0);
    assert_eq!(report.losses, 0);
    assert_eq!(report.draws, 0);
}

#[test]
fn symbol_argument_does_not_change_the_fixed_role() {
    // The engine's tactical role is O regardless of the symbol passed in
    let mut a = engine();
    let mut b = engine();
    let position = board("OO..X....");
    assert_eq!(
        a.select_move(&position, Player::O).unwrap(),
        b.select_move(&position, Player::X).unwrap()
    );
}
