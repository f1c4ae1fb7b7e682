//! Command-line position inspector.
//!
//! Reads a FEN from the arguments (the standard start position when none is
//! given) and prints the board, the side to move's legal moves in engine
//! notation, check and checkmate status, and material.

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use chess_rules::errors::RulesResult;
use chess_rules::game_state::board::Board;
use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules::game_state::chess_types::{Color, Coordinate, PieceKind};
use chess_rules::moves::move_descriptions::MoveType;
use chess_rules::utils::long_algebraic::{engine_move_to_long_algebraic, EngineMove};
use chess_rules::utils::render_game_state::render_board;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let fen = if args.is_empty() {
        STARTING_POSITION_FEN.to_owned()
    } else {
        args.join(" ")
    };

    match inspect(&fen) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "cannot inspect position");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn inspect(fen: &str) -> RulesResult<()> {
    let mut board = Board::from_fen(fen)?;
    let color = board.active_color();

    println!("{}", render_board(&board));
    println!("fen: {}", board.to_fen());
    println!("to move: {color:?}");

    let mut lines = Vec::new();
    for (piece, moves) in board.legal_moves_for(color)? {
        let from = board.piece(piece)?.coordinate();
        for mv in moves {
            lines.push(describe_move(&board, from, mv.coordinate(), mv.move_type())?);
        }
    }
    lines.sort();
    println!("legal moves ({}): {}", lines.len(), lines.join(" "));

    if board.get_king(color).is_ok() {
        println!("in check: {}", board.is_in_check(color));
        println!("checkmate: {}", board.is_checkmate(color)?);
    }
    println!(
        "material: white {} black {}",
        board.material(Color::White),
        board.material(Color::Black)
    );
    Ok(())
}

/// Engine notation for a move, spelling a castle as the king's two-file step.
fn describe_move(board: &Board, from: Coordinate, to: Coordinate, move_type: MoveType) -> RulesResult<String> {
    let engine_move = if move_type == MoveType::Castle {
        let step = (from.file - to.file).signum();
        EngineMove {
            from: to,
            to: to + (2 * step, 0),
            promotion: None,
        }
    } else {
        let promotes = board
            .try_get_piece(from)
            .is_some_and(|piece| piece.kind() == PieceKind::Pawn && to.rank == board.promotion_rank(piece.color()));
        EngineMove {
            from,
            to,
            promotion: promotes.then_some(PieceKind::Queen),
        }
    };
    engine_move_to_long_algebraic(&engine_move)
}
