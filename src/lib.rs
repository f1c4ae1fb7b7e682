//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the board model, per-piece movement strategies, legality and
//! commit pipelines, the FEN codec, the external engine protocol helpers and
//! a random opponent, so hosts and benches can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_events;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod direct_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod line_moves;
    pub mod move_descriptions;
    pub mod move_strategy;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod capture {
    pub mod capture_strategy;
    pub mod legal_move_apply;
    pub mod pawn_capture;
    pub mod rook_capture;
    pub mod standard_capture;
}

pub mod uci {
    pub mod engine_protocol;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
