use anyhow::{Context, Result};
use tracing::{debug, info};

use spheres_core::{Board, STARTING_LAYOUT};
use spheres_engine::{Algorithm, InvalidMoves, SideAssignment, get_ai_move};

/// Usage: `spheres [layout] [algorithm] [game-mode] [side]`
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("spheres starting");

    let mut args = std::env::args().skip(1);
    let layout = args.next().unwrap_or_else(|| STARTING_LAYOUT.to_string());
    let algorithm: Algorithm = args.next().as_deref().unwrap_or("1").parse()?;
    let game_mode = args.next().unwrap_or_else(|| "0".to_string());
    let side = args.next().unwrap_or_else(|| "0".to_string());
    let side = SideAssignment::parse(&game_mode, &side)?;

    let board: Board = layout
        .parse()
        .with_context(|| format!("invalid layout: {layout}"))?;
    info!(%board, %algorithm, color = %side.color(), "selecting move");
    debug!("\n{}", board.pretty());

    let mut invalid = InvalidMoves::new();
    match get_ai_move(&board, &mut invalid, algorithm, side) {
        Some(mv) => println!("{mv}"),
        None => println!("no move"),
    }
    Ok(())
}
