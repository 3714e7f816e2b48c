use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ply_chess::engines::engine_minimax::MinimaxEngine;
use ply_chess::engines::engine_random::RandomEngine;
use ply_chess::engines::engine_trait::Engine;
use ply_chess::game_state::chess_board::ChessBoard;
use ply_chess::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use ply_chess::move_generation::perft::perft_multi_threaded;
use ply_chess::search::minimax::SearchConfig;
use ply_chess::search::threading::spawn_search;
use ply_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use ply_chess::utils::move_text::{format_move, parse_move_list};

#[derive(Debug, Parser)]
#[command(name = "ply_chess", version, about = "Minimax chess self-play and analysis")]
struct Cli {
    /// Search depth in plies for minimax players.
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    /// Stop a self-play game after this many plies.
    #[arg(long, default_value_t = 200)]
    plies: u16,

    /// Let Black pick uniformly random moves instead of searching.
    #[arg(long)]
    random_black: bool,

    /// Seed for the random player.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count leaf positions from the starting position.
    Perft {
        #[arg(long, default_value_t = 3)]
        depth: u8,
    },
    /// Search for the best reply after a sequence of moves.
    Best {
        /// Moves in console notation, e.g. "(e2, e4) (e7, e5)".
        #[arg(long, default_value = "")]
        moves: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Perft { depth }) => run_perft(depth),
        Some(Command::Best { ref moves }) => run_best(moves, cli.depth),
        None => run_self_play(&cli),
    }
}

fn run_perft(depth: u8) -> Result<()> {
    let counts = perft_multi_threaded(&ChessBoard::new_game(), depth).context("perft failed")?;
    println!(
        "depth {depth}: nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates
    );
    Ok(())
}

fn run_best(moves: &str, depth: u8) -> Result<()> {
    let mut board = ChessBoard::new_game();
    for mv in parse_move_list(moves).context("could not parse --moves")? {
        board
            .apply_move(&mv)
            .with_context(|| format!("move {mv} is not legal here"))?;
    }

    let completed = spawn_search(board, SearchConfig::with_depth(depth))
        .join()
        .context("search worker failed")?;
    let mut board = completed.board;
    let outcome = completed.result.context("search failed")?;

    match outcome.best_move {
        Some(mv) => println!(
            "best {} weight {} nodes {}",
            format_move(&mv),
            outcome.weight,
            outcome.nodes
        ),
        None => println!("no move: {}", board.status()),
    }
    Ok(())
}

fn run_self_play(cli: &Cli) -> Result<()> {
    if cli.depth == 0 {
        bail!("--depth must be at least 1");
    }
    let mut white = MinimaxEngine::new(cli.depth);
    let mut black: Box<dyn Engine> = if cli.random_black {
        Box::new(match cli.seed {
            Some(seed) => RandomEngine::seeded(seed),
            None => RandomEngine::new(),
        })
    } else {
        Box::new(MinimaxEngine::new(cli.depth))
    };
    let config = MatchConfig {
        max_plies: cli.plies,
        ..MatchConfig::default()
    };
    info!(white = white.name(), black = black.name(), depth = cli.depth, "starting self-play");
    let result = play_engine_match(&mut white, black.as_mut(), &config)?;

    for (ply, mv) in result.played_moves.iter().enumerate() {
        println!("{:>3}. {mv}", ply + 1);
    }
    println!("outcome: {:?}", result.outcome);
    Ok(())
}
