mod cli;
mod config;

use std::io::{self, BufRead};

use anyhow::Result;
use checkers::ui::renderer::{Glyphs, TextBoard};
use checkers::{Board, Game, Move};
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{info, warn};

type TextGame = Game<TextBoard<Board>>;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let cfg_path = std::env::var_os("CHECKERS_CONFIG_PATH").map(|s| s.into());
    let cfg = config::Config::load(cfg_path.as_ref())?;

    // Initialize logger
    let env = Env::default().filter_or("CHECKERS_LOG_LEVEL", cfg.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    let board = TextBoard::new(Board::new(), Glyphs::from(&cfg.glyphs));
    let mut game = Game::with_board(board)?;

    match cli.command {
        Some(cli::Commands::Show) => {
            print!("{}", game.board().render(cfg.coordinates));
        }
        Some(cli::Commands::Moves { squares, play }) => {
            for mv in play {
                apply(&mut game, mv, cfg.coordinates, false)?;
            }
            for square in squares {
                let piece = game.piece_at(square);
                let targets = game.legal_moves(piece.as_ref());
                let listed: Vec<String> = targets.iter().map(ToString::to_string).collect();
                match piece {
                    Some(p) => println!("{} ({}): {}", square, p.owner, listed.join(" ")),
                    None => println!("{}: empty", square),
                }
            }
        }
        Some(cli::Commands::Play { moves }) if !moves.is_empty() => {
            for mv in moves {
                apply(&mut game, mv, cfg.coordinates, true)?;
            }
        }
        Some(cli::Commands::Play { .. }) => {
            print!("{}", game.board().render(cfg.coordinates));
            for line in io::stdin().lock().lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match line.parse::<Move>() {
                    Ok(mv) => apply(&mut game, mv, cfg.coordinates, true)?,
                    Err(e) => warn!("{}", e),
                }
            }
        }
        None => {
            // If no subcommand, print help
            cli::Cli::command().print_help()?;
        }
    }
    Ok(())
}

fn apply(game: &mut TextGame, mv: Move, coordinates: bool, show: bool) -> Result<()> {
    if game.move_piece(mv)? {
        info!("played {}", mv);
        if show {
            print!("{}", game.board().render(coordinates));
        }
    } else {
        warn!("illegal move {}", mv);
    }
    Ok(())
}
