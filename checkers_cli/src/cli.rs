use checkers::{Move, Position};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "checkers", version, about = "Play American checkers in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the starting position.
    Show,
    /// List legal targets for the pieces on the given squares.
    Moves {
        #[arg(required = true)]
        squares: Vec<Position>,
        /// Moves to play first, e.g. `--play c3-b4`.
        #[arg(long = "play")]
        play: Vec<Move>,
    },
    /// Play moves such as `c3-b4`. Reads them from stdin when none are given.
    Play { moves: Vec<Move> },
}
