#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use tictactoe::{init_logging, ui, CliSession, Game, DEFAULT_PLAYER_NAMES};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive two-player game in the terminal.
    Play {
        #[arg(long, default_value = DEFAULT_PLAYER_NAMES[0])]
        player_one: String,
        #[arg(long, default_value = DEFAULT_PLAYER_NAMES[1])]
        player_two: String,
    },
    /// Apply a fixed list of moves and print the resulting board.
    Replay {
        #[arg(long, value_delimiter = ',', help = "0-based cell indices, e.g. --moves 0,3,1,4,2")]
        moves: Vec<usize>,
        #[arg(long, default_value = DEFAULT_PLAYER_NAMES[0])]
        player_one: String,
        #[arg(long, default_value = DEFAULT_PLAYER_NAMES[1])]
        player_two: String,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            player_one,
            player_two,
        } => {
            let stdin = io::stdin();
            let mut session = CliSession::new(&player_one, &player_two, stdin.lock(), io::stdout());
            session.run()?;
        }
        Commands::Replay {
            moves,
            player_one,
            player_two,
        } => {
            let mut game = Game::new();
            game.start(&player_one, &player_two);
            for index in moves {
                let outcome = game.play_turn(index)?;
                if !outcome.is_accepted() {
                    println!("Move at {} rejected: {:?}", index, outcome);
                }
                if let Some(highlighted) = ui::highlight_winning_line(game.board(), &outcome) {
                    println!("{}\n\n{}", ui::render_view(&game), highlighted);
                    return Ok(());
                }
            }
            println!("{}", ui::render_view(&game));
        }
    }
    Ok(())
}
