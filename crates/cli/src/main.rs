mod browse;

use anyhow::Result;
use clap::{Parser, Subcommand};
use time::macros::format_description;
use time::Date;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use common::{Config, LeaderboardError, LeaderboardResult};
use leaderboard::view::render_board;
use leaderboard::{navigator, Leaderboard, LikeOutcome, Session};

#[derive(Parser, Debug)]
#[command(name = "leaderboard")]
#[command(author, version, about = "Daily workout leaderboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(short, long, global = true, value_parser = parse_date)]
    date: Option<Date>,

    /// Act as this viewer, overriding LEADERBOARD_VIEWER_ID
    #[arg(short, long, global = true)]
    viewer: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the leaderboard once
    Show,
    /// Navigate days and like entries interactively
    Browse,
    /// Like a ranked profile
    Like { profile_id: String },
}

pub fn parse_date(raw: &str) -> Result<Date, String> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// Blocking notice for failures the viewer has to acknowledge.
pub fn alert(error: &LeaderboardError) {
    eprintln!("⚠ {}", error);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    let _ = dotenv::dotenv();

    // Logs go to stderr so the board on stdout stays readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let date = cli
        .date
        .unwrap_or_else(|| navigator::today(config.leaderboard.utc_offset));

    let session = match &cli.viewer {
        Some(id) => Session::signed_in(id),
        None => Session::from_config(&config.leaderboard),
    };

    match cli.command {
        Command::Show => {
            let board = open_board(&config, session, date);
            board.refresh().await?;
            print!("{}", render_board(&board.state().await));
        }
        Command::Browse => {
            let board = open_board(&config, session, date);
            browse::run(&board).await?;
        }
        Command::Like { profile_id } => {
            let board = open_board(&config, session, date);
            match like_profile(&board, &profile_id).await {
                Ok(LikeOutcome::Liked) => print!("{}", render_board(&board.state().await)),
                Ok(LikeOutcome::AlreadyLiked) => println!("Already liked {}", profile_id),
                Err(e) => {
                    alert(&e);
                    anyhow::bail!("Like failed");
                }
            }
        }
    }

    Ok(())
}

/// Loads the board, then likes `profile_id` on it. Either failure is returned
/// so the caller can alert the viewer.
async fn like_profile(board: &Leaderboard, profile_id: &str) -> LeaderboardResult<LikeOutcome> {
    board.refresh().await?;
    board.like(profile_id).await
}

fn open_board(config: &Config, session: Session, date: Date) -> Leaderboard {
    Leaderboard::new(
        leaderboard::connect(config),
        session,
        config.leaderboard.utc_offset,
        date,
    )
}
