use anyhow::Result;
use time::Date;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use leaderboard::view::render_board;
use leaderboard::{Leaderboard, LikeOutcome};

use crate::{alert, parse_date};

const HELP: &str = "commands: n | next, p | prev, d YYYY-MM-DD, l <rank>, r | refresh, q | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Goto(Date),
    Like(usize),
    Refresh,
    Quit,
}

pub fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (verb, arg) {
        ("n" | "next", None) => Ok(BrowseCommand::Next),
        ("p" | "prev" | "previous", None) => Ok(BrowseCommand::Previous),
        ("r" | "refresh", None) => Ok(BrowseCommand::Refresh),
        ("q" | "quit" | "exit", None) => Ok(BrowseCommand::Quit),
        ("d" | "date", Some(raw)) => parse_date(raw).map(BrowseCommand::Goto),
        ("l" | "like", Some(raw)) => match raw.parse::<usize>() {
            Ok(rank) if rank > 0 => Ok(BrowseCommand::Like(rank)),
            _ => Err(format!("'{}' is not a rank", raw)),
        },
        _ => Err(HELP.to_string()),
    }
}

/// Reads commands from stdin until `q` or end of input.
pub async fn run(board: &Leaderboard) -> Result<()> {
    if let Err(e) = board.refresh().await {
        warn!("Initial load failed: {}", e);
    }
    print!("{}", render_board(&board.state().await));
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        let result = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Next => board.next_day().await,
            BrowseCommand::Previous => board.previous_day().await,
            BrowseCommand::Goto(date) => board.select_date(date).await,
            BrowseCommand::Refresh => board.refresh().await,
            BrowseCommand::Like(rank) => like_rank(board, rank).await,
        };
        if let Err(e) = result {
            warn!("{}", e);
        }

        print!("{}", render_board(&board.state().await));
    }

    Ok(())
}

async fn like_rank(board: &Leaderboard, rank: usize) -> common::LeaderboardResult<()> {
    let profile_id = match board.state().await.rankings.get(rank - 1) {
        Some(ranking) => ranking.id.clone(),
        None => {
            println!("No entry at rank {}", rank);
            return Ok(());
        }
    };

    match board.like(&profile_id).await {
        Ok(LikeOutcome::Liked) => Ok(()),
        Ok(LikeOutcome::AlreadyLiked) => {
            println!("You already liked this entry.");
            Ok(())
        }
        Err(e) => {
            alert(&e);
            Ok(())
        }
    }
}
