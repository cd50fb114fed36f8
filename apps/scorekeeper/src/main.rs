//! Tichu scorekeeper CLI.
//!
//! Every command loads the stored match, applies one operation, persists the
//! result and prints JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use scorekeeper::domain::setup::seat_players;
use scorekeeper::domain::{RoundDraft, RoundSummary};
use scorekeeper::{
    AppError, Config, DomainError, FileMatchStore, MatchService, MatchStatus, MatchStore, Player,
    RoundResult, ScoreDelta, Seat, Team, TichuCall,
};
use serde::Serialize;
use tracing::{error, info};

mod telemetry;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Score keeper for a four-player Tichu match")]
struct Cli {
    /// Directory holding the match snapshot (overrides SCOREKEEPER_STATE_DIR)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Key the match is stored under (overrides SCOREKEEPER_STATE_KEY)
    #[arg(long, global = true)]
    key: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seat four players and start a new match, replacing any current one
    Start {
        /// First Team A player; deals the first round
        team_a1: String,
        /// Second Team A player
        team_a2: String,
        /// First Team B player
        team_b1: String,
        /// Second Team B player
        team_b2: String,
    },
    /// Record a finished round
    Record {
        /// Team A's card points; Team B's default to the complement
        #[arg(long, allow_hyphen_values = true)]
        team_a_points: Option<i32>,
        /// Team B's card points
        #[arg(long, allow_hyphen_values = true)]
        team_b_points: Option<i32>,
        /// Team that went out first and second
        #[arg(long, value_enum, conflicts_with_all = ["team_a_points", "team_b_points"])]
        double_victory: Option<TeamArg>,
        /// A call and its outcome: SEAT:tichu|grand:won|lost (repeatable)
        #[arg(long = "tichu", value_parser = parse_tichu)]
        tichu: Vec<TichuArg>,
    },
    /// Remove the most recent round
    Undo,
    /// Discard the match
    Reset,
    /// Print the match
    Show,
    /// Print per-round deltas and running totals
    History,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TeamArg {
    A,
    B,
}

impl From<TeamArg> for Team {
    fn from(arg: TeamArg) -> Self {
        match arg {
            TeamArg::A => Team::TeamA,
            TeamArg::B => Team::TeamB,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TichuArg {
    seat: Seat,
    call: TichuCall,
    success: Option<bool>,
}

/// `SEAT:CALL[:RESULT]`. Leaving out the result records a pending call,
/// which the round then rejects as unresolved.
fn parse_tichu(raw: &str) -> Result<TichuArg, String> {
    let mut parts = raw.split(':');
    let seat = parts
        .next()
        .and_then(|s| s.trim().parse::<Seat>().ok())
        .ok_or_else(|| format!("expected SEAT:CALL[:RESULT], got {raw:?}"))?;
    let call = match parts.next().map(str::trim) {
        Some("tichu") => TichuCall::Tichu,
        Some("grand" | "grand-tichu") => TichuCall::GrandTichu,
        other => return Err(format!("unknown call {other:?}; use tichu or grand")),
    };
    let success = match parts.next().map(str::trim) {
        None => None,
        Some("won") => Some(true),
        Some("lost") => Some(false),
        Some(other) => return Err(format!("unknown result {other:?}; use won or lost")),
    };
    if parts.next().is_some() {
        return Err(format!("too many fields in {raw:?}"));
    }
    Ok(TichuArg {
        seat,
        call,
        success,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchSummary<'a> {
    status: MatchStatus,
    team_a_score: i32,
    team_b_score: i32,
    winner: Option<Team>,
    players: &'a [Player],
    dealer: Option<&'a str>,
    round_number: usize,
    rounds_played: usize,
}

impl<'a> MatchSummary<'a> {
    fn of<S: MatchStore>(service: &'a MatchService<S>) -> Self {
        let state = service.state();
        Self {
            status: state.status,
            team_a_score: state.team_a_score,
            team_b_score: state.team_b_score,
            winner: state.winner,
            players: &state.players,
            dealer: service.current_dealer().map(|p| p.name.as_str()),
            round_number: service.engine().round_number(),
            rounds_played: state.rounds.len(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordOutput<'a> {
    delta: ScoreDelta,
    #[serde(rename = "match")]
    summary: MatchSummary<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UndoOutput<'a> {
    undone: Option<RoundResult>,
    #[serde(rename = "match")]
    summary: MatchSummary<'a>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{out}");
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()?.with_overrides(cli.state_dir, cli.key)?;
    let store = FileMatchStore::open(&config.state_dir)?;
    let mut service = MatchService::open(store, config.state_key);

    match cli.command {
        Command::Start {
            team_a1,
            team_a2,
            team_b1,
            team_b2,
        } => {
            let players = seat_players(
                [team_a1.as_str(), team_a2.as_str()],
                [team_b1.as_str(), team_b2.as_str()],
            )?;
            service.start(players)?;
            info!(key = service.key(), "new match started");
            print_json(&MatchSummary::of(&service))
        }
        Command::Record {
            team_a_points,
            team_b_points,
            double_victory,
            tichu,
        } => {
            // Report a closed match before complaining about the round itself.
            let status = service.state().status;
            if status != MatchStatus::InProgress {
                return Err(DomainError::NotInProgress(status).into());
            }

            let mut draft = RoundDraft::new();
            for arg in &tichu {
                draft.set_call(arg.seat, arg.call)?;
                if let Some(success) = arg.success {
                    draft.set_success(arg.seat, success)?;
                }
            }
            match double_victory {
                Some(team) => draft.set_double_victory(team.into()),
                None => {
                    if let Some(points) = team_a_points {
                        draft.set_team_a_points(points);
                    }
                    if let Some(points) = team_b_points {
                        draft.set_team_b_points(points);
                    }
                }
            }
            let delta = service.record_round(draft.build()?)?;
            print_json(&RecordOutput {
                delta,
                summary: MatchSummary::of(&service),
            })
        }
        Command::Undo => {
            let undone = service.undo_last_round()?;
            print_json(&UndoOutput {
                undone,
                summary: MatchSummary::of(&service),
            })
        }
        Command::Reset => {
            service.reset()?;
            print_json(&MatchSummary::of(&service))
        }
        Command::Show => print_json(&MatchSummary::of(&service)),
        Command::History => {
            let history: Vec<RoundSummary> = service.history();
            print_json(&history)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), error = %e, "command failed");
            eprintln!("error [{}]: {e}", e.code());
            e.exit_code()
        }
    }
}
