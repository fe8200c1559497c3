use std::io::Read;
use std::path::PathBuf;

use cubekin::solver::SolverReply;
use cubekin::{CubeController, Cubie, FaceletState, MoveSequence, OperationKind};
use eyre::{Context, Result};
use serde::Serialize;

use crate::settings::Settings;

/// Cube state and move engine
///
/// States are 54-character facelet strings (faces in the order U R F D L B).
/// Moves are space-separated, such as `R U R' U'`.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Settings file (YAML).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves to a state and print the new state.
    Apply {
        /// Starting state. Defaults to `start_state` from the settings.
        #[arg(short, long)]
        state: Option<FaceletState>,
        /// Moves to apply.
        moves: Vec<String>,
    },
    /// Check that a state is well-formed and reachable, and print info
    /// about it as JSON.
    Check {
        /// State to check.
        state: FaceletState,
    },
    /// Print the position and orientation of every cubie as JSON.
    Pieces {
        /// Starting state. Defaults to `start_state` from the settings.
        #[arg(short, long)]
        state: Option<FaceletState>,
        /// Moves to apply first.
        moves: Vec<String>,
    },
    /// Print the sequence that undoes a sequence.
    Invert {
        /// Moves to invert.
        moves: Vec<String>,
    },
    /// Apply a reply from the solver service and print the new state.
    Replay {
        /// JSON reply, use '-' for stdin.
        #[arg(value_parser)]
        reply: clio::Input,
        /// Starting state. Defaults to `start_state` from the settings.
        #[arg(short, long)]
        state: Option<FaceletState>,
    },
}

#[derive(Serialize, Debug)]
struct CheckReport {
    state: FaceletState,
    solved: bool,
    /// Whether turn invariants were checked, not just cubie shapes.
    verified_reachable: bool,
}

pub(crate) fn exec(subcommand: Subcommand, settings: &Settings) -> Result<()> {
    match subcommand {
        Subcommand::Apply { state, moves } => {
            let moves = parse_moves(&moves, settings)?;
            let ctl = run(state, OperationKind::Sequence, moves, settings)?;
            println!("{}", ctl.facelets());
            Ok(())
        }

        Subcommand::Check { state } => {
            state.check_balanced()?;
            let model = cubekin::PieceModel::from_facelets(&state, settings.verification())?;
            write_json_output(&CheckReport {
                solved: model.is_solved(),
                verified_reachable: settings.verify_loads,
                state,
            })
        }

        Subcommand::Pieces { state, moves } => {
            let moves = parse_moves(&moves, settings)?;
            let ctl = run(state, OperationKind::Sequence, moves, settings)?;
            let cubies: &[Cubie] = ctl.model().cubies();
            write_json_output(&cubies)
        }

        Subcommand::Invert { moves } => {
            println!("{}", parse_moves(&moves, settings)?.inverse());
            Ok(())
        }

        Subcommand::Replay { mut reply, state } => {
            let mut buffer = String::new();
            reply
                .read_to_string(&mut buffer)
                .context("error reading solver reply")?;
            let reply: SolverReply =
                serde_json::from_str(&buffer).context("error deserializing solver reply")?;

            if reply.state.is_some() {
                let new_state = reply.into_state()?;
                // Shuffle replies carry a whole state; adopt it as-is.
                let mut ctl = CubeController::new(settings.verification());
                ctl.adopt_state(&new_state.serialize())?;
                println!("{}", ctl.facelets());
                return Ok(());
            }

            let kind = match reply.solution {
                Some(_) => OperationKind::Solution,
                None => OperationKind::Scramble,
            };
            let moves = reply.into_moves(settings.unknown_moves)?;
            let ctl = run(state, kind, moves, settings)?;
            let facelets = ctl.facelets();
            if kind == OperationKind::Solution && !facelets.is_solved() {
                log::warn!("solution did not solve the cube");
            }
            println!("{facelets}");
            Ok(())
        }
    }
}

fn parse_moves(words: &[String], settings: &Settings) -> Result<MoveSequence> {
    Ok(MoveSequence::parse_with(
        &words.join(" "),
        settings.unknown_moves,
    )?)
}

/// Loads `state` (or the configured start state) and steps through `moves`.
fn run(
    state: Option<FaceletState>,
    kind: OperationKind,
    moves: MoveSequence,
    settings: &Settings,
) -> Result<CubeController> {
    let state = state.unwrap_or_else(|| settings.start_state.clone());
    let mut ctl = CubeController::new(settings.verification());
    ctl.adopt_state(&state.serialize())
        .context("error loading starting state")?;
    ctl.queue_sequence(kind, moves)?;
    while let Some(m) = ctl.step() {
        log::debug!("{m} -> {}", ctl.facelets());
    }
    Ok(ctl)
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
