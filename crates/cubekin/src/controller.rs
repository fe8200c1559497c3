//! Cube wrapper that adds a move queue, undo history, and an explicit
//! idle/busy state.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{CubeError, FaceletState, Move, MoveSequence, PieceModel, Verification};

/// Kind of multi-move operation.
#[derive(
    Serialize, Deserialize, strum::Display, Debug, Copy, Clone, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperationKind {
    /// Applying a scramble.
    Scramble,
    /// Applying a solution.
    Solution,
    /// Applying some other move sequence.
    Sequence,
}

/// Whether the controller accepts new operations.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// No operation in flight.
    #[default]
    Idle,
    /// A sequence is being stepped through.
    Busy(OperationKind),
}

/// Cube wrapper that adds a move queue, undo history, and an explicit
/// idle/busy state.
///
/// While a queued sequence is in flight, every operation that would start
/// something new fails with [`CubeError::Busy`]. Callers still have to keep
/// calls on one controller from overlapping; there is no internal locking.
#[derive(Debug, Default, Clone)]
pub struct CubeController {
    /// State with every applied move.
    model: PieceModel,
    /// Moves of the in-flight sequence that have not been applied yet.
    queue: VecDeque<Move>,
    status: Status,
    /// How strictly to check states from outside.
    verification: Verification,

    undo_buffer: Vec<Move>,
    redo_buffer: Vec<Move>,
}
impl PartialEq<PieceModel> for CubeController {
    fn eq(&self, other: &PieceModel) -> bool {
        self.model == *other
    }
}
impl CubeController {
    /// Constructs a controller with a solved cube.
    pub fn new(verification: Verification) -> Self {
        Self {
            verification,
            ..Self::default()
        }
    }
    /// Constructs an idle controller with a scramble already applied.
    pub fn from_scramble(scramble: &MoveSequence, verification: Verification) -> Self {
        let mut ret = Self::new(verification);
        ret.model.apply_sequence(scramble);
        ret
    }

    /// Returns whether an operation is in flight.
    pub fn status(&self) -> Status {
        self.status
    }
    /// Returns the cube with every applied move.
    pub fn model(&self) -> &PieceModel {
        &self.model
    }
    /// Returns the facelets of [`CubeController::model()`].
    pub fn facelets(&self) -> FaceletState {
        self.model.to_facelets()
    }
    /// Returns the moves still queued.
    pub fn pending(&self) -> impl Iterator<Item = Move> + '_ {
        self.queue.iter().copied()
    }
    /// Returns whether there is a move to undo.
    pub fn has_undo(&self) -> bool {
        !self.undo_buffer.is_empty()
    }
    /// Returns whether there is a move to redo.
    pub fn has_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    fn ensure_idle(&self) -> Result<(), CubeError> {
        match self.status {
            Status::Idle => Ok(()),
            Status::Busy(kind) => Err(CubeError::Busy(kind)),
        }
    }

    /// Applies a single move right away.
    pub fn twist(&mut self, m: Move) -> Result<(), CubeError> {
        self.ensure_idle()?;
        self.model.apply_move(m);
        self.undo_buffer.push(m);
        self.redo_buffer.clear();
        Ok(())
    }
    /// Parses and applies a single move. On error, nothing is changed.
    pub fn twist_str(&mut self, token: &str) -> Result<(), CubeError> {
        let m = token.parse()?;
        self.twist(m)
    }

    /// Queues a sequence to be applied one move at a time with
    /// [`CubeController::step()`]. The controller is busy until the queue is
    /// empty.
    pub fn queue_sequence(
        &mut self,
        kind: OperationKind,
        moves: MoveSequence,
    ) -> Result<(), CubeError> {
        self.ensure_idle()?;
        if moves.is_empty() {
            return Ok(());
        }
        log::debug!("starting {kind} of {} moves", moves.len());
        self.queue.extend(moves);
        self.status = Status::Busy(kind);
        self.redo_buffer.clear();
        Ok(())
    }
    /// Applies the next queued move and returns it, or returns `None` if
    /// nothing is queued.
    pub fn step(&mut self) -> Option<Move> {
        let m = self.queue.pop_front()?;
        self.model.apply_move(m);
        self.undo_buffer.push(m);
        if self.queue.is_empty() {
            if let Status::Busy(kind) = self.status {
                log::debug!("finished {kind}");
            }
            self.status = Status::Idle;
        }
        Some(m)
    }
    /// Applies every queued move.
    pub fn catch_up(&mut self) {
        while self.step().is_some() {}
    }

    /// Undoes one move. Returns the move that was undone.
    pub fn undo(&mut self) -> Result<Option<Move>, CubeError> {
        self.ensure_idle()?;
        let Some(m) = self.undo_buffer.pop() else {
            return Ok(None);
        };
        self.model.apply_move(m.inverse());
        self.redo_buffer.push(m);
        Ok(Some(m))
    }
    /// Redoes one move. Returns the move that was redone.
    pub fn redo(&mut self) -> Result<Option<Move>, CubeError> {
        self.ensure_idle()?;
        let Some(m) = self.redo_buffer.pop() else {
            return Ok(None);
        };
        self.model.apply_move(m);
        self.undo_buffer.push(m);
        Ok(Some(m))
    }
    /// Resets to a solved cube and clears history.
    pub fn reset(&mut self) -> Result<(), CubeError> {
        self.ensure_idle()?;
        *self = Self::new(self.verification);
        Ok(())
    }

    /// Replaces the cube with an externally supplied state and clears
    /// history. On error, nothing is changed.
    pub fn adopt_state(&mut self, text: &str) -> Result<(), CubeError> {
        self.ensure_idle()?;
        let state = FaceletState::parse(text)?;
        self.model.load_from_facelets(&state, self.verification)?;
        self.undo_buffer.clear();
        self.redo_buffer.clear();
        Ok(())
    }
    /// Compares the local state with one echoed back by an authoritative
    /// source. On mismatch, the echoed state replaces the local one.
    ///
    /// Returns whether the states differed. This may be called while busy;
    /// the remaining queued moves are applied on top of the adopted state.
    pub fn reconcile(&mut self, echoed: &str) -> Result<bool, CubeError> {
        let state = FaceletState::parse(echoed)?;
        let local = self.facelets();
        if state == local {
            return Ok(false);
        }
        log::warn!("local state {local} disagrees with {state}; adopting it");
        self.model.load_from_facelets(&state, self.verification)?;
        Ok(true)
    }
}
