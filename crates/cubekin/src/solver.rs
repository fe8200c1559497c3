//! Shapes of the replies sent by the remote solver service.
//!
//! The service itself (scrambling, solving, and transport) lives elsewhere;
//! this module only turns its replies into engine values.

use serde::{Deserialize, Serialize};

use crate::{CubeError, FaceletState, MoveSequence, UnknownMovePolicy};

/// Prefix the solver uses for errors reported inside a solution string.
const SOLUTION_ERROR_PREFIX: &str = "Error";

/// JSON reply from the solver. Each endpoint fills in one field, or `error`.
///
/// - `/shuffle` and `/apply_move` reply with `state`.
/// - `/get_scramble` replies with `scramble`.
/// - `/solve` replies with `solution`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverReply {
    /// Facelet string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Space-separated scramble.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scramble: Option<String>,
    /// Space-separated solution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    /// Error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
impl SolverReply {
    fn check_error(&self) -> Result<(), CubeError> {
        match &self.error {
            Some(e) => Err(CubeError::Solver(e.clone())),
            None => Ok(()),
        }
    }

    /// Returns the facelet state in the reply, validated by
    /// [`FaceletState::parse()`].
    pub fn into_state(self) -> Result<FaceletState, CubeError> {
        self.check_error()?;
        let state = self
            .state
            .ok_or_else(|| CubeError::Solver("reply has no state".to_owned()))?;
        FaceletState::parse(&state)
    }
    /// Returns the solution or scramble in the reply.
    pub fn into_moves(self, policy: UnknownMovePolicy) -> Result<MoveSequence, CubeError> {
        self.check_error()?;
        let text = self
            .solution
            .or(self.scramble)
            .ok_or_else(|| CubeError::Solver("reply has no moves".to_owned()))?;
        if text.trim_start().starts_with(SOLUTION_ERROR_PREFIX) {
            return Err(CubeError::Solver(text));
        }
        MoveSequence::parse_with(&text, policy)
    }
}
