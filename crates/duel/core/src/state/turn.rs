use super::Seat;

/// Position in the turn protocol.
///
/// Seat [`Seat::First`] opens every round; the round counter advances once
/// [`Seat::Second`] has acted (or been skipped).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub round: u32,
    pub current: Seat,
}

impl TurnState {
    pub const fn new() -> Self {
        Self {
            round: 1,
            current: Seat::First,
        }
    }

    /// Hands control to the other seat. Returns `true` when this closed a round.
    pub(crate) fn advance(&mut self) -> bool {
        let closes_round = self.current == Seat::Second;
        if closes_round {
            self.round += 1;
        }
        self.current = self.current.opponent();
        closes_round
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
