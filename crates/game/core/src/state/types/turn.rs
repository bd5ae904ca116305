/// Phases of one simulation turn, executed in declaration order.
///
/// Input staging precedes per-pawn action resolution, which precedes the
/// end-of-turn effects tick. The engine is the only writer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    #[default]
    Input,
    Action,
    EffectsTick,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::Input => "input",
            TurnPhase::Action => "action",
            TurnPhase::EffectsTick => "effects_tick",
        }
    }
}

/// Turn bookkeeping: the monotonically increasing turn counter and the
/// phase currently executing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub turn: u64,
    pub phase: TurnPhase,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
