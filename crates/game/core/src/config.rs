/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Upper bound on buffered debug messages per turn; `None` keeps the
    /// buffer unbounded. Messages past the bound are dropped, not rotated.
    pub max_debug_messages: Option<usize>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of pawns tracked by the world registry.
    pub const MAX_PAWNS: usize = 64;
    /// Inventory capacity per pawn (`MaxItems`): distinct stacks, not units.
    pub const MAX_INVENTORY_SLOTS: usize = 8;
    /// Maximum effect entries carried by a single item definition.
    pub const MAX_ITEM_EFFECTS: usize = 4;
    /// Maximum lasting effects active on one pawn at a time.
    pub const MAX_ACTIVE_EFFECTS: usize = 16;

    /// Every lasting item effect holds for this many turns once consumed.
    pub const LASTING_EFFECT_TURNS: u32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_DEBUG_MESSAGES: usize = 32;

    pub fn new() -> Self {
        Self {
            max_debug_messages: Some(Self::DEFAULT_MAX_DEBUG_MESSAGES),
        }
    }

    pub fn with_max_debug_messages(max_debug_messages: Option<usize>) -> Self {
        Self { max_debug_messages }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
