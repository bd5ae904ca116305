use std::fmt;
use std::ops::Add;

/// Unique identifier for any pawn tracked in the registry.
///
/// Ids are handed out sequentially by the spawn facility and never reused
/// within a session, so a stale id simply fails to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Integer grid coordinate.
///
/// Doubles as the identity key for cells and as a movement delta; the two
/// roles share one type so `position + delta` is a position again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridVec {
    pub x: i32,
    pub y: i32,
}

impl GridVec {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Collapses each axis to −1/0/+1 so diagonal or multi-step input
    /// becomes a single-step move.
    pub fn normalized(self) -> Self {
        Self {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }
}

impl Add for GridVec {
    type Output = GridVec;

    fn add(self, rhs: GridVec) -> GridVec {
        GridVec::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for GridVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_collapses_to_unit_step() {
        assert_eq!(GridVec::new(3, -7).normalized(), GridVec::new(1, -1));
        assert_eq!(GridVec::new(0, 2).normalized(), GridVec::new(0, 1));
        assert_eq!(GridVec::ORIGIN.normalized(), GridVec::ORIGIN);
    }

    #[test]
    fn addition_is_componentwise() {
        assert_eq!(
            GridVec::new(2, 3) + GridVec::new(-1, 1),
            GridVec::new(1, 4)
        );
    }
}
