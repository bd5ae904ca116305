use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::events::GameEvent;
use crate::state::{Cell, CollisionPolicy, EntityId, GameState, GridVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("pawn {0} not found")]
    PawnNotFound(EntityId),

    #[error("occupancy desync for pawn {pawn} at {position}")]
    OccupancyDesync { pawn: EntityId, position: GridVec },
}

/// Where a move is headed: an absolute cell, or a delta that is normalized
/// to a unit step before resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveTarget {
    Location(GridVec),
    Direction(GridVec),
}

/// Movement intent resolved against the occupancy grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub target: MoveTarget,
}

impl MoveAction {
    /// Move to an absolute location.
    pub fn to(actor: EntityId, location: GridVec) -> Self {
        Self {
            actor,
            target: MoveTarget::Location(location),
        }
    }

    /// Move one step along a direction vector.
    pub fn by(actor: EntityId, direction: GridVec) -> Self {
        Self {
            actor,
            target: MoveTarget::Direction(direction),
        }
    }

    fn destination_from(&self, origin: GridVec) -> GridVec {
        match self.target {
            MoveTarget::Location(location) => location,
            MoveTarget::Direction(direction) => origin + direction.normalized(),
        }
    }
}

/// What a move attempt did. `moved` is true iff the position changed; a
/// blocked move is a successful action that went nowhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved: bool,
    pub from: GridVec,
    pub to: GridVec,
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Outcome = MoveOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state
            .entities
            .pawn(self.actor)
            .filter(|pawn| pawn.is_alive())
            .map(|_| ())
            .ok_or(MoveError::PawnNotFound(self.actor))
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<MoveOutcome, Self::Error> {
        let mover = state
            .entities
            .pawn(self.actor)
            .ok_or(MoveError::PawnNotFound(self.actor))?;
        let origin = mover.position;
        let mover_collision = mover.collision;
        let destination = self.destination_from(origin);

        let cell = state.world.cell(destination);
        // The store tolerates occupied/occupant divergence: check both.
        if cell.occupied || cell.occupant.is_some() {
            let occupant = cell
                .occupant
                .and_then(|id| state.entities.pawn(id))
                .filter(|pawn| pawn.is_alive());
            match occupant {
                Some(occupant) => match occupant.collision {
                    CollisionPolicy::Block => {
                        // Could not move; stayed in place.
                        return Ok(MoveOutcome {
                            moved: false,
                            from: origin,
                            to: origin,
                        });
                    }
                    CollisionPolicy::Overlap => {
                        let occupant_id = occupant.id;
                        state.events.push(GameEvent::Overlapped {
                            occupant: occupant_id,
                            mover: self.actor,
                        });
                        // The mover still enters the cell.
                        relocate(state, self.actor, mover_collision, origin, destination)
                    }
                    CollisionPolicy::None => {
                        relocate(state, self.actor, mover_collision, origin, destination)
                    }
                },
                // Stale occupant id: the cell is effectively free.
                None => relocate(state, self.actor, mover_collision, origin, destination),
            }
        } else {
            relocate(state, self.actor, mover_collision, origin, destination)
        }
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let pawn = state
            .entities
            .pawn(self.actor)
            .ok_or(MoveError::PawnNotFound(self.actor))?;
        let cell = state.world.cell(pawn.position);

        // Cells this pawn wrote must carry a flag consistent with its own
        // collision policy. Cells claimed by a later arrival are not ours
        // to validate.
        if cell.occupant == Some(self.actor)
            && cell.occupied != (pawn.collision == CollisionPolicy::Block)
        {
            return Err(MoveError::OccupancyDesync {
                pawn: self.actor,
                position: pawn.position,
            });
        }
        Ok(())
    }
}

/// Clears the source cell, stamps the destination with the mover's own
/// collision flag and id, and updates the pawn's position.
fn relocate(
    state: &mut GameState,
    actor: EntityId,
    collision: CollisionPolicy,
    origin: GridVec,
    destination: GridVec,
) -> Result<MoveOutcome, MoveError> {
    state.world.set_cell(origin, Cell::empty(origin));
    state.world.set_cell(
        destination,
        Cell {
            location: destination,
            occupied: collision == CollisionPolicy::Block,
            occupant: Some(actor),
        },
    );

    let pawn = state
        .entities
        .pawn_mut(actor)
        .ok_or(MoveError::PawnNotFound(actor))?;
    pawn.position = destination;

    state.events.push(GameEvent::Moved {
        pawn: actor,
        from: origin,
        to: destination,
    });

    Ok(MoveOutcome {
        moved: true,
        from: origin,
        to: destination,
    })
}
