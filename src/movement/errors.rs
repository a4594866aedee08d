//! Movement domain: setup errors.

use bevy::prelude::*;

/// A Mover that cannot reach a rigid body. This is a setup defect, so the resolving
/// system returns it and Bevy's error handler stops the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoverError {
    /// No explicit [`MoverBody`](super::MoverBody) and no `RigidBody` on the entity itself.
    MissingBody { entity: Entity },
    /// An explicit [`MoverBody`](super::MoverBody) points at an entity without a `RigidBody`.
    BodyNotFound { entity: Entity, body: Entity },
}

impl std::fmt::Display for MoverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoverError::MissingBody { entity } => {
                write!(f, "Mover {entity} has no MoverBody and no RigidBody of its own")
            }
            MoverError::BodyNotFound { entity, body } => {
                write!(f, "Mover {entity} references {body}, which has no RigidBody")
            }
        }
    }
}

impl std::error::Error for MoverError {}
