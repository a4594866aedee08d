//! Movement domain: body resolution and edit-time validation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Mover, MoverBody, MoverError};

/// Resolve the body handle of newly added Movers, once.
///
/// An explicit [`MoverBody`] must point at a rigid body; otherwise the Mover's own entity
/// must be one. Anything else is a setup defect and is returned as an error. The resolved
/// body gets `CollisionEventsEnabled` so its contacts end with a `CollisionEnd`.
pub(crate) fn resolve_mover_bodies(
    mut commands: Commands,
    added: Query<(Entity, Option<&MoverBody>), Added<Mover>>,
    rigid_bodies: Query<(), With<RigidBody>>,
) -> Result {
    for (entity, body) in &added {
        let body = match body {
            Some(body) => {
                if !rigid_bodies.contains(body.0) {
                    return Err(MoverError::BodyNotFound {
                        entity,
                        body: body.0,
                    }
                    .into());
                }
                body.0
            }
            None => {
                if !rigid_bodies.contains(entity) {
                    return Err(MoverError::MissingBody { entity }.into());
                }
                commands.entity(entity).insert(MoverBody(entity));
                entity
            }
        };
        commands.entity(body).insert(CollisionEventsEnabled);
        debug!("Mover {} drives rigid body {}", entity, body);
    }
    Ok(())
}

/// Re-clamp Movers whose values were written through reflection.
pub(crate) fn validate_movers(mut movers: Query<(Entity, &mut Mover), Changed<Mover>>) {
    for (entity, mut mover) in &mut movers {
        if mover.bypass_change_detection().revalidate() {
            warn!(
                "Mover {} had a non-positive or non-finite magnitude; clamped to force={}, jump_impulse={}",
                entity,
                mover.force(),
                mover.jump_impulse()
            );
        }
    }
}
