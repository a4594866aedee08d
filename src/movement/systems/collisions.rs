//! Movement domain: ground tracking from collision notifications.
//!
//! Contacts are matched against the resolved [`MoverBody`], which is not necessarily the
//! Mover's own entity.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::collections::HashSet;

use crate::movement::{ContactSignal, GroundState, MoverBody};

/// Collision-stay: any touching contact on the body this step grounds the Mover.
pub(crate) fn track_contact_persist(
    collisions: Collisions,
    mut movers: Query<(Entity, &MoverBody, &mut GroundState)>,
) {
    let touching: HashSet<Entity> = collisions
        .iter()
        .filter(|contacts| contacts.is_touching())
        .flat_map(|contacts| {
            [
                Some(contacts.collider1),
                Some(contacts.collider2),
                contacts.body1,
                contacts.body2,
            ]
        })
        .flatten()
        .collect();

    for (entity, body, mut ground) in &mut movers {
        if !touching.contains(&body.0) {
            continue;
        }

        let was_grounded = ground.is_grounded();
        ground.apply(ContactSignal::Persist);
        if !was_grounded {
            debug!("Mover {} grounded", entity);
        }
    }
}

/// Collision-exit: any separation clears the ground state, even if other contacts remain.
pub(crate) fn track_contact_end(
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut movers: Query<(Entity, &MoverBody, &mut GroundState)>,
) {
    for event in collision_end_events.read() {
        let involved = [
            Some(event.collider1),
            Some(event.collider2),
            event.body1,
            event.body2,
        ];

        for (entity, body, mut ground) in &mut movers {
            if !involved.contains(&Some(body.0)) {
                continue;
            }
            if ground.is_grounded() {
                debug!("Mover {} left the ground", entity);
            }
            ground.apply(ContactSignal::End);
        }
    }
}
