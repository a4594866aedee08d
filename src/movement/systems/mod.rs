//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod setup;

pub(crate) use collisions::{track_contact_end, track_contact_persist};
pub(crate) use input::read_input;
pub(crate) use locomotion::{apply_horizontal_force, apply_jump};
pub(crate) use setup::{resolve_mover_bodies, validate_movers};
