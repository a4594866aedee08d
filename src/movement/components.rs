//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Smallest positive `f32` (the first subnormal). Magnitudes are never allowed below it.
pub const MIN_MAGNITUDE: f32 = f32::from_bits(1);

/// Default horizontal drive.
pub const DEFAULT_FORCE: f32 = 10.0;

/// Default jump strength.
pub const DEFAULT_JUMP_IMPULSE: f32 = 10.0;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and walls
    Ground,
    /// Player character
    Player,
}

/// Basic 2D locomotion: horizontal drive by force, a single jump by impulse.
///
/// Both magnitudes are strictly positive. Every way of setting them goes through
/// [`clamp_magnitude`], so a tick can never observe zero, a negative value, or infinity.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
#[require(GroundState)]
pub struct Mover {
    /// How much force to move with.
    force: f32,
    /// How strong the jump should be.
    jump_impulse: f32,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            force: DEFAULT_FORCE,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
        }
    }
}

impl Mover {
    pub fn new(force: f32, jump_impulse: f32) -> Self {
        Self {
            force: clamp_magnitude(force),
            jump_impulse: clamp_magnitude(jump_impulse),
        }
    }

    pub fn force(&self) -> f32 {
        self.force
    }

    pub fn jump_impulse(&self) -> f32 {
        self.jump_impulse
    }

    pub fn set_force(&mut self, force: f32) {
        self.force = clamp_magnitude(force);
    }

    pub fn set_jump_impulse(&mut self, jump_impulse: f32) {
        self.jump_impulse = clamp_magnitude(jump_impulse);
    }

    /// Re-clamp values that were written around the setters (reflection, inspectors).
    /// Returns true if anything changed.
    pub fn revalidate(&mut self) -> bool {
        let validated = Self::new(self.force, self.jump_impulse);
        if validated.force.to_bits() == self.force.to_bits()
            && validated.jump_impulse.to_bits() == self.jump_impulse.to_bits()
        {
            return false;
        }
        *self = validated;
        true
    }
}

/// Clamp a configured magnitude into the positive finite range. Non-positive values and
/// NaN become the smallest positive `f32`; `+inf` becomes `f32::MAX`.
pub fn clamp_magnitude(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else if value == f32::INFINITY {
        f32::MAX
    } else {
        MIN_MAGNITUDE
    }
}

/// Non-owning handle to the rigid body a [`Mover`] drives.
///
/// Usually the Mover's own entity. Resolved once by `resolve_mover_bodies` when not
/// supplied at spawn.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct MoverBody(pub Entity);

/// Whether the Mover is touching anything this step.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[reflect(Component)]
pub enum GroundState {
    #[default]
    Airborne,
    Grounded,
}

impl GroundState {
    pub fn is_grounded(self) -> bool {
        self == GroundState::Grounded
    }
}
