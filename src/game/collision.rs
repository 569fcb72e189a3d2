//=========================================================================
// Collision Resolver
//=========================================================================
//
// Resolves one frame's projectile × hazard and hazard × player overlaps.
//
// Algorithm:
//   1. Wrap every projectile as alive.
//   2. For each hazard, test it against every projectile (dead ones too;
//      they are never revived) and, independently, against the player.
//      Any overlap destroys the hazard.
//   3. Destroyed hazards emit one effect center each; dead projectiles
//      are dropped.
//
// Any overlap kills, so the outcome does not depend on iteration order.
// Cost is O(P·H).
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use super::hazard::Hazard;
use super::projectile::Projectile;
use crate::core::Rect;

//=== Alive ===============================================================

/// Liveness wrapper used within a single resolver pass.
#[derive(Debug)]
pub struct Alive<T> {
    pub item: T,
    pub alive: bool,
}

impl<T> Alive<T> {
    pub fn new(item: T) -> Self {
        Self { item, alive: true }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Unwraps the item if it is still alive.
    pub fn into_alive(self) -> Option<T> {
        self.alive.then_some(self.item)
    }
}

//=== Resolution ==========================================================

/// Outcome of one resolver pass.
#[derive(Debug, Default)]
pub struct Resolution {
    pub hazards: Vec<Hazard>,
    pub projectiles: Vec<Projectile>,

    /// Centers of destroyed hazards, one per hazard.
    pub effect_centers: Vec<Vec2>,

    pub player_destroyed: bool,
}

//=== resolve =============================================================

pub fn resolve(projectiles: Vec<Projectile>, hazards: Vec<Hazard>, player: Rect) -> Resolution {
    let mut projectiles: Vec<Alive<Projectile>> = projectiles.into_iter().map(Alive::new).collect();
    let mut resolution = Resolution::default();

    for hazard in hazards {
        let rect = hazard.rect();
        let mut destroyed = false;

        for projectile in projectiles.iter_mut() {
            if rect.intersects(&projectile.item.rect()) {
                projectile.kill();
                destroyed = true;
            }
        }

        if rect.intersects(&player) {
            resolution.player_destroyed = true;
            destroyed = true;
        }

        if destroyed {
            trace!(target: "game", "Hazard destroyed at ({:.1}, {:.1})", rect.center().x, rect.center().y);
            resolution.effect_centers.push(rect.center());
        } else {
            resolution.hazards.push(hazard);
        }
    }

    resolution.projectiles = projectiles.into_iter().filter_map(Alive::into_alive).collect();
    resolution
}

//=========================================================================
// Unit Tests
//=========================================================================
