//! Axis-aligned box overlap tests and the hero's "wall slide" response.
//!
//! Resolution pushes the mover out of the obstacle along a single axis. Which
//! axis is picked from the mover's direction of travel: for diagonal motion the
//! side with the smaller penetration is assumed to have been hit first. This is
//! not physically accurate restitution, but it lets the hero slide along foes
//! instead of sticking to them.
//!
//! A mover with zero velocity on both axes is never corrected, so two
//! stationary boxes that overlap stay overlapped.

use crate::entity::Entity;

/// Rectangle with its origin in the top-left corner, y growing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Outcome of an overlap test, carrying the far edges reused by `resolve`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionTest {
    pub collides: bool,
    pub a_max_x: f32,
    pub a_max_y: f32,
    pub b_max_x: f32,
    pub b_max_y: f32,
}

pub fn test(a: &Aabb, b: &Aabb) -> CollisionTest {
    let a_max_x = a.right();
    let a_max_y = a.bottom();
    let b_max_x = b.right();
    let b_max_y = b.bottom();
    CollisionTest {
        collides: a.x < b_max_x && a_max_x > b.x && a.y < b_max_y && a_max_y > b.y,
        a_max_x,
        a_max_y,
        b_max_x,
        b_max_y,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Displacement applied to the mover along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub axis: Axis,
    pub delta: f32,
}

impl Correction {
    pub fn along_x(delta: f32) -> Self {
        Self {
            axis: Axis::X,
            delta,
        }
    }

    pub fn along_y(delta: f32) -> Self {
        Self {
            axis: Axis::Y,
            delta,
        }
    }
}

/// Push `mover` out of `obstacle`. `test` must come from `test(mover, obstacle)`.
pub fn resolve(mover: &mut Entity, obstacle: &Aabb, test: &CollisionTest) -> Option<Correction> {
    let delta_max_x = test.a_max_x - obstacle.x;
    let delta_max_y = test.a_max_y - obstacle.y;
    let delta_min_x = test.b_max_x - mover.x;
    let delta_min_y = test.b_max_y - mover.y;

    let vx = mover.velocity_x;
    let vy = mover.velocity_y;

    let correction = if vx > 0.0 && vy > 0.0 {
        // down/right: hit the obstacle's left side or its top first
        if delta_max_x < delta_max_y {
            Correction::along_x(-delta_max_x)
        } else {
            Correction::along_y(-delta_max_y)
        }
    } else if vx > 0.0 && vy < 0.0 {
        if delta_max_x < delta_min_y {
            Correction::along_x(-delta_max_x)
        } else {
            Correction::along_y(delta_min_y)
        }
    } else if vx > 0.0 {
        Correction::along_x(-delta_max_x)
    } else if vx < 0.0 && vy > 0.0 {
        if delta_min_x < delta_max_y {
            Correction::along_x(delta_min_x)
        } else {
            Correction::along_y(-delta_max_y)
        }
    } else if vx < 0.0 && vy < 0.0 {
        if delta_min_x < delta_min_y {
            Correction::along_x(delta_min_x)
        } else {
            Correction::along_y(delta_min_y)
        }
    } else if vx < 0.0 {
        Correction::along_x(delta_min_x)
    } else if vy > 0.0 {
        Correction::along_y(-delta_max_y)
    } else if vy < 0.0 {
        Correction::along_y(delta_min_y)
    } else {
        return None;
    };

    match correction.axis {
        Axis::X => mover.x += correction.delta,
        Axis::Y => mover.y += correction.delta,
    }
    Some(correction)
}

/// Resolve the hero (first entity) against every other entity, in list order.
/// Returns how many corrections were applied.
pub fn resolve_hero_collisions(entities: &mut [Entity]) -> usize {
    let Some((hero, others)) = entities.split_first_mut() else {
        return 0;
    };
    let mut corrections = 0;
    for other in others.iter() {
        let obstacle = other.aabb();
        let result = test(&hero.aabb(), &obstacle);
        if result.collides && resolve(hero, &obstacle, &result).is_some() {
            corrections += 1;
        }
    }
    corrections
}
