//! Ball-ball collision detection and response
//!
//! Detection is a plain center-distance test. Response swaps the velocity
//! components along the collision normal (equal-mass elastic collision,
//! regardless of radius), damps both results, then pushes the pair apart by
//! half the overlap each.

use glam::DVec2;

use super::body::Body;
use super::config::PhysicsConfig;

/// Geometry of an overlapping pair, seen from the first body
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Direction of the line from the first center to the second (radians)
    pub angle: f64,
    /// Unit vector for `angle`
    pub normal: DVec2,
    pub distance: f64,
    /// How far the circles interpenetrate
    pub overlap: f64,
}

/// What a contact did to the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactResponse {
    /// Both bodies were (nearly) still: positions corrected, velocities untouched
    Separated,
    /// Velocities exchanged along the normal, then positions corrected
    Exchanged,
}

/// Check whether two bodies overlap
pub fn detect(a: &Body, b: &Body) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let reach = a.radius + b.radius;
    if distance >= reach {
        return None;
    }

    // atan2(0, 0) is 0, so coincident centers separate along +x
    let angle = delta.y.atan2(delta.x);
    Some(Contact {
        angle,
        normal: DVec2::from_angle(angle),
        distance,
        overlap: reach - distance,
    })
}

/// Equal-mass elastic exchange: the along-normal components swap, the
/// tangential components stay with their body.
#[inline]
pub fn elastic_exchange(va: DVec2, vb: DVec2, normal: DVec2) -> (DVec2, DVec2) {
    let tangent = normal.perp();
    let a = normal * vb.dot(normal) + tangent * va.dot(tangent);
    let b = normal * va.dot(normal) + tangent * vb.dot(tangent);
    (a, b)
}

/// Push both bodies apart along the normal by half the overlap each
#[inline]
pub fn separate(a: &mut Body, b: &mut Body, contact: &Contact) {
    let push = contact.normal * (contact.overlap / 2.0);
    a.pos -= push;
    b.pos += push;
}

/// Resolve one detected contact between `a` and `b`.
///
/// A resting body only wakes when the other one is faster than the wake
/// speed. If both are resting or nearly still afterwards, no momentum is
/// exchanged and the pair is only separated.
pub fn resolve_contact(
    a: &mut Body,
    b: &mut Body,
    contact: &Contact,
    config: &PhysicsConfig,
) -> ContactResponse {
    let a_speed = a.speed();
    let b_speed = b.speed();

    if a.is_resting() && b_speed > config.wake_speed {
        a.wake();
        log::debug!("resting body woken by impact at speed {b_speed:.3}");
    }
    if b.is_resting() && a_speed > config.wake_speed {
        b.wake();
        log::debug!("resting body woken by impact at speed {a_speed:.3}");
    }

    let a_quiet = a.is_resting() || a_speed < config.near_rest_speed;
    let b_quiet = b.is_resting() || b_speed < config.near_rest_speed;
    if a_quiet && b_quiet {
        separate(a, b, contact);
        return ContactResponse::Separated;
    }

    let (va, vb) = elastic_exchange(a.vel, b.vel, contact.normal);
    a.vel = va * config.collision_damping;
    b.vel = vb * config.collision_damping;
    separate(a, b, contact);
    ContactResponse::Exchanged
}

/// Two distinct mutable bodies out of one slice
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Resolve contacts between `bodies[index]` and every other body, in
/// index order. Pushes applied here are visible to later pairs in the
/// same pass.
pub fn resolve_contacts(bodies: &mut [Body], index: usize, config: &PhysicsConfig) -> usize {
    let mut contacts = 0;
    for other in 0..bodies.len() {
        if other == index {
            continue;
        }
        let (body, other_body) = pair_mut(bodies, index, other);
        if let Some(contact) = detect(body, other_body) {
            let response = resolve_contact(body, other_body, &contact, config);
            log::trace!("contact {index}<->{other}: {response:?}, overlap {:.3}", contact.overlap);
            contacts += 1;
        }
    }
    contacts
}
