use crate::domain::Ball;

use super::detection::detect;
use super::{CollisionTarget, Contact};

/// Detect, separate and bounce one pair. Both resolution passes use the
/// contact measured before either of them ran.
pub fn collide<T: CollisionTarget + ?Sized>(ball: &mut Ball, target: &mut T) -> Option<Contact> {
    let contact = detect(ball, target)?;
    apply_penetration(ball, target, &contact);
    apply_collision(ball, target, &contact);
    Some(contact)
}

/// Move the pair apart so they just touch. Velocities are untouched.
pub fn resolve_penetration<T: CollisionTarget + ?Sized>(ball: &mut Ball, target: &mut T) {
    let contact = Contact::between(ball, target);
    apply_penetration(ball, target, &contact);
}

/// Apply the collision impulse along the contact normal. Positions are untouched.
pub fn resolve_collision<T: CollisionTarget + ?Sized>(ball: &mut Ball, target: &mut T) {
    let contact = Contact::between(ball, target);
    apply_collision(ball, target, &contact);
}

/// Positional correction for a measured contact.
///
/// Against a static target the ball moves the whole depth. Otherwise the
/// depth is split in proportion to inverse mass; two immovable bodies stay put.
pub fn apply_penetration<T: CollisionTarget + ?Sized>(ball: &mut Ball, target: &mut T, contact: &Contact) {
    if target.is_static() {
        ball.position = ball.position.add(contact.normal.multiply(contact.depth));
        return;
    }

    let inv_a = ball.inverse_mass();
    let inv_b = target.inverse_mass();
    let total_inverse_mass = inv_a + inv_b;
    if total_inverse_mass <= 0.0 {
        return;
    }

    let resolution = contact.normal.multiply(contact.depth / total_inverse_mass);
    ball.position = ball.position.add(resolution.multiply(inv_a));
    target.shift(resolution.multiply(-inv_b));
}

/// Velocity correction for a measured contact.
///
/// The separation velocity along the normal is replaced by
/// `-separation * elasticity`, where elasticity is the smaller of the two
/// bodies' (or the ball's own against a target without one).
pub fn apply_collision<T: CollisionTarget + ?Sized>(ball: &mut Ball, target: &mut T, contact: &Contact) {
    let normal = contact.normal;
    let relative_velocity = ball.velocity.subtract(target.velocity());
    let separation_velocity = relative_velocity.dot(normal);

    let elasticity = match target.elasticity() {
        Some(other) => ball.elasticity.min(other),
        None => ball.elasticity,
    };
    let new_separation_velocity = -separation_velocity * elasticity;
    let delta_velocity = new_separation_velocity - separation_velocity;

    if target.is_static() {
        ball.velocity = ball.velocity.add(normal.multiply(delta_velocity));
        return;
    }

    let inv_a = ball.inverse_mass();
    let inv_b = target.inverse_mass();
    let total_inverse_mass = inv_a + inv_b;
    if total_inverse_mass <= 0.0 {
        return;
    }

    let impulse = normal.multiply(delta_velocity / total_inverse_mass);
    ball.velocity = ball.velocity.add(impulse.multiply(inv_a));
    target.add_velocity(impulse.multiply(-inv_b));
}
