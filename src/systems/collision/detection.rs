use crate::core::math::Vector;
use crate::domain::{Ball, Wall};

use super::{CollisionTarget, Contact, Overlap};

/// Nearest point of `wall` to the center of `ball`
pub fn find_closest_point(ball: &Ball, wall: &Wall) -> Vector {
    wall.closest_point(ball.position)
}

/// Ball vs ball: `distance < r1 + r2`. Ball vs wall: `distance <= r`.
pub fn is_colliding<T: CollisionTarget + ?Sized>(ball: &Ball, target: &T) -> bool {
    let contact = Contact::between(ball, target);
    overlaps(&contact, ball, target)
}

/// Contact for the pair if it collides
pub fn detect<T: CollisionTarget + ?Sized>(ball: &Ball, target: &T) -> Option<Contact> {
    let contact = Contact::between(ball, target);
    overlaps(&contact, ball, target).then_some(contact)
}

fn overlaps<T: CollisionTarget + ?Sized>(contact: &Contact, ball: &Ball, target: &T) -> bool {
    let reach = ball.radius + target.reach();
    match target.overlap() {
        Overlap::Strict => contact.distance < reach,
        Overlap::Inclusive => contact.distance <= reach,
    }
}
