use ballpit_engine::collision::{collide, detect, is_colliding, resolve_collision, resolve_penetration};
use ballpit_engine::{Ball, Vector, Wall};

fn ball(x: f64, y: f64, r: f64, mass: f64) -> Ball {
    let mut ball = Ball::new(Vector::new(x, y), r);
    ball.mass = mass;
    ball
}

fn momentum(a: &Ball, b: &Ball) -> Vector {
    a.velocity.multiply(a.mass) + b.velocity.multiply(b.mass)
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn touching_balls_do_not_collide_but_touching_walls_do() {
    let a = ball(0.0, 0.0, 10.0, 1.0);
    let b = ball(20.0, 0.0, 10.0, 1.0);
    assert!(!is_colliding(&a, &b));

    let wall = Wall::new(Vector::new(-50.0, 10.0), Vector::new(50.0, 10.0));
    assert!(is_colliding(&a, &wall));
}

#[test]
fn penetration_leaves_balls_exactly_touching() {
    let mut a = ball(0.0, 0.0, 10.0, 1.0);
    let mut b = ball(5.0, 12.0, 15.0, 3.0);

    resolve_penetration(&mut a, &mut b);

    assert_close(a.position.distance(b.position), 25.0);
    assert_eq!(a.velocity, Vector::zero());
    assert_eq!(b.velocity, Vector::zero());
}

#[test]
fn penetration_split_follows_inverse_mass() {
    let mut light = ball(0.0, 0.0, 10.0, 1.0);
    let mut heavy = ball(16.0, 0.0, 10.0, 3.0);

    resolve_penetration(&mut light, &mut heavy);

    // depth 4 split 3:1
    assert_close(light.position.x, -3.0);
    assert_close(heavy.position.x, 17.0);
}

#[test]
fn impulse_conserves_momentum() {
    let mut a = ball(0.0, 0.0, 10.0, 2.0);
    let mut b = ball(15.0, 5.0, 10.0, 5.0);
    a.velocity = Vector::new(3.0, 1.0);
    b.velocity = Vector::new(-1.0, 0.5);
    a.elasticity = 0.7;

    let before = momentum(&a, &b);
    resolve_collision(&mut a, &mut b);
    let after = momentum(&a, &b);

    assert_close(before.x, after.x);
    assert_close(before.y, after.y);
}

#[test]
fn elastic_head_on_swaps_velocities() {
    let mut a = ball(0.0, 0.0, 10.0, 1.0);
    let mut b = ball(19.0, 0.0, 10.0, 1.0);
    a.velocity = Vector::new(2.0, 0.0);

    collide(&mut a, &mut b).expect("overlapping balls collide");

    assert_close(a.velocity.x, 0.0);
    assert_close(b.velocity.x, 2.0);
}

#[test]
fn restitution_uses_the_smaller_elasticity() {
    let mut a = ball(0.0, 0.0, 10.0, 1.0);
    let mut b = ball(19.0, 0.0, 10.0, 1.0);
    a.velocity = Vector::new(2.0, 0.0);
    b.elasticity = 0.5;

    collide(&mut a, &mut b);

    // new separation speed is half the old
    assert_close(b.velocity.x - a.velocity.x, 1.0);
}

#[test]
fn wall_bounce_reflects_normal_component() {
    let wall = Wall::new(Vector::new(-100.0, 0.0), Vector::new(100.0, 0.0));
    let mut b = ball(10.0, 8.0, 10.0, 1.0);
    b.velocity = Vector::new(1.5, -2.0);
    b.elasticity = 0.5;
    let mut target = wall.clone();

    let contact = collide(&mut b, &mut target).expect("ball overlaps the wall");

    assert_close(contact.depth, 2.0);
    assert_close(b.position.y, 10.0);
    assert_close(b.velocity.x, 1.5);
    assert_close(b.velocity.y, 1.0);
    assert_eq!(target, wall);
}

#[test]
fn massless_pair_is_left_alone() {
    let mut a = ball(0.0, 0.0, 10.0, 0.0);
    let mut b = ball(10.0, 0.0, 10.0, 0.0);
    a.velocity = Vector::new(1.0, 0.0);

    collide(&mut a, &mut b);

    assert_eq!(a.position, Vector::zero());
    assert_eq!(b.position, Vector::new(10.0, 0.0));
    assert_eq!(a.velocity, Vector::new(1.0, 0.0));
    assert!(a.position.x.is_finite());
}

#[test]
fn massless_ball_acts_as_an_anchor_from_either_side() {
    for anchor_first in [true, false] {
        let mut anchor = ball(0.0, 0.0, 10.0, 0.0);
        let mut mover = ball(12.0, 0.0, 10.0, 2.0);
        mover.velocity = Vector::new(-3.0, 0.0);
        mover.elasticity = 0.5;

        if anchor_first {
            collide(&mut anchor, &mut mover).expect("pair overlaps");
        } else {
            collide(&mut mover, &mut anchor).expect("pair overlaps");
        }

        assert_eq!(anchor.position, Vector::zero(), "anchor_first = {anchor_first}");
        assert_eq!(anchor.velocity, Vector::zero(), "anchor_first = {anchor_first}");
        assert_close(mover.position.x, 20.0);
        assert_close(mover.velocity.x, 1.5);
    }
}

#[test]
fn apart_bodies_produce_no_contact() {
    let a = ball(0.0, 0.0, 10.0, 1.0);
    let wall = Wall::new(Vector::new(-10.0, 50.0), Vector::new(10.0, 50.0));
    assert!(detect(&a, &wall).is_none());
    assert!(detect(&a, &ball(100.0, 0.0, 10.0, 1.0)).is_none());
}
