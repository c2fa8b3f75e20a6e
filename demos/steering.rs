use std::error::Error;
use std::f64::consts::PI;
use tvector::*;

const MAX_SPEED: f64 = 4.0;
const STEER_EASE: f64 = 0.25;
const ARRIVE_RADIUS: f64 = 1.0;

fn main() -> Result<(), Box<dyn Error>> {
    let target: Vector2 = "(40, 25)".parse()?;

    let mut position = Vector2::zero();
    // start heading straight down, away from the target
    let mut velocity = Vector2::new(0.0, -MAX_SPEED);

    for step in 0..64 {
        if position.distance(target) < ARRIVE_RADIUS {
            println!("arrived at {:.2} after {} steps", position, step);
            return Ok(());
        }

        // desired velocity points at the target at full speed
        let mut desired = target - position;
        desired.limit(MAX_SPEED);

        // ease current velocity toward the desired one
        velocity.lerp(desired, STEER_EASE);

        // slow down on approach, never overshoot the target
        let remaining = position.distance(target);
        if velocity.magnitude() > remaining {
            velocity.set_magnitude(remaining);
        }
        position += velocity;

        let turn = Vector2::angle_between(velocity, desired);
        let side = if cross(velocity, desired) >= 0.0 { "left" } else { "right" };
        println!(
            "step {:2} pos {:.2} heading {:7.2}° off-target {:6.2}° ({})",
            step,
            position,
            velocity.heading() * 180.0 / PI,
            turn * 180.0 / PI,
            side,
        );
    }

    // orbit a marker once around the final position
    let mut marker = Vector2::new(2.0, 0.0);
    for _ in 0..4 {
        marker.rotate(PI / 2.0);
        println!("marker {:.2}", position + marker);
    }

    Ok(())
}
