//! Pattern 4: Capability Composition
//! Example: robots assembled from independent talk/walk/fly strategies
//!
//! Run with: cargo run --bin p5_robot_simulation

use colored::Colorize;
use design_patterns::robot::{NoFly, NoTalk, NoWalk, NormalFly, NormalTalk, NormalWalk};
use design_patterns::{logging, Outcome, Robot};

fn show(outcome: Outcome) {
    if outcome.performed {
        println!("  {}", outcome.message.green());
    } else {
        println!("  {}", outcome.message.red());
    }
}

fn run(robot: &Robot) {
    println!("{}", robot.projection().bold());
    for outcome in robot.outcomes() {
        show(outcome);
    }
}

fn main() {
    logging::init("info");

    println!("=== Robot Simulation Demo ===\n");

    let drone = Robot::drone(NoTalk, NoWalk, NormalFly);
    let worker = Robot::worker(NormalTalk, NormalWalk, NoFly);

    run(&drone);
    println!();
    run(&worker);

    println!("\n=== Key Points ===");
    println!("- Behaviour is composed, not inherited");
    println!("- A robot that cannot fly still walks and talks");
}
