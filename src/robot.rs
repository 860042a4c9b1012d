//! Capability composition: a robot is a bundle of three independent
//! behaviour strategies, one per axis.
//!
//! A consumer that only needs to talk depends on [`Talkable`] and never sees
//! flying. A robot can mix a working strategy on one axis with a refusing one
//! on another.

/// Result of asking a strategy to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub performed: bool,
    pub message: &'static str,
}

impl Outcome {
    const fn normal(message: &'static str) -> Self {
        Self {
            performed: true,
            message,
        }
    }

    const fn refused(message: &'static str) -> Self {
        Self {
            performed: false,
            message,
        }
    }
}

pub trait Talkable {
    fn talk(&self) -> Outcome;
}

pub trait Walkable {
    fn walk(&self) -> Outcome;
}

pub trait Flyable {
    fn fly(&self) -> Outcome;
}

pub struct NormalTalk;
pub struct NoTalk;

impl Talkable for NormalTalk {
    fn talk(&self) -> Outcome {
        Outcome::normal("robot can talk normally")
    }
}

impl Talkable for NoTalk {
    fn talk(&self) -> Outcome {
        Outcome::refused("robot can not talk")
    }
}

pub struct NormalWalk;
pub struct NoWalk;

impl Walkable for NormalWalk {
    fn walk(&self) -> Outcome {
        Outcome::normal("robot can walk normally")
    }
}

impl Walkable for NoWalk {
    fn walk(&self) -> Outcome {
        Outcome::refused("robot can not walk")
    }
}

pub struct NormalFly;
pub struct NoFly;

impl Flyable for NormalFly {
    fn fly(&self) -> Outcome {
        Outcome::normal("robot can fly normally")
    }
}

impl Flyable for NoFly {
    fn fly(&self) -> Outcome {
        Outcome::refused("robot can not fly")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Drone,
    Worker,
}

impl Model {
    pub fn name(self) -> &'static str {
        match self {
            Model::Drone => "Drone",
            Model::Worker => "Worker",
        }
    }
}

/// Strategy bundle. Each axis is owned by the robot and fixed at construction.
pub struct Robot {
    model: Model,
    talker: Box<dyn Talkable>,
    walker: Box<dyn Walkable>,
    flyer: Box<dyn Flyable>,
}

impl Robot {
    pub fn new(
        model: Model,
        talker: impl Talkable + 'static,
        walker: impl Walkable + 'static,
        flyer: impl Flyable + 'static,
    ) -> Self {
        Self {
            model,
            talker: Box::new(talker),
            walker: Box::new(walker),
            flyer: Box::new(flyer),
        }
    }

    pub fn drone(
        talker: impl Talkable + 'static,
        walker: impl Walkable + 'static,
        flyer: impl Flyable + 'static,
    ) -> Self {
        Self::new(Model::Drone, talker, walker, flyer)
    }

    pub fn worker(
        talker: impl Talkable + 'static,
        walker: impl Walkable + 'static,
        flyer: impl Flyable + 'static,
    ) -> Self {
        Self::new(Model::Worker, talker, walker, flyer)
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn projection(&self) -> String {
        format!("Hello i am {}", self.model.name())
    }

    pub fn talk(&self) -> Outcome {
        self.talker.talk()
    }

    pub fn walk(&self) -> Outcome {
        self.walker.walk()
    }

    pub fn fly(&self) -> Outcome {
        self.flyer.fly()
    }

    /// Walk, talk and fly, in demonstration order.
    pub fn outcomes(&self) -> [Outcome; 3] {
        [self.walk(), self.talk(), self.fly()]
    }

    /// Projection followed by every outcome message, one line each.
    pub fn report(&self) -> Vec<String> {
        std::iter::once(self.projection())
            .chain(self.outcomes().iter().map(|o| o.message.to_string()))
            .collect()
    }
}

impl Talkable for Robot {
    fn talk(&self) -> Outcome {
        Robot::talk(self)
    }
}

impl Walkable for Robot {
    fn walk(&self) -> Outcome {
        Robot::walk(self)
    }
}

impl Flyable for Robot {
    fn fly(&self) -> Outcome {
        Robot::fly(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A consumer that only cares about one capability.
    fn announce(speaker: &dyn Talkable) -> &'static str {
        speaker.talk().message
    }

    #[test]
    fn drone_only_flies() {
        let drone = Robot::drone(NoTalk, NoWalk, NormalFly);
        assert!(!drone.talk().performed);
        assert!(!drone.walk().performed);
        assert!(drone.fly().performed);
        assert_eq!(drone.fly().message, "robot can fly normally");
    }

    #[test]
    fn worker_report_order() {
        let worker = Robot::worker(NormalTalk, NormalWalk, NoFly);
        assert_eq!(
            worker.report(),
            vec![
                "Hello i am Worker",
                "robot can walk normally",
                "robot can talk normally",
                "robot can not fly",
            ]
        );
    }

    #[test]
    fn outcomes_follow_report_order() {
        let drone = Robot::drone(NoTalk, NoWalk, NormalFly);
        let performed: Vec<bool> = drone.outcomes().iter().map(|o| o.performed).collect();
        assert_eq!(performed, [false, false, true]);
        let report = drone.report();
        let messages: Vec<String> = drone.outcomes().iter().map(|o| o.message.to_string()).collect();
        assert_eq!(&report[1..], messages);
    }

    #[test]
    fn axes_are_independent() {
        let a = Robot::drone(NormalTalk, NoWalk, NoFly);
        let b = Robot::drone(NormalTalk, NormalWalk, NormalFly);
        assert_eq!(a.talk(), b.talk());
        assert_ne!(a.walk(), b.walk());
        assert_ne!(a.fly(), b.fly());
    }

    #[test]
    fn robot_is_usable_through_a_single_capability() {
        let worker = Robot::worker(NormalTalk, NormalWalk, NoFly);
        let drone = Robot::drone(NoTalk, NoWalk, NormalFly);
        assert_eq!(announce(&worker), "robot can talk normally");
        assert_eq!(announce(&drone), "robot can not talk");
        assert_eq!(announce(&NormalTalk), "robot can talk normally");
    }

    #[test]
    fn projection_names_model() {
        assert_eq!(Robot::drone(NoTalk, NoWalk, NormalFly).projection(), "Hello i am Drone");
        assert_eq!(Robot::worker(NoTalk, NoWalk, NoFly).model(), Model::Worker);
    }
}
