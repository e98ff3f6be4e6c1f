//! Sprite-sheet playback state and the rule-driven animation selector.
//!
//! [`AnimationController`] holds an ordered list of [`AnimRule`]s evaluated
//! against the entity's [`Signals`](crate::components::signals::Signals); the
//! first matching rule picks the animation, otherwise the fallback plays.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    pub fn restart(&mut self, animation_key: impl Into<String>) {
        self.animation_key = animation_key.into();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    pub fn apply(self, lhs: f32, rhs: f32) -> bool {
        match self {
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Condition {
    ScalarCmp { key: String, op: CmpOp, value: f32 },
    HasFlag { key: String },
    LacksFlag { key: String },
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn flag(key: &str) -> Self {
        Condition::HasFlag { key: key.into() }
    }

    pub fn no_flag(key: &str) -> Self {
        Condition::LacksFlag { key: key.into() }
    }

    pub fn scalar(key: &str, op: CmpOp, value: f32) -> Self {
        Condition::ScalarCmp {
            key: key.into(),
            op,
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimRule {
    pub when: Condition,
    pub set_key: String,
}

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct AnimationController {
    pub current_key: String,
    pub rules: Vec<AnimRule>,
    pub fallback_key: String,
}

impl AnimationController {
    pub fn new(fallback_key: impl Into<String>) -> Self {
        let fallback_key = fallback_key.into();
        Self {
            current_key: fallback_key.clone(),
            rules: Vec::new(),
            fallback_key,
        }
    }

    pub fn with_rule(mut self, when: Condition, set_key: impl Into<String>) -> Self {
        self.rules.push(AnimRule {
            when,
            set_key: set_key.into(),
        });
        self
    }
}
