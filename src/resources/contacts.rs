//! Pairs of entities that were overlapping at the end of the last frame.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashSet;

#[derive(Resource, Debug, Default)]
pub struct ContactPairs {
    pairs: FxHashSet<(Entity, Entity)>,
}

/// Canonical order so (a, b) and (b, a) are the same contact.
pub fn pair_key(a: Entity, b: Entity) -> (Entity, Entity) {
    if a <= b { (a, b) } else { (b, a) }
}

impl ContactPairs {
    /// Replace the stored set with `current` and return the pairs that were
    /// not touching before.
    pub fn advance(&mut self, current: FxHashSet<(Entity, Entity)>) -> Vec<(Entity, Entity)> {
        let mut entered: Vec<(Entity, Entity)> = current
            .iter()
            .filter(|pair| !self.pairs.contains(pair))
            .copied()
            .collect();
        entered.sort();
        self.pairs = current;
        entered
    }

    pub fn contains(&self, a: Entity, b: Entity) -> bool {
        self.pairs.contains(&pair_key(a, b))
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
