//! Animation resource registry.
//!
//! Holds the animation sets built during initialization, keyed by string IDs
//! (one per character sheet). Content loading clones a set out of the store
//! into each [`AnimatedSprite`](crate::components::animatedsprite::AnimatedSprite);
//! the frame strips themselves are shared, so the clone only copies cursors.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::animation::AnimationSet;

/// Central registry of reusable animation sets keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    sets: FxHashMap<String, AnimationSet>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, set: AnimationSet) {
        self.sets.insert(id.into(), set);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&AnimationSet> {
        self.sets.get(id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::{Animation, AnimationKey};
    use raylib::prelude::Vector2;

    #[test]
    fn test_insert_then_get_by_key() {
        let size = Vector2 { x: 32.0, y: 32.0 };
        let origin = Vector2 { x: 0.0, y: 0.0 };
        let mut store = AnimationStore::new();
        store.insert(
            "bat",
            AnimationSet::from_fn(|_| Animation::new(3, 5.0, size, origin)),
        );

        let set = store.get("bat").unwrap();
        assert_eq!(set.get(AnimationKey::WalkUp).frame_count(), 3);
        assert!(store.get("skeleton").is_none());
    }
}
