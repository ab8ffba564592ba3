//! Draw-order arena for sprite specs.
//!
//! Every defined spec occupies one stable index in the draw order; later
//! indices draw on top. Swapping two specs exchanges their indices without
//! disturbing anything else.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;

use crate::error::EngineError;

/// Ordered list of sprite spec keys, back-to-front.
#[derive(Resource, Debug, Clone, Default)]
pub struct RenderOrder {
    order: Vec<Arc<str>>,
}

impl RenderOrder {
    /// Append a spec at the top of the draw order.
    pub fn push(&mut self, key: Arc<str>) {
        self.order.push(key);
    }

    /// Current draw index of a spec, if it is registered.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k.as_ref() == key)
    }

    /// Exchange the draw indices of two specs.
    pub fn swap(&mut self, a: &str, b: &str) -> Result<(), EngineError> {
        let ia = self
            .index_of(a)
            .ok_or_else(|| EngineError::UnknownSprite { name: a.to_owned() })?;
        let ib = self
            .index_of(b)
            .ok_or_else(|| EngineError::UnknownSprite { name: b.to_owned() })?;
        self.order.swap(ia, ib);
        Ok(())
    }

    /// Remove a spec from the draw order. Later specs keep their relative
    /// order.
    pub fn remove(&mut self, key: &str) {
        if let Some(i) = self.index_of(key) {
            self.order.remove(i);
        }
    }

    /// Spec keys back-to-front.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<str>> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_indices() {
        let mut order = RenderOrder::default();
        order.push("a".into());
        order.push("b".into());
        order.push("c".into());
        assert_eq!(order.index_of("a"), Some(0));
        assert_eq!(order.index_of("c"), Some(2));
    }

    #[test]
    fn swap_exchanges_indices_only() {
        let mut order = RenderOrder::default();
        order.push("a".into());
        order.push("b".into());
        order.push("c".into());
        order.swap("a", "c").unwrap();
        assert_eq!(order.index_of("a"), Some(2));
        assert_eq!(order.index_of("b"), Some(1));
        assert_eq!(order.index_of("c"), Some(0));
    }

    #[test]
    fn swap_with_unknown_spec_fails() {
        let mut order = RenderOrder::default();
        order.push("a".into());
        assert!(matches!(
            order.swap("a", "ghost"),
            Err(EngineError::UnknownSprite { .. })
        ));
    }
}
