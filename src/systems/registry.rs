//! BodyRegistry - visual objects paired with physics body handles
//!
//! Append-only arena: an entity's `EntityId` is its insertion index and never
//! changes. There is no removal, so iteration order is insertion order.

use crate::domain::VisualObject;

/// Stable index into the registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One visual and the body that drives it.
///
/// `body` is a lookup handle, not ownership: the physics world decides
/// whether it still resolves.
#[derive(Clone, Debug)]
pub struct PairedEntity<H> {
    pub visual: VisualObject,
    pub body: H,
}

pub struct BodyRegistry<H> {
    entities: Vec<PairedEntity<H>>,
}

impl<H: Copy> BodyRegistry<H> {
    pub fn new() -> Self {
        Self { entities: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entities: Vec::with_capacity(capacity) }
    }

    /// Append a pair. No duplicate detection.
    pub fn register(&mut self, visual: VisualObject, body: H) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(PairedEntity { visual, body });
        id
    }

    /// Visit every entity in insertion order
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(EntityId, &mut PairedEntity<H>),
    {
        for (i, entity) in self.entities.iter_mut().enumerate() {
            f(EntityId(i as u32), entity);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairedEntity<H>> {
        self.entities.iter()
    }

    pub fn get(&self, id: EntityId) -> Option<&PairedEntity<H>> {
        self.entities.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<H: Copy> Default for BodyRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
