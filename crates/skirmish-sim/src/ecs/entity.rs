use skirmish_core::types::Entity;

/// Hands out entity handles, recycling indices through a free list.
///
/// Each index carries a generation that is bumped on release, so a handle
/// kept past its entity's removal no longer resolves.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    generations: Vec<u32>,
    free_indices: Vec<u32>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> Entity {
        match self.free_indices.pop() {
            Some(index) => Entity::new(index, self.generations[index as usize]),
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                Entity::new(index, 0)
            }
        }
    }

    /// Release `entity`. Stale or unknown handles are ignored.
    pub fn deallocate(&mut self, entity: Entity) {
        if !self.is_alive(entity) {
            return;
        }
        self.generations[entity.index as usize] += 1;
        self.free_indices.push(entity.index);
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations
            .get(entity.index as usize)
            .is_some_and(|&generation| generation == entity.generation)
    }

    /// Number of handles currently allocated.
    pub fn live_count(&self) -> usize {
        self.generations.len() - self.free_indices.len()
    }
}
