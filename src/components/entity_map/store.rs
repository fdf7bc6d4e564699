use std::collections::HashMap;

use super::error::MapError;
use super::types::{Entity, EntityId};

/// Fixed, ordered set of entities, seeded once.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
	entities: Vec<Entity>,
	index: HashMap<EntityId, usize>,
}

impl EntityStore {
	pub fn new(entities: Vec<Entity>) -> Result<Self, MapError> {
		let mut index = HashMap::with_capacity(entities.len());
		for (i, entity) in entities.iter().enumerate() {
			if index.insert(entity.id, i).is_some() {
				return Err(MapError::DuplicateId(entity.id));
			}
		}
		Ok(Self { entities, index })
	}

	pub fn all(&self) -> &[Entity] {
		&self.entities
	}

	pub fn get(&self, id: EntityId) -> Result<&Entity, MapError> {
		self.index
			.get(&id)
			.map(|&i| &self.entities[i])
			.ok_or(MapError::NotFound(id))
	}

	pub fn contains(&self, id: EntityId) -> bool {
		self.index.contains_key(&id)
	}

	pub fn len(&self) -> usize {
		self.entities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	/// Distinct categories in first-appearance order.
	pub fn categories(&self) -> Vec<&str> {
		let mut seen: Vec<&str> = Vec::new();
		for entity in &self.entities {
			if !seen.contains(&entity.category.as_str()) {
				seen.push(&entity.category);
			}
		}
		seen
	}
}
