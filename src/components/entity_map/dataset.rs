//! Embedded JSON datasets.
//!
//! A dataset names its entities and how edges are obtained:
//!
//! ```json
//! { "title": "...", "relations": { "mode": "derived" }, "entities": [ ... ] }
//! { "title": "...", "relations": { "mode": "explicit", "transitions": [ ... ] }, "entities": [ ... ] }
//! ```

use std::collections::BTreeMap;

use log::info;
use serde::Deserialize;

use super::error::MapError;
use super::relations::{RelationSet, Transition};
use super::store::EntityStore;
use super::types::{Entity, EntityId, Position};

const PROFESSORS_JSON: &str = include_str!("../../../data/professors.json");
const CAREERS_JSON: &str = include_str!("../../../data/careers.json");

#[derive(Clone, Debug, Deserialize)]
pub struct EntityRecord {
	pub id: EntityId,
	pub name: String,
	pub category: String,
	pub x: f64,
	pub y: f64,
	#[serde(default)]
	pub attributes: Vec<String>,
	#[serde(default)]
	pub metadata: BTreeMap<String, String>,
}

impl From<EntityRecord> for Entity {
	fn from(r: EntityRecord) -> Self {
		let mut entity = Entity::new(r.id.0, r.name, r.category, Position::new(r.x, r.y))
			.with_attributes(r.attributes);
		entity.metadata = r.metadata;
		entity
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RelationMode {
	Derived,
	Explicit { transitions: Vec<Transition> },
}

fn default_attribute_label() -> String {
	"Atributos".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatasetSpec {
	pub title: String,
	/// Heading for the attribute list in the details panel.
	#[serde(default = "default_attribute_label")]
	pub attribute_label: String,
	pub entities: Vec<EntityRecord>,
	pub relations: RelationMode,
}

/// A validated store with its edges.
#[derive(Clone, Debug)]
pub struct Dataset {
	pub title: String,
	pub attribute_label: String,
	pub store: EntityStore,
	pub relations: RelationSet,
}

impl Dataset {
	pub fn from_spec(spec: DatasetSpec) -> Result<Self, MapError> {
		let store = EntityStore::new(spec.entities.into_iter().map(Entity::from).collect())?;
		let relations = match &spec.relations {
			RelationMode::Derived => RelationSet::derived(store.all()),
			RelationMode::Explicit { transitions } => RelationSet::explicit(&store, transitions)?,
		};
		info!(
			"loaded dataset '{}': {} entities, {} edges",
			spec.title,
			store.len(),
			relations.len()
		);
		Ok(Self {
			title: spec.title,
			attribute_label: spec.attribute_label,
			store,
			relations,
		})
	}

	pub fn from_json(source: &str) -> Result<Self, MapError> {
		Self::from_spec(serde_json::from_str(source)?)
	}

	/// Researchers linked by shared research areas.
	pub fn professors() -> Result<Self, MapError> {
		Self::from_json(PROFESSORS_JSON)
	}

	/// Career stages linked by authored transitions.
	pub fn careers() -> Result<Self, MapError> {
		Self::from_json(CAREERS_JSON)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::entity_map::types::EdgeKind;

	#[test]
	fn professors_share_areas() {
		let data = Dataset::professors().unwrap();
		assert_eq!(data.store.len(), 4);
		let pairs: Vec<_> = data
			.relations
			.edges()
			.iter()
			.map(|e| (e.from.0, e.to.0, e.weight))
			.collect();
		assert_eq!(pairs, vec![(1, 2, 1), (1, 3, 1), (2, 4, 1)]);
		let ana = data.store.get(EntityId(1)).unwrap();
		assert_eq!(ana.metadata["Habilidades"], "Python, TensorFlow, Machine Learning");
	}

	#[test]
	fn careers_are_directed_transitions() {
		let data = Dataset::careers().unwrap();
		assert_eq!(data.store.len(), 8);
		assert!(data.relations.edges().iter().all(|e| e.kind == EdgeKind::Transition));
		assert_eq!(data.relations.outgoing(EntityId(1)).len(), 2);
	}

	#[test]
	fn attribute_heading_comes_from_dataset() {
		assert_eq!(Dataset::professors().unwrap().attribute_label, "Áreas de Pesquisa");
		assert_eq!(Dataset::careers().unwrap().attribute_label, "Habilidades");
		let json = r#"{
			"title": "t",
			"relations": { "mode": "derived" },
			"entities": []
		}"#;
		assert_eq!(Dataset::from_json(json).unwrap().attribute_label, "Atributos");
	}

	#[test]
	fn dangling_transition_rejects_dataset() {
		let json = r#"{
			"title": "t",
			"relations": { "mode": "explicit", "transitions": [ { "from": 1, "to": 99, "difficulty": 1 } ] },
			"entities": [ { "id": 1, "name": "A", "category": "c", "x": 0, "y": 0 } ]
		}"#;
		assert!(matches!(
			Dataset::from_json(json),
			Err(MapError::DanglingReference { missing: EntityId(99), .. })
		));
	}

	#[test]
	fn malformed_json_is_a_dataset_error() {
		assert!(matches!(Dataset::from_json("{"), Err(MapError::Dataset(_))));
	}
}
