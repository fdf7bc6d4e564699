//! Edge construction.
//!
//! Two modes share one [`Edge`] type: edges derived from shared attributes
//! (undirected similarity) and explicitly authored transitions (directed cost).

use serde::Deserialize;

use super::error::MapError;
use super::store::EntityStore;
use super::types::{Edge, EdgeKind, Entity, EntityId};

/// An authored transition between two entities.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transition {
	pub from: EntityId,
	pub to: EntityId,
	pub difficulty: u32,
	#[serde(default)]
	pub duration: Option<String>,
}

/// Immutable set of edges built once at startup.
#[derive(Clone, Debug, Default)]
pub struct RelationSet {
	edges: Vec<Edge>,
}

impl RelationSet {
	/// One edge per pair with at least one shared attribute.
	pub fn derived(entities: &[Entity]) -> Self {
		let mut edges = Vec::new();
		for (i, a) in entities.iter().enumerate() {
			for b in &entities[i + 1..] {
				let shared = a.shared_attributes(b).len();
				if shared == 0 {
					continue;
				}
				edges.push(Edge {
					from: a.id.min(b.id),
					to: a.id.max(b.id),
					weight: shared as u32,
					kind: EdgeKind::Shared,
					label: None,
				});
			}
		}
		Self { edges }
	}

	/// Validates every transition against the store.
	pub fn explicit(store: &EntityStore, transitions: &[Transition]) -> Result<Self, MapError> {
		let edges = transitions
			.iter()
			.map(|t| {
				if t.from == t.to {
					return Err(MapError::InvalidEdge(t.from));
				}
				for end in [t.from, t.to] {
					if !store.contains(end) {
						return Err(MapError::DanglingReference {
							from: t.from,
							to: t.to,
							missing: end,
						});
					}
				}
				Ok(Edge {
					from: t.from,
					to: t.to,
					weight: t.difficulty,
					kind: EdgeKind::Transition,
					label: t.duration.clone(),
				})
			})
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self { edges })
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn len(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Entities adjacent to `id`, ignoring direction.
	pub fn neighbors(&self, id: EntityId) -> Vec<EntityId> {
		let mut out = Vec::new();
		for other in self.edges.iter().filter_map(|e| e.other_end(id)) {
			if !out.contains(&other) {
				out.push(other);
			}
		}
		out
	}

	/// Edges leaving `id` as `(target, edge)`. Shared edges leave both ends.
	pub fn outgoing(&self, id: EntityId) -> Vec<(EntityId, &Edge)> {
		self.edges
			.iter()
			.filter_map(|e| match e.kind {
				EdgeKind::Transition if e.from == id => Some((e.to, e)),
				EdgeKind::Transition => None,
				EdgeKind::Shared => e.other_end(id).map(|other| (other, e)),
			})
			.collect()
	}
}
