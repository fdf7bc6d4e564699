use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an entity on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Top-left corner of an entity's box, in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn offset(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}
}

/// A career stage or a researcher.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
	pub id: EntityId,
	pub name: String,
	pub category: String,
	pub position: Position,
	attributes: Vec<String>,
	pub metadata: BTreeMap<String, String>,
}

impl Entity {
	pub fn new(
		id: u32,
		name: impl Into<String>,
		category: impl Into<String>,
		position: Position,
	) -> Self {
		Self {
			id: EntityId(id),
			name: name.into(),
			category: category.into(),
			position,
			attributes: Vec::new(),
			metadata: BTreeMap::new(),
		}
	}

	/// Attributes keep their first-seen order; repeats are dropped.
	pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for attr in attributes {
			let attr = attr.into();
			if !self.attributes.contains(&attr) {
				self.attributes.push(attr);
			}
		}
		self
	}

	pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.metadata.insert(key.into(), value.into());
		self
	}

	pub fn attributes(&self) -> &[String] {
		&self.attributes
	}

	/// Attributes this entity has in common with `other`, in this entity's order.
	pub fn shared_attributes<'a>(&'a self, other: &Entity) -> Vec<&'a str> {
		let theirs: HashSet<&str> = other.attributes.iter().map(String::as_str).collect();
		self.attributes
			.iter()
			.map(String::as_str)
			.filter(|a| theirs.contains(a))
			.collect()
	}
}

/// What an edge means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
	/// Undirected similarity; weight is the shared attribute count.
	Shared,
	/// Directed move between entities; weight is an authored cost.
	Transition,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub from: EntityId,
	pub to: EntityId,
	pub weight: u32,
	pub kind: EdgeKind,
	pub label: Option<String>,
}

impl Edge {
	pub fn is_directed(&self) -> bool {
		self.kind == EdgeKind::Transition
	}

	pub fn touches(&self, id: EntityId) -> bool {
		self.from == id || self.to == id
	}

	/// The endpoint opposite `id`, if the edge touches it.
	pub fn other_end(&self, id: EntityId) -> Option<EntityId> {
		if self.from == id {
			Some(self.to)
		} else if self.to == id {
			Some(self.from)
		} else {
			None
		}
	}
}
