use std::collections::HashSet;

use super::types::{Edge, Entity, EntityId};

/// Category restriction; `All` is the "every category" sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
	#[default]
	All,
	Only(String),
}

impl CategoryFilter {
	pub fn admits(&self, category: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(c) => c == category,
		}
	}
}

/// Search term plus category, changed only through the setters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
	search_term: String,
	category: CategoryFilter,
}

impl FilterState {
	pub fn set_search_term(&mut self, term: &str) {
		self.search_term = term.to_lowercase();
	}

	pub fn set_category(&mut self, category: CategoryFilter) {
		self.category = category;
	}

	/// Lowercased term.
	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	pub fn category(&self) -> &CategoryFilter {
		&self.category
	}

	pub fn matches(&self, entity: &Entity) -> bool {
		let name_ok = self.search_term.is_empty()
			|| entity.name.to_lowercase().contains(&self.search_term);
		name_ok && self.category.admits(&entity.category)
	}
}

/// Entities passing `filter`, in store order.
pub fn compute_visible<'a>(entities: &'a [Entity], filter: &FilterState) -> Vec<&'a Entity> {
	entities.iter().filter(|e| filter.matches(e)).collect()
}

/// Edges whose endpoints are both visible.
pub fn compute_visible_edges<'a>(edges: &'a [Edge], visible: &HashSet<EntityId>) -> Vec<&'a Edge> {
	edges
		.iter()
		.filter(|e| visible.contains(&e.from) && visible.contains(&e.to))
		.collect()
}

/// Visible entities and edges for one recomputation cycle.
#[derive(Clone, Debug, Default)]
pub struct VisibleSet<'a> {
	pub entities: Vec<&'a Entity>,
	pub edges: Vec<&'a Edge>,
}

impl<'a> VisibleSet<'a> {
	pub fn compute(entities: &'a [Entity], edges: &'a [Edge], filter: &FilterState) -> Self {
		let entities = compute_visible(entities, filter);
		let ids: HashSet<EntityId> = entities.iter().map(|e| e.id).collect();
		let edges = compute_visible_edges(edges, &ids);
		Self { entities, edges }
	}

	pub fn contains(&self, id: EntityId) -> bool {
		self.entities.iter().any(|e| e.id == id)
	}

	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}
}
