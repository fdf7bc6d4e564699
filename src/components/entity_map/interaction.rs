use std::collections::HashSet;

use log::debug;

use super::types::{Edge, EntityId};

/// Hover and selection. Selection is sticky: only a click on another entity
/// replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	hovered: Option<EntityId>,
	selected: Option<EntityId>,
}

/// The four states of [`InteractionState`], as a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionPhase {
	Idle,
	Hovering(EntityId),
	Selected(EntityId),
	SelectedAndHovering {
		selected: EntityId,
		hovered: EntityId,
	},
}

impl InteractionState {
	pub fn hovered(&self) -> Option<EntityId> {
		self.hovered
	}

	pub fn selected(&self) -> Option<EntityId> {
		self.selected
	}

	pub fn phase(&self) -> InteractionPhase {
		match (self.selected, self.hovered) {
			(None, None) => InteractionPhase::Idle,
			(None, Some(h)) => InteractionPhase::Hovering(h),
			(Some(s), None) => InteractionPhase::Selected(s),
			(Some(selected), Some(hovered)) => InteractionPhase::SelectedAndHovering {
				selected,
				hovered,
			},
		}
	}

	/// Pointer is over `target` (an entity) or over nothing. Returns whether
	/// the hover changed.
	pub fn pointer_over(&mut self, target: Option<EntityId>) -> bool {
		if self.hovered == target {
			return false;
		}
		debug!("hover {:?} -> {:?}", self.hovered, target);
		self.hovered = target;
		true
	}

	pub fn pointer_enter(&mut self, id: EntityId) -> bool {
		self.pointer_over(Some(id))
	}

	pub fn pointer_leave(&mut self) -> bool {
		self.pointer_over(None)
	}

	/// Clicking nothing keeps the current selection.
	pub fn click(&mut self, target: Option<EntityId>) -> bool {
		match target {
			Some(id) if self.selected != Some(id) => {
				debug!("select {:?} -> {}", self.selected, id);
				self.selected = Some(id);
				true
			}
			_ => false,
		}
	}
}

/// Node style class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeClass {
	Default,
	Hovered,
	Selected,
	Neighbor,
}

/// Edge style class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
	Default,
	Highlighted,
}

/// Highlight classes for one cycle, resolved against the visible edges.
#[derive(Clone, Debug, Default)]
pub struct Highlights {
	hovered: Option<EntityId>,
	selected: Option<EntityId>,
	neighbors: HashSet<EntityId>,
}

impl Highlights {
	pub fn compute<'a>(
		state: &InteractionState,
		edges: impl IntoIterator<Item = &'a Edge>,
	) -> Self {
		let neighbors = match state.hovered {
			Some(h) => edges.into_iter().filter_map(|e| e.other_end(h)).collect(),
			None => HashSet::new(),
		};
		Self {
			hovered: state.hovered,
			selected: state.selected,
			neighbors,
		}
	}

	pub fn is_highlighted(&self, id: EntityId) -> bool {
		self.selected == Some(id) || self.hovered == Some(id) || self.neighbors.contains(&id)
	}

	pub fn is_neighbor(&self, id: EntityId) -> bool {
		self.neighbors.contains(&id)
	}

	pub fn node_class(&self, id: EntityId) -> NodeClass {
		if self.selected == Some(id) {
			NodeClass::Selected
		} else if self.hovered == Some(id) {
			NodeClass::Hovered
		} else if self.neighbors.contains(&id) {
			NodeClass::Neighbor
		} else {
			NodeClass::Default
		}
	}

	pub fn edge_class(&self, edge: &Edge) -> EdgeClass {
		let focus = [self.hovered, self.selected];
		if focus.into_iter().flatten().any(|id| edge.touches(id)) {
			EdgeClass::Highlighted
		} else {
			EdgeClass::Default
		}
	}
}
