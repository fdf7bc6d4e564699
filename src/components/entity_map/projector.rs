//! Turns the visible set plus interaction state into a renderer-agnostic
//! draw list. Pure: same inputs, same list.

use std::collections::HashMap;

use super::interaction::{EdgeClass, Highlights, InteractionState, NodeClass};
use super::types::{Edge, Entity, EntityId, Position};

pub const NODE_WIDTH: f64 = 160.0;
pub const NODE_HEIGHT: f64 = 60.0;

/// Where edges attach to a node: the center of its box.
pub fn anchor(position: Position) -> Position {
	position.offset(NODE_WIDTH / 2.0, NODE_HEIGHT / 2.0)
}

/// Topmost (last drawn) entity whose box contains the point.
pub fn hit_test(x: f64, y: f64, entities: &[&Entity]) -> Option<EntityId> {
	entities
		.iter()
		.rev()
		.find(|e| {
			let p = e.position;
			x >= p.x && x <= p.x + NODE_WIDTH && y >= p.y && y <= p.y + NODE_HEIGHT
		})
		.map(|e| e.id)
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
	pub id: EntityId,
	pub origin: Position,
	pub width: f64,
	pub height: f64,
	pub class: NodeClass,
	pub category: String,
	pub label: String,
	/// Attributes joined for the second text line.
	pub caption: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeLine {
	pub from: EntityId,
	pub to: EntityId,
	pub start: Position,
	pub end: Position,
	pub class: EdgeClass,
	pub directed: bool,
	pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Edge(EdgeLine),
	Node(NodeShape),
}

/// Ordered draw instructions: edges first so nodes paint over them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
	pub commands: Vec<DrawCommand>,
}

impl DrawList {
	pub fn nodes(&self) -> impl Iterator<Item = &NodeShape> {
		self.commands.iter().filter_map(|c| match c {
			DrawCommand::Node(n) => Some(n),
			DrawCommand::Edge(_) => None,
		})
	}

	pub fn edges(&self) -> impl Iterator<Item = &EdgeLine> {
		self.commands.iter().filter_map(|c| match c {
			DrawCommand::Edge(e) => Some(e),
			DrawCommand::Node(_) => None,
		})
	}

	pub fn node(&self, id: EntityId) -> Option<&NodeShape> {
		self.nodes().find(|n| n.id == id)
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

fn edge_label(edge: &Edge) -> String {
	edge.label.clone().unwrap_or_else(|| edge.weight.to_string())
}

pub fn project(entities: &[&Entity], edges: &[&Edge], interaction: &InteractionState) -> DrawList {
	let highlights = Highlights::compute(interaction, edges.iter().copied());
	let by_id: HashMap<EntityId, &Entity> = entities.iter().map(|e| (e.id, *e)).collect();
	let mut commands = Vec::with_capacity(entities.len() + edges.len());

	for edge in edges {
		// Inputs that skip the filter step may carry edges to hidden entities.
		let (Some(a), Some(b)) = (by_id.get(&edge.from), by_id.get(&edge.to)) else {
			continue;
		};
		commands.push(DrawCommand::Edge(EdgeLine {
			from: edge.from,
			to: edge.to,
			start: anchor(a.position),
			end: anchor(b.position),
			class: highlights.edge_class(edge),
			directed: edge.is_directed(),
			label: Some(edge_label(edge)),
		}));
	}

	for entity in entities {
		commands.push(DrawCommand::Node(NodeShape {
			id: entity.id,
			origin: entity.position,
			width: NODE_WIDTH,
			height: NODE_HEIGHT,
			class: highlights.node_class(entity.id),
			category: entity.category.clone(),
			label: entity.name.clone(),
			caption: entity.attributes().join(", "),
		}));
	}

	DrawList { commands }
}
