use super::error::MapError;
use super::relations::RelationSet;
use super::store::EntityStore;
use super::types::EntityId;

/// One edge leaving the selected entity.
#[derive(Clone, Debug, PartialEq)]
pub struct OutgoingEdge {
	pub target: EntityId,
	pub target_name: String,
	pub weight: u32,
	pub label: Option<String>,
}

/// Side-panel content for the selected entity.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailsView {
	pub id: EntityId,
	pub name: String,
	pub category: String,
	pub attributes: Vec<String>,
	pub metadata: Vec<(String, String)>,
	pub outgoing: Vec<OutgoingEdge>,
}

impl DetailsView {
	pub fn build(store: &EntityStore, relations: &RelationSet, id: EntityId) -> Result<Self, MapError> {
		let entity = store.get(id)?;
		let outgoing = relations
			.outgoing(id)
			.into_iter()
			.map(|(target, edge)| -> Result<OutgoingEdge, MapError> {
				Ok(OutgoingEdge {
					target,
					target_name: store.get(target)?.name.clone(),
					weight: edge.weight,
					label: edge.label.clone(),
				})
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self {
			id,
			name: entity.name.clone(),
			category: entity.category.clone(),
			attributes: entity.attributes().to_vec(),
			metadata: entity
				.metadata
				.iter()
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect(),
			outgoing,
		})
	}
}
