use thiserror::Error;

use super::types::EntityId;

/// Everything that can go wrong while building or querying a map.
#[derive(Debug, Error)]
pub enum MapError {
	#[error("entity not found: {0}")]
	NotFound(EntityId),

	#[error("edge {from} -> {to} references missing entity {missing}")]
	DanglingReference {
		from: EntityId,
		to: EntityId,
		missing: EntityId,
	},

	#[error("edge from {0} points back at itself")]
	InvalidEdge(EntityId),

	#[error("duplicate entity id: {0}")]
	DuplicateId(EntityId),

	#[error("dataset parse error: {0}")]
	Dataset(#[from] serde_json::Error),
}
