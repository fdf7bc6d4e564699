mod component;
pub mod dataset;
pub mod details;
pub mod error;
pub mod filter;
pub mod interaction;
pub mod projector;
mod render;
pub mod relations;
pub mod state;
pub mod store;
pub mod types;

pub use component::EntityMapCanvas;
pub use dataset::Dataset;
pub use details::{DetailsView, OutgoingEdge};
pub use error::MapError;
pub use filter::{CategoryFilter, FilterState, VisibleSet, compute_visible, compute_visible_edges};
pub use interaction::{EdgeClass, Highlights, InteractionPhase, InteractionState, NodeClass};
pub use projector::{DrawCommand, DrawList, EdgeLine, NodeShape, hit_test, project};
pub use relations::{RelationSet, Transition};
pub use state::EntityMapState;
pub use store::EntityStore;
pub use types::{Edge, EdgeKind, Entity, EntityId, Position};
