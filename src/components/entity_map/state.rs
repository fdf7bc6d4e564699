use log::debug;

use super::dataset::Dataset;
use super::details::DetailsView;
use super::error::MapError;
use super::filter::{CategoryFilter, FilterState, VisibleSet};
use super::interaction::InteractionState;
use super::projector::{self, DrawList};
use super::relations::RelationSet;
use super::store::EntityStore;
use super::types::EntityId;

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	/// Set once the pointer moves during a pan; cleared on the next press.
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Everything one map needs between events: the immutable dataset, the two
/// pieces of transient state, and the viewport.
pub struct EntityMapState {
	pub title: String,
	store: EntityStore,
	relations: RelationSet,
	filter: FilterState,
	interaction: InteractionState,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl EntityMapState {
	pub fn new(dataset: Dataset, width: f64, height: f64) -> Self {
		Self {
			title: dataset.title,
			store: dataset.store,
			relations: dataset.relations,
			filter: FilterState::default(),
			interaction: InteractionState::default(),
			transform: ViewTransform::default(),
			pan: PanState::default(),
			width,
			height,
		}
	}

	pub fn store(&self) -> &EntityStore {
		&self.store
	}

	pub fn relations(&self) -> &RelationSet {
		&self.relations
	}

	pub fn filter(&self) -> &FilterState {
		&self.filter
	}

	pub fn interaction(&self) -> &InteractionState {
		&self.interaction
	}

	pub fn categories(&self) -> Vec<String> {
		self.store.categories().into_iter().map(String::from).collect()
	}

	pub fn visible(&self) -> VisibleSet<'_> {
		VisibleSet::compute(self.store.all(), self.relations.edges(), &self.filter)
	}

	pub fn screen_to_canvas(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn entity_at_position(&self, sx: f64, sy: f64) -> Option<EntityId> {
		let (cx, cy) = self.screen_to_canvas(sx, sy);
		projector::hit_test(cx, cy, &self.visible().entities)
	}

	/// Hover an entity (or nothing) already resolved by the caller.
	pub fn hover(&mut self, target: Option<EntityId>) -> Result<bool, MapError> {
		if let Some(id) = target {
			self.store.get(id)?;
		}
		Ok(self.interaction.pointer_over(target))
	}

	/// Hit-tests a screen point and updates the hover. Returns the hovered id.
	pub fn pointer_move(&mut self, sx: f64, sy: f64) -> Option<EntityId> {
		let hit = self.entity_at_position(sx, sy);
		self.interaction.pointer_over(hit);
		hit
	}

	pub fn pointer_leave(&mut self) {
		self.interaction.pointer_leave();
	}

	/// Select an entity resolved by the caller; `None` is a background click.
	pub fn click(&mut self, target: Option<EntityId>) -> Result<bool, MapError> {
		if let Some(id) = target {
			self.store.get(id)?;
		}
		Ok(self.interaction.click(target))
	}

	/// Mouse press: a press on the background starts a pan.
	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		self.pan.moved = false;
		if self.entity_at_position(sx, sy).is_none() {
			self.start_pan(sx, sy);
		}
	}

	/// The click that ends a drag-pan selects nothing.
	pub fn click_at(&mut self, sx: f64, sy: f64) -> bool {
		if self.pan.moved {
			return false;
		}
		let hit = self.entity_at_position(sx, sy);
		self.interaction.click(hit)
	}

	pub fn search_text_changed(&mut self, text: &str) {
		self.filter.set_search_term(text);
		debug!("search term '{}'", self.filter.search_term());
		self.drop_hidden_hover();
	}

	pub fn category_selected(&mut self, category: CategoryFilter) {
		debug!("category {:?}", category);
		self.filter.set_category(category);
		self.drop_hidden_hover();
	}

	// The pointer cannot stay over an entity the filter just removed.
	fn drop_hidden_hover(&mut self) {
		if let Some(id) = self.interaction.hovered() {
			if !self.visible().contains(id) {
				self.interaction.pointer_leave();
			}
		}
	}

	pub fn draw_list(&self) -> DrawList {
		let visible = self.visible();
		projector::project(&visible.entities, &visible.edges, &self.interaction)
	}

	/// Details for the selection, which stays available while filtered out.
	pub fn details(&self) -> Result<Option<DetailsView>, MapError> {
		self.interaction
			.selected()
			.map(|id| DetailsView::build(&self.store, &self.relations, id))
			.transpose()
	}

	pub fn start_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if self.pan.active {
			if sx != self.pan.start_x || sy != self.pan.start_y {
				self.pan.moved = true;
			}
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zoom around a screen point, keeping that point fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
