//! End-to-end scenarios through the public map API.

use entity_map_canvas::{
	CategoryFilter, Dataset, EdgeClass, Entity, EntityId, EntityMapState, EntityStore, FilterState,
	InteractionPhase, InteractionState, MapError, NodeClass, Position, RelationSet, Transition,
	VisibleSet, project,
};

fn ana_and_bia() -> Vec<Entity> {
	vec![
		Entity::new(1, "A", "IA", Position::new(0.0, 0.0)).with_attributes(["IA", "ML"]),
		Entity::new(2, "B", "Dados", Position::new(300.0, 0.0)).with_attributes(["ML", "Dados"]),
	]
}

#[test]
fn search_drops_edges_to_hidden_entities() {
	let entities = ana_and_bia();
	let relations = RelationSet::derived(&entities);
	let pairs: Vec<_> = relations.edges().iter().map(|e| (e.from, e.to, e.weight)).collect();
	assert_eq!(pairs, vec![(EntityId(1), EntityId(2), 1)]);

	let mut filter = FilterState::default();
	filter.set_search_term("A");
	let visible = VisibleSet::compute(&entities, relations.edges(), &filter);
	let ids: Vec<_> = visible.entities.iter().map(|e| e.id).collect();
	assert_eq!(ids, vec![EntityId(1)]);
	assert!(visible.edges.is_empty());
}

#[test]
fn dangling_explicit_edge_fails_the_build() {
	let store = EntityStore::new(ana_and_bia()).unwrap();
	let transitions = [Transition {
		from: EntityId(1),
		to: EntityId(99),
		difficulty: 3,
		duration: None,
	}];
	let err = RelationSet::explicit(&store, &transitions).unwrap_err();
	assert!(matches!(err, MapError::DanglingReference { missing: EntityId(99), .. }));
}

#[test]
fn background_click_keeps_selection() {
	let mut s = EntityMapState::new(Dataset::professors().unwrap(), 1400.0, 800.0);
	s.click(Some(EntityId(3))).unwrap();
	assert!(!s.click(None).unwrap());
	assert_eq!(s.interaction().selected(), Some(EntityId(3)));
}

#[test]
fn selection_is_sticky_across_hover() {
	let mut state = InteractionState::default();
	state.click(Some(EntityId(5)));
	assert_eq!(state.selected(), Some(EntityId(5)));
	state.pointer_enter(EntityId(7));
	assert_eq!(state.selected(), Some(EntityId(5)));
	state.pointer_leave();
	assert_eq!(state.selected(), Some(EntityId(5)));
	assert_eq!(state.phase(), InteractionPhase::Selected(EntityId(5)));
}

#[test]
fn hovering_styles_neighbors_only() {
	let entities = vec![
		Entity::new(1, "Um", "c", Position::new(0.0, 0.0)).with_attributes(["x"]),
		Entity::new(2, "Dois", "c", Position::new(200.0, 0.0)).with_attributes(["x"]),
		Entity::new(3, "Três", "c", Position::new(400.0, 0.0)).with_attributes(["y"]),
	];
	let relations = RelationSet::derived(&entities);
	assert_eq!(relations.len(), 1);

	let mut state = InteractionState::default();
	state.pointer_enter(EntityId(1));
	let visible = VisibleSet::compute(&entities, relations.edges(), &FilterState::default());
	let list = project(&visible.entities, &visible.edges, &state);

	assert_eq!(list.node(EntityId(1)).map(|n| n.class), Some(NodeClass::Hovered));
	assert_eq!(list.node(EntityId(2)).map(|n| n.class), Some(NodeClass::Neighbor));
	assert_eq!(list.node(EntityId(3)).map(|n| n.class), Some(NodeClass::Default));
	assert!(list.edges().all(|e| e.class == EdgeClass::Highlighted));
}

#[test]
fn careers_details_list_outgoing_transitions() {
	let mut s = EntityMapState::new(Dataset::careers().unwrap(), 1400.0, 800.0);
	s.click(Some(EntityId(3))).unwrap();
	let details = s.details().unwrap().unwrap();
	assert_eq!(details.name, "Desenvolvedor Pleno");
	let targets: Vec<_> = details.outgoing.iter().map(|o| o.target_name.as_str()).collect();
	assert_eq!(targets, vec!["Desenvolvedor Sênior", "Cientista de Dados"]);
	assert_eq!(details.outgoing[0].label.as_deref(), Some("2-3 anos"));
}

#[test]
fn empty_visible_set_renders_nothing() {
	let mut s = EntityMapState::new(Dataset::careers().unwrap(), 1400.0, 800.0);
	s.category_selected(CategoryFilter::Only("Liderança".into()));
	s.search_text_changed("inexistente");
	assert!(s.visible().is_empty());
	assert!(s.draw_list().is_empty());
}
