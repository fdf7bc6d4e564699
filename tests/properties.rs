//! Property tests for edge derivation, filtering and interaction.

use std::collections::HashSet;

use entity_map_canvas::{
	CategoryFilter, Entity, EntityId, FilterState, InteractionState, Position, RelationSet,
	compute_visible, compute_visible_edges,
};
use proptest::prelude::*;

const ATTRIBUTES: &[&str] = &["IA", "ML", "Dados", "Visão", "Redes", "Estatística"];
const CATEGORIES: &[&str] = &["IA", "Dados", "Sistemas"];
const NAMES: &[&str] = &["Ana", "Marcos", "Júlia", "Roberto", "Bia", "Caio"];

fn entities_strategy() -> impl Strategy<Value = Vec<Entity>> {
	prop::collection::vec(
		(
			prop::sample::subsequence(ATTRIBUTES, 0..=ATTRIBUTES.len()),
			0..CATEGORIES.len(),
			0..NAMES.len(),
		),
		0..8,
	)
	.prop_map(|rows| {
		rows.into_iter()
			.enumerate()
			.map(|(i, (attrs, cat, name))| {
				Entity::new(
					i as u32 + 1,
					format!("Prof. {}", NAMES[name]),
					CATEGORIES[cat],
					Position::new(i as f64 * 200.0, 0.0),
				)
				.with_attributes(attrs.into_iter())
			})
			.collect()
	})
}

fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
	prop_oneof![
		Just(CategoryFilter::All),
		prop::sample::select(CATEGORIES).prop_map(|c| CategoryFilter::Only(c.to_string())),
	]
}

fn ids(entities: &[&Entity]) -> Vec<EntityId> {
	entities.iter().map(|e| e.id).collect()
}

proptest! {
	#![proptest_config(ProptestConfig {
		cases: 256,
		failure_persistence: None,
		..ProptestConfig::default()
	})]

	#[test]
	fn derived_edge_exists_iff_attributes_intersect(entities in entities_strategy()) {
		let relations = RelationSet::derived(&entities);
		for (i, a) in entities.iter().enumerate() {
			for b in &entities[i + 1..] {
				let shared = a.attributes().iter().filter(|x| b.attributes().contains(*x)).count();
				let edge = relations.edges().iter().find(|e| e.touches(a.id) && e.touches(b.id));
				match edge {
					Some(edge) => {
						prop_assert!(shared > 0);
						prop_assert_eq!(edge.weight as usize, shared);
						prop_assert!(edge.from < edge.to);
					}
					None => prop_assert_eq!(shared, 0),
				}
			}
		}
	}

	#[test]
	fn filtering_is_idempotent(
		entities in entities_strategy(),
		term in "[a-zA-Zú ]{0,4}",
		category in category_strategy(),
	) {
		let mut filter = FilterState::default();
		filter.set_search_term(&term);
		filter.set_category(category);
		let once = ids(&compute_visible(&entities, &filter));
		let kept: Vec<Entity> = entities.iter().filter(|e| once.contains(&e.id)).cloned().collect();
		let twice = ids(&compute_visible(&kept, &filter));
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn narrowing_never_grows_the_visible_set(
		entities in entities_strategy(),
		term in "[a-z]{0,3}",
		extra in "[a-z]{1,2}",
		category in prop::sample::select(CATEGORIES),
	) {
		let mut broad = FilterState::default();
		broad.set_search_term(&term);
		let mut narrow = broad.clone();
		narrow.set_search_term(&format!("{term}{extra}"));
		prop_assert!(compute_visible(&entities, &narrow).len() <= compute_visible(&entities, &broad).len());

		let mut by_category = broad.clone();
		by_category.set_category(CategoryFilter::Only(category.to_string()));
		prop_assert!(compute_visible(&entities, &by_category).len() <= compute_visible(&entities, &broad).len());
	}

	#[test]
	fn visible_edges_stay_inside_visible_entities(
		entities in entities_strategy(),
		category in category_strategy(),
	) {
		let relations = RelationSet::derived(&entities);
		let mut filter = FilterState::default();
		filter.set_category(category);
		let visible: HashSet<EntityId> = compute_visible(&entities, &filter).iter().map(|e| e.id).collect();
		for edge in compute_visible_edges(relations.edges(), &visible) {
			prop_assert!(visible.contains(&edge.from) && visible.contains(&edge.to));
		}
	}

	#[test]
	fn hover_never_changes_selection(
		selected in 1u32..10,
		hovers in prop::collection::vec(prop::option::of(1u32..10), 0..12),
	) {
		let mut state = InteractionState::default();
		state.click(Some(EntityId(selected)));
		for hover in hovers {
			state.pointer_over(hover.map(EntityId));
			state.click(None);
			prop_assert_eq!(state.selected(), Some(EntityId(selected)));
		}
	}
}
