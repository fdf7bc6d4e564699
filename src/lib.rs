//! Interactive entity map: professors or careers on a canvas, linked by shared
//! attributes or authored transitions, with search, category filters, hover
//! highlight and a details panel.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod components;
mod pages;

// Top-Level pages
use crate::pages::home::{Careers, Home};
use crate::pages::not_found::NotFound;

pub use crate::components::entity_map::{
	CategoryFilter, Dataset, DetailsView, DrawCommand, DrawList, Edge, EdgeClass, EdgeKind,
	Entity, EntityId, EntityMapState, EntityStore, FilterState, Highlights, InteractionPhase,
	InteractionState, MapError, NodeClass, Position, RelationSet, Transition, VisibleSet,
	compute_visible, compute_visible_edges, hit_test, project,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router with one page per map and a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="pt-BR" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Mapa de Professores e Carreiras" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/carreiras") view=Careers />
			</Routes>
		</Router>
	}
}
