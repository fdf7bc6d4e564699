use leptos::prelude::*;
use log::warn;

use crate::components::entity_map::{Dataset, EntityMapCanvas, MapError};

#[component]
fn MapPage(loaded: Result<Dataset, MapError>) -> impl IntoView {
	match loaded {
		Ok(dataset) => view! {
			<div class="fullscreen-map">
				<EntityMapCanvas dataset=dataset fullscreen=true />
				<nav class="map-links">
					<a href="/">"Professores"</a>
					<a href="/carreiras">"Carreiras"</a>
				</nav>
			</div>
		}
		.into_any(),
		Err(err) => {
			warn!("dataset rejected: {err}");
			view! {
				<h1>"Não foi possível carregar o mapa"</h1>
				<p>{err.to_string()}</p>
			}
			.into_any()
		}
	}
}

/// Professors linked by shared research areas.
#[component]
pub fn Home() -> impl IntoView {
	view! { <MapPage loaded=Dataset::professors() /> }
}

/// Career stages linked by transitions.
#[component]
pub fn Careers() -> impl IntoView {
	view! { <MapPage loaded=Dataset::careers() /> }
}
