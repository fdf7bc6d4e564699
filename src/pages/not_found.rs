use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! { <h1>"Página não encontrada"</h1> <a href="/">"Voltar ao mapa"</a> }
}
