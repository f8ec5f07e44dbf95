use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found" style="padding: 2rem;">
			<h1>"404"</h1>
			<p>"Página não encontrada."</p>
			<a href="/">"Voltar para a topologia"</a>
		</div>
	}
}
