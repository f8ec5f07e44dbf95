use leptos::prelude::*;
use log::{debug, error};

use crate::components::topology::{
	NetworkNode, NetworkTopologyCanvas, NodeStatus, NodeType, TopologyData, TopologyFilter,
	TopologyLegend,
};
use crate::data::mock_topology;

const GRAPH_WIDTH: f64 = 1200.0;
const GRAPH_HEIGHT: f64 = 600.0;

fn toggle_style(shown: bool, accent: &str) -> String {
	if shown {
		format!(
			"display: block; width: 100%; text-align: left; font-size: 12px; padding: 6px 8px; margin-bottom: 6px; border-radius: 4px; border: 1px solid {accent}; background: {accent}; color: white; cursor: pointer;"
		)
	} else {
		format!(
			"display: block; width: 100%; text-align: left; font-size: 12px; padding: 6px 8px; margin-bottom: 6px; border-radius: 4px; border: 1px solid {accent}; background: white; color: #111827; cursor: pointer;"
		)
	}
}

#[component]
fn TopologyExplorer(snapshot: TopologyData) -> impl IntoView {
	let filter = RwSignal::new(TopologyFilter::default());
	let filtered = Memo::new(move |_| filter.with(|f| f.apply(&snapshot)));

	let on_node_select = Callback::new(|node: Option<NetworkNode>| match node {
		Some(node) => debug!("selected {} ({})", node.name, node.ip_address),
		None => debug!("selection cleared"),
	});

	view! {
		<div class="topology-explorer" style="display: flex; gap: 1rem; align-items: flex-start;">
			<aside class="topology-filters" style="width: 12rem; flex-shrink: 0;">
				<input
					type="search"
					placeholder="Buscar dispositivo ou IP..."
					style="width: 100%; padding: 6px 8px; margin-bottom: 1rem; box-sizing: border-box;"
					prop:value=move || filter.with(|f| f.search.clone())
					on:input=move |ev| {
						let value = event_target_value(&ev);
						filter.update(|f| f.search = value);
					}
				/>

				<h3 style="font-size: 14px; font-weight: 500; margin: 0 0 0.5rem 0;">"Tipo de Dispositivo"</h3>
				{NodeType::TOGGLEABLE
					.into_iter()
					.map(|node_type| view! {
						<button
							style=move || toggle_style(filter.with(|f| f.is_type_shown(node_type)), "#1f2937")
							on:click=move |_| filter.update(|f| f.toggle_type(node_type))
						>
							{node_type.plural_label()}
						</button>
					})
					.collect_view()}

				<h3 style="font-size: 14px; font-weight: 500; margin: 1rem 0 0.5rem 0;">"Status"</h3>
				{NodeStatus::ALL
					.into_iter()
					.map(|status| view! {
						<button
							style=move || toggle_style(filter.with(|f| f.is_status_shown(status)), status.color())
							on:click=move |_| filter.update(|f| f.toggle_status(status))
						>
							{status.label()}
						</button>
					})
					.collect_view()}

				<div style="border-top: 1px solid #e5e7eb; margin-top: 1rem; padding-top: 0.5rem; font-size: 14px;">
					<div style="display: flex; justify-content: space-between;">
						<span style="font-weight: 500;">"Total:"</span>
						<span>{move || format!("{} dispositivos", filtered.with(|d| d.nodes.len()))}</span>
					</div>
					<div style="display: flex; justify-content: space-between; margin-top: 4px;">
						<span style="font-weight: 500;">"Conexões:"</span>
						<span>{move || format!("{} links", filtered.with(|d| d.links.len()))}</span>
					</div>
				</div>

				<div style="border-top: 1px solid #e5e7eb; margin-top: 1rem; padding-top: 0.5rem;">
					<TopologyLegend />
				</div>
			</aside>

			<div
				class="topology-graph"
				style="border: 1px solid #e5e7eb; border-radius: 6px; padding: 0.5rem; overflow: auto; background: #f9fafb;"
			>
				<NetworkTopologyCanvas
					data=filtered
					width=GRAPH_WIDTH
					height=GRAPH_HEIGHT
					on_node_select=on_node_select
				/>
			</div>
		</div>
	}
}

/// Network map with search and category filters.
#[component]
pub fn Topology() -> impl IntoView {
	let snapshot = mock_topology();
	if let Err(err) = &snapshot {
		error!("{err}");
	}

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Não foi possível carregar a topologia"</h1>

				<p>"Erros: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="topology-page" style="padding: 1.5rem;">
				<h2 style="font-size: 1.5rem; font-weight: 700; margin: 0;">"Topologia da Rede"</h2>
				<p class="subtitle" style="color: #6b7280;">"Visualização e análise da estrutura da rede."</p>
				{snapshot.map(|snapshot| view! { <TopologyExplorer snapshot=snapshot /> })}
			</div>
		</ErrorBoundary>
	}
}
