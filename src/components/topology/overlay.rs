use leptos::prelude::*;

use super::layout::Position;
use super::scene::{MetricBar, link_tooltip_rows, metric_bars};
use super::types::{LinkStatus, NetworkLink, NetworkNode, NodeStatus};

const TOOLTIP_OFFSET: f64 = 10.0;

/// Colored pill with the status label.
#[component]
pub fn StatusBadge(
	/// Status to show.
	status: NodeStatus,
) -> impl IntoView {
	view! {
		<span
			class="status-badge"
			style=format!(
				"background-color: {}; color: white; border-radius: 9999px; padding: 2px 10px; font-size: 12px; font-weight: 500;",
				status.color()
			)
		>
			{status.label()}
		</span>
	}
}

#[component]
fn MetricBarRow(bar: MetricBar) -> impl IntoView {
	view! {
		<div class="metric-bar">
			<div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 4px;">
				<span style="font-size: 12px; color: #4b5563;">{bar.label}</span>
				<span style="font-size: 12px; font-weight: 500;">{bar.value}</span>
			</div>
			<div style="width: 100%; background: #e5e7eb; border-radius: 9999px; height: 6px;">
				<div style=format!(
					"width: {}%; background: {}; border-radius: 9999px; height: 6px;",
					bar.percent,
					bar.color
				)></div>
			</div>
		</div>
	}
}

/// Side panel for the selected node.
#[component]
pub fn NodeDetailPanel(
	/// Selected node.
	node: NetworkNode,
	/// Close button pressed.
	on_close: Callback<()>,
) -> impl IntoView {
	let bars = metric_bars(&node.metrics);

	view! {
		<div
			class="node-detail-panel"
			style="position: absolute; right: 0; top: 0; width: 16rem; background: white; border-radius: 6px; border: 1px solid #e5e7eb; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); padding: 1rem;"
		>
			<div style="display: flex; justify-content: space-between; align-items: flex-start;">
				<h3 style="font-size: 1.125rem; font-weight: 600; margin: 0;">{node.name.clone()}</h3>
				<button
					title="Fechar"
					style="background: none; border: none; color: #6b7280; cursor: pointer;"
					on:click=move |_| on_close.run(())
				>
					<svg width="16" height="16" fill="none" stroke="currentColor" viewBox="0 0 24 24">
						<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
					</svg>
				</button>
			</div>

			<div style="margin-top: 0.5rem;">
				<StatusBadge status=node.status />
			</div>

			<div style="margin-top: 0.75rem; font-size: 14px; line-height: 1.6;">
				<div>
					<span style="font-weight: 500; color: #374151;">"Tipo: "</span>
					<span>{node.node_type.label()}</span>
				</div>
				<div>
					<span style="font-weight: 500; color: #374151;">"IP: "</span>
					<span>{node.ip_address.clone()}</span>
				</div>
				<div>
					<span style="font-weight: 500; color: #374151;">"Local: "</span>
					<span>{node.location.clone()}</span>
				</div>
			</div>

			<div style="margin-top: 1rem;">
				<h4 style="font-size: 14px; font-weight: 500; color: #374151; margin: 0 0 0.5rem 0;">
					"Métricas"
				</h4>
				<div style="display: flex; flex-direction: column; gap: 0.5rem;">
					{bars.into_iter().map(|bar| view! { <MetricBarRow bar=bar /> }).collect_view()}
				</div>
			</div>
		</div>
	}
}

/// Floating quality summary for the hovered link.
#[component]
pub fn LinkTooltip(
	/// Hovered link.
	link: NetworkLink,
	/// Pointer position when the link was entered.
	anchor: Position,
) -> impl IntoView {
	let rows = link_tooltip_rows(&link);

	view! {
		<div
			class="link-tooltip"
			style=format!(
				"position: absolute; left: {}px; top: {}px; pointer-events: none; background: white; border: 1px solid #e5e7eb; border-radius: 6px; padding: 0.5rem; font-size: 14px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);",
				anchor.x + TOOLTIP_OFFSET,
				anchor.y + TOOLTIP_OFFSET
			)
		>
			<div style="font-weight: 600; margin-bottom: 4px;">"Conexão"</div>
			<div style="display: grid; grid-template-columns: auto auto; gap: 4px; font-size: 12px;">
				{rows
					.into_iter()
					.map(|(label, value)| view! {
						<span>{label}</span>
						<span>{value}</span>
					})
					.collect_view()}
			</div>
		</div>
	}
}

fn dash_array(status: LinkStatus) -> String {
	let dash = status.stroke().dash;
	if dash.is_empty() {
		"none".to_owned()
	} else {
		dash.iter().map(f64::to_string).collect::<Vec<_>>().join(",")
	}
}

/// Key for node border colors and link strokes.
#[component]
pub fn TopologyLegend() -> impl IntoView {
	view! {
		<div class="topology-legend" style="font-size: 12px; display: flex; flex-direction: column; gap: 4px;">
			{NodeStatus::ALL
				.into_iter()
				.map(|status| view! {
					<div style="display: flex; align-items: center; gap: 6px;">
						<span style=format!(
							"width: 10px; height: 10px; border-radius: 9999px; border: 2px solid {};",
							status.color()
						)></span>
						<span>{status.label()}</span>
					</div>
				})
				.collect_view()}
			{LinkStatus::ALL
				.into_iter()
				.map(|status| {
					let stroke = status.stroke();
					view! {
						<div style="display: flex; align-items: center; gap: 6px;">
							<svg width="28" height="8">
								<line
									x1="0"
									y1="4"
									x2="28"
									y2="4"
									stroke=status.color()
									stroke-width=stroke.width.to_string()
									stroke-dasharray=dash_array(status)
								/>
							</svg>
							<span>{status.label()}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
