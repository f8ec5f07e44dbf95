//! Framework-free description of what the canvas and overlays show.
//!
//! `build_scene` is a pure function of the snapshot, its layout and the
//! interaction state; `render` only paints what it is handed.

use super::interaction::InteractionState;
use super::layout::{Layout, Position};
use super::style::{self, NodeIcon};
use super::types::{LinkId, NetworkLink, NodeId, NodeMetrics, TopologyData};

/// Radius of a node disc, also its hit radius.
pub const NODE_RADIUS: f64 = 20.0;
/// Radius of the pulsing ring around the selected node.
pub const SELECTION_RING_RADIUS: f64 = 24.0;
/// Distance from node center to the label baseline.
pub const LABEL_OFFSET: f64 = 35.0;
const HOVER_WIDTH_BONUS: f64 = 1.0;

/// A link, ready to stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShape {
	/// Link this edge draws.
	pub link_id: LinkId,
	/// Source end, or the origin when the source has no position.
	pub from: Position,
	/// Target end, same fallback as `from`.
	pub to: Position,
	/// Stroke color.
	pub color: &'static str,
	/// Stroke width, hover bonus included.
	pub width: f64,
	/// Dash pattern; empty is solid.
	pub dash: &'static [f64],
	/// Pointer is over this link.
	pub hovered: bool,
}

/// A node disc with its icon and label.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGlyph {
	/// Node this glyph draws.
	pub node_id: NodeId,
	/// Disc center.
	pub center: Position,
	/// Disc fill.
	pub fill: &'static str,
	/// Border color, from the node status.
	pub border: &'static str,
	/// Border width; wider when selected.
	pub border_width: f64,
	/// Icon inside the disc.
	pub icon: NodeIcon,
	/// Icon fill.
	pub icon_color: &'static str,
	/// Text under the disc.
	pub label: String,
	/// Draw the selection ring.
	pub selected: bool,
}

/// Everything drawn on the canvas, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	/// Links, drawn first.
	pub edges: Vec<EdgeShape>,
	/// Nodes, drawn over the links in snapshot order.
	pub nodes: Vec<NodeGlyph>,
}

/// Build the scene for one frame.
///
/// Link endpoints missing from `layout` are drawn from the canvas origin.
pub fn build_scene(
	data: &TopologyData,
	layout: &Layout,
	interaction: &InteractionState,
	width: f64,
	height: f64,
) -> Scene {
	let edges = data
		.links
		.iter()
		.map(|link| {
			let stroke = link.status.stroke();
			let hovered = interaction.is_hovered(&link.id);
			EdgeShape {
				link_id: link.id.clone(),
				from: layout.position_or_origin(&link.source),
				to: layout.position_or_origin(&link.target),
				color: link.status.color(),
				width: if hovered {
					stroke.width + HOVER_WIDTH_BONUS
				} else {
					stroke.width
				},
				dash: stroke.dash,
				hovered,
			}
		})
		.collect();

	let nodes = data
		.nodes
		.iter()
		.map(|node| {
			let selected = interaction.is_selected(&node.id);
			let status_color = node.status.color();
			NodeGlyph {
				node_id: node.id.clone(),
				center: layout.position_or_origin(&node.id),
				fill: if selected {
					style::NODE_FILL_SELECTED
				} else {
					style::NODE_FILL
				},
				border: status_color,
				border_width: if selected { 3.0 } else { 2.0 },
				icon: node.node_type.icon(),
				icon_color: if selected {
					status_color
				} else {
					style::ICON_IDLE
				},
				label: node.name.clone(),
				selected,
			}
		})
		.collect();

	Scene {
		width,
		height,
		edges,
		nodes,
	}
}

/// One progress bar in the node detail panel.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricBar {
	/// Caption on the left.
	pub label: &'static str,
	/// Formatted reading on the right.
	pub value: String,
	/// Fill, clamped to 0–100.
	pub percent: f64,
	/// Fill color.
	pub color: &'static str,
}

/// Bars for cpu, memory, disk and, when reported, temperature.
pub fn metric_bars(metrics: &NodeMetrics) -> Vec<MetricBar> {
	let mut bars = vec![
		MetricBar {
			label: "CPU",
			value: format!("{}%", metrics.cpu),
			percent: clamp_percent(metrics.cpu),
			color: style::CPU_BAR,
		},
		MetricBar {
			label: "Memória",
			value: format!("{}%", metrics.memory),
			percent: clamp_percent(metrics.memory),
			color: style::MEMORY_BAR,
		},
		MetricBar {
			label: "Disco",
			value: format!("{}%", metrics.disk_usage),
			percent: clamp_percent(metrics.disk_usage),
			color: style::DISK_BAR,
		},
	];
	if let Some(celsius) = metrics.temperature {
		bars.push(MetricBar {
			label: "Temperatura",
			value: format!("{celsius}°C"),
			percent: clamp_percent(celsius),
			color: style::temperature_color(celsius),
		});
	}
	bars
}

fn clamp_percent(value: f64) -> f64 {
	if value.is_nan() {
		0.0
	} else {
		value.clamp(0.0, 100.0)
	}
}

/// `(label, value)` rows of the link hover tooltip.
pub fn link_tooltip_rows(link: &NetworkLink) -> [(&'static str, String); 4] {
	[
		("Status:", link.status.label().to_owned()),
		("Banda:", format!("{} Mbps", link.bandwidth)),
		("Latência:", format!("{} ms", link.latency)),
		("Perda de pacotes:", format!("{}%", link.packet_loss)),
	]
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::topology::layout::compute_layout;
	use crate::components::topology::types::{
		LinkStatus, NetworkNode, NodeMetrics, NodeStatus, NodeType,
	};

	fn snapshot() -> TopologyData {
		let node = |id: &str, node_type, status| NetworkNode {
			id: id.into(),
			name: format!("{id} name"),
			node_type,
			status,
			ip_address: "10.0.0.1".into(),
			location: "lab".into(),
			metrics: NodeMetrics::default(),
		};
		let link = |id: &str, source: &str, target: &str, status| NetworkLink {
			id: id.into(),
			source: source.into(),
			target: target.into(),
			status,
			bandwidth: 980.0,
			latency: 2.3,
			packet_loss: 0.02,
		};
		TopologyData {
			nodes: vec![
				node("r1", NodeType::Router, NodeStatus::Healthy),
				node("c1", NodeType::Client, NodeStatus::Error),
			],
			links: vec![
				link("up", "r1", "c1", LinkStatus::Active),
				link("dead", "c1", "ghost", LinkStatus::Down),
			],
		}
	}

	fn scene_with(interaction: &InteractionState) -> Scene {
		let data = snapshot();
		let layout = compute_layout(
			&data.nodes,
			&data.links,
			800.0,
			600.0,
			&mut SmallRng::seed_from_u64(0),
		);
		build_scene(&data, &layout, interaction, 800.0, 600.0)
	}

	#[test]
	fn paints_every_link_and_node_in_input_order() {
		let scene = scene_with(&InteractionState::default());
		let edge_ids: Vec<_> = scene.edges.iter().map(|e| e.link_id.as_str()).collect();
		let node_ids: Vec<_> = scene.nodes.iter().map(|n| n.node_id.as_str()).collect();
		assert_eq!(edge_ids, ["up", "dead"]);
		assert_eq!(node_ids, ["r1", "c1"]);
		assert_eq!(scene.nodes[0].label, "r1 name");
	}

	#[test]
	fn missing_endpoint_is_drawn_from_origin() {
		let scene = scene_with(&InteractionState::default());
		assert_eq!(scene.edges[1].to, Position::ORIGIN);
		assert_ne!(scene.edges[1].from, Position::ORIGIN);
	}

	#[test]
	fn styles_follow_status() {
		let scene = scene_with(&InteractionState::default());
		assert_eq!(scene.nodes[1].border, style::RED);
		assert_eq!(scene.edges[1].color, style::RED);
		assert!(!scene.edges[1].dash.is_empty());
		assert!(scene.edges[0].dash.is_empty());
		assert_eq!(scene.nodes[0].icon_color, style::ICON_IDLE);
		assert_eq!(scene.nodes[1].icon, NodeType::Client.icon());
	}

	#[test]
	fn selection_and_hover_change_emphasis() {
		let mut interaction = InteractionState::default();
		interaction.click_node("c1");
		interaction.set_hovered_link(Some("up".into()), Position::new(1.0, 1.0));
		let idle = scene_with(&InteractionState::default());
		let active = scene_with(&interaction);

		let glyph = &active.nodes[1];
		assert!(glyph.selected);
		assert_eq!(glyph.fill, style::NODE_FILL_SELECTED);
		assert_eq!(glyph.icon_color, style::RED);
		assert_eq!(glyph.border_width, 3.0);
		assert!(!active.nodes[0].selected);

		assert!(active.edges[0].hovered);
		assert_eq!(active.edges[0].width, idle.edges[0].width + 1.0);
		assert_eq!(active.edges[1].width, idle.edges[1].width);
	}

	#[test]
	fn temperature_bar_only_when_reported() {
		let mut metrics = NodeMetrics {
			cpu: 45.0,
			memory: 62.0,
			disk_usage: 78.0,
			temperature: None,
		};
		let bars = metric_bars(&metrics);
		assert_eq!(bars.len(), 3);
		assert_eq!(bars[0].value, "45%");

		metrics.temperature = Some(62.0);
		let bars = metric_bars(&metrics);
		assert_eq!(bars.len(), 4);
		assert_eq!(bars[3].value, "62°C");
		assert_eq!(bars[3].color, style::RED);
	}

	#[test]
	fn bar_fill_is_clamped() {
		let metrics = NodeMetrics {
			cpu: 140.0,
			memory: -3.0,
			disk_usage: f64::NAN,
			temperature: Some(45.0),
		};
		let fills: Vec<_> = metric_bars(&metrics).iter().map(|b| b.percent).collect();
		assert_eq!(fills, [100.0, 0.0, 0.0, 45.0]);
	}

	#[test]
	fn tooltip_lists_link_quality() {
		let data = snapshot();
		let rows = link_tooltip_rows(&data.links[0]);
		assert_eq!(rows[0], ("Status:", "Ativa".to_owned()));
		assert_eq!(rows[1].1, "980 Mbps");
		assert_eq!(rows[2].1, "2.3 ms");
		assert_eq!(rows[3].1, "0.02%");
	}
}
