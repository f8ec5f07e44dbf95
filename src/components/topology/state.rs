use std::f64::consts::TAU;

use log::debug;
use rand::Rng;

use super::interaction::InteractionState;
use super::layout::{Layout, Position, compute_layout};
use super::scene::{NODE_RADIUS, Scene, build_scene};
use super::types::{NetworkLink, NetworkNode, TopologyData};

/// How far from a link's centerline the pointer still counts as on it.
pub const LINK_HIT_TOLERANCE: f64 = 6.0;

const PULSE_PERIOD: f64 = 2.0;

/// One laid-out snapshot at one canvas size, plus animation time.
pub struct TopologyState {
	/// Snapshot being shown.
	pub data: TopologyData,
	/// Positions for `data` at the current size.
	pub layout: Layout,
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
	/// Seconds into the current selection pulse.
	pub pulse_time: f64,
}

impl TopologyState {
	/// Lay out `data` for a `width` × `height` canvas.
	pub fn new<R: Rng + ?Sized>(data: TopologyData, width: f64, height: f64, rng: &mut R) -> Self {
		let layout = compute_layout(&data.nodes, &data.links, width, height, rng);
		for link in &data.links {
			if layout.get(&link.source).is_none() || layout.get(&link.target).is_none() {
				debug!(
					"link {} ({} -> {}) has an endpoint outside the snapshot, drawing it from the origin",
					link.id, link.source, link.target
				);
			}
		}
		Self {
			data,
			layout,
			width,
			height,
			pulse_time: 0.0,
		}
	}

	/// Topmost node whose disc contains the point.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<&NetworkNode> {
		let point = Position::new(x, y);
		// nodes are painted in order, so the last hit is the one on top
		self.data
			.nodes
			.iter()
			.rev()
			.find(|node| self.layout.position_or_origin(&node.id).distance_to(point) <= NODE_RADIUS)
	}

	/// Topmost link under the point. Nodes occlude links.
	pub fn link_at_position(&self, x: f64, y: f64) -> Option<&NetworkLink> {
		if self.node_at_position(x, y).is_some() {
			return None;
		}
		let point = Position::new(x, y);
		self.data.links.iter().rev().find(|link| {
			let from = self.layout.position_or_origin(&link.source);
			let to = self.layout.position_or_origin(&link.target);
			distance_to_segment(point, from, to) <= LINK_HIT_TOLERANCE
		})
	}

	/// Scene for the current frame.
	pub fn scene(&self, interaction: &InteractionState) -> Scene {
		build_scene(&self.data, &self.layout, interaction, self.width, self.height)
	}

	/// Catch up with new props. Returns `true` when the snapshot itself was
	/// replaced, meaning selection and hover no longer apply. A size change
	/// alone re-lays out the same snapshot and returns `false`.
	pub fn update<R: Rng + ?Sized>(
		&mut self,
		data: TopologyData,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> bool {
		if self.data != data {
			debug!(
				"new topology snapshot: {} nodes, {} links",
				data.nodes.len(),
				data.links.len()
			);
			*self = Self::new(data, width, height, rng);
			return true;
		}
		if self.width != width || self.height != height {
			self.resize(width, height, rng);
		}
		false
	}

	/// Lay the same snapshot out again for a new canvas size.
	pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;
		self.layout = compute_layout(&self.data.nodes, &self.data.links, width, height, rng);
	}

	/// Advance the pulse clock by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		self.pulse_time = (self.pulse_time + dt) % PULSE_PERIOD;
	}

	/// Opacity of the selection ring, oscillating between 0.35 and 0.7.
	pub fn selection_ring_alpha(&self) -> f64 {
		let phase = (self.pulse_time / PULSE_PERIOD * TAU).cos();
		0.35 + 0.35 * (0.5 + 0.5 * phase)
	}
}

fn distance_to_segment(p: Position, a: Position, b: Position) -> f64 {
	let (dx, dy) = (b.x - a.x, b.y - a.y);
	let len_sq = dx * dx + dy * dy;
	if len_sq < 1e-12 {
		return p.distance_to(a);
	}
	let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
	p.distance_to(Position::new(a.x + t * dx, a.y + t * dy))
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::topology::types::{LinkStatus, NodeMetrics, NodeStatus, NodeType};

	fn state() -> TopologyState {
		let node = |id: &str, node_type| NetworkNode {
			id: id.into(),
			name: id.into(),
			node_type,
			status: NodeStatus::Healthy,
			ip_address: String::new(),
			location: String::new(),
			metrics: NodeMetrics::default(),
		};
		let data = TopologyData {
			nodes: vec![node("r1", NodeType::Router), node("srv", NodeType::Server)],
			links: vec![NetworkLink {
				id: "l1".into(),
				source: "r1".into(),
				target: "srv".into(),
				status: LinkStatus::Active,
				bandwidth: 1.0,
				latency: 1.0,
				packet_loss: 0.0,
			}],
		};
		// r1 at (475, 300); srv at angle π, 225 away: (250, 300)
		TopologyState::new(data, 800.0, 600.0, &mut SmallRng::seed_from_u64(0))
	}

	#[test]
	fn node_hit_uses_disc_radius() {
		let s = state();
		assert_eq!(s.node_at_position(475.0, 310.0).map(|n| n.id.as_str()), Some("r1"));
		assert_eq!(s.node_at_position(250.0 + NODE_RADIUS - 1.0, 300.0).map(|n| n.id.as_str()), Some("srv"));
		assert!(s.node_at_position(400.0, 100.0).is_none());
	}

	#[test]
	fn link_hit_along_segment() {
		let s = state();
		assert_eq!(s.link_at_position(360.0, 303.0).map(|l| l.id.as_str()), Some("l1"));
		assert!(s.link_at_position(360.0, 320.0).is_none());
		// past the endpoint
		assert!(s.link_at_position(520.0, 300.0).is_none());
	}

	#[test]
	fn nodes_occlude_links() {
		let s = state();
		assert!(s.link_at_position(470.0, 300.0).is_none());
	}

	#[test]
	fn resize_recenters_layout() {
		let mut s = state();
		s.resize(1200.0, 600.0, &mut SmallRng::seed_from_u64(0));
		let r1 = s.layout.get("r1").unwrap();
		assert!((r1.x - 675.0).abs() < 1e-9);
		assert_eq!(s.layout.len(), 2);
	}

	#[test]
	fn new_snapshot_replaces_state() {
		let mut s = state();
		let mut data = s.data.clone();
		data.nodes.retain(|n| n.id == "r1");
		data.links.clear();

		assert!(s.update(data.clone(), 800.0, 600.0, &mut SmallRng::seed_from_u64(0)));
		assert_eq!(s.data, data);
		assert_eq!(s.layout.len(), 1);
		assert!(s.layout.get("srv").is_none());
	}

	#[test]
	fn size_change_keeps_snapshot() {
		let mut s = state();
		let data = s.data.clone();

		assert!(!s.update(data.clone(), 1200.0, 600.0, &mut SmallRng::seed_from_u64(0)));
		assert_eq!(s.data, data);
		assert_eq!(s.width, 1200.0);
		let r1 = s.layout.get("r1").unwrap();
		assert!((r1.x - 675.0).abs() < 1e-9);

		// same props again is a no-op
		let before = s.layout.clone();
		assert!(!s.update(data, 1200.0, 600.0, &mut SmallRng::seed_from_u64(9)));
		assert_eq!(s.layout, before);
	}

	#[test]
	fn pulse_stays_in_range() {
		let mut s = state();
		for _ in 0..500 {
			s.tick(0.016);
			let alpha = s.selection_ring_alpha();
			assert!((0.35..=0.7 + 1e-12).contains(&alpha));
		}
	}

	#[test]
	fn degenerate_segment_measures_to_point() {
		let a = Position::new(3.0, 4.0);
		assert!((distance_to_segment(Position::ORIGIN, a, a) - 5.0).abs() < 1e-12);
	}
}
