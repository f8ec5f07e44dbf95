//! Tiered radial placement.
//!
//! Routers sit on a small circle around the canvas center, switches orbit
//! the router they hang off, and every other device orbits whichever
//! already-placed neighbour it finds first. Whatever is left gets a random
//! spot inside the inner 80% of the canvas.

use std::collections::HashMap;
use std::f64::consts::PI;

use log::debug;
use rand::Rng;

use super::types::{NetworkLink, NetworkNode, NodeId, NodeType};

/// Base orbit radius `R`. Routers use `R / 2`, switches `R`, leaf devices
/// `1.5 R` around a router or `0.8 R` around anything else.
pub const ROUTER_RADIUS: f64 = 150.0;

/// Canvas width used when the host does not supply one.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
/// Canvas height used when the host does not supply one.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

const FALLBACK_MARGIN: f64 = 0.1;

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal offset from the left edge.
	pub x: f64,
	/// Vertical offset from the top edge.
	pub y: f64,
}

impl Position {
	/// Top-left corner, used for endpoints that have no layout entry.
	pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

	/// Construct a position.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	fn around(self, radius: f64, angle: f64) -> Self {
		Self {
			x: self.x + angle.cos() * radius,
			y: self.y + angle.sin() * radius,
		}
	}

	/// Euclidean distance between two points.
	pub fn distance_to(self, other: Position) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Node positions for one snapshot at one canvas size.
///
/// Replaced wholesale on every recompute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	positions: HashMap<NodeId, Position>,
	fallback_count: usize,
}

impl Layout {
	/// Position of `id`, if it was part of the laid-out node set.
	pub fn get(&self, id: &str) -> Option<Position> {
		self.positions.get(id).copied()
	}

	/// Position of `id`, or the canvas origin for ids the layout never saw.
	pub fn position_or_origin(&self, id: &str) -> Position {
		self.get(id).unwrap_or(Position::ORIGIN)
	}

	/// Number of positioned nodes.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// True when no node was laid out.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	/// How many nodes ended up with a random fallback position.
	pub fn fallback_count(&self) -> usize {
		self.fallback_count
	}

	/// Iterate over all `(id, position)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> {
		self.positions.iter().map(|(id, pos)| (id.as_str(), *pos))
	}
}

/// Place every node of a snapshot inside a `width` × `height` canvas.
///
/// Routers and link-anchored switches are placed deterministically. The
/// `rng` is only consulted for nodes that have no resolvable anchor, so
/// callers can seed it to make whole layouts reproducible.
///
/// Anchor search is a linear scan over `links` per node; the first matching
/// link in input order wins.
pub fn compute_layout<R: Rng + ?Sized>(
	nodes: &[NetworkNode],
	links: &[NetworkLink],
	width: f64,
	height: f64,
	rng: &mut R,
) -> Layout {
	let types: HashMap<&str, NodeType> =
		nodes.iter().map(|n| (n.id.as_str(), n.node_type)).collect();
	let is_router = |id: &str| types.get(id) == Some(&NodeType::Router);
	let mut positions: HashMap<NodeId, Position> = HashMap::with_capacity(nodes.len());
	let center = Position::new(width / 2.0, height / 2.0);

	// Empty tiers never reach `tier_angle`, so the counts below are never zero
	// when used as divisors.
	let routers: Vec<&NetworkNode> = nodes
		.iter()
		.filter(|n| n.node_type == NodeType::Router)
		.collect();
	for (i, router) in routers.iter().enumerate() {
		let angle = tier_angle(i as f64, routers.len());
		positions.insert(router.id.clone(), center.around(ROUTER_RADIUS / 2.0, angle));
	}

	let switches: Vec<&NetworkNode> = nodes
		.iter()
		.filter(|n| n.node_type == NodeType::Switch)
		.collect();
	for (i, switch) in switches.iter().enumerate() {
		let anchor_id = links
			.iter()
			.filter_map(|link| link.other_end(&switch.id))
			.find(|&other| is_router(other))
			.or_else(|| routers.first().map(|r| r.id.as_str()));
		let Some(anchor) = anchor_id.and_then(|id| positions.get(id).copied()) else {
			continue;
		};
		let angle = tier_angle(i as f64 + 0.5, switches.len());
		positions.insert(switch.id.clone(), anchor.around(ROUTER_RADIUS, angle));
	}

	let others: Vec<&NetworkNode> = nodes
		.iter()
		.filter(|n| !matches!(n.node_type, NodeType::Router | NodeType::Switch))
		.collect();
	for (i, node) in others.iter().enumerate() {
		let anchor = links
			.iter()
			.filter_map(|link| link.other_end(&node.id))
			.find_map(|other| positions.get(other).map(|pos| (other, *pos)));
		let Some((anchor_id, anchor)) = anchor else {
			continue;
		};
		let radius = if is_router(anchor_id) {
			ROUTER_RADIUS * 1.5
		} else {
			ROUTER_RADIUS * 0.8
		};
		let angle = tier_angle(i as f64 + 0.5, others.len());
		positions.insert(node.id.clone(), anchor.around(radius, angle));
	}

	let mut fallback_count = 0;
	for node in nodes {
		positions.entry(node.id.clone()).or_insert_with(|| {
			fallback_count += 1;
			fallback_position(width, height, rng)
		});
	}

	debug!(
		"layout: {} nodes, {} links, {} fallback placements",
		nodes.len(),
		links.len(),
		fallback_count
	);

	Layout {
		positions,
		fallback_count,
	}
}

fn tier_angle(slot: f64, count: usize) -> f64 {
	slot / count as f64 * 2.0 * PI
}

fn fallback_position<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Position {
	let span = 1.0 - 2.0 * FALLBACK_MARGIN;
	Position::new(
		width * FALLBACK_MARGIN + rng.r#gen::<f64>() * width * span,
		height * FALLBACK_MARGIN + rng.r#gen::<f64>() * height * span,
	)
}
