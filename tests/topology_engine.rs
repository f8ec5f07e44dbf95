use network_topology_canvas::components::topology::{
	InteractionState, LinkStatus, NODE_RADIUS, NodeStatus, NodeType, Position, ROUTER_RADIUS, Selection,
	TopologyData, TopologyFilter, TopologyState, compute_layout, style,
};
use network_topology_canvas::data::mock_topology;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::json;

fn node(id: &str, kind: &str, status: &str) -> serde_json::Value {
	json!({
		"id": id,
		"name": id.to_uppercase(),
		"type": kind,
		"status": status,
		"ipAddress": "10.0.0.1",
		"location": "Rack A",
		"metrics": { "cpu": 10.0, "memory": 20.0, "diskUsage": 30.0 }
	})
}

fn link(id: &str, source: &str, target: &str, status: &str) -> serde_json::Value {
	json!({
		"id": id,
		"source": source,
		"target": target,
		"status": status,
		"bandwidth": 1000.0,
		"latency": 2.0,
		"packetLoss": 0.1
	})
}

fn snapshot(nodes: Vec<serde_json::Value>, links: Vec<serde_json::Value>) -> TopologyData {
	TopologyData::from_json(&json!({ "nodes": nodes, "links": links }).to_string()).unwrap()
}

fn two_routers() -> TopologyData {
	snapshot(
		vec![
			node("r1", "router", "healthy"),
			node("r2", "router", "healthy"),
			node("s1", "switch", "healthy"),
			node("srv", "server", "healthy"),
		],
		vec![
			link("l1", "s1", "r1", "active"),
			link("l2", "srv", "s1", "active"),
		],
	)
}

fn assert_near(actual: (f64, f64), expected: (f64, f64)) {
	assert!(
		(actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
		"{actual:?} != {expected:?}"
	);
}

#[test]
fn two_router_example_places_every_tier() {
	let data = two_routers();
	let layout = compute_layout(&data.nodes, &data.links, 800.0, 600.0, &mut SmallRng::seed_from_u64(1));

	assert_eq!(layout.len(), 4);
	assert_eq!(layout.fallback_count(), 0);

	let at = |id: &str| {
		let p = layout.get(id).unwrap();
		(p.x, p.y)
	};
	let (r1, s1, srv) = (at("r1"), at("s1"), at("srv"));

	assert_near(r1, (400.0 + ROUTER_RADIUS / 2.0, 300.0));
	assert_near(at("r2"), (400.0 - ROUTER_RADIUS / 2.0, 300.0));

	let switch_distance = ((s1.0 - r1.0).powi(2) + (s1.1 - r1.1).powi(2)).sqrt();
	assert!((switch_distance - ROUTER_RADIUS).abs() < 1e-9);

	let server_distance = ((srv.0 - s1.0).powi(2) + (srv.1 - s1.1).powi(2)).sqrt();
	assert!((server_distance - 0.8 * ROUTER_RADIUS).abs() < 1e-9);
}

#[test]
fn classified_tiers_ignore_the_rng() {
	let data = two_routers();
	let a = compute_layout(&data.nodes, &data.links, 800.0, 600.0, &mut SmallRng::seed_from_u64(1));
	let b = compute_layout(&data.nodes, &data.links, 800.0, 600.0, &mut SmallRng::seed_from_u64(99));
	assert_eq!(a, b);
}

#[test]
fn orphans_fall_back_inside_the_band() {
	let data = snapshot(
		(0..50)
			.map(|i| node(&format!("c{i}"), "client", "healthy"))
			.collect(),
		Vec::new(),
	);
	let mut rng = SmallRng::seed_from_u64(7);
	let layout = compute_layout(&data.nodes, &data.links, 1000.0, 500.0, &mut rng);

	assert_eq!(layout.len(), 50);
	assert_eq!(layout.fallback_count(), 50);
	for (_, p) in layout.iter() {
		assert!((100.0..=900.0).contains(&p.x), "x = {}", p.x);
		assert!((50.0..=450.0).contains(&p.y), "y = {}", p.y);
	}
}

#[test]
fn mock_snapshot_lays_out_completely() {
	let data = mock_topology().unwrap();
	let state = TopologyState::new(data.clone(), 1200.0, 600.0, &mut SmallRng::seed_from_u64(3));
	for node in &data.nodes {
		assert!(state.layout.get(&node.id).is_some(), "{} missing", node.id);
	}
	assert_eq!(state.layout.len(), data.nodes.len());
}

#[test]
fn clicking_nodes_on_the_canvas_toggles_selection() {
	let data = two_routers();
	let state = TopologyState::new(data, 800.0, 600.0, &mut SmallRng::seed_from_u64(1));
	let mut interaction = InteractionState::default();

	// s1 sits exactly on top of r2, so the later node wins the hit
	let r2 = state.layout.get("r2").unwrap();
	let hit = state.node_at_position(r2.x, r2.y + NODE_RADIUS / 2.0).unwrap();
	assert_eq!(hit.id, "s1");

	let r1 = state.layout.get("r1").unwrap();
	let hit = state.node_at_position(r1.x, r1.y).unwrap();
	assert_eq!(hit.id, "r1");

	interaction.click_node(&hit.id);
	assert_eq!(*interaction.selection(), Selection::NodeSelected("r1".into()));
	interaction.click_node("s1");
	assert_eq!(*interaction.selection(), Selection::NodeSelected("s1".into()));
	interaction.click_node("s1");
	assert_eq!(*interaction.selection(), Selection::Idle);
}

#[test]
fn scene_reflects_status_and_selection() {
	let data = snapshot(
		vec![
			node("r1", "router", "error"),
			node("s1", "switch", "healthy"),
		],
		vec![
			link("up", "s1", "r1", "active"),
			link("cut", "r1", "s1", "down"),
		],
	);
	let state = TopologyState::new(data, 800.0, 600.0, &mut SmallRng::seed_from_u64(1));
	let mut interaction = InteractionState::default();
	interaction.select_node(Some("s1".into()));
	let scene = state.scene(&interaction);

	let edge = |id: &str| scene.edges.iter().find(|e| e.link_id == id).unwrap();
	assert!(edge("up").dash.is_empty());
	assert!(!edge("cut").dash.is_empty());
	assert_eq!(edge("cut").color, LinkStatus::Down.color());

	let glyph = |id: &str| scene.nodes.iter().find(|g| g.node_id == id).unwrap();
	assert_eq!(glyph("r1").border, style::RED);
	assert!(!glyph("r1").selected);
	assert!(glyph("s1").selected);
}

#[test]
fn filtered_snapshot_never_carries_dangling_links() {
	let data = mock_topology().unwrap();
	let mut filter = TopologyFilter::default();
	filter.toggle_type(NodeType::Router);
	filter.toggle_status(NodeStatus::Warning);

	let filtered = filter.apply(&data);
	assert!(filtered.nodes.iter().all(|n| n.node_type != NodeType::Router));
	assert!(filtered.nodes.iter().all(|n| n.status != NodeStatus::Warning));
	for link in &filtered.links {
		assert!(filtered.node(&link.source).is_some(), "{} source", link.id);
		assert!(filtered.node(&link.target).is_some(), "{} target", link.id);
	}

	let layout = compute_layout(
		&filtered.nodes,
		&filtered.links,
		1200.0,
		600.0,
		&mut SmallRng::seed_from_u64(5),
	);
	assert_eq!(layout.len(), filtered.nodes.len());
}

#[test]
fn new_snapshot_drops_interaction_but_resize_keeps_it() {
	let mut rng = SmallRng::seed_from_u64(1);
	let mut state = TopologyState::new(two_routers(), 800.0, 600.0, &mut rng);
	let mut interaction = InteractionState::default();
	interaction.click_node("r1");

	if state.update(two_routers(), 1000.0, 700.0, &mut rng) {
		interaction.reset();
	}
	assert_eq!(interaction.selected_node(), Some("r1"));
	assert_eq!(state.width, 1000.0);

	let mut shrunk = two_routers();
	shrunk.nodes.pop();
	shrunk.links.pop();
	if state.update(shrunk, 1000.0, 700.0, &mut rng) {
		interaction.reset();
	}
	assert_eq!(*interaction.selection(), Selection::Idle);
	assert_eq!(state.layout.len(), 3);
}

#[test]
fn hovering_a_link_anchors_its_tooltip() {
	let data = two_routers();
	let state = TopologyState::new(data, 800.0, 600.0, &mut SmallRng::seed_from_u64(1));
	let mut interaction = InteractionState::default();

	// l2 runs from srv (205, 300) to s1 (325, 300)
	let hovered = state.link_at_position(260.0, 302.0).map(|l| l.id.clone());
	assert_eq!(hovered.as_deref(), Some("l2"));
	interaction.set_hovered_link(hovered, Position::new(260.0, 302.0));
	assert_eq!(interaction.hovered_link(), Some("l2"));
	assert_eq!(interaction.tooltip_position().x, 260.0);

	let gone = state.link_at_position(260.0, 400.0).map(|l| l.id.clone());
	interaction.set_hovered_link(gone, Position::ORIGIN);
	assert_eq!(interaction.hovered_link(), None);
	assert_eq!(interaction.tooltip_position().y, 302.0);
}
