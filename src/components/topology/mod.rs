//! Network topology map: layout, hit testing, interaction state and the
//! canvas component that ties them together.

mod component;
mod filter;
mod interaction;
mod layout;
mod overlay;
mod render;
mod scene;
mod state;
pub mod style;
mod types;

pub use component::NetworkTopologyCanvas;
pub use filter::TopologyFilter;
pub use interaction::{InteractionState, Selection};
pub use layout::{
	DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, Layout, Position, ROUTER_RADIUS, compute_layout,
};
pub use overlay::{LinkTooltip, NodeDetailPanel, StatusBadge, TopologyLegend};
pub use scene::{
	EdgeShape, MetricBar, NODE_RADIUS, NodeGlyph, Scene, build_scene, link_tooltip_rows, metric_bars,
};
pub use state::{LINK_HIT_TOLERANCE, TopologyState};
pub use style::{LinkStroke, NodeIcon};
pub use types::{
	LinkId, LinkStatus, NetworkLink, NetworkNode, NodeId, NodeMetrics, NodeStatus, NodeType,
	TopologyData,
};
