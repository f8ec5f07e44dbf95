use std::collections::HashSet;

use super::types::{NetworkNode, NodeStatus, NodeType, TopologyData};

/// Search text plus per-type and per-status toggles, applied before a
/// snapshot reaches the canvas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopologyFilter {
	/// Matches node names case-insensitively or IP addresses verbatim.
	/// Whitespace is part of the needle.
	pub search: String,
	hidden_types: HashSet<NodeType>,
	hidden_statuses: HashSet<NodeStatus>,
}

impl TopologyFilter {
	/// Whether devices of `node_type` pass the type toggles.
	pub fn is_type_shown(&self, node_type: NodeType) -> bool {
		!self.hidden_types.contains(&node_type)
	}

	/// Whether devices in `status` pass the status toggles.
	pub fn is_status_shown(&self, status: NodeStatus) -> bool {
		!self.hidden_statuses.contains(&status)
	}

	/// Show or hide a device kind.
	pub fn toggle_type(&mut self, node_type: NodeType) {
		if !self.hidden_types.remove(&node_type) {
			self.hidden_types.insert(node_type);
		}
	}

	/// Show or hide a status.
	pub fn toggle_status(&mut self, status: NodeStatus) {
		if !self.hidden_statuses.remove(&status) {
			self.hidden_statuses.insert(status);
		}
	}

	/// Whether a node passes the search and both toggle sets.
	pub fn matches(&self, node: &NetworkNode) -> bool {
		let search = self.search.as_str();
		if !search.is_empty()
			&& !node.name.to_lowercase().contains(&search.to_lowercase())
			&& !node.ip_address.contains(search)
		{
			return false;
		}
		// unclassified devices have no toggle
		let type_shown = node.node_type == NodeType::Unknown || self.is_type_shown(node.node_type);
		type_shown && self.is_status_shown(node.status)
	}

	/// Narrow a snapshot. Links survive only if both endpoints do.
	pub fn apply(&self, data: &TopologyData) -> TopologyData {
		let nodes: Vec<NetworkNode> = data
			.nodes
			.iter()
			.filter(|node| self.matches(node))
			.cloned()
			.collect();
		let kept: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
		let links = data
			.links
			.iter()
			.filter(|link| kept.contains(link.source.as_str()) && kept.contains(link.target.as_str()))
			.cloned()
			.collect();
		TopologyData { nodes, links }
	}
}
