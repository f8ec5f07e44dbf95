use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// Identifier of a [`NetworkNode`], unique within a snapshot.
pub type NodeId = String;

/// Identifier of a [`NetworkLink`], unique within a snapshot.
pub type LinkId = String;

/// Kind of network device. Unrecognised tags deserialize to `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
	/// Application or file server.
	Server,
	/// Core or edge router.
	Router,
	/// Distribution switch.
	Switch,
	/// End-user workstation.
	Client,
	/// Database host.
	Database,
	/// Anything the dashboard does not classify.
	#[serde(other)]
	Unknown,
}

impl NodeType {
	/// The device kinds the filter layer can toggle.
	pub const TOGGLEABLE: [NodeType; 5] = [
		NodeType::Server,
		NodeType::Router,
		NodeType::Switch,
		NodeType::Client,
		NodeType::Database,
	];
}

/// Health of a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
	/// Operating normally.
	Healthy,
	/// Degraded but reachable.
	Warning,
	/// Failing.
	Error,
	/// No health information.
	#[serde(other)]
	Unknown,
}

impl NodeStatus {
	/// All statuses, in legend order.
	pub const ALL: [NodeStatus; 4] = [
		NodeStatus::Healthy,
		NodeStatus::Warning,
		NodeStatus::Error,
		NodeStatus::Unknown,
	];
}

/// Health of a link. Unrecognised tags deserialize to `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
	/// Carrying traffic normally.
	Active,
	/// Carrying traffic with reduced quality.
	Degraded,
	/// Not carrying traffic.
	Down,
	/// No health information.
	#[serde(other)]
	Unknown,
}

impl LinkStatus {
	/// All link statuses, in legend order.
	pub const ALL: [LinkStatus; 4] = [
		LinkStatus::Active,
		LinkStatus::Degraded,
		LinkStatus::Down,
		LinkStatus::Unknown,
	];
}

/// Resource usage of a device. All values except `temperature` are percentages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetrics {
	/// CPU usage, 0–100.
	pub cpu: f64,
	/// Memory usage, 0–100.
	pub memory: f64,
	/// Disk usage, 0–100.
	pub disk_usage: f64,
	/// Temperature in °C, when the device reports one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub temperature: Option<f64>,
}

/// A network device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkNode {
	/// Unique id.
	pub id: NodeId,
	/// Display name, drawn under the glyph.
	pub name: String,
	/// Device kind.
	#[serde(rename = "type")]
	pub node_type: NodeType,
	/// Device health.
	pub status: NodeStatus,
	/// IP address as shown to the user.
	pub ip_address: String,
	/// Free-form location.
	pub location: String,
	/// Resource usage.
	pub metrics: NodeMetrics,
}

/// A connection between two devices. Stored directed, drawn undirected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkLink {
	/// Unique id.
	pub id: LinkId,
	/// Id of one endpoint.
	pub source: NodeId,
	/// Id of the other endpoint.
	pub target: NodeId,
	/// Link health.
	pub status: LinkStatus,
	/// Throughput in Mbps.
	pub bandwidth: f64,
	/// Round trip latency in ms.
	pub latency: f64,
	/// Packet loss, 0–100.
	pub packet_loss: f64,
}

impl NetworkLink {
	/// The endpoint opposite `node_id`, if `node_id` is an endpoint.
	pub fn other_end(&self, node_id: &str) -> Option<&str> {
		if self.source == node_id {
			Some(self.target.as_str())
		} else if self.target == node_id {
			Some(self.source.as_str())
		} else {
			None
		}
	}
}

/// One snapshot of the network as supplied by the data provider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyData {
	/// Devices, in provider order.
	pub nodes: Vec<NetworkNode>,
	/// Links, in provider order.
	pub links: Vec<NetworkLink>,
}

impl TopologyData {
	/// Parse a snapshot from JSON and check id uniqueness.
	pub fn from_json(json: &str) -> Result<Self, TopologyError> {
		let data: TopologyData = serde_json::from_str(json)?;
		data.validate()?;
		Ok(data)
	}

	/// Check that node ids and link ids are each unique.
	pub fn validate(&self) -> Result<(), TopologyError> {
		let mut seen = HashSet::new();
		for node in &self.nodes {
			if !seen.insert(node.id.as_str()) {
				return Err(TopologyError::DuplicateNodeId(node.id.clone()));
			}
		}
		let mut seen = HashSet::new();
		for link in &self.links {
			if !seen.insert(link.id.as_str()) {
				return Err(TopologyError::DuplicateLinkId(link.id.clone()));
			}
		}
		Ok(())
	}

	/// Node by id.
	pub fn node(&self, id: &str) -> Option<&NetworkNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Link by id.
	pub fn link(&self, id: &str) -> Option<&NetworkLink> {
		self.links.iter().find(|l| l.id == id)
	}
}
