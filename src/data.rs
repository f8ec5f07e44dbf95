//! Built-in snapshot standing in for a live data provider.

use crate::components::topology::TopologyData;
use crate::error::TopologyError;

const MOCK_TOPOLOGY: &str = include_str!("../assets/topology.json");

/// Two routers, two switches and the devices hanging off them.
pub fn mock_topology() -> Result<TopologyData, TopologyError> {
	TopologyData::from_json(MOCK_TOPOLOGY)
}
