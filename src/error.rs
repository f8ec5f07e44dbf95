//! Error type shared by the data provider and the canvas component.

use thiserror::Error;

/// Failures surfaced while loading a snapshot or attaching to the canvas.
///
/// Layout, scene building and interaction never fail: bad references in a
/// snapshot degrade visually instead.
#[derive(Error, Debug)]
pub enum TopologyError {
	/// The snapshot is not valid JSON or does not match the data model.
	#[error("failed to parse topology snapshot: {0}")]
	Parse(#[from] serde_json::Error),

	/// Two nodes share an id.
	#[error("duplicate node id in snapshot: {0}")]
	DuplicateNodeId(String),

	/// Two links share an id.
	#[error("duplicate link id in snapshot: {0}")]
	DuplicateLinkId(String),

	/// The browser refused to hand out a 2D rendering context.
	#[error("canvas 2d context unavailable")]
	CanvasContext,
}
