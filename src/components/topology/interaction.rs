use super::layout::Position;
use super::types::{LinkId, NodeId};

/// Which node, if any, has its detail panel open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	/// Nothing selected.
	#[default]
	Idle,
	/// This node's panel is open.
	NodeSelected(NodeId),
}

/// Pointer-driven state of the topology view.
///
/// Selection and link hover are independent: a node can stay selected
/// while the pointer moves over links. Only the commands below mutate it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
	selection: Selection,
	hovered_link: Option<LinkId>,
	tooltip_position: Position,
}

impl InteractionState {
	/// Current selection.
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	/// Link under the pointer, if any.
	pub fn hovered_link(&self) -> Option<&str> {
		self.hovered_link.as_deref()
	}

	/// Pointer position when the hovered link was entered.
	pub fn tooltip_position(&self) -> Position {
		self.tooltip_position
	}

	/// Id of the selected node, if any.
	pub fn selected_node(&self) -> Option<&str> {
		match &self.selection {
			Selection::Idle => None,
			Selection::NodeSelected(id) => Some(id.as_str()),
		}
	}

	/// Whether `node_id` is the selected node.
	pub fn is_selected(&self, node_id: &str) -> bool {
		self.selected_node() == Some(node_id)
	}

	/// Set the selection outright.
	pub fn select_node(&mut self, node_id: Option<NodeId>) {
		self.selection = match node_id {
			Some(id) => Selection::NodeSelected(id),
			None => Selection::Idle,
		};
	}

	/// Click on a node: selects it, or deselects it if it already was.
	pub fn click_node(&mut self, node_id: &str) {
		if self.is_selected(node_id) {
			self.selection = Selection::Idle;
		} else {
			self.selection = Selection::NodeSelected(node_id.to_owned());
		}
	}

	/// Close control on the detail panel. Leaves hover untouched.
	pub fn dismiss(&mut self) {
		self.selection = Selection::Idle;
	}

	/// Pointer entered (`Some`) or left (`None`) a link.
	pub fn set_hovered_link(&mut self, link_id: Option<LinkId>, pointer: Position) {
		if link_id.is_some() {
			self.tooltip_position = pointer;
		}
		self.hovered_link = link_id;
	}

	/// Whether `link_id` is under the pointer.
	pub fn is_hovered(&self, link_id: &str) -> bool {
		self.hovered_link.as_deref() == Some(link_id)
	}

	/// Drop selection and hover, e.g. when the snapshot is replaced.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}
