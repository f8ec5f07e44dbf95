//! Status/type lookup tables: colors, strokes, icons, labels.
//!
//! Every table is an exhaustive `match`, so adding a variant to one of the
//! enums in `types` fails to compile until it has a color, icon and label.

use super::types::{LinkStatus, NodeStatus, NodeType};

/// Healthy / active.
pub const GREEN: &str = "#38a169";
/// Warning / degraded.
pub const AMBER: &str = "#d69e2e";
/// Error / down.
pub const RED: &str = "#e53e3e";
/// Unknown.
pub const GRAY: &str = "#a0aec0";

/// Canvas background.
pub const BACKGROUND: &str = "#f9fafb";
/// Node disc fill.
pub const NODE_FILL: &str = "#f7fafc";
/// Node disc fill while selected.
pub const NODE_FILL_SELECTED: &str = "#ffffff";
/// Icon fill on unselected nodes.
pub const ICON_IDLE: &str = "#4a5568";
/// Node label text.
pub const LABEL_COLOR: &str = "#1a202c";

/// CPU bar.
pub const CPU_BAR: &str = "#2563eb";
/// Memory bar.
pub const MEMORY_BAR: &str = "#0d9488";
/// Disk bar.
pub const DISK_BAR: &str = "#9333ea";

/// How a link line is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStroke {
	/// Line width in pixels before the hover bonus.
	pub width: f64,
	/// Canvas dash pattern; empty means solid.
	pub dash: &'static [f64],
}

const SOLID: &[f64] = &[];
const DASHED: &[f64] = &[10.0, 4.0];
const WIDE_DASHED: &[f64] = &[5.0, 5.0];

/// Glyph drawn inside a node disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeIcon {
	/// SVG path data, roughly 512 units square, scaled down at draw time.
	Path(&'static str),
	/// Plain filled circle for devices without a dedicated icon.
	Circle,
}

impl NodeStatus {
	/// Border color of the node disc and of its status badge.
	pub fn color(self) -> &'static str {
		match self {
			NodeStatus::Healthy => GREEN,
			NodeStatus::Warning => AMBER,
			NodeStatus::Error => RED,
			NodeStatus::Unknown => GRAY,
		}
	}

	/// Badge text.
	pub fn label(self) -> &'static str {
		match self {
			NodeStatus::Healthy => "Saudável",
			NodeStatus::Warning => "Atenção",
			NodeStatus::Error => "Erro",
			NodeStatus::Unknown => "Desconhecido",
		}
	}
}

impl LinkStatus {
	/// Line color.
	pub fn color(self) -> &'static str {
		match self {
			LinkStatus::Active => GREEN,
			LinkStatus::Degraded => AMBER,
			LinkStatus::Down => RED,
			LinkStatus::Unknown => GRAY,
		}
	}

	/// Solid thin when active, dashed medium when degraded, widely dashed
	/// thin when down. Unknown links are drawn like active ones, in gray.
	pub fn stroke(self) -> LinkStroke {
		match self {
			LinkStatus::Active => LinkStroke {
				width: 1.5,
				dash: SOLID,
			},
			LinkStatus::Degraded => LinkStroke {
				width: 2.5,
				dash: DASHED,
			},
			LinkStatus::Down => LinkStroke {
				width: 1.5,
				dash: WIDE_DASHED,
			},
			LinkStatus::Unknown => LinkStroke {
				width: 1.5,
				dash: SOLID,
			},
		}
	}

	/// Text shown in the hover tooltip.
	pub fn label(self) -> &'static str {
		match self {
			LinkStatus::Active => "Ativa",
			LinkStatus::Degraded => "Degradada",
			LinkStatus::Down => "Desconectada",
			LinkStatus::Unknown => "Desconhecida",
		}
	}
}

impl NodeType {
	/// Glyph drawn inside the node disc.
	pub fn icon(self) -> NodeIcon {
		match self {
			NodeType::Server => NodeIcon::Path(SERVER_ICON),
			NodeType::Router => NodeIcon::Path(ROUTER_ICON),
			NodeType::Switch => NodeIcon::Path(SWITCH_ICON),
			NodeType::Client => NodeIcon::Path(CLIENT_ICON),
			NodeType::Database => NodeIcon::Path(DATABASE_ICON),
			NodeType::Unknown => NodeIcon::Circle,
		}
	}

	/// Singular label used in the detail panel.
	pub fn label(self) -> &'static str {
		match self {
			NodeType::Server => "Servidor",
			NodeType::Router => "Roteador",
			NodeType::Switch => "Switch",
			NodeType::Client => "Cliente",
			NodeType::Database => "Banco de Dados",
			NodeType::Unknown => "Desconhecido",
		}
	}

	/// Plural label used on filter toggles.
	pub fn plural_label(self) -> &'static str {
		match self {
			NodeType::Server => "Servidores",
			NodeType::Router => "Roteadores",
			NodeType::Switch => "Switches",
			NodeType::Client => "Clientes",
			NodeType::Database => "Bancos de Dados",
			NodeType::Unknown => "Outros",
		}
	}
}

/// Bar color for a temperature reading in °C.
pub fn temperature_color(celsius: f64) -> &'static str {
	if celsius > 60.0 {
		RED
	} else if celsius > 50.0 {
		AMBER
	} else {
		GREEN
	}
}

const SERVER_ICON: &str = "M480 160H32c-17.7 0-32 14.3-32 32v32c0 17.7 14.3 32 32 32h448c17.7 0 32-14.3 32-32v-32c0-17.7-14.3-32-32-32zm0 160H32c-17.7 0-32 14.3-32 32v32c0 17.7 14.3 32 32 32h448c17.7 0 32-14.3 32-32v-32c0-17.7-14.3-32-32-32zm0 160H32c-17.7 0-32 14.3-32 32v32c0 17.7 14.3 32 32 32h448c17.7 0 32-14.3 32-32v-32c0-17.7-14.3-32-32-32z";
const ROUTER_ICON: &str = "M624 384h-16V243.9c0-12.7-5.1-24.9-14.1-33.9L494 110.1c-9-9-21.2-14.1-33.9-14.1H416V48c0-26.5-21.5-48-48-48H48C21.5 0 0 21.5 0 48v320c0 26.5 21.5 48 48 48h16c0 53 43 96 96 96s96-43 96-96h128c0 53 43 96 96 96s96-43 96-96h48c8.8 0 16-7.2 16-16v-32c0-8.8-7.2-16-16-16zm-464 96c-26.5 0-48-21.5-48-48s21.5-48 48-48 48 21.5 48 48-21.5 48-48 48zm208-96H242.7c-16.6-28.6-47.2-48-82.7-48s-66.1 19.4-82.7 48H48V48h352v336zm112 96c-26.5 0-48-21.5-48-48s21.5-48 48-48 48 21.5 48 48-21.5 48-48 48z";
const SWITCH_ICON: &str = "M248 8C111 8 0 119 0 256s111 248 248 248 248-111 248-248S385 8 248 8zm0 448c-110.3 0-200-89.7-200-200S137.7 56 248 56s200 89.7 200 200-89.7 200-200 200zm-80-296c17.7 0 32-14.3 32-32s-14.3-32-32-32-32 14.3-32 32 14.3 32 32 32zm160 0c17.7 0 32-14.3 32-32s-14.3-32-32-32-32 14.3-32 32 14.3 32 32 32zm16 32H152c-26.5 0-48 21.5-48 48v32c0 26.5 21.5 48 48 48h192c26.5 0 48-21.5 48-48v-32c0-26.5-21.5-48-48-48z";
const CLIENT_ICON: &str = "M528 0H48C21.5 0 0 21.5 0 48v320c0 26.5 21.5 48 48 48h192l-16 48h-72c-13.3 0-24 10.7-24 24s10.7 24 24 24h272c13.3 0 24-10.7 24-24s-10.7-24-24-24h-72l-16-48h192c26.5 0 48-21.5 48-48V48c0-26.5-21.5-48-48-48zm-16 352H64V64h448v288z";
const DATABASE_ICON: &str = "M448 73.143v45.714C448 159.143 347.667 192 224 192S0 159.143 0 118.857V73.143C0 32.857 100.333 0 224 0s224 32.857 224 73.143zM448 176v102.857C448 319.143 347.667 352 224 352S0 319.143 0 278.857V176c48.125 33.143 136.208 48.572 224 48.572S399.874 209.143 448 176zm0 160v102.857C448 479.143 347.667 512 224 512S0 479.143 0 438.857V336c48.125 33.143 136.208 48.572 224 48.572S399.874 369.143 448 336z";
