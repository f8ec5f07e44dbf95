use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Path2d};

use super::scene::{EdgeShape, LABEL_OFFSET, NODE_RADIUS, NodeGlyph, SELECTION_RING_RADIUS, Scene};
use super::style::{self, NodeIcon};

const ICON_SCALE: f64 = 0.04;
const ICON_OFFSET: f64 = -10.0;

/// Paint one frame. `ring_alpha` is the selection ring opacity.
pub fn render(scene: &Scene, ring_alpha: f64, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(style::BACKGROUND);
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);
	for edge in &scene.edges {
		draw_edge(edge, ctx);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	for glyph in &scene.nodes {
		draw_node(glyph, ring_alpha, ctx);
	}
}

fn draw_edge(edge: &EdgeShape, ctx: &CanvasRenderingContext2d) {
	let dash = js_sys::Array::new();
	for &segment in edge.dash {
		dash.push(&JsValue::from_f64(segment));
	}
	let _ = ctx.set_line_dash(&dash);
	ctx.set_stroke_style_str(edge.color);
	ctx.set_line_width(edge.width);
	ctx.begin_path();
	ctx.move_to(edge.from.x, edge.from.y);
	ctx.line_to(edge.to.x, edge.to.y);
	ctx.stroke();
}

fn draw_node(glyph: &NodeGlyph, ring_alpha: f64, ctx: &CanvasRenderingContext2d) {
	let (x, y) = (glyph.center.x, glyph.center.y);

	if glyph.selected {
		ctx.set_global_alpha(ring_alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, SELECTION_RING_RADIUS, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(glyph.border);
		ctx.set_line_width(2.0);
		ctx.stroke();
		ctx.set_global_alpha(1.0);
	}

	ctx.begin_path();
	let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(glyph.fill);
	ctx.fill();
	ctx.set_stroke_style_str(glyph.border);
	ctx.set_line_width(glyph.border_width);
	ctx.stroke();

	draw_icon(glyph, ctx);

	ctx.set_fill_style_str(style::LABEL_COLOR);
	ctx.set_font("500 12px sans-serif");
	ctx.set_text_align("center");
	let _ = ctx.fill_text(&glyph.label, x, y + LABEL_OFFSET);
}

fn draw_icon(glyph: &NodeGlyph, ctx: &CanvasRenderingContext2d) {
	ctx.save();
	let _ = ctx.translate(glyph.center.x + ICON_OFFSET, glyph.center.y + ICON_OFFSET);
	let _ = ctx.scale(ICON_SCALE, ICON_SCALE);
	ctx.set_fill_style_str(glyph.icon_color);
	match glyph.icon {
		NodeIcon::Path(data) => match Path2d::new_with_path_string(data) {
			Ok(path) => ctx.fill_with_path_2d(&path),
			Err(err) => log::warn!("icon path rejected for {}: {:?}", glyph.node_id, err),
		},
		NodeIcon::Circle => {
			ctx.begin_path();
			let _ = ctx.arc(256.0, 256.0, 200.0, 0.0, 2.0 * PI);
			ctx.fill();
		}
	}
	ctx.restore();
}
