use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::interaction::InteractionState;
use super::layout::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, Position};
use super::overlay::{LinkTooltip, NodeDetailPanel};
use super::render;
use super::state::TopologyState;
use super::types::{NetworkNode, TopologyData};
use crate::error::TopologyError;

const FRAME_SECONDS: f64 = 0.016;

fn layout_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, TopologyError> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		.ok_or(TopologyError::CanvasContext)
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Position> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Position::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Interactive network map.
///
/// Re-lays out whenever `data`, `width` or `height` change. Replacing the
/// snapshot also clears selection and hover; a size change keeps them.
#[component]
pub fn NetworkTopologyCanvas(
	/// Snapshot to draw, usually already filtered.
	#[prop(into)]
	data: Signal<TopologyData>,
	/// Canvas width in pixels.
	#[prop(into, default = Signal::stored(DEFAULT_CANVAS_WIDTH))]
	width: Signal<f64>,
	/// Canvas height in pixels.
	#[prop(into, default = Signal::stored(DEFAULT_CANVAS_HEIGHT))]
	height: Signal<f64>,
	/// Fires with the newly selected node, or `None` when the selection clears.
	#[prop(optional)]
	on_node_select: Option<Callback<Option<NetworkNode>>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let interaction = RwSignal::new(InteractionState::default());
	let cursor = RwSignal::new("default");
	let state: Rc<RefCell<Option<TopologyState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init) = (state.clone(), animate.clone());

	let notify = move |selected: Option<String>| {
		if let Some(cb) = on_node_select {
			cb.run(selected.and_then(|id| data.with_untracked(|d| d.node(&id).cloned())));
		}
	};

	Effect::new(move |_| {
		let snapshot = data.get();
		let (w, h) = (width.get(), height.get());
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut rng = layout_rng();
		let mut slot = state_init.borrow_mut();
		let snapshot_changed = if let Some(s) = slot.as_mut() {
			s.update(snapshot, w, h, &mut rng)
		} else {
			*slot = Some(TopologyState::new(snapshot, w, h, &mut rng));
			true
		};
		drop(slot);

		if snapshot_changed {
			let had_selection = interaction.with_untracked(|i| i.selected_node().is_some());
			interaction.update(InteractionState::reset);
			if had_selection {
				notify(None);
			}
		}

		if animate_init.borrow().is_some() {
			return;
		}
		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("{err}");
				return;
			}
		};

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let mounted = match *state_anim.borrow_mut() {
				Some(ref mut s) => {
					s.tick(FRAME_SECONDS);
					match interaction.try_with_untracked(|i| s.scene(i)) {
						Some(scene) => {
							render::render(&scene, s.selection_ring_alpha(), &ctx);
							true
						}
						None => false,
					}
				}
				None => true,
			};
			if !mounted {
				debug!("topology canvas unmounted, stopping render loop");
				return;
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(point) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		let clicked = state_click
			.borrow()
			.as_ref()
			.and_then(|s| s.node_at_position(point.x, point.y))
			.map(|node| node.id.clone());
		if let Some(id) = clicked {
			interaction.update(|i| i.click_node(&id));
			notify(interaction.with_untracked(|i| i.selected_node().map(str::to_owned)));
		}
	};

	let state_move = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(point) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		let (over_node, hovered) = match state_move.borrow().as_ref() {
			Some(s) => (
				s.node_at_position(point.x, point.y).is_some(),
				s.link_at_position(point.x, point.y).map(|link| link.id.clone()),
			),
			None => (false, None),
		};

		let next_cursor = if over_node || hovered.is_some() {
			"pointer"
		} else {
			"default"
		};
		if cursor.get_untracked() != next_cursor {
			cursor.set(next_cursor);
		}

		// only enter/leave transitions move the tooltip anchor
		if interaction.with_untracked(|i| i.hovered_link() != hovered.as_deref()) {
			interaction.update(|i| i.set_hovered_link(hovered, point));
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		cursor.set("default");
		if interaction.with_untracked(|i| i.hovered_link().is_some()) {
			interaction.update(|i| i.set_hovered_link(None, Position::ORIGIN));
		}
	};

	let on_close = Callback::new(move |_: ()| {
		interaction.update(InteractionState::dismiss);
		notify(None);
	});

	let selected_node = move || {
		let id = interaction.with(|i| i.selected_node().map(str::to_owned))?;
		data.with(|d| d.node(&id).cloned())
	};
	let hovered_link = move || {
		let (id, anchor) =
			interaction.with(|i| i.hovered_link().map(|id| (id.to_owned(), i.tooltip_position())))?;
		data.with(|d| d.link(&id).cloned()).map(|link| (link, anchor))
	};

	view! {
		<div
			class="network-topology"
			style=move || format!("position: relative; width: {}px; height: {}px;", width.get(), height.get())
		>
			<canvas
				node_ref=canvas_ref
				class="network-topology-canvas"
				on:click=on_click
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				style=move || format!("display: block; cursor: {};", cursor.get())
			/>
			{move || hovered_link().map(|(link, anchor)| view! { <LinkTooltip link=link anchor=anchor /> })}
			{move || selected_node().map(|node| view! { <NodeDetailPanel node=node on_close=on_close /> })}
		</div>
	}
}
