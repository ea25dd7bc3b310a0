use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::{CLICK_SLOP, ForceGraphState};
use super::types::GraphData;
use crate::theme::Theme;

type Shared<T> = Rc<RefCell<Option<T>>>;

/// Browser resources held by one mounted canvas.
#[derive(Clone, Default)]
struct CanvasHandles {
	state: Shared<ForceGraphState>,
	animate: Shared<Closure<dyn FnMut()>>,
	resize_cb: Shared<Closure<dyn FnMut()>>,
	frame: Rc<Cell<Option<i32>>>,
}

impl CanvasHandles {
	fn request_frame(&self, window: &web_sys::Window) {
		if let Some(cb) = &*self.animate.borrow() {
			let id = window.request_animation_frame(cb.as_ref().unchecked_ref());
			self.frame.set(id.ok());
		}
	}

	/// Cancel the pending frame, unhook the resize listener and drop the layout.
	///
	/// The animation closure holds a handle to itself, so it stays alive until taken here.
	fn release(&self) {
		if let Some(window) = web_sys::window() {
			if let Some(id) = self.frame.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(cb) = &*self.resize_cb.borrow() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		let animate = self.animate.borrow_mut().take();
		let resize_cb = self.resize_cb.borrow_mut().take();
		drop((animate, resize_cb));
		self.state.borrow_mut().take();
	}

	#[cfg(all(test, target_arch = "wasm32"))]
	fn is_released(&self) -> bool {
		self.animate.borrow().is_none()
			&& self.resize_cb.borrow().is_none()
			&& self.state.borrow().is_none()
			&& self.frame.get().is_none()
	}
}

/// Width of the canvas' container, falling back to 800px before layout.
fn container_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0)
}

fn local_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn open_in_new_tab(url: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.open_with_url_and_target(url, "_blank");
	}
}

/// Force-directed drawing of `data`, as wide as its container.
///
/// The layout is rebuilt whenever `data` changes; `theme` only recolors.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] theme: Signal<Theme>,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handles = CanvasHandles::default();
	let state = handles.state.clone();
	let started = Rc::new(Cell::new(false));

	let teardown = StoredValue::new_local(handles.clone());
	on_cleanup(move || {
		teardown.try_with_value(CanvasHandles::release);
	});

	let state_theme = state.clone();
	Effect::new(move |_| {
		let theme = theme.get();
		if let Some(ref mut s) = *state_theme.borrow_mut() {
			s.theme = theme;
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let data = data.get();
		let Some(window) = web_sys::window() else {
			return;
		};

		let w = container_width(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);
		debug!(
			"laying out {} nodes and {} links",
			data.nodes.len(),
			data.links.len()
		);
		*handles.state.borrow_mut() = Some(ForceGraphState::new(
			&data,
			w,
			height,
			theme.get_untracked(),
		));

		if started.replace(true) {
			return;
		}

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};

		let (state_resize, canvas_resize) = (handles.state.clone(), canvas.clone());
		*handles.resize_cb.borrow_mut() = Some(Closure::new(move || {
			let nw = container_width(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, height);
			}
		}));
		if let Some(ref cb) = *handles.resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let frame_handles = handles.clone();
		*handles.animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *frame_handles.state.borrow_mut() {
				if s.animation_running {
					s.tick(0.016);
				}
				render::render(s, &ctx);
			}
			if let Some(win) = web_sys::window() {
				frame_handles.request_frame(&win);
			}
		}));
		handles.request_frame(&window);
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = local_point(&canvas, &ev);

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.moved = false;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = local_point(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}

			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (sdx, sdy) = (x - s.drag.start_x, y - s.drag.start_y);
					if sdx.hypot(sdy) > CLICK_SLOP {
						s.drag.moved = true;
					}
					let (dx, dy) = (sdx / s.transform.k, sdy / s.transform.k);
					let (nx, ny) = (
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let mut clicked = None;
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					if s.drag.moved {
						s.graph.visit_nodes_mut(|node| {
							if node.index() == idx {
								node.data.is_anchor = true;
							}
						});
					} else {
						clicked = s.url_of(idx);
					}
				}
			}
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
		if let Some(url) = clicked {
			open_in_new_tab(&url);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = local_point(&canvas, &ev);

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
