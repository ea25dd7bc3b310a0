use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, LABEL_OFFSET, NODE_RADIUS};

const TEXT_SIZE: f64 = 10.0;
const LINK_WIDTH: f64 = 2.0;
const ARROW_LENGTH: f64 = 8.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(state.theme.background());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_tooltip(state, ctx);
	ctx.restore();
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let color = state.theme.link_color();
	let t = ease_out_cubic(state.hover.highlight_t);
	let has_highlight = state.has_active_highlight();

	ctx.set_stroke_style_str(color);
	ctx.set_fill_style_str(color);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let lit = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		let alpha = match (has_highlight, lit) {
			(false, _) => 1.0,
			(true, true) => 1.0,
			(true, false) => 1.0 - 0.75 * t,
		};
		ctx.set_global_alpha(alpha);
		ctx.set_line_width(LINK_WIDTH);

		// Arrow tip touches the target's rim.
		let (ux, uy) = (dx / dist, dy / dist);
		let (tip_x, tip_y) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * ARROW_LENGTH, tip_y - uy * ARROW_LENGTH);

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(back_x, back_y);
		ctx.stroke();

		let (px, py) = (-uy * ARROW_LENGTH * 0.5, ux * ARROW_LENGTH * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	});
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);
	let text_color = state.theme.text_color();

	ctx.set_font(&format!("{}px sans-serif", TEXT_SIZE / k.max(0.5)));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let (x, y) = (node.x() as f64, node.y() as f64);
		let lit = state.is_highlighted(idx);
		let alpha = if has_highlight && !lit { 1.0 - 0.7 * t } else { 1.0 };
		let radius = if state.is_hovered(idx) {
			NODE_RADIUS * (1.0 + 0.35 * t)
		} else {
			NODE_RADIUS
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.data.user_data.color);
		ctx.fill();

		if state.is_hovered(idx) && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(text_color);
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str(text_color);
		let _ = ctx.fill_text(&node.data.user_data.title, x, y + LABEL_OFFSET);
	});
	ctx.set_global_alpha(1.0);
}

/// URL of the hovered node, drawn above it.
fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(idx) = state.hover.node else {
		return;
	};
	let k = state.transform.k;
	state.graph.visit_nodes(|node| {
		if node.index() != idx || node.data.user_data.url.is_empty() {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64 - LABEL_OFFSET - 4.0 / k);
		let text = &node.data.user_data.url;
		let width = ctx
			.measure_text(text)
			.map(|m| m.width())
			.unwrap_or(0.0);
		let pad = 4.0 / k;
		let height = TEXT_SIZE / k.max(0.5) + 2.0 * pad;

		ctx.set_global_alpha(0.85);
		ctx.set_fill_style_str(state.theme.text_color());
		ctx.fill_rect(x - width / 2.0 - pad, y - height / 2.0, width + 2.0 * pad, height);
		ctx.set_global_alpha(1.0);
		ctx.set_fill_style_str(state.theme.background());
		let _ = ctx.fill_text(text, x, y);
	});
}
