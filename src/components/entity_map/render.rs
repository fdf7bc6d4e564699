use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::interaction::{EdgeClass, NodeClass};
use super::projector::{DrawCommand, DrawList, EdgeLine, NodeShape, NODE_HEIGHT, NODE_WIDTH};
use super::state::EntityMapState;

const BACKGROUND: &str = "#ffffff";
const ARROW_SIZE: f64 = 9.0;

/// Category accent colors, assigned by the category's position in the store.
pub const CATEGORY_COLORS: &[&str] = &[
	"#0284c7", "#7c3aed", "#059669", "#d97706", "#db2777", "#4f46e5", "#0d9488", "#b91c1c",
];

/// Explicit category -> color table.
#[derive(Clone, Debug, Default)]
pub struct CategoryPalette {
	entries: Vec<(String, &'static str)>,
}

impl CategoryPalette {
	pub fn new(categories: &[String]) -> Self {
		let entries = categories
			.iter()
			.enumerate()
			.map(|(i, c)| (c.clone(), CATEGORY_COLORS[i % CATEGORY_COLORS.len()]))
			.collect();
		Self { entries }
	}

	pub fn color(&self, category: &str) -> &'static str {
		self.entries
			.iter()
			.find(|(c, _)| c == category)
			.map(|(_, color)| *color)
			.unwrap_or(CATEGORY_COLORS[0])
	}
}

struct NodeStyle {
	fill: &'static str,
	line_width: f64,
	alpha: f64,
}

fn node_style(class: NodeClass, dimmed: bool) -> NodeStyle {
	match class {
		NodeClass::Selected => NodeStyle { fill: "#fef3c7", line_width: 4.0, alpha: 1.0 },
		NodeClass::Hovered => NodeStyle { fill: "#bae6fd", line_width: 3.0, alpha: 1.0 },
		NodeClass::Neighbor => NodeStyle { fill: "#e0f2fe", line_width: 3.0, alpha: 1.0 },
		NodeClass::Default => NodeStyle {
			fill: "#e0f2fe",
			line_width: 2.0,
			alpha: if dimmed { 0.45 } else { 1.0 },
		},
	}
}

pub fn render(state: &EntityMapState, list: &DrawList, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	let palette = CategoryPalette::new(&state.categories());
	// Others fade only while something is hovered.
	let dimmed = state.interaction().hovered().is_some();
	for command in &list.commands {
		match command {
			DrawCommand::Edge(edge) => draw_edge(edge, dimmed, ctx),
			DrawCommand::Node(node) => draw_node(node, &palette, dimmed, ctx),
		}
	}
	ctx.restore();
}

fn draw_edge(edge: &EdgeLine, dimmed: bool, ctx: &CanvasRenderingContext2d) {
	let (x1, y1, x2, y2) = (edge.start.x, edge.start.y, edge.end.x, edge.end.y);
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}

	let (color, width) = match edge.class {
		EdgeClass::Highlighted => ("rgba(2, 132, 199, 0.95)", 3.5),
		EdgeClass::Default if dimmed => ("rgba(148, 163, 184, 0.35)", 2.0),
		EdgeClass::Default => ("rgba(148, 163, 184, 1)", 2.0),
	};
	ctx.set_stroke_style_str(color);
	ctx.set_line_width(width);
	let dash = if edge.directed {
		js_sys::Array::new()
	} else {
		js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0))
	};
	let _ = ctx.set_line_dash(&dash);

	// Arrows stop at the target box border instead of its center.
	let (ux, uy) = (dx / dist, dy / dist);
	let inset = box_inset(ux, uy);
	let (tip_x, tip_y) = if edge.directed {
		(x2 - ux * inset, y2 - uy * inset)
	} else {
		(x2, y2)
	};

	ctx.begin_path();
	ctx.move_to(x1, y1);
	ctx.line_to(tip_x, tip_y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	if edge.directed {
		ctx.set_fill_style_str(color);
		let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}

	if let Some(label) = &edge.label {
		let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
		ctx.set_font("10px sans-serif");
		ctx.set_text_align("center");
		ctx.set_fill_style_str("#475569");
		let _ = ctx.fill_text(label, mx, my - 6.0);
	}
}

/// Distance from a box center to its border along the unit vector (ux, uy).
fn box_inset(ux: f64, uy: f64) -> f64 {
	let (hw, hh) = (NODE_WIDTH / 2.0, NODE_HEIGHT / 2.0);
	let tx = if ux.abs() > f64::EPSILON { hw / ux.abs() } else { f64::INFINITY };
	let ty = if uy.abs() > f64::EPSILON { hh / uy.abs() } else { f64::INFINITY };
	tx.min(ty)
}

fn draw_node(
	node: &NodeShape,
	palette: &CategoryPalette,
	dimmed: bool,
	ctx: &CanvasRenderingContext2d,
) {
	let style = node_style(node.class, dimmed);
	let (x, y) = (node.origin.x, node.origin.y);
	let accent = palette.color(&node.category);

	ctx.set_global_alpha(style.alpha);
	ctx.set_fill_style_str(style.fill);
	ctx.fill_rect(x, y, node.width, node.height);
	ctx.set_stroke_style_str(accent);
	ctx.set_line_width(style.line_width);
	ctx.stroke_rect(x, y, node.width, node.height);

	ctx.set_text_align("center");
	ctx.set_fill_style_str("#1e293b");
	ctx.set_font("bold 11px Arial");
	let _ = ctx.fill_text(&node.label, x + node.width / 2.0, y + 20.0);
	ctx.set_fill_style_str(accent);
	ctx.set_font("9px Arial");
	let _ = ctx.fill_text_with_max_width(&node.caption, x + node.width / 2.0, y + 45.0, node.width - 8.0);
	ctx.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_is_keyed_by_category_name() {
		let palette = CategoryPalette::new(&["IA".to_string(), "Dados".to_string()]);
		assert_eq!(palette.color("IA"), CATEGORY_COLORS[0]);
		assert_eq!(palette.color("Dados"), CATEGORY_COLORS[1]);
		assert_eq!(palette.color("outra"), CATEGORY_COLORS[0]);
	}

	#[test]
	fn arrow_inset_hits_box_border() {
		assert!((box_inset(1.0, 0.0) - NODE_WIDTH / 2.0).abs() < 1e-9);
		assert!((box_inset(0.0, -1.0) - NODE_HEIGHT / 2.0).abs() < 1e-9);
	}
}
