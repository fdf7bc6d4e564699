use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::dataset::Dataset;
use super::details::DetailsView;
use super::filter::CategoryFilter;
use super::render;
use super::state::EntityMapState;

type SharedState = Rc<RefCell<EntityMapState>>;
type SharedContext = Rc<RefCell<Option<CanvasRenderingContext2d>>>;

fn redraw(state: &SharedState, ctx: &SharedContext) {
	if let Some(ref ctx) = *ctx.borrow() {
		let s = state.borrow();
		render::render(&s, &s.draw_list(), ctx);
	}
}

fn sync_details(state: &SharedState, details: RwSignal<Option<DetailsView>>) {
	match state.borrow().details() {
		Ok(view) => details.set(view),
		Err(err) => warn!("cannot show details: {err}"),
	}
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn category_label(filter: &CategoryFilter) -> String {
	match filter {
		CategoryFilter::All => "Todas".to_string(),
		CategoryFilter::Only(c) => c.clone(),
	}
}

#[component]
pub fn EntityMapCanvas(
	dataset: Dataset,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let title = dataset.title.clone();
	let attribute_label = dataset.attribute_label.clone();
	let state: SharedState = Rc::new(RefCell::new(EntityMapState::new(dataset, 800.0, 600.0)));
	let ctx: SharedContext = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let details = RwSignal::new(None::<DetailsView>);
	let active_category = RwSignal::new(CategoryFilter::All);
	let categories = state.borrow().categories();

	let (state_init, ctx_init, resize_cb_init) = (state.clone(), ctx.clone(), resize_cb.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		state_init.borrow_mut().resize(w, h);

		let context = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
		if context.is_none() {
			warn!("2d canvas context unavailable");
		}
		*ctx_init.borrow_mut() = context;

		if fullscreen {
			let (state_resize, ctx_resize, canvas_resize) =
				(state_init.clone(), ctx_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				state_resize.borrow_mut().resize(nw, nh);
				redraw(&state_resize, &ctx_resize);
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		redraw(&state_init, &ctx_init);
	});

	let (state_md, ctx_md) = (state.clone(), ctx.clone());
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		state_md.borrow_mut().pointer_down(x, y);
		redraw(&state_md, &ctx_md);
	};

	let (state_mm, ctx_mm) = (state.clone(), ctx.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		{
			let mut s = state_mm.borrow_mut();
			if s.pan.active {
				s.pan_to(x, y);
			} else {
				s.pointer_move(x, y);
			}
		}
		redraw(&state_mm, &ctx_mm);
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		state_mu.borrow_mut().end_pan();
	};

	let (state_cl, ctx_cl) = (state.clone(), ctx.clone());
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		let changed = state_cl.borrow_mut().click_at(x, y);
		if changed {
			sync_details(&state_cl, details);
		}
		redraw(&state_cl, &ctx_cl);
	};

	let (state_ml, ctx_ml) = (state.clone(), ctx.clone());
	let on_mouseleave = move |_: MouseEvent| {
		{
			let mut s = state_ml.borrow_mut();
			s.end_pan();
			s.pointer_leave();
		}
		redraw(&state_ml, &ctx_ml);
	};

	let (state_wh, ctx_wh) = (state.clone(), ctx.clone());
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		state_wh.borrow_mut().zoom_at(x, y, ev.delta_y());
		redraw(&state_wh, &ctx_wh);
	};

	let (state_sr, ctx_sr) = (state.clone(), ctx.clone());
	let on_search = move |ev: web_sys::Event| {
		state_sr.borrow_mut().search_text_changed(&event_target_value(&ev));
		redraw(&state_sr, &ctx_sr);
	};

	let buttons = std::iter::once(CategoryFilter::All)
		.chain(categories.into_iter().map(CategoryFilter::Only))
		.map(|filter| {
			let label = category_label(&filter);
			let is_active = {
				let filter = filter.clone();
				move || active_category.get() == filter
			};
			let (state_cb, ctx_cb) = (state.clone(), ctx.clone());
			let on_category = move |_: MouseEvent| {
				state_cb.borrow_mut().category_selected(filter.clone());
				active_category.set(filter.clone());
				redraw(&state_cb, &ctx_cb);
			};
			view! {
				<button class="category-button" class:active=is_active on:click=on_category>
					{label}
				</button>
			}
		})
		.collect_view();

	let details_panel = move || match details.get() {
		None => view! { <p class="details-empty">"Selecione um item no mapa"</p> }.into_any(),
		Some(DetailsView {
			name,
			category,
			attributes,
			metadata,
			outgoing,
			..
		}) => view! {
			<div class="details">
				<h2>{name}</h2>
				<p class="details-category">{category}</p>
				<h3>{attribute_label.clone()}</h3>
				<ul>
					{attributes.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
				</ul>
				{metadata
					.into_iter()
					.map(|(key, value)| view! {
						<h3>{key}</h3>
						<p>{value}</p>
					})
					.collect_view()}
				<h3>"Conexões"</h3>
				<ul>
					{outgoing
						.into_iter()
						.map(|o| {
							let text = match o.label {
								Some(label) => format!("→ {} ({}, peso {})", o.target_name, label, o.weight),
								None => format!("→ {} (peso {})", o.target_name, o.weight),
							};
							view! { <li>{text}</li> }
						})
						.collect_view()}
				</ul>
			</div>
		}
		.into_any(),
	};

	view! {
		<div class="entity-map">
			<header class="entity-map-toolbar">
				<h1>{title}</h1>
				<input type="search" class="entity-map-search" placeholder="Buscar por nome" on:input=on_search />
				<nav class="entity-map-categories">{buttons}</nav>
			</header>
			<div class="entity-map-content">
				<canvas
					node_ref=canvas_ref
					class="entity-map-canvas"
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=on_mouseup
					on:click=on_click
					on:mouseleave=on_mouseleave
					on:wheel=on_wheel
					style="display: block; cursor: pointer;"
				/>
				<aside class="entity-map-details">{details_panel}</aside>
			</div>
		</div>
	}
}

fn window_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
		window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
	)
}
