//! The field: canvas, token overlays, eraser ring and color palette.
//!
//! ARCHITECTURE
//! ============
//! The canvas paints the field and routes; the six tokens are absolutely
//! positioned DOM elements over it, sharing its coordinate space. Pointer
//! events are forwarded to the engine through the [`Session`]. Window-level
//! resize and click listeners live as long as this component and are removed
//! in `on_cleanup` together with the session's own listeners and timer.

use canvas::engine::Engine;
use canvas::token::TokenId;
use leptos::prelude::*;

use crate::components::color_palette::ColorPalette;
use crate::session::Session;
use crate::state::field::{FieldState, token_class};
use crate::util::canvas_input::pointer_point;

/// One draggable, clickable token overlay.
#[component]
fn TokenOverlay(id: TokenId) -> impl IntoView {
    let field = expect_context::<RwSignal<FieldState>>();
    let session = expect_context::<Session>();

    let on_pointer_down = {
        let session = session.clone();
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(pt) = session.canvas_point(ev.client_x(), ev.client_y()) {
                session.dispatch(|engine| engine.on_token_pointer_down(id, pt));
            }
        }
    };
    let on_click = move |_: leptos::ev::MouseEvent| session.dispatch(|engine| engine.on_token_click(id));

    view! {
        <div
            id=id.key()
            class=token_class(id)
            style=move || field.with(|f| f.token_style(id))
            on:pointerdown=on_pointer_down
            on:click=on_click
        >
            {id.label()}
        </div>
    }
}

/// Field host component.
///
/// Mounts `canvas::engine::Engine` on the canvas element once it exists and
/// tears it down on unmount.
#[component]
pub fn FieldHost() -> impl IntoView {
    let field = expect_context::<RwSignal<FieldState>>();
    let session = expect_context::<Session>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    {
        let session = session.clone();
        Effect::new(move || {
            if let Some(canvas) = canvas_ref.get() {
                session.mount(canvas);
            }
        });
    }

    let resize_handle = window_event_listener(leptos::ev::resize, {
        let session = session.clone();
        move |_| session.fit_to_window()
    });
    let click_handle = window_event_listener(leptos::ev::click, {
        let session = session.clone();
        move |ev: leptos::ev::MouseEvent| session.outside_click(&ev)
    });
    {
        let session = session.clone();
        on_cleanup(move || {
            resize_handle.remove();
            click_handle.remove();
            session.teardown();
        });
    }

    let on_pointer_down = {
        let session = session.clone();
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            let pt = pointer_point(&ev);
            session.dispatch(|engine| engine.on_canvas_pointer_down(pt));
        }
    };
    let on_pointer_move = {
        let session = session.clone();
        move |ev: leptos::ev::PointerEvent| {
            let pt = pointer_point(&ev);
            session.dispatch(|engine| engine.on_canvas_pointer_move(pt));
        }
    };
    let on_pointer_up = {
        let session = session.clone();
        move |_: leptos::ev::PointerEvent| session.dispatch(Engine::on_canvas_pointer_up)
    };
    let on_pointer_leave = {
        let session = session.clone();
        move |_: leptos::ev::PointerEvent| session.dispatch(Engine::on_canvas_pointer_leave)
    };
    let on_pointer_cancel = move |_: leptos::ev::PointerEvent| session.dispatch(Engine::on_canvas_pointer_cancel);

    let eraser_ring = move || {
        field
            .with(FieldState::eraser_style)
            .map(|style| view! { <div class="eraser-ring" style=style></div> })
    };
    let error_banner = move || {
        field
            .with(|f| f.error.clone())
            .map(|message| view! { <div class="field-error">"Field unavailable: " {message}</div> })
    };

    view! {
        {error_banner}
        <div class="field" style=move || field.with(FieldState::field_style)>
            <canvas
                class="field__canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:pointercancel=on_pointer_cancel
            >
                "Your browser does not support canvas."
            </canvas>
            {TokenId::ALL.into_iter().map(|id| view! { <TokenOverlay id=id/> }).collect_view()}
            {eraser_ring}
            <ColorPalette/>
        </div>
    }
}
