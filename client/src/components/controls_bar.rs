//! Controls bar above the field: formation selector and route tools.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every control forwards to the engine through the shared [`Session`]; the
//! selected formation and active tool are read back from [`FieldState`] so a
//! drag that turns the formation into "Custom" shows up here too.

use canvas::formation::Formation;
use canvas::input::Tool;
use leptos::prelude::*;

use crate::session::Session;
use crate::state::field::FieldState;

fn tool_class(active: bool) -> &'static str {
    if active { "btn controls__tool controls__tool--active" } else { "btn controls__tool" }
}

/// Formation select plus Draw / Eraser / Undo Marker / Clear / Flip Formation.
#[component]
pub fn ControlsBar() -> impl IntoView {
    let field = expect_context::<RwSignal<FieldState>>();
    let session = expect_context::<Session>();

    let on_formation = {
        let session = session.clone();
        move |ev: leptos::ev::Event| {
            let key = event_target_value(&ev);
            match key.parse::<Formation>() {
                Ok(formation) => session.dispatch(|engine| engine.core.select_formation(formation)),
                Err(err) => log::warn!("{err}"),
            }
        }
    };

    let select_tool = {
        let session = session.clone();
        move |tool: Tool| session.dispatch(|engine| engine.core.set_tool(tool))
    };
    let on_draw = {
        let select_tool = select_tool.clone();
        move |_| select_tool(Tool::Draw)
    };
    let on_erase = move |_| select_tool(Tool::Erase);

    let on_undo = {
        let session = session.clone();
        move |_| session.dispatch(|engine| engine.core.undo())
    };
    let on_clear = {
        let session = session.clone();
        move |_| session.dispatch(|engine| engine.core.clear())
    };
    let on_flip = move |_| session.dispatch(|engine| engine.core.mirror());

    view! {
        <div class="controls">
            <label class="controls__formation">
                "Formation "
                <select
                    on:change=on_formation
                    prop:value=move || field.with(|f| f.formation.key())
                >
                    {Formation::OPTIONS
                        .into_iter()
                        .map(|formation| {
                            view! { <option value=formation.key()>{formation.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </label>

            <button
                class=move || tool_class(field.with(|f| f.tool == Tool::Draw))
                on:click=on_draw
            >
                "Draw"
            </button>
            <button
                class=move || tool_class(field.with(|f| f.tool == Tool::Erase))
                on:click=on_erase
            >
                "Eraser"
            </button>
            <button class="btn" on:click=on_undo>"Undo Marker"</button>
            <button class="btn" on:click=on_clear>"Clear"</button>
            <button class="btn" on:click=on_flip>"Flip Formation"</button>
        </div>
    }
}
