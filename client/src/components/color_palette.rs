//! Color palette overlay shown under a clicked token.

use leptos::prelude::*;

use crate::session::Session;
use crate::state::field::FieldState;

/// Round swatches for the palette colors. Hidden while no token is bound.
#[component]
pub fn ColorPalette() -> impl IntoView {
    let field = expect_context::<RwSignal<FieldState>>();
    let session = expect_context::<Session>();
    let swatches = field.with_untracked(|f| f.palette.clone());

    move || {
        let style = field.with(FieldState::picker_style)?;
        let buttons = swatches
            .iter()
            .map(|swatch| {
                let session = session.clone();
                let value = swatch.value.clone();
                view! {
                    <button
                        class="color-palette__swatch"
                        title=swatch.name.clone()
                        style=format!("background-color: {};", swatch.value)
                        on:click=move |_| {
                            session.dispatch(|engine| engine.core.choose_color(&value));
                        }
                    ></button>
                }
            })
            .collect_view();
        Some(view! { <div class="color-palette" style=style>{buttons}</div> })
    }
}
