//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{controls_bar::ControlsBar, field_host::FieldHost};
use crate::session::Session;
use crate::state::field::FieldState;
use crate::util::config::load_editor_config;

/// Root application component.
///
/// Loads the editor config, then provides the field snapshot and the
/// engine session to the controls bar and the field.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_editor_config();
    let field = RwSignal::new(FieldState::new(&config));
    let session = Session::new(config, field);

    provide_context(field);
    provide_context(session);

    view! {
        <Title text="Flag Football Playbook"/>
        <main class="playbook">
            <ControlsBar/>
            <FieldHost/>
        </main>
    }
}
