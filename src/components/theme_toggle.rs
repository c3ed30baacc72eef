//! Header button that flips between light and dark mode.

use leptos::prelude::*;

use crate::util::dark_mode::BrowserDarkMode;
use crate::util::environment::Environment;

/// Toggle button; shows the icon of the mode a click switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark_mode = expect_context::<RwSignal<BrowserDarkMode>>();
    let is_dark = Signal::derive(move || dark_mode.with(BrowserDarkMode::is_dark));

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                dark_mode.update(|m| {
                    m.toggle(Environment::current());
                });
            }
            title="Toggle dark mode"
        >
            {move || if is_dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
