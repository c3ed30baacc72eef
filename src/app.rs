//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::theme_toggle::ThemeToggle;
use crate::config::HostConfig;
use crate::util::dark_mode::BrowserDarkMode;
use crate::util::environment::Environment;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session's dark mode toggle and provides it to children as an
/// `RwSignal<BrowserDarkMode>` context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = HostConfig::bundled();
    let dark_mode = RwSignal::new(BrowserDarkMode::browser(&config));
    provide_context(dark_mode);

    // Effects run only after hydration, never during server rendering.
    Effect::new(move || {
        dark_mode.update(|m| m.initialize(Environment::current()));
    });

    let HostConfig { title, stylesheet, color_scheme, .. } = config;

    view! {
        <Stylesheet id="leptos" href=stylesheet/>
        <Title text=title.clone()/>
        <Meta name="color-scheme" content=color_scheme/>

        <header class="app-header">
            <h1 class="app-header__title">{title}</h1>
            <span class="app-header__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}
