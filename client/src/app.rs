//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    locations::LocationsPage, part_details::PartDetailsPage, parts::PartsPage, vehicles::VehiclesPage,
};

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
/// Each page owns its own state, so nothing is provided through context
/// beyond the router and meta tags.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/parts-ui.css"/>
        <Title text="Parts Inventory"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=PartsPage/>
                    <Route path=(StaticSegment("parts"), ParamSegment("id")) view=PartDetailsPage/>
                    <Route path=StaticSegment("vehicles") view=VehiclesPage/>
                    <Route path=StaticSegment("locations") view=LocationsPage/>
                </Routes>
            </main>
        </Router>
    }
}
