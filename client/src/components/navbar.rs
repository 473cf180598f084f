//! Top navigation bar with active-route highlighting.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::{NAV_LINKS, is_active};

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Parts Inventory"</span>
            <div class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let href = link.href;
                        view! {
                            <a
                                href=href
                                class=move || {
                                    if is_active(&pathname.get(), href) {
                                        "navbar__link navbar__link--active"
                                    } else {
                                        "navbar__link"
                                    }
                                }
                                aria-current=move || is_active(&pathname.get(), href).then_some("page")
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
