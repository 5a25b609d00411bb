//! Fixed navbar: logo, section links with scroll-spy highlighting, theme
//! toggle, and the mobile hamburger menu.

use leptos::prelude::*;

use crate::state::nav::{NavState, SECTIONS};
use crate::state::theme::Theme;
use crate::util::{scroll, storage};

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let nav = expect_context::<RwSignal<NavState>>();

    // Body scrolling follows the menu: locked while open, restored on close.
    Effect::new(move || {
        scroll::lock_body_scroll(nav.get().menu_open);
    });

    let on_hamburger = move |_| nav.update(NavState::toggle_menu);

    let on_theme_toggle = move |_| {
        let next = theme.get().toggled();
        theme.set(next);
        storage::apply_theme(next);
        storage::store_theme(next);
    };

    let navbar_class = move || {
        if nav.get().scrolled { "navbar navbar--scrolled" } else { "navbar" }
    };
    let menu_class = move || {
        if nav.get().menu_open { "nav-menu nav-menu--open" } else { "nav-menu" }
    };
    let hamburger_class = move || {
        if nav.get().menu_open { "hamburger hamburger--open" } else { "hamburger" }
    };

    view! {
        <nav id="navbar" class=navbar_class>
            <div class="nav-container">
                <a
                    href="#home"
                    class="nav-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        nav.update(NavState::close_menu);
                        scroll::scroll_to_section("home");
                    }
                >
                    "JR."
                </a>

                <ul id="nav-menu" class=menu_class>
                    {SECTIONS
                        .iter()
                        .map(|(id, label)| {
                            let id = *id;
                            let link_class = move || {
                                if nav.get().active_section.as_deref() == Some(id) {
                                    "nav-link nav-link--active"
                                } else {
                                    "nav-link"
                                }
                            };
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class=link_class
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            nav.update(NavState::close_menu);
                                            scroll::scroll_to_section(id);
                                        }
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    id="theme-toggle"
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=on_theme_toggle
                >
                    <i class=move || theme.get().icon_class()></i>
                </button>

                <button
                    id="hamburger"
                    class=hamburger_class
                    title="Toggle menu"
                    on:click=on_hamburger
                >
                    <span class="hamburger__bar"></span>
                    <span class="hamburger__bar"></span>
                    <span class="hamburger__bar"></span>
                </button>
            </div>
        </nav>
    }
}
