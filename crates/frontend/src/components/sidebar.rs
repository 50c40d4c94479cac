//! Navigation sidebar component.

use ui_core::sidebar::{active_destination, SidebarState, DESTINATIONS};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_is_compact;

/// Properties for Sidebar component.
#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Route path of the view currently shown, for active highlighting.
    pub active_path: AttrValue,
}

/// Navigation sidebar with mobile toggle and backdrop.
///
/// On regular viewports the panel is always visible. On compact ones it
/// slides in over a backdrop and dismisses itself when the backdrop is
/// tapped or a destination is selected.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let state = use_state(SidebarState::default);
    let is_compact = use_is_compact();

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.toggle();
            state.set(next);
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.dismiss_if_compact(is_compact);
            state.set(next);
        })
    };

    let active = active_destination(&props.active_path);

    let toggle_class = if state.is_open {
        "sidebar-toggle open"
    } else {
        "sidebar-toggle"
    };
    let toggle_icon = if state.is_open {
        "icon icon-x"
    } else {
        "icon icon-menu"
    };
    let aside_class = if state.is_visible(is_compact) {
        "sidebar"
    } else {
        "sidebar off-canvas"
    };

    html! {
        <>
            // Toggle control, shown on compact viewports only.
            <button class={toggle_class} onclick={on_toggle}>
                <span class={toggle_icon}></span>
            </button>

            if state.shows_backdrop(is_compact) {
                <div class="sidebar-backdrop" onclick={on_dismiss.clone()} />
            }

            <aside class={aside_class}>
                <div class="sidebar-header">
                    <span class="icon icon-book brand-icon"></span>
                    <div>
                        <h2 class="brand-title">{"InnovaEd"}</h2>
                        <p class="brand-subtitle">{"Asistencia Académica"}</p>
                    </div>
                </div>

                <nav class="sidebar-nav">
                    <ul class="nav-links">
                        { for DESTINATIONS.iter().map(|dest| {
                            let is_active = active.is_some_and(|a| a.path == dest.path);
                            let link_class = if is_active { "nav-link active" } else { "nav-link" };
                            html! {
                                <li key={dest.path} onclick={on_dismiss.clone()}>
                                    <Link<Route>
                                        to={Route::recognize(dest.path).unwrap_or(Route::NotFound)}
                                        classes={link_class}
                                    >
                                        <span class={format!("icon icon-{}", dest.icon)}></span>
                                        <span>{ dest.label }</span>
                                    </Link<Route>>
                                </li>
                            }
                        })}
                    </ul>
                </nav>

                <div class="sidebar-footer">
                    <button class="logout-button">
                        <span class="icon icon-log-out"></span>
                        {"Cerrar sesión"}
                    </button>
                </div>
            </aside>
        </>
    }
}
