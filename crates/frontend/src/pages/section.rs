//! Placeholder page for sections without content yet.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Sidebar;
use crate::hooks::use_is_compact;

/// Properties for SectionPage.
#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub title: AttrValue,
}

/// Generic page for sidebar destinations that are not built yet.
#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    let location = use_location();
    let is_compact = use_is_compact();

    let active_path = location.map(|l| l.path().to_string()).unwrap_or_default();
    let main_class = if is_compact {
        "main-content compact"
    } else {
        "main-content with-sidebar"
    };

    html! {
        <div class="app-screen">
            <Sidebar active_path={active_path} />

            <main class={main_class}>
                <div class="card">
                    <h1>{ props.title.clone() }</h1>
                    <p class="text-secondary">
                        {"Esta sección estará disponible próximamente."}
                    </p>
                </div>
            </main>
        </div>
    }
}
