//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DashboardPage, LoginPage, SectionPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/plan")]
    Plan,
    #[at("/calendar")]
    Calendar,
    #[at("/progress")]
    Progress,
    #[at("/chat")]
    Chat,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Plan => html! { <SectionPage title="Mi Plan" /> },
        Route::Calendar => html! { <SectionPage title="Calendario" /> },
        Route::Progress => html! { <SectionPage title="Progreso" /> },
        Route::Chat => html! { <SectionPage title="Chat IA" /> },
        Route::Settings => html! { <SectionPage title="Ajustes" /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Página no encontrada"}</h1>
                <p>{"La página que buscas no existe."}</p>
            </div>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
