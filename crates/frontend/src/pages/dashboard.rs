//! Dashboard page component.

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{ProgressBar, Sidebar};
use crate::hooks::use_is_compact;

/// Delay before the plan progress animates in, in milliseconds.
const PROGRESS_DELAY_MS: u32 = 300;

/// Plan completion shown once the progress animation fires.
const PLAN_PROGRESS_PCT: u32 = 78;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let location = use_location();
    let is_compact = use_is_compact();
    let user_name = use_state(|| "Carlos Rodríguez".to_string());
    let progress = use_state(|| 0u32);

    // Animate the plan progress shortly after mount. Keeping the Timeout
    // handle and dropping it in the cleanup cancels the callback if the
    // view is torn down before it fires.
    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(PROGRESS_DELAY_MS, move || {
                progress.set(PLAN_PROGRESS_PCT);
            });
            move || drop(timeout)
        });
    }

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
                <div class="page-header">
                    <h1>
                        {"¡Hola, "}
                        <span class="accent">{ (*user_name).clone() }</span>
                        {"!"}
                    </h1>
                    <p class="text-secondary">
                        {"Bienvenido a tu panel de InnovaEd. Aquí puedes ver un resumen de tu progreso."}
                    </p>
                </div>

                <div class="cards-grid">
                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">
                                <span class="icon icon-book-open"></span>
                                {"Plan de estudio actual"}
                            </h2>
                            <span class="badge">{"Activo"}</span>
                        </div>
                        <h3>{"Matemáticas Avanzadas"}</h3>
                        <p class="text-secondary">
                            <span class="icon icon-clock"></span>
                            {"15 hrs/semana"}
                        </p>
                        <div class="plan-progress">
                            <div class="plan-progress-labels">
                                <span>{"Progreso del plan"}</span>
                                <span class="plan-progress-value">
                                    { format!("{}%", *progress) }
                                </span>
                            </div>
                            <ProgressBar value={*progress} />
                        </div>
                        <div class="card-actions">
                            <button class="btn btn-secondary">{"Ver detalles"}</button>
                            <button class="btn btn-primary">{"Continuar"}</button>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">
                                <span class="icon icon-bar-chart-2"></span>
                                {"Progreso semanal"}
                            </h2>
                        </div>
                        <div class="weekly-summary">
                            <div>
                                <h3>{"5 de 7 días"}</h3>
                                <p class="text-secondary">{"Has estudiado esta semana"}</p>
                            </div>
                            <div class="weekly-ratio">{"71%"}</div>
                        </div>
                        <div class="day-grid">
                            { for ["L", "M", "X", "J", "V", "S", "D"].iter().enumerate().map(|(index, day)| {
                                let class = if index < 5 { "day-cell studied" } else { "day-cell" };
                                html! {
                                    <div key={*day} class={class}>
                                        { *day }
                                        if index == 6 {
                                            <span class="day-today">{"Hoy"}</span>
                                        }
                                    </div>
                                }
                            })}
                        </div>
                        <p class="trend">
                            <span class="icon icon-trending-up"></span>
                            <span class="trend-value">{"+12%"}</span>
                            {" comparado con la semana anterior"}
                        </p>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">
                                <span class="icon icon-book-marked"></span>
                                {"Último recurso recomendado"}
                            </h2>
                        </div>
                        <div class="recommendation">
                            <p class="recommendation-tag">
                                <span class="icon icon-medal"></span>
                                {"Recomendado para ti"}
                            </p>
                            <h3>{"Técnicas de Memorización Avanzada"}</h3>
                            <p class="text-secondary">
                                {"Aprende métodos efectivos para memorizar fórmulas y conceptos complejos"}
                            </p>
                            <div class="recommendation-meta">
                                <span>
                                    <span class="icon icon-clock"></span>
                                    {"20 minutos"}
                                </span>
                                <span>
                                    <span class="icon icon-calendar"></span>
                                    {"Añadido ayer"}
                                </span>
                            </div>
                        </div>
                        <button class="btn btn-primary btn-block">{"Explorar recursos"}</button>
                    </div>
                </div>

                <h2 class="section-title">{"Actividades sugeridas para hoy"}</h2>
                <div class="activity-list">
                    <div class="activity-item">
                        <div class="activity-info">
                            <span class="icon icon-book-open"></span>
                            <div>
                                <h3>{"Repasar lección de Cálculo Diferencial"}</h3>
                                <p class="text-secondary">{"Estimado: 45 minutos"}</p>
                            </div>
                        </div>
                        <button class="btn btn-secondary">{"Iniciar"}</button>
                    </div>
                    <div class="activity-item">
                        <div class="activity-info">
                            <span class="icon icon-bar-chart-2"></span>
                            <div>
                                <h3>{"Realizar quiz de práctica"}</h3>
                                <p class="text-secondary">{"Estimado: 20 minutos"}</p>
                            </div>
                        </div>
                        <button class="btn btn-secondary">{"Iniciar"}</button>
                    </div>
                </div>
            </main>
        </div>
    }
}
