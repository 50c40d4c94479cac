//! Login page component.

use ui_core::login::{LoginForm, Role};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::notify;

/// Login page component.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(LoginForm::new);
    let navigator = use_navigator();

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_email(input.value());
            form.set(next);
        })
    };

    let on_password_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_password(input.value());
            form.set(next);
        })
    };

    // Blur re-validates only the field that lost focus.
    let on_email_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.validate_email();
            form.set(next);
        })
    };

    let on_password_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.validate_password();
            form.set(next);
        })
    };

    let on_role_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_role(match input.value().as_str() {
                "admin" => Role::Admin,
                _ => Role::Student,
            });
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            next.submit(
                |message| notify::success(message),
                |path| {
                    if let (Some(navigator), Some(route)) =
                        (navigator.as_ref(), Route::recognize(path))
                    {
                        navigator.push(&route);
                    }
                },
            );
            form.set(next);
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-panel">
                <div class="login-brand">
                    <span class="icon icon-brain brand-icon"></span>
                    <h1>{"InnovaEd"}</h1>
                    <p>{"Sistema de Asistencia Académica Inteligente"}</p>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Iniciar sesión"}</h2>
                        <p class="card-description">
                            {"Ingresa tus datos para acceder a tu cuenta"}
                        </p>
                    </div>

                    <form onsubmit={onsubmit} class="login-form">
                        <div class="form-field">
                            <label for="email">{"Correo electrónico"}</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="tu@email.com"
                                value={form.email.clone()}
                                oninput={on_email_input}
                                onblur={on_email_blur}
                                class={if form.email_error.is_empty() { "" } else { "input-invalid" }}
                            />
                            if !form.email_error.is_empty() {
                                <p class="field-error">{ &form.email_error }</p>
                            }
                        </div>

                        <div class="form-field">
                            <label for="password">{"Contraseña"}</label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                value={form.password.clone()}
                                oninput={on_password_input}
                                onblur={on_password_blur}
                                class={if form.password_error.is_empty() { "" } else { "input-invalid" }}
                            />
                            if !form.password_error.is_empty() {
                                <p class="field-error">{ &form.password_error }</p>
                            }
                        </div>

                        <div class="form-field">
                            <label>{"Tipo de usuario"}</label>
                            <div class="role-options">
                                <label class="role-option">
                                    <input
                                        type="radio"
                                        name="role"
                                        value="student"
                                        checked={form.role == Role::Student}
                                        onchange={on_role_change.clone()}
                                    />
                                    {"Estudiante"}
                                </label>
                                <label class="role-option">
                                    <input
                                        type="radio"
                                        name="role"
                                        value="admin"
                                        checked={form.role == Role::Admin}
                                        onchange={on_role_change}
                                    />
                                    {"Administrador"}
                                </label>
                            </div>
                        </div>

                        <button type="submit" class="btn btn-primary btn-block">
                            {"Iniciar sesión"}
                        </button>
                    </form>

                    <div class="card-footer">
                        <button class="btn-link">{"¿Olvidaste tu contraseña?"}</button>
                        <button class="btn-link">{"Registrarse"}</button>
                    </div>
                </div>

                <p class="login-copyright">
                    {"© 2025 InnovaEd - Todos los derechos reservados"}
                </p>
            </div>
        </div>
    }
}
