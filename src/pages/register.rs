//! Registration page: account form posting to the register endpoint.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, AuthCheckError};
use crate::net::types::RegisterData;
use crate::routing;
use crate::state::auth::AuthState;

/// Registration page — the server logs the new account in on success, so
/// the returned user goes straight into the session context.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let data = RegisterData {
            email: email.get().trim().to_owned(),
            username: username.get().trim().to_owned(),
            first_name: first_name.get().trim().to_owned(),
            last_name: last_name.get().trim().to_owned(),
            password: password.get(),
        };
        if data.email.is_empty()
            || data.username.is_empty()
            || data.first_name.is_empty()
            || data.last_name.is_empty()
            || data.password.is_empty()
        {
            error.set(Some("All fields are required.".to_owned()));
            return;
        }

        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&data).await {
                Ok(user) => {
                    auth.update(|state| state.sign_in(user));
                    navigate(routing::ROOT_PATH, NavigateOptions::default());
                }
                Err(AuthCheckError::Denied(_)) => {
                    error.set(Some(
                        "Registration failed. Check the fields and try again.".to_owned(),
                    ));
                }
                Err(_) => {
                    error.set(Some("Could not reach the server. Try again.".to_owned()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"School Portal"</h1>
            <form class="auth-form" on:submit=on_submit>
                <h2>"Create an account"</h2>

                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Username"
                    <input
                        type="text"
                        prop:value=username
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "First name"
                    <input
                        type="text"
                        prop:value=first_name
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Last name"
                    <input
                        type="text"
                        prop:value=last_name
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Already have an account? "
                <a href=routing::LOGIN_PATH>"Sign in"</a>
            </p>
        </div>
    }
}
