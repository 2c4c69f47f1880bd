//! Root application component: session gate, routing, context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::pages::{login::LoginPage, register::RegisterPage};
use crate::routing::{self, RouteAction};
use crate::state::auth::AuthState;

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
/// Provides the session context, runs the one-shot session check, and keeps
/// the router behind a loading gate until the check settles. Whatever the
/// current URL is, the placeholder renders while the check is in flight.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // One-shot session check on mount. No retry, no timeout: tearing the
    // app down mid-flight abandons the request.
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_session_user().await;
            auth.update(|state| state.resolve(outcome));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-client.css"/>
        <Title text="School Portal"/>

        <Show
            when=move || !auth.get().is_checking()
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <Router>
                <Routes fallback=|| view! { <FallbackRedirect/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=FallbackRedirect/>
                </Routes>
            </Router>
        </Show>
    }
}

/// Replace-redirect applied to `/` and every unmatched path.
///
/// The target comes from the route policy table so the declarative router
/// and [`routing::resolve`] cannot drift apart.
#[component]
fn FallbackRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let action = routing::resolve(
        &location.pathname.get_untracked(),
        auth.get_untracked().is_authenticated(),
    );
    let (to, replace) = match action {
        RouteAction::Redirect { to, replace } => (to, replace),
        // Matched paths have their own <Route>; anything landing here
        // resolves to a redirect, but keep a sane default regardless.
        RouteAction::Render(_) => (routing::LOGIN_PATH, true),
    };

    let options = NavigateOptions {
        replace,
        ..Default::default()
    };

    view! { <Redirect path=to options=options/> }
}
