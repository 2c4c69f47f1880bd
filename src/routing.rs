//! Static route policy: path → screen mappings and fallback redirects.
//!
//! The policy is pure data plus one resolve function so it can be tested
//! without a browser; `app::App` mirrors it in the declarative router.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

/// Screens the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
}

/// Authorization requirement attached to a route.
///
/// Every current route is `Public`; the other variants are the extension
/// point for protected routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable in any session state.
    Public,
    /// Requires a signed-in user; otherwise redirect to the login screen.
    RequiresAuth,
    /// Only reachable signed out; otherwise redirect to the root.
    GuestOnly,
}

/// One entry of the static route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub path: &'static str,
    pub screen: Screen,
    pub access: Access,
}

/// Path of the login screen, the target of every fallback redirect.
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ROOT_PATH: &str = "/";

/// The route table. Identical for signed-in and signed-out sessions.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: LOGIN_PATH,
        screen: Screen::Login,
        access: Access::Public,
    },
    RouteDef {
        path: REGISTER_PATH,
        screen: Screen::Register,
        access: Access::Public,
    },
];

/// What the router should do for a given browser path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAction {
    Render(Screen),
    /// Navigate elsewhere. `replace` swaps the current history entry so
    /// Back does not bounce through the redirecting path.
    Redirect { to: &'static str, replace: bool },
}

/// Resolve a browser path against [`ROUTES`].
///
/// `/` and any unmatched path redirect to the login screen, replacing the
/// history entry.
pub fn resolve(path: &str, authenticated: bool) -> RouteAction {
    resolve_in(ROUTES, path, authenticated)
}

/// Resolve against an explicit table. Split out so guard behavior is
/// testable independently of the current all-public table.
pub fn resolve_in(table: &[RouteDef], path: &str, authenticated: bool) -> RouteAction {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    for route in table {
        if route.path != trimmed {
            continue;
        }
        return match route.access {
            Access::Public => RouteAction::Render(route.screen),
            Access::RequiresAuth if authenticated => RouteAction::Render(route.screen),
            Access::RequiresAuth => RouteAction::Redirect {
                to: LOGIN_PATH,
                replace: true,
            },
            Access::GuestOnly if authenticated => RouteAction::Redirect {
                to: ROOT_PATH,
                replace: true,
            },
            Access::GuestOnly => RouteAction::Render(route.screen),
        };
    }

    RouteAction::Redirect {
        to: LOGIN_PATH,
        replace: true,
    }
}
