//! Route classification and session wire model shared by `server` and `client`.
//!
//! The server's access guard and the client's dashboard layout both decide
//! "is this path protected?" from the same tables, so the answer cannot drift
//! between the two sides.

pub mod session;

pub use session::{AuthEvent, MIN_PASSWORD_LEN, Session, SessionUser};

// =============================================================================
// PATHS
// =============================================================================

/// Landing page.
pub const HOME_PATH: &str = "/";
/// Sign-in form; also the redirect target for unauthenticated requests.
pub const LOGIN_PATH: &str = "/iniciar-sesion";
/// Registration form.
pub const REGISTER_PATH: &str = "/registrarse";
/// Password-recovery request form.
pub const FORGOT_PASSWORD_PATH: &str = "/olvido-contrasena";
/// Password-recovery completion form (recovery links land here).
pub const RESET_PASSWORD_PATH: &str = "/restablecer-contrasena";
pub const ABOUT_PATH: &str = "/sobre-nosotros";
pub const CONTACT_PATH: &str = "/contacto";
pub const HELP_PATH: &str = "/ayuda";

/// Root of the protected area. Every path starting with this string requires a session.
pub const PROTECTED_PREFIX: &str = "/dashboard";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const HABITS_PATH: &str = "/dashboard/habitos";
pub const PROGRESS_PATH: &str = "/dashboard/progreso";
pub const PROFILE_PATH: &str = "/dashboard/perfil";
pub const SETTINGS_PATH: &str = "/dashboard/configuracion";

/// Paths served without a session check. Matched exactly and case-sensitively.
pub const PUBLIC_PATHS: [&str; 8] = [
    HOME_PATH,
    LOGIN_PATH,
    REGISTER_PATH,
    FORGOT_PASSWORD_PATH,
    RESET_PASSWORD_PATH,
    ABOUT_PATH,
    CONTACT_PATH,
    HELP_PATH,
];

/// Leading path fragments (after the first `/`) the guard never sees:
/// compiled assets, images, the favicon and the JSON API.
///
/// `api` is matched as a bare prefix, so `/api/...` and `/apix` are both skipped.
const UNGUARDED_PREFIXES: [&str; 4] = ["pkg/", "assets/", "favicon.ico", "api"];

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Access class of a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Served to anyone.
    Public,
    /// Requires a valid session; unauthenticated callers are redirected to [`LOGIN_PATH`].
    Protected,
}

/// Whether `path` is one of the enumerated [`PUBLIC_PATHS`].
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Classify a request path.
///
/// Order matters: the allow-list is consulted first, then the protected
/// prefix. Anything that is neither enumerated nor under the prefix is
/// `Public`.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if is_public_path(path) {
        return RouteClass::Public;
    }
    if path.starts_with(PROTECTED_PREFIX) {
        return RouteClass::Protected;
    }
    RouteClass::Public
}

/// Whether requests for `path` go through the access guard at all.
#[must_use]
pub fn is_intercepted(path: &str) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);
    !UNGUARDED_PREFIXES.iter().any(|prefix| rest.starts_with(prefix))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
