//! User-facing copy for the access page.
//!
//! Strings are Spanish to match the rest of the Vivero product. Keep every
//! message shown to the user here so the state machine and the component
//! agree on wording.

pub const PAGE_TITLE: &str = "Vivero - Acceso";
pub const TAGLINE: &str = "Inicia sesión para ingresar al panel de gestión.";

pub const HEALTH_CHECKING: &str = "Verificando conexión...";
pub const HEALTH_OK: &str = "Base de datos conectada";
pub const HEALTH_DATABASE_DOWN: &str = "API respondió pero la base de datos no está disponible";
pub const HEALTH_UNREACHABLE: &str = "No se pudo verificar la API";

pub const API_UNAVAILABLE: &str = "La API no está disponible";
pub const CREDENTIALS_REQUIRED: &str = "Usuario y contraseña son obligatorios";
pub const UNEXPECTED_ERROR: &str = "Ocurrió un error inesperado. Intenta nuevamente.";

/// Shown in place of a missing role on the welcome card.
pub const NO_ROLE: &str = "Sin rol";

pub const USERNAME_LABEL: &str = "Usuario";
pub const USERNAME_PLACEHOLDER: &str = "Ingresa tu usuario";
pub const PASSWORD_LABEL: &str = "Contraseña";
pub const SUBMIT_IDLE: &str = "Ingresar";
pub const SUBMIT_BUSY: &str = "Ingresando...";

/// Last-resort `ApiError` message when the server sent neither an `error`
/// field nor a status text.
pub const FALLBACK_API_ERROR: &str = "Unexpected error";

#[must_use]
pub fn welcome(username: &str) -> String {
    format!("¡Bienvenido, {username}!")
}

#[must_use]
pub fn role_line(role: Option<&str>) -> String {
    format!("Rol: {}", role.unwrap_or(NO_ROLE))
}

#[must_use]
pub fn email_line(email: &str) -> String {
    format!("Email: {email}")
}
