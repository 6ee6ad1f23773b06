//! Spanish/English message catalog.
//!
//! DESIGN
//! ======
//! Every user-visible string is a [`Msg`] variant with one translation per
//! [`Locale`]. The active locale lives in the `RwSignal<ClientPreferences>`
//! context, so views re-render when the user switches language.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use leptos::prelude::*;
use prefs::{ClientPreferences, Locale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    Brand,
    Tagline,
    NavHome,
    NavAbout,
    NavContact,
    NavHelp,
    NavLogin,
    NavRegister,
    NavDashboard,
    HeroTitle,
    HeroBody,
    HeroCta,
    AboutTitle,
    AboutBody,
    ContactTitle,
    ContactBody,
    HelpTitle,
    HelpBody,
    LoginTitle,
    RegisterTitle,
    ForgotTitle,
    ForgotBody,
    ResetTitle,
    EmailLabel,
    PasswordLabel,
    ConfirmPasswordLabel,
    FullNameLabel,
    SubmitLogin,
    SubmitRegister,
    SubmitForgot,
    SubmitReset,
    ForgotLink,
    NoAccount,
    HaveAccount,
    Busy,
    Loading,
    ErrEmailRequired,
    ErrEmailInvalid,
    ErrPasswordRequired,
    ErrPasswordShort,
    ErrPasswordMismatch,
    ErrRecoveryLink,
    ErrInvalidCredentials,
    ErrService,
    InfoConfirmEmail,
    InfoRecoverySent,
    InfoPasswordUpdated,
    SidebarOverview,
    SidebarHabits,
    SidebarProgress,
    SidebarProfile,
    SidebarSettings,
    SignOut,
    Greeting,
    DashboardEmpty,
    HabitsTitle,
    HabitsEmpty,
    ProgressTitle,
    ProgressEmpty,
    ProfileTitle,
    ProfileName,
    ProfileEmail,
    SettingsTitle,
    SettingsTheme,
    SettingsLanguage,
    ThemeDark,
    ThemeLight,
    LanguageName,
    NotFound,
}

impl Msg {
    /// Every variant, for catalog checks.
    pub const ALL: [Msg; 69] = [
        Msg::Brand,
        Msg::Tagline,
        Msg::NavHome,
        Msg::NavAbout,
        Msg::NavContact,
        Msg::NavHelp,
        Msg::NavLogin,
        Msg::NavRegister,
        Msg::NavDashboard,
        Msg::HeroTitle,
        Msg::HeroBody,
        Msg::HeroCta,
        Msg::AboutTitle,
        Msg::AboutBody,
        Msg::ContactTitle,
        Msg::ContactBody,
        Msg::HelpTitle,
        Msg::HelpBody,
        Msg::LoginTitle,
        Msg::RegisterTitle,
        Msg::ForgotTitle,
        Msg::ForgotBody,
        Msg::ResetTitle,
        Msg::EmailLabel,
        Msg::PasswordLabel,
        Msg::ConfirmPasswordLabel,
        Msg::FullNameLabel,
        Msg::SubmitLogin,
        Msg::SubmitRegister,
        Msg::SubmitForgot,
        Msg::SubmitReset,
        Msg::ForgotLink,
        Msg::NoAccount,
        Msg::HaveAccount,
        Msg::Busy,
        Msg::Loading,
        Msg::ErrEmailRequired,
        Msg::ErrEmailInvalid,
        Msg::ErrPasswordRequired,
        Msg::ErrPasswordShort,
        Msg::ErrPasswordMismatch,
        Msg::ErrRecoveryLink,
        Msg::ErrInvalidCredentials,
        Msg::ErrService,
        Msg::InfoConfirmEmail,
        Msg::InfoRecoverySent,
        Msg::InfoPasswordUpdated,
        Msg::SidebarOverview,
        Msg::SidebarHabits,
        Msg::SidebarProgress,
        Msg::SidebarProfile,
        Msg::SidebarSettings,
        Msg::SignOut,
        Msg::Greeting,
        Msg::DashboardEmpty,
        Msg::HabitsTitle,
        Msg::HabitsEmpty,
        Msg::ProgressTitle,
        Msg::ProgressEmpty,
        Msg::ProfileTitle,
        Msg::ProfileName,
        Msg::ProfileEmail,
        Msg::SettingsTitle,
        Msg::SettingsTheme,
        Msg::SettingsLanguage,
        Msg::ThemeDark,
        Msg::ThemeLight,
        Msg::LanguageName,
        Msg::NotFound,
    ];

    /// Translation of `self` in `locale`.
    #[must_use]
    pub fn text(self, locale: Locale) -> &'static str {
        let (es, en) = self.pair();
        match locale {
            Locale::Es => es,
            Locale::En => en,
        }
    }

    #[allow(clippy::too_many_lines)]
    const fn pair(self) -> (&'static str, &'static str) {
        match self {
            Msg::Brand => ("ViveSano", "ViveSano"),
            Msg::Tagline => ("Pequeños hábitos, grandes cambios", "Small habits, big changes"),
            Msg::NavHome => ("Inicio", "Home"),
            Msg::NavAbout => ("Sobre nosotros", "About us"),
            Msg::NavContact => ("Contacto", "Contact"),
            Msg::NavHelp => ("Ayuda", "Help"),
            Msg::NavLogin => ("Iniciar sesión", "Sign in"),
            Msg::NavRegister => ("Registrarse", "Sign up"),
            Msg::NavDashboard => ("Mi panel", "My dashboard"),
            Msg::HeroTitle => ("Construye hábitos saludables", "Build healthy habits"),
            Msg::HeroBody => (
                "Registra tus hábitos diarios y sigue tu progreso semana a semana.",
                "Track your daily habits and follow your progress week by week.",
            ),
            Msg::HeroCta => ("Empieza gratis", "Start for free"),
            Msg::AboutTitle => ("Sobre ViveSano", "About ViveSano"),
            Msg::AboutBody => (
                "Creemos que la constancia vale más que la intensidad. ViveSano te ayuda a sostener lo que empiezas.",
                "We believe consistency beats intensity. ViveSano helps you keep going with what you start.",
            ),
            Msg::ContactTitle => ("Contacto", "Contact"),
            Msg::ContactBody => (
                "Escríbenos a hola@vivesano.app y te responderemos pronto.",
                "Write to hola@vivesano.app and we will get back to you soon.",
            ),
            Msg::HelpTitle => ("Centro de ayuda", "Help center"),
            Msg::HelpBody => (
                "¿Olvidaste tu contraseña? Usa el enlace de recuperación en la página de inicio de sesión.",
                "Forgot your password? Use the recovery link on the sign-in page.",
            ),
            Msg::LoginTitle => ("Inicia sesión", "Sign in"),
            Msg::RegisterTitle => ("Crea tu cuenta", "Create your account"),
            Msg::ForgotTitle => ("Recupera tu contraseña", "Recover your password"),
            Msg::ForgotBody => (
                "Te enviaremos un enlace para elegir una nueva contraseña.",
                "We will send you a link to choose a new password.",
            ),
            Msg::ResetTitle => ("Elige una nueva contraseña", "Choose a new password"),
            Msg::EmailLabel => ("Correo electrónico", "Email"),
            Msg::PasswordLabel => ("Contraseña", "Password"),
            Msg::ConfirmPasswordLabel => ("Confirmar contraseña", "Confirm password"),
            Msg::FullNameLabel => ("Nombre completo", "Full name"),
            Msg::SubmitLogin => ("Entrar", "Sign in"),
            Msg::SubmitRegister => ("Crear cuenta", "Create account"),
            Msg::SubmitForgot => ("Enviar enlace", "Send link"),
            Msg::SubmitReset => ("Guardar contraseña", "Save password"),
            Msg::ForgotLink => ("¿Olvidaste tu contraseña?", "Forgot your password?"),
            Msg::NoAccount => ("¿No tienes cuenta? Regístrate", "No account? Sign up"),
            Msg::HaveAccount => ("¿Ya tienes cuenta? Inicia sesión", "Already have an account? Sign in"),
            Msg::Busy => ("Enviando...", "Sending..."),
            Msg::Loading => ("Cargando...", "Loading..."),
            Msg::ErrEmailRequired => ("Ingresa tu correo electrónico.", "Enter your email."),
            Msg::ErrEmailInvalid => ("El correo electrónico no es válido.", "The email address is not valid."),
            Msg::ErrPasswordRequired => ("Ingresa tu contraseña.", "Enter your password."),
            Msg::ErrPasswordShort => (
                "La contraseña debe tener al menos 6 caracteres.",
                "The password must be at least 6 characters.",
            ),
            Msg::ErrPasswordMismatch => ("Las contraseñas no coinciden.", "The passwords do not match."),
            Msg::ErrRecoveryLink => (
                "El enlace de recuperación no es válido o expiró.",
                "The recovery link is invalid or has expired.",
            ),
            Msg::ErrInvalidCredentials => ("Correo o contraseña incorrectos.", "Incorrect email or password."),
            Msg::ErrService => (
                "No pudimos completar la solicitud. Inténtalo de nuevo.",
                "We could not complete the request. Please try again.",
            ),
            Msg::InfoConfirmEmail => (
                "Revisa tu correo para confirmar tu cuenta.",
                "Check your email to confirm your account.",
            ),
            Msg::InfoRecoverySent => (
                "Si el correo está registrado, recibirás un enlace en unos minutos.",
                "If the email is registered, you will receive a link in a few minutes.",
            ),
            Msg::InfoPasswordUpdated => (
                "Tu contraseña fue actualizada. Ya puedes iniciar sesión.",
                "Your password was updated. You can sign in now.",
            ),
            Msg::SidebarOverview => ("Resumen", "Overview"),
            Msg::SidebarHabits => ("Hábitos", "Habits"),
            Msg::SidebarProgress => ("Progreso", "Progress"),
            Msg::SidebarProfile => ("Perfil", "Profile"),
            Msg::SidebarSettings => ("Configuración", "Settings"),
            Msg::SignOut => ("Cerrar sesión", "Sign out"),
            Msg::Greeting => ("Hola", "Hello"),
            Msg::DashboardEmpty => (
                "Aún no registras hábitos hoy. ¡Empieza por uno pequeño!",
                "You have not logged any habits today. Start with a small one!",
            ),
            Msg::HabitsTitle => ("Mis hábitos", "My habits"),
            Msg::HabitsEmpty => ("Todavía no tienes hábitos.", "You do not have any habits yet."),
            Msg::ProgressTitle => ("Mi progreso", "My progress"),
            Msg::ProgressEmpty => (
                "Tu progreso aparecerá aquí cuando registres hábitos.",
                "Your progress will show up here once you log habits.",
            ),
            Msg::ProfileTitle => ("Mi perfil", "My profile"),
            Msg::ProfileName => ("Nombre", "Name"),
            Msg::ProfileEmail => ("Correo", "Email"),
            Msg::SettingsTitle => ("Configuración", "Settings"),
            Msg::SettingsTheme => ("Tema", "Theme"),
            Msg::SettingsLanguage => ("Idioma", "Language"),
            Msg::ThemeDark => ("Modo oscuro", "Dark mode"),
            Msg::ThemeLight => ("Modo claro", "Light mode"),
            Msg::LanguageName => ("Español", "English"),
            Msg::NotFound => ("Página no encontrada.", "Page not found."),
        }
    }
}

/// Reactive translator bound to the preferences context.
///
/// Returns a `Copy` closure so views can call it inside reactive blocks.
pub fn use_i18n() -> impl Fn(Msg) -> &'static str + Copy + Send + Sync + 'static {
    let prefs = expect_context::<RwSignal<ClientPreferences>>();
    move |msg: Msg| msg.text(prefs.get().locale)
}
