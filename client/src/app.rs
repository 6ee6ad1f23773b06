//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};
use prefs::ClientPreferences;

use crate::components::dashboard_layout::DashboardLayout;
use crate::i18n::{Msg, use_i18n};
use crate::net::auth_client::AuthClient;
use crate::pages::{
    dashboard::DashboardPage,
    forgot_password::ForgotPasswordPage,
    habits::HabitsPage,
    home::HomePage,
    info::{AboutPage, ContactPage, HelpPage},
    login::LoginPage,
    profile::ProfilePage,
    progress::ProgressPage,
    register::RegisterPage,
    reset_password::ResetPasswordPage,
    settings::SettingsPage,
};
use crate::util::presentation::use_presentation;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The inline boot script applies the stored theme and language before first
/// paint, so a dark-mode visitor never sees a light flash.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=prefs::boot_script()></script>
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ClientPreferences::default()));
    provide_context(AuthClient::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/vivesano.css"/>
        <Title text="ViveSano"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("iniciar-sesion") view=LoginPage/>
                <Route path=StaticSegment("registrarse") view=RegisterPage/>
                <Route path=StaticSegment("olvido-contrasena") view=ForgotPasswordPage/>
                <Route path=StaticSegment("restablecer-contrasena") view=ResetPasswordPage/>
                <Route path=StaticSegment("sobre-nosotros") view=AboutPage/>
                <Route path=StaticSegment("contacto") view=ContactPage/>
                <Route path=StaticSegment("ayuda") view=HelpPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("habitos") view=HabitsPage/>
                    <Route path=StaticSegment("progreso") view=ProgressPage/>
                    <Route path=StaticSegment("perfil") view=ProfilePage/>
                    <Route path=StaticSegment("configuracion") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    use_presentation();
    let t = use_i18n();

    view! {
        <main class="info-page">
            <h1>{move || t(Msg::NotFound)}</h1>
            <a href="/">{move || t(Msg::NavHome)}</a>
        </main>
    }
}
