//! Application State Management for Brewguide
//!
//! One global signal holds which view is showing, the sign-in form mode and
//! the navigation log. The marker chain is not here: it belongs to the auth
//! page's follow hook and dies with it.

use brewguide_core::{AssetRoot, Settings};
use dioxus::prelude::*;
use std::sync::OnceLock;

// ============================================================================
// Views
// ============================================================================

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Sign-in / sign-up form
    #[default]
    Auth,
    /// Recipe listing
    Recipes,
}

impl View {
    /// Route the view would live at on the web
    pub fn route(&self) -> &'static str {
        match self {
            View::Auth => "/",
            View::Recipes => "/home",
        }
    }
}

/// A single view transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub from: View,
    pub to: View,
}

// ============================================================================
// Auth Form
// ============================================================================

/// Whether the form signs in or signs up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back!",
            AuthMode::Signup => "Join Us Today!",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Sign Up",
        }
    }

    /// Question shown before the mode switch link
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Signup => "Already have an account?",
        }
    }

    /// Label of the mode switch link
    pub fn switch_label(&self) -> &'static str {
        self.toggled().submit_label()
    }

    /// Only sign-up asks for a name
    pub fn shows_full_name(&self) -> bool {
        matches!(self, AuthMode::Signup)
    }

    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Contents of the sign-in form. Never validated and never sent anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone)]
pub struct AppState {
    /// Currently showing view
    pub view: View,
    /// Sign-in form mode
    pub auth_mode: AuthMode,
    /// Every view transition so far, oldest first
    pub navigations: Vec<NavigationEvent>,
    /// Settings the app was launched with
    pub settings: Settings,
    /// Image lookup
    pub assets: AssetRoot,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    /// Create application state from settings
    pub fn new(settings: Settings) -> Self {
        let assets = AssetRoot::new(settings.assets.root.clone());
        Self {
            view: View::default(),
            auth_mode: AuthMode::default(),
            navigations: Vec::new(),
            settings,
            assets,
        }
    }

    /// Switch to `to`. Navigating to the current view does nothing.
    pub fn navigate(&mut self, to: View) {
        if self.view == to {
            return;
        }
        let from = self.view;
        self.view = to;
        self.navigations.push(NavigationEvent { from, to });
        tracing::info!("Navigated {} -> {}", from.route(), to.route());
    }

    /// Handle a sign-in form submission
    ///
    /// The fields are not checked: any submission moves on to the recipes.
    pub fn submit_credentials(&mut self, form: &CredentialForm) {
        tracing::debug!(
            mode = ?self.auth_mode,
            email_given = !form.email.is_empty(),
            "Credentials submitted"
        );
        self.navigate(View::Recipes);
    }

    /// Flip between sign-in and sign-up
    pub fn toggle_auth_mode(&mut self) {
        self.auth_mode = self.auth_mode.toggled();
        tracing::debug!("Auth mode is now {:?}", self.auth_mode);
    }

    pub fn navigation_count(&self) -> usize {
        self.navigations.len()
    }
}

// ============================================================================
// Global State Context
// ============================================================================

static LAUNCH_SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> =
    Signal::global(|| AppState::new(launch_settings()));

/// Record the settings the global state starts from
/// Call this once at app startup, before the first render
pub fn init_app_state(settings: Settings) {
    if LAUNCH_SETTINGS.set(settings).is_err() {
        tracing::warn!("App state already initialized; keeping the first settings");
    }
}

fn launch_settings() -> Settings {
    LAUNCH_SETTINGS.get().cloned().unwrap_or_default()
}

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to access the current view
pub fn use_current_view() -> View {
    APP_STATE.read().view
}

/// Hook to access the asset root
pub fn use_assets() -> AssetRoot {
    APP_STATE.read().assets.clone()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_auth() {
        let state = AppState::new(Settings::default());
        assert_eq!(state.view, View::Auth);
        assert_eq!(state.auth_mode, AuthMode::Login);
        assert_eq!(state.navigation_count(), 0);
    }

    #[test]
    fn test_submit_navigates_once() {
        let mut state = AppState::default();
        state.submit_credentials(&CredentialForm::default());

        assert_eq!(state.view, View::Recipes);
        assert_eq!(
            state.navigations,
            vec![NavigationEvent {
                from: View::Auth,
                to: View::Recipes,
            }]
        );
    }

    #[test]
    fn test_submit_ignores_field_contents() {
        let forms = [
            CredentialForm::default(),
            CredentialForm {
                full_name: "John Doe".to_string(),
                email: "not-an-email".to_string(),
                password: String::new(),
            },
            CredentialForm {
                full_name: String::new(),
                email: "you@example.com".to_string(),
                password: "••••••••".to_string(),
            },
        ];

        for form in &forms {
            for mode in [AuthMode::Login, AuthMode::Signup] {
                let mut state = AppState::default();
                state.auth_mode = mode;
                state.submit_credentials(form);
                assert_eq!(state.view, View::Recipes);
                assert_eq!(state.navigation_count(), 1);
            }
        }
    }

    #[test]
    fn test_navigate_to_current_view_is_noop() {
        let mut state = AppState::default();
        state.navigate(View::Auth);
        assert_eq!(state.navigation_count(), 0);

        state.navigate(View::Recipes);
        state.navigate(View::Recipes);
        assert_eq!(state.navigation_count(), 1);
    }

    #[test]
    fn test_toggle_auth_mode() {
        let mut state = AppState::default();
        state.toggle_auth_mode();
        assert_eq!(state.auth_mode, AuthMode::Signup);
        assert!(state.auth_mode.shows_full_name());
        state.toggle_auth_mode();
        assert_eq!(state.auth_mode, AuthMode::Login);
        assert!(!state.auth_mode.shows_full_name());
        assert_eq!(state.navigation_count(), 0);
    }

    #[test]
    fn test_auth_mode_copy() {
        assert_eq!(AuthMode::Login.heading(), "Welcome Back!");
        assert_eq!(AuthMode::Login.submit_label(), "Sign In");
        assert_eq!(AuthMode::Login.switch_label(), "Sign Up");
        assert_eq!(AuthMode::Signup.heading(), "Join Us Today!");
        assert_eq!(AuthMode::Signup.switch_prompt(), "Already have an account?");
        assert_eq!(AuthMode::Signup.switch_label(), "Sign In");
    }

    #[test]
    fn test_asset_root_follows_settings() {
        let mut settings = Settings::default();
        settings.assets.root = "static/img".into();
        let state = AppState::new(settings);
        assert_eq!(state.assets.root(), std::path::Path::new("static/img"));
    }

    #[test]
    fn test_view_routes() {
        assert_eq!(View::Auth.route(), "/");
        assert_eq!(View::Recipes.route(), "/home");
    }
}
