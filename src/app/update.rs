// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each screen returns an `Event` from its own `update`; the handlers here
//! turn those events into account changes, persistence and async tasks.

use super::config::Config;
use super::{persistence, Message, Screen};
use crate::application::port::{EnhanceError, Enhancer};
use crate::domain::account::{AccountBook, AdminAction, CreditCharge, UserRole};
use crate::error::Error;
use crate::i18n::I18n;
use crate::infrastructure::image_source;
use crate::ui::admin::{self, Diagnostic, Event as AdminEvent};
use crate::ui::auth::{self, Event as AuthEvent, Mode as AuthMode};
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::profile::{self, Event as ProfileEvent};
use crate::ui::studio::{self, Event as StudioEvent};
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Mutable view of the application state shared by every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a Path>,
    pub accounts: &'a mut AccountBook,
    pub data_dir: Option<&'a Path>,
    pub enhancer: &'a Arc<dyn Enhancer>,
    pub auth: &'a mut auth::State,
    pub studio: &'a mut studio::State,
    pub admin: &'a mut admin::State,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn save_accounts(&mut self) -> bool {
        persistence::persist_accounts(self.accounts, self.data_dir, self.notifications)
    }

    fn save_config(&mut self) {
        persistence::persist_config(
            self.config,
            self.config_dir.map(Path::to_path_buf),
            self.notifications,
        );
    }

    fn is_admin(&self) -> bool {
        self.accounts.current_user().is_some_and(|user| user.is_admin)
    }
}

/// Switches screens, redirecting to the auth form when a session is needed
/// and refusing the admin console to regular users.
pub fn navigate(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let signed_in = ctx.accounts.current_user().is_some();

    let target = if target.requires_session() && !signed_in {
        ctx.auth.set_mode(AuthMode::Login);
        Screen::Auth
    } else if target == Screen::Admin && !ctx.is_admin() {
        ctx.notifications
            .push(Notification::error("error-account-unauthorized"));
        return Task::none();
    } else {
        target
    };

    if target == Screen::Admin {
        ctx.admin.reset(&ctx.config.site);
    }

    tracing::debug!(from = ?*ctx.screen, to = ?target, "navigate");
    *ctx.screen = target;
    Task::none()
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::OpenHome => navigate(ctx, Screen::Home),
        navbar::Message::OpenStudio => navigate(ctx, Screen::Studio),
        navbar::Message::OpenProfile => navigate(ctx, Screen::Profile),
        navbar::Message::OpenAdmin => navigate(ctx, Screen::Admin),
        navbar::Message::SignUp => {
            ctx.auth.set_mode(AuthMode::Signup);
            *ctx.screen = Screen::Auth;
            Task::none()
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match message {
        home::Message::EnterStudio => navigate(ctx, Screen::Studio),
    }
}

pub fn handle_auth_message(ctx: &mut UpdateContext<'_>, message: auth::Message) -> Task<Message> {
    let outcome = match auth::update(ctx.auth, message) {
        AuthEvent::None => return Task::none(),
        AuthEvent::Login { email, password } => ctx
            .accounts
            .login(&email, &password)
            .map(|user| (user.name.clone(), "notification-welcome-back")),
        AuthEvent::Signup(credentials) => ctx
            .accounts
            .signup(
                &credentials,
                &ctx.config.general.admin_email,
                chrono::Utc::now().timestamp_millis(),
            )
            .map(|user| (user.name.clone(), "notification-welcome")),
    };

    match outcome {
        Ok((name, key)) => {
            tracing::info!(user = %name, "signed in");
            ctx.save_accounts();
            ctx.auth.reset();
            ctx.notifications
                .push(Notification::success(key).with_arg("name", name));
            navigate(ctx, Screen::Studio)
        }
        Err(err) => {
            tracing::info!(%err, "sign-in rejected");
            ctx.notifications.push(Notification::error(err.i18n_key()));
            Task::none()
        }
    }
}

pub fn handle_studio_message(
    ctx: &mut UpdateContext<'_>,
    message: studio::Message,
) -> Task<Message> {
    match studio::update(ctx.studio, message) {
        StudioEvent::None => Task::none(),
        StudioEvent::OpenImageRequested => open_image_dialog(),
        StudioEvent::EnhanceRequested => start_enhancement(ctx),
    }
}

fn open_image_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", image_source::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Decodes a source image off the update loop.
pub fn load_source(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move { image_source::load_png(&path) },
        Message::SourceLoaded,
    )
}

pub fn handle_source_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    match result {
        Ok(png) => ctx.studio.set_source(png),
        Err(err) => {
            tracing::warn!(%err, "cannot load source image");
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
    Task::none()
}

/// Charges one credit, then runs the enhancer in the background.
fn start_enhancement(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.accounts.current_user().is_none() {
        return navigate(ctx, Screen::Auth);
    }

    let charge = match ctx.accounts.deduct_credit() {
        Ok(charge) => charge,
        Err(err) => {
            ctx.studio.abort(err.i18n_key());
            ctx.notifications.push(Notification::error(err.i18n_key()));
            return Task::none();
        }
    };

    let Some(request) = ctx.studio.start(ctx.config.enhance.image_size()) else {
        ctx.accounts.refund_credit(charge);
        return Task::none();
    };
    ctx.save_accounts();

    tracing::info!(
        enhancer = ctx.enhancer.name(),
        style = ctx.studio.style().id,
        aspect_ratio = request.aspect_ratio.as_str(),
        "enhancement started"
    );

    let enhancer = Arc::clone(ctx.enhancer);
    Task::perform(enhancer.enhance(request), move |result| {
        Message::EnhanceFinished { charge, result }
    })
}

pub fn handle_enhance_finished(
    ctx: &mut UpdateContext<'_>,
    charge: CreditCharge,
    result: Result<Vec<u8>, EnhanceError>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            tracing::info!(bytes = bytes.len(), "enhancement finished");
            ctx.studio.finish(Ok(bytes));
            ctx.notifications
                .push(Notification::success("notification-enhance-success"));
        }
        Err(err) => {
            tracing::warn!(%err, "enhancement failed");
            if err == EnhanceError::MissingApiKey {
                ctx.accounts.refund_credit(charge);
                ctx.save_accounts();
            }
            ctx.studio.finish(Err(err.i18n_key()));
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
    Task::none()
}

pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: profile::Message,
) -> Task<Message> {
    match profile::update(message) {
        ProfileEvent::Logout => {
            ctx.accounts.logout();
            ctx.save_accounts();
            *ctx.studio = studio::State::default();
            ctx.notifications
                .push(Notification::info("notification-signed-out"));
            navigate(ctx, Screen::Home)
        }
        ProfileEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.config, locale);
            ctx.save_config();
            Task::none()
        }
        ProfileEvent::ThemeModeSelected(mode) => {
            ctx.config.general.theme_mode = mode;
            ctx.save_config();
            Task::none()
        }
        ProfileEvent::RefillCredits => self_admin_action(ctx, AdminAction::AddCredits),
        ProfileEvent::UnlockVip => self_admin_action(ctx, AdminAction::SetRole(UserRole::Vip)),
        ProfileEvent::TestCharge => {
            match ctx.accounts.deduct_credit() {
                Ok(CreditCharge::Charged { remaining }) => {
                    ctx.save_accounts();
                    ctx.notifications.push(
                        Notification::info("notification-test-charge")
                            .with_arg("count", remaining.to_string()),
                    );
                }
                Ok(CreditCharge::Unmetered) => ctx
                    .notifications
                    .push(Notification::info("notification-test-charge-unmetered")),
                Err(err) => ctx.notifications.push(Notification::error(err.i18n_key())),
            }
            Task::none()
        }
        ProfileEvent::OpenAdmin => navigate(ctx, Screen::Admin),
    }
}

fn self_admin_action(ctx: &mut UpdateContext<'_>, action: AdminAction) -> Task<Message> {
    let Some(id) = ctx.accounts.current_user().map(|user| user.id.clone()) else {
        return Task::none();
    };
    apply_admin_action(ctx, &id, action);
    Task::none()
}

fn apply_admin_action(ctx: &mut UpdateContext<'_>, id: &str, action: AdminAction) {
    match ctx.accounts.admin_action(id, action) {
        Ok(user) => {
            tracing::info!(target_user = %user.email, ?action, "admin action applied");
            ctx.save_accounts();
        }
        Err(err) => ctx.notifications.push(Notification::error(err.i18n_key())),
    }
}

pub fn handle_admin_message(ctx: &mut UpdateContext<'_>, message: admin::Message) -> Task<Message> {
    if !ctx.is_admin() {
        return navigate(ctx, Screen::Home);
    }

    match admin::update(ctx.admin, message) {
        AdminEvent::None => {}
        AdminEvent::SiteApplied(settings) => {
            tracing::info!(site = %settings.site_name, "site settings updated");
            ctx.config.site = settings;
            ctx.save_config();
            ctx.notifications
                .push(Notification::success("notification-site-saved"));
        }
        AdminEvent::SiteRejected(key) => ctx.notifications.push(Notification::error(key)),
        AdminEvent::RevertRequested => ctx.admin.reset(&ctx.config.site),
        AdminEvent::DiagnosticRequested => {
            let storage_ok = ctx.save_accounts();
            let diagnostic = Diagnostic::run(storage_ok, ctx.accounts.users(), &ctx.config.site);
            tracing::info!(?diagnostic, "system check");
            ctx.admin.set_diagnostic(diagnostic);
        }
        AdminEvent::UserAction { id, action } => apply_admin_action(ctx, &id, action),
    }
    Task::none()
}
