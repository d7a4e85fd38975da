// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the account book, the site settings, the
//! enhancer and localization, and translates screen events into side effects
//! like persistence or background enhancement runs.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::Enhancer;
use crate::domain::account::AccountBook;
use crate::i18n::I18n;
use crate::infrastructure::account_store;
use crate::ui::home::Showcase;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming;
use crate::ui::{admin, auth, studio};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Explicit settings directory, if one was given on the command line.
    config_dir: Option<PathBuf>,
    accounts: AccountBook,
    data_dir: Option<PathBuf>,
    enhancer: Arc<dyn Enhancer>,
    showcase: Showcase,
    auth: auth::State,
    studio: studio::State,
    admin: admin::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.accounts.current_user().is_some())
            .field("enhancer", &self.enhancer.name())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state with the enhancer described by the
    /// `[enhance]` settings.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, _) = config::load_with_override(config_dir);
        let enhancer: Arc<dyn Enhancer> = Arc::new(config.enhance.enhancer());
        Self::with_enhancer(flags, enhancer)
    }

    /// Initializes application state around an explicit enhancer, and
    /// optionally preloads the source image given on the command line.
    pub fn with_enhancer(flags: Flags, enhancer: Arc<dyn Enhancer>) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.as_deref(), config.general.language.as_deref());

        let data_dir = paths::get_app_data_dir_with_override(flags.data_dir.map(PathBuf::from));
        let (accounts, accounts_warning) = account_store::load_from(data_dir.as_deref());

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, accounts_warning].into_iter().flatten() {
            notifications.push(Notification::warning(key));
        }

        tracing::info!(
            locale = %i18n.current_locale(),
            users = accounts.users().len(),
            signed_in = accounts.current_user().is_some(),
            enhancer = enhancer.name(),
            "application started"
        );

        let mut app = App {
            i18n,
            screen: Screen::Home,
            config,
            config_dir,
            accounts,
            data_dir,
            enhancer,
            showcase: Showcase::generate(),
            auth: auth::State::default(),
            studio: studio::State::default(),
            admin: admin::State::default(),
            notifications,
        };

        let task = match flags.file_path {
            Some(path) => {
                if app.accounts.current_user().is_some() {
                    app.screen = Screen::Studio;
                }
                update::load_source(PathBuf::from(path))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let site = self.config.site.site_name.as_str();
        let screen_key = match self.screen {
            Screen::Home => return site.to_string(),
            Screen::Auth => "window-title-auth",
            Screen::Studio => "window-title-studio",
            Screen::Profile => "window-title-profile",
            Screen::Admin => "window-title-admin",
        };
        format!("{} - {site}", self.i18n.tr(screen_key))
    }

    fn theme(&self) -> Theme {
        theming::site_theme(self.config.general.theme_mode, &self.config.site)
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            config_dir: self.config_dir.as_deref(),
            accounts: &mut self.accounts,
            data_dir: self.data_dir.as_deref(),
            enhancer: &self.enhancer,
            auth: &mut self.auth,
            studio: &mut self.studio,
            admin: &mut self.admin,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Home(message) => update::handle_home_message(&mut ctx, message),
            Message::Auth(message) => update::handle_auth_message(&mut ctx, message),
            Message::Studio(message) => update::handle_studio_message(&mut ctx, message),
            Message::Profile(message) => update::handle_profile_message(&mut ctx, message),
            Message::Admin(message) => update::handle_admin_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::OpenFileDialogResult(Some(path)) | Message::FileDropped(path) => {
                update::load_source(path)
            }
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::SourceLoaded(result) => update::handle_source_loaded(&mut ctx, result),
            Message::EnhanceFinished { charge, result } => {
                update::handle_enhance_finished(&mut ctx, charge, result)
            }
            Message::Tick(_) => {
                ctx.notifications
                    .handle_message(&notifications::Message::Tick);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            site: &self.config.site,
            theme_mode: self.config.general.theme_mode,
            accounts: &self.accounts,
            showcase: &self.showcase,
            auth: &self.auth,
            studio: &self.studio,
            admin: &self.admin,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{EnhanceError, EnhanceResult};
    use crate::domain::account::{CreditCharge, UserRole};
    use crate::domain::enhance::EnhanceRequest;
    use crate::ui::{admin, auth, navbar, profile, studio};
    use futures_util::future::{BoxFuture, FutureExt};
    use tempfile::TempDir;

    struct StubEnhancer;

    impl Enhancer for StubEnhancer {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn enhance(&self, _request: EnhanceRequest) -> BoxFuture<'static, EnhanceResult> {
            async { Ok(vec![7, 7, 7]) }.boxed()
        }
    }

    struct Fixture {
        app: App,
        _data: TempDir,
        _config: TempDir,
    }

    fn fixture() -> Fixture {
        let data = tempfile::tempdir().expect("data dir");
        let config = tempfile::tempdir().expect("config dir");
        let flags = Flags {
            lang: Some("en-US".into()),
            data_dir: Some(data.path().to_string_lossy().into_owned()),
            config_dir: Some(config.path().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (app, _) = App::with_enhancer(flags, Arc::new(StubEnhancer));
        Fixture {
            app,
            _data: data,
            _config: config,
        }
    }

    fn sign_up(app: &mut App, email: &str) {
        let _ = app.update(Message::Navbar(navbar::Message::SignUp));
        let _ = app.update(Message::Auth(auth::Message::NameChanged("Ada".into())));
        let _ = app.update(Message::Auth(auth::Message::EmailChanged(email.into())));
        let _ = app.update(Message::Auth(auth::Message::PasswordChanged("pw".into())));
        let _ = app.update(Message::Auth(auth::Message::Submit));
    }

    fn credits(app: &App) -> u32 {
        app.accounts.current_user().map(|user| user.credits).unwrap_or(0)
    }

    #[test]
    fn starts_on_home_signed_out() {
        let fixture = fixture();
        assert_eq!(fixture.app.screen, Screen::Home);
        assert!(fixture.app.accounts.current_user().is_none());
    }

    #[test]
    fn studio_redirects_to_auth_when_signed_out() {
        let mut fixture = fixture();
        let _ = fixture.app.update(Message::Navbar(navbar::Message::OpenStudio));
        assert_eq!(fixture.app.screen, Screen::Auth);
    }

    #[test]
    fn signup_enters_studio_and_persists() {
        let mut fixture = fixture();
        sign_up(&mut fixture.app, "ada@example.com");
        assert_eq!(fixture.app.screen, Screen::Studio);
        assert_eq!(credits(&fixture.app), 5);

        let (stored, warning) = account_store::load_from(fixture.app.data_dir.as_deref());
        assert!(warning.is_none());
        assert!(stored.find_by_email("ada@example.com").is_some());
    }

    #[test]
    fn enhancement_charges_one_credit_and_shows_result() {
        let mut fixture = fixture();
        sign_up(&mut fixture.app, "ada@example.com");
        fixture.app.studio.set_source(vec![1, 2, 3]);

        let _ = fixture.app.update(Message::Studio(studio::Message::Enhance));
        assert!(fixture.app.studio.is_processing());
        assert_eq!(credits(&fixture.app), 4);

        let _ = fixture.app.update(Message::EnhanceFinished {
            charge: CreditCharge::Charged { remaining: 4 },
            result: Ok(vec![7, 7, 7]),
        });
        assert!(!fixture.app.studio.is_processing());
        assert!(fixture.app.studio.has_result());
        assert_eq!(credits(&fixture.app), 4);
    }

    #[test]
    fn missing_api_key_refunds_the_credit() {
        let mut fixture = fixture();
        sign_up(&mut fixture.app, "ada@example.com");
        fixture.app.studio.set_source(vec![1]);

        let _ = fixture.app.update(Message::Studio(studio::Message::Enhance));
        let _ = fixture.app.update(Message::EnhanceFinished {
            charge: CreditCharge::Charged { remaining: 4 },
            result: Err(EnhanceError::MissingApiKey),
        });

        assert_eq!(credits(&fixture.app), 5);
        assert_eq!(
            fixture.app.studio.error_key(),
            Some("error-enhance-missing-key")
        );
    }

    #[test]
    fn remote_failure_keeps_the_charge() {
        let mut fixture = fixture();
        sign_up(&mut fixture.app, "ada@example.com");
        fixture.app.studio.set_source(vec![1]);

        let _ = fixture.app.update(Message::Studio(studio::Message::Enhance));
        let _ = fixture.app.update(Message::EnhanceFinished {
            charge: CreditCharge::Charged { remaining: 4 },
            result: Err(EnhanceError::SafetyFilter),
        });

        assert_eq!(credits(&fixture.app), 4);
        assert_eq!(fixture.app.studio.error_key(), Some("error-enhance-safety"));
    }

    #[test]
    fn depleted_account_cannot_start() {
        let mut fixture = fixture();
        sign_up(&mut fixture.app, "ada@example.com");
        fixture.app.studio.set_source(vec![1]);

        for _ in 0..5 {
            let _ = fixture.app.update(Message::Studio(studio::Message::Enhance));
            let _ = fixture.app.update(Message::EnhanceFinished {
                charge: CreditCharge::Charged { remaining: 0 },
                result: Err(EnhanceError::NoImageReturned),
            });
        }
        assert_eq!(credits(&fixture.app), 0);

        let _ = fixture.app.update(Message::Studio(studio::Message::Enhance));
        assert!(!fixture.app.studio.is_processing());
        assert_eq!(
            fixture.app.studio.error_key(),
            Some("error-account-credits-depleted")
        );
    }

    #[test]
    fn regular_user_cannot_open_admin() {
        let mut fixture = fixture();
        sign_up(&mut fixture.app, "ada@example.com");
        let _ = fixture.app.update(Message::Navbar(navbar::Message::OpenAdmin));
        assert_eq!(fixture.app.screen, Screen::Studio);
    }

    #[test]
    fn admin_can_unlock_vip_and_apply_site_settings() {
        let mut fixture = fixture();
        let admin_email = fixture.app.config.general.admin_email.clone();
        sign_up(&mut fixture.app, &admin_email);

        let _ = fixture.app.update(Message::Profile(profile::Message::UnlockVip));
        assert_eq!(
            fixture.app.accounts.current_user().map(|user| user.role),
            Some(UserRole::Vip)
        );

        let _ = fixture.app.update(Message::Navbar(navbar::Message::OpenAdmin));
        assert_eq!(fixture.app.screen, Screen::Admin);

        let _ = fixture.app.update(Message::Admin(admin::Message::FieldChanged(
            admin::SiteField::SiteName,
            "PixelForge".into(),
        )));
        let _ = fixture.app.update(Message::Admin(admin::Message::ApplySite));
        assert_eq!(fixture.app.config.site.site_name, "PixelForge");

        let (saved, _) = config::load_with_override(fixture.app.config_dir.clone());
        assert_eq!(saved.site.site_name, "PixelForge");
    }

    #[test]
    fn logout_returns_home_and_clears_studio() {
        let mut fixture = fixture();
        sign_up(&mut fixture.app, "ada@example.com");
        fixture.app.studio.set_source(vec![1]);

        let _ = fixture.app.update(Message::Profile(profile::Message::Logout));
        assert_eq!(fixture.app.screen, Screen::Home);
        assert!(fixture.app.accounts.current_user().is_none());
        assert!(!fixture.app.studio.has_source());
    }

    #[test]
    fn title_names_the_screen() {
        let mut fixture = fixture();
        assert_eq!(fixture.app.title(), "NeoEnhance");
        sign_up(&mut fixture.app, "ada@example.com");
        assert_eq!(fixture.app.title(), "Studio - NeoEnhance");
    }
}
