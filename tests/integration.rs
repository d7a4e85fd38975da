// SPDX-License-Identifier: MPL-2.0
use neo_enhance::app::config::{self, Config};
use neo_enhance::domain::account::{AccountBook, AccountError, AdminAction, Credentials, UserRole};
use neo_enhance::domain::enhance::{EnhanceRequest, ImageSize, STYLES};
use neo_enhance::i18n::I18n;
use neo_enhance::infrastructure::{account_store, gemini};
use neo_enhance::ui::comparison::state::{Effect, Message};
use neo_enhance::ui::comparison::{FrameBounds, Interaction, Phase};
use tempfile::tempdir;

const ADMIN: &str = "admin@neoenhance.local";

fn frame() -> FrameBounds {
    FrameBounds::new(100.0, 400.0)
}

fn move_to(x: f32) -> Message {
    Message::Move { x, frame: frame() }
}

#[test]
fn slider_drag_scenario() {
    let mut slider = Interaction::default();
    assert_eq!(slider.position().value(), 50.0);
    assert_eq!(slider.phase(), Phase::Idle);

    assert_eq!(slider.handle(Message::Press), Effect::None);
    assert_eq!(slider.position().value(), 50.0);

    slider.handle(move_to(300.0));
    assert_eq!(slider.position().value(), 50.0);

    assert_eq!(slider.handle(move_to(500.0)), Effect::Redraw);
    assert_eq!(slider.position().value(), 100.0);

    slider.handle(Message::Release);
    assert_eq!(slider.phase(), Phase::Idle);

    assert_eq!(slider.handle(move_to(150.0)), Effect::None);
    assert_eq!(slider.position().value(), 100.0);
}

#[test]
fn slider_clamps_left_of_frame() {
    let mut slider = Interaction::default();
    slider.handle(Message::Press);
    slider.handle(move_to(-250.0));
    assert_eq!(slider.position().value(), 0.0);
}

#[test]
fn slider_ignores_zero_width_frame() {
    let mut slider = Interaction::default();
    slider.handle(Message::Press);
    let effect = slider.handle(Message::Move {
        x: 120.0,
        frame: FrameBounds::new(100.0, 0.0),
    });
    assert_eq!(effect, Effect::None);
    assert_eq!(slider.position().value(), 50.0);
}

#[test]
fn account_lifecycle_survives_a_restart() {
    let dir = tempdir().expect("temp dir");

    let mut book = AccountBook::default();
    book.signup(
        &Credentials {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
        },
        ADMIN,
        1_700_000_000_000,
    )
    .expect("signup");
    book.deduct_credit().expect("charge");
    assert!(account_store::save_to(&book, Some(dir.path())).is_none());

    let (mut restored, warning) = account_store::load_from(Some(dir.path()));
    assert!(warning.is_none());
    assert_eq!(restored, book);
    assert_eq!(restored.current_user().map(|user| user.credits), Some(4));

    restored.logout();
    assert_eq!(
        restored.login("ada@example.com", "wrong").unwrap_err(),
        AccountError::InvalidPassword
    );
    assert!(restored.login("ADA@example.com ", "pw").is_ok());
}

#[test]
fn admin_moderates_another_account() {
    let mut book = AccountBook::default();
    let credentials = |email: &str| Credentials {
        name: String::new(),
        email: email.into(),
        password: "pw".into(),
    };

    let member_id = book
        .signup(&credentials("member@example.com"), ADMIN, 1)
        .expect("member")
        .id
        .clone();
    book.signup(&credentials(ADMIN), ADMIN, 2).expect("admin");

    book.admin_action(&member_id, AdminAction::SetRole(UserRole::Vip))
        .expect("role");
    book.admin_action(&member_id, AdminAction::ToggleSuspend)
        .expect("suspend");
    book.logout();

    assert_eq!(
        book.login("member@example.com", "pw").unwrap_err(),
        AccountError::Suspended
    );
    let member = book.find(&member_id).expect("member exists");
    assert_eq!(member.role, UserRole::Vip);
    assert_eq!(member.name, "New Operator");
}

#[test]
fn site_settings_persist_in_settings_toml() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.site.site_name = "PixelForge".into();
    config.site.theme_primary = "#ff0000".into();
    config.general.language = Some("fr".into());
    config::save_to_path(&config, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, config);

    let i18n = I18n::new(None, loaded.general.language.as_deref());
    assert_eq!(i18n.tr("comparison-enhanced"), "Amélioré");
}

#[test]
fn youtube_style_request_is_widescreen() {
    let style = STYLES
        .iter()
        .find(|style| style.id == "youtube_viral")
        .expect("style");
    let request = EnhanceRequest::new(vec![0x89, b'P'], style.prompt, "", ImageSize::default());
    let body = gemini::request_body(&request);

    assert_eq!(
        body["generationConfig"]["imageConfig"]["aspectRatio"],
        "16:9"
    );
    assert_eq!(body["generationConfig"]["imageConfig"]["imageSize"], "4K");
}
