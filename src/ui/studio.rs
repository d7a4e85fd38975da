// SPDX-License-Identifier: MPL-2.0
//! Enhancement studio: source image, style, instructions and the result.
//!
//! The screen only tracks what is on display. Charging credits and running
//! the enhancer belong to the application, which reacts to
//! [`Event::EnhanceRequested`] and reports back through
//! [`State::finish`].

use crate::domain::account::User;
use crate::domain::enhance::{EnhanceRequest, EnhancementStyle, ImageSize, STYLES};
use crate::i18n::I18n;
use crate::ui::comparison::{self, Labels};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{self, Handle};
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

const SOURCE_PREVIEW_HEIGHT: f32 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Compare,
    ResultOnly,
}

/// A loaded source image: PNG bytes for the enhancer and a display handle.
#[derive(Debug, Clone)]
struct Source {
    png: Vec<u8>,
    handle: Handle,
}

#[derive(Debug, Clone)]
pub struct State {
    source: Option<Source>,
    style: &'static EnhancementStyle,
    instructions: String,
    processing: bool,
    result: Option<Handle>,
    view_mode: ViewMode,
    error_key: Option<&'static str>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            source: None,
            style: &STYLES[0],
            instructions: String::new(),
            processing: false,
            result: None,
            view_mode: ViewMode::default(),
            error_key: None,
        }
    }
}

impl State {
    /// Replaces the source image and drops any previous result.
    pub fn set_source(&mut self, png: Vec<u8>) {
        let handle = Handle::from_bytes(png.clone());
        self.source = Some(Source { png, handle });
        self.result = None;
        self.error_key = None;
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    #[must_use]
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn style(&self) -> &'static EnhancementStyle {
        self.style
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.error_key
    }

    /// Builds the request for the current source, style and instructions,
    /// and marks the studio busy. Returns `None` without a source or while a
    /// run is already in flight.
    pub fn start(&mut self, image_size: ImageSize) -> Option<EnhanceRequest> {
        if self.processing {
            return None;
        }
        let source = self.source.as_ref()?;
        let request = EnhanceRequest::new(
            source.png.clone(),
            self.style.prompt,
            &self.instructions,
            image_size,
        );
        self.processing = true;
        self.error_key = None;
        Some(request)
    }

    /// Records the outcome of a run started with [`start`](Self::start).
    pub fn finish(&mut self, outcome: Result<Vec<u8>, &'static str>) {
        self.processing = false;
        match outcome {
            Ok(bytes) => {
                self.result = Some(Handle::from_bytes(bytes));
                self.view_mode = ViewMode::Compare;
            }
            Err(key) => self.error_key = Some(key),
        }
    }

    /// Cancels a run that never reached the enhancer.
    pub fn abort(&mut self, error_key: &'static str) {
        self.processing = false;
        self.error_key = Some(error_key);
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub user: Option<&'a User>,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenImage,
    StyleSelected(&'static str),
    InstructionsChanged(String),
    Enhance,
    ViewModeSelected(ViewMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    OpenImageRequested,
    EnhanceRequested,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::OpenImage => Event::OpenImageRequested,
        Message::StyleSelected(id) => {
            if let Some(style) = EnhancementStyle::by_id(id) {
                state.style = style;
            }
            Event::None
        }
        Message::InstructionsChanged(value) => {
            state.instructions = value;
            Event::None
        }
        Message::Enhance => {
            if state.has_source() && !state.processing {
                Event::EnhanceRequested
            } else {
                Event::None
            }
        }
        Message::ViewModeSelected(mode) => {
            state.view_mode = mode;
            Event::None
        }
    }
}

/// Credits line under the enhance button.
#[must_use]
pub fn credits_label(i18n: &I18n, user: Option<&User>) -> String {
    match user {
        Some(user) if user.has_unlimited_credits() => i18n.tr("studio-credits-unlimited"),
        Some(user) => {
            let count = user.credits.to_string();
            i18n.tr_with_args("studio-credits-left", &[("count", count.as_str())])
        }
        None => i18n.tr("studio-signed-out"),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .push(sidebar(&ctx))
        .push(stage(&ctx))
        .into()
}

fn sidebar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let i18n = ctx.i18n;

    let preview: Element<'a, Message> = match &state.source {
        Some(source) => image::Image::new(source.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(SOURCE_PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(i18n.tr("studio-select-source")).size(typography::CAPTION))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(SOURCE_PREVIEW_HEIGHT))
            .into(),
    };

    let source_section = section(
        i18n.tr("studio-step-source"),
        button(preview)
            .width(Length::Fill)
            .padding(0)
            .style(button::text)
            .on_press_maybe((!state.processing).then_some(Message::OpenImage)),
    );

    let styles_list = STYLES.iter().fold(Column::new().spacing(spacing::XS), |column, style| {
        let label = Column::new()
            .push(Text::new(format!("{} {}", style.icon, style.name)).size(typography::BODY))
            .push(Text::new(style.description).size(typography::CAPTION));
        let selected = style.id == state.style.id;
        column.push(
            button(label)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::choice(selected))
                .on_press(Message::StyleSelected(style.id)),
        )
    });

    let instructions = text_input(&i18n.tr("studio-instructions-placeholder"), &state.instructions)
        .on_input(Message::InstructionsChanged)
        .padding(spacing::SM);

    let enhance_label = if state.processing {
        i18n.tr("studio-enhancing")
    } else {
        i18n.tr("studio-enhance-button")
    };
    let enhance = button(Container::new(Text::new(enhance_label)).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::button::selected)
        .on_press_maybe(
            (state.has_source() && !state.processing).then_some(Message::Enhance),
        );

    let mut column = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .push(source_section)
        .push(section(i18n.tr("studio-step-style"), styles_list))
        .push(section(i18n.tr("studio-step-instructions"), instructions))
        .push(enhance)
        .push(Text::new(credits_label(i18n, ctx.user)).size(typography::CAPTION));

    if let Some(key) = state.error_key {
        column = column.push(
            Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
                .padding(spacing::SM)
                .style(styles::container::pill(palette::ERROR_500)),
        );
    }

    column.into()
}

fn stage<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let i18n = ctx.i18n;

    let mode_button = |mode: ViewMode, key: &str| {
        button(Text::new(i18n.tr(key)).size(typography::BODY))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::choice(state.view_mode == mode))
            .on_press(Message::ViewModeSelected(mode))
    };

    let toggle = Container::new(
        Row::new()
            .spacing(spacing::XXS)
            .push(mode_button(ViewMode::Compare, "studio-view-compare"))
            .push(mode_button(ViewMode::ResultOnly, "studio-view-result")),
    )
    .padding(spacing::XXS)
    .style(styles::container::toolbar);

    let height = Length::Fixed(sizing::STUDIO_COMPARISON_HEIGHT);
    let body: Element<'a, Message> = match (&state.result, &state.source) {
        (Some(result), Some(source)) if state.view_mode == ViewMode::Compare => comparison::view(
            &source.handle,
            result,
            Labels {
                before: i18n.tr("comparison-original"),
                after: i18n.tr("comparison-enhanced"),
            },
            height,
        ),
        (Some(result), _) => image::Image::new(result.clone())
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Contain)
            .into(),
        (None, _) => {
            let key = if state.processing {
                "studio-processing"
            } else {
                "studio-standby"
            };
            Container::new(Text::new(i18n.tr(key)).size(typography::TITLE_MD))
                .center_x(Length::Fill)
                .center_y(height)
                .into()
        }
    };

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(toggle)
        .push(
            Container::new(body)
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(styles::container::card),
        )
        .into()
}

fn section<'a>(title: String, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title.to_uppercase()).size(typography::CAPTION))
        .push(content)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> State {
        let mut state = State::default();
        state.set_source(vec![1, 2, 3]);
        state
    }

    #[test]
    fn enhance_requires_a_source() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Enhance), Event::None);
        assert!(state.start(ImageSize::default()).is_none());
    }

    #[test]
    fn start_builds_request_and_blocks_reentry() {
        let mut state = loaded();
        update(&mut state, Message::StyleSelected("youtube_viral"));
        update(&mut state, Message::InstructionsChanged("add fog".into()));
        assert_eq!(update(&mut state, Message::Enhance), Event::EnhanceRequested);

        let request = state.start(ImageSize::default()).expect("request");
        assert_eq!(request.image_png, vec![1, 2, 3]);
        assert_eq!(request.aspect_ratio.as_str(), "16:9");
        assert!(request.prompt.contains("add fog"));
        assert!(state.is_processing());

        assert_eq!(update(&mut state, Message::Enhance), Event::None);
        assert!(state.start(ImageSize::default()).is_none());
    }

    #[test]
    fn success_shows_comparison() {
        let mut state = loaded();
        update(&mut state, Message::ViewModeSelected(ViewMode::ResultOnly));
        state.start(ImageSize::default());
        state.finish(Ok(vec![9, 9]));
        assert!(!state.is_processing());
        assert!(state.has_result());
        assert_eq!(state.view_mode(), ViewMode::Compare);
    }

    #[test]
    fn failure_keeps_error_key() {
        let mut state = loaded();
        state.start(ImageSize::default());
        state.finish(Err("error-enhance-safety"));
        assert!(!state.has_result());
        assert_eq!(state.error_key(), Some("error-enhance-safety"));
    }

    #[test]
    fn new_source_clears_result() {
        let mut state = loaded();
        state.start(ImageSize::default());
        state.finish(Ok(vec![9]));
        state.set_source(vec![4]);
        assert!(!state.has_result());
        assert!(state.error_key().is_none());
    }

    #[test]
    fn unknown_style_is_ignored() {
        let mut state = State::default();
        update(&mut state, Message::StyleSelected("nope"));
        assert_eq!(state.style().id, STYLES[0].id);
    }
}
