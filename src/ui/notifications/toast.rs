// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the displayed request.
//!
//! The surface holds no state. It renders the scheduler's visible toast, or
//! nothing, as a translucent pill anchored to the top or bottom edge.

use super::provider::Message;
use super::request::ActiveToast;
use crate::config::{BlurType, Position, ToastConfig, MAX_BLUR_INTENSITY};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view<'a>(active: &'a ActiveToast, config: &'a ToastConfig) -> Element<'a, Message> {
        let blur_type = config.blur_type;
        let blur_intensity = config.blur_intensity;
        let request = active.request();

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if request.is_success() {
            content = content.push(
                Text::new("✓")
                    .size(sizing::ICON_MD)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::SUCCESS_500),
                    }),
            );
        }

        content = content.push(
            Container::new(
                Text::new(active.message())
                    .size(typography::BODY)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(text_color(theme, blur_type)),
                    }),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left),
        );

        if let Some(action) = request.action().filter(|a| !a.label().is_empty()) {
            let label = Text::new(action.label()).size(typography::BODY);
            content = content.push(
                button(label)
                    .on_press(Message::ActionPressed(active.id()))
                    .padding(Padding {
                        top: spacing::XXS + 2.0,
                        right: spacing::SM,
                        bottom: spacing::XXS + 2.0,
                        left: spacing::SM,
                    })
                    .style(action_button_style),
            );
        }

        Container::new(content)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding(Padding {
                top: spacing::MD,
                right: spacing::LG,
                bottom: spacing::MD,
                left: spacing::LG,
            })
            .style(move |theme: &Theme| toast_container_style(theme, blur_type, blur_intensity))
            .into()
    }

    /// Renders the overlay layer: the displayed toast anchored to its edge,
    /// or an empty container that takes no space.
    pub fn view_overlay<'a>(
        displayed: Option<&'a ActiveToast>,
        config: &'a ToastConfig,
    ) -> Element<'a, Message> {
        let Some(active) = displayed else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let position = active.position();
        let inset = config.insets.for_position(position);
        let padding = match position {
            Position::Top => Padding {
                top: inset + spacing::MD,
                right: spacing::MD,
                bottom: 0.0,
                left: spacing::MD,
            },
            Position::Bottom => Padding {
                top: 0.0,
                right: spacing::MD,
                bottom: inset + spacing::MD,
                left: spacing::MD,
            },
        };

        Container::new(Self::view(active, config))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(vertical_alignment(position))
            .padding(padding)
            .into()
    }
}

fn vertical_alignment(position: Position) -> alignment::Vertical {
    match position {
        Position::Top => alignment::Vertical::Top,
        Position::Bottom => alignment::Vertical::Bottom,
    }
}

/// Colour of the translucent surface. Higher blur intensity gives a more
/// opaque surface.
fn surface_color(theme: &Theme, blur_type: BlurType, blur_intensity: f32) -> Color {
    let base = match blur_type {
        BlurType::Light => palette::WHITE,
        BlurType::Dark => palette::GRAY_900,
        BlurType::Default => theme.extended_palette().background.base.color,
    };
    let t = (blur_intensity / MAX_BLUR_INTENSITY).clamp(0.0, 1.0);
    Color {
        a: opacity::SURFACE_MIN + (opacity::SURFACE_MAX - opacity::SURFACE_MIN) * t,
        ..base
    }
}

fn text_color(theme: &Theme, blur_type: BlurType) -> Color {
    match blur_type {
        BlurType::Light => palette::GRAY_900,
        BlurType::Dark => palette::WHITE,
        BlurType::Default => theme.palette().text,
    }
}

fn toast_container_style(theme: &Theme, blur_type: BlurType, blur_intensity: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(surface_color(
            theme,
            blur_type,
            blur_intensity,
        ))),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::TOAST,
        text_color: Some(text_color(theme, blur_type)),
        ..Default::default()
    }
}

fn action_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_100,
        button::Status::Active | button::Status::Disabled => palette::WHITE,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::PRIMARY_500,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
