// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Toasts appear as small cards with a kind-colored accent border, a glyph,
//! the message text, a linear countdown bar, and a dismiss button. The
//! overlay stacks all current toasts in the toaster's corner, newest on top.

use super::position::Corner;
use super::toast::{Phase, Toast, ToastKind};
use super::toaster::{Message, Toaster};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::widget::{
    button, container, mouse_area, progress_bar, svg, text, Column, Container, Row, Text,
};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Renders a single toast card.
///
/// The returned element owns everything it displays, so it can outlive
/// the toast it was built from.
pub fn view_toast(toast: &Toast) -> Element<'static, Message> {
    let phase = toast.phase();
    let kind = toast.kind();
    let id = toast.id();

    // Entrance and exit play as a dimmed state; full opacity while visible
    let alpha = match phase {
        Phase::Entering | Phase::Exiting | Phase::Finished => opacity::TRANSITION,
        Phase::Visible => opacity::OPAQUE,
    };
    let accent = Color {
        a: alpha,
        ..kind.color()
    };

    let icon_widget = icons::sized(kind_icon(kind), sizing::ICON_MD)
        .style(move |_theme: &Theme, _status| svg::Style {
            color: Some(accent),
        });

    let message_widget = Text::new(toast.message().to_owned())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [icon] [message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon_widget).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    let mut card = Column::new();
    if !toast.is_persistent() && phase == Phase::Visible {
        let remaining = toast.countdown_remaining();
        card = card.push(
            progress_bar(0.0..=1.0, remaining)
                .length(Length::Fill)
                .girth(sizing::COUNTDOWN_HEIGHT)
                .style(move |_theme: &Theme| countdown_bar_style(accent)),
        );
    }
    card = card.push(Container::new(content).padding(spacing::SM));

    let styled = Container::new(card)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .style(move |theme: &Theme| toast_container_style(theme, accent));

    // Translate the card by the current swipe offset
    let offset = toast.swipe().offset();
    let shifted = Container::new(styled).padding(Padding {
        top: 0.0,
        right: (-offset).max(0.0),
        bottom: 0.0,
        left: offset.max(0.0),
    });

    mouse_area(shifted)
        .on_press(Message::SwipeStarted(id))
        .on_release(Message::SwipeEnded(id))
        .on_move(move |point| Message::SwipeMoved(id, point.x))
        .into()
}

/// Renders the overlay with all current toasts, stacked in the toaster's
/// corner with the newest on top.
pub fn view_overlay(toaster: &Toaster) -> Element<'static, Message> {
    let toasts: Vec<Element<'static, Message>> = toaster.toasts().map(view_toast).collect();

    if toasts.is_empty() {
        // Return an empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let corner = toaster.corner();
    let (align_x, align_y) = corner_alignment(corner);

    let toast_column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(align_x);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(spacing::MD)
        .into()
}

/// Returns the appropriate glyph for the toast kind.
fn kind_icon(kind: ToastKind) -> Svg<'static> {
    match kind {
        ToastKind::Success => icons::checkmark(),
        ToastKind::Info => icons::info(),
        ToastKind::Warning => icons::warning(),
        ToastKind::Error => icons::error(),
    }
}

fn corner_alignment(corner: Corner) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match corner.side() {
        super::position::Side::Left => alignment::Horizontal::Left,
        super::position::Side::Right => alignment::Horizontal::Right,
    };
    let vertical = if corner.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Style function for the toast card container.
fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the countdown bar.
fn countdown_bar_style(accent: Color) -> progress_bar::Style {
    progress_bar::Style {
        background: iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        }),
        bar: iced::Background::Color(accent),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
    };
    let text_color = match status {
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base.text
        },
        _ => base.text,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
