// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface for the search bar, gallery and dialogs.
///
/// Derived from the active Iced `Theme` background so panels stay readable in
/// both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Frame around one gallery slide.
pub fn slide(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dialog card of the blocking notice, with an error accent border.
pub fn notice(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..panel(theme)
    }
}
