// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors and measurements shared by the profile screen.

- **Palette**: brand green, grays and toast accents
- **Opacity**: pressed feedback and toast background
- **Spacing**: 4px grid
- **Sizing**: avatar, icons, dots and window
- **Typography**: font sizes from title to caption
- **Radius** and **Shadow**

```
use profile_deck::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let pressed = Color {
    a: opacity::PRESSED,
    ..palette::SEA_GREEN
};
assert_eq!(spacing::MD, 16.0);
```
"#]

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Secondary text and inactive tabs (#afb2b1).
    pub const GRAY: Color = Color::from_rgb(0.686, 0.698, 0.694);
    /// Screen background.
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.95);
    /// Image placeholders and separators.
    pub const GRAY_200: Color = Color::from_rgb(0.88, 0.88, 0.88);

    /// Brand green: header, active tab, switches (#1ec270).
    pub const SEA_GREEN: Color = Color::from_rgb(0.118, 0.761, 0.439);
    /// Avatar fallback circle (#c2f9dc).
    pub const WHITE_GREEN: Color = Color::from_rgb(0.761, 0.976, 0.863);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    /// Also the toast background.
    pub const INFO_500: Color = Color::from_rgb(0.2, 0.2, 0.2);
}

pub mod opacity {
    pub const PRESSED: f32 = 0.7;
    pub const TOAST: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const BACK_BUTTON: f32 = 40.0;
    pub const AVATAR: f32 = 100.0;
    /// Icon in an application row.
    pub const APP_ICON: f32 = 40.0;
    /// Pagination dot diameter before scaling.
    pub const DOT: f32 = 8.0;
    pub const TOAST_WIDTH: f32 = 300.0;

    /// Phone-sized default window.
    pub const WINDOW_WIDTH: f32 = 420.0;
    pub const WINDOW_HEIGHT: f32 = 820.0;
}

pub mod typography {
    /// Profile name.
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    /// Tab labels and list rows.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 20.0;
    /// Circles and pills.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::PRESSED < opacity::TOAST);
    assert!(opacity::TOAST < opacity::OPAQUE);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::AVATAR > sizing::APP_ICON);
    assert!(sizing::TOAST_WIDTH < sizing::WINDOW_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_the_grid() {
        for step in [spacing::XS, spacing::SM, spacing::MD, spacing::LG, spacing::XL] {
            assert_eq!(step % 4.0, 0.0);
        }
    }

    #[test]
    fn brand_green_is_green() {
        let green = palette::SEA_GREEN;
        assert!(green.g > green.r && green.g > green.b);
    }
}
