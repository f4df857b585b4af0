// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the reel and the content screens.

## Organization

- **Palette**: Stage, text and glitch colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Dots, thumbnails and content widths
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use scene_reel::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let veil = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::STAGE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Reel stage
    pub const STAGE: Color = Color::from_rgb(0.02, 0.02, 0.03);
    pub const STAGE_RAISED: Color = Color::from_rgb(0.07, 0.07, 0.09);

    // Fallback gradients, one pair per scene slot
    pub const GRADIENT_A: [Color; 2] = [
        Color::from_rgb(0.05, 0.07, 0.16),
        Color::from_rgb(0.01, 0.01, 0.03),
    ];
    pub const GRADIENT_B: [Color; 2] = [
        Color::from_rgb(0.16, 0.04, 0.10),
        Color::from_rgb(0.02, 0.01, 0.02),
    ];
    pub const GRADIENT_C: [Color; 2] = [
        Color::from_rgb(0.03, 0.13, 0.12),
        Color::from_rgb(0.01, 0.02, 0.02),
    ];

    // Glitch pulse channels
    pub const GLITCH_CYAN: Color = Color::from_rgb(0.0, 0.95, 1.0);
    pub const GLITCH_MAGENTA: Color = Color::from_rgb(1.0, 0.1, 0.7);

    // Accent
    pub const ACCENT_400: Color = Color::from_rgb(0.55, 0.95, 1.0);
    pub const ACCENT_500: Color = Color::from_rgb(0.3, 0.85, 0.95);
    pub const ACCENT_600: Color = Color::from_rgb(0.2, 0.65, 0.75);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Text over scene imagery.
    pub const TEXT_MUTED: f32 = 0.65;

    /// Peak alpha of the glitch pulse bands.
    pub const PULSE_PEAK: f32 = 0.55;

    /// Surface background - content screen panels
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Navigation strip
    pub const DOT: f32 = 10.0;
    pub const DOT_ACTIVE: f32 = 14.0;
    /// Width reserved per dot including its label.
    pub const DOT_SLOT_WIDTH: f32 = 148.0;
    pub const NAV_STRIP_HEIGHT: f32 = 56.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Content screens
    pub const CONTENT_MAX_WIDTH: f32 = 880.0;
    pub const THUMBNAIL: f32 = 200.0;
    pub const BANNER_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: reel scene headings
    //! - Titles: content screen headings
    //! - Body: primary content text
    //! - Caption: labels, counters, eyebrows

    /// Reel scene heading
    pub const DISPLAY: f32 = 56.0;

    /// Large title - content screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - vita years, subtitles
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - vita entries
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - teasers, form inputs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Small body - hints
    pub const BODY_SM: f32 = 13.0;

    /// Caption - dot labels, eyebrows, counters
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Soft halo around the active navigation dot.
    pub const GLOW: Shadow = Shadow {
        color: palette::ACCENT_500,
        offset: Vector::ZERO,
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PULSE_PEAK > 0.0 && opacity::PULSE_PEAK < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::DOT_ACTIVE > sizing::DOT);
    assert!(sizing::DOT_SLOT_WIDTH > sizing::DOT_ACTIVE);
    assert!(sizing::NAV_STRIP_HEIGHT > sizing::DOT_ACTIVE);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
