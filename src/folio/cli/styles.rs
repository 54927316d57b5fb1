use console::Style;
use folio::prefs::ColorScheme;
use swatch::{rgb_to_ansi256, AdaptivePalette, Palette, Rgb};

pub mod names {
    pub const TITLE: &str = "title";
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const ACCENT: &str = "accent";
    pub const TAG: &str = "tag";
    pub const MUTED: &str = "muted";
    pub const RATING: &str = "rating";
    pub const LINK: &str = "link";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

struct Tones {
    muted: Rgb,
    link: Rgb,
}

const LIGHT: Tones = Tones {
    muted: (107, 114, 128),
    link: (37, 99, 235),
};

const DARK: Tones = Tones {
    muted: (156, 163, 175),
    link: (96, 165, 250),
};

/// Light and dark palettes tinted with the chosen accent color.
pub fn palette(scheme: ColorScheme) -> AdaptivePalette {
    let accent = rgb_to_ansi256(scheme.rgb());
    AdaptivePalette::new(tinted(accent, &LIGHT), tinted(accent, &DARK))
}

fn tinted(accent: u8, tones: &Tones) -> Palette {
    let muted = rgb_to_ansi256(tones.muted);
    Palette::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::HEADING, Style::new().color256(accent).bold())
        .add(names::LABEL, Style::new().bold())
        .add(names::ACCENT, Style::new().color256(accent))
        .add(names::TAG, Style::new().color256(accent).italic())
        .add(names::MUTED, Style::new().color256(muted))
        .add(names::RATING, Style::new().yellow())
        .add(
            names::LINK,
            Style::new().color256(rgb_to_ansi256(tones.link)).underlined(),
        )
        .add(names::INFO, Style::new().color256(muted))
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
}
