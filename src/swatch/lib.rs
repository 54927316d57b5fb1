//! # Swatch - Styled Terminal Templates
//!
//! Swatch renders terminal output from [minijinja](https://docs.rs/minijinja) templates
//! and applies named styles through a `style` filter. Styles are grouped into a
//! [`Palette`], and an [`AdaptivePalette`] pairs a light and a dark palette that is
//! resolved against the current [`Appearance`].
//!
//! ## Quick Example
//!
//! ```rust
//! use swatch::{render_with_color, Palette, PaletteChoice};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Row {
//!     title: String,
//!     downloads: String,
//! }
//!
//! let palette = Palette::new()
//!     .add("title", Style::new().bold())
//!     .add("muted", Style::new().dim());
//!
//! let template = r#"{{ title | style("title") }} {{ downloads | style("muted") }}"#;
//! let row = Row { title: "VLSI".into(), downloads: "567".into() };
//! let output = render_with_color(template, &row, PaletteChoice::from(&palette), false).unwrap();
//! assert_eq!(output, "VLSI 567");
//! ```
//!
//! ## Appearance
//!
//! [`Appearance::detect`] asks the operating environment whether it prefers a dark
//! appearance (via `dark-light`). Tests and headless callers can replace the detector with
//! [`set_appearance_detector`].
//!
//! ## Unknown Styles
//!
//! A style name that is not registered renders the text unstyled. A non-empty
//! [`Styles::missing_indicator`] can be set to flag template typos during development.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// An RGB triplet.
pub type Rgb = (u8, u8, u8);

/// A registry of named styles.
#[derive(Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text prepended when a style name is not registered. Empty by default.
    ///
    /// ```rust
    /// use swatch::Styles;
    ///
    /// let styles = Styles::new().missing_indicator("(?)");
    /// assert_eq!(styles.apply("nope", "Hello"), "(?) Hello");
    /// ```
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds or replaces a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style to text.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => self.unknown(text),
        }
    }

    /// Resolves the style name but emits no ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.unknown(text)
        }
    }

    fn unknown(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A named set of styles used by the `style` template filter.
#[derive(Clone, Default)]
pub struct Palette {
    styles: Styles,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles = self.styles.add(name, style);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// Light or dark terminal appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }

    /// Current environment preference, as reported by the installed detector.
    pub fn detect() -> Self {
        let detector = APPEARANCE_DETECTOR
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (*detector)()
    }
}

type AppearanceDetector = fn() -> Appearance;

fn system_appearance() -> Appearance {
    Appearance::from_dark(matches!(dark_light::detect(), dark_light::Mode::Dark))
}

static APPEARANCE_DETECTOR: Lazy<Mutex<AppearanceDetector>> =
    Lazy::new(|| Mutex::new(system_appearance));

/// Replaces the detector used by [`Appearance::detect`].
pub fn set_appearance_detector(detector: AppearanceDetector) {
    let mut guard = APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// A pair of palettes picked by appearance.
#[derive(Clone)]
pub struct AdaptivePalette {
    light: Palette,
    dark: Palette,
}

impl AdaptivePalette {
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    pub fn for_appearance(&self, appearance: Appearance) -> &Palette {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }
}

/// Either a fixed palette, an adaptive palette resolved by detection, or an adaptive
/// palette pinned to a known appearance.
pub enum PaletteChoice<'a> {
    Fixed(&'a Palette),
    Adaptive(&'a AdaptivePalette),
    Pinned(&'a AdaptivePalette, Appearance),
}

impl PaletteChoice<'_> {
    fn resolve(&self) -> Palette {
        match self {
            PaletteChoice::Fixed(palette) => (*palette).clone(),
            PaletteChoice::Adaptive(adaptive) => {
                adaptive.for_appearance(Appearance::detect()).clone()
            }
            PaletteChoice::Pinned(adaptive, appearance) => {
                adaptive.for_appearance(*appearance).clone()
            }
        }
    }
}

impl<'a> From<&'a Palette> for PaletteChoice<'a> {
    fn from(palette: &'a Palette) -> Self {
        PaletteChoice::Fixed(palette)
    }
}

impl<'a> From<&'a AdaptivePalette> for PaletteChoice<'a> {
    fn from(adaptive: &'a AdaptivePalette) -> Self {
        PaletteChoice::Adaptive(adaptive)
    }
}

/// Renders a one-off template, using color when stdout supports it.
pub fn render<T: Serialize>(
    template: &str,
    data: &T,
    palette: PaletteChoice<'_>,
) -> Result<String, Error> {
    let use_color = Term::stdout().features().colors_supported();
    render_with_color(template, data, palette, use_color)
}

/// Renders a one-off template with explicit color control.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    palette: PaletteChoice<'_>,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_filters(&mut env, palette.resolve(), use_color);
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    env.get_template("_inline")?.render(data)
}

/// A set of named templates compiled once and rendered by name.
///
/// ```rust
/// use swatch::{Palette, PaletteChoice, Renderer};
/// use console::Style;
///
/// let palette = Palette::new().add("count", Style::new().cyan());
/// let mut renderer = Renderer::with_color(PaletteChoice::from(&palette), false);
/// renderer.add_template("total", r#"{{ n | style("count") }} results"#).unwrap();
///
/// # #[derive(serde::Serialize)]
/// # struct Total { n: usize }
/// assert_eq!(renderer.render("total", &Total { n: 3 }).unwrap(), "3 results");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(palette: PaletteChoice<'_>) -> Self {
        let use_color = Term::stdout().features().colors_supported();
        Self::with_color(palette, use_color)
    }

    pub fn with_color(palette: PaletteChoice<'_>, use_color: bool) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, palette.resolve(), use_color);
        Self { env }
    }

    /// Compiles and registers a template under `name`.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

fn register_filters(env: &mut Environment<'static>, palette: Palette, use_color: bool) {
    let styles = palette.styles;
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            styles.apply(&name, &text)
        } else {
            styles.apply_plain(&name, &text)
        }
    });
}

/// Nearest ANSI 256-color palette index for an RGB triplet.
pub fn rgb_to_ansi256((r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        title: String,
    }

    fn row(title: &str) -> Row {
        Row {
            title: title.into(),
        }
    }

    #[test]
    fn unknown_style_renders_plain_text() {
        let styles = Styles::new();
        assert_eq!(styles.apply("missing", "hello"), "hello");
        assert_eq!(styles.apply_plain("missing", "hello"), "hello");
    }

    #[test]
    fn missing_indicator_flags_unknown_styles() {
        let styles = Styles::new().missing_indicator("[?]");
        assert_eq!(styles.apply("missing", "hello"), "[?] hello");
    }

    #[test]
    fn styles_replace_by_name() {
        let styles = Styles::new()
            .add("x", Style::new().red())
            .add("x", Style::new().green());
        assert_eq!(styles.len(), 1);
        assert!(styles.has("x"));
    }

    #[test]
    fn known_style_emits_ansi_when_colored() {
        let styles = Styles::new().add("bold", Style::new().bold().force_styling(true));
        let out = styles.apply("bold", "hello");
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("hello"));
    }

    #[test]
    fn render_without_color_is_plain() {
        let palette = Palette::new().add("title", Style::new().red());
        let out = render_with_color(
            r#"{{ title | style("title") }}"#,
            &row("Clean Code"),
            PaletteChoice::from(&palette),
            false,
        )
        .unwrap();
        assert_eq!(out, "Clean Code");
    }

    #[test]
    fn render_loops_over_json_values() {
        let palette = Palette::new().add("tag", Style::new().cyan());
        let data = serde_json::json!({ "tags": ["AWS", "Docker"] });
        let out = render_with_color(
            r#"{% for t in tags %}[{{ t | style("tag") }}]{% endfor %}"#,
            &data,
            PaletteChoice::from(&palette),
            false,
        )
        .unwrap();
        assert_eq!(out, "[AWS][Docker]");
    }

    #[test]
    fn syntax_errors_surface() {
        let palette = Palette::new();
        let result = render_with_color(
            "{{ unclosed",
            &row("x"),
            PaletteChoice::from(&palette),
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn renderer_renders_registered_templates() {
        let palette = Palette::new().add("a", Style::new().red());
        let mut renderer = Renderer::with_color(PaletteChoice::from(&palette), false);
        renderer
            .add_template("line", r#"* {{ title | style("a") }}"#)
            .unwrap();
        assert_eq!(renderer.render("line", &row("VLSI")).unwrap(), "* VLSI");
        assert!(renderer.render("absent", &row("VLSI")).is_err());
    }

    #[test]
    fn pinned_choice_uses_given_appearance() {
        let light = Palette::new().add("tone", Style::new().green().force_styling(true));
        let dark = Palette::new().add("tone", Style::new().red().force_styling(true));
        let adaptive = AdaptivePalette::new(light, dark);

        let dark_out = render_with_color(
            r#"{{ title | style("tone") }}"#,
            &row("hi"),
            PaletteChoice::Pinned(&adaptive, Appearance::Dark),
            true,
        )
        .unwrap();
        assert!(dark_out.contains("\x1b[31"));

        let light_out = render_with_color(
            r#"{{ title | style("tone") }}"#,
            &row("hi"),
            PaletteChoice::Pinned(&adaptive, Appearance::Light),
            true,
        )
        .unwrap();
        assert!(light_out.contains("\x1b[32"));
    }

    #[test]
    fn adaptive_choice_consults_detector() {
        set_appearance_detector(|| Appearance::Dark);
        assert_eq!(Appearance::detect(), Appearance::Dark);
        set_appearance_detector(|| Appearance::Light);
        assert_eq!(Appearance::detect(), Appearance::Light);
    }

    #[test]
    fn rgb_to_ansi256_maps_grays_and_cube() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
        assert!((232..=255).contains(&rgb_to_ansi256((128, 128, 128))));
    }
}
