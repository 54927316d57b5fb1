use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prefs::{AnimationLevel, ColorScheme, Preferences, ThemeMode};
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Show,
    SetTheme(ThemeMode),
    SetColor(ColorScheme),
    SetAnimation(AnimationLevel),
    ToggleTheme,
}

pub fn run<S: KeyValueStore>(prefs: &mut Preferences<S>, action: SettingsAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        SettingsAction::Show => {}
        SettingsAction::SetTheme(mode) => {
            prefs.set_theme_mode(mode);
            result.add_message(CmdMessage::success(format!("Theme set to {mode}")));
        }
        SettingsAction::SetColor(scheme) => {
            prefs.set_color_scheme(scheme);
            result.add_message(CmdMessage::success(format!("Color scheme set to {scheme}")));
        }
        SettingsAction::SetAnimation(level) => {
            prefs.set_animation_level(level);
            result.add_message(CmdMessage::success(format!("Animation level set to {level}")));
        }
        SettingsAction::ToggleTheme => {
            let mode = prefs.toggle_theme();
            result.add_message(CmdMessage::success(format!(
                "Theme switched to {mode} ({} appearance)",
                if prefs.appearance().is_dark() { "dark" } else { "light" }
            )));
        }
    }
    Ok(result.with_settings(prefs.snapshot()))
}
