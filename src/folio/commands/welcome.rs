use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prefs::Preferences;
use crate::store::KeyValueStore;
use crate::welcome::WelcomePopup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    Show,
    /// Close the notice with "Get Started".
    Dismiss { dont_show_again: bool },
    Reset,
}

pub fn run<S: KeyValueStore>(prefs: &mut Preferences<S>, action: WelcomeAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        WelcomeAction::Show => {
            let popup = WelcomePopup::for_visitor(prefs);
            if !popup.is_visible() {
                result.add_message(CmdMessage::info(
                    "The welcome notice was dismissed. Run `folio welcome --reset` to see it again.",
                ));
            }
            result = result.with_welcome(popup);
        }
        WelcomeAction::Dismiss { dont_show_again } => {
            let mut popup = WelcomePopup::for_visitor(prefs);
            popup.set_dont_show_again(dont_show_again);
            if popup.close(prefs, true) {
                result.add_message(CmdMessage::success("The welcome notice won't be shown again."));
            } else {
                result.add_message(CmdMessage::info("Welcome notice closed."));
            }
        }
        WelcomeAction::Reset => {
            prefs.reset_welcome();
            result.add_message(CmdMessage::success("The welcome notice will show on the next visit."));
        }
    }
    Ok(result)
}
