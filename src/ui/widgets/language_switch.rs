//! Header language switch.

use egui::Ui;

use crate::i18n::{Language, Localizer};

/// Draw the language selector and return the newly chosen language, if any.
///
/// The caller performs the actual switch so that document attributes keep a
/// single writer.
pub fn language_switch(ui: &mut Ui, localizer: &Localizer) -> Option<Language> {
    let mut switched = None;
    for lang in Language::all() {
        let selected = localizer.language() == *lang;
        if ui.selectable_label(selected, lang.display_name()).clicked() && !selected {
            switched = Some(*lang);
        }
    }
    switched
}
