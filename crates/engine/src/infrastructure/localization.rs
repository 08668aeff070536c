//! In-process string table implementing the localization port.

use std::collections::HashMap;

use transit_domain::LanguageCode;

use crate::infrastructure::ports::{LocalizationPort, TranslationArgs};

/// English strings for every key the station menus use.
const ENGLISH: &[(&str, &str)] = &[
    ("ChooseDestination", "Choose a destination:"),
    ("NoDestinations", "There are no destinations available right now."),
    ("MenuCancelOption", "Cancel"),
    (
        "NotEnoughMoney",
        "You don't have enough money for a ticket to {{DestinationName}}.",
    ),
    ("NotEnoughMoneyForTicket", "You don't have enough money for a ticket."),
    ("ArrivalMessage", "You have arrived at {{DestinationName}}."),
    ("TrainStationDisplayName", "Railroad"),
    ("BoatStationDisplayName", "Boat Tunnel"),
    ("GingerIsland", "Ginger Island"),
];

/// Translations for a single language with `{{Name}}` placeholders.
pub struct StringTable {
    language: LanguageCode,
    strings: HashMap<String, String>,
}

impl StringTable {
    pub fn new(language: LanguageCode) -> Self {
        Self {
            language,
            strings: HashMap::new(),
        }
    }

    /// The built-in English table.
    pub fn english() -> Self {
        ENGLISH
            .iter()
            .fold(Self::new(LanguageCode::default_language()), |table, (k, v)| {
                table.with(*k, *v)
            })
    }

    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.strings.insert(key.into(), text.into());
        self
    }
}

impl LocalizationPort for StringTable {
    fn current_language(&self) -> LanguageCode {
        self.language.clone()
    }

    fn translate(&self, key: &str, args: &TranslationArgs) -> String {
        let Some(template) = self.strings.get(key) else {
            tracing::warn!(key, language = %self.language, "Missing translation key");
            return format!("(no translation:{})", key);
        };

        args.iter().fold(template.clone(), |text, (name, value)| {
            text.replace(&format!("{{{{{}}}}}", name), value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_named_arguments() {
        let table = StringTable::english();
        let text = table.translate(
            "ArrivalMessage",
            &TranslationArgs::new().arg("DestinationName", "Forest Outpost"),
        );
        assert_eq!(text, "You have arrived at Forest Outpost.");
    }

    #[test]
    fn unknown_key_yields_marker() {
        let table = StringTable::english();
        assert_eq!(
            table.translate("Nope", &TranslationArgs::new()),
            "(no translation:Nope)"
        );
    }

    #[test]
    fn custom_language_table() {
        let table = StringTable::new(LanguageCode::new("de").expect("valid language"))
            .with("MenuCancelOption", "Abbrechen");
        assert_eq!(table.current_language().as_str(), "de");
        assert_eq!(table.translate("MenuCancelOption", &TranslationArgs::new()), "Abbrechen");
    }
}
