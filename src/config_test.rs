use super::*;

// =============================================================
// Display name fallback
// =============================================================

#[test]
fn display_name_prefers_bot_name() {
    let config = BotConfig {
        bot_name: "MainBot".to_owned(),
        bot_first_name: "Botty".to_owned(),
    };
    assert_eq!(config.display_name(), "MainBot");
}

#[test]
fn display_name_falls_back_when_bot_name_empty() {
    let config = BotConfig {
        bot_name: String::new(),
        bot_first_name: "Botty".to_owned(),
    };
    assert_eq!(config.display_name(), "Botty");
}

#[test]
fn display_name_empty_when_both_unset() {
    assert_eq!(BotConfig::default().display_name(), "");
}

// =============================================================
// Host page JSON shape
// =============================================================

#[test]
fn config_deserializes_camel_case_fields() {
    let config: BotConfig =
        serde_json::from_str(r#"{"botName":"MainBot","botFirstName":"Botty"}"#).unwrap();
    assert_eq!(config.bot_name, "MainBot");
    assert_eq!(config.bot_first_name, "Botty");
}

#[test]
fn config_tolerates_missing_fields() {
    let config: BotConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, BotConfig::default());
}
