use super::*;

fn config(name: &str, first_name: &str) -> BotConfig {
    BotConfig {
        bot_name: name.to_owned(),
        bot_first_name: first_name.to_owned(),
    }
}

#[test]
fn user_title_uses_bot_name_when_present() {
    assert_eq!(user_title("Home", &config("MainBot", "Botty")), "Home - MainBot");
}

#[test]
fn user_title_falls_back_to_first_name() {
    assert_eq!(user_title("Home", &config("", "Botty")), "Home - Botty");
}

#[test]
fn user_title_both_names_empty_degrades_to_empty_segment() {
    assert_eq!(user_title("Home", &config("", "")), "Home - ");
}

#[test]
fn user_title_empty_label_keeps_display_name() {
    assert_eq!(user_title("", &config("MainBot", "")), " - MainBot");
}
