use super::*;

#[test]
fn admin_title_appends_fixed_suffix() {
    assert_eq!(admin_title("数据统计"), "数据统计 - Mini Admin");
}

#[test]
fn admin_title_empty_label_degrades_to_empty_segment() {
    assert_eq!(admin_title(""), " - Mini Admin");
}

#[test]
fn admin_title_is_pure() {
    assert_eq!(admin_title("Home"), admin_title("Home"));
}
