use taskdeck::api::TaskType;
use taskdeck::icons::*;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.task_type_icon(TaskType::Bug), "!");
    assert_eq!(service.task_type_icon(TaskType::Feature), "*");
    assert_eq!(service.task_type_icon(TaskType::Documentation), "#");
    assert_eq!(service.selected(), "[x]");
    assert_eq!(service.unselected(), "[ ]");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.task_type_icon(TaskType::Bug), "●");
    assert_eq!(service.selected(), "■");
    assert_eq!(service.unselected(), "□");
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.task_type_icon(TaskType::Bug), "🐞");
    assert_eq!(service.selected(), "☑");
    assert_eq!(service.unselected(), "☐");
}

#[test]
fn test_brand_mark_follows_theme() {
    assert_eq!(IconService::new(IconTheme::Ascii).brand(), "[=]");
    assert_eq!(IconService::new(IconTheme::Unicode).brand(), "◧");
    assert_eq!(IconService::new(IconTheme::Emoji).brand(), "🗂️");
}

#[test]
fn test_unknown_type_always_has_a_glyph() {
    for theme in [IconTheme::Emoji, IconTheme::Unicode, IconTheme::Ascii] {
        let service = IconService::new(theme);
        assert!(!service.task_type_icon(TaskType::Unknown).is_empty());
    }
}

#[test]
fn test_theme_cycling() {
    let mut service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Unicode);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.cycle_icon_theme();
    assert_eq!(service.theme(), IconTheme::Ascii);
}
