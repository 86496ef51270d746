//! Property-based tests for the settings layer.

use super::merger::ConfigMerger;
use super::schema::Settings;
use super::validator::ConfigValidator;
use crate::path::PortablePathCodec;
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("(/|~/|:/)[a-z]{1,8}(/[a-z]{1,8}){0,3}")
}

fn identifier_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z][a-z0-9-]{0,15}")
}

// Settings whose paths are absolute or portable
fn settings_strategy() -> impl Strategy<Value = Settings> {
    (
        (field_strategy(), field_strategy(), field_strategy()),
        (field_strategy(), field_strategy(), field_strategy()),
        identifier_strategy(),
        identifier_strategy(),
    )
        .prop_map(
            |((autoconfig, assets, menu_config), (wallpaper, font, config), joypad, theme)| {
                let mut s = Settings::default();
                s.directory.autoconfig = autoconfig;
                s.directory.assets = assets;
                s.directory.menu_config = menu_config;
                s.path.menu_wallpaper = wallpaper;
                s.path.xmb_font = font;
                s.path.config = config;
                s.input.joypad_driver = joypad;
                s.menu.theme = theme;
                s
            },
        )
}

proptest! {
    /// Property: merging with empty settings is an identity
    #[test]
    fn prop_merge_empty_is_identity(target in settings_strategy()) {
        let mut merged = target.clone();
        ConfigMerger::merge_into(&mut merged, &Settings::default());
        prop_assert_eq!(merged, target);
    }

    /// Property: merging into empty settings copies the source
    #[test]
    fn prop_merge_into_empty_copies(source in settings_strategy()) {
        let mut merged = Settings::default();
        ConfigMerger::merge_into(&mut merged, &source);
        prop_assert_eq!(merged, source);
    }

    /// Property: applying the same source twice changes nothing
    #[test]
    fn prop_merge_is_idempotent(target in settings_strategy(), source in settings_strategy()) {
        let mut once = target;
        ConfigMerger::merge_into(&mut once, &source);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &source);
        prop_assert_eq!(once, twice);
    }

    /// Property: anchored paths and plain identifiers always validate
    #[test]
    fn prop_generated_settings_validate(settings in settings_strategy()) {
        prop_assert!(ConfigValidator::validate(&settings).is_ok());
    }

    /// Property: expansion leaves no portable token behind
    #[test]
    fn prop_expand_removes_tokens(settings in settings_strategy()) {
        let codec = PortablePathCodec::new(
            Some("/home/alice".into()),
            Some("/home/alice/retroarch".into()),
        );
        let expanded = settings.expand_portable(&codec, 4096).unwrap();
        for (field, value) in expanded.path_fields() {
            if let Some(value) = value {
                prop_assert!(!PortablePathCodec::is_portable(value), "{} = {}", field, value);
            }
        }
        prop_assert_eq!(&expanded.menu, &settings.menu);
    }
}
