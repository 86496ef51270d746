//! Settings merging logic.
//!
//! Later sources override earlier ones field by field.

use crate::config::schema::Settings;

/// Merges settings from multiple sources.
///
/// # Examples
///
/// ```
/// use retropath::config::{ConfigMerger, Settings};
///
/// let mut result = Settings::default();
/// result.menu.theme = Some("flatui".to_string());
///
/// let mut high = Settings::default();
/// high.menu.theme = Some("retroactive".to_string());
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.menu.theme.as_deref(), Some("retroactive"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge a sequence of settings, lowest precedence first.
    #[must_use]
    pub fn merge<'a>(sources: impl IntoIterator<Item = &'a Settings>) -> Settings {
        let mut result = Settings::default();
        for source in sources {
            Self::merge_into(&mut result, source);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Settings, source: &Settings) {
        let Settings {
            directory,
            path,
            input,
            menu,
        } = source;

        overwrite(&mut target.directory.autoconfig, &directory.autoconfig);
        overwrite(&mut target.directory.assets, &directory.assets);
        overwrite(&mut target.directory.menu_config, &directory.menu_config);
        overwrite(&mut target.path.menu_wallpaper, &path.menu_wallpaper);
        overwrite(&mut target.path.xmb_font, &path.xmb_font);
        overwrite(&mut target.path.config, &path.config);
        overwrite(&mut target.input.joypad_driver, &input.joypad_driver);
        overwrite(&mut target.menu.theme, &menu.theme);
    }
}

fn overwrite(target: &mut Option<String>, source: &Option<String>) {
    if source.is_some() {
        target.clone_from(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_assets(assets: &str) -> Settings {
        let mut settings = Settings::default();
        settings.directory.assets = Some(assets.to_string());
        settings
    }

    #[test]
    fn test_merge_sets_missing_fields() {
        let mut target = Settings::default();
        let mut source = with_assets("/assets");
        source.input.joypad_driver = Some("udev".into());

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target, source);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut target = with_assets("/old");
        ConfigMerger::merge_into(&mut target, &with_assets("/new"));
        assert_eq!(target.directory.assets.as_deref(), Some("/new"));
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let mut target = with_assets("/assets");
        target.menu.theme = Some("flatui".into());

        ConfigMerger::merge_into(&mut target, &Settings::default());
        assert_eq!(target.directory.assets.as_deref(), Some("/assets"));
        assert_eq!(target.menu.theme.as_deref(), Some("flatui"));
    }

    #[test]
    fn test_merge_multiple_sources() {
        let low = with_assets("/low");
        let mut mid = Settings::default();
        mid.menu.theme = Some("neoactive".into());
        let high = with_assets("/high");

        let merged = ConfigMerger::merge([&low, &mid, &high]);
        assert_eq!(merged.directory.assets.as_deref(), Some("/high"));
        assert_eq!(merged.menu.theme.as_deref(), Some("neoactive"));
    }
}
