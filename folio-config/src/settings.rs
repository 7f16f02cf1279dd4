use anyhow::{Context, anyhow};
use folio_model::CarouselConfig;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::tuning::EngineTuning;

pub const PATH_VAR: &str = "FOLIO_CAROUSEL_CONFIG_PATH";
pub const JSON_VAR: &str = "FOLIO_CAROUSEL_CONFIG_JSON";

/// Source that produced the carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Carousel configuration plus engine tuning, as read from disk or env.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Behavior of the carousel instance (autoplay, looping, item counts).
    pub carousel: CarouselConfig,
    /// Thresholds and sizes shared by every engine.
    pub tuning: EngineTuning,
}

impl CarouselSettings {
    /// Load settings overrides using environment variables.
    /// Evaluation order:
    /// 1) `$FOLIO_CAROUSEL_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$FOLIO_CAROUSEL_CONFIG_JSON` (inline JSON),
    /// 3) a default file in the working directory,
    /// 4) defaults if none of the above exist.
    pub fn load_from_env() -> anyhow::Result<(Self, SettingsSource)> {
        if let Ok(path_str) = env::var(PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let settings = Self::load_from_file(&path)?;
            return Ok((settings, SettingsSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {JSON_VAR}"))?;
            return Ok((parsed, SettingsSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(Path::new(".")) {
            let settings = Self::load_from_file(&path)?;
            return Ok((settings, SettingsSource::File(path)));
        }

        Ok((Self::default(), SettingsSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read carousel settings from {}", path.display())
        })?;

        let settings = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid carousel settings {}", path.display())
            })?,
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!(
                    "invalid carousel settings {}: {}",
                    path.display(),
                    err
                )
            })?,
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };

        settings.tuning.check().with_context(|| {
            format!("rejected carousel tuning in {}", path.display())
        })?;
        Ok(settings)
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse carousel settings {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid carousel settings json: {err}"))
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "carousel.toml",
            "carousel.json",
            "config/carousel.toml",
            "config/carousel.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::TransitionKind;
    use std::io::Write;

    #[test]
    fn toml_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carousel.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[carousel]
autoplay = true
autoplay_interval_ms = 3000
loop = false
transition = "fade"

[carousel.responsive]
small = 1
large = 4

[tuning.gesture]
swipe_threshold_px = 64.0
"#
        )
        .unwrap();

        let settings = CarouselSettings::load_from_file(&path).unwrap();
        assert!(settings.carousel.autoplay);
        assert_eq!(settings.carousel.autoplay_interval_ms, 3000);
        assert!(!settings.carousel.looping);
        assert_eq!(settings.carousel.transition, TransitionKind::Fade);
        assert_eq!(settings.carousel.responsive.large, Some(4));
        assert_eq!(settings.carousel.responsive.medium, None);
        assert_eq!(settings.tuning.gesture.swipe_threshold_px, 64.0);
        assert_eq!(settings.tuning.autoplay.resume_delay_ms, 2_000);
    }

    #[test]
    fn unknown_extension_falls_back_to_json() {
        let settings = CarouselSettings::parse_from_str(
            r#"{ "carousel": { "items_to_show": 2 } }"#,
            "inline",
        )
        .unwrap();
        assert_eq!(settings.carousel.items_to_show, 2);
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = CarouselSettings::parse_from_str("{{ nope", "inline")
            .unwrap_err()
            .to_string();
        assert!(err.contains("toml error"));
        assert!(err.contains("json error"));
    }

    #[test]
    fn rejected_tuning_fails_file_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carousel.json");
        fs::write(
            &path,
            r#"{ "tuning": { "zoom": { "min_factor": 4.0, "max_factor": 2.0 } } }"#,
        )
        .unwrap();
        assert!(CarouselSettings::load_from_file(&path).is_err());
    }

    #[test]
    fn default_file_lookup_checks_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        let nested = dir.path().join("config/carousel.json");
        fs::write(&nested, "{}").unwrap();
        assert_eq!(
            CarouselSettings::find_default_file(dir.path()),
            Some(nested)
        );
    }
}
