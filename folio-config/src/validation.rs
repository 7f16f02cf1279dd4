//! Soft validation for carousel configuration.
//!
//! Nothing here rejects a configuration: the engines clamp every value into
//! range on their own. Warnings exist so a misconfigured page shows up in the
//! logs instead of silently behaving differently than its author expected.

use std::fmt;

use folio_model::{CarouselConfig, TransitionKind, ViewportClass};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    ItemsToShowZero,
    ItemsExceedImages { configured: usize, images: usize },
    ResponsiveZero(ViewportClass),
    ZeroAutoplayInterval,
    AutoplayFasterThanTransition { interval_ms: u64, transition_ms: u64 },
    FadeWithMultipleItems(usize),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::ItemsToShowZero => {
                write!(f, "items_to_show is 0; treating it as 1")
            }
            ConfigWarning::ItemsExceedImages { configured, images } => write!(
                f,
                "items_to_show {configured} exceeds the {images} available images; clamping"
            ),
            ConfigWarning::ResponsiveZero(class) => write!(
                f,
                "responsive item count for {class:?} viewports is 0; treating it as 1"
            ),
            ConfigWarning::ZeroAutoplayInterval => write!(
                f,
                "autoplay_interval_ms is 0; using the fallback interval"
            ),
            ConfigWarning::AutoplayFasterThanTransition {
                interval_ms,
                transition_ms,
            } => write!(
                f,
                "autoplay interval {interval_ms}ms is shorter than the {transition_ms}ms transition; some ticks will be dropped"
            ),
            ConfigWarning::FadeWithMultipleItems(items) => write!(
                f,
                "fade transitions show one slide; items_to_show {items} only affects the dot count"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(pub Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    pub fn contains(&self, warning: &ConfigWarning) -> bool {
        self.0.contains(warning)
    }

    /// Emit every warning through `tracing`.
    pub fn log(&self) {
        for warning in &self.0 {
            tracing::warn!(target: "folio::config", "{warning}");
        }
    }
}

/// Collect warnings for `config` applied to `image_count` slides.
pub fn validate(config: &CarouselConfig, image_count: usize) -> ConfigWarnings {
    let mut warnings = Vec::new();

    if config.items_to_show == 0 {
        warnings.push(ConfigWarning::ItemsToShowZero);
    } else if image_count > 0 && config.items_to_show > image_count {
        warnings.push(ConfigWarning::ItemsExceedImages {
            configured: config.items_to_show,
            images: image_count,
        });
    }

    for (class, count) in [
        (ViewportClass::Small, config.responsive.small),
        (ViewportClass::Medium, config.responsive.medium),
        (ViewportClass::Large, config.responsive.large),
    ] {
        if count == Some(0) {
            warnings.push(ConfigWarning::ResponsiveZero(class));
        }
    }

    if config.autoplay {
        if config.autoplay_interval_ms == 0 {
            warnings.push(ConfigWarning::ZeroAutoplayInterval);
        } else if config.autoplay_interval_ms < config.transition_duration_ms {
            warnings.push(ConfigWarning::AutoplayFasterThanTransition {
                interval_ms: config.autoplay_interval_ms,
                transition_ms: config.transition_duration_ms,
            });
        }
    }

    if config.transition == TransitionKind::Fade && config.items_to_show > 1 {
        warnings.push(ConfigWarning::FadeWithMultipleItems(
            config.items_to_show,
        ));
    }

    ConfigWarnings(warnings)
}
