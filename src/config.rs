use crate::youtube::ThumbnailQuality;
use serde::Deserialize;
use std::{
    fmt::{self, Display, Formatter},
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// CSS classes assigned to the parts of every tile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileClasses {
    pub tile: String,
    pub link: String,
    pub header: String,
    pub thumbnail: String,
    pub description: String,
}

impl Default for TileClasses {
    fn default() -> Self {
        Self {
            tile: "video-tile".into(),
            link: "video-link".into(),
            header: "video-header".into(),
            thumbnail: "video-thumbnail".into(),
            description: "video-description".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub playlist_id: String,
    pub video_count: usize,
    pub api_base: String,
    /// Id of the element the tiles are appended to.
    pub parent_id: String,
    /// Id of the loading graphic hidden once videos arrive.
    pub loading_id: String,
    pub classes: TileClasses,
    pub thumbnail_quality: ThumbnailQuality,
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: "YOUR_API_KEY_HERE".into(),
            playlist_id: "YOUR_PLAYLIST_HERE".into(),
            video_count: 6,
            api_base: YOUTUBE_API_BASE.into(),
            parent_id: "video-container".into(),
            loading_id: "videos-loading".into(),
            classes: TileClasses::default(),
            thumbnail_quality: ThumbnailQuality::Standard,
            output: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PartialClasses {
    tile: Option<String>,
    link: Option<String>,
    header: Option<String>,
    thumbnail: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    api_key: Option<String>,
    playlist_id: Option<String>,
    video_count: Option<usize>,
    api_base: Option<String>,
    parent_id: Option<String>,
    loading_id: Option<String>,
    classes: Option<PartialClasses>,
    thumbnail_quality: Option<ThumbnailQuality>,
    output: Option<PathBuf>,
}

impl From<PartialConfig> for Config {
    fn from(cfg: PartialConfig) -> Config {
        let defaults = Config::default();
        let classes = cfg.classes.unwrap_or_default();
        Config {
            api_key: cfg.api_key.unwrap_or(defaults.api_key),
            playlist_id: cfg.playlist_id.unwrap_or(defaults.playlist_id),
            video_count: cfg.video_count.unwrap_or(defaults.video_count),
            api_base: cfg.api_base.unwrap_or(defaults.api_base),
            parent_id: cfg.parent_id.unwrap_or(defaults.parent_id),
            loading_id: cfg.loading_id.unwrap_or(defaults.loading_id),
            classes: TileClasses {
                tile: classes.tile.unwrap_or(defaults.classes.tile),
                link: classes.link.unwrap_or(defaults.classes.link),
                header: classes.header.unwrap_or(defaults.classes.header),
                thumbnail: classes.thumbnail.unwrap_or(defaults.classes.thumbnail),
                description: classes.description.unwrap_or(defaults.classes.description),
            },
            thumbnail_quality: cfg.thumbnail_quality.unwrap_or(defaults.thumbnail_quality),
            output: cfg.output.or(defaults.output),
        }
    }
}

impl Config {
    /// Defaults, overlaid by the TOML file at `path` (if it exists), overlaid
    /// by the process environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Self::from_file(path)?.with_env(|name| std::env::var(name).ok())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading config from file '{}'", path.display());

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at '{}'; using defaults", path.display());
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };

        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Config, toml::de::Error> {
        toml::from_str::<PartialConfig>(raw).map(Config::from)
    }

    /// Applies environment overrides. `var` looks up a variable by name.
    pub fn with_env<F>(mut self, var: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var("YOUTUBE_API_KEY") {
            self.api_key = key;
        }
        if let Some(id) = var("YOUTUBE_PLAYLIST_ID") {
            self.playlist_id = id;
        }
        if let Some(base) = var("YOUTUBE_API_BASE") {
            self.api_base = base;
        }
        if let Some(count) = var("VIDEO_COUNT") {
            self.video_count = count.parse().map_err(|e| ConfigError::Invalid {
                name: "VIDEO_COUNT",
                reason: format!("{}", e),
            })?;
        }
        if let Some(quality) = var("THUMBNAIL_QUALITY") {
            self.thumbnail_quality = quality.parse().map_err(|reason| ConfigError::Invalid {
                name: "THUMBNAIL_QUALITY",
                reason,
            })?;
        }
        if let Some(output) = var("OUTPUT") {
            self.output = Some(output.into());
        }

        Ok(self)
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config {{")?;
        writeln!(f, "\tapi_key = ...,")?;
        writeln!(f, "\tplaylist_id = '{}',", self.playlist_id)?;
        writeln!(f, "\tvideo_count = {},", self.video_count)?;
        writeln!(f, "\tapi_base = '{}',", self.api_base)?;
        writeln!(f, "\tparent_id = '{}',", self.parent_id)?;
        writeln!(f, "\tloading_id = '{}',", self.loading_id)?;
        writeln!(f, "\tthumbnail_quality = {},", self.thumbnail_quality)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn toml_overrides_only_given_fields() {
        let cfg = Config::from_toml(
            r#"
            playlist_id = "PL123"
            video_count = 12
            thumbnail_quality = "high"

            [classes]
            tile = "card"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.playlist_id, "PL123");
        assert_eq!(cfg.video_count, 12);
        assert_eq!(cfg.thumbnail_quality, ThumbnailQuality::High);
        assert_eq!(cfg.classes.tile, "card");
        assert_eq!(cfg.classes.link, "video-link");
        assert_eq!(cfg.parent_id, "video-container");
    }

    #[test]
    fn unknown_quality_in_toml_is_rejected() {
        assert!(Config::from_toml(r#"thumbnail_quality = "ultra""#).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = Config::from_file("does/not/exist/Config.toml").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn env_overrides_file_values() {
        let cfg = Config::default()
            .with_env(env(&[
                ("YOUTUBE_API_KEY", "secret"),
                ("YOUTUBE_PLAYLIST_ID", "PLenv"),
                ("VIDEO_COUNT", "3"),
                ("THUMBNAIL_QUALITY", "medium"),
            ]))
            .unwrap();

        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.playlist_id, "PLenv");
        assert_eq!(cfg.video_count, 3);
        assert_eq!(cfg.thumbnail_quality, ThumbnailQuality::Medium);
    }

    #[test]
    fn video_count_range_is_left_to_the_api() {
        for count in ["0", "51", "500"] {
            let cfg = Config::default()
                .with_env(env(&[("VIDEO_COUNT", count)]))
                .unwrap();
            assert_eq!(cfg.video_count.to_string(), count);
        }

        let cfg = Config::from_toml("video_count = 0").unwrap();
        assert_eq!(cfg.video_count, 0);
    }

    #[test]
    fn unparseable_video_count_is_rejected() {
        let err = Config::default()
            .with_env(env(&[("VIDEO_COUNT", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "VIDEO_COUNT", .. }));
    }

    #[test]
    fn display_redacts_api_key() {
        let cfg = Config {
            api_key: "secret".into(),
            ..Config::default()
        };
        assert!(!cfg.to_string().contains("secret"));
    }
}
