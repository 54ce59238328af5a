use thiserror::Error;

use crate::{storage::StorageKey, wasm_bindgen};

const DEFAULT_NAMESPACE: &str = "video";
const DEFAULT_ENDED_THRESHOLD: f64 = 3. * 60.;
const DEFAULT_WATCHED_THRESHOLD: f64 = 60.;
const DEFAULT_MIN_DURATION: f64 = 20. * 60.;

/// Options given by the JavaScript-side when creating a `WaspResumer`.
///
/// Every option left unset falls back to its default value, only `video_id`
/// has no default and has to be set.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct ResumerOptions {
    namespace: Option<String>,
    video_id: Option<String>,
    ended_threshold: Option<f64>,
    watched_threshold: Option<f64>,
    min_duration: Option<f64>,
}

#[wasm_bindgen]
impl ResumerOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix used for the storage key, allowing to isolate applications
    /// sharing the same storage.
    pub fn set_namespace(&mut self, namespace: String) {
        self.namespace = Some(namespace);
    }

    /// Identifier of the media whose position should be kept.
    pub fn set_video_id(&mut self, video_id: String) {
        self.video_id = Some(video_id);
    }

    /// Amount of seconds before the end of the media under which it is
    /// considered as finished.
    pub fn set_ended_threshold(&mut self, threshold: f64) {
        self.ended_threshold = Some(threshold);
    }

    /// Amount of seconds that should be played since the last seek before the
    /// position is saved.
    pub fn set_watched_threshold(&mut self, threshold: f64) {
        self.watched_threshold = Some(threshold);
    }

    /// Minimum duration in seconds a media should have for its position to be
    /// saved and restored.
    pub fn set_min_duration(&mut self, min_duration: f64) {
        self.min_duration = Some(min_duration);
    }
}

/// Error encountered when building a `Configuration` out of `ResumerOptions`.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum ConfigurationError {
    #[error("videoId is not provided...")]
    MissingVideoId,
}

/// Configuration a `PositionTracker` relies on, obtained by merging the
/// `ResumerOptions` given by the JavaScript-side over the default values.
///
/// It cannot be updated once created.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Configuration {
    namespace: String,
    video_id: String,

    /// Trailing window, in seconds, in which the media is considered as
    /// finished.
    ended_threshold: f64,

    /// Minimum amount of time, in seconds, that should be played since the
    /// last seek before the current position is saved.
    watched_threshold: f64,

    /// Medias shorter than that duration, in seconds, are never resumed nor
    /// saved.
    min_duration: f64,
}

impl Configuration {
    /// Merge the given `ResumerOptions` over the default values.
    ///
    /// Fails if no video identifier (or an empty one) was given.
    pub(crate) fn from_options(options: &ResumerOptions) -> Result<Self, ConfigurationError> {
        let video_id = match options.video_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => return Err(ConfigurationError::MissingVideoId),
        };
        Ok(Self {
            namespace: options
                .namespace
                .clone()
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned()),
            video_id,
            ended_threshold: options.ended_threshold.unwrap_or(DEFAULT_ENDED_THRESHOLD),
            watched_threshold: options
                .watched_threshold
                .unwrap_or(DEFAULT_WATCHED_THRESHOLD),
            min_duration: options.min_duration.unwrap_or(DEFAULT_MIN_DURATION),
        })
    }

    pub(crate) fn ended_threshold(&self) -> f64 {
        self.ended_threshold
    }

    pub(crate) fn watched_threshold(&self) -> f64 {
        self.watched_threshold
    }

    pub(crate) fn min_duration(&self) -> f64 {
        self.min_duration
    }

    /// Key under which the position of this media is stored.
    pub(crate) fn storage_key(&self) -> StorageKey {
        StorageKey::new(&self.namespace, &self.video_id)
    }
}
