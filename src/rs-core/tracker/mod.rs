use crate::{
    configuration::Configuration,
    media_element::{MediaElement, MediaObservation},
    storage::{format_position, parse_resume_position, ProgressStorage, StorageKey},
    Logger,
};

/// In-memory state of a `PositionTracker`, lost once it is dropped.
#[derive(Clone, Debug, Default, PartialEq)]
struct SessionState {
    /// Position, in seconds, at which the last seek operation began.
    ///
    /// Time played is measured from it, so moving through the media does not
    /// count as watching it.
    start_time: f64,

    /// Last known duration of the media, in seconds.
    duration: f64,
}

/// Saves the playback position of a single media on time updates and resumes
/// from it once playback is possible.
///
/// Saved positions are removed once the media is near its end.
pub(crate) struct PositionTracker {
    config: Configuration,

    /// Always derived from `config`, kept here to avoid re-computing it on
    /// each event.
    storage_key: StorageKey,

    session: SessionState,
}

impl PositionTracker {
    pub(crate) fn new(config: Configuration) -> Self {
        let storage_key = config.storage_key();
        Self {
            config,
            storage_key,
            session: SessionState::default(),
        }
    }

    pub(crate) fn storage_key(&self) -> &StorageKey {
        &self.storage_key
    }

    /// To call when a seek operation begins.
    pub(crate) fn on_seeking(&mut self, observation: &MediaObservation) {
        self.session.start_time = observation.current_time();
    }

    /// To call once playback can begin.
    ///
    /// Seeks to the saved position if one, but only if playback is still at
    /// its very beginning.
    pub(crate) fn on_can_play<M: MediaElement, S: ProgressStorage>(
        &mut self,
        observation: &MediaObservation,
        media: &mut M,
        storage: &S,
    ) {
        self.session.duration = observation.duration();
        if self.is_exempted() || observation.current_time() != 0. {
            return;
        }
        let resume_position = storage
            .get_item(&self.storage_key)
            .and_then(|value| parse_resume_position(&value));
        if let Some(position) = resume_position {
            Logger::lazy_debug(&|| {
                format!("Resumer: resuming {} at {}s", self.storage_key, position)
            });
            media.seek(position as f64);
        }
    }

    /// To call on each time update.
    ///
    /// Forgets the saved position when near the end of the media, or saves the
    /// current one if enough time was played since the last seek.
    pub(crate) fn on_time_update<S: ProgressStorage>(
        &mut self,
        observation: &MediaObservation,
        storage: &mut S,
    ) {
        self.session.duration = observation.duration();
        if self.is_exempted() {
            return;
        }

        let current_time = observation.current_time();
        if current_time > self.session.duration - self.config.ended_threshold() {
            Logger::lazy_debug(&|| {
                format!("Resumer: {} ended, removing its position", self.storage_key)
            });
            storage.remove_item(&self.storage_key);
        } else if current_time - self.session.start_time > self.config.watched_threshold() {
            storage.set_item(&self.storage_key, &format_position(current_time));
        }
    }

    /// Returns `true` if the media is too short for its position to be saved.
    ///
    /// A duration that is not known yet (`NaN`) also exempts it. An infinite
    /// duration does not.
    fn is_exempted(&self) -> bool {
        let duration = self.session.duration;
        duration.is_nan() || duration < self.config.min_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        configuration::ResumerOptions, media_element::fake::FakeMediaElement,
        storage::memory::MemoryStorage,
    };

    fn tracker(
        video_id: &str,
        min_duration: f64,
        watched_threshold: f64,
        ended_threshold: f64,
    ) -> PositionTracker {
        let mut options = ResumerOptions::new();
        options.set_video_id(video_id.to_owned());
        options.set_min_duration(min_duration);
        options.set_watched_threshold(watched_threshold);
        options.set_ended_threshold(ended_threshold);
        PositionTracker::new(Configuration::from_options(&options).unwrap())
    }

    fn default_tracker(video_id: &str) -> PositionTracker {
        let mut options = ResumerOptions::new();
        options.set_video_id(video_id.to_owned());
        PositionTracker::new(Configuration::from_options(&options).unwrap())
    }

    fn obs(current_time: f64, duration: f64) -> MediaObservation {
        MediaObservation::new(current_time, duration)
    }

    #[test]
    fn test_storage_key_derivation() {
        assert_eq!(default_tracker("abc123").storage_key().as_str(), "videoabc123");
    }

    #[test]
    fn test_short_media_is_never_saved_nor_resumed() {
        let mut tracker = default_tracker("abc123");
        let mut media = FakeMediaElement::new();
        let mut storage = MemoryStorage::with_item("videoabc123", "45");

        tracker.on_can_play(&obs(0., 600.), &mut media, &storage);
        tracker.on_seeking(&obs(0., 600.));
        for t in [10., 61., 200., 550., 599.] {
            tracker.on_time_update(&obs(t, 600.), &mut storage);
        }

        assert!(media.seeks.is_empty());
        assert_eq!(storage.set_calls(), 0);
        assert_eq!(storage.remove_calls(), 0);
        assert_eq!(storage.item("videoabc123"), Some("45"));
    }

    #[test]
    fn test_unknown_duration_is_exempted() {
        let mut tracker = default_tracker("abc123");
        let mut media = FakeMediaElement::new();
        let mut storage = MemoryStorage::with_item("videoabc123", "45");

        tracker.on_can_play(&obs(0., f64::NAN), &mut media, &storage);
        tracker.on_time_update(&obs(100., f64::NAN), &mut storage);

        assert!(media.seeks.is_empty());
        assert_eq!(storage.call_count(), 0);
    }

    #[test]
    fn test_infinite_duration_is_tracked() {
        let mut tracker = default_tracker("abc123");
        let mut media = FakeMediaElement::new();
        let mut storage = MemoryStorage::with_item("videoabc123", "45");

        tracker.on_can_play(&obs(0., f64::INFINITY), &mut media, &storage);
        assert_eq!(media.seeks, vec![45.]);

        tracker.on_time_update(&obs(100., f64::INFINITY), &mut storage);
        assert_eq!(storage.item("videoabc123"), Some("100"));
        assert_eq!(storage.remove_calls(), 0);
    }

    #[test]
    fn test_resume_from_saved_position() {
        let mut tracker = default_tracker("abc123");
        let mut media = FakeMediaElement::new();
        let storage = MemoryStorage::with_item("videoabc123", "45");

        tracker.on_can_play(&obs(0., 1200.), &mut media, &storage);
        assert_eq!(media.seeks, vec![45.]);
    }

    #[test]
    fn test_no_resume_on_non_zero_start() {
        let mut tracker = default_tracker("abc123");
        let mut media = FakeMediaElement::new();
        let storage = MemoryStorage::with_item("videoabc123", "45");

        tracker.on_can_play(&obs(5., 3600.), &mut media, &storage);
        assert!(media.seeks.is_empty());
    }

    #[test]
    fn test_resume_truncates_and_ignores_malformed_values() {
        let mut media = FakeMediaElement::new();

        let storage = MemoryStorage::with_item("videoabc123", "61.9");
        default_tracker("abc123").on_can_play(&obs(0., 3600.), &mut media, &storage);
        assert_eq!(media.seeks, vec![61.]);

        for value in ["abc", "0", "-3", ""] {
            let storage = MemoryStorage::with_item("videoabc123", value);
            default_tracker("abc123").on_can_play(&obs(0., 3600.), &mut media, &storage);
        }
        let storage = MemoryStorage::new();
        default_tracker("abc123").on_can_play(&obs(0., 3600.), &mut media, &storage);
        assert_eq!(media.seeks, vec![61.]);
    }

    #[test]
    fn test_save_after_watched_threshold() {
        let mut tracker = default_tracker("abc123");
        let mut storage = MemoryStorage::new();

        tracker.on_seeking(&obs(0., 3600.));
        tracker.on_time_update(&obs(60., 3600.), &mut storage);
        assert_eq!(storage.item("videoabc123"), None);
        tracker.on_time_update(&obs(61., 3600.), &mut storage);
        assert_eq!(storage.item("videoabc123"), Some("61"));
    }

    #[test]
    fn test_seek_resets_watched_time() {
        let mut tracker = default_tracker("abc123");
        let mut storage = MemoryStorage::new();

        tracker.on_seeking(&obs(1000., 3600.));
        tracker.on_time_update(&obs(1050., 3600.), &mut storage);
        assert_eq!(storage.set_calls(), 0);
        tracker.on_time_update(&obs(1061., 3600.), &mut storage);
        assert_eq!(storage.item("videoabc123"), Some("1061"));
    }

    #[test]
    fn test_consecutive_saves_overwrite() {
        let mut tracker = default_tracker("abc123");
        let mut storage = MemoryStorage::new();

        tracker.on_time_update(&obs(70., 3600.), &mut storage);
        tracker.on_time_update(&obs(70.25, 3600.), &mut storage);
        assert_eq!(storage.set_calls(), 2);
        assert_eq!(storage.item("videoabc123"), Some("70.25"));
    }

    #[test]
    fn test_removal_near_the_end() {
        let mut tracker = default_tracker("abc123");
        let mut storage = MemoryStorage::new();

        tracker.on_time_update(&obs(3000., 3600.), &mut storage);
        assert_eq!(storage.item("videoabc123"), Some("3000"));
        tracker.on_time_update(&obs(3420., 3600.), &mut storage);
        assert_eq!(storage.item("videoabc123"), Some("3420"));
        tracker.on_time_update(&obs(3421., 3600.), &mut storage);
        assert_eq!(storage.item("videoabc123"), None);
        assert_eq!(storage.remove_calls(), 1);
    }

    #[test]
    fn test_full_session() {
        let mut tracker = tracker("v1", 10., 5., 3.);
        let mut media = FakeMediaElement::new();
        let mut storage = MemoryStorage::new();

        tracker.on_can_play(&obs(0., 100.), &mut media, &storage);
        assert!(media.seeks.is_empty());

        tracker.on_time_update(&obs(1., 100.), &mut storage);
        assert_eq!(storage.set_calls(), 0);

        tracker.on_time_update(&obs(6., 100.), &mut storage);
        assert_eq!(storage.item("videov1"), Some("6"));

        tracker.on_time_update(&obs(98., 100.), &mut storage);
        assert_eq!(storage.item("videov1"), None);
    }
}
