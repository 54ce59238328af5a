use crate::{
    bindings::{ListenerId, PlaybackEvent},
    configuration::{Configuration, ResumerOptions},
    media_element::{MediaElement, MediaObservation},
    storage::{ProgressStorage, StorageKey},
    tracker::PositionTracker,
    Logger,
};

/// CSS class added to the player once its position is being tracked.
const PLAYER_CLASS_NAME: &str = "vjs-resumer";

/// Events a `Resumer` subscribes to once the player is ready.
const TRACKED_EVENTS: [PlaybackEvent; 3] = [
    PlaybackEvent::Seeking,
    PlaybackEvent::CanPlay,
    PlaybackEvent::TimeUpdate,
];

/// Links a `PositionTracker` to a player and to a storage, handling when it
/// should start and stop receiving playback events.
pub(crate) struct Resumer<M: MediaElement, S: ProgressStorage> {
    media: M,
    storage: S,
    state: ResumerState,
}

/// Identify the lifecycle step a `Resumer` is in.
enum ResumerState {
    /// The given options were invalid. Nothing will ever be done.
    Disabled,

    /// Waiting for the player to be ready before tracking its position.
    AwaitingReady { configuration: Configuration },

    /// Playback events are listened to and the position is being tracked.
    Active {
        tracker: PositionTracker,
        listeners: Vec<ListenerId>,
    },

    /// All listeners have been removed. Nothing will be done anymore.
    Disposed,
}

impl<M: MediaElement, S: ProgressStorage> Resumer<M, S> {
    /// Create a new `Resumer` for the given player and storage.
    ///
    /// If the given options are invalid, an error is logged and the `Resumer`
    /// does nothing, neither on the player nor on the storage. Otherwise, it
    /// waits for the player to be ready, which is signaled through
    /// `on_player_ready`.
    pub(crate) fn new(options: &ResumerOptions, mut media: M, storage: S) -> Self {
        let state = match Configuration::from_options(options) {
            Ok(configuration) => {
                media.await_ready();
                ResumerState::AwaitingReady { configuration }
            }
            Err(err) => {
                Logger::lazy_error(&|| format!("Resumer Plugin: {}", err));
                ResumerState::Disabled
            }
        };
        Self {
            media,
            storage,
            state,
        }
    }

    /// Returns the key under which the position is stored, `None` if not
    /// tracking it.
    pub(crate) fn storage_key(&self) -> Option<&StorageKey> {
        match &self.state {
            ResumerState::Active { tracker, .. } => Some(tracker.storage_key()),
            _ => None,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        matches!(self.state, ResumerState::Active { .. })
    }

    /// To call once the player is ready. Only the first call has an effect.
    pub(crate) fn on_player_ready(&mut self) {
        let configuration = match std::mem::replace(&mut self.state, ResumerState::Disposed) {
            ResumerState::AwaitingReady { configuration } => configuration,
            other => {
                self.state = other;
                Logger::debug("Resumer: player ready signal ignored");
                return;
            }
        };
        let tracker = PositionTracker::new(configuration);
        Logger::lazy_info(&|| {
            format!("Resumer: tracking position under {}", tracker.storage_key())
        });
        self.media.add_class(PLAYER_CLASS_NAME);
        let listeners = TRACKED_EVENTS
            .iter()
            .map(|event| self.media.add_listener(*event))
            .collect();
        self.state = ResumerState::Active { tracker, listeners };
    }

    pub(crate) fn on_seeking(&mut self, observation: &MediaObservation) {
        match &mut self.state {
            ResumerState::Active { tracker, .. } => tracker.on_seeking(observation),
            _ => log_ignored_event(PlaybackEvent::Seeking),
        }
    }

    pub(crate) fn on_can_play(&mut self, observation: &MediaObservation) {
        match &mut self.state {
            ResumerState::Active { tracker, .. } => {
                tracker.on_can_play(observation, &mut self.media, &self.storage)
            }
            _ => log_ignored_event(PlaybackEvent::CanPlay),
        }
    }

    pub(crate) fn on_time_update(&mut self, observation: &MediaObservation) {
        match &mut self.state {
            ResumerState::Active { tracker, .. } => {
                tracker.on_time_update(observation, &mut self.storage)
            }
            _ => log_ignored_event(PlaybackEvent::TimeUpdate),
        }
    }

    /// Remove every listener added by this `Resumer`, after which it won't do
    /// anything anymore.
    ///
    /// Calling it multiple times has no further effect.
    pub(crate) fn dispose(&mut self) {
        match std::mem::replace(&mut self.state, ResumerState::Disposed) {
            ResumerState::Active { listeners, .. } => {
                listeners
                    .into_iter()
                    .for_each(|id| self.media.remove_listener(id));
                Logger::info("Resumer: disposed");
            }
            ResumerState::Disabled => self.state = ResumerState::Disabled,
            ResumerState::AwaitingReady { .. } | ResumerState::Disposed => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn parts(&self) -> (&M, &S) {
        (&self.media, &self.storage)
    }
}

fn log_ignored_event(event: PlaybackEvent) {
    Logger::lazy_debug(&|| format!("Resumer: {:?} event ignored, not tracking", event));
}
