use crate::{media_element::MediaObservation, wasm_bindgen};

use super::WaspResumer;

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl WaspResumer {
    /// The JS code should call this method once the player is ready, after
    /// `jsAwaitPlayerReady` was called.
    pub fn on_player_ready(&mut self) {
        self.inner.on_player_ready();
    }

    /// The JS code should call this method each time a `Seeking`
    /// `PlaybackEvent`, subscribed to through `jsAddPlaybackListener`, is
    /// triggered.
    ///
    /// # Arguments
    ///
    /// * `observation` - Playback conditions when the event was triggered.
    ///   Its `current_time` should be the position seeked to.
    pub fn on_seeking(&mut self, observation: MediaObservation) {
        self.inner.on_seeking(&observation);
    }

    /// The JS code should call this method each time a `CanPlay`
    /// `PlaybackEvent`, subscribed to through `jsAddPlaybackListener`, is
    /// triggered.
    ///
    /// # Arguments
    ///
    /// * `observation` - Playback conditions when the event was triggered.
    pub fn on_can_play(&mut self, observation: MediaObservation) {
        self.inner.on_can_play(&observation);
    }

    /// The JS code should call this method each time a `TimeUpdate`
    /// `PlaybackEvent`, subscribed to through `jsAddPlaybackListener`, is
    /// triggered.
    ///
    /// # Arguments
    ///
    /// * `observation` - Playback conditions when the event was triggered.
    pub fn on_time_update(&mut self, observation: MediaObservation) {
        self.inner.on_time_update(&observation);
    }
}
