use crate::bindings::{
    jsAddPlaybackListener, jsAddPlayerClass, jsAwaitPlayerReady, jsRemovePlaybackListener,
    jsSeek, ListenerId, PlaybackEvent, PlayerId,
};
use crate::wasm_bindgen;

#[cfg(test)]
pub(crate) mod fake;

/// Actions a `Resumer` may perform on the player it is linked to, such as:
///   - seeking
///   - subscribing to, and unsubscribing from, playback events
///   - waiting for the player to be ready
pub(crate) trait MediaElement {
    /// Move the current position to `position`, in seconds.
    fn seek(&mut self, position: f64);

    /// Begin receiving the given `PlaybackEvent`. The returned `ListenerId`
    /// allows to stop receiving it through `remove_listener`.
    fn add_listener(&mut self, event: PlaybackEvent) -> ListenerId;

    /// Stop receiving events for a subscription made through `add_listener`.
    fn remove_listener(&mut self, id: ListenerId);

    /// Ask to be notified once the player is ready. This notification happens only once.
    fn await_ready(&mut self);

    /// Add a CSS class name to the player's root element.
    fn add_class(&mut self, class_name: &str);
}

/// `MediaElement` implementation for a player living on the JavaScript-side.
pub(crate) struct JsMediaElement {
    player_id: PlayerId,
}

impl JsMediaElement {
    pub(crate) fn new(player_id: PlayerId) -> Self {
        Self { player_id }
    }
}

impl MediaElement for JsMediaElement {
    fn seek(&mut self, position: f64) {
        jsSeek(self.player_id, position);
    }

    fn add_listener(&mut self, event: PlaybackEvent) -> ListenerId {
        jsAddPlaybackListener(self.player_id, event)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        jsRemovePlaybackListener(self.player_id, id);
    }

    fn await_ready(&mut self) {
        jsAwaitPlayerReady(self.player_id);
    }

    fn add_class(&mut self, class_name: &str) {
        jsAddPlayerClass(self.player_id, class_name);
    }
}

/// Snapshot of the player's playback conditions, sent by the JavaScript-side
/// alongside each `PlaybackEvent`.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MediaObservation {
    current_time: f64,
    duration: f64,
}

#[wasm_bindgen]
impl MediaObservation {
    /// # Arguments
    ///
    /// * `current_time` - The player's current position, in seconds.
    ///
    /// * `duration` - The duration of the current media, in seconds. May be `NaN`
    ///   while not yet known.
    #[wasm_bindgen(constructor)]
    pub fn new(current_time: f64, duration: f64) -> Self {
        Self {
            current_time,
            duration,
        }
    }
}

impl MediaObservation {
    #[inline(always)]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[inline(always)]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}
