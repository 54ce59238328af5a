use crate::wasm_bindgen;

/// # js_functions
///
/// This file lists all JavaScript functions that are callable from Rust as well as
/// struct and enumeration used by those functions.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // Call the `HTMLMediaElement.prototype.currentTime` setter of the player
    // identified by `player_id`, moving its playhead to `position`, in seconds.
    pub fn jsSeek(player_id: PlayerId, position: f64);

    // Start listening to the given `PlaybackEvent` on the player identified by
    // `player_id`.
    //
    // Each time that event is then triggered, the corresponding method of the
    // `WaspResumer` linked to that player (`on_seeking`, `on_can_play` or
    // `on_time_update`) will be called with a new `MediaObservation`.
    //
    // The returned `ListenerId` identifies that subscription and should be given
    // to `jsRemovePlaybackListener` once those events are not needed anymore.
    pub fn jsAddPlaybackListener(player_id: PlayerId, event: PlaybackEvent) -> ListenerId;

    // Stop listening to an event previously subscribed to through
    // `jsAddPlaybackListener`.
    //
    // After calling this function, the corresponding `WaspResumer` method won't be
    // called for that subscription ever again.
    // Note that this `ListenerId` may now be re-used for any other future
    // subscription.
    pub fn jsRemovePlaybackListener(player_id: PlayerId, listener_id: ListenerId);

    // Wait for the player identified by `player_id` to be ready (its DOM and
    // child components being in place) and call the `on_player_ready` method of
    // the linked `WaspResumer` once it is.
    //
    // If the player is already ready, `on_player_ready` is still called
    // asynchronously after this call.
    pub fn jsAwaitPlayerReady(player_id: PlayerId);

    // Add the given CSS class name to the root element of the player identified
    // by `player_id`.
    pub fn jsAddPlayerClass(player_id: PlayerId, class_name: &str);

    // Returns the value stored under `key` in the page's persistent storage
    // (`localStorage`), or `None` if nothing is stored there.
    pub fn jsStorageGetItem(key: &str) -> Option<String>;

    // Store `value` under `key` in the page's persistent storage
    // (`localStorage`), replacing any previous value.
    //
    // Exceptions (e.g. quota errors) are not caught and propagate to the
    // caller of the current `WaspResumer` method.
    pub fn jsStorageSetItem(key: &str, value: &str);

    // Remove whatever is stored under `key` in the page's persistent storage
    // (`localStorage`).
    pub fn jsStorageRemoveItem(key: &str);
}

/// Identify the player a `WaspResumer` is linked to, on the JavaScript-side.
///
/// Several players may be present on the same page, each with its own
/// `WaspResumer`.
pub type PlayerId = u32;

/// Identify a playback event subscription.
pub type ListenerId = u32;

/// Playback events a `WaspResumer` may subscribe to through
/// `jsAddPlaybackListener`.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Corresponds to the HTMLMediaElement's "seeking" event: a seek operation
    /// just began.
    Seeking = 0,

    /// Corresponds to the HTMLMediaElement's "canplay" event: playback can
    /// start.
    CanPlay = 1,

    /// Corresponds to the HTMLMediaElement's "timeupdate" event, sent
    /// periodically while playing.
    TimeUpdate = 2,
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}
