use std::sync::Arc;
use std::time::Duration;

use iced::widget::column;
use iced::{window, Element, Size, Subscription, Task};
use tracing::{debug, warn};

use crate::audio::{create_backend, AudioBackend, AudioSession};
use crate::geometry;
use crate::store::{SessionPatch, SessionStore};
use crate::ui::views;

/// How often the authoritative session list is re-fetched.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How long to let layout settle before the resize request goes out.
const RESIZE_SETTLE: Duration = Duration::from_millis(100);

// ── App ──────────────────────────────────────────────────────────────────────

pub struct MixerApp {
    store: SessionStore,
    backend: Arc<dyn AudioBackend>,
    /// Guards against a slow fetch overlapping the next poll tick.
    fetch_in_flight: bool,
    /// Bumped whenever the session count changes; a settle timer that comes
    /// back with an older epoch is stale and gets dropped.
    resize_epoch: u64,
}

// ── Messages ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    FetchTick,
    SessionsFetched(Result<Vec<AudioSession>, String>),
    VolumeChanged(u32, f32),
    ToggleMute(u32),
    MutationDone(Result<(), String>),
    LayoutSettled(u64),
    CloseRequested,
}

// ── Constructor ──────────────────────────────────────────────────────────────

impl MixerApp {
    pub fn new() -> (Self, Task<Message>) {
        Self::with_backend(create_backend())
    }

    pub(crate) fn with_backend(backend: Arc<dyn AudioBackend>) -> (Self, Task<Message>) {
        let app = Self {
            store: SessionStore::new(),
            backend,
            fetch_in_flight: false,
            resize_epoch: 0,
        };

        // Fetch immediately; the poll subscription takes over from there.
        (app, Task::done(Message::FetchTick))
    }
}

// ── Update ───────────────────────────────────────────────────────────────────

impl MixerApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FetchTick => {
                if !self.begin_fetch() {
                    return Task::none();
                }

                let backend = Arc::clone(&self.backend);
                Task::perform(
                    async move { backend.enumerate_sessions().map_err(|e| e.to_string()) },
                    Message::SessionsFetched,
                )
            }
            Message::SessionsFetched(result) => {
                self.fetch_in_flight = false;
                self.store.set_loading(false);
                match result {
                    Ok(sessions) => {
                        let previous_count = self.store.len();
                        self.store.replace_all(sessions);
                        self.store.set_error(None);
                        debug!(sessions = self.store.len(), "session snapshot applied");

                        if self.store.len() != previous_count {
                            self.schedule_resize()
                        } else {
                            Task::none()
                        }
                    }
                    Err(reason) => {
                        // Keep the stale collection; blanking the list would
                        // be worse than showing old values.
                        warn!("session fetch failed: {reason}");
                        self.store
                            .set_error(Some(format!("Failed to get audio sessions: {reason}")));
                        Task::none()
                    }
                }
            }

            Message::VolumeChanged(pid, volume) => {
                // Optimistic: the slider position sticks whether or not the
                // backend accepts the call. The next poll is the corrector.
                self.store.patch_by_pid(
                    pid,
                    SessionPatch {
                        volume: Some(volume),
                        ..Default::default()
                    },
                );

                let backend = Arc::clone(&self.backend);
                Task::perform(
                    async move { backend.set_volume(pid, volume).map_err(|e| e.to_string()) },
                    Message::MutationDone,
                )
            }
            Message::ToggleMute(pid) => {
                let Some(session) = self.store.sessions().iter().find(|s| s.pid == pid) else {
                    return Task::none();
                };
                let muted = !session.muted;
                self.store.patch_by_pid(
                    pid,
                    SessionPatch {
                        muted: Some(muted),
                        ..Default::default()
                    },
                );

                let backend = Arc::clone(&self.backend);
                Task::perform(
                    async move { backend.set_mute(pid, muted).map_err(|e| e.to_string()) },
                    Message::MutationDone,
                )
            }
            Message::MutationDone(Ok(())) => Task::none(),
            Message::MutationDone(Err(reason)) => {
                // No rollback of the optimistic value; just surface it.
                warn!("mutation rejected by backend: {reason}");
                self.store.set_error(Some(reason));
                Task::none()
            }

            Message::LayoutSettled(epoch) => {
                let Some(height) = self.settled_height(epoch) else {
                    return Task::none();
                };
                debug!(height, "resizing window to fit {} session(s)", self.store.len());
                window::get_latest()
                    .and_then(move |id| window::resize(id, Size::new(geometry::WINDOW_WIDTH, height)))
            }
            Message::CloseRequested => window::get_latest().and_then(window::close),
        }
    }

    /// Mark a fetch as outstanding, or refuse if one already is.
    ///
    /// One enumerate call at a time: a tick that fires while a slow fetch is
    /// still unresolved is collapsed into it.
    fn begin_fetch(&mut self) -> bool {
        if self.fetch_in_flight {
            debug!("previous fetch still in flight, skipping tick");
            return false;
        }
        self.fetch_in_flight = true;
        self.store.set_loading(true);
        true
    }

    /// Height to resize to for a settle timer, or `None` if the timer is
    /// stale because the session count changed again after it was scheduled.
    fn settled_height(&self, epoch: u64) -> Option<f32> {
        (epoch == self.resize_epoch).then(|| geometry::window_height(self.store.len()))
    }

    fn schedule_resize(&mut self) -> Task<Message> {
        self.resize_epoch += 1;
        let epoch = self.resize_epoch;
        Task::perform(tokio::time::sleep(RESIZE_SETTLE), move |_| {
            Message::LayoutSettled(epoch)
        })
    }
}

// ── View ─────────────────────────────────────────────────────────────────────

impl MixerApp {
    pub fn view(&self) -> Element<Message> {
        column![views::title_bar::view(), views::sessions::view(&self.store)].into()
    }
}

// ── Subscriptions ────────────────────────────────────────────────────────────

impl MixerApp {
    pub fn subscription(&self) -> Subscription<Message> {
        iced::time::every(POLL_INTERVAL).map(|_| Message::FetchTick)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::BackendError;

    struct StubBackend;

    impl AudioBackend for StubBackend {
        fn enumerate_sessions(&self) -> Result<Vec<AudioSession>, BackendError> {
            Ok(Vec::new())
        }

        fn set_volume(&self, _pid: u32, _volume: f32) -> Result<(), BackendError> {
            Ok(())
        }

        fn set_mute(&self, _pid: u32, _muted: bool) -> Result<(), BackendError> {
            Ok(())
        }
    }

    fn session(pid: u32, name: &str, volume: f32, muted: bool) -> AudioSession {
        AudioSession {
            pid,
            name: name.to_string(),
            icon_path: None,
            volume,
            muted,
        }
    }

    fn app_with(sessions: Vec<AudioSession>) -> MixerApp {
        let (mut app, _) = MixerApp::with_backend(Arc::new(StubBackend));
        let _ = app.update(Message::SessionsFetched(Ok(sessions)));
        app
    }

    #[test]
    fn fetch_tick_raises_loading_until_the_result_lands() {
        let (mut app, _) = MixerApp::with_backend(Arc::new(StubBackend));

        let _ = app.update(Message::FetchTick);
        assert!(app.store.loading());
        assert!(app.fetch_in_flight);

        let _ = app.update(Message::SessionsFetched(Ok(Vec::new())));
        assert!(!app.store.loading());
        assert!(!app.fetch_in_flight);
    }

    #[tokio::test]
    async fn successful_fetch_replaces_the_collection_and_clears_the_error() {
        let mut app = app_with(vec![session(1, "Old", 0.2, false)]);
        let _ = app.update(Message::SessionsFetched(Err("boom".into())));
        assert!(app.store.last_error().is_some());

        let snapshot = vec![session(2, "Music", 0.5, false), session(3, "Game", 0.9, true)];
        let _ = app.update(Message::SessionsFetched(Ok(snapshot.clone())));

        assert_eq!(app.store.sessions(), snapshot.as_slice());
        assert_eq!(app.store.last_error(), None);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_stale_collection() {
        let snapshot = vec![session(1, "Music", 0.5, false)];
        let mut app = app_with(snapshot.clone());

        let _ = app.update(Message::SessionsFetched(Err("device lost".into())));

        assert_eq!(app.store.sessions(), snapshot.as_slice());
        assert!(app.store.last_error().unwrap().contains("device lost"));
        assert!(!app.store.loading());
    }

    #[tokio::test]
    async fn volume_change_applies_immediately_and_survives_a_rejected_call() {
        let mut app = app_with(vec![session(100, "Music", 0.5, false)]);

        let _ = app.update(Message::VolumeChanged(100, 0.8));
        assert_eq!(app.store.sessions()[0].volume, 0.8);

        // Backend rejection surfaces an error but does not roll back.
        let _ = app.update(Message::MutationDone(Err("access denied".into())));
        assert_eq!(app.store.sessions()[0].volume, 0.8);
        assert!(app.store.last_error().is_some());

        // The next poll is what brings back the backend's truth.
        let _ = app.update(Message::SessionsFetched(Ok(vec![session(
            100, "Music", 0.5, false,
        )])));
        assert_eq!(app.store.sessions()[0].volume, 0.5);
    }

    #[tokio::test]
    async fn mute_toggle_flips_the_local_state() {
        let mut app = app_with(vec![session(7, "Call", 1.0, false)]);

        let _ = app.update(Message::ToggleMute(7));
        assert!(app.store.sessions()[0].muted);

        let _ = app.update(Message::ToggleMute(7));
        assert!(!app.store.sessions()[0].muted);
    }

    #[tokio::test]
    async fn mute_toggle_for_a_vanished_session_is_a_noop() {
        let snapshot = vec![session(7, "Call", 1.0, false)];
        let mut app = app_with(snapshot.clone());

        let _ = app.update(Message::ToggleMute(999));

        assert_eq!(app.store.sessions(), snapshot.as_slice());
    }

    #[test]
    fn a_tick_during_an_outstanding_fetch_starts_no_second_fetch() {
        let (mut app, _) = MixerApp::with_backend(Arc::new(StubBackend));

        let _ = app.update(Message::FetchTick);
        assert!(app.fetch_in_flight);

        // A second tick must be collapsed into the outstanding fetch.
        assert!(!app.begin_fetch());
        let _ = app.update(Message::FetchTick);
        assert!(app.fetch_in_flight);
        assert!(app.store.loading());

        // One result resolves the cycle and re-arms the guard.
        let _ = app.update(Message::SessionsFetched(Ok(Vec::new())));
        assert!(!app.fetch_in_flight);
        assert!(app.begin_fetch());
    }

    #[tokio::test]
    async fn a_stale_layout_settle_does_not_resize() {
        let mut app = app_with(vec![session(1, "Music", 0.5, false)]);
        let first_epoch = app.resize_epoch;

        // Count changes again before the first settle timer fires.
        let _ = app.update(Message::SessionsFetched(Ok(vec![
            session(1, "Music", 0.5, false),
            session(2, "Game", 0.3, true),
        ])));
        assert_eq!(app.resize_epoch, first_epoch + 1);

        // The late timer from the first change is discarded outright.
        assert_eq!(app.settled_height(first_epoch), None);

        // The current epoch still resizes, to the two-row height.
        assert_eq!(app.settled_height(app.resize_epoch), Some(170.0));
    }

    #[tokio::test]
    async fn resize_is_scheduled_only_when_the_session_count_changes() {
        let mut app = app_with(vec![session(1, "Music", 0.5, false)]);
        let epoch_after_first = app.resize_epoch;

        // Same cardinality, different content: no new settle timer.
        let _ = app.update(Message::SessionsFetched(Ok(vec![session(
            2, "Game", 0.3, true,
        )])));
        assert_eq!(app.resize_epoch, epoch_after_first);

        let _ = app.update(Message::SessionsFetched(Ok(vec![
            session(2, "Game", 0.3, true),
            session(3, "Call", 0.7, false),
        ])));
        assert_eq!(app.resize_epoch, epoch_after_first + 1);
    }
}
