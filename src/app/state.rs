use gtk4::glib;

use crate::announcer::AnnounceGate;
use crate::config::Config;
use crate::stats::Stats;
use crate::ui::camera::CameraWidgets;
use crate::ui::home::HomeWidgets;

/// Events delivered to the GTK main thread. Every state transition in
/// the app happens on one of these.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    Connected,
    /// Raw JPEG bytes, already base64-decoded by the feed task.
    Frame(Vec<u8>),
    Detection(String),
    Closed,
    SpeechFinished,
    SpeechFailed(String),
}

/// Feed session status.
#[derive(Debug, Clone, PartialEq)]
pub enum AppStatus {
    Idle,
    Streaming,
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub status: AppStatus,
    pub config: Config,
    pub stats: Stats,
    pub gate: AnnounceGate,
    pub tokio_rt: tokio::runtime::Runtime,
    pub backend_sender: async_channel::Sender<FeedEvent>,

    // Session state
    pub feed_task: Option<tokio::task::JoinHandle<()>>,
    pub speech_task: Option<tokio::task::JoinHandle<()>>,
    pub release_source: Option<glib::SourceId>,

    // UI handles
    pub home: Option<HomeWidgets>,
    pub camera: Option<CameraWidgets>,
}

impl AppState {
    pub fn new(sender: async_channel::Sender<FeedEvent>) -> Self {
        let config = Config::load();
        let stats = Stats::load();
        let tokio_rt = tokio::runtime::Runtime::new()
            .expect("Failed to create tokio runtime");

        Self {
            status: AppStatus::Idle,
            config,
            stats,
            gate: AnnounceGate::new(),
            tokio_rt,
            backend_sender: sender,
            feed_task: None,
            speech_task: None,
            release_source: None,
            home: None,
            camera: None,
        }
    }
}

/// Helper to update the camera status label and state.
pub fn update_status(
    state: &std::rc::Rc<std::cell::RefCell<AppState>>,
    status: AppStatus,
    label_text: &str,
) {
    let mut s = state.borrow_mut();
    s.status = status;
    if let Some(ref cam) = s.camera {
        cam.status_label.set_text(label_text);
    }
}
