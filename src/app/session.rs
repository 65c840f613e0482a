use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use super::state::{AppState, AppStatus};

/// Start streaming from the vision backend.
pub fn start_feed(state: &Rc<RefCell<AppState>>) {
    if state.borrow().status == AppStatus::Streaming {
        return;
    }

    let url = state.borrow().config.feed_url();
    log::info!("Starting feed: {url}");

    let sender = state.borrow().backend_sender.clone();
    let handle = state.borrow().tokio_rt.spawn(crate::feed::run_feed(url, sender));

    let mut s = state.borrow_mut();
    s.feed_task = Some(handle);
    s.status = AppStatus::Streaming;
    if let Some(ref cam) = s.camera {
        cam.status_label.set_text("Connecting...");
    }
}

/// Stop the feed session: tear down the socket, silence any in-flight
/// utterance and forget the gate's timing state so a suppression window
/// never carries over into the next session.
pub fn stop_feed(state: &Rc<RefCell<AppState>>) {
    log::info!("Stopping feed");

    let mut s = state.borrow_mut();
    if let Some(task) = s.feed_task.take() {
        task.abort();
    }
    if let Some(task) = s.speech_task.take() {
        task.abort();
    }
    if let Some(source) = s.release_source.take() {
        source.remove();
    }
    s.gate.reset();
    s.status = AppStatus::Idle;

    if let Some(ref cam) = s.camera {
        cam.picture.set_paintable(None::<&gtk4::gdk::Paintable>);
        cam.status_label.set_text("Stopped");
    }
}
