use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use gtk4::glib;
use gtk4::prelude::*;

use super::state::{AppState, AppStatus, FeedEvent, update_status};
use crate::announcer::Decision;

/// Handle a feed event. This is the core state machine.
pub fn handle_feed_event(state: &Rc<RefCell<AppState>>, event: FeedEvent) {
    match event {
        FeedEvent::Connected => {
            update_status(state, AppStatus::Streaming, "Streaming");
        }
        FeedEvent::Frame(jpeg) => {
            show_frame(state, jpeg);
        }
        FeedEvent::Detection(label) => {
            log::info!("Detection: {label}");
            state.borrow_mut().stats.record_detection();
            on_detection(state, label);
        }
        FeedEvent::SpeechFinished => {
            schedule_release(state);
        }
        FeedEvent::SpeechFailed(err) => {
            // The synthesizer is an external collaborator; log and move
            // on so the gate doesn't stay closed forever.
            log::error!("Speech failed: {err}");
            schedule_release(state);
        }
        FeedEvent::Closed => {
            log::info!("Feed closed");
            let mut s = state.borrow_mut();
            if s.status == AppStatus::Streaming {
                s.status = AppStatus::Idle;
                s.feed_task = None;
                if let Some(ref cam) = s.camera {
                    cam.status_label.set_text("Disconnected");
                }
            }
        }
    }
}

/// Render one JPEG frame into the camera picture.
fn show_frame(state: &Rc<RefCell<AppState>>, jpeg: Vec<u8>) {
    let s = state.borrow();
    if let Some(ref cam) = s.camera {
        let bytes = glib::Bytes::from_owned(jpeg);
        match gtk4::gdk::Texture::from_bytes(&bytes) {
            Ok(texture) => cam.picture.set_paintable(Some(&texture)),
            Err(e) => log::warn!("Failed to decode frame: {e}"),
        }
    }
}

/// Run a detection through the gate and start speaking if accepted.
fn on_detection(state: &Rc<RefCell<AppState>>, label: String) {
    let decision = state.borrow_mut().gate.try_announce(Instant::now());
    match decision {
        Decision::Speak => {
            // A release from the previous utterance may still be pending.
            if let Some(source) = state.borrow_mut().release_source.take() {
                source.remove();
            }

            log::info!("Speaking: {label}");
            {
                let mut s = state.borrow_mut();
                let model = s.config.model;
                s.stats.record_announcement(&label, model);
                if let Err(e) = s.stats.save() {
                    log::warn!("Failed to save stats: {e}");
                }
            }
            refresh_home_stats(state);
            dispatch_speech(state, label);
        }
        Decision::Suppressed => {
            log::debug!("Suppressed announcement: {label}");
        }
    }
}

/// Dispatch the utterance on the tokio runtime; completion comes back
/// as a SpeechFinished/SpeechFailed event.
fn dispatch_speech(state: &Rc<RefCell<AppState>>, label: String) {
    let s = state.borrow();
    let sender = s.backend_sender.clone();

    let handle = s.tokio_rt.spawn(async move {
        match crate::speech::speak(&label).await {
            Ok(()) => {
                let _ = sender.send(FeedEvent::SpeechFinished).await;
            }
            Err(e) => {
                let _ = sender.send(FeedEvent::SpeechFailed(e.to_string())).await;
            }
        }
    });
    drop(s);

    state.borrow_mut().speech_task = Some(handle);
}

/// The utterance ended: reopen the gate once the unspent part of the
/// cooldown has elapsed.
fn schedule_release(state: &Rc<RefCell<AppState>>) {
    let remaining = state.borrow().gate.cooldown_remaining(Instant::now());
    log::debug!("Utterance finished, gate reopens in {remaining:?}");

    let state_clone = state.clone();
    let source = glib::timeout_add_local_once(remaining, move || {
        let mut s = state_clone.borrow_mut();
        s.gate.release();
        s.release_source = None;
    });

    let mut s = state.borrow_mut();
    if let Some(old) = s.release_source.take() {
        old.remove();
    }
    s.release_source = Some(source);
    s.speech_task = None;
}

/// Push current totals into the home screen labels.
pub fn refresh_home_stats(state: &Rc<RefCell<AppState>>) {
    let s = state.borrow();
    if let Some(ref home) = s.home {
        home.detections_label
            .set_text(&s.stats.total_detections.to_string());
        home.announcements_label
            .set_text(&s.stats.total_announcements.to_string());
    }
}
