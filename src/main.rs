mod announcer;
mod app;
mod config;
mod feed;
mod speech;
mod stats;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use libadwaita::prelude::*;

use app::{AppState, FeedEvent};
use config::DetectionModel;

fn main() {
    env_logger::init();
    log::info!("Guidance Camera starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.tr4m0ryp.guidance-cam")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // Create async channel for backend → UI communication
    let (backend_tx, backend_rx) = async_channel::unbounded::<FeedEvent>();

    // Build app state
    let state = Rc::new(RefCell::new(AppState::new(backend_tx)));

    // Build UI
    let home = ui::home::build_home(
        app,
        state.borrow().stats.total_detections,
        state.borrow().stats.total_announcements,
        &state.borrow().config.server_url,
    );
    let camera = ui::camera::build_camera(app, state.borrow().config.model);

    // Wire up the "Open Camera" button
    {
        let state_clone = state.clone();
        home.open_button.connect_clicked(move |_| {
            let s = state_clone.borrow();
            if let (Some(home), Some(cam)) = (&s.home, &s.camera) {
                home.window.set_visible(false);
                cam.window.present();
            }
        });
    }

    // Wire up server URL changes
    {
        let state_clone = state.clone();
        home.server_row.connect_changed(move |row: &libadwaita::EntryRow| {
            let url = row.text().to_string();
            let mut s = state_clone.borrow_mut();
            s.config.server_url = url;
            if let Err(e) = s.config.save() {
                log::warn!("Failed to save config: {e}");
            }
        });
    }

    // Wire up model radio buttons
    {
        let state_clone = state.clone();
        camera.generic_radio.connect_toggled(move |radio| {
            if radio.is_active() {
                set_model(&state_clone, DetectionModel::Generic);
            }
        });
        let state_clone = state.clone();
        camera.currency_radio.connect_toggled(move |radio| {
            if radio.is_active() {
                set_model(&state_clone, DetectionModel::Currency);
            }
        });
    }

    // Wire up Start / Stop
    {
        let state_clone = state.clone();
        camera.start_button.connect_clicked(move |_| {
            app::start_feed(&state_clone);
        });
        let state_clone = state.clone();
        camera.stop_button.connect_clicked(move |_| {
            app::stop_feed(&state_clone);
        });
    }

    // Wire up Back: stop the feed and return to the home screen
    {
        let state_clone = state.clone();
        camera.back_button.connect_clicked(move |_| {
            go_home(&state_clone);
        });
    }

    // Closing the camera window behaves like Back
    {
        let state_clone = state.clone();
        camera.window.connect_close_request(move |_| {
            go_home(&state_clone);
            gtk4::glib::Propagation::Stop
        });
    }

    // Store UI handles in state
    {
        let mut s = state.borrow_mut();
        s.home = Some(home);
        s.camera = Some(camera);
    }

    // Show the home screen
    state.borrow().home.as_ref().unwrap().window.present();

    // Attach feed event handler
    {
        let state_clone = state.clone();
        gtk4::glib::spawn_future_local(async move {
            while let Ok(event) = backend_rx.recv().await {
                app::handle_feed_event(&state_clone, event);
            }
        });
    }
}

/// Persist a model selection; it takes effect on the next Start.
fn set_model(state: &Rc<RefCell<AppState>>, model: DetectionModel) {
    let mut s = state.borrow_mut();
    if s.config.model == model {
        return;
    }
    log::info!("Model selected: {}", model.query_value());
    s.config.model = model;
    if let Err(e) = s.config.save() {
        log::warn!("Failed to save config: {e}");
    }
}

/// Leave the camera screen: stop the session and present home again.
fn go_home(state: &Rc<RefCell<AppState>>) {
    app::stop_feed(state);
    app::refresh_home_stats(state);
    let s = state.borrow();
    if let (Some(home), Some(cam)) = (&s.home, &s.camera) {
        cam.window.set_visible(false);
        home.window.present();
    }
}
