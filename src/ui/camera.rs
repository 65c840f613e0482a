use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::config::DetectionModel;

/// Handles returned from building the camera window.
pub struct CameraWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub picture: gtk4::Picture,
    pub status_label: gtk4::Label,
    pub generic_radio: gtk4::CheckButton,
    pub currency_radio: gtk4::CheckButton,
    pub start_button: gtk4::Button,
    pub stop_button: gtk4::Button,
    pub back_button: gtk4::Button,
}

/// Build the camera feed window.
pub fn build_camera(
    app: &libadwaita::Application,
    initial_model: DetectionModel,
) -> CameraWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Camera Feed")
        .default_width(700)
        .default_height(640)
        .build();

    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_string(
        r#"
        picture.feed-view {
            background-color: black;
            border-radius: 12px;
        }
        "#,
    );
    gtk4::style_context_add_provider_for_display(
        &gtk4::gdk::Display::default().unwrap(),
        &css_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    let back_button = gtk4::Button::from_icon_name("go-previous-symbolic");
    back_button.set_tooltip_text(Some("Back to home"));
    header.pack_start(&back_button);

    let status_label = gtk4::Label::new(Some("Idle"));
    status_label.add_css_class("dim-label");
    header.pack_end(&status_label);

    toolbar_view.add_top_bar(&header);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Feed view ---
    let picture = gtk4::Picture::new();
    picture.set_size_request(640, 480);
    picture.add_css_class("feed-view");
    picture.set_halign(gtk4::Align::Center);
    content.append(&picture);

    // --- Model selection ---
    let model_box = gtk4::Box::new(gtk4::Orientation::Horizontal, 16);
    model_box.set_halign(gtk4::Align::Center);

    let generic_radio =
        gtk4::CheckButton::with_label(DetectionModel::Generic.display_name());
    let currency_radio =
        gtk4::CheckButton::with_label(DetectionModel::Currency.display_name());
    currency_radio.set_group(Some(&generic_radio));

    match initial_model {
        DetectionModel::Generic => generic_radio.set_active(true),
        DetectionModel::Currency => currency_radio.set_active(true),
    }

    model_box.append(&generic_radio);
    model_box.append(&currency_radio);
    content.append(&model_box);

    // --- Controls ---
    let button_box = gtk4::Box::new(gtk4::Orientation::Horizontal, 12);
    button_box.set_halign(gtk4::Align::Center);

    let start_button = gtk4::Button::with_label("Start");
    start_button.add_css_class("suggested-action");
    let stop_button = gtk4::Button::with_label("Stop");
    stop_button.add_css_class("destructive-action");

    button_box.append(&start_button);
    button_box.append(&stop_button);
    content.append(&button_box);

    toolbar_view.set_content(Some(&content));
    window.set_content(Some(&toolbar_view));

    CameraWidgets {
        window,
        picture,
        status_label,
        generic_radio,
        currency_radio,
        start_button,
        stop_button,
        back_button,
    }
}
