use gtk4::prelude::*;
use libadwaita::prelude::*;

/// Handles returned from building the home window.
pub struct HomeWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub open_button: gtk4::Button,
    pub detections_label: gtk4::Label,
    pub announcements_label: gtk4::Label,
    pub server_row: libadwaita::EntryRow,
}

/// Build the landing window.
pub fn build_home(
    app: &libadwaita::Application,
    initial_detections: usize,
    initial_announcements: usize,
    initial_server_url: &str,
) -> HomeWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Guidance Camera")
        .default_width(450)
        .default_height(500)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();
    toolbar_view.add_top_bar(&header);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Welcome ---
    let title = gtk4::Label::new(Some("Standalone Guidance System"));
    title.add_css_class("title-2");
    title.set_margin_top(12);
    content.append(&title);

    let subtitle = gtk4::Label::new(Some(
        "Live camera feed with spoken object announcements",
    ));
    subtitle.add_css_class("dim-label");
    subtitle.set_margin_bottom(12);
    content.append(&subtitle);

    let open_button = gtk4::Button::builder()
        .label("Open Camera")
        .halign(gtk4::Align::Center)
        .build();
    open_button.add_css_class("suggested-action");
    open_button.add_css_class("pill");
    open_button.set_margin_bottom(16);
    content.append(&open_button);

    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // --- Statistics group ---
    let stats_group = libadwaita::PreferencesGroup::new();
    stats_group.set_title("Statistics");
    stats_group.set_margin_top(12);

    let detections_row = libadwaita::ActionRow::builder()
        .title("Detections Received")
        .build();
    let detections_label = gtk4::Label::new(Some(&initial_detections.to_string()));
    detections_label.add_css_class("dim-label");
    detections_row.add_suffix(&detections_label);
    stats_group.add(&detections_row);

    let announcements_row = libadwaita::ActionRow::builder()
        .title("Announcements Spoken")
        .build();
    let announcements_label =
        gtk4::Label::new(Some(&initial_announcements.to_string()));
    announcements_label.add_css_class("dim-label");
    announcements_row.add_suffix(&announcements_label);
    stats_group.add(&announcements_row);

    content.append(&stats_group);
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // --- Server group ---
    let server_group = libadwaita::PreferencesGroup::new();
    server_group.set_title("Backend");
    server_group.set_margin_top(12);

    let server_row = libadwaita::EntryRow::builder()
        .title("Server URL")
        .text(initial_server_url)
        .build();
    server_group.add(&server_row);

    content.append(&server_group);

    // Assemble
    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();
    toolbar_view.set_content(Some(&scrolled));
    window.set_content(Some(&toolbar_view));

    HomeWidgets {
        window,
        open_button,
        detections_label,
        announcements_label,
        server_row,
    }
}
