mod event_handler;
mod session;
mod state;

pub use event_handler::{handle_feed_event, refresh_home_stats};
pub use session::{start_feed, stop_feed};
pub use state::{AppState, AppStatus, FeedEvent};
