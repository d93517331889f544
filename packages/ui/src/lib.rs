//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{use_session, SessionProvider, SessionState};

mod header;
pub use header::Header;

mod subscribe;
pub use subscribe::SubscribeButton;

mod prefs;
pub use prefs::make_prefs;
