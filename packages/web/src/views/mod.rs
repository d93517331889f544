mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod watch;
pub use watch::Watch;
