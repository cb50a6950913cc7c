//! Page components.

mod login;
mod main;

pub use login::LoginPage;
pub use main::MainPage;
pub use test::TestPage;
