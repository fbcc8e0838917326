mod login;
mod logout;

pub use login::login_handler;
pub use logout::logout_handler;
