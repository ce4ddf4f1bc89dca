mod login_user;

pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto};
