pub mod login;
pub mod logout;
pub mod register;

pub use login::LoginService;
pub use logout::LogoutService;
pub use register::RegisterService;
