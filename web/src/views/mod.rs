mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod not_found;
pub use not_found::NotFound;

pub use ui::views::About;
