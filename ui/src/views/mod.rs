mod user_form;
pub use user_form::UserForm;

mod user_list;
pub use user_list::UserList;

mod about;
pub use about::About;
