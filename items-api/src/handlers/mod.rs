pub mod create;
pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod login;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use login::login_handler;
pub use update::update_handler;
