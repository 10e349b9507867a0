//! Page components for different routes in the application.

pub mod login;
pub mod new_poem;
pub mod poem;
pub mod poems;
pub mod profile;
pub mod signup;
pub mod user;
pub mod users;

pub use login::*;
pub use new_poem::*;
pub use poem::*;
pub use poems::*;
pub use profile::*;
pub use signup::*;
pub use user::*;
pub use users::*;
