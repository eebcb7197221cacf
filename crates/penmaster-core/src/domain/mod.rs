//! Domain entities - the core business objects.

mod platform;

mod post;

mod user;

pub use platform::{DEFAULT_WEEKDAYS, Platform};
pub use post::{Post, PostStatus};
pub use user::User;
