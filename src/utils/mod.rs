pub mod error;
pub mod fs;
pub mod slug;

pub use error::{SiteError, SiteResult};
pub use slug::slugify;
