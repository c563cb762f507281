mod model;
mod collector;

pub use model::Page;
pub use collector::{collect_pages, Pages};
