pub mod metadata;
pub mod splitter;

// Re-export the most common items for convenience
pub use metadata::{Metadata, NO_DATE};
pub use splitter::split_front_matter;
