mod yaml;

pub use yaml::{mapping_to_liquid, yaml_to_liquid};
