mod cleaning;

pub use cleaning::clean_html_files;
