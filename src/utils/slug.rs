/// Derive the output file stem for a page from its title.
///
/// Lowercases and turns every space into a hyphen, nothing else. Titles
/// that differ only in case map to the same slug, and the later page
/// overwrites the earlier one's output.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}
