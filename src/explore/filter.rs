/// Case-insensitive substring filter over file names.
///
/// Built once per exploration; the needle is lower-cased at construction so
/// matching only lower-cases the candidate.
#[derive(Clone, Debug, Default)]
pub struct NameFilter {
    needle: Option<String>,
}

impl NameFilter {
    /// An absent or empty term accepts every name.
    pub fn new(name_contains: Option<&str>) -> Self {
        let needle = name_contains
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        match &self.needle {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}
