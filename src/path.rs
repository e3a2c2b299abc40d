/// Path operations on hrefs found in a directory index.
pub trait HrefExt {
    /// True for links pointing above the listing (`/parent/`), re-sorting it
    /// (`?C=N;O=D`) or back at itself (`""`).
    fn is_navigation(&self) -> bool;

    /// Appends the href to a location as a plain path segment join.
    fn join_onto(&self, location: &str) -> String;

    /// True if the last path segment ends with `.{extension}`.
    fn has_extension(&self, extension: &str) -> bool;
}

impl HrefExt for str {
    fn is_navigation(&self) -> bool {
        self.is_empty() || self.starts_with(['/', '?'])
    }

    fn join_onto(&self, location: &str) -> String {
        if location.is_empty() || location.ends_with('/') {
            format!("{location}{self}")
        } else {
            format!("{location}/{self}")
        }
    }

    fn has_extension(&self, extension: &str) -> bool {
        let name = self.rsplit('/').next().unwrap_or(self);
        name.strip_suffix(extension)
            .map_or(false, |stem| stem.ends_with('.'))
    }
}
