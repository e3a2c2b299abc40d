use soup::prelude::*;
use std::io;

/// Collects the `href` of every anchor in an HTML document.
///
/// The accumulated links belong to the extractor and are cleared at the start
/// of every [`extract`](AnchorExtractor::extract), so one extractor can be
/// reused for any number of documents, one at a time.
#[derive(Debug, Default)]
pub struct AnchorExtractor {
    links: Vec<String>,
}

impl AnchorExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `html` and returns the href values of its anchors in document order.
    ///
    /// Markup is parsed the way a browser would, so unclosed tags, stray `<`
    /// and unknown elements never fail the extraction. Anchors without an
    /// `href` attribute are skipped. Only a failure to read the input is an error.
    pub fn extract(&mut self, html: &[u8]) -> io::Result<&[String]> {
        self.reset();
        let soup = Soup::from_reader(html)?;
        self.links
            .extend(soup.tag("a").find_all().filter_map(|a| a.get("href")));
        Ok(&self.links)
    }

    /// Links found by the last call to `extract`.
    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn reset(&mut self) {
        self.links.clear();
    }

    pub fn into_links(self) -> Vec<String> {
        self.links
    }
}

/// Returns the href values of all anchors in `html` using a fresh extractor.
pub fn extract(html: &[u8]) -> io::Result<Vec<String>> {
    let mut extractor = AnchorExtractor::new();
    extractor.extract(html)?;
    Ok(extractor.into_links())
}
