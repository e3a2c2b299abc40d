use crate::{parsing, path::HrefExt, response::ResponseExt, server::Server};

use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr};
use log::{debug, warn};
use reqwest::Client;
use url::Url;

/// Outcome of listing one remote directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The index was fetched and these paths matched, in index order.
    Files(Vec<String>),
    /// The index was fetched but nothing in it matched.
    Empty,
    /// The index could not be fetched.
    FetchFailed(String),
}

impl Listing {
    fn from_files(files: Vec<String>) -> Self {
        if files.is_empty() {
            Listing::Empty
        } else {
            Listing::Files(files)
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Listing::FetchFailed(_))
    }

    /// Matching paths, treating a failed fetch the same as an empty directory.
    pub fn into_files(self) -> Vec<String> {
        match self {
            Listing::Files(files) => files,
            Listing::Empty | Listing::FetchFailed(_) => vec![],
        }
    }
}

/// Browses the HTTP directory indexes of a remote server.
pub struct DirectoryBrowser<S> {
    server: S,
    /// The HTTP(S) client used to retrieve directory indexes.
    client: Client,
}

impl<S: Server> DirectoryBrowser<S> {
    /// Creates a browser whose client keeps no idle connections, so each
    /// listing opens its own connection and closes it when done.
    pub fn new(server: S) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .wrap_err("Failed to build the HTTP client")?;
        Ok(Self::with_client(server, client))
    }

    pub fn with_client(server: S, client: Client) -> Self {
        DirectoryBrowser { server, client }
    }

    pub fn server(&self) -> &S {
        &self.server
    }

    /// Returns the directories which may hold data for the requested range.
    ///
    /// Nothing is fetched: the directories come straight from the server and
    /// do not necessarily exist remotely. Errors from the server are returned as is.
    pub fn get_directories(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<String>> {
        self.server.compute_directories(start, end)
    }

    /// Returns every file at `location` whose name ends with `.{extension}`.
    ///
    /// A directory that cannot be fetched, including a location that is not a
    /// URL, yields no files; use [`list_files`](Self::list_files) to tell the
    /// two apart.
    ///
    /// The index is fetched with a single request that must be awaited to
    /// completion on a tokio runtime. Nothing is fetched concurrently, so on a
    /// current-thread runtime the call holds the thread until the response is in.
    pub async fn get_files(&self, location: &str, extension: &str) -> Result<Vec<String>> {
        Ok(self.list_files(location, extension).await?.into_files())
    }

    /// Lists the files at `location` ending with `.{extension}`, reporting
    /// fetch failures instead of hiding them.
    ///
    /// Every failure to fetch or read the index, an unparsable location
    /// included, becomes [`Listing::FetchFailed`].
    pub async fn list_files(&self, location: &str, extension: &str) -> Result<Listing> {
        match self.links(location).await {
            Ok(links) => Ok(Listing::from_files(
                resolve(location, links)
                    .filter(|path| path.has_extension(extension))
                    .collect(),
            )),
            Err(e) => {
                warn!("Failed to list {location}: {e:#}");
                Ok(Listing::FetchFailed(format!("{e:#}")))
            }
        }
    }

    /// Returns the files and subdirectories listed at `location`, joined onto it.
    pub async fn query(&self, location: &str) -> Result<Vec<String>> {
        Ok(resolve(location, self.links(location).await?).collect())
    }

    /// Fetches the index at `location` and returns the hrefs of all its anchors.
    async fn links(&self, location: &str) -> Result<Vec<String>> {
        let url = Url::parse(location)
            .wrap_err_with(|| format!("{location} is not a valid location"))?;
        debug!("Fetching {url}");
        let response = self.client.get(url.clone()).send().await?;
        response
            .verify()
            .wrap_err_with(|| format!("While fetching {url}"))?;
        if !response.is_html() {
            warn!("{url} responded without content type text/html");
        }
        let body = response.bytes().await?;
        Ok(parsing::extract(&body)?)
    }
}

/// Drops navigation links and joins the rest onto `location`, keeping their order.
fn resolve(location: &str, links: Vec<String>) -> impl Iterator<Item = String> + '_ {
    links
        .into_iter()
        .filter(|href| !href.is_navigation())
        .map(move |href| href.join_onto(location))
}
