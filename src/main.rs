mod args;
mod logging;

use chrono::NaiveDate;
use color_eyre::{
    eyre::{eyre, Result},
    Section,
};
use dirlist::{DirectoryBrowser, Listing, Server};

/// Stands in for a date-aware server when a single location is listed directly.
struct NoArchive;

impl Server for NoArchive {
    fn compute_directories(&self, _start: NaiveDate, _end: NaiveDate) -> Result<Vec<String>> {
        Err(eyre!("No archive layout is known for a single location"))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = args::parse();
    logging::init(args.verbose)?;

    let browser = DirectoryBrowser::new(NoArchive)?;
    let files = if args.strict {
        match browser.list_files(&args.location, &args.extension).await? {
            Listing::FetchFailed(reason) => {
                return Err(eyre!(reason)
                    .wrap_err(format!("Unable to list {}", args.location))
                    .suggestion("Check that the location serves an HTML directory index"));
            }
            listing => listing.into_files(),
        }
    } else {
        browser.get_files(&args.location, &args.extension).await?
    };

    for file in files {
        println!("{file}");
    }
    Ok(())
}
