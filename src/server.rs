use chrono::NaiveDate;
use color_eyre::Result;

/// A remote data source that knows how its archive is laid out by date.
pub trait Server {
    /// Returns the directories that may hold data between `start` and `end`, inclusive.
    ///
    /// These are candidates only and need not exist on the remote host.
    fn compute_directories(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<String>>;
}

impl<T: Server + ?Sized> Server for &T {
    fn compute_directories(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<String>> {
        (**self).compute_directories(start, end)
    }
}

impl<T: Server + ?Sized> Server for Box<T> {
    fn compute_directories(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<String>> {
        (**self).compute_directories(start, end)
    }
}
