use crate::shared::Result;
use crate::vuln_matching::domain::Advisory;

/// AdvisoryRepository port for obtaining the advisory corpus
///
/// This port abstracts corpus acquisition (network feed, local file)
/// and hands the matching core an already-materialized collection of
/// advisory records.
pub trait AdvisoryRepository {
    /// Fetches advisory records relevant to the given module paths
    ///
    /// Implementations backed by a full corpus may ignore the module
    /// list and return every record; the matcher filters by exact
    /// package name either way.
    ///
    /// # Errors
    /// Returns an error when the corpus cannot be obtained or parsed.
    /// This is an infrastructure failure, distinct from a scan that
    /// finds no vulnerabilities.
    fn fetch_advisories(&self, modules: &[String]) -> Result<Vec<Advisory>>;
}

impl<T: AdvisoryRepository + ?Sized> AdvisoryRepository for Box<T> {
    fn fetch_advisories(&self, modules: &[String]) -> Result<Vec<Advisory>> {
        (**self).fetch_advisories(modules)
    }
}
