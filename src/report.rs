//! Aggregated outcomes of a startup run.
//!
//! Loads are independent and a failure in one never affects another, so the report
//! is purely diagnostic: it tells the caller (or a test) which placeholders were
//! filled and which were not, in the order the loads were issued.

use crate::document::Document ;
use crate::fetcher::Fetcher ;
use crate::loader::{ Loaded, LoadError, LoadOutcome };



/// Outcomes of several loads, split into successes and failures.
///
/// Entries are keyed by placeholder id.
pub struct LoadReport<D: Document, F: Fetcher> {
    loaded: Vec<( String, Loaded )>,
    failed: Vec<( String, LoadError<D, F> )>,
}

impl<D: Document, F: Fetcher> LoadReport<D, F> {

    pub fn new() -> Self {
        Self { loaded: Vec::new(), failed: Vec::new() }
    }

    #[inline] pub fn loaded( &self ) -> &[( String, Loaded )] { &self.loaded }
    #[inline] pub fn failed( &self ) -> &[( String, LoadError<D, F> )] { &self.failed }

    /// Whether every load succeeded.
    #[inline] pub fn is_clean( &self ) -> bool { self.failed.is_empty() }

    /// Total number of loads recorded.
    #[inline] pub fn len( &self ) -> usize { self.loaded.len() + self.failed.len() }
    #[inline] pub fn is_empty( &self ) -> bool { self.len() == 0 }

    /// Outcome for a given placeholder, if a load targeted it.
    ///
    /// When several loads shared a placeholder, successes take precedence over failures.
    pub fn get( &self, placeholder_id: &str ) -> Option<Result<&Loaded, &LoadError<D, F>>> {
        self.loaded.iter().find(|( id, _ )| id == placeholder_id ).map(|( _, loaded )| Ok( loaded ))
            .or_else(|| self.failed.iter().find(|( id, _ )| id == placeholder_id ).map(|( _, err )| Err( err )))
    }

    pub fn deconstruct( self ) -> ( Vec<( String, Loaded )>, Vec<( String, LoadError<D, F> )> ) {
        ( self.loaded, self.failed )
    }

}

impl<D: Document, F: Fetcher> Default for LoadReport<D, F> {
    fn default() -> Self { Self::new() }
}

impl<D: Document, F: Fetcher> FromIterator<( String, LoadOutcome<D, F> )> for LoadReport<D, F> {
    fn from_iter<T: IntoIterator<Item = ( String, LoadOutcome<D, F> )>>( iter: T ) -> Self {
        iter.into_iter().fold( LoadReport::new(), | mut acc, ( id, outcome )| {
            match outcome {
                Ok( loaded ) => acc.loaded.push(( id, loaded )),
                Err( err ) => acc.failed.push(( id, err )),
            }
            acc
        })
    }
}

impl<D: Document, F: Fetcher> std::fmt::Debug for LoadReport<D, F> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "LoadReport" )
            .field( "loaded", &self.loaded )
            .field( "failed", &self.failed )
            .finish()
    }
}
