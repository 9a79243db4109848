//! Network fetch abstraction.
//!
//! A [`Fetcher`] resolves a page-relative URL into a [`Response`]. It never retries,
//! never times out and cannot be cancelled; a request runs until it completes or
//! fails. Non-success statuses are *not* errors at this level, the loader decides
//! what counts as a failure.

use std::io::ErrorKind ;
use std::path::{ Component, Path, PathBuf };
use pipe_trait::Pipe ;



/// A completed HTTP-like exchange.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Response {
    status: u16,
    status_text: String,
    body: String,
}

impl Response {

    pub fn new( status: u16, status_text: impl Into<String>, body: impl Into<String> ) -> Self {
        Self { status, status_text: status_text.into(), body: body.into() }
    }

    /// `200 OK` with the given body.
    pub fn ok( body: impl Into<String> ) -> Self { Self::new( 200, "OK", body ) }

    /// `404 Not Found` with an empty body.
    pub fn not_found() -> Self { Self::new( 404, "Not Found", "" ) }

    #[inline] pub fn status( &self ) -> u16 { self.status }
    #[inline] pub fn status_text( &self ) -> &str { &self.status_text }
    #[inline] pub fn body( &self ) -> &str { &self.body }
    #[inline] pub fn into_body( self ) -> String { self.body }

    /// Whether the status is in the `200..=299` range.
    #[inline] pub fn is_success( &self ) -> bool { ( 200..=299 ).contains( &self.status ) }

}

/// Retrieves documents by URL.
///
/// The returned future is awaited on the same thread that issued it; it need not be
/// `Send`.
#[allow( async_fn_in_trait )]
pub trait Fetcher {

    /// Transport-level failure (connection refused, body unreadable, ...).
    type Error: std::error::Error + 'static ;

    /// Requests `url` and waits for the full response body.
    ///
    /// # Errors
    /// Returns an error only when no response could be obtained at all.
    async fn fetch( &self, url: &str ) -> Result<Response, Self::Error> ;

}

/// Serves URLs as files below a root directory, the way a static file server would.
///
/// | File system result | Response |
/// |--------------------|----------|
/// | file read | `200 OK` |
/// | not found | `404 Not Found` |
/// | permission denied, or the URL escapes the root | `403 Forbidden` |
/// | any other I/O error | `Err` |
#[derive( Debug, Clone )]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {

    pub fn new( root: impl Into<PathBuf> ) -> Self {
        Self { root: root.into() }
    }

    #[inline] pub fn root( &self ) -> &Path { &self.root }

    fn resolve( &self, url: &str ) -> Option<PathBuf> {
        let relative = Path::new( url.trim_start_matches( '/' ));
        match relative.components().all(| component | matches!( component, Component::Normal( _ ) | Component::CurDir )) {
            true => self.root.join( relative ).pipe( Some ),
            false => None,
        }
    }

}

impl Fetcher for DirectoryFetcher {

    type Error = std::io::Error ;

    async fn fetch( &self, url: &str ) -> Result<Response, Self::Error> {
        let Some( path ) = self.resolve( url ) else {
            return Ok( Response::new( 403, "Forbidden", "" ));
        };
        match std::fs::read_to_string( &path ) {
            Ok( body ) => Ok( Response::ok( body )),
            Err( err ) if err.kind() == ErrorKind::NotFound => Ok( Response::not_found() ),
            Err( err ) if err.kind() == ErrorKind::PermissionDenied => Ok( Response::new( 403, "Forbidden", "" )),
            Err( err ) => Err( err ),
        }
    }

}

#[cfg( test )]
mod tests {

    use super::* ;
    use futures::executor::block_on ;

    #[test]
    fn success_range() {
        assert!( Response::ok( "" ).is_success() );
        assert!( Response::new( 204, "No Content", "" ).is_success() );
        assert!( !Response::new( 304, "Not Modified", "" ).is_success() );
        assert!( !Response::not_found().is_success() );
    }

    #[test]
    fn directory_fetcher_reads_files() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir( root.path().join( "weather-app" )).unwrap();
        std::fs::write( root.path().join( "weather-app/index.html" ), "<div>Weather</div>" ).unwrap();

        let fetcher = DirectoryFetcher::new( root.path() );
        let response = block_on( fetcher.fetch( "weather-app/index.html" )).unwrap();
        assert_eq!( response, Response::ok( "<div>Weather</div>" ));
    }

    #[test]
    fn directory_fetcher_maps_missing_files_to_404() {
        let root = tempfile::tempdir().unwrap();
        let response = block_on( DirectoryFetcher::new( root.path() ).fetch( "nope/index.html" )).unwrap();
        assert_eq!( response.status(), 404 );
        assert_eq!( response.status_text(), "Not Found" );
    }

    #[test]
    fn directory_fetcher_refuses_to_leave_root() {
        let root = tempfile::tempdir().unwrap();
        let response = block_on( DirectoryFetcher::new( root.path() ).fetch( "../secret/index.html" )).unwrap();
        assert_eq!( response.status(), 403 );
    }

    #[cfg( unix )]
    #[test]
    fn directory_fetcher_surfaces_other_io_errors() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir( root.path().join( "index.html" )).unwrap();
        // Reading a directory as a file is neither "not found" nor "permission denied".
        let result = block_on( DirectoryFetcher::new( root.path() ).fetch( "index.html" ));
        assert!( result.is_err() );
    }

}
