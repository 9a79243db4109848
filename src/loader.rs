//! Loading a single fragment into its placeholder.
//!
//! [`load_fragment`] runs the steps below in order, stopping at the first failure:
//!
//! 1. Resolve the placeholder element. If it is missing nothing else happens.
//! 2. Fetch `{source_dir}/index.html`. A non-success status is a failure.
//! 3. Replace the placeholder's content with the fetched HTML, verbatim.
//! 4. Append the stylesheet link to the head, if the fragment has one.
//! 5. Append a deferred script to the body, if the fragment has one and no script
//!    with the same `src` exists yet.
//!
//! Failures after step 1 are rendered into the placeholder as a styled error
//! message. Every failure is logged; none escapes as a panic.

use thiserror::Error ;
use tracing::{ error, info, debug, instrument };

use crate::document::{ Document, Element, ERROR_STYLE_PROPERTY, ERROR_STYLE_VALUE };
use crate::fetcher::Fetcher ;
use crate::fragment::Fragment ;



/// Reasons a fragment failed to load.
///
/// Generic over the [`Document`] and [`Fetcher`] in use so their native error types
/// are kept intact.
#[derive( Error )]
pub enum LoadError<D: Document, F: Fetcher> {

    /// No element with the placeholder id exists. Nothing was fetched or changed.
    #[error( "Placeholder element with ID {0} not found." )]
    PlaceholderMissing( String ),

    /// The server answered with a status outside `200..=299`.
    #[error( "Failed to load HTML for {source_dir}: {}", status_line( .status, .status_text ))]
    FailedToFetch { source_dir: String, status: u16, status_text: String },

    /// The fetcher could not produce a response at all.
    #[error( "Failed to load HTML for {source_dir}: {error}" )]
    Transport { source_dir: String, #[source] error: F::Error },

    /// The document refused a mutation after the placeholder was found.
    #[error( "Failed to update document: {0}" )]
    DocumentRejected( #[source] D::Error ),

}

impl<D: Document, F: Fetcher> std::fmt::Debug for LoadError<D, F> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        match self {
            Self::PlaceholderMissing( id ) => f.debug_tuple( "PlaceholderMissing" ).field( id ).finish(),
            Self::FailedToFetch { source_dir, status, status_text } => f.debug_struct( "FailedToFetch" )
                .field( "source_dir", source_dir )
                .field( "status", status )
                .field( "status_text", status_text )
                .finish(),
            Self::Transport { source_dir, error } => f.debug_struct( "Transport" )
                .field( "source_dir", source_dir )
                .field( "error", error )
                .finish(),
            Self::DocumentRejected( e ) => f.debug_tuple( "DocumentRejected" ).field( e ).finish(),
        }
    }
}

impl<D: Document, F: Fetcher> LoadError<D, F> {

    /// Whether the failure was shown to the user inside the placeholder.
    ///
    /// Only [`LoadError::PlaceholderMissing`] leaves the page untouched, since there
    /// is nowhere to render the message.
    pub fn is_rendered( &self ) -> bool {
        !matches!( self, Self::PlaceholderMissing( _ ))
    }

}

/// What happened to a fragment's script.
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum ScriptAttachment {
    /// The fragment has no script.
    NotRequested,
    /// A new deferred script with this `src` was appended to the body.
    Appended( String ),
    /// A script with this `src` was already in the document; nothing was added.
    AlreadyPresent( String ),
}

/// A successfully loaded fragment.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Loaded {
    /// `href` of the stylesheet link appended to the head, if any.
    pub stylesheet: Option<String>,
    pub script: ScriptAttachment,
}

/// Result of [`load_fragment`].
pub type LoadOutcome<D, F> = Result<Loaded, LoadError<D, F>> ;

// HTTP/2 responses carry no reason phrase.
fn status_line( status: impl std::fmt::Display, status_text: &str ) -> String {
    match status_text.is_empty() {
        true => status.to_string(),
        false => format!( "{} {}", status, status_text ),
    }
}

/// Markup placed into a placeholder when its fragment fails to load.
pub fn error_markup( message: &str ) -> String {
    format!( "<p>Error loading component: {}</p>", message )
}

/// Loads one fragment into `document`.
///
/// Always completes; failures are reported through the returned outcome and the
/// diagnostic log, and (except for a missing placeholder) rendered into the page.
///
/// ```
/// use fragment_link::{ load_fragment, Fragment, StaticDocument, Fetcher, Response };
/// # use futures::executor::block_on ;
///
/// struct Static ;
/// impl Fetcher for Static {
///     type Error = std::convert::Infallible ;
///     async fn fetch( &self, _url: &str ) -> Result<Response, Self::Error> {
///         Ok( Response::ok( "<div>Weather</div>" ))
///     }
/// }
///
/// let document = StaticDocument::new().with_placeholder( "weather-app-placeholder" );
/// let fragment = Fragment::new( "weather-app", "weather-app-placeholder" ).with_stylesheet( "style.css" );
///
/// let loaded = block_on( load_fragment( &document, &Static, &fragment )).unwrap();
/// assert_eq!( loaded.stylesheet.as_deref(), Some( "weather-app/style.css" ));
/// assert_eq!( document.inner_html( "weather-app-placeholder" ).as_deref(), Some( "<div>Weather</div>" ));
/// ```
#[instrument( skip_all, fields( source_dir = fragment.source_dir(), placeholder = fragment.placeholder_id() ))]
pub async fn load_fragment<D: Document, F: Fetcher>(
    document: &D,
    fetcher: &F,
    fragment: &Fragment,
) -> LoadOutcome<D, F> {

    let Some( placeholder ) = document.element_by_id( fragment.placeholder_id() ) else {
        let err = LoadError::PlaceholderMissing( fragment.placeholder_id().to_string() );
        error!( "{}", err );
        return Err( err );
    };

    match splice( document, fetcher, fragment, &placeholder ).await {
        Ok( loaded ) => Ok( loaded ),
        Err( err ) => {
            error!( "Error loading component {}: {}", fragment.source_dir(), err );
            render_error( &placeholder, &err );
            Err( err )
        }
    }

}

async fn splice<D: Document, F: Fetcher>(
    document: &D,
    fetcher: &F,
    fragment: &Fragment,
    placeholder: &D::Element,
) -> LoadOutcome<D, F> {

    let response = fetcher.fetch( &fragment.index_url() ).await
        .map_err(| error | LoadError::Transport { source_dir: fragment.source_dir().to_string(), error })?;

    if !response.is_success() {
        return Err( LoadError::FailedToFetch {
            source_dir: fragment.source_dir().to_string(),
            status: response.status(),
            status_text: response.status_text().to_string(),
        });
    }

    placeholder.set_inner_html( response.body() ).map_err( LoadError::DocumentRejected )?;
    info!( "{} HTML loaded into {}", fragment.source_dir(), fragment.placeholder_id() );

    let stylesheet = match fragment.stylesheet_href() {
        Some( href ) => {
            document.append_stylesheet( &href ).map_err( LoadError::DocumentRejected )?;
            info!( href = %href, "stylesheet attached" );
            Some( href )
        },
        None => None,
    };

    let script = match fragment.script_src() {
        None => ScriptAttachment::NotRequested,
        Some( src ) if document.contains_script( &src ) => {
            debug!( src = %src, "script already present, not attaching again" );
            ScriptAttachment::AlreadyPresent( src )
        },
        Some( src ) => {
            document.append_script( &src ).map_err( LoadError::DocumentRejected )?;
            info!( src = %src, "script attached" );
            ScriptAttachment::Appended( src )
        },
    };

    Ok( Loaded { stylesheet, script })

}

fn render_error<D: Document, F: Fetcher>( placeholder: &D::Element, err: &LoadError<D, F> ) {
    if let Err( render_err ) = placeholder.set_inner_html( &error_markup( &err.to_string() )) {
        error!( "Could not render load error into placeholder: {}", render_err );
    }
    if let Err( style_err ) = placeholder.set_style_property( ERROR_STYLE_PROPERTY, ERROR_STYLE_VALUE ) {
        error!( "Could not mark placeholder as failed: {}", style_err );
    }
}

#[cfg( test )]
mod tests {

    use super::* ;
    use crate::static_document::StaticDocument ;
    use crate::fetcher::Response ;
    use futures::executor::block_on ;

    struct Answer( Response );

    impl Fetcher for Answer {
        type Error = std::io::Error ;
        async fn fetch( &self, _url: &str ) -> Result<Response, Self::Error> { Ok( self.0.clone() ) }
    }

    #[test]
    fn error_message_names_directory_and_status() {
        let err = LoadError::<StaticDocument, Answer>::FailedToFetch {
            source_dir: "weather-app".into(),
            status: 404,
            status_text: "Not Found".into(),
        };
        assert_eq!( err.to_string(), "Failed to load HTML for weather-app: 404 Not Found" );
        assert_eq!( error_markup( &err.to_string() ), "<p>Error loading component: Failed to load HTML for weather-app: 404 Not Found</p>" );
        assert!( err.is_rendered() );
    }

    #[test]
    fn missing_placeholder_is_not_rendered() {
        let document = StaticDocument::new();
        let outcome = block_on( load_fragment( &document, &Answer( Response::ok( "x" )), &Fragment::new( "a", "b" )));
        match outcome {
            Err( err @ LoadError::PlaceholderMissing( _ )) => assert!( !err.is_rendered() ),
            other => panic!( "Unexpected outcome: {:?}", other ),
        }
    }

    #[test]
    fn redirect_status_is_a_failure() {
        let document = StaticDocument::new().with_placeholder( "b" );
        let outcome = block_on( load_fragment(
            &document,
            &Answer( Response::new( 301, "Moved Permanently", "<a>moved</a>" )),
            &Fragment::new( "a", "b" ),
        ));
        assert!( matches!( outcome, Err( LoadError::FailedToFetch { status: 301, .. })));
        assert_eq!(
            document.inner_html( "b" ).as_deref(),
            Some( "<p>Error loading component: Failed to load HTML for a: 301 Moved Permanently</p>" ),
        );
    }

    #[test]
    fn empty_status_text_is_omitted() {
        let document = StaticDocument::new().with_placeholder( "b" );
        let outcome = block_on( load_fragment( &document, &Answer( Response::new( 404, "", "" )), &Fragment::new( "a", "b" )));
        assert!( matches!( outcome, Err( LoadError::FailedToFetch { status: 404, .. })));
        assert_eq!(
            document.inner_html( "b" ).as_deref(),
            Some( "<p>Error loading component: Failed to load HTML for a: 404</p>" ),
        );
    }

    #[test]
    fn transport_error_keeps_source() {
        use std::error::Error as _ ;
        let err = LoadError::<StaticDocument, Answer>::Transport {
            source_dir: "calculator-app".into(),
            error: std::io::Error::new( std::io::ErrorKind::ConnectionRefused, "connection refused" ),
        };
        assert_eq!( err.to_string(), "Failed to load HTML for calculator-app: connection refused" );
        assert!( err.source().is_some() );
    }

}
