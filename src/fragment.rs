//! Fragment descriptors.
//!
//! A fragment is an independently served unit of HTML, optionally accompanied by a
//! stylesheet and a script, that gets spliced into a placeholder element of the host
//! page. The [`Fragment`] type only describes where the pieces live; loading is done
//! by [`load_fragment`]( crate::load_fragment ).

use serde::Deserialize ;



/// Name of the HTML document every fragment directory is expected to contain.
pub const INDEX_FILE: &str = "index.html" ;

/// Describes one fragment and where it goes.
///
/// Descriptors are immutable once built. All URLs derived from a descriptor are
/// relative to the host page, formed as `{source_dir}/{file}`.
///
/// ```
/// use fragment_link::Fragment ;
///
/// let fragment = Fragment::new( "weather-app", "weather-app-placeholder" )
///     .with_stylesheet( "style.css" )
///     .with_script( "script.js" );
///
/// assert_eq!( fragment.index_url(), "weather-app/index.html" );
/// assert_eq!( fragment.stylesheet_href().as_deref(), Some( "weather-app/style.css" ));
/// assert_eq!( fragment.script_src().as_deref(), Some( "weather-app/script.js" ));
/// ```
#[derive( Debug, Clone, PartialEq, Eq, Deserialize )]
#[serde( deny_unknown_fields )]
pub struct Fragment {
    /// Base path under which `index.html` and the assets are served
    #[serde( rename = "source" )]
    source_dir: String,
    /// Id of the host element receiving the HTML
    #[serde( rename = "placeholder" )]
    placeholder_id: String,
    /// Stylesheet file name relative to `source_dir`
    #[serde( default )]
    stylesheet: Option<String>,
    /// Script file name relative to `source_dir`
    #[serde( default )]
    script: Option<String>,
}

impl Fragment {

    /// Creates a descriptor without any assets.
    pub fn new( source_dir: impl Into<String>, placeholder_id: impl Into<String> ) -> Self {
        Self {
            source_dir: source_dir.into(),
            placeholder_id: placeholder_id.into(),
            stylesheet: None,
            script: None,
        }
    }

    /// Attaches a stylesheet, given relative to the source directory.
    pub fn with_stylesheet( mut self, stylesheet: impl Into<String> ) -> Self {
        self.stylesheet = Some( stylesheet.into() );
        self
    }

    /// Attaches a script, given relative to the source directory.
    pub fn with_script( mut self, script: impl Into<String> ) -> Self {
        self.script = Some( script.into() );
        self
    }

    #[inline] pub fn source_dir( &self ) -> &str { &self.source_dir }
    #[inline] pub fn placeholder_id( &self ) -> &str { &self.placeholder_id }
    #[inline] pub fn stylesheet( &self ) -> Option<&str> { self.stylesheet.as_deref() }
    #[inline] pub fn script( &self ) -> Option<&str> { self.script.as_deref() }

    /// URL of the fragment's HTML document.
    pub fn index_url( &self ) -> String { self.resolve( INDEX_FILE ) }

    /// URL the stylesheet link points at, if the fragment has one.
    pub fn stylesheet_href( &self ) -> Option<String> {
        self.stylesheet.as_deref().map(| name | self.resolve( name ))
    }

    /// URL the script tag points at, if the fragment has one.
    ///
    /// This exact string is what duplicate detection compares against.
    pub fn script_src( &self ) -> Option<String> {
        self.script.as_deref().map(| name | self.resolve( name ))
    }

    fn resolve( &self, file: &str ) -> String {
        format!( "{}/{}", self.source_dir, file )
    }

}

impl std::fmt::Display for Fragment {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        write!( f, "{} -> #{}", self.source_dir, self.placeholder_id )
    }
}

#[cfg( test )]
mod tests {

    use super::* ;

    #[test]
    fn urls_without_assets() {
        let fragment = Fragment::new( "restaurant-website", "restaurant-website-placeholder" );
        assert_eq!( fragment.index_url(), "restaurant-website/index.html" );
        assert_eq!( fragment.stylesheet_href(), None );
        assert_eq!( fragment.script_src(), None );
    }

    #[test]
    fn source_dir_is_not_normalised() {
        // Paths are concatenated as given, the same way the host page would see them.
        let fragment = Fragment::new( "apps/calc/", "calc" ).with_script( "main.js" );
        assert_eq!( fragment.script_src().as_deref(), Some( "apps/calc//main.js" ));
    }

    #[test]
    fn display_names_source_and_placeholder() {
        let fragment = Fragment::new( "calculator-app", "calculator-app-placeholder" );
        assert_eq!( fragment.to_string(), "calculator-app -> #calculator-app-placeholder" );
    }

}
