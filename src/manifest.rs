//! The list of fragments a page loads at startup.
//!
//! The deployed site uses a fixed set of three fragments, available as
//! [`Manifest::default`]. Other pages can describe their own set in TOML:
//!
//! ```toml
//! [[fragment]]
//! source = "weather-app"
//! placeholder = "weather-app-placeholder"
//! stylesheet = "style.css"
//! script = "script.js"
//! ```

use std::path::Path ;
use itertools::Itertools ;
use serde::Deserialize ;
use thiserror::Error ;
use tracing::warn ;

use crate::fragment::Fragment ;



/// Errors that can occur while reading a manifest.
#[derive( Debug, Error )]
pub enum ManifestError {
    #[error( "IO error: {0}" )] Io( #[from] std::io::Error ),
    #[error( "TOML parse error: {0}" )] Toml( #[from] toml::de::Error ),
    /// The manifest lists no fragments.
    #[error( "Manifest declares no fragments" )] Empty,
    /// A fragment has an empty source directory or placeholder id.
    #[error( "Fragment #{index} has a blank {field}" )] BlankField { index: usize, field: &'static str },
}

/// A placeholder or asset path that more than one fragment of a manifest uses.
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum SharedTarget {
    /// Placeholder id
    Placeholder( String ),
    /// Stylesheet `href`
    Stylesheet( String ),
    /// Script `src`
    Script( String ),
}

/// An ordered list of fragments.
#[derive( Debug, Clone, PartialEq, Eq, Deserialize )]
#[serde( deny_unknown_fields )]
pub struct Manifest {
    #[serde( rename = "fragment" )]
    fragments: Vec<Fragment>,
}

impl Manifest {

    /// Builds a manifest from already constructed fragments. No validation is done.
    pub fn new( fragments: impl IntoIterator<Item = Fragment> ) -> Self {
        Self { fragments: fragments.into_iter().collect() }
    }

    /// Parses and validates a TOML manifest.
    ///
    /// # Errors
    /// Fails if the TOML is malformed, lists no fragments, or a fragment has a blank
    /// `source` or `placeholder`.
    pub fn from_toml_str( source: &str ) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str( source )?;
        manifest.validate()?;
        Ok( manifest )
    }

    /// Reads a TOML manifest from disk.
    ///
    /// # Errors
    /// Same as [`Manifest::from_toml_str`], plus I/O errors.
    pub fn from_path( path: impl AsRef<Path> ) -> Result<Self, ManifestError> {
        Self::from_toml_str( &std::fs::read_to_string( path )? )
    }

    #[inline] pub fn fragments( &self ) -> &[Fragment] { &self.fragments }

    fn validate( &self ) -> Result<(), ManifestError> {

        if self.fragments.is_empty() { return Err( ManifestError::Empty ) }

        self.fragments.iter().enumerate().try_for_each(|( index, fragment )| {
            match ( fragment.source_dir().trim().is_empty(), fragment.placeholder_id().trim().is_empty() ) {
                ( true, _ ) => Err( ManifestError::BlankField { index, field: "source" }),
                ( _, true ) => Err( ManifestError::BlankField { index, field: "placeholder" }),
                _ => Ok(()),
            }
        })

    }

    /// Placeholders and asset paths claimed by more than one fragment, each listed once.
    ///
    /// Loads sharing a target race on it once they interleave. This is allowed, but
    /// worth flagging.
    pub fn shared_targets( &self ) -> Vec<SharedTarget> {
        let placeholders = self.fragments.iter()
            .map(| fragment | fragment.placeholder_id().to_string() )
            .duplicates()
            .map( SharedTarget::Placeholder );
        let stylesheets = self.fragments.iter()
            .filter_map( Fragment::stylesheet_href )
            .duplicates()
            .map( SharedTarget::Stylesheet );
        let scripts = self.fragments.iter()
            .filter_map( Fragment::script_src )
            .duplicates()
            .map( SharedTarget::Script );
        placeholders.chain( stylesheets ).chain( scripts ).collect()
    }

    pub(crate) fn warn_on_shared_targets( &self ) {
        self.shared_targets().into_iter().for_each(| target | match target {
            SharedTarget::Placeholder( id ) => warn!( placeholder = %id, "placeholder is targeted by more than one fragment" ),
            SharedTarget::Stylesheet( href ) => warn!( href = %href, "stylesheet is linked by more than one fragment" ),
            SharedTarget::Script( src ) => warn!( src = %src, "script is requested by more than one fragment" ),
        });
    }

}

impl Default for Manifest {
    /// The portfolio's own fragments.
    fn default() -> Self {
        Self::new([
            Fragment::new( "weather-app", "weather-app-placeholder" )
                .with_stylesheet( "style.css" )
                .with_script( "script.js" ),
            Fragment::new( "calculator-app", "calculator-app-placeholder" )
                .with_stylesheet( "style.css" )
                .with_script( "script.js" ),
            Fragment::new( "restaurant-website", "restaurant-website-placeholder" )
                .with_stylesheet( "style.css" ),
        ])
    }
}

impl IntoIterator for Manifest {
    type Item = Fragment ;
    type IntoIter = std::vec::IntoIter<Fragment> ;
    fn into_iter( self ) -> Self::IntoIter { self.fragments.into_iter() }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a Fragment ;
    type IntoIter = std::slice::Iter<'a, Fragment> ;
    fn into_iter( self ) -> Self::IntoIter { self.fragments.iter() }
}

#[cfg( test )]
mod tests {

    use super::* ;

    #[test]
    fn default_is_the_deployed_site() {
        let manifest = Manifest::default();
        let summary = manifest.fragments().iter()
            .map(| f | ( f.source_dir(), f.placeholder_id(), f.stylesheet(), f.script() ))
            .collect::<Vec<_>>();
        assert_eq!( summary, vec![
            ( "weather-app", "weather-app-placeholder", Some( "style.css" ), Some( "script.js" )),
            ( "calculator-app", "calculator-app-placeholder", Some( "style.css" ), Some( "script.js" )),
            ( "restaurant-website", "restaurant-website-placeholder", Some( "style.css" ), None ),
        ]);
    }

    #[test]
    fn parses_optional_assets() {
        let manifest = Manifest::from_toml_str( r#"
            [[fragment]]
            source = "weather-app"
            placeholder = "weather-app-placeholder"
            stylesheet = "style.css"
            script = "script.js"

            [[fragment]]
            source = "restaurant-website"
            placeholder = "restaurant-website-placeholder"
        "# ).unwrap();

        assert_eq!( manifest.fragments().len(), 2 );
        assert_eq!( manifest.fragments()[0].script_src().as_deref(), Some( "weather-app/script.js" ));
        assert_eq!( manifest.fragments()[1].stylesheet(), None );
        assert_eq!( manifest.fragments()[1].script(), None );
    }

    #[test]
    fn rejects_empty_manifest() {
        assert!( matches!( Manifest::from_toml_str( "fragment = []" ), Err( ManifestError::Empty )));
    }

    #[test]
    fn rejects_missing_placeholder_key() {
        let result = Manifest::from_toml_str( r#"
            [[fragment]]
            source = "weather-app"
        "# );
        assert!( matches!( result, Err( ManifestError::Toml( _ ))));
    }

    #[test]
    fn rejects_blank_fields() {
        let result = Manifest::from_toml_str( r#"
            [[fragment]]
            source = "weather-app"
            placeholder = "weather-app-placeholder"

            [[fragment]]
            source = "calculator-app"
            placeholder = "  "
        "# );
        assert!( matches!( result, Err( ManifestError::BlankField { index: 1, field: "placeholder" })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let misspelled = Manifest::from_toml_str( r#"
            [[fragment]]
            source = "weather-app"
            placeholder = "weather-app-placeholder"
            scripts = "script.js"
        "# );
        assert!( matches!( misspelled, Err( ManifestError::Toml( _ ))));

        let stray_table = Manifest::from_toml_str( r#"
            title = "portfolio"

            [[fragment]]
            source = "weather-app"
            placeholder = "weather-app-placeholder"
        "# );
        assert!( matches!( stray_table, Err( ManifestError::Toml( _ ))));
    }

    #[test]
    fn shared_placeholders_are_allowed() {
        let manifest = Manifest::from_toml_str( r#"
            [[fragment]]
            source = "a"
            placeholder = "slot"

            [[fragment]]
            source = "b"
            placeholder = "slot"
        "# ).unwrap();
        assert_eq!( manifest.shared_targets(), vec![ SharedTarget::Placeholder( "slot".into() )]);
        assert_eq!( manifest.into_iter().count(), 2 );
    }

    #[test]
    fn shared_asset_paths_are_listed_once() {
        let manifest = Manifest::new([
            Fragment::new( "widgets", "clock" ).with_stylesheet( "style.css" ).with_script( "widgets.js" ),
            Fragment::new( "widgets", "calendar" ).with_stylesheet( "style.css" ).with_script( "widgets.js" ),
            Fragment::new( "widgets", "weather" ).with_stylesheet( "style.css" ),
            Fragment::new( "gallery", "photos" ).with_stylesheet( "style.css" ).with_script( "widgets.js" ),
        ]);
        assert_eq!( manifest.shared_targets(), vec![
            SharedTarget::Stylesheet( "widgets/style.css".into() ),
            SharedTarget::Script( "widgets/widgets.js".into() ),
        ]);
    }

    #[test]
    fn deployed_site_shares_nothing() {
        // Same file names under different directories are distinct paths.
        assert!( Manifest::default().shared_targets().is_empty() );
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join( "fragments.toml" );
        std::fs::write( &path, "[[fragment]]\nsource = \"x\"\nplaceholder = \"y\"\n" ).unwrap();
        assert_eq!( Manifest::from_path( &path ).unwrap(), Manifest::new([ Fragment::new( "x", "y" )]));
        assert!( matches!( Manifest::from_path( dir.path().join( "missing.toml" )), Err( ManifestError::Io( _ ))));
    }

}
