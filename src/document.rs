//! Document handle abstraction.
//!
//! The loader never touches ambient globals; it is handed a [`Document`] that owns
//! the placeholders, the head and the body of the host page. The browser backend
//! binds this to the real DOM, [`StaticDocument`]( crate::StaticDocument ) keeps
//! everything in memory.
//!
//! All methods take `&self`. Several loads share one document and interleave on a
//! single thread, so implementations use interior mutability and must not hold a
//! borrow beyond the duration of a call.

/// CSS property used to mark a placeholder as being in the error state.
pub const ERROR_STYLE_PROPERTY: &str = "color" ;

/// Value of [`ERROR_STYLE_PROPERTY`] on a placeholder in the error state.
pub const ERROR_STYLE_VALUE: &str = "red" ;

/// A host document fragments can be spliced into.
///
/// # Example
///
/// ```
/// use fragment_link::{ Document, Element, StaticDocument };
///
/// let document = StaticDocument::new().with_placeholder( "app" );
/// let element = document.element_by_id( "app" ).expect( "declared above" );
/// element.set_inner_html( "<b>hi</b>" ).unwrap();
///
/// assert_eq!( document.inner_html( "app" ).as_deref(), Some( "<b>hi</b>" ));
/// assert!( document.element_by_id( "missing" ).is_none() );
/// ```
pub trait Document {

    /// Element handle returned by [`Document::element_by_id`].
    type Element: Element<Error = Self::Error> ;

    /// Error raised when the backend refuses a mutation.
    type Error: std::error::Error + 'static ;

    /// Looks up an element by its id.
    fn element_by_id( &self, id: &str ) -> Option<Self::Element> ;

    /// Appends `<link rel="stylesheet" href="{href}">` to the head.
    ///
    /// Never de-duplicates: appending the same `href` twice yields two links.
    ///
    /// # Errors
    /// Returns an error if the backend cannot create or insert the link.
    fn append_stylesheet( &self, href: &str ) -> Result<(), Self::Error> ;

    /// Whether any script in the document has a `src` attribute equal to `src`.
    fn contains_script( &self, src: &str ) -> bool ;

    /// Appends `<script src="{src}" defer>` to the body.
    ///
    /// Deferred scripts run once the document has been parsed, in insertion order
    /// relative to each other.
    ///
    /// # Errors
    /// Returns an error if the backend cannot create or insert the script.
    fn append_script( &self, src: &str ) -> Result<(), Self::Error> ;

}

/// A single element of a [`Document`].
pub trait Element {

    type Error: std::error::Error + 'static ;

    /// Replaces the element's content with `html`, verbatim.
    ///
    /// # Errors
    /// Returns an error if the backend rejects the markup.
    fn set_inner_html( &self, html: &str ) -> Result<(), Self::Error> ;

    /// Sets an inline style property.
    ///
    /// # Errors
    /// Returns an error if the backend rejects the property.
    fn set_style_property( &self, name: &str, value: &str ) -> Result<(), Self::Error> ;

}
