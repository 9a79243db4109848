//! In-memory [`Document`] implementation.
//!
//! Used on native targets and in tests. It models just enough of a page for the
//! loader: a set of placeholder elements (inner HTML plus inline style), and the
//! ordered children of the head and the body.

use std::cell::RefCell ;
use std::collections::{ BTreeMap, HashMap };
use std::rc::Rc ;
use thiserror::Error ;

use crate::document::{ Document, Element };



/// Errors raised by [`StaticDocument`] mutations.
#[derive( Debug, Clone, PartialEq, Eq, Error )]
pub enum StaticDocumentError {
    /// The element handle outlived the element it pointed at.
    #[error( "Element '{0}' is no longer attached to the document" )]
    Detached( String ),
    /// Head and body were frozen with [`StaticDocument::freeze`].
    #[error( "Document is frozen, cannot append {0}" )]
    Frozen( String ),
}

/// A child of the head or the body.
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Node {
    /// `<link rel="stylesheet" href="...">`
    Stylesheet { href: String },
    /// `<script src="...">`, with or without `defer`
    Script { src: String, defer: bool },
}

impl Node {
    fn script_src( &self ) -> Option<&str> {
        match self {
            Self::Script { src, .. } => Some( src ),
            Self::Stylesheet { .. } => None,
        }
    }
}

/// Observable state of a [`StaticDocument`], comparable between two points in time.
#[derive( Debug, Clone, Default, PartialEq, Eq )]
pub struct DocumentSnapshot {
    elements: HashMap<String, ElementState>,
    head: Vec<Node>,
    body: Vec<Node>,
}

#[derive( Debug, Clone, Default, PartialEq, Eq )]
struct ElementState {
    inner_html: String,
    style: BTreeMap<String, String>,
}

#[derive( Debug, Default )]
struct Inner {
    state: DocumentSnapshot,
    frozen: bool,
}

/// A host page kept entirely in memory.
///
/// This is a handle type: clones share the same underlying page.
#[derive( Debug, Clone, Default )]
pub struct StaticDocument {
    inner: Rc<RefCell<Inner>>,
}

impl StaticDocument {

    /// Creates an empty page with no placeholders.
    pub fn new() -> Self { Self::default() }

    /// Declares an empty placeholder element.
    pub fn with_placeholder( self, id: impl Into<String> ) -> Self {
        self.inner.borrow_mut().state.elements.insert( id.into(), ElementState::default() );
        self
    }

    /// Declares a script already present in the page body, as written in the host markup.
    pub fn with_script( self, src: impl Into<String> ) -> Self {
        self.inner.borrow_mut().state.body.push( Node::Script { src: src.into(), defer: false });
        self
    }

    /// Makes every subsequent head or body append fail. Placeholders stay writable.
    pub fn freeze( &self ) {
        self.inner.borrow_mut().frozen = true ;
    }

    /// Removes a placeholder, detaching any outstanding handles to it.
    pub fn remove_element( &self, id: &str ) -> bool {
        self.inner.borrow_mut().state.elements.remove( id ).is_some()
    }

    /// Current inner HTML of an element.
    pub fn inner_html( &self, id: &str ) -> Option<String> {
        self.inner.borrow().state.elements.get( id ).map(| element | element.inner_html.clone() )
    }

    /// Current value of an inline style property of an element.
    pub fn style_property( &self, id: &str, name: &str ) -> Option<String> {
        self.inner.borrow().state.elements.get( id )
            .and_then(| element | element.style.get( name ).cloned() )
    }

    /// Children of the head, in insertion order.
    pub fn head( &self ) -> Vec<Node> { self.inner.borrow().state.head.clone() }

    /// Children of the body, in insertion order.
    pub fn body( &self ) -> Vec<Node> { self.inner.borrow().state.body.clone() }

    /// `href` of every stylesheet link in the head, in insertion order.
    pub fn stylesheets( &self ) -> Vec<String> {
        self.inner.borrow().state.head.iter()
            .filter_map(| node | match node {
                Node::Stylesheet { href } => Some( href.clone() ),
                Node::Script { .. } => None,
            })
            .collect()
    }

    /// Number of scripts anywhere in the page whose `src` equals `src`.
    pub fn count_scripts( &self, src: &str ) -> usize {
        let inner = self.inner.borrow();
        inner.state.head.iter().chain( inner.state.body.iter() )
            .filter(| node | node.script_src() == Some( src ))
            .count()
    }

    /// Copy of the whole observable state.
    pub fn snapshot( &self ) -> DocumentSnapshot { self.inner.borrow().state.clone() }

    fn append( &self, node: Node, place: impl FnOnce( &mut DocumentSnapshot ) -> &mut Vec<Node> ) -> Result<(), StaticDocumentError> {
        let mut inner = self.inner.borrow_mut();
        if inner.frozen { return Err( StaticDocumentError::Frozen( format!( "{:?}", node ))) }
        place( &mut inner.state ).push( node );
        Ok(())
    }

}

impl Document for StaticDocument {

    type Element = StaticElement ;
    type Error = StaticDocumentError ;

    fn element_by_id( &self, id: &str ) -> Option<Self::Element> {
        match self.inner.borrow().state.elements.contains_key( id ) {
            true => Some( StaticElement { inner: Rc::clone( &self.inner ), id: id.to_string() }),
            false => None,
        }
    }

    fn append_stylesheet( &self, href: &str ) -> Result<(), Self::Error> {
        self.append( Node::Stylesheet { href: href.to_string() }, | state | &mut state.head )
    }

    fn contains_script( &self, src: &str ) -> bool {
        self.count_scripts( src ) > 0
    }

    fn append_script( &self, src: &str ) -> Result<(), Self::Error> {
        self.append( Node::Script { src: src.to_string(), defer: true }, | state | &mut state.body )
    }

}

/// Handle to a placeholder of a [`StaticDocument`].
#[derive( Debug, Clone )]
pub struct StaticElement {
    inner: Rc<RefCell<Inner>>,
    id: String,
}

impl StaticElement {
    fn update( &self, apply: impl FnOnce( &mut ElementState )) -> Result<(), StaticDocumentError> {
        let mut inner = self.inner.borrow_mut();
        let element = inner.state.elements.get_mut( &self.id )
            .ok_or_else(|| StaticDocumentError::Detached( self.id.clone() ))?;
        apply( element );
        Ok(())
    }
}

impl Element for StaticElement {

    type Error = StaticDocumentError ;

    fn set_inner_html( &self, html: &str ) -> Result<(), Self::Error> {
        self.update(| element | element.inner_html = html.to_string() )
    }

    fn set_style_property( &self, name: &str, value: &str ) -> Result<(), Self::Error> {
        self.update(| element | { element.style.insert( name.to_string(), value.to_string() ); })
    }

}

#[cfg( test )]
mod tests {

    use super::* ;

    #[test]
    fn stylesheets_are_never_deduplicated() {
        let document = StaticDocument::new();
        document.append_stylesheet( "a/style.css" ).unwrap();
        document.append_stylesheet( "a/style.css" ).unwrap();
        assert_eq!( document.stylesheets(), vec![ "a/style.css", "a/style.css" ]);
    }

    #[test]
    fn scripts_declared_in_markup_are_found() {
        let document = StaticDocument::new().with_script( "weather-app/script.js" );
        assert!( document.contains_script( "weather-app/script.js" ));
        assert!( !document.contains_script( "weather-app/script.jsx" ));
        assert_eq!( document.body(), vec![ Node::Script { src: "weather-app/script.js".into(), defer: false }]);
    }

    #[test]
    fn appended_scripts_are_deferred() {
        let document = StaticDocument::new();
        document.append_script( "calc/script.js" ).unwrap();
        assert_eq!( document.body(), vec![ Node::Script { src: "calc/script.js".into(), defer: true }]);
        assert!( document.head().is_empty() );
    }

    #[test]
    fn detached_handle_rejects_updates() {
        let document = StaticDocument::new().with_placeholder( "slot" );
        let element = document.element_by_id( "slot" ).unwrap();
        assert!( document.remove_element( "slot" ));
        assert_eq!( element.set_inner_html( "x" ), Err( StaticDocumentError::Detached( "slot".into() )));
    }

    #[test]
    fn frozen_document_keeps_placeholders_writable() {
        let document = StaticDocument::new().with_placeholder( "slot" );
        document.freeze();
        assert!( matches!( document.append_stylesheet( "s.css" ), Err( StaticDocumentError::Frozen( _ ))));
        assert!( matches!( document.append_script( "s.js" ), Err( StaticDocumentError::Frozen( _ ))));
        let element = document.element_by_id( "slot" ).unwrap();
        element.set_style_property( "color", "red" ).unwrap();
        assert_eq!( document.style_property( "slot", "color" ).as_deref(), Some( "red" ));
    }

    #[test]
    fn clones_share_state() {
        let document = StaticDocument::new().with_placeholder( "slot" );
        let other = document.clone();
        other.element_by_id( "slot" ).unwrap().set_inner_html( "<p/>" ).unwrap();
        assert_eq!( document.inner_html( "slot" ).as_deref(), Some( "<p/>" ));
        assert_eq!( document.snapshot(), other.snapshot() );
    }

}
