//! Browser backend.
//!
//! Binds [`Document`] to the live DOM and [`Fetcher`] to `window.fetch`, and provides
//! the page entry point that loads the fragments once the document has been parsed.
//! Only compiled for `wasm32`.

mod console ;

use std::rc::Rc ;
use thiserror::Error ;
use tracing::info ;
use wasm_bindgen::prelude::* ;
use wasm_bindgen::JsCast ;
use wasm_bindgen_futures::{ JsFuture, spawn_local };
use web_sys::{ HtmlElement, HtmlLinkElement, HtmlScriptElement };

use crate::document::{ Document, Element };
use crate::fetcher::{ Fetcher, Response };
use crate::loader::load_fragment ;
use crate::manifest::Manifest ;

pub use console::ConsoleLayer ;



/// Errors raised by the browser backend.
#[derive( Debug, Clone, Error )]
pub enum BrowserError {
    /// A DOM or fetch call threw.
    #[error( "JavaScript exception: {0}" )] Js( String ),
    /// A global the backend relies on does not exist (e.g. running in a worker).
    #[error( "{0} is not available" )] Unavailable( &'static str ),
    /// A value did not have the expected JavaScript type.
    #[error( "Expected a {0}" )] UnexpectedType( &'static str ),
}

impl From<JsValue> for BrowserError {
    fn from( value: JsValue ) -> Self {
        match value.dyn_ref::<js_sys::Error>() {
            Some( err ) => Self::Js( String::from( err.message() )),
            None => Self::Js( value.as_string().unwrap_or_else(|| format!( "{:?}", value ))),
        }
    }
}

impl From<BrowserError> for JsValue {
    fn from( err: BrowserError ) -> Self { JsValue::from_str( &err.to_string() ) }
}

/// The page's `document`.
#[derive( Debug, Clone )]
pub struct BrowserDocument {
    inner: web_sys::Document,
}

impl BrowserDocument {

    pub fn new( inner: web_sys::Document ) -> Self { Self { inner }}

    /// Handle to the document of the current window.
    ///
    /// # Errors
    /// Fails outside a window context.
    pub fn current() -> Result<Self, BrowserError> {
        web_sys::window()
            .ok_or( BrowserError::Unavailable( "window" ))?
            .document()
            .ok_or( BrowserError::Unavailable( "document" ))
            .map( Self::new )
    }

    fn create<T: JsCast>( &self, tag: &'static str ) -> Result<T, BrowserError> {
        self.inner.create_element( tag )?
            .dyn_into::<T>()
            .map_err(|_| BrowserError::UnexpectedType( tag ))
    }

}

impl Document for BrowserDocument {

    type Element = BrowserElement ;
    type Error = BrowserError ;

    fn element_by_id( &self, id: &str ) -> Option<Self::Element> {
        self.inner.get_element_by_id( id ).map( BrowserElement )
    }

    fn append_stylesheet( &self, href: &str ) -> Result<(), Self::Error> {
        let link = self.create::<HtmlLinkElement>( "link" )?;
        link.set_rel( "stylesheet" );
        link.set_href( href );
        self.inner.head().ok_or( BrowserError::Unavailable( "document.head" ))?.append_child( &link )?;
        Ok(())
    }

    fn contains_script( &self, src: &str ) -> bool {
        // Compares the attribute as written, not the resolved `script.src` URL.
        let scripts = self.inner.scripts();
        ( 0..scripts.length() )
            .filter_map(| index | scripts.item( index ))
            .any(| script | script.get_attribute( "src" ).as_deref() == Some( src ))
    }

    fn append_script( &self, src: &str ) -> Result<(), Self::Error> {
        let script = self.create::<HtmlScriptElement>( "script" )?;
        script.set_src( src );
        script.set_defer( true );
        self.inner.body().ok_or( BrowserError::Unavailable( "document.body" ))?.append_child( &script )?;
        Ok(())
    }

}

/// A live DOM element.
#[derive( Debug, Clone )]
pub struct BrowserElement( web_sys::Element );

impl Element for BrowserElement {

    type Error = BrowserError ;

    fn set_inner_html( &self, html: &str ) -> Result<(), Self::Error> {
        self.0.set_inner_html( html );
        Ok(())
    }

    fn set_style_property( &self, name: &str, value: &str ) -> Result<(), Self::Error> {
        self.0.dyn_ref::<HtmlElement>()
            .ok_or( BrowserError::UnexpectedType( "HTMLElement" ))?
            .style()
            .set_property( name, value )?;
        Ok(())
    }

}

/// `window.fetch`.
#[derive( Debug, Clone )]
pub struct BrowserFetcher {
    window: web_sys::Window,
}

impl BrowserFetcher {

    pub fn new( window: web_sys::Window ) -> Self { Self { window }}

    /// # Errors
    /// Fails outside a window context.
    pub fn current() -> Result<Self, BrowserError> {
        web_sys::window().ok_or( BrowserError::Unavailable( "window" )).map( Self::new )
    }

}

impl Fetcher for BrowserFetcher {

    type Error = BrowserError ;

    async fn fetch( &self, url: &str ) -> Result<Response, Self::Error> {
        let response = JsFuture::from( self.window.fetch_with_str( url )).await?
            .dyn_into::<web_sys::Response>()
            .map_err(|_| BrowserError::UnexpectedType( "Response" ))?;
        // Error pages are never rendered, so their bodies are not downloaded.
        if !response.ok() {
            return Ok( Response::new( response.status(), response.status_text(), "" ));
        }
        let body = JsFuture::from( response.text()? ).await?
            .as_string()
            .ok_or( BrowserError::UnexpectedType( "string body" ))?;
        Ok( Response::new( response.status(), response.status_text(), body ))
    }

}

/// Page entry point: loads the portfolio's fragments.
///
/// # Errors
/// Fails outside a window context, or if the `DOMContentLoaded` listener cannot be
/// registered.
#[wasm_bindgen( start )]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console::init();
    info!( "Portfolio script loaded." );
    start_with( Manifest::default() )?;
    Ok(())
}

/// Loads `manifest` once the document structure has been parsed.
///
/// If parsing already finished, the loads are issued immediately. Each fragment is
/// spawned as its own task; nothing waits for them.
///
/// # Errors
/// Fails outside a window context, or if the `DOMContentLoaded` listener cannot be
/// registered.
pub fn start_with( manifest: Manifest ) -> Result<(), BrowserError> {

    let document = BrowserDocument::current()?;
    let fetcher = BrowserFetcher::current()?;

    match document.inner.ready_state().as_str() {
        "loading" => {
            let target = document.inner.clone();
            let listener = Closure::once_into_js( move | _event: web_sys::Event | {
                info!( "DOM fully loaded and parsed. Loading components..." );
                spawn_loads( document, fetcher, manifest );
            });
            target.add_event_listener_with_callback( "DOMContentLoaded", listener.unchecked_ref() )?;
        },
        _ => spawn_loads( document, fetcher, manifest ),
    }

    Ok(())

}

fn spawn_loads( document: BrowserDocument, fetcher: BrowserFetcher, manifest: Manifest ) {
    manifest.warn_on_shared_targets();
    let document = Rc::new( document );
    let fetcher = Rc::new( fetcher );
    manifest.into_iter().for_each(| fragment | {
        let document = Rc::clone( &document );
        let fetcher = Rc::clone( &fetcher );
        // Outcomes are already logged by the loader.
        spawn_local( async move {
            drop( load_fragment( &*document, &*fetcher, &fragment ).await );
        });
    });
}
