//! Splices independently served HTML fragments into a host page.
//!
//! A page embeds several small applications. Each lives in its own directory as an
//! `index.html`, optionally accompanied by a stylesheet and a script. At startup,
//! `fragment_link` fetches every fragment's HTML, injects it into a placeholder
//! element, links its stylesheet and adds its script.
//!
//! # Core Concepts
//!
//! - [`Fragment`]: Describes one fragment: its source directory, the id of the
//! 	placeholder element it fills, and optional stylesheet and script file names.
//!
//! - [`Document`]: The host page. The loader only talks to the page through this
//! 	trait, so it runs equally against the live DOM ( `browser` module, `wasm32` only )
//! 	and against [`StaticDocument`], an in-memory page.
//!
//! - [`Fetcher`]: Turns a URL into a [`Response`]. [`DirectoryFetcher`] serves files
//! 	from a local directory; the browser backend uses `window.fetch`.
//!
//! - [`load_fragment`]: Loads a single fragment. It always completes; its outcome is
//! 	either [`Loaded`] or a [`LoadError`]. Failures other than a missing placeholder
//! 	are rendered into the placeholder as a red error message.
//!
//! - [`load_all`]: Loads every fragment of a [`Manifest`] concurrently and collects
//! 	the outcomes into a [`LoadReport`].
//!
//! # Example
//!
//! ```
//! use fragment_link::{ load_all, Manifest, StaticDocument, Fetcher, Response, ScriptAttachment };
//! # use futures::executor::block_on ;
//!
//! // A fetcher that knows two of the three default fragments.
//! struct Site ;
//! impl Fetcher for Site {
//! 	type Error = std::convert::Infallible ;
//! 	async fn fetch( &self, url: &str ) -> Result<Response, Self::Error> {
//! 		Ok( match url {
//! 			"weather-app/index.html" => Response::ok( "<div>Weather</div>" ),
//! 			"restaurant-website/index.html" => Response::ok( "<main>Menu</main>" ),
//! 			_ => Response::not_found(),
//! 		})
//! 	}
//! }
//!
//! let document = StaticDocument::new()
//! 	.with_placeholder( "weather-app-placeholder" )
//! 	.with_placeholder( "calculator-app-placeholder" )
//! 	.with_placeholder( "restaurant-website-placeholder" );
//!
//! let report = block_on( load_all( &document, &Site, &Manifest::default() ));
//! assert_eq!( report.loaded().len(), 2 );
//! assert_eq!( report.failed().len(), 1 );
//!
//! // Successful fragments are injected verbatim, with their assets attached.
//! assert_eq!( document.inner_html( "weather-app-placeholder" ).as_deref(), Some( "<div>Weather</div>" ));
//! assert!( matches!(
//! 	report.get( "weather-app-placeholder" ),
//! 	Some( Ok( loaded )) if loaded.script == ScriptAttachment::Appended( "weather-app/script.js".into() ),
//! ));
//!
//! // The failed one shows an error instead.
//! assert_eq!(
//! 	document.inner_html( "calculator-app-placeholder" ).as_deref(),
//! 	Some( "<p>Error loading component: Failed to load HTML for calculator-app: 404 Not Found</p>" ),
//! );
//! assert_eq!( document.style_property( "calculator-app-placeholder", "color" ).as_deref(), Some( "red" ));
//! ```
//!
//! # Concurrency
//!
//! Everything runs on one thread. Loads interleave only while their fetch is in
//! flight, which is why [`Document`] and [`Fetcher`] take `&self` and their futures
//! need not be `Send`. Two fragments sharing a placeholder or a script path are not
//! guarded against; [`Manifest`] logs a warning when it sees them.

mod fragment ;
mod document ;
mod static_document ;
mod fetcher ;
mod loader ;
mod report ;
mod manifest ;
mod startup ;

#[cfg( target_arch = "wasm32" )]
pub mod browser ;

pub use fragment::{ Fragment, INDEX_FILE };
pub use document::{ Document, Element, ERROR_STYLE_PROPERTY, ERROR_STYLE_VALUE };
pub use static_document::{ StaticDocument, StaticElement, StaticDocumentError, Node, DocumentSnapshot };
pub use fetcher::{ Fetcher, Response, DirectoryFetcher };
pub use loader::{ load_fragment, error_markup, LoadError, LoadOutcome, Loaded, ScriptAttachment };
pub use report::LoadReport ;
pub use manifest::{ Manifest, ManifestError, SharedTarget };
pub use startup::load_all ;
