//! Forwards `tracing` events to the browser console.

use std::fmt::Write as _ ;
use tracing::{ Event, Level, Subscriber };
use tracing::field::{ Field, Visit };
use tracing_subscriber::layer::{ Context, Layer, SubscriberExt };
use tracing_subscriber::util::SubscriberInitExt ;
use wasm_bindgen::JsValue ;
use web_sys::console ;



/// A `tracing-subscriber` layer writing each event as one console line.
///
/// Errors go to `console.error`, warnings to `console.warn`, debug and trace to
/// `console.debug`, everything else to `console.log`.
#[derive( Debug, Default, Clone, Copy )]
pub struct ConsoleLayer ;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event( &self, event: &Event<'_>, _ctx: Context<'_, S> ) {
        let mut line = Line::default();
        event.record( &mut line );
        let text = JsValue::from_str( &format!( "[{}] {}{}", event.metadata().target(), line.message, line.fields ));
        match *event.metadata().level() {
            Level::ERROR => console::error_1( &text ),
            Level::WARN => console::warn_1( &text ),
            Level::DEBUG | Level::TRACE => console::debug_1( &text ),
            _ => console::log_1( &text ),
        }
    }
}

#[derive( Default )]
struct Line {
    message: String,
    fields: String,
}

impl Visit for Line {
    fn record_str( &mut self, field: &Field, value: &str ) {
        match field.name() {
            "message" => self.message.push_str( value ),
            name => { let _ = write!( self.fields, " {}={}", name, value ); },
        }
    }
    fn record_debug( &mut self, field: &Field, value: &dyn std::fmt::Debug ) {
        match field.name() {
            "message" => { let _ = write!( self.message, "{:?}", value ); },
            name => { let _ = write!( self.fields, " {}={:?}", name, value ); },
        }
    }
}

/// Installs [`ConsoleLayer`] as the global subscriber, unless one is already set.
pub(super) fn init() {
    let _ = tracing_subscriber::registry().with( ConsoleLayer ).try_init();
}
