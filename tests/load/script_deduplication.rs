use futures::executor::block_on ;
use fragment_link::{ load_fragment, Fragment, ScriptAttachment };

fixtures! {
    placeholders = [ "weather-app-placeholder" ];
}

#[test]
fn script_attached_once_across_reloads() {

    let document = fixtures::document();
    let fetcher = fixtures::fetcher();
    let fragment = Fragment::new( "weather-app", "weather-app-placeholder" ).with_script( "script.js" );

    let first = block_on( load_fragment( &document, &fetcher, &fragment ));
    let second = block_on( load_fragment( &document, &fetcher, &fragment ));

    assert!( matches!( first, Ok( ref loaded ) if loaded.script == ScriptAttachment::Appended( "weather-app/script.js".into() )));
    assert!( matches!( second, Ok( ref loaded ) if loaded.script == ScriptAttachment::AlreadyPresent( "weather-app/script.js".into() )));
    assert_eq!( document.count_scripts( "weather-app/script.js" ), 1 );

    // The HTML itself is replaced on every load.
    assert_eq!( document.inner_html( "weather-app-placeholder" ).as_deref(), Some( "<div>Weather</div>" ));

}
