use futures::executor::block_on ;
use fragment_link::{ load_fragment, Fragment, LoadError };
use crate::fixture_site::Recording ;

fixtures! {
    placeholders = [ "calculator-app-placeholder" ];
}

#[test]
fn load_error_placeholder_missing() {

    let document = fixtures::document();
    let fetcher = Recording::new( fixtures::fetcher() );
    let before = document.snapshot();

    let fragment = Fragment::new( "weather-app", "weather-app-placeholder" )
        .with_stylesheet( "style.css" )
        .with_script( "script.js" );

    match block_on( load_fragment( &document, &fetcher, &fragment )) {
        Err( LoadError::PlaceholderMissing( id )) => assert_eq!( id, "weather-app-placeholder" ),
        Err( err ) => panic!( "Unexpected error: {}", err ),
        Ok( _ ) => panic!( "Expected failure" ),
    }

    assert!( fetcher.requests().is_empty(), "fetched {:?}", fetcher.requests() );
    assert_eq!( document.snapshot(), before );

}
