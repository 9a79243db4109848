use futures::executor::block_on ;
use fragment_link::{ load_fragment, Fragment, LoadError, StaticDocumentError };

fixtures! {
    placeholders = [ "weather-app-placeholder" ];
}

#[test]
fn load_error_document_rejected() {

    let document = fixtures::document();
    document.freeze();
    let fragment = Fragment::new( "weather-app", "weather-app-placeholder" )
        .with_stylesheet( "style.css" )
        .with_script( "script.js" );

    let err = match block_on( load_fragment( &document, &fixtures::fetcher(), &fragment )) {
        Err( err @ LoadError::DocumentRejected( StaticDocumentError::Frozen( _ ))) => err,
        Err( err ) => panic!( "Unexpected error: {}", err ),
        Ok( _ ) => panic!( "Expected failure" ),
    };

    // The injected HTML is replaced by the error, and the script step never ran.
    assert_error_rendered!( document, "weather-app-placeholder", &err.to_string() );
    assert!( document.body().is_empty() );

}
