use futures::executor::block_on ;
use fragment_link::{ load_fragment, Fragment, LoadError, Response };
use crate::fixture_site::Delayed ;

fixtures! {
    placeholders = [ "restaurant-website-placeholder" ];
}

// An HTTP/2 error answer: no reason phrase, and the body is not downloaded.
#[test]
fn load_error_server_error() {

    let document = fixtures::document();
    let fetcher = Delayed { response: Response::new( 500, "", "" ), delay: | _: &str | -> usize { 0 }};
    let fragment = Fragment::new( "restaurant-website", "restaurant-website-placeholder" ).with_stylesheet( "style.css" );

    match block_on( load_fragment( &document, &fetcher, &fragment )) {
        Err( LoadError::FailedToFetch { status, status_text, .. }) => {
            assert_eq!( status, 500 );
            assert!( status_text.is_empty() );
        },
        Err( err ) => panic!( "Unexpected error: {}", err ),
        Ok( _ ) => panic!( "Expected failure" ),
    }

    assert_error_rendered!( document, "restaurant-website-placeholder", "Failed to load HTML for restaurant-website: 500" );
    assert!( document.head().is_empty() );

}
