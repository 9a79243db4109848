use futures::executor::block_on ;
use fragment_link::{ load_fragment, Fragment, LoadError };
use crate::fixture_site::Unreachable ;

fixtures! {
    placeholders = [ "calculator-app-placeholder" ];
}

#[test]
fn load_error_unreachable_server() {

    let document = fixtures::document();
    let fragment = Fragment::new( "calculator-app", "calculator-app-placeholder" )
        .with_stylesheet( "style.css" )
        .with_script( "script.js" );

    match block_on( load_fragment( &document, &Unreachable, &fragment )) {
        Err( LoadError::Transport { source_dir, error }) => {
            assert_eq!( source_dir, "calculator-app" );
            assert_eq!( error.kind(), std::io::ErrorKind::ConnectionRefused );
        },
        Err( err ) => panic!( "Unexpected error: {}", err ),
        Ok( _ ) => panic!( "Expected failure" ),
    }

    assert_error_rendered!( document, "calculator-app-placeholder", "Failed to load HTML for calculator-app: connection refused" );
    assert!( document.head().is_empty() );
    assert!( document.body().is_empty() );

}
