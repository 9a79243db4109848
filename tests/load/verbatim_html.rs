use futures::executor::block_on ;
use fragment_link::{ load_fragment, Fragment };

fixtures! {
    placeholders = [ "calculator-app-placeholder" ];
}

#[test]
fn html_is_injected_verbatim() {

    let document = fixtures::document();
    let fragment = Fragment::new( "calculator-app", "calculator-app-placeholder" );
    let source = std::fs::read_to_string( fixtures::site_root().join( "calculator-app/index.html" )).unwrap();

    if let Err( err ) = block_on( load_fragment( &document, &fixtures::fetcher(), &fragment )) {
        panic!( "Unexpected error: {}", err );
    }

    // Comments, entities, inline scripts and template syntax all pass through untouched.
    assert_eq!( document.inner_html( "calculator-app-placeholder" ), Some( source ));
    assert!( document.head().is_empty() );
    assert!( document.body().is_empty() );

}
