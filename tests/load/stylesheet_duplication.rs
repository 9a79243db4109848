use futures::executor::block_on ;
use fragment_link::{ load_fragment, Fragment };

fixtures! {
    placeholders = [ "restaurant-website-placeholder" ];
}

#[test]
fn stylesheet_attached_on_every_load() {

    let document = fixtures::document();
    let fetcher = fixtures::fetcher();
    let fragment = Fragment::new( "restaurant-website", "restaurant-website-placeholder" ).with_stylesheet( "style.css" );

    for _ in 0..2 {
        if let Err( err ) = block_on( load_fragment( &document, &fetcher, &fragment )) {
            panic!( "Unexpected error: {}", err );
        }
    }

    assert_eq!( document.stylesheets(), vec![ "restaurant-website/style.css", "restaurant-website/style.css" ]);

}
