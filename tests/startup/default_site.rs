use futures::executor::block_on ;
use fragment_link::{ load_all, Manifest, Node, ScriptAttachment };

fixtures! {
    placeholders = [
        "weather-app-placeholder",
        "calculator-app-placeholder",
        "restaurant-website-placeholder",
    ];
}

#[test]
fn startup_default_site() {

    let document = fixtures::document();
    let report = block_on( load_all( &document, &fixtures::fetcher(), &Manifest::default() ));
    assert_no_failures!( report );
    assert_eq!( report.len(), 3 );

    assert_eq!( document.inner_html( "weather-app-placeholder" ).as_deref(), Some( "<div>Weather</div>" ));
    assert_eq!( document.inner_html( "calculator-app-placeholder" ).as_deref(), Some( "<div>Calculator</div>" ));
    assert_eq!( document.inner_html( "restaurant-website-placeholder" ).as_deref(), Some( "<div>Restaurant</div>" ));

    // The fetcher answers immediately, so loads complete in issuance order.
    assert_eq!( document.stylesheets(), vec![
        "weather-app/style.css",
        "calculator-app/style.css",
        "restaurant-website/style.css",
    ]);
    assert_eq!( document.body(), vec![
        Node::Script { src: "weather-app/script.js".into(), defer: true },
        Node::Script { src: "calculator-app/script.js".into(), defer: true },
    ]);

    assert!( matches!(
        report.get( "restaurant-website-placeholder" ),
        Some( Ok( loaded )) if loaded.script == ScriptAttachment::NotRequested,
    ));

}

#[test]
fn startup_twice_adds_no_scripts() {

    let document = fixtures::document();
    let fetcher = fixtures::fetcher();
    let manifest = Manifest::default();

    assert_no_failures!( block_on( load_all( &document, &fetcher, &manifest )));
    assert_no_failures!( block_on( load_all( &document, &fetcher, &manifest )));

    assert_eq!( document.count_scripts( "weather-app/script.js" ), 1 );
    assert_eq!( document.count_scripts( "calculator-app/script.js" ), 1 );
    assert_eq!( document.stylesheets().len(), 6 );

}
