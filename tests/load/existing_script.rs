use futures::executor::block_on ;
use fragment_link::{ load_fragment, Fragment, ScriptAttachment };

fixtures! {
    placeholders = [ "calculator-app-placeholder" ];
}

#[test]
fn script_from_host_markup_is_not_duplicated() {

    let document = fixtures::document().with_script( "calculator-app/script.js" );
    let fragment = Fragment::new( "calculator-app", "calculator-app-placeholder" ).with_script( "script.js" );

    let loaded = block_on( load_fragment( &document, &fixtures::fetcher(), &fragment ))
        .unwrap_or_else(| err | panic!( "Unexpected error: {}", err ));

    assert_eq!( loaded.script, ScriptAttachment::AlreadyPresent( "calculator-app/script.js".into() ));
    assert_eq!( document.count_scripts( "calculator-app/script.js" ), 1 );

}

#[test]
fn similar_script_paths_are_distinct() {

    let document = fixtures::document().with_script( "./calculator-app/script.js" );
    let fragment = Fragment::new( "calculator-app", "calculator-app-placeholder" ).with_script( "script.js" );

    let loaded = block_on( load_fragment( &document, &fixtures::fetcher(), &fragment ))
        .unwrap_or_else(| err | panic!( "Unexpected error: {}", err ));

    // Matching is on the exact src string, not the resolved URL.
    assert_eq!( loaded.script, ScriptAttachment::Appended( "calculator-app/script.js".into() ));
    assert_eq!( document.count_scripts( "./calculator-app/script.js" ), 1 );
    assert_eq!( document.count_scripts( "calculator-app/script.js" ), 1 );

}
