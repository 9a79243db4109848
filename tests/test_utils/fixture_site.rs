#[macro_export]
macro_rules! fixtures {

    {
        placeholders = [ $($placeholder:literal),* $(,)? ];
    } => ( mod fixtures {

        /// Page with every listed placeholder declared and nothing else.
        #[allow( dead_code )]
        pub fn document() -> fragment_link::StaticDocument {
            $crate::fixture_site::init_tracing();
            $crate::fixture_site::document( &[ $($placeholder),* ])
        }

        /// Serves the directory named after the test file.
        #[allow( dead_code )]
        pub fn fetcher() -> fragment_link::DirectoryFetcher {
            fragment_link::DirectoryFetcher::new( site_root() )
        }

        #[allow( dead_code )]
        pub fn site_root() -> std::path::PathBuf {
            $crate::fixture_site::site_root( $crate::fixture_site::strip_rs( file!() ))
        }

    });
}

#[allow( dead_code )]
mod fixture_site {

    use std::cell::{ Cell, RefCell };
    use std::future::Future ;
    use std::pin::Pin ;
    use std::task::{ Context, Poll };
    use fragment_link::{ Fetcher, Response, StaticDocument };

    pub fn strip_rs( path: &'static str ) -> &'static str {
        match path.strip_suffix( ".rs" ) {
            Some( stem ) => stem,
            None => unreachable!(),
        }
    }

    pub fn site_root( test_path: &str ) -> std::path::PathBuf {
        std::path::PathBuf::from( env!( "CARGO_MANIFEST_DIR" )).join( test_path )
    }

    pub fn document( placeholders: &[&str] ) -> StaticDocument {
        placeholders.iter().fold( StaticDocument::new(), | document, id | document.with_placeholder( *id ))
    }

    pub fn init_tracing() {
        static TRACING: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter( tracing_subscriber::EnvFilter::from_default_env() )
                .with_test_writer()
                .try_init();
        });
        once_cell::sync::Lazy::force( &TRACING );
    }

    /// Records every requested URL before delegating.
    pub struct Recording<F> {
        inner: F,
        requests: RefCell<Vec<String>>,
    }

    impl<F> Recording<F> {
        pub fn new( inner: F ) -> Self { Self { inner, requests: RefCell::new( Vec::new() ) }}
        pub fn requests( &self ) -> Vec<String> { self.requests.borrow().clone() }
    }

    impl<F: Fetcher> Fetcher for Recording<F> {
        type Error = F::Error ;
        async fn fetch( &self, url: &str ) -> Result<Response, Self::Error> {
            self.requests.borrow_mut().push( url.to_string() );
            self.inner.fetch( url ).await
        }
    }

    /// Always fails with a transport error, like a refused connection.
    pub struct Unreachable ;

    impl Fetcher for Unreachable {
        type Error = std::io::Error ;
        async fn fetch( &self, _url: &str ) -> Result<Response, Self::Error> {
            Err( std::io::Error::new( std::io::ErrorKind::ConnectionRefused, "connection refused" ))
        }
    }

    /// Answers every URL with the same response after suspending `delay( url )` times.
    pub struct Delayed<D: Fn( &str ) -> usize> {
        pub response: Response,
        pub delay: D,
    }

    impl<D: Fn( &str ) -> usize> Fetcher for Delayed<D> {
        type Error = std::io::Error ;
        async fn fetch( &self, url: &str ) -> Result<Response, Self::Error> {
            for _ in 0..( self.delay )( url ) { YieldNow( Cell::new( false )).await }
            Ok( self.response.clone() )
        }
    }

    struct YieldNow( Cell<bool> );

    impl Future for YieldNow {
        type Output = ();
        fn poll( self: Pin<&mut Self>, cx: &mut Context<'_> ) -> Poll<()> {
            if self.0.replace( true ) { return Poll::Ready(()) }
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }

}
