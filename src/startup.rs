//! Startup driver.
//!
//! Issues one load per fragment without waiting for the others. The loads interleave
//! on the current thread, each suspending only while its fetch is in flight, and
//! finish in whatever order the fetcher delivers responses.

use futures::future::join_all ;
use tracing::info ;

use crate::document::Document ;
use crate::fetcher::Fetcher ;
use crate::loader::load_fragment ;
use crate::manifest::Manifest ;
use crate::report::LoadReport ;



/// Loads every fragment of `manifest` into `document` concurrently.
///
/// The loads are only joined to build the returned [`LoadReport`]; a failure in one
/// never stops or delays the others.
pub async fn load_all<D: Document, F: Fetcher>(
    document: &D,
    fetcher: &F,
    manifest: &Manifest,
) -> LoadReport<D, F> {

    info!( count = manifest.fragments().len(), "loading components" );
    manifest.warn_on_shared_targets();

    let loads = manifest.fragments().iter().map(| fragment | async move {
        ( fragment.placeholder_id().to_string(), load_fragment( document, fetcher, fragment ).await )
    });

    let report = join_all( loads ).await.into_iter().collect::<LoadReport<D, F>>();
    info!( loaded = report.loaded().len(), failed = report.failed().len(), "components processed" );
    report

}
