#[macro_export]
macro_rules! assert_no_failures {
	( $report:expr ) => {
		if !$report.is_clean() { panic!( "Failed to load: {:?}", $report.failed() ) }
	};
}

#[macro_export]
macro_rules! assert_error_rendered {
	( $document:expr, $placeholder:expr, $message:expr ) => {{
		assert_eq!(
			$document.inner_html( $placeholder ).as_deref(),
			Some( fragment_link::error_markup( $message ).as_str() ),
		);
		assert_eq!(
			$document.style_property( $placeholder, fragment_link::ERROR_STYLE_PROPERTY ).as_deref(),
			Some( fragment_link::ERROR_STYLE_VALUE ),
		);
	}};
}
