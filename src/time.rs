#[macro_export]
macro_rules! timed {
	($label:expr, $code:block) => {{
		use std::time::Instant;
		let start = Instant::now();
		let result = { $code };
		log::debug!("{} took {:?}", $label, start.elapsed());
		result
	}};
}
