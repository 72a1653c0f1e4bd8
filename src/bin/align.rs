use std::path::Path;
use std::process::ExitCode;

use blimg::image::align::align;

macro_rules!print_err
{
	($err:ident, $($print:expr),+) =>
	{
		{
			use std::error::Error;
			use std::io::Write;
			let mut stderr = std::io::stderr().lock();
			write!(stderr, $($print),+).unwrap();
			write!(stderr, ": {}\n", $err).unwrap();
			let mut source = $err.source();
			while let Some(src) = source
			{
				write!(stderr, "\tsource: {src}\n").unwrap();
				source = src.source();
			}
		}
	};
}

pub fn main() -> ExitCode
{
	let mut args = std::env::args();
	assert!(args.next().is_some());
	let Some(fp) = args.next()
	else
	{
		eprintln!("Missing bootloader file argument");
		return ExitCode::FAILURE;
	};

	match align(Path::new(&fp))
	{
		Ok(..) => ExitCode::SUCCESS,
		Err(e) =>
		{
			print_err!(e, "Could not align {fp}");
			ExitCode::FAILURE
		},
	}
}
