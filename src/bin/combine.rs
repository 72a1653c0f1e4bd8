use std::path::Path;
use std::process::ExitCode;

use blimg::image::combine::combine_dir;

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

	match combine_dir(Path::new("."))
	{
		Ok(sum) =>
		{
			println!("bootloader : {} bytes", sum.boot);
			println!("firmware   : {} bytes", sum.firmware);
			println!("combined   : {} bytes", sum.combined);
			ExitCode::SUCCESS
		},
		Err(e) =>
		{
			print_err!(e, "Could not combine images");
			ExitCode::FAILURE
		},
	}
}
