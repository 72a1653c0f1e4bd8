use core::fmt;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::image::MAX_BOOT_LEN;

// pads the file in place to exactly `MAX_BOOT_LEN` bytes, returning the number of bytes appended
pub fn align(path: &Path) -> Result<usize, AlignError>
{
	let len = match path.metadata()
	{
		Ok(meta) => meta.len(),
		Err(e) => return Err(AlignError::Io(e)),
	};
	if len > MAX_BOOT_LEN as u64
	{
		return Err(AlignError::Oversize{len, max: MAX_BOOT_LEN});
	}
	let need = MAX_BOOT_LEN - len as usize;
	let mut file = match OpenOptions::new().append(true).open(path)
	{
		Ok(file) => file,
		Err(e) => return Err(AlignError::Io(e)),
	};
	const PADDING: [u8; 256] = [0x00; 256];
	for p in (0..need).step_by(PADDING.len())
	{
		let result = if need - p >= PADDING.len() {file.write_all(&PADDING)}
		else {file.write_all(&PADDING[..need - p])};
		if let Err(e) = result
		{
			return Err(AlignError::Io(e));
		}
	}
	drop(file);
	Ok(need)
}

#[derive(Debug)]
pub enum AlignError
{
	Oversize{len: u64, max: usize},
	Io(io::Error),
}

impl fmt::Display for AlignError
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self
		{
			Self::Oversize{len, max} => write!(f, "bootloader too large ({len} bytes, max {max})"),
			Self::Io(..) => f.write_str("could not pad bootloader"),
		}
	}
}

impl Error for AlignError
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		match self
		{
			Self::Io(e) => Some(e),
			_ => None,
		}
	}
}
