use core::fmt;
use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;

use crate::image::{BOOT_FILE, FIRMWARE_FILE, MAX_BOOT_LEN, OUTPUT_FILE, VECTOR_TABLE_LEN};

pub fn combine(boot: &[u8], firmware: &[u8]) -> Vec<u8>
{
	// a firmware shorter than the vector table doesn't widen the gap, the image just comes out short
	let split = firmware.len().min(VECTOR_TABLE_LEN);
	let (vector, body) = firmware.split_at(split);
	let mut image = Vec::with_capacity(boot.len() + MAX_BOOT_LEN + body.len());
	image.extend_from_slice(boot);
	image.extend_from_slice(vector);
	image.resize(image.len() + (MAX_BOOT_LEN - VECTOR_TABLE_LEN), 0);
	image.extend_from_slice(body);
	image
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary
{
	pub boot: usize,
	pub firmware: usize,
	pub combined: usize,
}

pub fn combine_dir(dir: &Path) -> Result<Summary, CombineError>
{
	let boot = match fs::read(dir.join(BOOT_FILE))
	{
		Ok(data) => data,
		Err(e) => return Err(CombineError::Read{name: BOOT_FILE, source: e}),
	};
	let firmware = match fs::read(dir.join(FIRMWARE_FILE))
	{
		Ok(data) => data,
		Err(e) => return Err(CombineError::Read{name: FIRMWARE_FILE, source: e}),
	};
	let image = combine(&boot, &firmware);
	if let Err(e) = fs::write(dir.join(OUTPUT_FILE), &image)
	{
		return Err(CombineError::Write{name: OUTPUT_FILE, source: e});
	}
	Ok(Summary{boot: boot.len(), firmware: firmware.len(), combined: image.len()})
}

#[derive(Debug)]
pub enum CombineError
{
	Read{name: &'static str, source: io::Error},
	Write{name: &'static str, source: io::Error},
}

impl fmt::Display for CombineError
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self
		{
			Self::Read{name, ..} => write!(f, "could not read {name}"),
			Self::Write{name, ..} => write!(f, "could not write {name}"),
		}
	}
}

impl Error for CombineError
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		match self
		{
			Self::Read{source, ..} => Some(source),
			Self::Write{source, ..} => Some(source),
		}
	}
}
