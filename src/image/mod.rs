pub mod align;
pub mod combine;


// largest bootloader the flash layout allows, also the offset of the firmware body in the combined image
pub const MAX_BOOT_LEN: usize = 32768;
pub const VECTOR_TABLE_LEN: usize = 256;

pub const BOOT_FILE: &str = "bl.bin";
pub const FIRMWARE_FILE: &str = "fw.bin";
pub const OUTPUT_FILE: &str = "combined.bin";
