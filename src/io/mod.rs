//! I/O layer: directory preparation and candidate listing (`listing`),
//! decode/encode through the `image` crate (`codec`), and the opt-in
//! backup-before-overwrite step (`backup`).
pub mod backup;
pub mod codec;
pub mod listing;

pub use backup::{backup_existing, backup_path};
pub use codec::{decode_image, encode_image, output_format, read_dimensions};
pub use listing::{ensure_output_directory, list_candidate_files};
