#![doc = r#"
squarepad — batch-normalize a directory of images to square dimensions.

Every `.png` / `.jpg` file in a source directory whose width and height differ
is centered on a fully transparent `max(width, height)` square canvas and
written to the output directory under the same file name. Images that are
already square are left alone. The output directory defaults to the source
directory, which overwrites the originals in place.

Quick start: square a directory
-------------------------------
```rust,no_run
use std::path::PathBuf;
use squarepad::{ImageSquarer, SquareParams};

fn main() -> squarepad::Result<()> {
    let params = SquareParams {
        source_dir: PathBuf::from("./public/content/maps"),
        output_dir: Some(PathBuf::from("./squared")),
        ..Default::default()
    };

    let report = ImageSquarer::new(params)?.run_with(|file| println!("{file}"))?;
    println!("{}", report.summary());
    Ok(())
}
```

Padding plan only
-----------------
```rust
use squarepad::PaddingPlan;

let plan = PaddingPlan::for_dimensions(800, 600).unwrap();
assert_eq!((plan.target_size, plan.x_offset, plan.y_offset), (800, 0, 100));
assert!(PaddingPlan::for_dimensions(64, 64).is_none());
```

Error handling
--------------
All public functions return `squarepad::Result<T>`. With the default
`ErrorPolicy::Continue`, a file that fails to decode or write is recorded in the
`BatchReport` and the batch goes on. `ErrorPolicy::Abort` stops at the first
failure with `Error::Aborted`.

Useful modules
--------------
- [`api`] — `ImageSquarer`, `BatchReport`, `FileReport`.
- [`core`] — `SquareParams` and the padding plan/compositing step.
- [`io`] — directory listing, codec, and backups.
- [`types`] — `ErrorPolicy`, `FileOutcome`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use api::{BatchReport, FileReport, ImageSquarer};
pub use core::padding::{PaddingPlan, pad_to_square};
pub use core::params::SquareParams;
pub use error::{Error, Result};
pub use types::{ErrorPolicy, FileOutcome};
