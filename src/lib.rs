#![doc = r#"
COLPAD — pads the eight periodontal chart column images to a common height.

Each `column_{i}.png` (for `i` in 1..=8) is loaded, centered vertically on a
canvas 515 pixels tall with white rows added above and below, and saved as
`column_{i}_padded.png` in the same directory. When the height difference is
odd, the extra row goes to the bottom. Width and color mode are preserved.

Quick start
-----------
```rust,no_run
fn main() -> colpad::Result<()> {
    let report = colpad::pad_all()?;
    println!("wrote {} files", report.processed);
    Ok(())
}
```

Working in another directory
----------------------------
```rust,no_run
use std::path::Path;
use colpad::{pad_all_in, pad_column, ColumnId};

fn main() -> colpad::Result<()> {
    let dir = Path::new("public/periodontal-chart-images/upper-teeth");
    let first = ColumnId::new(1).expect("1 is a valid column");
    let padded = pad_column(dir, first)?;
    assert_eq!(padded.height, colpad::TARGET_HEIGHT);

    pad_all_in(dir)?;
    Ok(())
}
```

Error handling
--------------
The batch stops at the first failure. Outputs already written stay on disk.

```rust,no_run
use colpad::{pad_all, Error};

match pad_all() {
    Ok(report) => println!("done: {}", report.processed),
    Err(Error::MissingInput { path }) => eprintln!("missing {}", path.display()),
    Err(Error::TooTall { path, height, target }) => {
        eprintln!("{} is {height}px, limit {target}px", path.display())
    }
    Err(other) => eprintln!("{other}"),
}
```

An input taller than the target height is rejected rather than cropped.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::{COLUMN_COUNT, TARGET_HEIGHT};
pub use error::{Error, Result};
pub use types::{ColumnId, PaddingSpec};

pub use api::{BatchReport, PaddedColumn, pad_all, pad_all_in, pad_column};
