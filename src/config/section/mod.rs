//! Configuration section definitions.
//!
//! Each module corresponds to a section in `manpost.toml`:
//!
//! | Module    | TOML Section | Purpose                                  |
//! |-----------|--------------|------------------------------------------|
//! | `walk`    | `[walk]`     | Target directory, parallel processing    |
//! | `inject`  | `[inject]`   | Stylesheet and wrapper for `inject`      |
//! | `extract` | `[extract]`  | PHP template values for `extract`        |

mod extract;
mod inject;
mod walk;

pub use extract::ExtractConfig;
pub use inject::InjectConfig;
pub use walk::WalkConfig;
