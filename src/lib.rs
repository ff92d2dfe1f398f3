//! # density-icons
//!
//! Resize app logos into every Android density bucket.
//!
//! Each configured source image is decoded once and written as a square PNG
//! into `drawable-ldpi` through `drawable-xxxhdpi` under the project's `res`
//! directory:
//!
//! ```text
//! logo/shumiao.jpg  →  res/drawable-ldpi/shumiao.png     36x36
//!                      res/drawable-mdpi/shumiao.png     48x48
//!                      res/drawable-hdpi/shumiao.png     72x72
//!                      res/drawable-xhdpi/shumiao.png    96x96
//!                      res/drawable-xxhdpi/shumiao.png   144x144
//!                      res/drawable-xxxhdpi/shumiao.png  192x192
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`density`] | `SizeSpec` and the stock density table |
//! | [`config`] | `icons.toml` loading, merging over defaults, validation |
//! | [`imaging`] | Decode / square resize / PNG encode behind the `ImageBackend` trait |
//! | [`generate`] | `resize_all` for one source, `generate_all` for a whole config |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Square Stretch, Not Fit
//!
//! Every output is exactly `size × size` regardless of the source aspect
//! ratio. Launcher icons are square; a non-square logo is stretched, not
//! letterboxed or cropped.
//!
//! ## Report, Then Continue
//!
//! A source that fails is reported and recorded in the
//! [`generate::GenerateReport`]; the remaining sources still run. The binary
//! exits 0 by default and only turns failures into a non-zero exit with
//! `--strict`.

pub mod config;
pub mod density;
pub mod generate;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
