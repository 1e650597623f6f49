//! Herald Strategies - Version arithmetic for changelog bumps
//!
//! This crate validates version strings and computes the next version for a
//! patch, minor or major bump.

mod semver;
mod traits;
pub mod types;

pub use self::semver::SemVerStrategy;
pub use traits::VersionStrategy;
pub use types::{BumpTarget, BumpType, VersionComponents};
