//! Domain logic - pure version rules independent of git operations

pub mod commit;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use commit::{messages_from, CommitInfo};
pub use prerelease::PrereleaseCounter;
pub use tag::{TagPrefix, TaggedCommit, TaggedCommits};
pub use version::BumpLevel;
