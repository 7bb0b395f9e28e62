//! Section splitting for problem-set documents.
//!
//! Level-1 sections are kept on one page or broken up into one page per
//! level-2 child, depending on their length. Page names come from the
//! heading text and are unique within a document.

mod engine;
mod output;
mod registry;
mod strategy;
mod types;

pub use engine::{promote_heading, SplitEngine, IMPLICIT_GROUP_TEXT};
pub use output::{reset_output_dir, write_plan};
pub use registry::{base_name, NameRegistry, FALLBACK_NAME};
pub use strategy::{LengthSplitStrategy, SplitStrategy};
pub use types::{PlannedFile, SplitPlan};
