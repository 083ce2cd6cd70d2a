//! Domain Services
//!
//! The combination lattice and the content-addressed merge/reduce engine:
//! - `combination_creator` - canonical enumeration of combinations
//! - `parent_finder` - ancestors of a combination and their merged baseline
//! - `merger` - folds one combination's data into another
//! - `reducer` - strips inherited data before persistence

pub mod combination_creator;
pub mod merger;
pub mod parent_finder;
pub mod reducer;

pub use combination_creator::{CombinationCreator, SetupError, DEFAULT_NAME_SEPARATOR};
pub use merger::{MergeError, MergeFields, MergerManager};
pub use parent_finder::{is_valid_parent, ParentFinder, ParentFinderError, BASELINE_SUFFIX};
pub use reducer::{PackageReducer, ReduceFields, ReducerError, ReducerManager, ThumbnailReducer};
