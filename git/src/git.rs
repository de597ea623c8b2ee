pub mod changes;
pub mod command;
pub mod error;
pub mod pr;
pub mod predicates;
pub mod repository;

pub use changes::{
    CategoryChanges, ChangeCategory, ChangeStatus, FileChange, categorize_changes,
    parse_name_status,
};
pub use command::{CommandOutput, run, run_checked};
pub use error::{GitError, Result, ResultExt};
pub use pr::pr_exists;
pub use predicates::{MAIN_BRANCH, is_clean_status, is_main_branch};
pub use repository::{RealGitRepository, Repository};
