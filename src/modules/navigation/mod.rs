pub mod page;
pub mod router;
pub mod shell;

pub use page::{CvPage, PageView};
pub use router::{PageKind, Route, Router};
pub use shell::{AppShell, NavigationError};
