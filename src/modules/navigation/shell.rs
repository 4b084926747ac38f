use std::sync::Arc;

use tracing::{debug, warn};

use super::page::{CvPage, PageView};
use super::router::{PageKind, Router};
use crate::cv::application::store::CvStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches `{0}`")]
    NoRoute(String),
}

/// Ties the route table to the page components.
#[derive(Debug)]
pub struct AppShell {
    router: Router,
    cv_page: CvPage,
}

impl AppShell {
    pub fn new(router: Router, store: Arc<CvStore>) -> Self {
        Self {
            router,
            cv_page: CvPage::new(store),
        }
    }

    pub fn store(&self) -> &Arc<CvStore> {
        self.cv_page.store()
    }

    /// Resolves `location`, mounts its page and returns the page's view.
    pub async fn navigate(&self, location: &str) -> Result<PageView, NavigationError> {
        let Some(route) = self.router.resolve(location) else {
            warn!("No route for {}", location);
            return Err(NavigationError::NoRoute(location.to_string()));
        };
        debug!("Navigating to {} ({:?})", route.path, route.page);

        match route.page {
            PageKind::Cv => {
                self.cv_page.mount().await;
                Ok(self.cv_page.view())
            }
        }
    }
}
