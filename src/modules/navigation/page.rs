use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cv::application::store::{CvState, CvStore};
use crate::cv::domain::entities::CvDocument;
use crate::cv::domain::theme::Theme;

/// What the CV page should present for a given store state.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading {
        theme: Theme,
    },
    /// Loading finished but nothing was published.
    Empty {
        theme: Theme,
    },
    Ready {
        theme: Theme,
        document: Arc<CvDocument>,
    },
}

impl PageView {
    pub fn from_state(state: &CvState) -> Self {
        let theme = state.current_theme;
        match (&state.cv_data, state.loading) {
            (Some(document), _) => PageView::Ready {
                theme,
                document: Arc::clone(document),
            },
            (None, true) => PageView::Loading { theme },
            (None, false) => PageView::Empty { theme },
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            PageView::Loading { theme }
            | PageView::Empty { theme }
            | PageView::Ready { theme, .. } => *theme,
        }
    }
}

/// The single page of the site. Loads the CV data when first mounted.
#[derive(Debug)]
pub struct CvPage {
    store: Arc<CvStore>,
    mounted: AtomicBool,
}

impl CvPage {
    pub fn new(store: Arc<CvStore>) -> Self {
        Self {
            store,
            mounted: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &Arc<CvStore> {
        &self.store
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Runs the store's load once; later mounts are no-ops.
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return;
        }
        self.store.load_data().await;
    }

    pub fn view(&self) -> PageView {
        PageView::from_state(&self.store.snapshot())
    }
}
