use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::cv::application::ports::outgoing::{ScrollToOptions, Viewport};
use crate::cv::application::use_cases::LoadCvDocumentUseCase;
use crate::cv::domain::entities::CvDocument;
use crate::cv::domain::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub struct CvState {
    pub current_theme: Theme,
    pub cv_data: Option<Arc<CvDocument>>,
    pub loading: bool,
}

impl CvState {
    pub fn initial(theme: Theme) -> Self {
        Self {
            current_theme: theme,
            cv_data: None,
            loading: true,
        }
    }
}

impl Default for CvState {
    fn default() -> Self {
        Self::initial(Theme::default())
    }
}

pub struct CvStore {
    state: watch::Sender<CvState>,
    loader: Arc<dyn LoadCvDocumentUseCase>,
    viewport: Arc<dyn Viewport>,
}

impl fmt::Debug for CvStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CvStore")
            .field("state", &*self.state.borrow())
            .field("loader", &"<dyn LoadCvDocumentUseCase>")
            .field("viewport", &"<dyn Viewport>")
            .finish()
    }
}

impl CvStore {
    pub fn new(loader: Arc<dyn LoadCvDocumentUseCase>, viewport: Arc<dyn Viewport>) -> Self {
        Self::with_theme(loader, viewport, Theme::default())
    }

    pub fn with_theme(
        loader: Arc<dyn LoadCvDocumentUseCase>,
        viewport: Arc<dyn Viewport>,
        theme: Theme,
    ) -> Self {
        Self {
            state: watch::Sender::new(CvState::initial(theme)),
            loader,
            viewport,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CvState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CvState {
        self.state.borrow().clone()
    }

    pub fn current_theme(&self) -> Theme {
        self.state.borrow().current_theme
    }

    pub fn cv_data(&self) -> Option<Arc<CvDocument>> {
        self.state.borrow().cv_data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Failures are logged and leave the previously published document in
    /// place. `loading` is cleared when this returns, whatever the outcome.
    /// Overlapping calls are not de-duplicated; the last one to finish wins.
    pub async fn load_data(&self) {
        self.state.send_if_modified(|state| {
            let changed = !state.loading;
            state.loading = true;
            changed
        });
        let _loading = LoadingGuard { state: &self.state };

        match self.loader.execute().await {
            Ok(document) => {
                info!(
                    "CV data loaded: {} experience, {} education entries",
                    document.experience.len(),
                    document.education.len()
                );
                self.state.send_modify(|state| {
                    state.cv_data = Some(Arc::new(document));
                });
            }
            Err(e) => {
                error!("Failed to load CV data: {}", e);
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        let changed = self.state.send_if_modified(|state| {
            if state.current_theme == theme {
                return false;
            }
            state.current_theme = theme;
            true
        });
        debug!("Theme set to {} (changed: {})", theme, changed);

        self.viewport.scroll_to(ScrollToOptions::top_instant());
    }
}

/// Clears `loading` on drop, including when the load future is abandoned.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<CvState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.loading = false);
    }
}
