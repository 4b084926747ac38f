use std::sync::Arc;

use cv_app::config::{AppConfig, CvDataLocation};
use cv_app::cv::adapter::outgoing::{FileCvSource, HttpCvSource, ScrollPositionViewport};
use cv_app::cv::application::normalizers::NormalizationPipeline;
use cv_app::cv::application::services::LoadCvDocumentService;
use cv_app::cv::application::store::CvStore;
use cv_app::cv::application::use_cases::LoadCvDocumentUseCase;
use cv_app::navigation::{AppShell, PageView, Router};
use cv_app::shared::telemetry::init_tracing;

use tracing::{info, warn};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Environment variable loading
    AppConfig::load_dotenv();
    init_tracing();

    info!("Starting application...");

    let config = AppConfig::from_env()?;

    let loader: Arc<dyn LoadCvDocumentUseCase> = match &config.data_location {
        CvDataLocation::Http { base_url, path } => {
            let source = HttpCvSource::new(base_url, path)?;
            info!("Loading CV data from {}", source.url());
            Arc::new(LoadCvDocumentService::new(
                source,
                NormalizationPipeline::standard(),
            ))
        }
        CvDataLocation::File(path) => {
            info!("Loading CV data from file {}", path.display());
            Arc::new(LoadCvDocumentService::new(
                FileCvSource::new(path),
                NormalizationPipeline::standard(),
            ))
        }
    };

    let store = Arc::new(CvStore::with_theme(
        loader,
        Arc::new(ScrollPositionViewport::new()),
        config.default_theme,
    ));
    let shell = AppShell::new(Router::default(), Arc::clone(&store));

    match shell.navigate("/").await? {
        PageView::Ready { theme, document } => {
            info!(
                "CV page ready for {} with theme {}",
                document.display_name().unwrap_or("<unnamed>"),
                theme
            );
            println!("{}", serde_json::to_string_pretty(&*document)?);
        }
        PageView::Empty { theme } | PageView::Loading { theme } => {
            warn!("CV page has no data to show (theme {})", theme);
        }
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
