use logoshare_app::LogoApp;
use logoshare_core::config::{BACKEND_ANON_KEY_ENV, BACKEND_URL_ENV};
use logoshare_core::{AppConfig, LogoshareError, LogoshareResult};
use logoshare_domain::sample_logos;
use logoshare_persistence::{JsonFileStore, PersistenceStore};

/// Global flags that decide how the app is assembled.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    pub backend: bool,
    pub file: Option<String>,
    pub latency_ms: Option<u64>,
    pub share_origin: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Sign in with the credentials while loading.
    pub sign_in: bool,
}

pub struct CliContext {
    pub app: LogoApp,
    store: Option<JsonFileStore>,
}

impl CliContext {
    pub async fn load(options: ContextOptions) -> LogoshareResult<Self> {
        let mut config = AppConfig::load();
        if let Some(latency_ms) = options.latency_ms {
            config.simulated_latency_ms = Some(latency_ms);
        }
        if let Some(origin) = options.share_origin {
            config.share_origin = Some(origin);
        }

        if options.backend {
            let credentials = match (options.sign_in, options.email, options.password) {
                (true, Some(email), Some(password)) => Some((email, password)),
                _ => None,
            };
            Self::load_backend(&config, credentials).await
        } else {
            Self::load_local(&config, options.file).await
        }
    }

    async fn load_local(config: &AppConfig, file: Option<String>) -> LogoshareResult<Self> {
        let store = file.map(JsonFileStore::new);
        let initial = match &store {
            Some(store) if store.exists().await => store.load_logos().await?,
            _ => sample_logos(),
        };

        let mut app = LogoApp::local(config, initial);
        app.load().await?;
        Ok(Self { app, store })
    }

    async fn load_backend(
        config: &AppConfig,
        credentials: Option<(String, String)>,
    ) -> LogoshareResult<Self> {
        let settings = config.backend().ok_or_else(|| {
            LogoshareError::Validation(format!(
                "Backend is not configured: set {} and {} or add them to the config file",
                BACKEND_URL_ENV, BACKEND_ANON_KEY_ENV
            ))
        })?;

        let mut app = LogoApp::backend(config, settings);
        if let Some((email, password)) = credentials {
            app.sign_in(&email, &password).await?;
        }
        app.load().await?;
        Ok(Self { app, store: None })
    }

    /// Write the local catalog back to its file, if one was given.
    pub async fn save(&self) -> LogoshareResult<()> {
        if let Some(store) = &self.store {
            store.save_logos(self.app.library().logos()).await?;
            tracing::info!("Saved catalog to {}", store.path().display());
        }
        Ok(())
    }
}
