use logoshare_core::{LogoshareError, LogoshareResult};
use logoshare_domain::{derive_logos, Logo, LogoDraft, LogoStatus, NavCategory, NewLogo, ViewMode};
use logoshare_persistence::{AuthSession, LogoStore};

/// The loaded logo collection together with the navigation state that
/// decides what is displayed. All mutation goes through these methods.
#[derive(Debug, Clone, Default)]
pub struct LogoLibrary {
    logos: Vec<Logo>,
    category: NavCategory,
    search: String,
    view_mode: ViewMode,
    submitting: bool,
}

impl LogoLibrary {
    pub fn new(logos: Vec<Logo>) -> Self {
        Self {
            logos,
            ..Self::default()
        }
    }

    pub fn logos(&self) -> &[Logo] {
        &self.logos
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }

    /// Replace the collection, e.g. after a reload from the store.
    pub fn replace(&mut self, logos: Vec<Logo>) {
        self.logos = logos;
    }

    pub fn category(&self) -> NavCategory {
        self.category
    }

    pub fn set_category(&mut self, category: NavCategory) {
        self.category = category;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// The list for the current category and search.
    pub fn displayed(&self) -> Vec<Logo> {
        derive_logos(&self.logos, self.category, &self.search)
    }

    pub fn find(&self, id: &str) -> Option<&Logo> {
        self.logos.iter().find(|logo| logo.id == id)
    }

    pub fn get(&self, id: &str) -> LogoshareResult<&Logo> {
        self.find(id)
            .ok_or_else(|| LogoshareError::NotFound(format!("Logo {}", id)))
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the draft and mark a submission as in flight.
    ///
    /// Fails with `Busy` while another submission is outstanding. A draft
    /// that does not validate leaves the state untouched.
    pub fn begin_submission(&mut self, draft: &LogoDraft) -> LogoshareResult<NewLogo> {
        if self.submitting {
            tracing::warn!("Rejected add-logo submission: another one is in flight");
            return Err(LogoshareError::Busy);
        }
        let new_logo = draft
            .finalize()
            .inspect_err(|e| tracing::warn!("Rejected add-logo submission: {}", e))?;
        self.submitting = true;
        Ok(new_logo)
    }

    /// Apply the store's answer to the submission started by
    /// `begin_submission`. The logo is prepended on success; storage
    /// failures are reported as `SubmissionFailed`.
    pub fn complete_submission(&mut self, result: LogoshareResult<Logo>) -> LogoshareResult<Logo> {
        if !self.submitting {
            return Err(LogoshareError::Internal(
                "No submission in progress".to_string(),
            ));
        }
        self.submitting = false;

        match result {
            Ok(logo) => {
                self.logos.insert(0, logo.clone());
                tracing::info!("Added logo {} ({})", logo.name, logo.id);
                Ok(logo)
            }
            Err(e) if e.is_persistence_failure() => {
                tracing::error!("Error adding logo: {}", e);
                Err(LogoshareError::SubmissionFailed(Box::new(e)))
            }
            Err(e) => Err(e),
        }
    }

    /// Run a full submission against `store`. Dropping the returned future
    /// before it resolves releases the submission flag.
    pub async fn submit(
        &mut self,
        store: &dyn LogoStore,
        draft: &LogoDraft,
        status: LogoStatus,
        session: Option<&AuthSession>,
    ) -> LogoshareResult<Logo> {
        let new_logo = self.begin_submission(draft)?;
        let in_flight = InFlight { library: self };
        let result = store.create_logo(new_logo, status, session).await;
        in_flight.library.complete_submission(result)
    }
}

/// Clears the submission flag if the store call never completed.
struct InFlight<'a> {
    library: &'a mut LogoLibrary,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.library.submitting {
            tracing::warn!("Add-logo submission cancelled before the store answered");
            self.library.submitting = false;
        }
    }
}
