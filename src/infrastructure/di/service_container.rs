//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::PageService;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::Page;
use crate::infrastructure::stylesheet::{BootstrapStyleSheet, StyleSheet};
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Class token mapping for rendered markup
    pub sheet: Arc<dyn StyleSheet>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    ///
    /// Fails when the settings do not describe a valid page.
    pub fn new(settings: Settings) -> ApplicationResult<Self> {
        settings.page_spec()?;
        let sheet = BootstrapStyleSheet::new(settings.style.stylesheet_href.clone());
        Ok(Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(sheet),
        ))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        sheet: Arc<dyn StyleSheet>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs, sheet }
    }

    /// Page service for the configured page.
    pub fn page_service(&self) -> ApplicationResult<PageService> {
        let page = Page::new(self.settings.page_spec()?);
        Ok(PageService::new(
            self.fs.clone(),
            self.sheet.clone(),
            page,
            self.settings.title.clone(),
            self.settings.feedback_form()?,
        ))
    }
}
