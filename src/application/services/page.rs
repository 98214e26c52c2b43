//! Page rendering service
//!
//! Builds the landing page, renders it to HTML and writes the static site:
//! the page itself plus a redirect document answering the feedback path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{Destination, LayoutPlan, Node, Page, Viewport, FEEDBACK_PATH};
use crate::infrastructure::html::HtmlRenderer;
use crate::infrastructure::stylesheet::StyleSheet;
use crate::infrastructure::traits::FileSystem;

/// Page document, relative to the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Redirect document served for the feedback path.
pub const FEEDBACK_REDIRECT_FILE: &str = "feedback/index.html";

/// Files written by [`PageService::export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

pub struct PageService {
    fs: Arc<dyn FileSystem>,
    renderer: HtmlRenderer<Arc<dyn StyleSheet>>,
    page: Page,
    title: String,
    feedback_form: Destination,
}

impl PageService {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        sheet: Arc<dyn StyleSheet>,
        page: Page,
        title: impl Into<String>,
        feedback_form: Destination,
    ) -> Self {
        Self {
            fs,
            renderer: HtmlRenderer::new(sheet),
            page,
            title: title.into(),
            feedback_form,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The page body as a view tree.
    pub fn tree(&self) -> Node {
        self.page.root_layout()
    }

    /// Complete HTML document of the page.
    #[instrument(level = "debug", skip(self))]
    pub fn render_page(&self) -> String {
        self.renderer.document(&self.title, &self.page.root_layout())
    }

    /// Redirect document forwarding the feedback path to the form.
    pub fn render_feedback_redirect(&self) -> String {
        self.renderer.redirect(&self.title, &self.feedback_form)
    }

    /// Fragment arrangement at `viewport`.
    pub fn layout(&self, viewport: Viewport) -> LayoutPlan {
        LayoutPlan::resolve(&self.page.root_layout(), self.page.breakpoint(), viewport)
    }

    /// Write the static site into `output_dir`.
    #[instrument(skip(self))]
    pub fn export(&self, output_dir: &Path) -> ApplicationResult<RenderReport> {
        self.fs
            .create_dir_all(output_dir)
            .with_path_context("create output directory", output_dir)?;

        let outputs = [
            (INDEX_FILE, self.render_page()),
            (FEEDBACK_REDIRECT_FILE, self.render_feedback_redirect()),
        ];

        let mut files = Vec::with_capacity(outputs.len());
        for (name, content) in outputs {
            let path = output_dir.join(name);
            self.fs
                .ensure_parent(&path)
                .with_path_context("create directory for", &path)?;
            self.fs
                .write(&path, &content)
                .with_path_context("write", &path)?;
            debug!("export: wrote {} ({} bytes)", path.display(), content.len());
            files.push(path);
        }

        info!(
            "exported page to {} ({} -> {})",
            output_dir.display(),
            FEEDBACK_PATH,
            self.feedback_form
        );
        Ok(RenderReport {
            output_dir: output_dir.to_path_buf(),
            files,
        })
    }
}
