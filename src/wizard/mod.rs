//! Interactive project generation wizard.
//!
//! Drives the full flow: fetch the support matrix, collect build coordinates
//! and framework choices, download the generated archive, extract it, and
//! offer to open the result in the editor workspace.
//!
//! Every collaborator (prompts, workspace, notifications, the starter API)
//! is a trait so the flow can run against fakes in tests.

mod terminal;
mod workspace;

pub use terminal::{TerminalNotifier, TerminalPrompts};
pub use workspace::EditorWorkspace;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::starter::{
    archive, java_se_versions, DownloadTarget, GenerationRequest, StarterApi, StarterResult,
    SupportMatrix,
};

/// Collects one answer per wizard step.
///
/// Each method returns `Ok(None)` when the user dismisses the prompt, which
/// silently ends the wizard run.
pub trait PromptProvider {
    /// Free-text input with an optional default.
    fn input(&self, prompt: &str, default: Option<&str>) -> io::Result<Option<String>>;

    /// Pick one item; returns the chosen index.
    fn select(&self, prompt: &str, items: &[String]) -> io::Result<Option<usize>>;

    /// Pick any number of items; returns the chosen indices.
    fn multi_select(&self, prompt: &str, items: &[String]) -> io::Result<Option<Vec<usize>>>;

    /// Pick a target directory.
    fn pick_directory(&self, prompt: &str, default: &Path) -> io::Result<Option<PathBuf>>;
}

/// Applies the chosen post-generation action in the host workspace.
pub trait WorkspaceController {
    /// Add the folder to the current workspace, in front of existing roots.
    fn add_to_workspace(&self, path: &Path) -> io::Result<()>;

    /// Open the folder in a new window.
    fn open_new_window(&self, path: &Path) -> io::Result<()>;
}

/// Where user-facing messages go.
pub trait NotificationSink {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Answers supplied up front (CLI flags), skipping the matching prompts.
#[derive(Debug, Clone, Default)]
pub struct WizardAnswers {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub mp_version: Option<String>,
    pub server: Option<String>,
    pub java_se: Option<String>,
    pub specs: Option<Vec<String>>,
    pub dir: Option<PathBuf>,
    /// Skip the final open/add-to-workspace prompt.
    pub no_open: bool,
}

/// How a wizard run ended. Cancellation is silent; only errors notify.
enum Outcome {
    Completed,
    Cancelled,
}

/// The project generation wizard.
pub struct ProjectWizard<'a> {
    api: &'a dyn StarterApi,
    prompts: &'a dyn PromptProvider,
    workspace: &'a dyn WorkspaceController,
    notifier: &'a dyn NotificationSink,
    answers: WizardAnswers,
}

impl<'a> ProjectWizard<'a> {
    pub fn new(
        api: &'a dyn StarterApi,
        prompts: &'a dyn PromptProvider,
        workspace: &'a dyn WorkspaceController,
        notifier: &'a dyn NotificationSink,
        answers: WizardAnswers,
    ) -> Self {
        Self { api, prompts, workspace, notifier, answers }
    }

    /// Run the wizard to completion.
    ///
    /// Never returns an error: failures become a single notification, and a
    /// dismissed prompt ends the run with no message at all.
    pub fn run(&self) {
        match self.execute() {
            Ok(Outcome::Completed | Outcome::Cancelled) => {}
            Err(err) => {
                tracing::error!(error = %err, "project generation failed");
                self.notifier.error(&err.user_message());
            }
        }
    }

    fn execute(&self) -> StarterResult<Outcome> {
        let matrix = self.api.fetch_support_matrix()?;

        let Some(group_id) = self.ask_input(
            self.answers.group_id.as_deref(),
            "Group Id",
            Some("com.example"),
        )?
        else {
            return Ok(Outcome::Cancelled);
        };

        let Some(artifact_id) =
            self.ask_input(self.answers.artifact_id.as_deref(), "Artifact Id", Some("demo"))?
        else {
            return Ok(Outcome::Cancelled);
        };

        let Some(mp_version) = self.choose_version(&matrix)? else {
            return Ok(Outcome::Cancelled);
        };

        let Some(server) = self.choose_server(&matrix, &mp_version)? else {
            return Ok(Outcome::Cancelled);
        };

        let Some(java_se_version) = self.choose_java_se(&mp_version, &server)? else {
            return Ok(Outcome::Cancelled);
        };

        let Some(selected_specs) = self.choose_specs(&matrix, &mp_version)? else {
            return Ok(Outcome::Cancelled);
        };

        let Some(dir) = self.choose_directory()? else {
            return Ok(Outcome::Cancelled);
        };

        let request = GenerationRequest {
            group_id,
            artifact_id,
            mp_version,
            supported_server: server,
            java_se_version,
            selected_specs,
        };

        std::fs::create_dir_all(&dir)?;
        let target = DownloadTarget::new(&dir, &request);

        self.download_with_progress(&request, &target)?;

        archive::extract(&target.archive_path, &target.dir)?;

        if let Err(err) = archive::remove(&target.archive_path) {
            // Archive is already extracted; report and keep going.
            tracing::warn!(error = %err, "archive cleanup failed");
            self.notifier.error(&err.user_message());
        }

        let project_dir = target.dir.join(&request.artifact_id);
        self.notifier
            .info(&format!("Project generated at {}", project_dir.display()));

        if !self.answers.no_open {
            self.offer_open(&project_dir)?;
        }

        Ok(Outcome::Completed)
    }

    /// Use a flag-supplied answer when present, otherwise prompt.
    fn ask_input(
        &self,
        preset: Option<&str>,
        prompt: &str,
        default: Option<&str>,
    ) -> io::Result<Option<String>> {
        if let Some(value) = preset {
            return Ok(Some(value.to_string()));
        }
        self.prompts.input(prompt, default)
    }

    fn choose_version(&self, matrix: &SupportMatrix) -> io::Result<Option<String>> {
        let versions: Vec<String> = matrix.versions().iter().map(ToString::to_string).collect();

        if let Some(preset) = &self.answers.mp_version {
            if matrix.config(preset).is_some() {
                return Ok(Some(preset.clone()));
            }
            self.notifier.error(&format!(
                "Unknown MicroProfile version '{preset}'. Run 'mpstart matrix' to see valid versions."
            ));
            return Ok(None);
        }

        let choice = self.prompts.select("MicroProfile version", &versions)?;
        Ok(choice.map(|i| versions[i].clone()))
    }

    fn choose_server(&self, matrix: &SupportMatrix, mp_version: &str) -> io::Result<Option<String>> {
        // The version came from the matrix (or was validated against it).
        let servers = matrix
            .config(mp_version)
            .map(|c| c.supported_servers.clone())
            .unwrap_or_default();

        if let Some(preset) = &self.answers.server {
            if servers.iter().any(|s| s == preset) {
                return Ok(Some(preset.clone()));
            }
            self.notifier.error(&format!(
                "Server '{preset}' is not supported by {mp_version}."
            ));
            return Ok(None);
        }

        let choice = self.prompts.select("Server runtime", &servers)?;
        Ok(choice.map(|i| servers[i].clone()))
    }

    fn choose_java_se(&self, mp_version: &str, server: &str) -> io::Result<Option<String>> {
        let versions: Vec<String> =
            java_se_versions(mp_version, server).iter().map(ToString::to_string).collect();

        if let Some(preset) = &self.answers.java_se {
            if versions.iter().any(|v| v == preset) {
                return Ok(Some(preset.clone()));
            }
            self.notifier.error(&format!(
                "Java {preset} is not available for {mp_version} on {server}."
            ));
            return Ok(None);
        }

        let choice = self.prompts.select("Java SE version", &versions)?;
        Ok(choice.map(|i| versions[i].clone()))
    }

    fn choose_specs(
        &self,
        matrix: &SupportMatrix,
        mp_version: &str,
    ) -> io::Result<Option<Vec<String>>> {
        let spec_ids = matrix.config(mp_version).map(|c| c.specs.clone()).unwrap_or_default();

        if let Some(preset) = &self.answers.specs {
            for spec in preset {
                if !spec_ids.iter().any(|s| s == spec) {
                    self.notifier.error(&format!(
                        "Spec '{spec}' is not available for {mp_version}."
                    ));
                    return Ok(None);
                }
            }
            return Ok(Some(preset.clone()));
        }

        if spec_ids.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let labels: Vec<String> =
            spec_ids.iter().map(|id| matrix.describe(id).to_string()).collect();

        let Some(indices) = self.prompts.multi_select("Specifications", &labels)? else {
            return Ok(None);
        };

        Ok(Some(indices.into_iter().map(|i| spec_ids[i].clone()).collect()))
    }

    fn choose_directory(&self) -> io::Result<Option<PathBuf>> {
        if let Some(dir) = &self.answers.dir {
            return Ok(Some(dir.clone()));
        }

        let default = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.prompts.pick_directory("Target directory", &default)
    }

    /// Download under a spinner. Blocking and non-cancellable: once the
    /// request is submitted it runs to completion or failure.
    fn download_with_progress(
        &self,
        request: &GenerationRequest,
        target: &DownloadTarget,
    ) -> StarterResult<u64> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Generating {}...", request.archive_name()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.api.download_project(request, &target.archive_path);
        spinner.finish_and_clear();
        result
    }

    fn offer_open(&self, project_dir: &Path) -> io::Result<()> {
        let actions =
            vec!["Add to current workspace".to_string(), "Open in new window".to_string()];

        match self.prompts.select("Open the generated project?", &actions)? {
            Some(0) => self.workspace.add_to_workspace(project_dir),
            Some(1) => self.workspace.open_new_window(project_dir),
            _ => Ok(()),
        }
    }
}
