//! # mpstart
//!
//! MicroProfile Starter in your terminal - generate starter projects from
//! the command line.
//!
//! mpstart talks to the MicroProfile Starter service: it fetches the
//! support matrix of valid version/server/spec combinations, walks you
//! through the choices, downloads the generated project as a zip archive,
//! extracts it, and can open the result in your editor.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install
//! cargo install mpstart
//!
//! # Run the wizard
//! mpstart
//!
//! # Or script it
//! mpstart new --group-id com.example --artifact-id demo \
//!     --mp-version MP4.1 --server LIBERTY --java-se SE17 \
//!     --spec CONFIG --spec METRICS --dir ./projects --no-open
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_const_for_fn)]

pub mod starter;
pub mod wizard;

pub use starter::{
    GenerationRequest, StarterApi, StarterClient, StarterError, StarterResult, SupportMatrix,
    DEFAULT_BASE_URL,
};
pub use wizard::{
    EditorWorkspace, NotificationSink, ProjectWizard, PromptProvider, TerminalNotifier,
    TerminalPrompts, WizardAnswers, WorkspaceController,
};
