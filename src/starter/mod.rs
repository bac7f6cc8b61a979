//! Client side of the MicroProfile Starter service.
//!
//! The service exposes two endpoints: a support matrix describing which
//! server runtimes and specifications are valid for each MicroProfile
//! version, and a project endpoint that turns a generation request into a
//! zip archive of a ready-to-build starter project.

pub mod archive;
mod client;
mod error;
mod matrix;

pub use client::{
    DownloadTarget, GenerationRequest, StarterApi, StarterClient, DEFAULT_BASE_URL,
};
pub use error::{StarterError, StarterResult};
pub use matrix::{java_se_versions, SupportMatrix, VersionConfig};
