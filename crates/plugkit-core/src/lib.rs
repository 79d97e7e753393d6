//! plugkit core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the plugkit
//! plugin scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           plugkit-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, reconcile_platforms)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRenderer, Clock,   │
//! │  IdGenerator)                           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    plugkit-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SimpleRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Identifiers, validation, contexts,     │
//! │  manifest editing)                      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use plugkit_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn TemplateRenderer>, Box<dyn Clock>, Box<dyn IdGenerator>) { unimplemented!() }
//!
//! let (filesystem, renderer, clock, ids) = adapters();
//! let service = ScaffoldService::new(filesystem, renderer, clock, ids);
//!
//! let request = ScaffoldRequest {
//!     organization: Some("com.example".into()),
//!     platforms: Some(vec![Platform::Android, Platform::Ios]),
//!     ..ScaffoldRequest::new("./awesome_plugin", "/opt/plugkit")
//! };
//! let report = service.create(request)?;
//! println!("{} files written", report.plugin_files + report.example_files);
//! # Ok::<(), PlugkitError>(())
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CommandProfile, ScaffoldReport, ScaffoldRequest, ScaffoldService, reconcile_platforms,
        validate_project_directory,
        ports::{Clock, Filesystem, IdGenerator, TemplateRenderer},
    };
    pub use crate::domain::{
        AndroidLanguage, EntryKind, IosLanguage, Platform, PluginContext, ProjectTree,
        TemplateContext, derive_android_identifier, derive_plugin_class_name,
        derive_uti_identifier, validate_project_name,
    };
    pub use crate::error::{ErrorCategory, PlugkitError, PlugkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
