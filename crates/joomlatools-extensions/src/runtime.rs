//! Lazy bootstrap of the embedded host runtime
//!
//! The host runtime expects a fully initialized environment (request
//! context, path constants) before any application object can exist, and
//! that environment can only be prepared once. The `RuntimeContext` owns
//! that guard explicitly: callers construct one context per process and the
//! state machine below runs `Uninitialized -> Prepared -> Ready` at most
//! once.

use crate::application::{Application, ApplicationFactory, ApplicationOptions, PlatformVariant};
use joomlatools_core::{Credentials, Error, ProjectDescriptor, Result, Verbosity};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Package name identifying the joomlatools platform layout
pub const PLATFORM_PACKAGE: &str = "joomlatools/joomla-platform";

/// Bootstrap progress of the host runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuntimeState {
    #[default]
    Uninitialized,
    /// Environment constants are defined; no application exists yet
    Prepared,
    /// The application handle exists and is authenticated
    Ready,
}

/// Owned bootstrap context for the embedded host runtime.
///
/// Holds the credentials and verbosity fixed at construction, prepares the
/// environment once, and creates the single application handle on first use.
pub struct RuntimeContext {
    project_root: PathBuf,
    credentials: Credentials,
    verbosity: Verbosity,
    factory: Box<dyn ApplicationFactory>,
    state: RuntimeState,
    application: Option<Box<dyn Application>>,
}

impl RuntimeContext {
    pub fn new(
        project_root: impl Into<PathBuf>,
        credentials: Credentials,
        verbosity: Verbosity,
        factory: Box<dyn ApplicationFactory>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            credentials,
            verbosity,
            factory,
            state: RuntimeState::Uninitialized,
            application: None,
        }
    }

    pub fn state(&self) -> RuntimeState {
        self.state
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Produce the application handle, bootstrapping on first use.
    ///
    /// Idempotent: repeated calls return the same handle and never repeat
    /// environment preparation. Authentication failure is fatal and leaves
    /// the environment prepared; the next call retries application creation
    /// only.
    pub fn ensure_application(&mut self) -> Result<&mut (dyn Application + 'static)> {
        if self.state == RuntimeState::Uninitialized {
            let variant = self.detect_variant();
            debug!(?variant, "Preparing host runtime environment");
            self.factory.prepare_environment(variant)?;
            self.state = RuntimeState::Prepared;
        }

        if self.application.is_none() {
            let options = ApplicationOptions {
                root_user: self.credentials.username.clone(),
                log_level: self.verbosity,
            };

            debug!(root_user = %options.root_user, "Creating host application");
            let mut application = self.factory.create(&options)?;
            application.authenticate(&self.credentials)?;

            self.state = RuntimeState::Ready;
            self.application = Some(application);
        }

        self.application
            .as_deref_mut()
            .ok_or_else(|| Error::bootstrap("application handle missing after bootstrap"))
    }

    /// Decide which bootstrap sequence the local project needs.
    ///
    /// An unreadable or absent project descriptor means the traditional CMS
    /// layout.
    fn detect_variant(&self) -> PlatformVariant {
        let descriptor_path = self.project_root.join("composer.json");

        match ProjectDescriptor::load(&descriptor_path) {
            Ok(Some(descriptor)) if descriptor.name == PLATFORM_PACKAGE => {
                PlatformVariant::Platform
            }
            Ok(_) => PlatformVariant::Cms,
            Err(error) => {
                warn!(%error, "Could not read project descriptor, assuming CMS layout");
                PlatformVariant::Cms
            }
        }
    }
}

impl Drop for RuntimeContext {
    /// Best-effort session cleanup.
    ///
    /// If the runtime was ever initialized, close any session-like resource
    /// before process exit; failures are swallowed by the implementor.
    fn drop(&mut self) {
        if let Some(application) = self.application.as_deref_mut() {
            debug!("Closing host application session");
            application.close_session();
        }
    }
}
