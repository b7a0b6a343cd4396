//! Application - Page Construction and Page-Ready Setup
//!
//! Builds the host page, then wires both components to their targets exactly
//! once when the page signals readiness.

use tracing::{info, warn};

use crate::constants::{API_DATA_TARGET, FORM_FEEDBACK_TARGET, LOADING_TEXT};
use crate::domain::{AppConfig, RegistrationForm};
use crate::error::{Error, Result};
use crate::features::registration::{RegistrationValidator, SubmitEvent, ValidationResult};
use crate::features::user_list::UserListLoader;
use crate::page::{Page, RenderTarget};
use crate::services::{UserApi, block_on};
use crate::state::LoadState;

/// Components created by the page-ready setup
pub struct PageComponents {
    pub user_list: UserListLoader,
    pub registration: RegistrationValidator,
}

/// Host page plus its components
pub struct Application {
    config: AppConfig,
    page: Page,
    components: Option<PageComponents>,
}

impl Application {
    /// Build the page with its initial target contents
    pub fn new(config: AppConfig) -> Self {
        let mut page = Page::new();
        page.add_target(RenderTarget::new(API_DATA_TARGET).with_text(LOADING_TEXT));
        page.add_target(RenderTarget::new(FORM_FEEDBACK_TARGET).hidden());

        Self {
            config,
            page,
            components: None,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn is_ready(&self) -> bool {
        self.components.is_some()
    }

    /// Page-ready signal: run component setup, then the user list load
    ///
    /// Setup happens once; later signals are ignored and return the settled
    /// load state.
    pub async fn ready(&mut self) -> Result<LoadState> {
        if let Some(components) = &self.components {
            warn!("Page-ready signalled more than once");
            return Ok(components.user_list.state().clone());
        }

        let components = self.setup()?;
        let components = self.components.insert(components);
        Ok(components.user_list.load().await)
    }

    /// Synchronous form of [`ready`](Self::ready) for non-async hosts
    pub fn ready_blocking(&mut self) -> Result<LoadState> {
        block_on(self.ready())?
    }

    /// Deliver a registration form submission
    pub fn submit(&mut self, form: RegistrationForm) -> Result<ValidationResult> {
        let components = self.components_mut()?;
        let mut event = SubmitEvent::new(form);
        Ok(components.registration.on_submit(&mut event))
    }

    fn setup(&self) -> Result<PageComponents> {
        let api_data = self.page.require(API_DATA_TARGET)?;
        let feedback = self.page.require(FORM_FEEDBACK_TARGET)?;

        info!("Page ready, users endpoint: {}", self.config.api.users_url);
        Ok(PageComponents {
            user_list: UserListLoader::new(UserApi::new(&self.config.api.users_url), api_data),
            registration: RegistrationValidator::new(feedback),
        })
    }

    fn components_mut(&mut self) -> Result<&mut PageComponents> {
        self.components.as_mut().ok_or_else(|| Error::Invalid {
            message: "Page is not ready".to_string(),
        })
    }
}
