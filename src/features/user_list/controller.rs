//! User List Controller
//!
//! Fetches the user list once and renders either the names or a fixed failure
//! message into the `api-data` target.

use tracing::{error, info, warn};

use crate::constants::LOAD_FAILED_TEXT;
use crate::domain::User;
use crate::error::Result;
use crate::page::{TargetContent, TargetHandle};
use crate::services::{UserApi, run_in_tokio};
use crate::state::LoadState;
use crate::theme::VisualStyle;

/// Loads users into a render target, at most once
pub struct UserListLoader {
    api: UserApi,
    target: TargetHandle,
    state: LoadState,
}

impl UserListLoader {
    /// Create a new loader in the `Idle` state
    pub fn new(api: UserApi, target: TargetHandle) -> Self {
        Self {
            api,
            target,
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Run the single fetch and render its outcome
    ///
    /// Calls after the first are no-ops that return the settled state.
    pub async fn load(&mut self) -> LoadState {
        if self.state != LoadState::Idle {
            warn!("User list load already started, state: {:?}", self.state);
            return self.state.clone();
        }

        self.state = LoadState::Loading;
        let api = self.api.clone();
        let result = run_in_tokio(async move { api.fetch_users().await })
            .await
            .and_then(|fetched| fetched);
        self.settle(result)
    }

    /// Render a fetch outcome; the single exit of the load pipeline
    pub(crate) fn settle(&mut self, result: Result<Vec<User>>) -> LoadState {
        self.state = match result {
            Ok(users) => {
                let count = users.len();
                let names = users.into_iter().map(|u| u.name).collect();
                self.target.update(|t| {
                    t.clear();
                    t.set_content(TargetContent::List(names));
                });
                info!("Rendered {} users", count);
                LoadState::Rendered(count)
            }
            Err(e) => {
                error!(kind = ?e.fetch_kind(), "Failed to fetch user data: {e}");
                self.target.update(|t| {
                    t.clear();
                    t.set_content(TargetContent::Text(LOAD_FAILED_TEXT.to_string()));
                    t.set_style(VisualStyle::load_failed());
                });
                LoadState::Failed(e.to_string().into())
            }
        };
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{API_DATA_TARGET, LOADING_TEXT};
    use crate::error::Error;
    use crate::page::{Page, RenderTarget};

    fn loader() -> (UserListLoader, TargetHandle) {
        let mut page = Page::new();
        let target = page.add_target(RenderTarget::new(API_DATA_TARGET).with_text(LOADING_TEXT));
        let api = UserApi::new("http://127.0.0.1:9/users");
        (UserListLoader::new(api, target.clone()), target)
    }

    fn user(name: &str) -> User {
        User { name: name.to_string() }
    }

    #[test]
    fn test_success_replaces_placeholder_with_names() {
        let (mut loader, target) = loader();
        let state = loader.settle(Ok(vec![user("Ann"), user("Bob"), user("Cy")]));

        assert_eq!(state, LoadState::Rendered(3));
        let snapshot = target.snapshot();
        assert_eq!(snapshot.content().list_items(), ["Ann", "Bob", "Cy"]);
        assert!(!snapshot.content().text().contains(LOADING_TEXT));
        assert!(snapshot.style().is_none());
    }

    #[test]
    fn test_empty_list_renders_empty_list() {
        let (mut loader, target) = loader();
        assert_eq!(loader.settle(Ok(vec![])), LoadState::Rendered(0));
        assert_eq!(target.snapshot().content(), &TargetContent::List(vec![]));
    }

    #[test]
    fn test_failure_shows_fixed_message_with_error_style() {
        let (mut loader, target) = loader();
        let state = loader.settle(Err(Error::HttpStatus { status: 503 }));

        assert_eq!(state.error_message(), Some("HTTP error! status: 503"));
        let snapshot = target.snapshot();
        assert_eq!(snapshot.content(), &TargetContent::Text(LOAD_FAILED_TEXT.to_string()));
        assert!(snapshot.content().list_items().is_empty());
        assert_eq!(snapshot.style(), Some(&VisualStyle::load_failed()));
    }
}
