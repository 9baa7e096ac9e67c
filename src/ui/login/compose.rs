//! Builds the login chain bound to one store.

use std::sync::{Arc, OnceLock};

use crate::api::ApiClient;
use crate::login::data::{HttpLoginDatasource, HttpLoginRepository};
use crate::login::domain::LoginUserUseCase;
use crate::session::AuthSession;
use crate::ui::app::AppReducer;
use crate::ui::login::viewmodel::LoginViewModel;
use crate::ui::store::Store;

/// Assembles data source → repository → use case → view model for one
/// store, building at most one view model.
///
/// The login slice has a single writer; memoizing here is what enforces
/// that — repeated calls hand back the same instance.
pub struct LoginComposer {
    store: Store<AppReducer>,
    client: ApiClient,
    session: AuthSession,
    view_model: OnceLock<Arc<LoginViewModel>>,
}

impl LoginComposer {
    pub fn new(store: Store<AppReducer>, client: ApiClient, session: AuthSession) -> Self {
        Self {
            store,
            client,
            session,
            view_model: OnceLock::new(),
        }
    }

    /// The view model for this store, built on first call.
    pub fn view_model(&self) -> Arc<LoginViewModel> {
        self.view_model
            .get_or_init(|| {
                let datasource =
                    HttpLoginDatasource::new(self.client.clone(), self.session.clone());
                let repository = HttpLoginRepository::new(Arc::new(datasource));
                let use_case = LoginUserUseCase::new(Arc::new(repository));
                Arc::new(LoginViewModel::new(self.store.clone(), Arc::new(use_case)))
            })
            .clone()
    }
}
