//! Orchestration for the dashboard page: initial load, refresh and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every cycle flows one way: gateway reads -> `DashboardState` ->
//! `Presenter`. The controller owns its collaborators instead of reaching for
//! globals, so the page wires browser implementations and tests wire doubles.
//!
//! ERROR HANDLING
//! ==============
//! This is the only recovery boundary. Each failure is logged and turned into
//! a localized blocking alert; nothing propagates to the page. Every entry
//! point clears the busy indicator however it ends.
//!
//! CONCURRENCY
//! ===========
//! Reads in a batch run concurrently through `try_join!`: the first failure
//! rejects the batch and the remaining reads are dropped. State lives in
//! `RefCell`/`Cell` and no borrow is held across an `.await`.

#[cfg(test)]
#[path = "dashboard_controller_test.rs"]
mod dashboard_controller_test;

use std::cell::{Cell, RefCell};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::i18n;
use crate::net::api::Gateway;
use crate::net::types::{InitialData, RefreshData, decode_columns, decode_orders, decode_stats};
use crate::state::dashboard::DashboardState;
use crate::state::ui::{Presenter, section_from_href};
use crate::util::shell::Shell;
use crate::util::storage::Storage;

pub const STATS_ENDPOINT: &str = "stats";
pub const ORDERS_ENDPOINT: &str = "orders";
pub const COLUMNS_ENDPOINT: &str = "columns";

const REFRESH_PARAMS: [(&str, &str); 1] = [("refresh", "true")];
const LOGOUT_FIELDS: [(&str, &str); 1] = [("action", "logout")];

/// Lifecycle of the dashboard data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
    Refreshing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    Failed,
    /// Not `Ready`: either the initial load never succeeded or another
    /// refresh is still outstanding.
    Skipped,
}

pub struct DashboardController<G, S, H, P> {
    config: DashboardConfig,
    gateway: G,
    storage: S,
    shell: H,
    view: P,
    state: RefCell<DashboardState>,
    phase: Cell<Phase>,
}

impl<G, S, H, P> DashboardController<G, S, H, P>
where
    G: Gateway,
    S: Storage,
    H: Shell,
    P: Presenter,
{
    pub fn new(config: DashboardConfig, gateway: G, storage: S, shell: H, view: P) -> Self {
        Self {
            config,
            gateway,
            storage,
            shell,
            view,
            state: RefCell::new(DashboardState::default()),
            phase: Cell::new(Phase::Idle),
        }
    }

    /// Restore the session, configure the gateway, and load stats, orders and
    /// columns as one all-or-nothing batch.
    ///
    /// Without a usable base address this alerts and stops before any request
    /// or interaction is wired. Otherwise the default section is revealed
    /// whether or not the batch succeeded.
    pub async fn start(&self) -> Phase {
        self.phase.set(Phase::Loading);
        self.view.set_busy(true);
        self.state
            .borrow_mut()
            .restore(&self.storage, &self.config.user_storage_key);

        if let Err(err) = self.configure_gateway() {
            log::error!("dashboard startup aborted: {err}");
            self.shell.alert(i18n::CONFIG_MISSING);
            self.view.set_busy(false);
            self.phase.set(Phase::Failed);
            return Phase::Failed;
        }
        self.view.enable_interactions();

        let phase = match self.fetch_initial().await {
            Ok(data) => {
                log::info!(
                    "dashboard loaded: {} orders, {} columns",
                    data.orders.len(),
                    data.columns.len()
                );
                self.state.borrow_mut().apply_initial(data);
                self.render_all();
                Phase::Ready
            }
            Err(err) => {
                log::error!("failed to load dashboard data: {err}");
                self.shell.alert(i18n::LOAD_FAILED);
                Phase::Failed
            }
        };

        self.view.set_busy(false);
        self.view.show_section(&self.config.default_section);
        self.phase.set(phase);
        phase
    }

    /// Re-read stats and orders and rebuild the summary and table.
    ///
    /// Only runs from `Ready`; a request while loading, failed, or mid-refresh
    /// is skipped.
    pub async fn refresh(&self) -> RefreshOutcome {
        let phase = self.phase.get();
        if phase != Phase::Ready {
            log::warn!("refresh skipped while dashboard is {phase:?}");
            return RefreshOutcome::Skipped;
        }
        self.phase.set(Phase::Refreshing);
        self.view.set_busy(true);

        let outcome = match self.fetch_refresh().await {
            Ok(data) => {
                self.state.borrow_mut().apply_refresh(data);
                self.render_all();
                self.shell.alert(i18n::REFRESH_SUCCEEDED);
                RefreshOutcome::Refreshed
            }
            Err(err) => {
                log::error!("failed to refresh dashboard data: {err}");
                self.shell.alert(i18n::REFRESH_FAILED);
                RefreshOutcome::Failed
            }
        };

        self.view.set_busy(false);
        self.phase.set(Phase::Ready);
        outcome
    }

    /// Tell the backend, then drop the session and leave for the login page
    /// no matter how the request went.
    pub async fn logout(&self) {
        if let Err(err) = self.gateway.write(&LOGOUT_FIELDS).await {
            log::warn!("logout request failed: {err}");
        }
        self.shell.expire_session();
        self.state
            .borrow_mut()
            .clear_session(&self.storage, &self.config.user_storage_key);
        self.shell.redirect(&self.config.login_page);
    }

    /// Navigation link click: show the section its `href` fragment names.
    pub fn navigate(&self, href: &str) {
        self.view.show_section(section_from_href(href));
    }

    fn configure_gateway(&self) -> Result<(), DashboardError> {
        let base_url = self.config.base_url().ok_or(DashboardError::MissingBaseUrl)?;
        self.gateway.configure(base_url)
    }

    async fn fetch_initial(&self) -> Result<InitialData, DashboardError> {
        let (stats, orders, columns) = futures::try_join!(
            self.gateway.read(STATS_ENDPOINT, &[]),
            self.gateway.read(ORDERS_ENDPOINT, &[]),
            self.gateway.read(COLUMNS_ENDPOINT, &[])
        )?;
        Ok(InitialData {
            stats: decode_stats(stats)?,
            columns: decode_columns(columns)?,
            orders: decode_orders(orders)?,
        })
    }

    async fn fetch_refresh(&self) -> Result<RefreshData, DashboardError> {
        let (stats, orders) = futures::try_join!(
            self.gateway.read(STATS_ENDPOINT, &REFRESH_PARAMS),
            self.gateway.read(ORDERS_ENDPOINT, &REFRESH_PARAMS)
        )?;
        Ok(RefreshData {
            stats: decode_stats(stats)?,
            orders: decode_orders(orders)?,
        })
    }

    fn render_all(&self) {
        let state = self.state.borrow();
        self.view.render_summary(state.stats());
        self.view.render_table(state.columns(), state.orders());
    }
}

#[cfg(test)]
impl<G, S, H, P> DashboardController<G, S, H, P> {
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn state(&self) -> std::cell::Ref<'_, DashboardState> {
        self.state.borrow()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn shell(&self) -> &H {
        &self.shell
    }

    pub fn view(&self) -> &P {
        &self.view
    }
}
