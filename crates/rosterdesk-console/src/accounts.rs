/*
[INPUT]:  Role-filtered account listings and SID mutation acknowledgements
[OUTPUT]: Display rows, SID cache, and notifications for the accounts screen
[POS]:    Accounts screen state machine (load / edit / unmap transitions)
[UPDATE]: When the table columns or the SID reconciliation rules change
*/

use std::collections::HashMap;

use rosterdesk_adapter::{AccountRecord, ConsoleClient, Role};
use tracing::{debug, warn};

use crate::notify::{Notification, NotificationSlot, failure_text};

/// Rendered in the SID column for a student without a mapping.
pub const NULL_SID: &str = "<NULL>";
/// Rendered in the SID column for non-student roles.
pub const UNMAPPABLE: &str = "UnMappable";

/// One cooked table row. The SID is deliberately absent here; it is always
/// resolved through the cache so a failed save reverts for free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub account_id: i64,
    pub user_id: i64,
    pub role: Role,
    pub name: String,
    pub email: String,
    /// `createdAt` truncated to the calendar day.
    pub created_day: String,
}

impl AccountRow {
    fn from_record(record: &AccountRecord) -> Self {
        Self {
            account_id: record.account_id,
            user_id: record.user_id,
            role: record.role,
            name: record.name.clone(),
            email: record.email.clone(),
            created_day: record.created_at.date_naive().to_string(),
        }
    }
}

/// SID column content for a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidCell {
    /// Student row: editable, holding the last server-confirmed value.
    Editable(Option<String>),
    /// Any other role: fixed marker, no edit control.
    Unmappable,
}

impl SidCell {
    pub fn display(&self) -> &str {
        match self {
            SidCell::Editable(Some(sid)) => sid,
            SidCell::Editable(None) => NULL_SID,
            SidCell::Unmappable => UNMAPPABLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Accounts table screen.
///
/// The SID cache mirrors server state and is only written on confirmed
/// outcomes: a successful save patches it in place, a successful unmap arms
/// `pending_refresh` so the runtime re-fetches the whole table exactly once.
#[derive(Debug)]
pub struct AccountsScreen {
    role_filter: Vec<Role>,
    rows: Vec<AccountRow>,
    sid_map: HashMap<i64, Option<String>>,
    load: LoadState,
    loaded_once: bool,
    pending_refresh: bool,
    cursor: usize,
    pub notifications: NotificationSlot,
}

impl AccountsScreen {
    pub fn new(role_filter: Vec<Role>) -> Self {
        Self {
            role_filter,
            rows: Vec::new(),
            sid_map: HashMap::new(),
            load: LoadState::Idle,
            loaded_once: false,
            pending_refresh: false,
            cursor: 0,
            notifications: NotificationSlot::default(),
        }
    }

    pub fn rows(&self) -> &[AccountRow] {
        &self.rows
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_row(&self) -> Option<&AccountRow> {
        self.rows.get(self.cursor)
    }

    pub fn next_row(&mut self) {
        if !self.rows.is_empty() && self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn previous_row(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Last server-confirmed SID for a user.
    pub fn cached_sid(&self, user_id: i64) -> Option<&str> {
        self.sid_map.get(&user_id).and_then(|sid| sid.as_deref())
    }

    /// SID column content for a row, resolved through the cache.
    pub fn sid_cell(&self, row: &AccountRow) -> SidCell {
        match row.role {
            Role::Student => {
                SidCell::Editable(self.sid_map.get(&row.user_id).cloned().flatten())
            }
            _ => SidCell::Unmappable,
        }
    }

    /// Marks the table as in flight so the next draw shows the blocking
    /// loading indicator.
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Fetches the table and applies the outcome.
    ///
    /// On failure the previous rows are kept; only the very first load leaves
    /// the table empty.
    pub async fn finish_load(&mut self, client: &ConsoleClient) {
        match client.list_accounts(&self.role_filter).await {
            Ok(records) => {
                self.sid_map = records
                    .iter()
                    .map(|record| (record.user_id, record.sid.clone()))
                    .collect();
                self.rows = records.iter().map(AccountRow::from_record).collect();
                if self.cursor >= self.rows.len() {
                    self.cursor = 0;
                }
                self.loaded_once = true;
                self.load = LoadState::Ready;
                self.notifications.set(Notification::success("Data loaded."));
                debug!(rows = self.rows.len(), "accounts table loaded");
            }
            Err(err) => {
                warn!(error = %err, "accounts fetch failed");
                self.load = if self.loaded_once {
                    LoadState::Ready
                } else {
                    LoadState::Failed
                };
                self.notifications.set(Notification::error(failure_text(&err)));
            }
        }
    }

    /// Full reload: loading indicator, fetch, apply.
    pub async fn reload(&mut self, client: &ConsoleClient) {
        self.begin_load();
        self.finish_load(client).await;
    }

    /// SID edit transition, triggered when the inline editor is submitted.
    ///
    /// An empty value fails client-side without contacting the server. On a
    /// confirmed save the cache is patched in place; on failure the cache is
    /// untouched, so the displayed value reverts to the last known-good SID.
    pub async fn save_sid(&mut self, client: &ConsoleClient, user_id: i64, value: &str) {
        self.notifications.set(Notification::info("Saving ..."));

        if value.is_empty() {
            self.notifications
                .set(Notification::error("Error: Empty new SID"));
            return;
        }

        match client.map_sid(value, user_id).await {
            Ok(ack) => {
                self.sid_map.insert(user_id, Some(value.to_string()));
                self.notifications.set(Notification::success(format!(
                    "Success {}: {}",
                    ack.status, ack.status_text
                )));
            }
            Err(err) => {
                warn!(user_id, error = %err, "SID save failed");
                self.notifications.set(Notification::error(failure_text(&err)));
            }
        }
    }

    /// Unmap transition for the row under the cursor.
    ///
    /// A success does not patch local state; it arms the refresh flag and the
    /// runtime re-fetches the whole table once.
    pub async fn unmap_selected(&mut self, client: &ConsoleClient) {
        let Some(row) = self.rows.get(self.cursor) else {
            return;
        };
        if row.role != Role::Student {
            self.notifications
                .set(Notification::error("Error: Account has no SID mapping"));
            return;
        }
        let Some(sid) = self.cached_sid(row.user_id).map(str::to_string) else {
            self.notifications
                .set(Notification::error("Error: No SID mapped"));
            return;
        };

        self.notifications.set(Notification::info("UnMapping ..."));
        match client.unmap_sid(&sid).await {
            Ok(_) => {
                self.notifications.set(Notification::success("Success."));
                self.pending_refresh = true;
            }
            Err(err) => {
                warn!(sid, error = %err, "unmap failed");
                self.notifications.set(Notification::error(failure_text(&err)));
            }
        }
    }

    /// True exactly once after a successful unmap; the caller must follow up
    /// with a reload.
    pub fn take_pending_refresh(&mut self) -> bool {
        std::mem::take(&mut self.pending_refresh)
    }
}
