use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, CreateLimitRequest};
use crate::models::{validate_submission, CurrentSpending, Period, SpendingLimit};
use crate::session::CurrentUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    LimitEditor,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::LimitEditor]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::LimitEditor => write!(f, "Set Limit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// Result of a background API call, tagged with the screen mount that
/// spawned it so a late arrival for a dead mount can be dropped.
#[derive(Debug)]
pub(crate) struct StateUpdate {
    generation: u64,
    event: StateEvent,
}

#[derive(Debug)]
enum StateEvent {
    ActiveLimit(SpendingLimit),
    Spending(CurrentSpending),
    LimitCreated(Result<(), ApiError>),
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Latest known values from the two read services. A failed fetch leaves
    // them untouched, so the card renders defaults until something lands.
    pub(crate) limit: Option<SpendingLimit>,
    pub(crate) total_spending: Decimal,

    // Limit editor
    pub(crate) amount_input: String,
    pub(crate) selected_period: Option<Period>,
    pub(crate) submitting: bool,

    generation: u64,
    client: ApiClient,
    user: CurrentUser,
    updates: mpsc::UnboundedSender<StateUpdate>,
}

impl App {
    pub(crate) fn new(
        client: ApiClient,
        user: CurrentUser,
        updates: mpsc::UnboundedSender<StateUpdate>,
    ) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            limit: None,
            total_spending: Decimal::ZERO,

            amount_input: String::new(),
            selected_period: None,
            submitting: false,

            generation: 0,
            client,
            user,
            updates,
        }
    }

    pub(crate) fn user(&self) -> &CurrentUser {
        &self.user
    }

    /// Mount the dashboard: kick off the two reads as independent tasks.
    /// They complete in any order, neither aborts the other, and a failure
    /// is logged without touching the card (it keeps its latest values).
    pub(crate) fn open_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
        self.generation += 1;
        let generation = self.generation;

        let client = self.client.clone();
        let user_id = self.user.id().to_string();
        let tx = self.updates.clone();
        tokio::spawn(async move {
            match client.fetch_active_limit(&user_id).await {
                Ok(limit) => {
                    let _ = tx.send(StateUpdate {
                        generation,
                        event: StateEvent::ActiveLimit(limit),
                    });
                }
                Err(err) if err.is_status() => {
                    debug!(status = ?err.status(), "no active spending limit returned");
                }
                Err(err) => warn!(error = %err, "failed to fetch active spending limit"),
            }
        });

        let client = self.client.clone();
        let user_id = self.user.id().to_string();
        let tx = self.updates.clone();
        tokio::spawn(async move {
            match client.fetch_current_spending(&user_id).await {
                Ok(spending) => {
                    let _ = tx.send(StateUpdate {
                        generation,
                        event: StateEvent::Spending(spending),
                    });
                }
                Err(err) if err.is_status() => {
                    debug!(status = ?err.status(), "current-period spending unavailable");
                }
                Err(err) => warn!(error = %err, "failed to fetch current-period spending"),
            }
        });
    }

    /// Mount the limit editor with fresh fields.
    pub(crate) fn open_editor(&mut self) {
        self.screen = Screen::LimitEditor;
        self.generation += 1;
        self.amount_input.clear();
        self.selected_period = None;
        self.submitting = false;
    }

    /// Validate the editor fields and, if they pass, issue exactly one
    /// creation request. Validation failures surface immediately and no
    /// request is made; a failed request keeps the fields for correction.
    pub(crate) fn submit_limit(&mut self) {
        if self.submitting {
            return;
        }

        let (amount, period) = match validate_submission(&self.amount_input, self.selected_period)
        {
            Ok(parts) => parts,
            Err(err) => {
                self.set_status(err.to_string());
                return;
            }
        };

        self.submitting = true;
        let generation = self.generation;
        let request = CreateLimitRequest::new(amount, period);
        let client = self.client.clone();
        let user_id = self.user.id().to_string();
        let tx = self.updates.clone();
        tokio::spawn(async move {
            let result = client.create_limit(&user_id, &request).await;
            let _ = tx.send(StateUpdate {
                generation,
                event: StateEvent::LimitCreated(result),
            });
        });
    }

    /// Apply a background result, dropping it if it belongs to an earlier
    /// screen mount.
    pub(crate) fn apply_update(&mut self, update: StateUpdate) {
        if update.generation != self.generation {
            debug!("discarding response for a previous screen");
            return;
        }

        match update.event {
            StateEvent::ActiveLimit(limit) => self.limit = Some(limit),
            StateEvent::Spending(spending) => self.total_spending = spending.total_spending,
            StateEvent::LimitCreated(result) => {
                self.submitting = false;
                match result {
                    Ok(()) => {
                        self.open_dashboard();
                        self.set_status("Spending limit set successfully");
                    }
                    Err(err) => self.set_status(err.to_string()),
                }
            }
        }
    }

    /// Cycle the period selection; it starts unset and the first step lands
    /// on the first entry.
    pub(crate) fn cycle_period(&mut self, delta: i32) {
        let all = Period::all();
        self.selected_period = match self.selected_period {
            None => {
                if delta >= 0 {
                    all.first().copied()
                } else {
                    all.last().copied()
                }
            }
            Some(current) => {
                let idx = all.iter().position(|p| *p == current).unwrap_or(0) as i32;
                let len = all.len() as i32;
                let next = (idx + delta).rem_euclid(len) as usize;
                all.get(next).copied()
            }
        };
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal_macros::dec;

    use super::*;

    fn test_app() -> (App, mpsc::UnboundedReceiver<StateUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            ApiClient::new("http://127.0.0.1:9"),
            CurrentUser::new("user-1".into()),
            tx,
        );
        (app, rx)
    }

    #[test]
    fn test_invalid_amount_blocks_submission() {
        let (mut app, _rx) = test_app();
        app.open_editor();
        app.amount_input = "abc".into();
        app.selected_period = Some(Period::Daily);

        app.submit_limit();

        assert!(!app.submitting);
        assert_eq!(app.status_message, "Please enter a valid amount");
    }

    #[test]
    fn test_missing_period_blocks_submission() {
        let (mut app, _rx) = test_app();
        app.open_editor();
        app.amount_input = "50.00".into();

        app.submit_limit();

        assert!(!app.submitting);
        assert_eq!(app.status_message, "Please select a period");
    }

    #[tokio::test]
    async fn test_valid_submission_enters_submitting_state() {
        let (mut app, _rx) = test_app();
        app.open_editor();
        app.amount_input = "50.00".into();
        app.selected_period = Some(Period::Weekly);

        app.submit_limit();
        assert!(app.submitting);

        // the trigger is disabled while a request is in flight
        app.submit_limit();
        assert!(app.submitting);
    }

    #[test]
    fn test_stale_update_is_discarded() {
        let (mut app, _rx) = test_app();
        let stale = StateUpdate {
            generation: app.generation,
            event: StateEvent::Spending(CurrentSpending {
                total_spending: dec!(99),
            }),
        };
        app.open_editor(); // bumps the generation without spawning anything

        app.apply_update(stale);
        assert_eq!(app.total_spending, Decimal::ZERO);
    }

    #[test]
    fn test_current_update_is_applied() {
        let (mut app, _rx) = test_app();
        app.apply_update(StateUpdate {
            generation: app.generation,
            event: StateEvent::Spending(CurrentSpending {
                total_spending: dec!(42.50),
            }),
        });
        assert_eq!(app.total_spending, dec!(42.50));

        app.apply_update(StateUpdate {
            generation: app.generation,
            event: StateEvent::ActiveLimit(SpendingLimit {
                amount: dec!(200),
                period: Period::Monthly,
                start_date: None,
            }),
        });
        assert_eq!(app.limit.as_ref().unwrap().amount, dec!(200));
    }

    #[test]
    fn test_creation_failure_keeps_editor_fields() {
        let (mut app, _rx) = test_app();
        app.open_editor();
        app.amount_input = "50.00".into();
        app.selected_period = Some(Period::Weekly);
        app.submitting = true;

        app.apply_update(StateUpdate {
            generation: app.generation,
            event: StateEvent::LimitCreated(Err(ApiError::Request {
                status: reqwest::StatusCode::BAD_REQUEST,
                message: "Limit already exists".into(),
            })),
        });

        assert!(!app.submitting);
        assert_eq!(app.screen, Screen::LimitEditor);
        assert_eq!(app.status_message, "Limit already exists");
        assert_eq!(app.amount_input, "50.00");
        assert_eq!(app.selected_period, Some(Period::Weekly));
    }

    #[tokio::test]
    async fn test_creation_success_returns_to_dashboard() {
        let (mut app, _rx) = test_app();
        app.open_editor();
        app.submitting = true;

        app.apply_update(StateUpdate {
            generation: app.generation,
            event: StateEvent::LimitCreated(Ok(())),
        });

        assert!(!app.submitting);
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.status_message, "Spending limit set successfully");
    }

    #[test]
    fn test_cycle_period_starts_unset() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.selected_period, None);

        app.cycle_period(1);
        assert_eq!(app.selected_period, Some(Period::Daily));
        app.cycle_period(1);
        assert_eq!(app.selected_period, Some(Period::Weekly));
        app.cycle_period(1);
        assert_eq!(app.selected_period, Some(Period::Monthly));
        app.cycle_period(1);
        assert_eq!(app.selected_period, Some(Period::Daily));

        app.cycle_period(-1);
        assert_eq!(app.selected_period, Some(Period::Monthly));
    }
}
