//! Order status watching.
//!
//! Status changes are fanned out over a `tokio::sync::broadcast` bus; each
//! SSE subscriber reconciles them against an explicit per-order state map
//! instead of comparison state captured in a closure. "Should alert" is a
//! pure function of (previous state, new state): the driver-arrived alert
//! fires exactly when a tracked order moves into `driver_arrived` from any
//! other state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::OrderStatus;

/// Broadcast payload published after every order status write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusEvent {
    pub order_id: Uuid,
    pub status: OrderStatus,
}

/// What a subscriber should do with one observed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    /// False when the order is not in this device's tracked set; such events
    /// are dropped without touching any state.
    pub tracked: bool,
    /// True exactly once per transition into `driver_arrived`.
    pub alert: bool,
}

/// Per-order status state machine for one subscriber: every tracked order is
/// either at its last known status or unknown (never seen).
#[derive(Debug, Default)]
pub struct StatusTracker {
    statuses: HashMap<Uuid, OrderStatus>,
}

impl StatusTracker {
    pub fn new(initial: impl IntoIterator<Item = (Uuid, OrderStatus)>) -> Self {
        Self {
            statuses: initial.into_iter().collect(),
        }
    }

    pub fn status_of(&self, order_id: Uuid) -> Option<OrderStatus> {
        self.statuses.get(&order_id).copied()
    }

    /// Reconciles one event. At most one reconciliation happens per received
    /// event; the caller owns the tracker, so there is no shared state to
    /// race on.
    pub fn observe(&mut self, order_id: Uuid, status: OrderStatus) -> Observation {
        let Some(previous) = self.statuses.get_mut(&order_id) else {
            return Observation {
                tracked: false,
                alert: false,
            };
        };
        let alert =
            status == OrderStatus::DriverArrived && *previous != OrderStatus::DriverArrived;
        *previous = status;
        Observation {
            tracked: true,
            alert,
        }
    }
}

/// The full-screen driver-arrived alert. A trigger activates it; only an
/// explicit dismissal deactivates it, which also cancels the repeating
/// audio/vibration side effects on the client.
///
/// The server only ships the `alert` flag in [`OrderStatusUpdate`]
/// payloads; this type is the model a client is expected to drive with
/// that flag, kept here under test next to the tracker that produces it.
///
/// [`OrderStatusUpdate`]: crate::dto::orders::OrderStatusUpdate
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    #[default]
    Idle,
    Active {
        order_id: Uuid,
    },
}

impl AlertState {
    /// Returns true when this trigger newly activated the alert. A later
    /// trigger for another order retargets an already-active alert without
    /// counting as a new activation.
    pub fn trigger(&mut self, order_id: Uuid) -> bool {
        let was_idle = matches!(self, AlertState::Idle);
        *self = AlertState::Active { order_id };
        was_idle
    }

    pub fn dismiss(&mut self) {
        *self = AlertState::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AlertState::Active { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_into_driver_arrived_alerts_exactly_once() {
        let order = Uuid::new_v4();
        let mut tracker = StatusTracker::new([(order, OrderStatus::Ready)]);

        let first = tracker.observe(order, OrderStatus::DriverArrived);
        assert!(first.tracked && first.alert);

        // A repeated push of the same status is not a new transition.
        let second = tracker.observe(order, OrderStatus::DriverArrived);
        assert!(second.tracked && !second.alert);
    }

    #[test]
    fn any_prior_status_can_transition_into_the_alert() {
        let order = Uuid::new_v4();
        let mut tracker = StatusTracker::new([(order, OrderStatus::Pending)]);
        assert!(tracker.observe(order, OrderStatus::DriverArrived).alert);
    }

    #[test]
    fn untracked_orders_are_ignored() {
        let mut tracker = StatusTracker::new([(Uuid::new_v4(), OrderStatus::Ready)]);
        let obs = tracker.observe(Uuid::new_v4(), OrderStatus::DriverArrived);
        assert!(!obs.tracked && !obs.alert);
    }

    #[test]
    fn non_alert_transitions_still_update_state() {
        let order = Uuid::new_v4();
        let mut tracker = StatusTracker::new([(order, OrderStatus::Pending)]);
        assert!(!tracker.observe(order, OrderStatus::Confirmed).alert);
        assert_eq!(tracker.status_of(order), Some(OrderStatus::Confirmed));
    }

    #[test]
    fn dismissed_alert_does_not_retrigger_until_another_transition() {
        let order = Uuid::new_v4();
        let mut tracker = StatusTracker::new([(order, OrderStatus::Ready)]);
        let mut alert = AlertState::default();

        let obs = tracker.observe(order, OrderStatus::DriverArrived);
        assert!(obs.alert && alert.trigger(order));
        alert.dismiss();
        assert!(!alert.is_active());

        // Same status pushed again: no transition, no re-activation.
        assert!(!tracker.observe(order, OrderStatus::DriverArrived).alert);

        // Ready -> driver_arrived again is a fresh transition and alerts.
        tracker.observe(order, OrderStatus::Ready);
        let again = tracker.observe(order, OrderStatus::DriverArrived);
        assert!(again.alert && alert.trigger(order));
    }

    #[test]
    fn second_trigger_while_active_is_not_a_new_activation() {
        let mut alert = AlertState::default();
        assert!(alert.trigger(Uuid::new_v4()));
        assert!(!alert.trigger(Uuid::new_v4()));
        assert!(alert.is_active());
    }
}
