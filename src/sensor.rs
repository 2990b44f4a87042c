// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! External sensors read by the entity layer.
//!
//! IR commands are fire-and-forget, so the actual state of an appliance can
//! only be learned from a separate sensor (a smart plug measuring power, a
//! thermometer). The host owns those sensors; this module defines the
//! interface the crate consumes ([`SensorSource`]) and an in-memory
//! implementation ([`SensorHub`]).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::options::RemoteOptions;

/// State string of an external sensor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SensorState {
    /// `on`
    On,
    /// `off`
    Off,
    /// `unknown`
    Unknown,
    /// `unavailable`
    Unavailable,
    /// Any other value, e.g. a temperature reading.
    Value(String),
}

impl SensorState {
    /// Parses a host state string.
    #[must_use]
    pub fn parse(state: &str) -> Self {
        match state {
            "on" => Self::On,
            "off" => Self::Off,
            "unknown" => Self::Unknown,
            "unavailable" => Self::Unavailable,
            other => Self::Value(other.to_string()),
        }
    }

    /// Returns `Some(true)` for `on`, `Some(false)` for `off`, else `None`.
    #[must_use]
    pub fn as_power(&self) -> Option<bool> {
        match self {
            Self::On => Some(true),
            Self::Off => Some(false),
            _ => None,
        }
    }

    /// Returns the numeric reading, if the state is one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Value(v) => v.trim().parse().ok().filter(|n: &f64| n.is_finite()),
            _ => None,
        }
    }
}

impl fmt::Display for SensorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
            Self::Unknown => f.write_str("unknown"),
            Self::Unavailable => f.write_str("unavailable"),
            Self::Value(v) => f.write_str(v),
        }
    }
}

/// Unique identifier of a sensor subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Callback invoked with the new state of a sensor.
pub type SensorCallback = Arc<dyn Fn(&SensorState) + Send + Sync>;

/// Read access to the host's sensors.
pub trait SensorSource: Send + Sync {
    /// Returns the current state of a sensor, or `None` if it does not exist.
    fn state(&self, entity_id: &str) -> Option<SensorState>;

    /// Calls `callback` whenever the sensor's state changes.
    fn subscribe(&self, entity_id: &str, callback: SensorCallback) -> SubscriptionId;

    /// Removes a subscription. Returns `true` if it existed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Returns the appliance's power as reported by its power sensor.
///
/// `None` when no sensor is configured, the sensor is missing, or its state
/// is neither `on` nor `off`.
pub fn observed_power(source: &dyn SensorSource, options: &RemoteOptions) -> Option<bool> {
    let entity_id = options.power_sensor.as_deref()?;
    source.state(entity_id)?.as_power()
}

/// Returns the temperature reported by the configured temperature sensor.
///
/// Unknown, unavailable and non-numeric states yield `None`.
pub fn observed_temperature(source: &dyn SensorSource, options: &RemoteOptions) -> Option<f64> {
    let entity_id = options.temperature_sensor.as_deref()?;
    let state = source.state(entity_id)?;
    let value = state.as_number();
    if value.is_none() && matches!(state, SensorState::Value(_)) {
        tracing::warn!(sensor = entity_id, state = %state, "Unable to read temperature sensor");
    }
    value
}

/// Returns the humidity reported by the configured humidity sensor.
pub fn observed_humidity(source: &dyn SensorSource, options: &RemoteOptions) -> Option<f64> {
    let entity_id = options.humidity_sensor.as_deref()?;
    source.state(entity_id)?.as_number()
}

struct Subscription {
    entity_id: String,
    callback: SensorCallback,
}

/// In-memory [`SensorSource`].
///
/// Useful for hosts that push sensor states into the crate and for tests.
/// Callbacks run synchronously in [`SensorHub::set_state`] and only when
/// the state actually changes.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use switchbot_remote::sensor::{SensorHub, SensorSource, SensorState};
///
/// let hub = SensorHub::new();
/// hub.subscribe("binary_sensor.tv", Arc::new(|state| println!("tv is {state}")));
/// hub.set_state("binary_sensor.tv", "on");
/// assert_eq!(hub.state("binary_sensor.tv"), Some(SensorState::On));
/// ```
#[derive(Default)]
pub struct SensorHub {
    states: RwLock<HashMap<String, SensorState>>,
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
    next_id: AtomicU64,
}

impl SensorHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new state and notifies subscribers if it changed.
    pub fn set_state(&self, entity_id: &str, state: &str) {
        let state = SensorState::parse(state);
        let previous = self
            .states
            .write()
            .insert(entity_id.to_string(), state.clone());
        if previous.as_ref() == Some(&state) {
            return;
        }

        // Collect first so callbacks may subscribe or unsubscribe.
        let callbacks: Vec<SensorCallback> = self
            .subscriptions
            .read()
            .values()
            .filter(|s| s.entity_id == entity_id)
            .map(|s| Arc::clone(&s.callback))
            .collect();
        for callback in callbacks {
            callback(&state);
        }
    }

    /// Returns the number of active subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.read().len()
    }
}

impl SensorSource for SensorHub {
    fn state(&self, entity_id: &str) -> Option<SensorState> {
        self.states.read().get(entity_id).cloned()
    }

    fn subscribe(&self, entity_id: &str, callback: SensorCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscriptions.write().insert(
            id,
            Subscription {
                entity_id: entity_id.to_string(),
                callback,
            },
        );
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscriptions.write().remove(&id).is_some()
    }
}

impl fmt::Debug for SensorHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorHub")
            .field("states", &*self.states.read())
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn parse_states() {
        assert_eq!(SensorState::parse("on"), SensorState::On);
        assert_eq!(SensorState::parse("unavailable"), SensorState::Unavailable);
        assert_eq!(
            SensorState::parse("21.5"),
            SensorState::Value("21.5".to_string())
        );
        assert_eq!(SensorState::parse("21.5").as_number(), Some(21.5));
        assert_eq!(SensorState::parse("unknown").as_number(), None);
        assert_eq!(SensorState::parse("NaN").as_number(), None);
        assert_eq!(SensorState::parse("off").as_power(), Some(false));
        assert_eq!(SensorState::parse("standby").as_power(), None);
    }

    #[test]
    fn observed_power_requires_configured_sensor() {
        let hub = SensorHub::new();
        hub.set_state("switch.tv_plug", "on");

        assert_eq!(observed_power(&hub, &RemoteOptions::default()), None);

        let options = RemoteOptions {
            power_sensor: Some("switch.tv_plug".to_string()),
            ..RemoteOptions::default()
        };
        assert_eq!(observed_power(&hub, &options), Some(true));

        hub.set_state("switch.tv_plug", "unavailable");
        assert_eq!(observed_power(&hub, &options), None);
    }

    #[test]
    fn observed_temperature_and_humidity() {
        let hub = SensorHub::new();
        hub.set_state("sensor.temp", "23.4");
        hub.set_state("sensor.humidity", "unknown");
        let options = RemoteOptions {
            temperature_sensor: Some("sensor.temp".to_string()),
            humidity_sensor: Some("sensor.humidity".to_string()),
            ..RemoteOptions::default()
        };
        assert_eq!(observed_temperature(&hub, &options), Some(23.4));
        assert_eq!(observed_humidity(&hub, &options), None);

        hub.set_state("sensor.temp", "warm");
        assert_eq!(observed_temperature(&hub, &options), None);
    }

    #[test]
    fn subscribers_notified_on_change_only() {
        let hub = SensorHub::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = hub.subscribe(
            "binary_sensor.fan",
            Arc::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        hub.set_state("binary_sensor.fan", "on");
        hub.set_state("binary_sensor.fan", "on");
        hub.set_state("binary_sensor.other", "on");
        hub.set_state("binary_sensor.fan", "off");
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        hub.set_state("binary_sensor.fan", "on");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(hub.subscription_count(), 0);
    }
}
