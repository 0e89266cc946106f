use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Battery readings pulled out of an `AppleSmartBattery` registry dump.
///
/// Capacities are in mAh. Any key missing from the dump leaves its field at
/// zero (or `false`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatteryInfo {
    /// Hundredths of a degree Celsius, as reported by the gas gauge.
    pub temperature: i64,
    pub cycle_count: u32,
    pub design_capacity: u32,
    pub max_capacity: u32,
    pub current_capacity: u32,
    pub is_charging: bool,
}

impl BatteryInfo {
    /// Parses the full output of `ioreg -r -c AppleSmartBattery`.
    ///
    /// The node header, the opening brace and the closing brace are skipped.
    /// Output too short to hold a node means there is no battery.
    pub fn from_ioreg(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.trim().lines().collect();
        if lines.len() < 3 {
            return Err(Error::NoBattery);
        }
        Ok(Self::from_properties(
            lines[2..lines.len() - 1].iter().copied(),
        ))
    }

    /// Builds a record from `"Key" = value` lines, ignoring unknown keys.
    pub fn from_properties<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut info = Self::default();
        for line in lines {
            match line.split_once('=') {
                Some((key, value)) => info.apply(key.trim().trim_matches('"'), value.trim()),
                None => debug!(line = line.trim(), "skipping line without '='"),
            }
        }
        info
    }

    /// Assigns a single registry property. Unrecognized keys are a no-op.
    pub fn apply(&mut self, key: &str, value: &str) {
        match key {
            "IsCharging" => self.is_charging = value.trim_matches('"') == "Yes",
            "AppleRawMaxCapacity" => self.max_capacity = parse_or_zero(key, value),
            "AppleRawCurrentCapacity" => self.current_capacity = parse_or_zero(key, value),
            "DesignCapacity" => self.design_capacity = parse_or_zero(key, value),
            "CycleCount" => self.cycle_count = parse_or_zero(key, value),
            "Temperature" => self.temperature = parse_or_zero(key, value),
            _ => {}
        }
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.temperature as f64 / 100.0
    }

    /// Measured maximum capacity as a percentage of the design capacity.
    pub fn health_percent(&self) -> Option<f64> {
        percent(self.max_capacity, self.design_capacity)
    }

    /// Current charge as a percentage of the measured maximum capacity.
    pub fn charge_percent(&self) -> Option<f64> {
        percent(self.current_capacity, self.max_capacity)
    }
}

fn percent(part: u32, whole: u32) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(part as f64 / whole as f64 * 100.0)
}

fn parse_or_zero<T>(key: &str, value: &str) -> T
where
    T: FromStr + Default,
{
    value.parse().unwrap_or_else(|_| {
        warn!(key, value, "unparseable battery property, using 0");
        T::default()
    })
}
