use std::fmt;

use colored::{Color, Colorize};

use crate::battery_info::BatteryInfo;

const CHARGING: char = '⇡';
const DISCHARGING: char = '⇣';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Colorful,
    Plain,
}

/// Terminal colors for each report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub health: Color,
    pub temperature: Color,
    pub cycles: Color,
    pub charge: Color,
    pub caption: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            health: Color::Blue,
            temperature: Color::Red,
            cycles: Color::Yellow,
            charge: Color::Cyan,
            caption: Color::BrightBlack,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Health,
    Temperature,
    Cycles,
    Charge,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Health,
        Metric::Temperature,
        Metric::Cycles,
        Metric::Charge,
    ];

    fn label(self) -> &'static str {
        match self {
            Metric::Health => "Raw Health",
            Metric::Temperature => "Temperature",
            Metric::Cycles => "Cycles count",
            Metric::Charge => "Charge info",
        }
    }

    fn caption(self) -> &'static str {
        match self {
            Metric::Health => "Raw battery health",
            Metric::Temperature => "Battery temperature",
            Metric::Cycles => "Cycles count",
            Metric::Charge => "Charge percent",
        }
    }

    fn color(self, palette: &Palette) -> Color {
        match self {
            Metric::Health => palette.health,
            Metric::Temperature => palette.temperature,
            Metric::Cycles => palette.cycles,
            Metric::Charge => palette.charge,
        }
    }
}

/// Renders a [`BatteryInfo`] as `label<TAB>value  caption` lines.
pub struct Report<'a> {
    info: &'a BatteryInfo,
    palette: Palette,
    style: Style,
}

impl<'a> Report<'a> {
    pub fn new(info: &'a BatteryInfo, palette: Palette, style: Style) -> Self {
        Self {
            info,
            palette,
            style,
        }
    }

    pub fn line(&self, metric: Metric) -> String {
        let value = self.value(metric);
        match self.style {
            Style::Plain => format!("{}\t{}  {}", metric.label(), value, metric.caption()),
            Style::Colorful => {
                let color = metric.color(&self.palette);
                format!(
                    "{}\t{}  {}",
                    metric.label().color(color),
                    value.as_str().color(color).bold(),
                    metric.caption().color(self.palette.caption).italic(),
                )
            }
        }
    }

    fn value(&self, metric: Metric) -> String {
        let info = self.info;
        match metric {
            Metric::Health => format!(
                "{} ({}/{} mAh)",
                percent(info.health_percent()),
                info.max_capacity,
                info.design_capacity
            ),
            Metric::Temperature => format!("{:.2} °C", info.temperature_celsius()),
            Metric::Cycles => info.cycle_count.to_string(),
            Metric::Charge => {
                let glyph = if info.is_charging { CHARGING } else { DISCHARGING };
                format!(
                    "{} ({}/{} mAh) {}",
                    percent(info.charge_percent()),
                    info.current_capacity,
                    info.max_capacity,
                    glyph
                )
            }
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for metric in Metric::ALL {
            writeln!(f, "{}", self.line(metric))?;
        }
        Ok(())
    }
}

fn percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(p) => format!("{p:.2}%"),
        None => "n/a".to_string(),
    }
}
