//! Formatting strategies
//!
//! Formatters turn a length into display text. Like converters they are
//! resolved through factories: the pipeline offers the length to each
//! factory and uses the first formatter granted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashu_int::IBig;

use lineal_units::{ImperialLengthUnit, Length, UnitFamily};

use crate::context::{FormatContext, TextDirection};

/// Renders a length as text.
pub trait LengthFormatter: Send + Sync {
    fn format(&self, length: &Length, ctx: &FormatContext) -> String;
}

/// Decides whether a formatter applies to a given length.
pub trait FormatterFactory: Send + Sync {
    fn formatter_for(&self, length: &Length, ctx: &FormatContext)
        -> Option<Arc<dyn LengthFormatter>>;
}

/// Renders the whole-unit count and the unit symbol, fraction discarded.
/// `12.36 m` renders as `12m`, `-12.36 m` as `-12m`, and a zero distance
/// prints the zero of whatever unit the length carries, e.g. `0Gm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlooredFormatter;

impl LengthFormatter for FlooredFormatter {
    fn format(&self, length: &Length, ctx: &FormatContext) -> String {
        format!(
            "{}{}{}",
            length.measure_floored(),
            ctx.separator(),
            length.unit().symbol(),
        )
    }
}

/// Renders the full decimal measure and the unit symbol, e.g.
/// `12.360000000m`. The terminal fallback formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoFormatter;

impl LengthFormatter for AutoFormatter {
    fn format(&self, length: &Length, ctx: &FormatContext) -> String {
        format!("{}{}{}", length.measure_decimal(), ctx.separator(), length.unit().symbol())
    }
}

/// Factory for [`AutoFormatter`]. Never declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoFormatterFactory;

impl FormatterFactory for AutoFormatterFactory {
    fn formatter_for(
        &self,
        _length: &Length,
        _ctx: &FormatContext,
    ) -> Option<Arc<dyn LengthFormatter>> {
        Some(Arc::new(AutoFormatter))
    }
}

/// Renders an imperial length as a multi-part sequence, e.g.
/// `4mi 3yd 2ft 1in`, decomposing greedily from the largest selected unit
/// down. Zero parts are skipped; a zero distance falls back to the zero of
/// the smallest selected unit. Right-to-left contexts reverse the finished
/// part order.
#[derive(Debug, Clone)]
pub struct ImperialFormatter {
    miles: bool,
    yards: bool,
    feet: bool,
    inches: bool,
    part_separator: Option<String>,
}

impl ImperialFormatter {
    pub fn new(miles: bool, yards: bool, feet: bool, inches: bool) -> Self {
        ImperialFormatter { miles, yards, feet, inches, part_separator: None }
    }

    /// All four parts enabled.
    pub fn full() -> Self {
        Self::new(true, true, true, true)
    }

    /// Overrides the context's part separator.
    pub fn with_part_separator(mut self, part_separator: impl Into<String>) -> Self {
        self.part_separator = Some(part_separator.into());
        self
    }

    fn selected_units(&self) -> Vec<ImperialLengthUnit> {
        let flagged = [
            (self.miles, ImperialLengthUnit::Mile),
            (self.yards, ImperialLengthUnit::Yard),
            (self.feet, ImperialLengthUnit::Foot),
            (self.inches, ImperialLengthUnit::Inch),
        ];
        let selected: Vec<_> = flagged
            .into_iter()
            .filter_map(|(enabled, unit)| enabled.then_some(unit))
            .collect();
        if selected.is_empty() {
            // An all-off selection has nothing to render with; treat it
            // as the full set.
            vec![
                ImperialLengthUnit::Mile,
                ImperialLengthUnit::Yard,
                ImperialLengthUnit::Foot,
                ImperialLengthUnit::Inch,
            ]
        } else {
            selected
        }
    }
}

impl Default for ImperialFormatter {
    fn default() -> Self {
        Self::full()
    }
}

impl LengthFormatter for ImperialFormatter {
    fn format(&self, length: &Length, ctx: &FormatContext) -> String {
        let negative = length.distance().is_negative();
        let mut remainder = length.distance().abs().total_nanometers();
        let selected = self.selected_units();

        let mut parts = Vec::new();
        for unit in &selected {
            let nanos_per_unit = unit.nanos_per_unit();
            let count = &remainder / &nanos_per_unit;
            remainder = remainder - &count * &nanos_per_unit;
            if count != IBig::ZERO {
                parts.push(format!("{count}{}{}", ctx.separator(), unit.symbol()));
            }
        }
        if parts.is_empty() {
            // Nothing above the smallest selected unit, print its zero.
            if let Some(unit) = selected.last() {
                parts.push(format!("0{}{}", ctx.separator(), unit.symbol()));
            }
        }
        if negative {
            if let Some(first) = parts.first_mut() {
                first.insert(0, '-');
            }
        }
        if ctx.direction() == TextDirection::RightToLeft {
            parts.reverse();
        }

        let separator = self.part_separator.as_deref().unwrap_or(ctx.part_separator());
        parts.join(separator)
    }
}

/// Factory for [`ImperialFormatter`]. Grants the formatter only when the
/// shared preference flag is up and the length is already in an imperial
/// unit; declines otherwise.
#[derive(Debug, Clone)]
pub struct ImperialFormatterFactory {
    enabled: Arc<AtomicBool>,
}

impl ImperialFormatterFactory {
    pub fn new(enabled: Arc<AtomicBool>) -> Self {
        ImperialFormatterFactory { enabled }
    }
}

impl FormatterFactory for ImperialFormatterFactory {
    fn formatter_for(
        &self,
        length: &Length,
        _ctx: &FormatContext,
    ) -> Option<Arc<dyn LengthFormatter>> {
        if self.enabled.load(Ordering::SeqCst) && length.unit().is_imperial() {
            Some(Arc::new(ImperialFormatter::full()))
        } else {
            None
        }
    }
}
