//! The conversion/formatting pipeline registry
//!
//! A `Pipeline` owns two ordered factory lists and resolves each request
//! against them: user-registered factories in append order first, then the
//! built-in fallbacks. There is no ambient global registry; callers create
//! pipelines and pass them where needed, which keeps tests and embedders
//! isolated from each other.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tracing::debug;

use lineal_units::Length;

use crate::context::FormatContext;
use crate::convert::{AutoFitConverterFactory, ConverterFactory};
use crate::format::{
    AutoFormatterFactory, FlooredFormatter, FormatterFactory, ImperialFormatterFactory,
    LengthFormatter,
};

/// Formatting failed because no factory accepted the length.
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    #[error("no formatter accepted length {length}")]
    Exhausted { length: Length },
}

/// Thread-safe registry of conversion and formatting strategies.
///
/// Mutation takes the list lock briefly; resolution snapshots the list and
/// runs the factories outside the lock, so a slow factory never blocks
/// registration. A poisoned lock is recovered rather than propagated since
/// the lists are plain `Vec`s with no torn state to observe.
pub struct Pipeline {
    converters: Mutex<Vec<Arc<dyn ConverterFactory>>>,
    formatters: Mutex<Vec<Arc<dyn FormatterFactory>>>,
    built_in_converters: Vec<Arc<dyn ConverterFactory>>,
    built_in_formatters: Vec<Arc<dyn FormatterFactory>>,
    prefer_imperial: Arc<AtomicBool>,
}

impl Pipeline {
    /// A pipeline with the built-in fallbacks: the best-fit converter, the
    /// flag-gated imperial formatter, and the decimal formatter of last
    /// resort.
    pub fn new() -> Self {
        let prefer_imperial = Arc::new(AtomicBool::new(false));
        Pipeline {
            converters: Mutex::new(Vec::new()),
            formatters: Mutex::new(Vec::new()),
            built_in_converters: vec![Arc::new(AutoFitConverterFactory)],
            built_in_formatters: vec![
                Arc::new(ImperialFormatterFactory::new(prefer_imperial.clone())),
                Arc::new(AutoFormatterFactory),
            ],
            prefer_imperial,
        }
    }

    /// A pipeline without built-ins. Every request runs only against
    /// explicitly registered factories.
    pub fn empty() -> Self {
        Pipeline {
            converters: Mutex::new(Vec::new()),
            formatters: Mutex::new(Vec::new()),
            built_in_converters: Vec::new(),
            built_in_formatters: Vec::new(),
            prefer_imperial: Arc::new(AtomicBool::new(false)),
        }
    }

    // ========== Registration ==========

    /// Appends a converter factory. It outranks the built-ins and every
    /// factory registered after it.
    pub fn add_converter_factory(&self, factory: Arc<dyn ConverterFactory>) {
        let mut list = self.converters.lock().unwrap_or_else(PoisonError::into_inner);
        list.push(factory);
        debug!(converters = list.len(), "registered converter factory");
    }

    /// Removes a previously registered converter factory by handle
    /// identity. Unknown handles are ignored.
    pub fn remove_converter_factory(&self, factory: &Arc<dyn ConverterFactory>) {
        let mut list = self.converters.lock().unwrap_or_else(PoisonError::into_inner);
        list.retain(|registered| !Arc::ptr_eq(registered, factory));
        debug!(converters = list.len(), "removed converter factory");
    }

    /// Appends a formatter factory. It outranks the built-ins and every
    /// factory registered after it.
    pub fn add_formatter_factory(&self, factory: Arc<dyn FormatterFactory>) {
        let mut list = self.formatters.lock().unwrap_or_else(PoisonError::into_inner);
        list.push(factory);
        debug!(formatters = list.len(), "registered formatter factory");
    }

    /// Removes a previously registered formatter factory by handle
    /// identity. Unknown handles are ignored.
    pub fn remove_formatter_factory(&self, factory: &Arc<dyn FormatterFactory>) {
        let mut list = self.formatters.lock().unwrap_or_else(PoisonError::into_inner);
        list.retain(|registered| !Arc::ptr_eq(registered, factory));
        debug!(formatters = list.len(), "removed formatter factory");
    }

    // ========== Preference flag ==========

    /// Turns the built-in imperial multi-part formatter on or off.
    pub fn set_prefer_imperial(&self, prefer: bool) {
        self.prefer_imperial.store(prefer, Ordering::SeqCst);
    }

    pub fn prefer_imperial(&self) -> bool {
        self.prefer_imperial.load(Ordering::SeqCst)
    }

    // ========== Resolution ==========

    /// Runs the conversion chain: the first factory accepting the length
    /// converts it. When every factory declines the length passes through
    /// unchanged.
    pub fn convert(&self, length: &Length) -> Length {
        let user: Vec<_> = {
            let list = self.converters.lock().unwrap_or_else(PoisonError::into_inner);
            list.clone()
        };
        for factory in user.iter().chain(self.built_in_converters.iter()) {
            if let Some(converter) = factory.converter_for(length) {
                return converter.convert(length);
            }
        }
        debug!(%length, "no converter accepted, passing through");
        length.clone()
    }

    /// Runs the formatting chain: the first factory accepting the length
    /// formats it. When every factory declines the caller gets
    /// [`FormatError::Exhausted`].
    pub fn format(&self, length: &Length, ctx: &FormatContext) -> Result<String, FormatError> {
        let user: Vec<_> = {
            let list = self.formatters.lock().unwrap_or_else(PoisonError::into_inner);
            list.clone()
        };
        for factory in user.iter().chain(self.built_in_formatters.iter()) {
            if let Some(formatter) = factory.formatter_for(length, ctx) {
                return Ok(formatter.format(length, ctx));
            }
        }
        Err(FormatError::Exhausted { length: length.clone() })
    }

    /// Renders the whole-unit count directly, bypassing the strategy scan.
    pub fn format_floored(&self, length: &Length) -> String {
        FlooredFormatter.format(length, &FormatContext::default())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
