//! The culture used when a caller does not pass one explicitly.

use std::{
    env, fmt,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::debug;

use crate::Culture;

/// Environment variables consulted for the host locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

type Selector = Arc<dyn Fn() -> Culture + Send + Sync>;

/// Supplies the default culture for formatting and parsing.
///
/// Without an override every call to [`current`](Self::current) asks the host
/// for its active locale, so changes to the process locale are picked up
/// immediately. Tests can pin a culture with [`set_override`](Self::set_override)
/// or [`scoped`](Self::scoped), or build a private provider and hand it to
/// [`Date::format_using`](crate::Date::format_using).
pub struct CultureProvider {
    selector: RwLock<Option<Selector>>,
}

static GLOBAL: CultureProvider = CultureProvider::new();

impl CultureProvider {
    /// Creates a provider that follows the host locale.
    pub const fn new() -> Self {
        Self {
            selector: RwLock::new(None),
        }
    }

    /// Creates a provider pinned to `culture`.
    pub fn fixed(culture: Culture) -> Self {
        let provider = Self::new();
        provider.set_override(culture);
        provider
    }

    /// The process-wide provider consulted by [`Date::format`](crate::Date::format),
    /// [`Date::parse`](crate::Date::parse) and `Display`.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Returns the culture to use right now.
    pub fn current(&self) -> Culture {
        // Clone out of the lock so a selector may itself consult a provider
        let selector = self
            .selector
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        selector.map_or_else(host_culture, |select| select())
    }

    /// `culture` when given, otherwise [`current`](Self::current).
    pub fn resolve(&self, culture: Option<&Culture>) -> Culture {
        culture.copied().unwrap_or_else(|| self.current())
    }

    /// Pins the provider to a fixed culture.
    pub fn set_override(&self, culture: Culture) {
        debug!(culture = %culture, "overriding current culture");
        self.replace(Some(Arc::new(move || culture)));
    }

    /// Routes every read through `selector`.
    pub fn set_selector<F>(&self, selector: F)
    where
        F: Fn() -> Culture + Send + Sync + 'static,
    {
        debug!("installing current culture selector");
        self.replace(Some(Arc::new(selector)));
    }

    /// Restores host locale lookup.
    pub fn reset(&self) {
        debug!("resetting current culture to host locale");
        self.replace(None);
    }

    /// Pins `culture` until the returned guard is dropped, then restores
    /// whatever was active before.
    #[must_use = "the override is undone when the guard is dropped"]
    pub fn scoped(&self, culture: Culture) -> CultureGuard<'_> {
        debug!(culture = %culture, "scoping current culture");
        let previous = self.replace(Some(Arc::new(move || culture)));
        CultureGuard {
            provider: self,
            previous,
        }
    }

    fn replace(&self, selector: Option<Selector>) -> Option<Selector> {
        let mut slot = self.selector.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, selector)
    }
}

impl Default for CultureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CultureProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overridden = self
            .selector
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        f.debug_struct("CultureProvider")
            .field("overridden", &overridden)
            .finish()
    }
}

/// Restores the previous culture selector on drop.
pub struct CultureGuard<'a> {
    provider: &'a CultureProvider,
    previous: Option<Selector>,
}

impl Drop for CultureGuard<'_> {
    fn drop(&mut self) {
        self.provider.replace(self.previous.take());
    }
}

impl fmt::Debug for CultureGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CultureGuard")
            .field("provider", self.provider)
            .finish_non_exhaustive()
    }
}

/// The host's active locale, read from the environment on every call.
///
/// The first non-empty variable of [`LOCALE_ENV_VARS`] wins. Encoding and
/// modifier suffixes (`de_DE.UTF-8@euro`) are ignored; `C`, `POSIX` and
/// unknown locales fall back to [`Culture::INVARIANT`].
pub fn host_culture() -> Culture {
    let Some(raw) = LOCALE_ENV_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
    else {
        return Culture::INVARIANT;
    };

    culture_for_locale(&raw)
}

fn culture_for_locale(raw: &str) -> Culture {
    let locale = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    if locale.eq_ignore_ascii_case("C") || locale.eq_ignore_ascii_case("POSIX") {
        return Culture::INVARIANT;
    }

    Culture::from_name(locale).unwrap_or_else(|_| {
        debug!(locale = %raw, "unrecognized host locale, falling back to invariant culture");
        Culture::INVARIANT
    })
}
