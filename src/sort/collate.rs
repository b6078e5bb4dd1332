use std::cmp::Ordering;
use std::fmt;

use tracing::warn;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator as IcuCollator, CollatorBorrowed, CollatorPreferences};
use icu_locale_core::Locale;

use crate::error::{PlaylistError, Result};

/// Locale-aware string comparison supplied by the host platform.
///
/// Implementations must be a total order, since they drive a sort. Plain
/// closures work too:
///
/// ```
/// use seamless::Collator;
///
/// let reversed = |a: &str, b: &str| b.cmp(a);
/// assert_eq!(reversed.compare("a", "b"), std::cmp::Ordering::Greater);
/// ```
pub trait Collator: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Unicode collation (UCA/CLDR) at default (tertiary) strength.
///
/// Accented letters file next to their base letter (`ć` beside `c`), case only
/// breaks ties, and digits are compared as characters, so `file10` sorts
/// before `file2`. This is the default collator of a [`crate::Playlist`].
pub struct UnicodeCollator {
    inner: CollatorBorrowed<'static>,
}

impl UnicodeCollator {
    /// Root collation order, shared by most Latin-script locales.
    pub fn root() -> Result<Self> {
        let inner =
            IcuCollator::try_new(CollatorPreferences::default(), CollatorOptions::default())
                .map_err(|e| PlaylistError::UnsupportedLocale(format!("root: {e}")))?;
        Ok(Self { inner })
    }

    /// Collation tailored to a BCP 47 tag such as `"pl"` or `"sv-SE"`.
    pub fn for_locale(tag: &str) -> Result<Self> {
        let locale = Locale::try_from_str(tag.trim())
            .map_err(|e| PlaylistError::UnsupportedLocale(format!("{tag}: {e}")))?;
        let inner =
            IcuCollator::try_new(CollatorPreferences::from(&locale), CollatorOptions::default())
                .map_err(|e| PlaylistError::UnsupportedLocale(format!("{tag}: {e}")))?;
        Ok(Self { inner })
    }
}

impl fmt::Debug for UnicodeCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeCollator").finish_non_exhaustive()
    }
}

impl Collator for UnicodeCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.inner.compare(a, b)
    }
}

/// Build the collator for an optional locale tag, falling back to root
/// collation and then to [`CaseFoldCollator`] when collation data is missing.
pub fn default_collator(locale: Option<&str>) -> Box<dyn Collator> {
    if let Some(tag) = locale {
        match UnicodeCollator::for_locale(tag) {
            Ok(c) => return Box::new(c),
            Err(e) => warn!("{e}, using root collation"),
        }
    }
    match UnicodeCollator::root() {
        Ok(c) => Box::new(c),
        Err(e) => {
            warn!("{e}, falling back to case-folded code point order");
            Box::new(CaseFoldCollator)
        }
    }
}

/// Dependency-free fallback. This is NOT locale collation: it compares code
/// points after lowercasing, so accented letters sort after `z`. Ties are
/// broken on case.
#[derive(Debug, Default, Copy, Clone)]
pub struct CaseFoldCollator;

impl Collator for CaseFoldCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let folded = a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase));
        folded.then_with(|| a.cmp(b))
    }
}
