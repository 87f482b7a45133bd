//! Word normalization: turn a raw identifier or tag token into dictionary words.
//!
//! Two policies exist, selected by [`NormalizeMode`]:
//! - **Strict** keeps only the leading run of ASCII letters (`[[:alpha:]]+`), so numeric suffixes and everything after
//!   them are dropped: `uint8` and `uint16` both become `uint`. With [`NormalizePolicy::fold_case`] set (the default)
//!   the run is also ASCII-lowercased.
//! - **Verbatim** keeps the token exactly as written.
//!
//! ## Notes
//! - Normalization never fails; it yields zero or one word.
//! - Strict output is always non-empty ASCII-alphabetic.
//!
//! ## Examples
//! ```rust
//! use gowords_core::words::{NormalizePolicy, normalize};
//!
//! assert_eq!(normalize("uint16", NormalizePolicy::default()), vec!["uint"]);
//! assert_eq!(normalize("MaxSize", NormalizePolicy::default()), vec!["maxsize"]);
//! assert!(normalize("386", NormalizePolicy::default()).is_empty());
//! assert_eq!(normalize("go1.21", NormalizePolicy::verbatim()), vec!["go1.21"]);
//! ```

use std::borrow::Cow;

/// Which normalization policy to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// Leading ASCII-alphabetic run only.
    #[default]
    Strict,
    /// Raw token, unchanged.
    Verbatim,
}

/// Normalization settings.
///
/// ## Notes
/// - `fold_case` only applies in [`NormalizeMode::Strict`]; verbatim tokens are never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizePolicy {
    pub mode: NormalizeMode,
    pub fold_case: bool,
}

impl Default for NormalizePolicy {
    fn default() -> Self {
        Self::strict()
    }
}

impl NormalizePolicy {
    /// Strict mode with case folding.
    pub const fn strict() -> Self {
        Self {
            mode: NormalizeMode::Strict,
            fold_case: true,
        }
    }

    /// Verbatim mode.
    pub const fn verbatim() -> Self {
        Self {
            mode: NormalizeMode::Verbatim,
            fold_case: false,
        }
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: NormalizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable case folding.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }
}

/// Return the leading maximal run of ASCII letters in `raw` (possibly empty).
pub fn leading_alpha_run(raw: &str) -> &str {
    let end = raw.bytes().position(|b| !b.is_ascii_alphabetic()).unwrap_or(raw.len());
    // ASCII bytes are always char boundaries.
    &raw[..end]
}

/// Normalize a token into at most one word, borrowing from `raw` when no rewrite is needed.
///
/// ## Parameters
/// - `raw`: identifier-like or tag-like token.
/// - `policy`: normalization settings.
///
/// ## Returns
/// - `Some(word)` for the single dictionary word, `None` when the policy yields nothing.
pub fn normalize_one(raw: &str, policy: NormalizePolicy) -> Option<Cow<'_, str>> {
    match policy.mode {
        NormalizeMode::Verbatim => (!raw.is_empty()).then_some(Cow::Borrowed(raw)),
        NormalizeMode::Strict => {
            let run = leading_alpha_run(raw);
            if run.is_empty() {
                None
            } else if policy.fold_case && run.bytes().any(|b| b.is_ascii_uppercase()) {
                Some(Cow::Owned(run.to_ascii_lowercase()))
            } else {
                Some(Cow::Borrowed(run))
            }
        }
    }
}

/// Normalize a token into its dictionary words.
///
/// This is the owned, sequence-shaped form of [`normalize_one`].
pub fn normalize(raw: &str, policy: NormalizePolicy) -> Vec<String> {
    normalize_one(raw, policy).map(Cow::into_owned).into_iter().collect()
}
