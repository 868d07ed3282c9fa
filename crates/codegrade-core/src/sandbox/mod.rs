//! Source-level sandbox wrapping for untrusted submissions
//!
//! Each supported language provides a [`LanguageProfile`]: a pure transformer
//! from raw user code to a guarded program ready to be written to a temp file
//! and handed to the interpreter. The guard shadows the obvious escape hatches
//! (filesystem, process control, module loading), keeps the language's normal
//! print mechanism flowing to the piped stdout, and traps uncaught exceptions
//! into a diagnostic on stderr so a crash still yields a renderable result.
//!
//! This is a deterrent against accidental misuse, not an isolation boundary: a
//! determined adversary can escape in-process guards. Production deployments
//! are expected to pair this with OS-level isolation around the interpreter
//! process itself.

pub mod javascript;
pub mod python;

use crate::core_types::Language;

/// Per-language sandbox and probe strategy.
///
/// Implemented once per supported language; the dispatcher maps the language
/// enum onto one of these, so there is no open-ended reflection anywhere in
/// the pipeline.
pub trait LanguageProfile: Send + Sync {
    fn language(&self) -> Language;

    /// Default interpreter binary, resolved from `PATH` unless the deployment
    /// configuration overrides it.
    fn interpreter(&self) -> &'static str;

    /// Extension for the temp script file.
    fn file_extension(&self) -> &'static str;

    /// Transforms raw user code into a guarded program. Pure; no side effects.
    fn wrap(&self, code: &str) -> String;

    /// Builds a grading probe: the user's code followed by an epilogue that
    /// evaluates `expression` and prints a single JSON report line
    /// (`{"success": true, "result": ...}` or
    /// `{"success": false, "error": ...}`). The probe is raw program text and
    /// still goes through [`wrap`](Self::wrap) when executed.
    fn probe(&self, code: &str, expression: &str) -> String;
}

/// Fixed dispatch table from language to its profile.
pub fn profile_for(language: Language) -> &'static dyn LanguageProfile {
    match language {
        Language::JavaScript => &javascript::JavaScriptProfile,
        Language::Python => &python::PythonProfile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table_covers_every_language() {
        for language in [Language::JavaScript, Language::Python] {
            let profile = profile_for(language);
            assert_eq!(profile.language(), language);
            assert!(!profile.interpreter().is_empty());
            assert!(!profile.file_extension().is_empty());
        }
    }

    #[test]
    fn test_wrap_is_pure() {
        let profile = profile_for(Language::JavaScript);
        assert_eq!(profile.wrap("1 + 1"), profile.wrap("1 + 1"));
    }
}
