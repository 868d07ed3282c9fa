//! JavaScript sandbox profile.
//!
//! The guard runs the submission inside an IIFE whose parameters shadow
//! `require`, `process`, `module`, `__dirname` and `__filename`, so references
//! to them inside the guarded scope resolve to `undefined` instead of the
//! CommonJS bindings. Shadowing via parameters rather than declarations keeps
//! the wrapper valid in the CommonJS module scope, where a top-level
//! `const require` would collide with the wrapper function's own parameter.
//! `console` is bound before the shadowing, so `console.log` keeps printing to
//! the piped stdout.

use super::LanguageProfile;
use crate::core_types::Language;

pub struct JavaScriptProfile;

impl LanguageProfile for JavaScriptProfile {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn interpreter(&self) -> &'static str {
        "node"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn wrap(&self, code: &str) -> String {
        format!(
            "\"use strict\";\n\
             (function (require, process, module, exports, __dirname, __filename) {{\n\
             try {{\n\
             {code}\n\
             }} catch (err) {{\n\
             console.error(err instanceof Error ? err.message : String(err));\n\
             }}\n\
             }})();\n"
        )
    }

    fn probe(&self, code: &str, expression: &str) -> String {
        format!(
            "{code}\n\
             try {{\n\
             const __result = ({expression});\n\
             console.log(JSON.stringify({{ success: true, result: typeof __result === \"undefined\" ? null : __result }}));\n\
             }} catch (err) {{\n\
             console.log(JSON.stringify({{ success: false, error: err instanceof Error ? err.message : String(err) }}));\n\
             }}\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_embeds_user_code_inside_guard() {
        let wrapped = JavaScriptProfile.wrap("console.log('hi');");
        assert!(wrapped.starts_with("\"use strict\";"));
        assert!(wrapped.contains("(function (require, process, module"));
        assert!(wrapped.contains("console.log('hi');"));
        assert!(wrapped.contains("catch (err)"));
    }

    #[test]
    fn test_probe_appends_expression_epilogue() {
        let probe = JavaScriptProfile.probe("function add(a, b) { return a + b; }", "add(2, 3)");
        assert!(probe.starts_with("function add(a, b)"));
        assert!(probe.contains("const __result = (add(2, 3));"));
        assert!(probe.contains("success: true"));
        assert!(probe.contains("success: false"));
    }
}
