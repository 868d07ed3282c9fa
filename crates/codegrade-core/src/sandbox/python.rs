//! Python sandbox profile.
//!
//! The guard rebinds the dangerous builtins (`open`, `exec`, `eval`) and
//! installs an `__import__` deny-list before any user code runs, then executes
//! the submission inside a `try:` block whose handler prints the exception
//! message to stderr. `try:` does not introduce a new scope in Python, so user
//! definitions stay at module level and remain visible to a grading epilogue
//! appended after the code. User lines are re-indented under the `try:` with a
//! uniform prefix, which preserves their relative indentation.

use super::LanguageProfile;
use crate::core_types::Language;

pub struct PythonProfile;

/// Modules whose import is refused inside the guarded scope. Matching is on
/// the root of the dotted path.
const BLOCKED_MODULES: &str =
    "(\"os\", \"subprocess\", \"socket\", \"shutil\", \"pathlib\", \"ctypes\", \"importlib\", \"urllib\", \"http\")";

fn indent(code: &str) -> String {
    if code.trim().is_empty() {
        return "    pass".to_string();
    }
    code.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl LanguageProfile for PythonProfile {
    fn language(&self) -> Language {
        Language::Python
    }

    fn interpreter(&self) -> &'static str {
        "python3"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn wrap(&self, code: &str) -> String {
        format!(
            "import sys as _sys\n\
             import builtins as _builtins\n\
             \n\
             _BLOCKED_MODULES = {BLOCKED_MODULES}\n\
             _real_import = _builtins.__import__\n\
             \n\
             def _guarded_import(name, *args, **kwargs):\n\
             \x20   if name.split(\".\")[0] in _BLOCKED_MODULES:\n\
             \x20       raise ImportError(\"import of '\" + name + \"' is not permitted in the sandbox\")\n\
             \x20   return _real_import(name, *args, **kwargs)\n\
             \n\
             def _denied(*_args, **_kwargs):\n\
             \x20   raise RuntimeError(\"operation not permitted in the sandbox\")\n\
             \n\
             _builtins.__import__ = _guarded_import\n\
             _builtins.open = _denied\n\
             _builtins.exec = _denied\n\
             _builtins.eval = _denied\n\
             \n\
             try:\n\
             {body}\n\
             except Exception as _exc:\n\
             \x20   print(str(_exc), file=_sys.stderr)\n",
            body = indent(code),
        )
    }

    fn probe(&self, code: &str, expression: &str) -> String {
        format!(
            "{code}\n\
             import json as _json\n\
             try:\n\
             \x20   __result = ({expression})\n\
             \x20   print(_json.dumps({{\"success\": True, \"result\": __result}}))\n\
             except Exception as _exc:\n\
             \x20   print(_json.dumps({{\"success\": False, \"error\": str(_exc)}}))\n"
        )
    }
}
