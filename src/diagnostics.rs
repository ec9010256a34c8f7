use std::sync::Mutex;

static NOTES: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Start collecting notes. Until this is called, `note()` discards
/// everything so library helpers stay silent.
pub fn capture() {
    if let Ok(mut guard) = NOTES.lock() {
        *guard = Some(Vec::new());
    }
}

/// Stop collecting and return all notes recorded since `capture()`.
pub fn drain() -> Vec<String> {
    NOTES
        .lock()
        .ok()
        .and_then(|mut guard| guard.take())
        .unwrap_or_default()
}

/// Record a non-fatal note if capture is active.
pub fn note(msg: String) {
    if let Ok(mut guard) = NOTES.lock() {
        if let Some(buf) = guard.as_mut() {
            buf.push(msg);
        }
    }
}

/// Works like `format!` but records the message as a diagnostic note.
#[macro_export]
macro_rules! diag_note {
    ($($arg:tt)*) => {
        $crate::diagnostics::note(format!($($arg)*))
    };
}
