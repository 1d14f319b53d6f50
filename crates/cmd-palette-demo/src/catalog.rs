//! The demo command catalog.
//!
//! Handlers append to a shared invocation log that the main screen renders,
//! so every palette interaction is visible immediately.

use cmd_palette::{Catalog, Command, HandlerError, HandlerOutcome};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Build the demo catalog.
///
/// `invoked` collects one entry per handler run; flipping `running` off
/// ends the demo.
pub fn build(invoked: Arc<Mutex<Vec<String>>>, running: Arc<AtomicBool>) -> Catalog {
    let record = |label: &'static str| {
        let invoked = invoked.clone();
        move || {
            if let Ok(mut entries) = invoked.lock() {
                entries.push(label.to_string());
            }
            Ok(HandlerOutcome::Close)
        }
    };

    let sticky = {
        let invoked = invoked.clone();
        move || {
            if let Ok(mut entries) = invoked.lock() {
                entries.push("toggled line numbers".to_string());
            }
            // Stays open so several toggles can be chained
            Ok(HandlerOutcome::KeepOpen)
        }
    };

    Catalog::new(vec![
        Command::new("git", "Git")
            .section("Version control")
            .submenu(),
        Command::new("git.commit", "Commit")
            .parent("git")
            .keywords("save snapshot")
            .hotkey("ctrl+g c")
            .on_invoke(record("git commit")),
        Command::new("git.push", "Push")
            .parent("git")
            .keywords("upload publish")
            .on_invoke(record("git push")),
        Command::new("git.pull", "Pull")
            .parent("git")
            .keywords("fetch update")
            .on_invoke(record("git pull")),
        Command::new("view", "View").section("Display").submenu(),
        Command::new("view.line-numbers", "Toggle line numbers")
            .parent("view")
            .on_invoke(sticky),
        Command::new("view.theme", "Switch theme")
            .parent("view")
            .hotkey("ctrl+t")
            .on_invoke(record("switched theme")),
        Command::new("net.sync", "Sync with server")
            .section("Network")
            .keywords("remote upload download")
            .on_invoke(|| Err(HandlerError::new("network unreachable"))),
        Command::new("quit", "Quit demo")
            .keywords("exit leave")
            .on_invoke(move || {
                running.store(false, Ordering::SeqCst);
                Ok(HandlerOutcome::Close)
            }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        let invoked = Arc::new(Mutex::new(Vec::new()));
        let running = Arc::new(AtomicBool::new(true));
        let catalog = build(invoked, running);

        assert!(catalog.issues().is_empty());
        let git = catalog.get(&"git".into()).unwrap();
        assert!(git.children);
        assert!(catalog.get(&"quit".into()).unwrap().has_handler());
    }
}
