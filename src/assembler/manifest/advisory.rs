//! Non-fatal advisories raised while inspecting the host descriptor.

use super::is_truthy;
use serde_json::Value;

const WELCOME_PAGE_PACKAGE: &str = "ember-welcome-page";

/// Shown when the host still depends on the development-only welcome page.
pub const WELCOME_PAGE_ADVISORY: &str = "\"ember-welcome-page\" was detected in your devDependencies!

Please note that this addon only works in development environment
and will not render in production mode. It is safe to uninstall
this addon once you removed the {{welcome-page}} template tag.";

/// Receives advisory text blocks.
pub trait AdvisorySink {
    fn advise(&self, message: &str);
}

/// Routes advisories to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAdvisorySink;

impl AdvisorySink for LogAdvisorySink {
    fn advise(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Inspects the host descriptor and reports advisories to `sink`.
///
/// Returns how many advisories were emitted. Never fails.
pub fn check_advisories(host: &Value, sink: &dyn AdvisorySink) -> usize {
    let has_welcome_page = host
        .get("devDependencies")
        .and_then(|deps| deps.get(WELCOME_PAGE_PACKAGE))
        .is_some_and(is_truthy);

    if has_welcome_page {
        sink.advise(WELCOME_PAGE_ADVISORY);
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl AdvisorySink for Recorder {
        fn advise(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn welcome_page_dependency_emits_one_advisory() {
        let sink = Recorder::default();
        let host = json!({ "devDependencies": { "ember-welcome-page": "^4.0.0" } });
        assert_eq!(check_advisories(&host, &sink), 1);
        assert_eq!(sink.0.borrow().as_slice(), [WELCOME_PAGE_ADVISORY]);
    }

    #[test]
    fn no_dependency_is_silent() {
        let sink = Recorder::default();
        assert_eq!(check_advisories(&json!({ "name": "app" }), &sink), 0);
        assert_eq!(
            check_advisories(&json!({ "dependencies": { "ember-welcome-page": "1" } }), &sink),
            0
        );
        assert!(sink.0.borrow().is_empty());
    }
}
