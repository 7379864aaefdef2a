//! Imperative "go to path" used by the session store after login/logout.
//!
//! The browser implementation performs a full navigation; the next document
//! rehydrates the session from storage, so no router context is needed.

pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    leptos::logging::warn!("navigation to {path} failed");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// Records every navigation instead of performing it.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visits.borrow().last().cloned()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}
