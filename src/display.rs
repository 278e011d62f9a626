use crate::display_info;
use std::sync::{Arc, RwLock};

/// Shared text region holding the last rendered poll result.
#[derive(Clone, Default)]
pub struct ResultBoard {
    text: Arc<RwLock<Option<String>>>,
}

impl ResultBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites whatever was shown before
    pub fn show(&self, text: String) {
        display_info!("{}", text);
        match self.text.write() {
            Ok(mut current) => *current = Some(text),
            Err(poisoned) => *poisoned.into_inner() = Some(text),
        }
    }

    pub fn current(&self) -> Option<String> {
        match self.text.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
