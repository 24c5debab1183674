/// One selectable row of the list view.
///
/// `payload` belongs to the caller. The engine carries it around and hands it
/// back through [`crate::Outcome`] but never looks inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    /// 1-based ordinal, reassigned on every successful load
    pub number: usize,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub badges: Vec<String>,
    pub payload: T,
}

impl<T> Entry<T> {
    pub fn new(title: impl Into<String>, payload: T) -> Self {
        Self {
            number: 0,
            title: title.into(),
            subtitle: String::new(),
            description: String::new(),
            badges: Vec::new(),
            payload,
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badges.push(badge.into());
        self
    }

    /// Text shown next to the title: description, then subtitle, then a placeholder.
    pub fn summary(&self) -> &str {
        if !self.description.is_empty() {
            &self.description
        } else if !self.subtitle.is_empty() {
            &self.subtitle
        } else {
            "(no description)"
        }
    }

    /// Text shown under the actions title: subtitle first, then description.
    pub fn target_detail(&self) -> &str {
        if self.subtitle.is_empty() {
            &self.description
        } else {
            &self.subtitle
        }
    }
}

/// Assign ordinals `1..=len` in sequence order.
pub fn renumber<T>(entries: &mut [Entry<T>]) {
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.number = idx + 1;
    }
}
