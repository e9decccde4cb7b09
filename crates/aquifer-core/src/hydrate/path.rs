///
/// Path
///
/// Chain of ancestor nested-property names, maintained as a reusable
/// prefix buffer: `push("Customer")` extends the prefix to `Customer.`,
/// a second push to `Customer.Address.`, and `pop` truncates back.
/// The prefix is empty at the root.
///

#[derive(Clone, Debug, Default)]
pub struct Path {
    prefix: String,
    segment_lens: Vec<usize>,
}

impl Path {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            prefix: String::new(),
            segment_lens: Vec::new(),
        }
    }

    pub fn push(&mut self, segment: &str) {
        self.prefix.push_str(segment);
        self.prefix.push('.');
        self.segment_lens.push(segment.len() + 1);
    }

    pub fn pop(&mut self) {
        if let Some(len) = self.segment_lens.pop() {
            self.prefix.truncate(self.prefix.len() - len);
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segment_lens.is_empty()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.segment_lens.len()
    }

    /// The dot-joined prefix, trailing dot included (empty at the root).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resolve a column name at the current level.
    #[must_use]
    pub fn column(&self, name: &str) -> String {
        format!("{}{name}", self.prefix)
    }
}
