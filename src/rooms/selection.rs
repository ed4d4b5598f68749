/// Room names given on the command line
///
/// An empty selection keeps every room. Otherwise a room is kept only when its name is
/// exactly (case-sensitively) one of the selected names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomSelection {
    names: Vec<String>,
}

impl RoomSelection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.names.is_empty() || self.names.iter().any(|n| n == name)
    }

    /// Keep the items whose name matches, preserving their order
    pub fn filter<T>(&self, items: Vec<T>, name_of: impl Fn(&T) -> &str) -> Vec<T> {
        if self.names.is_empty() {
            return items;
        }
        items.into_iter().filter(|item| self.matches(name_of(item))).collect()
    }
}
