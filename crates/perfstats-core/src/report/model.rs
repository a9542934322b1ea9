// ---------------------------------------------------------------------------
// Document tree — the raw shape of the XML as loaded
// ---------------------------------------------------------------------------

/// A child element of a `Group`, reduced to its name and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    /// Value of the first attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A `Group` element directly under the document root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupNode {
    pub label: Option<String>,
    /// Direct children only, in document order.
    pub children: Vec<Element>,
}

impl GroupNode {
    /// First direct child named `name`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children named `name`, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// The loaded report before any field is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportDocument {
    pub root_name: String,
    pub groups: Vec<GroupNode>,
}

// ---------------------------------------------------------------------------
// Typed report
// ---------------------------------------------------------------------------

/// Key → count pairs that remember first-seen order.
///
/// Inserting an existing key replaces its count but keeps its position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedCounts {
    entries: Vec<(String, u64)>,
}

impl OrderedCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, count: u64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((key, count)),
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Statistics for one named test case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub label: String,
    pub success_count: u64,
    pub failure_count: u64,
    /// Average response time in seconds.
    pub avg_response_time_secs: f64,
    /// Percentile label (e.g. "90.0") → response time in seconds.
    pub percentiles: Vec<(String, f64)>,
    pub http_codes: OrderedCounts,
    pub total_bytes: u64,
}

impl Group {
    pub fn sample_count(&self) -> u64 {
        self.success_count + self.failure_count
    }

    /// Response time in seconds at the given percentile label, if present.
    pub fn percentile_secs(&self, param: &str) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|(p, _)| p == param)
            .map(|(_, v)| *v)
    }
}

/// Groups that passed extraction, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub groups: Vec<Group>,
}
