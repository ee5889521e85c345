#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub title: String,
    pub due_on: Option<String>,
    pub url: String,
    pub number: u64,
    pub state: String,
    #[allow(dead_code)]
    pub created_at: String,
}

impl Milestone {
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }

    /// The raw due date, or `None` when GitHub sent `null`, nothing or an empty string.
    pub fn due_on(&self) -> Option<&str> {
        self.due_on.as_deref().filter(|due_on| !due_on.is_empty())
    }
}

#[allow(dead_code)]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub url: String,
}
