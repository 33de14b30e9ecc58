//! Task records as stored in the tasks document

use crate::domain::{seed_contacts, Contact, Priority, Subtask, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub category: String,
    pub priority: Priority,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default, with = "due_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_to: Vec<Contact>,
}

impl Task {
    pub fn done_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.is_done()).count()
    }

    /// Share of finished subtasks in percent; 0 when there are none.
    pub fn progress(&self) -> f64 {
        if self.subtasks.is_empty() {
            return 0.0;
        }
        self.done_subtasks() as f64 / self.subtasks.len() as f64 * 100.0
    }

    /// Case-insensitive search over title and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// `dueDate` is `YYYY-MM-DD`, or an empty string when no date was picked.
mod due_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, FORMAT)
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid dueDate '{}': {}", raw, e)))
    }
}

/// Sample board used when seeding a fresh store.
pub fn sample_tasks() -> Vec<Task> {
    let contacts = seed_contacts();
    let pick = |idx: &[usize]| idx.iter().map(|&i| contacts[i].clone()).collect::<Vec<_>>();
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);

    vec![
        Task {
            title: "Call potential clients".to_string(),
            description: "Make the product presentation to prospective buyers".to_string(),
            status: TaskStatus::Todo,
            category: "design".to_string(),
            priority: Priority::Urgent,
            subtasks: vec![
                Subtask::new("Follow up with leads", false),
                Subtask::new("Schedule product demos", true),
            ],
            due_date: date(2022, 8, 15),
            assigned_to: pick(&[0, 2]),
        },
        Task {
            title: "Update website design".to_string(),
            description: "Revamp the existing website design to improve user experience \
                and align with the latest design trends."
                .to_string(),
            status: TaskStatus::InProgress,
            category: "design".to_string(),
            priority: Priority::Medium,
            subtasks: vec![
                Subtask::new("Conduct user testing", true),
                Subtask::new("Optimize site navigation", false),
            ],
            due_date: date(2022, 6, 30),
            assigned_to: pick(&[2, 3, 4]),
        },
        Task {
            title: "Review project proposal".to_string(),
            description: "Review the project proposal and provide feedback on its \
                feasibility, strategic alignment, and potential impact."
                .to_string(),
            status: TaskStatus::AwaitingFeedback,
            category: "marketing".to_string(),
            priority: Priority::Low,
            subtasks: vec![
                Subtask::new("Analyze cost-benefit ratio", true),
                Subtask::new("Evaluate risks and contingencies", false),
            ],
            due_date: date(2022, 7, 15),
            assigned_to: pick(&[1, 4, 3]),
        },
        Task {
            title: "Prepare quarterly report".to_string(),
            description: "Compile financial data and analysis to create a quarterly \
                report for the management team."
                .to_string(),
            status: TaskStatus::Done,
            category: "marketing".to_string(),
            priority: Priority::Urgent,
            subtasks: vec![
                Subtask::new("Analyze revenue trends", true),
                Subtask::new("Summarize expenditure breakdown", true),
            ],
            due_date: date(2022, 4, 30),
            assigned_to: pick(&[2, 3, 5]),
        },
    ]
}
