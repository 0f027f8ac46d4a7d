use crate::model::Employee;

pub mod add;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod stats;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Pagination summary for a listed page.
#[derive(Debug, Clone, Copy)]
pub struct PageInfo {
    pub page: usize,
    pub per_page: usize,
    pub total_filtered: usize,
    pub total_pages: usize,
}

/// Aggregates over the (filtered) collection.
#[derive(Debug, Clone)]
pub struct StatsSummary {
    pub total: usize,
    pub distinct_roles: usize,
    pub distinct_departments: usize,
    pub most_common_role: Option<String>,
    pub most_common_department: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Employee>,
    pub listed: Vec<Employee>,
    pub page: Option<PageInfo>,
    pub stats: Option<StatsSummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, employees: Vec<Employee>) -> Self {
        self.affected = employees;
        self
    }

    pub fn with_listed(mut self, employees: Vec<Employee>) -> Self {
        self.listed = employees;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_stats(mut self, stats: StatsSummary) -> Self {
        self.stats = Some(stats);
        self
    }
}
