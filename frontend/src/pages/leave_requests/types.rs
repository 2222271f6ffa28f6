/// Which side of the approval flow a list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    Mine,
    Received,
}

impl ListScope {
    pub fn title(self) -> &'static str {
        match self {
            ListScope::Mine => "My Leave Requests",
            ListScope::Received => "Received Leave Requests",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ListScope::Mine => "Track and manage the leave you have requested.",
            ListScope::Received => "Approve or reject requests assigned to you.",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ListScope::Mine => "/leave-requests",
            ListScope::Received => "/leave-requests/received",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn success_message(self) -> &'static str {
        match self {
            Decision::Approve => "Leave request approved.",
            Decision::Reject => "Leave request rejected.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionInput {
    pub id: String,
    pub decision: Decision,
    pub comment: Option<String>,
}
