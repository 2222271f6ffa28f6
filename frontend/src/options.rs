/// A selectable value and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const LEAVE_TYPES: &[SelectOption] = &[
    option("ANNUAL", "Annual Leave"),
    option("SICK", "Sick Leave"),
    option("MATERNITY", "Maternity Leave"),
    option("PATERNITY", "Paternity Leave"),
    option("EMERGENCY", "Emergency Leave"),
    option("UNPAID", "Unpaid Leave"),
];

pub const LEAVE_REASONS: &[SelectOption] = &[
    option("VACATION", "Vacation"),
    option("MEDICAL", "Medical"),
    option("FAMILY", "Family Emergency"),
    option("PERSONAL", "Personal"),
    option("CONFERENCE", "Conference/Training"),
    option("OTHER", "Other"),
];

pub const PARTIAL_DAY_OPTIONS: &[SelectOption] = &[
    option("FULL_DAY", "Full Day"),
    option("MORNING", "Morning (AM)"),
    option("AFTERNOON", "Afternoon (PM)"),
    option("CUSTOM", "Custom Hours"),
];

pub const DEFAULT_PARTIAL_DAY: &str = "FULL_DAY";

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_APPROVED: &str = "APPROVED";
pub const STATUS_REJECTED: &str = "REJECTED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_INVALID_DATE: &str = "Please select a valid date";
pub const MSG_END_BEFORE_START: &str = "End date must be after start date";

fn label_in(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|opt| opt.value.eq_ignore_ascii_case(value))
        .map(|opt| opt.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn leave_type_label(value: &str) -> String {
    label_in(LEAVE_TYPES, value)
}

pub fn reason_label(value: &str) -> String {
    label_in(LEAVE_REASONS, value)
}

pub fn partial_day_label(value: &str) -> String {
    label_in(PARTIAL_DAY_OPTIONS, value)
}

pub fn is_pending(status: &str) -> bool {
    status.eq_ignore_ascii_case(STATUS_PENDING)
}

pub fn status_label(status: &str) -> String {
    match status.to_ascii_uppercase().as_str() {
        STATUS_PENDING => "Pending".to_string(),
        STATUS_APPROVED => "Approved".to_string(),
        STATUS_REJECTED => "Rejected".to_string(),
        STATUS_CANCELLED => "Cancelled".to_string(),
        _ => status.to_string(),
    }
}

pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_ascii_uppercase().as_str() {
        STATUS_PENDING => "bg-status-warning-bg text-status-warning-text",
        STATUS_APPROVED => "bg-status-success-bg text-status-success-text",
        STATUS_REJECTED => "bg-status-error-bg text-status-error-text",
        _ => "bg-surface-muted text-fg-muted",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_known_values_case_insensitively() {
        assert_eq!(leave_type_label("ANNUAL"), "Annual Leave");
        assert_eq!(leave_type_label("sick"), "Sick Leave");
        assert_eq!(reason_label("CONFERENCE"), "Conference/Training");
        assert_eq!(partial_day_label("MORNING"), "Morning (AM)");
    }

    #[test]
    fn labels_pass_unknown_values_through() {
        assert_eq!(leave_type_label("SABBATICAL"), "SABBATICAL");
        assert_eq!(status_label("ESCALATED"), "ESCALATED");
    }

    #[test]
    fn status_helpers_cover_every_status() {
        assert_eq!(status_label("pending"), "Pending");
        assert_eq!(status_label("APPROVED"), "Approved");
        assert_eq!(status_label("REJECTED"), "Rejected");
        assert_eq!(status_label("CANCELLED"), "Cancelled");
        assert!(is_pending("Pending"));
        assert!(!is_pending("APPROVED"));
        assert!(status_badge_class("APPROVED").contains("success"));
        assert!(status_badge_class("CANCELLED").contains("muted"));
    }
}
