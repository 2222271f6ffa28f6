use std::collections::BTreeMap;

use chrono::NaiveDate;
use leptos::*;

use crate::api::{LeaveRequestPayload, LeaveRequestResponse};
use crate::options::{
    DEFAULT_PARTIAL_DAY, MSG_END_BEFORE_START, MSG_INVALID_DATE, MSG_REQUIRED, STATUS_PENDING,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    RequestType,
    Reason,
    DetailReason,
    StartDate,
    EndDate,
    PartialDay,
    Approver,
    Supervisor,
    InformTo,
    ExpectedApprove,
}

pub const REQUIRED_FIELDS: &[FormField] = &[
    FormField::RequestType,
    FormField::Reason,
    FormField::StartDate,
    FormField::EndDate,
    FormField::Approver,
];

/// One message per field, at most.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

/// Raw form values as typed into the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveFormInput {
    pub request_type: String,
    pub reason: String,
    pub detail_reason: String,
    pub start_date: String,
    pub end_date: String,
    pub partial_day: String,
    pub approver_id: String,
    pub supervisor_id: String,
    pub inform_to: String,
    pub expected_approve: String,
}

impl Default for LeaveFormInput {
    fn default() -> Self {
        Self {
            request_type: String::new(),
            reason: String::new(),
            detail_reason: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            partial_day: DEFAULT_PARTIAL_DAY.to_string(),
            approver_id: String::new(),
            supervisor_id: String::new(),
            inform_to: String::new(),
            expected_approve: String::new(),
        }
    }
}

impl LeaveFormInput {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::RequestType => &self.request_type,
            FormField::Reason => &self.reason,
            FormField::DetailReason => &self.detail_reason,
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
            FormField::PartialDay => &self.partial_day,
            FormField::Approver => &self.approver_id,
            FormField::Supervisor => &self.supervisor_id,
            FormField::InformTo => &self.inform_to,
            FormField::ExpectedApprove => &self.expected_approve,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::RequestType => &mut self.request_type,
            FormField::Reason => &mut self.reason,
            FormField::DetailReason => &mut self.detail_reason,
            FormField::StartDate => &mut self.start_date,
            FormField::EndDate => &mut self.end_date,
            FormField::PartialDay => &mut self.partial_day,
            FormField::Approver => &mut self.approver_id,
            FormField::Supervisor => &mut self.supervisor_id,
            FormField::InformTo => &mut self.inform_to,
            FormField::ExpectedApprove => &mut self.expected_approve,
        };
        *slot = value;
    }

    pub fn from_response(response: &LeaveRequestResponse) -> Self {
        Self {
            request_type: response.request_type.clone(),
            reason: response.reason.clone(),
            detail_reason: response.detail_reason.clone().unwrap_or_default(),
            start_date: response.start_date.format("%Y-%m-%d").to_string(),
            end_date: response.end_date.format("%Y-%m-%d").to_string(),
            partial_day: response.partial_day.clone(),
            approver_id: response.approver_id.clone().unwrap_or_default(),
            supervisor_id: response.supervisor_id.clone().unwrap_or_default(),
            inform_to: response.inform_to.clone().unwrap_or_default(),
            expected_approve: response
                .expected_approve
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn total_days(&self) -> u32 {
        total_days(parse_date(&self.start_date), parse_date(&self.end_date))
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Inclusive calendar-day count; 0 when either end is missing or the range is inverted.
pub fn total_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    match (start, end) {
        (Some(start), Some(end)) => {
            let days = (end - start).num_days() + 1;
            u32::try_from(days.max(0)).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_date(
    input: &LeaveFormInput,
    field: FormField,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let raw = input.get(field);
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.insert(field, MSG_INVALID_DATE);
    }
    parsed
}

pub fn validate_leave_form(
    input: &LeaveFormInput,
    today: NaiveDate,
) -> Result<LeaveRequestPayload, FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in REQUIRED_FIELDS {
        if input.get(*field).trim().is_empty() {
            errors.insert(*field, MSG_REQUIRED);
        }
    }

    let start = check_date(input, FormField::StartDate, &mut errors);
    let end = check_date(input, FormField::EndDate, &mut errors);
    let expected_approve = check_date(input, FormField::ExpectedApprove, &mut errors);

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.insert(FormField::EndDate, MSG_END_BEFORE_START);
        }
    }

    match (start, end) {
        (Some(start_date), Some(end_date)) if errors.is_empty() => Ok(LeaveRequestPayload {
            request_type: input.request_type.trim().to_string(),
            reason: input.reason.trim().to_string(),
            detail_reason: optional(&input.detail_reason),
            start_date,
            end_date,
            partial_day: optional(&input.partial_day)
                .unwrap_or_else(|| DEFAULT_PARTIAL_DAY.to_string()),
            approver_id: input.approver_id.trim().to_string(),
            supervisor_id: optional(&input.supervisor_id),
            inform_to: optional(&input.inform_to),
            expected_approve,
            total_days: total_days(Some(start_date), Some(end_date)),
            status: STATUS_PENDING.to_string(),
            request_date: today,
        }),
        _ => Err(errors),
    }
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub input: RwSignal<LeaveFormInput>,
    pub errors: RwSignal<FieldErrors>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            input: create_rw_signal(LeaveFormInput::default()),
            errors: create_rw_signal(FieldErrors::default()),
        }
    }
}

impl LeaveFormState {
    pub fn value(&self, field: FormField) -> Signal<String> {
        let input = self.input;
        Signal::derive(move || input.with(|values| values.get(field).to_string()))
    }

    pub fn error(&self, field: FormField) -> Signal<Option<&'static str>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|errs| errs.get(field)))
    }

    pub fn total_days(&self) -> Signal<u32> {
        let input = self.input;
        Signal::derive(move || input.with(LeaveFormInput::total_days))
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.input.update(|values| values.set(field, value));
        self.errors.update(|errs| errs.clear_field(field));
    }

    pub fn reset(&self) {
        self.input.set(LeaveFormInput::default());
        self.errors.set(FieldErrors::default());
    }

    pub fn load_from_response(&self, response: &LeaveRequestResponse) {
        self.input.set(LeaveFormInput::from_response(response));
        self.errors.set(FieldErrors::default());
    }

    /// Validates the current input and hands the payload to `dispatch` only when it is clean.
    pub fn submit_with(
        &self,
        today: NaiveDate,
        dispatch: impl FnOnce(LeaveRequestPayload),
    ) -> bool {
        match self.input.with_untracked(|values| validate_leave_form(values, today)) {
            Ok(payload) => {
                self.errors.set(FieldErrors::default());
                dispatch(payload);
                true
            }
            Err(errors) => {
                self.errors.set(errors);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 1, 2)
    }

    fn filled() -> LeaveFormInput {
        LeaveFormInput {
            request_type: "ANNUAL".into(),
            reason: "VACATION".into(),
            start_date: "2025-01-10".into(),
            end_date: "2025-01-12".into(),
            approver_id: "u-approver".into(),
            ..LeaveFormInput::default()
        }
    }

    #[test]
    fn each_missing_required_field_is_reported_alone() {
        for field in REQUIRED_FIELDS {
            let mut input = filled();
            input.set(*field, String::new());
            let errors = validate_leave_form(&input, today()).unwrap_err();
            assert_eq!(errors.len(), 1, "field {:?}", field);
            assert_eq!(errors.get(*field), Some(MSG_REQUIRED));
        }
    }

    #[test]
    fn blank_form_flags_every_required_field() {
        let errors = validate_leave_form(&LeaveFormInput::default(), today()).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        let mut expected = REQUIRED_FIELDS.to_vec();
        expected.sort();
        assert_eq!(fields, expected);
    }

    #[test]
    fn end_before_start_is_rejected_on_end_date() {
        let mut input = filled();
        input.end_date = "2025-01-09".into();
        let errors = validate_leave_form(&input, today()).unwrap_err();
        assert_eq!(errors.get(FormField::EndDate), Some(MSG_END_BEFORE_START));
        assert!(errors.get(FormField::StartDate).is_none());
        assert_eq!(input.total_days(), 0);
    }

    #[test]
    fn malformed_dates_are_reported() {
        let mut input = filled();
        input.start_date = "10/01/2025".into();
        input.expected_approve = "soon".into();
        let errors = validate_leave_form(&input, today()).unwrap_err();
        assert_eq!(errors.get(FormField::StartDate), Some(MSG_INVALID_DATE));
        assert_eq!(errors.get(FormField::ExpectedApprove), Some(MSG_INVALID_DATE));
        assert!(errors.get(FormField::EndDate).is_none());
    }

    #[test]
    fn total_days_counts_both_ends() {
        assert_eq!(total_days(Some(date(2025, 1, 10)), Some(date(2025, 1, 12))), 3);
        assert_eq!(total_days(Some(date(2025, 1, 10)), Some(date(2025, 1, 10))), 1);
        assert_eq!(total_days(Some(date(2025, 1, 10)), Some(date(2025, 1, 1))), 0);
        assert_eq!(total_days(None, Some(date(2025, 1, 10))), 0);
        assert_eq!(total_days(Some(date(2024, 12, 30)), Some(date(2025, 1, 2))), 4);
    }

    #[test]
    fn valid_form_builds_pending_payload() {
        let mut input = filled();
        input.detail_reason = "  Trip to Da Nang ".into();
        input.inform_to = "team@example.com".into();
        let payload = validate_leave_form(&input, today()).unwrap();
        assert_eq!(payload.total_days, 3);
        assert_eq!(payload.status, STATUS_PENDING);
        assert_eq!(payload.request_date, today());
        assert_eq!(payload.partial_day, DEFAULT_PARTIAL_DAY);
        assert_eq!(payload.detail_reason.as_deref(), Some("Trip to Da Nang"));
        assert!(payload.supervisor_id.is_none());
        assert_eq!(payload.inform_to.as_deref(), Some("team@example.com"));
    }

    #[test]
    fn response_round_trips_into_form_input() {
        let response = crate::test_support::helpers::leave_request(
            "lr-1",
            "SICK",
            "MEDICAL",
            "Binh Tran",
        );
        let input = LeaveFormInput::from_response(&response);
        assert_eq!(input.start_date, "2025-01-10");
        assert_eq!(input.approver_id, "u-approver");
        assert_eq!(input.total_days(), 3);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use std::cell::Cell;

    #[test]
    fn invalid_submit_never_dispatches() {
        with_runtime(|| {
            let state = LeaveFormState::default();
            let calls = Cell::new(0);
            let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();

            assert!(!state.submit_with(today, |_| calls.set(calls.get() + 1)));
            assert_eq!(calls.get(), 0);
            assert_eq!(state.error(FormField::Approver).get(), Some(MSG_REQUIRED));

            state.set_field(FormField::Approver, "u-approver".into());
            assert!(state.error(FormField::Approver).get().is_none());
            assert_eq!(state.error(FormField::Reason).get(), Some(MSG_REQUIRED));

            for (field, value) in [
                (FormField::RequestType, "ANNUAL"),
                (FormField::Reason, "VACATION"),
                (FormField::StartDate, "2025-01-10"),
                (FormField::EndDate, "2025-01-09"),
            ] {
                state.set_field(field, value.into());
            }
            assert!(!state.submit_with(today, |_| calls.set(calls.get() + 1)));
            assert_eq!(calls.get(), 0);
            assert_eq!(
                state.error(FormField::EndDate).get(),
                Some(MSG_END_BEFORE_START)
            );

            state.set_field(FormField::EndDate, "2025-01-12".into());
            assert_eq!(state.total_days().get(), 3);
            let mut sent = None;
            assert!(state.submit_with(today, |payload| sent = Some(payload)));
            assert_eq!(sent.map(|p| p.total_days), Some(3));
            assert!(state.errors.get().is_empty());

            state.reset();
            assert_eq!(state.input.get(), LeaveFormInput::default());
        });
    }
}
