pub mod leave_form;
pub mod leave_requests;
pub mod login;

pub use leave_form::{CreateLeavePage, EditLeavePage};
pub use leave_requests::{LeaveRequestsPage, ReceivedRequestsPage};
pub use login::LoginPage;
