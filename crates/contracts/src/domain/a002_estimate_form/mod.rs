pub mod form;

pub use form::{parse_attendee_input, EstimateForm, FormPhase, SettleTicket, SETTLE_DELAY_MS};
