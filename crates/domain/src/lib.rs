//! Bookcheck Domain - Core types for the booking API suite
//!
//! This crate defines the domain model for the bookcheck end-to-end
//! suite. All types here are pure Rust with no I/O dependencies.

pub mod booking;
pub mod report;
pub mod request;
pub mod response;
pub mod validate;

pub use booking::{Booking, BookingDates, BookingIdSummary, XmlBooking, XmlBookingDates};
pub use report::{ScenarioReport, ScenarioStatus, SuiteReport};
pub use request::{Header, Headers, HttpMethod, QueryParam, QueryParams, RequestSpec};
pub use response::ResponseSpec;
pub use validate::{JSON_CONTENT_TYPE, ValidationError, XML_CONTENT_TYPE, is_array, is_json, is_xml};
