//! Booking record schemas
//!
//! Typed schemas for the payloads returned by the booking API. The
//! field-type checks of the suite are expressed as serde decoding at
//! the boundary instead of ad hoc property probing: a body that
//! decodes satisfies the contract.

use chrono::NaiveDate;
use serde::Deserialize;

/// The check-in/check-out date range of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BookingDates {
    /// Check-in date.
    pub checkin: NaiveDate,
    /// Check-out date.
    pub checkout: NaiveDate,
}

/// A reservation record, as returned by the JSON representation of
/// `GET /booking/{id}`.
///
/// `bookingid` is not part of this payload; the id travels separately
/// in the collection listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    /// Guest first name.
    pub firstname: String,
    /// Guest last name.
    pub lastname: String,
    /// Total price of the stay.
    pub totalprice: f64,
    /// Whether the deposit has been paid.
    pub depositpaid: bool,
    /// Stay date range.
    pub bookingdates: BookingDates,
    /// Free-form extras requested by the guest.
    #[serde(default)]
    pub additionalneeds: Option<String>,
}

/// A single element of the `GET /booking` listing.
///
/// Unknown fields are rejected, which carries the suite's
/// "exactly one key" invariant in the type itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingIdSummary {
    /// The booking identifier.
    pub bookingid: u32,
}

impl BookingIdSummary {
    /// Returns true if the id is truthy (non-zero).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.bookingid != 0
    }
}

/// The date range of [`XmlBooking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct XmlBookingDates {
    /// Check-in date.
    pub checkin: NaiveDate,
    /// Check-out date.
    pub checkout: NaiveDate,
}

/// A reservation record decoded from the XML-flavored representation
/// of `GET /booking/{id}`.
///
/// Scalar leaves arrive as text, so `totalprice` and `depositpaid`
/// stay strings here; [`XmlBooking::totalprice_value`] and
/// [`XmlBooking::depositpaid_value`] recover the typed values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename = "booking")]
pub struct XmlBooking {
    /// Guest first name.
    pub firstname: String,
    /// Guest last name.
    pub lastname: String,
    /// Total price, as text.
    pub totalprice: String,
    /// Deposit flag, expected to be the literal `"true"` or `"false"`.
    pub depositpaid: String,
    /// Stay date range.
    pub bookingdates: XmlBookingDates,
    /// Free-form extras requested by the guest.
    #[serde(default)]
    pub additionalneeds: Option<String>,
}

impl XmlBooking {
    /// Decodes an XML booking from body text.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error if the text does
    /// not match the booking schema.
    pub fn from_xml(text: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(text)
    }

    /// Parses `totalprice` as a number, if it is one.
    #[must_use]
    pub fn totalprice_value(&self) -> Option<f64> {
        self.totalprice.parse().ok()
    }

    /// Interprets `depositpaid`, accepting only the literal strings
    /// `"true"` and `"false"`.
    #[must_use]
    pub fn depositpaid_value(&self) -> Option<bool> {
        match self.depositpaid.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}
