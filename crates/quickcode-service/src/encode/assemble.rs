//! Dispatch from a normalized request to its payload.

use quickcode_core::config::TitleCatalog;

use super::contact::assemble_contact;
use super::phone::PhoneFormatter;
use super::request::{ContactRecord, Coordinates, EncodeRequest, EncodeResult};
use super::sanitize::trim_opt;
use crate::error::EncodeError;

/// Builds [`EncodeResult`]s. Holds only read-only collaborators, so the
/// same request always assembles to the same result.
#[derive(Clone, Copy)]
pub struct Assembler<'a> {
    phone: &'a dyn PhoneFormatter,
    titles: &'a TitleCatalog,
}

impl std::fmt::Debug for Assembler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assembler")
            .field("titles", self.titles)
            .finish_non_exhaustive()
    }
}

impl<'a> Assembler<'a> {
    #[must_use]
    pub const fn new(phone: &'a dyn PhoneFormatter, titles: &'a TitleCatalog) -> Self {
        Self { phone, titles }
    }

    /// ## Summary
    /// Assembles the payload, display text and title for `request`.
    ///
    /// ## Errors
    /// Returns `InvalidRequest` when required data is absent or blank, and
    /// `EmptyAssembly` when a contact has no usable field.
    #[tracing::instrument(skip(self, request), fields(content_type = %request.content_type()))]
    pub fn assemble(&self, request: &EncodeRequest) -> Result<EncodeResult, EncodeError> {
        let result = match request {
            EncodeRequest::Text { data, label } => {
                let data = required(data.as_deref(), "text")?;
                let display = trim_opt(label.as_deref()).unwrap_or(data);
                EncodeResult {
                    payload: data.to_string(),
                    display_text: display.to_string(),
                    title: self.titles.text.clone(),
                }
            }
            EncodeRequest::Email(data) => {
                let address = required(data.as_deref(), "email")?;
                EncodeResult {
                    payload: format!("mailto:{address}"),
                    display_text: address.to_string(),
                    title: self.titles.email.clone(),
                }
            }
            EncodeRequest::Phone(data) => self.dial("tel:", data.as_deref(), &self.titles.phone)?,
            EncodeRequest::Sms(data) => self.dial("sms:", data.as_deref(), &self.titles.sms)?,
            EncodeRequest::Contact(record) => {
                let record = record.as_ref().ok_or_else(|| {
                    EncodeError::InvalidRequest("contact request without fields".to_string())
                })?;
                let assembled = match record {
                    ContactRecord::Fields(fields) => assemble_contact(fields, self.phone),
                    ContactRecord::Parsed(parsed) => assemble_contact(parsed, self.phone),
                };
                let (payload, display_text) = assembled.ok_or(EncodeError::EmptyAssembly)?;
                EncodeResult {
                    payload,
                    display_text,
                    title: self.titles.contact.clone(),
                }
            }
            EncodeRequest::Location(coordinates) => self.locate(*coordinates)?,
        };

        tracing::debug!(
            payload_len = result.payload.len(),
            title = %result.title,
            "Assembled payload"
        );

        Ok(result)
    }

    fn dial(
        &self,
        scheme: &str,
        data: Option<&str>,
        title: &str,
    ) -> Result<EncodeResult, EncodeError> {
        let number = required(data, "phone number")?;
        Ok(EncodeResult {
            payload: format!("{scheme}{number}"),
            display_text: self.phone.format(number),
            title: title.to_string(),
        })
    }

    /// Coordinates use `f32`'s `Display`, which prints the shortest form that
    /// round-trips: integral values have no `.0` (`geo:0,0`) and small values
    /// never switch to exponent notation (`0.00001`).
    fn locate(&self, coordinates: Coordinates) -> Result<EncodeResult, EncodeError> {
        if !coordinates.is_set() {
            return Err(EncodeError::InvalidRequest(
                "location needs both latitude and longitude".to_string(),
            ));
        }
        let Coordinates {
            latitude,
            longitude,
        } = coordinates;
        Ok(EncodeResult {
            payload: format!("geo:{latitude},{longitude}"),
            display_text: format!("{latitude},{longitude}"),
            title: self.titles.location.clone(),
        })
    }
}

fn required<'v>(value: Option<&'v str>, what: &str) -> Result<&'v str, EncodeError> {
    trim_opt(value).ok_or_else(|| EncodeError::InvalidRequest(format!("{what} is empty")))
}
