//! Parsing helpers for path, query, header and body identifiers.

use actix_web::HttpRequest;
use serde_json::json;

use crate::domain::{Error, UserId};

/// Name of the header carrying the requester's user id.
pub const FOLLOWER_ID_HEADER: &str = "followerId";

/// Identifier field as named in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const USER_ID: FieldName = FieldName::new("userId");
pub(crate) const FOLLOWER_ID: FieldName = FieldName::new("followerId");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}"))
        .with_details(json!({ "field": field, "code": "missing_field" }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

/// Parse a user id, reporting the offending field on failure.
pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

/// Parse a required user id that may be absent from the request.
pub(crate) fn require_user_id(value: Option<&str>, field: FieldName) -> Result<UserId, Error> {
    let value = value.ok_or_else(|| missing_field_error(field))?;
    parse_user_id(value, field)
}

/// Read the optional `followerId` header.
///
/// An absent or blank header yields `None`; the caller decides what a missing
/// requester means.
pub(crate) fn follower_id_header(req: &HttpRequest) -> Result<Option<UserId>, Error> {
    let Some(raw) = req.headers().get(FOLLOWER_ID_HEADER) else {
        return Ok(None);
    };
    let value = raw
        .to_str()
        .map_err(|_| invalid_uuid_error(FOLLOWER_ID, "<non-ascii header>"))?;
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_user_id(value, FOLLOWER_ID).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    use crate::domain::ErrorCode;

    const ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[rstest]
    fn invalid_ids_name_the_field() {
        let err = parse_user_id("42", USER_ID).expect_err("not a uuid");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "userId", "value": "42", "code": "invalid_uuid" }))
        );
    }

    #[rstest]
    fn missing_required_id_is_reported() {
        let err = require_user_id(None, FOLLOWER_ID).expect_err("missing");
        assert_eq!(err.message(), "missing required field: followerId");
    }

    #[rstest]
    #[case(None, Ok(None))]
    #[case(Some(""), Ok(None))]
    #[case(Some(ID), Ok(Some(ID)))]
    #[case(Some("nope"), Err(()))]
    fn header_parsing(#[case] header: Option<&str>, #[case] expected: Result<Option<&str>, ()>) {
        let mut req = TestRequest::default();
        if let Some(value) = header {
            req = req.insert_header((FOLLOWER_ID_HEADER, value));
        }

        let parsed = follower_id_header(&req.to_http_request())
            .map(|id| id.map(|id| id.to_string()))
            .map_err(|_| ());

        assert_eq!(parsed, expected.map(|id| id.map(str::to_owned)));
    }
}
