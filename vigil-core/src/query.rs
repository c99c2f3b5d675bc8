//! Alarm query console
//!
//! Plain-text HTTP/1.0 request handling for the serial console. Each
//! request line is answered on its own; header lines and anything else
//! that is not a request line are ignored.
//!
//! Routes:
//! - `GET /alarm/HH:MM` validates and echoes an alarm time. It never
//!   changes the running alarm.
//! - `PUT /clock/HH:MM:SS` sets the wall clock.

use core::fmt::{self, Write};

use chrono::{NaiveTime, Timelike};
use heapless::String;

use crate::time::{parse_hh_mm, parse_hh_mm_ss};

/// Maximum response body length
pub const MAX_BODY_LEN: usize = 160;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
}

impl Status {
    /// Numeric status code
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
        }
    }

    /// Reason phrase
    pub fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// Text response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub body: String<MAX_BODY_LEN>,
}

impl Response {
    fn new(status: Status, args: fmt::Arguments) -> Self {
        let mut body = String::new();
        // Overlong bodies are truncated at capacity
        let _ = body.write_fmt(args);
        Self { status, body }
    }

    /// Write the status line, headers and body
    pub fn encode<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "HTTP/1.0 {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
            self.status.code(),
            self.status.reason(),
            self.body.len(),
            self.body
        )
    }
}

/// Outcome of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub response: Response,
    /// New wall clock time, when the request set one
    pub set_clock: Option<NaiveTime>,
}

impl From<Response> for Reply {
    fn from(response: Response) -> Self {
        Self {
            response,
            set_clock: None,
        }
    }
}

/// Handle one console line
///
/// Returns `None` for lines that are not request lines.
pub fn handle_line(line: &str) -> Option<Reply> {
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;

    if !method.bytes().all(|b| b.is_ascii_uppercase()) || !path.starts_with('/') {
        return None;
    }

    Some(route(method, path))
}

fn route(method: &str, path: &str) -> Reply {
    if let Some(time) = path.strip_prefix("/alarm/") {
        if method != "GET" {
            return method_not_allowed(method);
        }
        return match parse_hh_mm(time) {
            Ok(t) => Response::new(
                Status::Ok,
                format_args!("Alarm: {:02}:{:02}\n", t.hour(), t.minute()),
            )
            .into(),
            Err(e) => Response::new(
                Status::BadRequest,
                format_args!(
                    "Failed to parse time. Must be specified in format HH:MM.\nError: {}\n",
                    e
                ),
            )
            .into(),
        };
    }

    if let Some(time) = path.strip_prefix("/clock/") {
        if method != "PUT" {
            return method_not_allowed(method);
        }
        return match parse_hh_mm_ss(time) {
            Ok(t) => Reply {
                response: Response::new(
                    Status::Ok,
                    format_args!(
                        "Clock: {:02}:{:02}:{:02}\n",
                        t.hour(),
                        t.minute(),
                        t.second()
                    ),
                ),
                set_clock: Some(t),
            },
            Err(e) => Response::new(
                Status::BadRequest,
                format_args!(
                    "Failed to parse time. Must be specified in format HH:MM:SS.\nError: {}\n",
                    e
                ),
            )
            .into(),
        };
    }

    Response::new(Status::NotFound, format_args!("Not found: {}\n", path)).into()
}

fn method_not_allowed(method: &str) -> Reply {
    Response::new(
        Status::MethodNotAllowed,
        format_args!("Method not allowed: {}\n", method),
    )
    .into()
}
