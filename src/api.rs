//! Network API request mapping
//!
//! Maps the controller's GET routes onto commands and produces the plain
//! text responses. The transport (socket handling, HTTP framing) is an
//! external collaborator; it hands the path and raw query string here
//! and sends back the status and body.

use crate::command::{Ack, Command, CommandError, Dispatcher};

const UPDATED_LED_COUNT: &str = "Updated LED count";
const INVALID_LED_COUNT: &str = "Invalid LED count";
const UPDATED_SPEED: &str = "Updated speed";
const INVALID_SPEED: &str = "Invalid speed value";
const COLOR_UPDATED: &str = "Color updated";
const MISSING_RGB: &str = "Missing RGB values";
const INVALID_COLOR: &str = "Invalid color value";
const LED_UPDATED: &str = "LED updated";
const INVALID_LED_INDEX: &str = "Invalid LED index";
const RESTARTING: &str = "Restarting...";
const BUSY: &str = "Busy";
const NOT_FOUND: &str = "Not found";

/// Plain text response for one API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: &'static str,
    /// The transport should restart the process after sending this
    /// response.
    pub restart: bool,
}

impl ApiResponse {
    const fn ok(body: &'static str) -> Self {
        Self {
            status: 200,
            body,
            restart: false,
        }
    }

    const fn bad_request(body: &'static str) -> Self {
        Self {
            status: 400,
            body,
            restart: false,
        }
    }
}

/// Route a GET request to the dispatcher.
///
/// `query` is the raw query string without the leading `?`; parameters
/// are `key=value` pairs joined by `&`, no percent-decoding.
pub fn handle_request<const MAX_LEDS: usize, const QUEUE: usize>(
    dispatcher: &Dispatcher<'_, MAX_LEDS, QUEUE>,
    path: &str,
    query: &str,
) -> ApiResponse {
    match path {
        "/set_leds" => set_leds(dispatcher, query),
        "/set_speed" => set_speed(dispatcher, query),
        "/set_color" => set_color(dispatcher, query),
        "/set_led" => set_led(dispatcher, query),
        "/reset" => respond(dispatcher.dispatch(Command::Reset), RESTARTING),
        _ => ApiResponse {
            status: 404,
            body: NOT_FOUND,
            restart: false,
        },
    }
}

fn set_leds<const MAX_LEDS: usize, const QUEUE: usize>(
    dispatcher: &Dispatcher<'_, MAX_LEDS, QUEUE>,
    query: &str,
) -> ApiResponse {
    let Some(num) = int_param(query, "num") else {
        return ApiResponse::bad_request(INVALID_LED_COUNT);
    };
    respond(dispatcher.dispatch(Command::SetStripLength(num)), UPDATED_LED_COUNT)
}

fn set_speed<const MAX_LEDS: usize, const QUEUE: usize>(
    dispatcher: &Dispatcher<'_, MAX_LEDS, QUEUE>,
    query: &str,
) -> ApiResponse {
    let Some(value) = query_param(query, "value").and_then(|v| v.parse::<f32>().ok()) else {
        return ApiResponse::bad_request(INVALID_SPEED);
    };
    respond(dispatcher.dispatch(Command::SetSpeed(value)), UPDATED_SPEED)
}

fn set_color<const MAX_LEDS: usize, const QUEUE: usize>(
    dispatcher: &Dispatcher<'_, MAX_LEDS, QUEUE>,
    query: &str,
) -> ApiResponse {
    let (Some(r), Some(g), Some(b)) = (
        int_param(query, "r"),
        int_param(query, "g"),
        int_param(query, "b"),
    ) else {
        return ApiResponse::bad_request(MISSING_RGB);
    };
    respond(dispatcher.dispatch(Command::SetColor { r, g, b }), COLOR_UPDATED)
}

fn set_led<const MAX_LEDS: usize, const QUEUE: usize>(
    dispatcher: &Dispatcher<'_, MAX_LEDS, QUEUE>,
    query: &str,
) -> ApiResponse {
    let (Some(index), Some(state)) = (int_param(query, "index"), query_param(query, "state"))
    else {
        return ApiResponse::bad_request(INVALID_LED_INDEX);
    };
    let command = Command::SetPixel {
        index,
        on: state == "1",
    };
    respond(dispatcher.dispatch(command), LED_UPDATED)
}

fn respond(result: Result<Ack, CommandError>, success: &'static str) -> ApiResponse {
    match result {
        Ok(Ack::Accepted) => ApiResponse::ok(success),
        Ok(Ack::RestartRequested) => ApiResponse {
            status: 200,
            body: RESTARTING,
            restart: true,
        },
        Err(err) => error_response(err),
    }
}

fn error_response(err: CommandError) -> ApiResponse {
    match err {
        CommandError::InvalidLedCount => ApiResponse::bad_request(INVALID_LED_COUNT),
        CommandError::InvalidSpeed => ApiResponse::bad_request(INVALID_SPEED),
        CommandError::InvalidColor => ApiResponse::bad_request(INVALID_COLOR),
        CommandError::InvalidLedIndex => ApiResponse::bad_request(INVALID_LED_INDEX),
        CommandError::Overloaded => ApiResponse {
            status: 503,
            body: BUSY,
            restart: false,
        },
    }
}

fn query_param<'q>(query: &'q str, key: &str) -> Option<&'q str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}

fn int_param(query: &str, key: &str) -> Option<i64> {
    query_param(query, key)?.parse().ok()
}
