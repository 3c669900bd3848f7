use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tauri::{AppHandle, Emitter, Listener, WebviewWindow};

use crate::{maps_keys, MAPS_COMMAND_CHANNEL};

pub(crate) const SET_API_KEY_METHOD: &str = "setApiKey";
pub(crate) const API_KEY_ARGUMENT: &str = "apiKey";
pub(crate) const INVALID_ARGUMENTS_CODE: &str = "INVALID_ARGUMENTS";
pub(crate) const API_KEY_NOT_PROVIDED_MESSAGE: &str = "API key not provided";

/// Closed set of commands the maps channel recognizes. Adding a command means
/// adding a variant here and an arm in `dispatch_command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    SetApiKey,
}

pub(crate) fn command_from_method(method: &str) -> Option<ShellCommand> {
    match method {
        SET_API_KEY_METHOD => Some(ShellCommand::SetApiKey),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommandRequest {
    #[serde(default)]
    pub(crate) id: Option<Value>,
    pub(crate) method: String,
    #[serde(default)]
    pub(crate) arguments: Map<String, Value>,
}

/// Exactly one reply is produced per request. `NotImplemented` is kept
/// distinct from `Error` so callers can tell an unknown command apart from a
/// known command with bad arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub(crate) enum CommandReply {
    Success {
        value: Value,
    },
    Error {
        code: String,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
    NotImplemented {
        method: String,
    },
}

impl CommandReply {
    pub(crate) fn empty_success() -> Self {
        Self::Success { value: Value::Null }
    }

    pub(crate) fn invalid_arguments(message: &str) -> Self {
        Self::Error {
            code: INVALID_ARGUMENTS_CODE.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    fn not_implemented(method: &str) -> Self {
        Self::NotImplemented {
            method: method.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CommandReplyEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(flatten)]
    reply: CommandReply,
}

/// Tauri event names reject `.`, so the well-known channel id maps onto the
/// event system with `:` separators.
pub(crate) fn channel_event_name(channel: &str) -> String {
    channel.replace('.', ":")
}

pub(crate) fn channel_reply_event_name(channel: &str) -> String {
    format!("{}/reply", channel_event_name(channel))
}

pub(crate) fn dispatch_command<F>(request: &CommandRequest, provision: F) -> CommandReply
where
    F: FnOnce(&str),
{
    match command_from_method(&request.method) {
        Some(ShellCommand::SetApiKey) => dispatch_set_api_key(&request.arguments, provision),
        None => CommandReply::not_implemented(&request.method),
    }
}

fn dispatch_set_api_key<F>(arguments: &Map<String, Value>, provision: F) -> CommandReply
where
    F: FnOnce(&str),
{
    match arguments.get(API_KEY_ARGUMENT).and_then(Value::as_str) {
        Some(api_key) if !api_key.is_empty() => {
            provision(api_key);
            CommandReply::empty_success()
        }
        _ => CommandReply::invalid_arguments(API_KEY_NOT_PROVIDED_MESSAGE),
    }
}

fn handle_raw_request<F>(payload: &str, provision: F) -> (Option<Value>, CommandReply)
where
    F: FnOnce(&str),
{
    match serde_json::from_str::<CommandRequest>(payload) {
        Ok(request) => {
            let reply = dispatch_command(&request, provision);
            (request.id, reply)
        }
        Err(error) => (
            None,
            CommandReply::invalid_arguments(&format!("Malformed command request: {error}")),
        ),
    }
}

/// Registers the maps command listener on the messaging window. Called once
/// during launch, after backend services are up. Replies go back to the
/// window that hosts the listener, whatever its label.
pub(crate) fn register_command_listener<R: tauri::Runtime>(
    app_handle: &AppHandle<R>,
    window: &WebviewWindow<R>,
) {
    let app_handle = app_handle.clone();
    let reply_label = window.label().to_string();
    window.listen(channel_event_name(MAPS_COMMAND_CHANNEL), move |event| {
        let (id, reply) = handle_raw_request(event.payload(), |api_key| {
            maps_keys::provision_api_key(&app_handle, api_key);
        });
        emit_reply(&app_handle, &reply_label, id, reply);
    });
    log::info!("command listener registered on {MAPS_COMMAND_CHANNEL}");
}

fn emit_reply<R: tauri::Runtime>(
    app_handle: &AppHandle<R>,
    reply_label: &str,
    id: Option<Value>,
    reply: CommandReply,
) {
    let envelope = CommandReplyEnvelope { id, reply };
    if let Err(error) = app_handle.emit_to(
        reply_label,
        channel_reply_event_name(MAPS_COMMAND_CHANNEL).as_str(),
        &envelope,
    ) {
        log::warn!("failed to emit command reply: {error}");
    }
}
