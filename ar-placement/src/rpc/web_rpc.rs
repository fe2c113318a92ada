use crate::engine::camera::CameraPoseUpdate;
use crate::engine::core::app_state::{ArSession, SessionRequest};
use crate::tools::placement::{
    PlacementChanged, PlacementController, PlacementTarget, PointerAction, normalize,
};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_request(message: &str) -> Self {
        Self {
            code: -32600,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the WebRPC layer between the hosting page and the AR scene.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_event::<SessionRequest>()
            .add_event::<PointerAction>()
            .add_event::<PlacementChanged>()
            .add_event::<CameraPoseUpdate>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    forward_session_state,
                    forward_placement_changes,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::{Arc, Mutex};

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, host RPC disabled");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Listener lives as long as the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
    info!("✓ Host message listener registered");
}

/// Resource wrapping thread-safe message queue filled by the page's `message` listener.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

/// A validated request, ready to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RpcCommand {
    StartSession,
    EndSession,
    GetPlacementState,
    Pointer(PointerAction),
    CameraPose(CameraPoseUpdate),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum PointerKind {
    Tap,
    DragStart,
    DragMove,
    DragEnd,
}

#[derive(Deserialize)]
struct PointerParams {
    action: PointerKind,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}

#[derive(Deserialize)]
struct Vec3Params {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Deserialize)]
struct QuatParams {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

#[derive(Deserialize)]
struct CameraPoseParams {
    position: Vec3Params,
    rotation: QuatParams,
}

/// Validate framing and parameters of a request.
pub fn parse_command(request: &RpcRequest) -> Result<RpcCommand, RpcError> {
    if request.jsonrpc != "2.0" {
        return Err(RpcError::invalid_request("Expected jsonrpc \"2.0\""));
    }

    match request.method.as_str() {
        "start_session" => Ok(RpcCommand::StartSession),
        "end_session" => Ok(RpcCommand::EndSession),
        "get_placement_state" => Ok(RpcCommand::GetPlacementState),
        "pointer" => parse_pointer(&request.params).map(RpcCommand::Pointer),
        "camera_pose" => parse_camera_pose(&request.params).map(RpcCommand::CameraPose),
        other => Err(RpcError::method_not_found(other)),
    }
}

fn parse_pointer(params: &serde_json::Value) -> Result<PointerAction, RpcError> {
    let params = serde_json::from_value::<PointerParams>(params.clone()).map_err(|_| {
        RpcError::invalid_params("Expected 'action' of tap|drag_start|drag_move|drag_end")
    })?;

    // Host coordinates are already normalized, only clamp them.
    let point = normalize(Vec2::new(params.x, params.y), Vec2::ONE);

    Ok(match params.action {
        PointerKind::Tap => PointerAction::Tap(point),
        PointerKind::DragStart => PointerAction::DragStart(point),
        PointerKind::DragMove => PointerAction::DragMove(point),
        PointerKind::DragEnd => PointerAction::DragEnd,
    })
}

fn parse_camera_pose(params: &serde_json::Value) -> Result<CameraPoseUpdate, RpcError> {
    let CameraPoseParams { position, rotation } =
        serde_json::from_value::<CameraPoseParams>(params.clone()).map_err(|_| {
            RpcError::invalid_params("Expected 'position' {x,y,z} and 'rotation' {x,y,z,w}")
        })?;

    let rotation = Quat::from_xyzw(rotation.x, rotation.y, rotation.z, rotation.w);
    if !rotation.is_finite() || rotation.length_squared() < 1e-12 {
        return Err(RpcError::invalid_params("Rotation must be a non-zero quaternion"));
    }

    Ok(CameraPoseUpdate {
        position: Vec3::new(position.x, position.y, position.z),
        rotation: rotation.normalize(),
    })
}

/// Everything a command may touch in the world.
#[derive(SystemParam)]
pub struct RpcDispatch<'w, 's> {
    session_requests: EventWriter<'w, SessionRequest>,
    pointer_actions: EventWriter<'w, PointerAction>,
    camera_poses: EventWriter<'w, CameraPoseUpdate>,
    controller: Option<Res<'w, PlacementController>>,
    targets: Query<'w, 's, (&'static Transform, &'static Visibility), With<PlacementTarget>>,
}

impl RpcDispatch<'_, '_> {
    /// Apply one command and build its result payload.
    pub fn execute(&mut self, command: RpcCommand) -> serde_json::Value {
        match command {
            RpcCommand::StartSession => {
                self.session_requests.write(SessionRequest::Start);
                json!({ "success": true })
            }
            RpcCommand::EndSession => {
                self.session_requests.write(SessionRequest::End);
                json!({ "success": true })
            }
            RpcCommand::Pointer(action) => {
                self.pointer_actions.write(action);
                json!({ "success": true })
            }
            RpcCommand::CameraPose(pose) => {
                self.camera_poses.write(pose);
                json!({ "success": true })
            }
            RpcCommand::GetPlacementState => self.placement_state(),
        }
    }

    fn placement_state(&self) -> serde_json::Value {
        let (placed, dragging, yaw) = self
            .controller
            .as_ref()
            .map(|controller| {
                let state = controller.state();
                (state.placed, state.dragging, state.yaw)
            })
            .unwrap_or_default();

        let target = self.targets.single().ok();

        json!({
            "running": self.controller.is_some(),
            "placed": placed,
            "dragging": dragging,
            "yaw": yaw,
            "position": target.map(|(transform, _)| vec3_json(transform.translation)),
            "rotation": target.map(|(transform, _)| quat_json(transform.rotation)),
            "visible": target.is_some_and(|(_, visibility)| *visibility != Visibility::Hidden),
        })
    }
}

fn vec3_json(v: Vec3) -> serde_json::Value {
    json!({ "x": v.x, "y": v.y, "z": v.z })
}

fn quat_json(q: Quat) -> serde_json::Value {
    json!({ "x": q.x, "y": q.y, "z": q.z, "w": q.w })
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut dispatch: RpcDispatch,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) = handle_rpc_request(&request, &mut dispatch) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {}", parse_error);
                rpc_interface.send_notification(
                    "debug_message",
                    json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
fn handle_rpc_request(request: &RpcRequest, dispatch: &mut RpcDispatch) -> Option<RpcResponse> {
    let outcome = parse_command(request).map(|command| {
        debug!("RPC {} → {:?}", request.method, command);
        dispatch.execute(command)
    });

    if let Err(error) = &outcome {
        warn!("RPC {} rejected: {}", request.method, error.message);
    }

    // Only requests with IDs are answered, notifications are fire-and-forget.
    let id = request.id.clone()?;

    Some(match outcome {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

/// Tell the host whenever the tracked session starts or stops.
fn forward_session_state(state: Res<State<ArSession>>, mut rpc_interface: ResMut<WebRpcInterface>) {
    if !state.is_changed() {
        return;
    }

    rpc_interface.send_notification(
        "session_state_changed",
        json!({ "running": *state.get() == ArSession::Running }),
    );
}

fn forward_placement_changes(
    mut changes: EventReader<PlacementChanged>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for change in changes.read() {
        match *change {
            PlacementChanged::Placed {
                first,
                position,
                rotation,
            } => rpc_interface.send_notification(
                "object_placed",
                json!({
                    "first": first,
                    "position": vec3_json(position),
                    "rotation": quat_json(rotation),
                }),
            ),
            PlacementChanged::Rotated { yaw } => {
                rpc_interface.send_notification("object_rotated", json!({ "yaw": yaw }))
            }
        }
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window (host page).
fn send_message_to_parent<T: Serialize>(message: &T) {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize message: {}", e);
            return;
        }
    };

    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = window() else {
            error!("Window object not available");
            return;
        };
        match window.parent().ok().flatten() {
            Some(parent) => {
                if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                    error!("Failed to send message to parent: {:?}", e);
                }
            }
            None => warn!("No parent window available for message transmission"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    debug!("→ host: {}", json);
}
