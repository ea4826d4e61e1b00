use serde::{Deserialize, Serialize};

// === Engine -> Scene ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneMsg {
    #[serde(rename = "scene_state")]
    SceneState(SceneStateMsg),
    #[serde(rename = "contacts")]
    Contacts(ContactsMsg),
}

/// Full kinematic snapshot, broadcast at the snapshot rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneStateMsg {
    pub spheres: Vec<SphereWire>,
}

/// Collision notifications for the tick they occurred in, at most one entry
/// per sphere. The payload carries enough for the scene layer to derive
/// recolor and sound-energy responses without reaching back into the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsMsg {
    pub contacts: Vec<ContactWire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereWire {
    pub id: u32,
    pub pos: [f64; 3],
    pub vel: [f64; 3],
    pub radius: f64,
    pub base_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactWire {
    pub sphere_id: u32,
    /// Relative speed at detection for sphere contacts, own speed for wall
    /// contacts; the strongest contact wins when several touch one sphere.
    pub impact: f64,
    pub radius: f64,
    pub base_speed: f64,
}

// === Scene/UI -> Engine ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlMsg {
    #[serde(rename = "set_sphere_count")]
    SetSphereCount { count: usize },
    #[serde(rename = "set_speed_multiplier")]
    SetSpeedMultiplier { value: f64 },
    #[serde(rename = "set_paused")]
    SetPaused { paused: bool },
}

/// Round to 4 decimal places (plenty for a decorative scene, saves ~50% JSON size)
#[inline]
pub fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}
