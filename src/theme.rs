use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
    pub pitch_fill: String,
    pub pitch_line: String,
    pub marker_fill: String,
    pub marker_border: String,
    pub marker_text: String,
    pub marker_subtext: String,
    pub highlight_fill: String,
    pub highlight_ring: String,
    pub highlight_text: String,
}

impl Theme {
    /// Dark TV-graphics look, matching the reference page.
    pub fn broadcast() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            background: "#111827".to_string(),
            pitch_fill: "#3B5F3B".to_string(),
            pitch_line: "#D1E7D1".to_string(),
            marker_fill: "#1F2937".to_string(),
            marker_border: "#4ADE80".to_string(),
            marker_text: "#FFFFFF".to_string(),
            marker_subtext: "#D1D5DB".to_string(),
            highlight_fill: "#FACC15".to_string(),
            highlight_ring: "#FDE047".to_string(),
            highlight_text: "#111827".to_string(),
        }
    }

    /// High-contrast tactics-board look.
    pub fn chalkboard() -> Self {
        Self {
            font_family: "\"trebuchet ms\", verdana, arial, sans-serif".to_string(),
            font_size: 14.0,
            background: "#1A2E1A".to_string(),
            pitch_fill: "#234323".to_string(),
            pitch_line: "#F5F5F5".to_string(),
            marker_fill: "#F5F5F5".to_string(),
            marker_border: "#234323".to_string(),
            marker_text: "#111111".to_string(),
            marker_subtext: "#444444".to_string(),
            highlight_fill: "#FFD447".to_string(),
            highlight_ring: "#FFE894".to_string(),
            highlight_text: "#111111".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::broadcast()
    }
}
