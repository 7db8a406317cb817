use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::wrap_percent;

pub(crate) const DEFAULT_ELEMENT_SIZE: f64 = 24.0;
pub(crate) const MAX_CONFETTI_DENSITY: u32 = 5_000;

/// Everything the renderer needs to draw one card.
///
/// This is the subset of the editor's form state that the preview reads. It is also the
/// payload persisted by [`crate::CardRepository`], so unknown or missing fields fall back
/// to defaults instead of failing the load.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfig {
    /// Preset event key (`birthday`, `anniversary`, ...) or `custom`.
    pub event_type: String,
    /// Event label when `event_type == "custom"`.
    pub custom_event_name: Option<String>,
    /// Event emoji when `event_type == "custom"`.
    pub custom_event_emoji: Option<String>,
    pub sender_name: String,
    pub receiver_name: String,
    /// Optional header line drawn above the texts.
    pub header_text: Option<TextBlock>,
    /// Body text blocks in display order.
    pub texts: Vec<TextBlock>,
    /// Uploaded or linked media.
    pub media: Vec<MediaItem>,
    /// Free-floating emojis layered over the card.
    pub emojis: Vec<FloatingEmoji>,
    pub background_settings: BackgroundSettings,
    pub border_settings: BorderSettings,
    pub interactive_reveal: RevealSettings,
    pub flip_card: FlipCardSettings,
    pub confetti: ConfettiSettings,
    pub audio_url: Option<String>,
    pub frame_style: Option<String>,
}

impl CardConfig {
    pub fn from_json_str(s: &str) -> CardResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read card config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Human event label used for titles and slugs.
    pub fn event_name(&self) -> String {
        if self.event_type == "custom" {
            return self
                .custom_event_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("custom")
                .to_string();
        }
        if self.event_type.is_empty() {
            "event".to_string()
        } else {
            self.event_type.clone()
        }
    }

    pub fn event_emoji(&self) -> String {
        if self.event_type == "custom" {
            if let Some(e) = self.custom_event_emoji.as_deref().filter(|s| !s.is_empty()) {
                return e.to_string();
            }
        }
        "🎉".to_string()
    }

    pub fn validate(&self) -> CardResult<()> {
        self.border_settings.validate()?;
        self.confetti.validate()?;
        Ok(())
    }
}

/// A styled block of text.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlock {
    pub id: String,
    pub content: String,
    pub style: TextStyle,
    /// Entrance animation tag (`fade`, `slide`, `zoom`, `bounce`).
    pub animation: String,
    /// Keep pulsing after the entrance animation.
    pub continuous_animation: bool,
}

/// CSS-like text styling, kept as strings as authored in the editor.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub color: Option<String>,
    pub text_align: Option<String>,
    pub font_family: Option<String>,
}

impl TextStyle {
    /// Font size in pixels, parsed from values like `"32px"` or `"18"`.
    pub fn font_size_px(&self) -> Option<f64> {
        let raw = self.font_size.as_deref()?.trim();
        let raw = raw.strip_suffix("px").unwrap_or(raw);
        raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaItem {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// An emoji placed freely over the card at a percentage position.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloatingEmoji {
    pub id: String,
    pub emoji: String,
    pub position: PercentPosition,
    pub size: f64,
    pub animation: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PercentPosition {
    pub x: f64,
    pub y: f64,
}

/// Page background behind the card.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundSettings {
    pub color: Option<String>,
    pub gradient: Option<GradientSpec>,
    pub image_url: Option<String>,
    /// Image opacity in `[0, 100]`.
    pub image_opacity: Option<f64>,
    pub pattern: Option<PatternSpec>,
    pub animation: Option<BackgroundAnimation>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradientSpec {
    pub enabled: bool,
    pub colors: Vec<String>,
    /// CSS angle such as `"135deg"`.
    pub direction: String,
}

impl GradientSpec {
    /// Gradient angle in degrees; CSS default is 180 (top to bottom).
    pub fn angle_deg(&self) -> f64 {
        self.direction
            .trim()
            .strip_suffix("deg")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(180.0)
    }

    pub fn is_usable(&self) -> bool {
        self.enabled && self.colors.len() >= 2
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternSpec {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub opacity: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundAnimation {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub speed: f64,
    pub intensity: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Image,
    #[default]
    Emoji,
}

/// Per-element animation. Unknown tags deserialize as [`ElementAnimation::None`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementAnimation {
    Float,
    RotateCw,
    RotateCcw,
    Blink,
    Pop,
    Travel,
    Pulse,
    Bounce,
    Shake,
    Spin,
    SpinCcw,
    #[default]
    #[serde(other)]
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowDirection {
    #[default]
    TopDown,
    DownTop,
    LeftRight,
    RightLeft,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderSide {
    #[default]
    All,
    Top,
    Right,
    Bottom,
    Left,
}

/// One ornament sitting on the border line.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecorativeElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Emoji glyph or image URL.
    pub content: String,
    /// Start offset along the perimeter in percent; wrapped into `[0, 100)` before use.
    pub position: f64,
    /// Rendered diameter in pixels; `0` means the default of 24.
    pub size: f64,
    pub animation: ElementAnimation,
    /// Seconds per cycle override.
    pub rotate_speed: Option<f64>,
    /// Seconds per lap override for `travel`.
    pub travel_speed: Option<f64>,
    pub flow_direction: FlowDirection,
    pub border_side: BorderSide,
}

impl DecorativeElement {
    pub fn emoji(id: impl Into<String>, glyph: impl Into<String>, position: f64) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Emoji,
            content: glyph.into(),
            position,
            ..Self::default()
        }
    }

    pub fn size_px(&self) -> f64 {
        if self.size.is_finite() && self.size > 0.0 {
            self.size
        } else {
            DEFAULT_ELEMENT_SIZE
        }
    }

    pub fn start_percent(&self) -> f64 {
        wrap_percent(self.position)
    }

    /// Seconds-per-cycle override relevant to this element's animation.
    pub fn speed_override(&self) -> Option<f64> {
        let speed = match self.animation {
            ElementAnimation::Travel => self.travel_speed.or(self.rotate_speed),
            _ => self.rotate_speed,
        };
        speed.filter(|s| s.is_finite() && *s != 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

fn default_primary_color() -> String {
    "#7c3aed".to_string()
}

/// Frame stroke plus the ornaments riding on it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderSettings {
    pub enabled: bool,
    pub style: BorderStyle,
    /// Stroke thickness in pixels; also the centerline inset (`width / 2`) for geometry.
    pub width: f64,
    /// Outer corner radius in pixels.
    pub radius: f64,
    pub primary_color: String,
    pub secondary_color: Option<String>,
    pub decorative_elements: Vec<DecorativeElement>,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            style: BorderStyle::Solid,
            width: 4.0,
            radius: 12.0,
            primary_color: default_primary_color(),
            secondary_color: None,
            decorative_elements: Vec::new(),
        }
    }
}

impl BorderSettings {
    /// Two distinct colors mean the stroke is painted with a linear gradient.
    pub fn has_gradient(&self) -> bool {
        match self.secondary_color.as_deref() {
            Some(second) => {
                !second.is_empty() && !self.primary_color.is_empty() && second != self.primary_color
            }
            None => false,
        }
    }

    /// Painted stroke width; zero when the border is disabled.
    pub fn stroke_width(&self) -> f64 {
        if self.enabled && self.width.is_finite() {
            self.width.max(0.0)
        } else {
            0.0
        }
    }

    /// Stroke width used to place ornaments. A zero width still places them on a 1px line.
    pub fn geometry_width(&self) -> f64 {
        if self.width.is_finite() && self.width > 0.0 {
            self.width
        } else {
            1.0
        }
    }

    pub fn validate(&self) -> CardResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(CardError::validation("border width must be finite and >= 0"));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(CardError::validation("border radius must be finite and >= 0"));
        }
        let mut seen = BTreeSet::new();
        for el in &self.decorative_elements {
            if el.id.is_empty() {
                return Err(CardError::validation("decorative element id must be non-empty"));
            }
            if !seen.insert(el.id.as_str()) {
                return Err(CardError::validation(format!(
                    "duplicate decorative element id '{}'",
                    el.id
                )));
            }
            if !el.size.is_finite() || el.size < 0.0 {
                return Err(CardError::validation(format!(
                    "decorative element '{}' has invalid size",
                    el.id
                )));
            }
        }
        Ok(())
    }
}

/// Exit animation of the reveal cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealType {
    #[default]
    Flip,
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeRight,
    Door,
    Lock,
    Vanish,
    Zoom,
    Curtain,
}

impl RevealType {
    pub const ALL: [RevealType; 10] = [
        RevealType::Flip,
        RevealType::SwipeUp,
        RevealType::SwipeDown,
        RevealType::SwipeLeft,
        RevealType::SwipeRight,
        RevealType::Door,
        RevealType::Lock,
        RevealType::Vanish,
        RevealType::Zoom,
        RevealType::Curtain,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverKind {
    #[default]
    Color,
    Gradient,
    Image,
}

/// Background of the reveal cover face.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverBackground {
    #[serde(rename = "type")]
    pub kind: CoverKind,
    pub color: Option<String>,
    pub gradient: Option<GradientSpec>,
    pub image: Option<String>,
    /// Image opacity in `[0, 1]`.
    pub image_opacity: Option<f64>,
    pub animation: Option<BackgroundAnimation>,
    pub pattern: Option<PatternSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackContent {
    pub header_text: Option<String>,
    pub texts: Vec<TextBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealSettings {
    pub enabled: bool,
    pub reveal_type: RevealType,
    pub cover_background: Option<CoverBackground>,
    /// Messages shown on the cover before it is opened.
    pub back_content: BackContent,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlipCardSettings {
    pub enabled: bool,
    pub back_content: BackContent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfettiMode {
    #[default]
    Once,
    Continuous,
}

pub(crate) fn default_confetti_colors() -> Vec<String> {
    ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfettiSettings {
    pub enabled: bool,
    pub colors: Vec<String>,
    /// Number of particles alive at once.
    pub density: u32,
    /// Seconds before a `once` burst stops.
    pub duration: f64,
    pub mode: ConfettiMode,
}

impl Default for ConfettiSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            colors: default_confetti_colors(),
            density: 150,
            duration: 3.0,
            mode: ConfettiMode::Once,
        }
    }
}

impl ConfettiSettings {
    pub fn validate(&self) -> CardResult<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.colors.is_empty() {
            return Err(CardError::validation("confetti colors must be non-empty"));
        }
        if self.density > MAX_CONFETTI_DENSITY {
            return Err(CardError::validation(format!(
                "confetti density must be <= {MAX_CONFETTI_DENSITY}"
            )));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(CardError::validation("confetti duration must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/card.rs"]
mod tests;
