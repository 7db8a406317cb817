use crate::border::frame::BorderFrame;
use crate::confetti::canvas::RectCommand;
use crate::decor::renderer::ElementFrame;
use crate::foundation::core::Size;
use crate::model::card::{BackContent, BackgroundSettings, ElementKind, FloatingEmoji, TextBlock};
use crate::preview::composer::PreviewLayout;
use crate::reveal::flip::CardFace;
use crate::reveal::machine::{CoverFrame, RevealHint};

/// Declarative snapshot of a card at one instant. Renderers read this and nothing else.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardScene {
    pub layout: PreviewLayout,
    /// Measured card container.
    pub size: Size,
    /// Viewport the confetti canvas covers.
    pub viewport: Size,
    pub background: BackgroundSettings,
    pub border: Option<BorderFrame>,
    pub content_padding: f64,
    /// `false` while a reveal cover still hides the card.
    pub content_visible: bool,
    pub header: SceneHeader,
    pub texts: Vec<TextBlock>,
    pub media: Vec<String>,
    pub sender_name: String,
    pub elements: Vec<SceneElement>,
    pub emojis: Vec<FloatingEmoji>,
    pub cover: Option<SceneCover>,
    pub flip: Option<SceneFlip>,
    pub confetti: Vec<RectCommand>,
    pub audio_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneHeader {
    pub emoji: String,
    pub event_name: String,
    pub text: Option<TextBlock>,
}

/// An ornament with its computed frame. Elements without a frame yet are left out.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneElement {
    pub id: String,
    pub kind: ElementKind,
    pub content: String,
    pub frame: ElementFrame,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneCover {
    pub frame: CoverFrame,
    pub background: BackgroundSettings,
    pub back_content: BackContent,
    pub hint: Option<RevealHint>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneFlip {
    pub rotation_deg: f64,
    pub face: CardFace,
    pub back_content: BackContent,
    pub hint: &'static str,
}

impl CardScene {
    /// Text blocks on the side of the card facing the viewer.
    pub fn visible_texts(&self) -> &[TextBlock] {
        match &self.flip {
            Some(flip) if flip.face == CardFace::Back => &flip.back_content.texts,
            _ => &self.texts,
        }
    }
}
