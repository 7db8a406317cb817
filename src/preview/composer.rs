//! Assembles a card from its subsystems and drives them from one frame loop.

use crate::animation::scheduler::{FrameScheduler, LoopHandle, drive_slot};
use crate::border::container::BorderContainer;
use crate::border::resize::DEFAULT_RESIZE_DEBOUNCE_MS;
use crate::confetti::canvas::RecordingCanvas;
use crate::confetti::engine::{ConfettiEngine, DEFAULT_CONFETTI_SEED};
use crate::foundation::core::{FrameTime, Size};
use crate::model::card::CardConfig;
use crate::preview::scene::{CardScene, SceneCover, SceneElement, SceneFlip, SceneHeader};
use crate::reveal::flip::FlipCard;
use crate::reveal::machine::{RevealMachine, cover_background_settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewLayout {
    Plain,
    Reveal,
    Flip,
}

impl PreviewLayout {
    /// Reveal wins over flip; everything else is a plain card.
    pub fn select(config: &CardConfig) -> Self {
        if config.interactive_reveal.enabled {
            Self::Reveal
        } else if config.flip_card.enabled {
            Self::Flip
        } else {
            Self::Plain
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PreviewOptions {
    pub resize_debounce_ms: f64,
    /// Layer keyframe overlays onto ornaments; off for reduced motion.
    pub overlays: bool,
    pub viewport: Size,
    pub confetti_seed: u64,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            overlays: true,
            viewport: Size::new(1280.0, 800.0),
            confetti_seed: DEFAULT_CONFETTI_SEED,
        }
    }
}

/// Which subsystem took a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Revealed,
    Flipped,
    Ignored,
}

/// A mounted card preview.
///
/// Owns the frame scheduler and one loop slot per subsystem. After every event the loops
/// are reconciled so a subsystem runs exactly while it has work: ornaments while the border
/// shows any, the reveal and flip loops during their transitions, confetti until its burst
/// ends. Unmounting cancels everything.
#[derive(Debug)]
pub struct CardPreview {
    config: CardConfig,
    layout: PreviewLayout,
    scheduler: FrameScheduler,
    border: BorderContainer,
    reveal: Option<RevealMachine>,
    flip: Option<FlipCard>,
    confetti: ConfettiEngine<RecordingCanvas>,
    border_loop: Option<LoopHandle>,
    reveal_loop: Option<LoopHandle>,
    flip_loop: Option<LoopHandle>,
    confetti_loop: Option<LoopHandle>,
    viewport: Size,
    mounted: bool,
}

impl CardPreview {
    pub fn new(config: CardConfig, options: PreviewOptions) -> Self {
        let layout = PreviewLayout::select(&config);
        let border = BorderContainer::new(
            config.border_settings.clone(),
            options.resize_debounce_ms,
            options.overlays,
        );
        let confetti = ConfettiEngine::new(
            config.confetti.clone(),
            Some(RecordingCanvas::new(options.viewport)),
            options.confetti_seed,
        );
        let mut preview = Self {
            config,
            layout,
            scheduler: FrameScheduler::new(),
            border,
            reveal: None,
            flip: None,
            confetti,
            border_loop: None,
            reveal_loop: None,
            flip_loop: None,
            confetti_loop: None,
            viewport: options.viewport,
            mounted: false,
        };
        preview.rebuild_layout();
        preview
    }

    fn rebuild_layout(&mut self) {
        self.layout = PreviewLayout::select(&self.config);
        self.reveal = match self.layout {
            PreviewLayout::Reveal => {
                Some(RevealMachine::new(self.config.interactive_reveal.reveal_type))
            }
            _ => None,
        };
        self.flip = match self.layout {
            PreviewLayout::Flip => Some(FlipCard::new()),
            _ => None,
        };
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn layout(&self) -> PreviewLayout {
        self.layout
    }

    pub fn border(&self) -> &BorderContainer {
        &self.border
    }

    pub fn reveal(&self) -> Option<&RevealMachine> {
        self.reveal.as_ref()
    }

    pub fn flip(&self) -> Option<&FlipCard> {
        self.flip.as_ref()
    }

    pub fn confetti(&self) -> &ConfettiEngine<RecordingCanvas> {
        &self.confetti
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Loops currently registered with the scheduler.
    pub fn active_loops(&self) -> usize {
        self.scheduler.active_count()
    }

    /// Attach to a container of `container` size and start the subsystems' loops.
    #[tracing::instrument(skip(self), fields(layout = ?self.layout))]
    pub fn mount(&mut self, container: Size, now: FrameTime) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        // A fresh mount starts covered and on the front face.
        self.rebuild_layout();
        self.border
            .observe_size(Ok::<_, std::convert::Infallible>(container), now);
        self.border.set_settings(self.config.border_settings.clone(), now);
        self.confetti.start(now);
        self.reconcile_loops(now);
        tracing::debug!(loops = self.active_loops(), "preview mounted");
    }

    #[tracing::instrument(skip(self))]
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        for slot in [
            &mut self.border_loop,
            &mut self.reveal_loop,
            &mut self.flip_loop,
            &mut self.confetti_loop,
        ] {
            if let Some(handle) = slot.take() {
                self.scheduler.cancel(handle);
            }
        }
        self.confetti.stop();
        tracing::debug!("preview unmounted");
    }

    /// Replace the card data, keeping animation start times of surviving ornaments.
    pub fn update_config(&mut self, config: CardConfig, now: FrameTime) {
        let layout_changed = PreviewLayout::select(&config) != self.layout
            || config.interactive_reveal.reveal_type
                != self.config.interactive_reveal.reveal_type;
        let confetti_changed = config.confetti != self.config.confetti;
        self.config = config;
        self.border.set_settings(self.config.border_settings.clone(), now);
        if layout_changed {
            self.rebuild_layout();
        }
        if confetti_changed {
            self.confetti.set_settings(self.config.confetti.clone(), now);
            if let Some(handle) = self.confetti_loop.take() {
                self.scheduler.cancel(handle);
            }
        }
        self.reconcile_loops(now);
    }

    /// Route a click on the card to the active layout.
    pub fn click(&mut self, now: FrameTime) -> ClickOutcome {
        let outcome = match (self.reveal.as_mut(), self.flip.as_mut()) {
            (Some(reveal), _) => {
                if reveal.click(now) {
                    ClickOutcome::Revealed
                } else {
                    ClickOutcome::Ignored
                }
            }
            (None, Some(flip)) => {
                flip.click(now);
                ClickOutcome::Flipped
            }
            (None, None) => ClickOutcome::Ignored,
        };
        self.reconcile_loops(now);
        outcome
    }

    pub fn pointer_enter(&mut self, element_id: &str) {
        self.border.pointer_enter(element_id);
    }

    pub fn pointer_leave(&mut self) {
        self.border.pointer_leave();
    }

    pub fn mark_image_failed(&mut self, element_id: &str) {
        self.border.mark_image_failed(element_id);
    }

    /// Report a new container measurement; it commits after the debounce period.
    pub fn resize_container<E>(&mut self, measurement: Result<Size, E>, now: FrameTime)
    where
        E: std::fmt::Display,
    {
        self.border.observe_size(measurement, now);
    }

    pub fn resize_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.confetti.resize(viewport);
    }

    /// Advance every active loop by one frame.
    pub fn tick(&mut self, now: FrameTime) {
        if !self.mounted {
            return;
        }
        if self.border_loop.is_some() {
            drive_slot(&mut self.scheduler, &mut self.border_loop, &mut self.border, now);
        } else {
            self.border.poll_resize(now);
        }
        if let Some(reveal) = self.reveal.as_mut() {
            drive_slot(&mut self.scheduler, &mut self.reveal_loop, reveal, now);
        }
        if let Some(flip) = self.flip.as_mut() {
            drive_slot(&mut self.scheduler, &mut self.flip_loop, flip, now);
        }
        drive_slot(
            &mut self.scheduler,
            &mut self.confetti_loop,
            &mut self.confetti,
            now,
        );
        self.reconcile_loops(now);
    }

    fn reconcile_loops(&mut self, now: FrameTime) {
        let mounted = self.mounted;
        let border_wants = mounted && self.border.wants_frames();
        let reveal_wants = mounted && self.reveal.as_ref().is_some_and(|r| r.is_animating(now));
        let flip_wants = mounted && self.flip.as_ref().is_some_and(|f| f.is_animating(now));
        let confetti_wants = mounted && self.confetti.wants_frames();

        let scheduler = &mut self.scheduler;
        ensure_loop(scheduler, &mut self.border_loop, border_wants, "border");
        ensure_loop(scheduler, &mut self.reveal_loop, reveal_wants, "reveal");
        ensure_loop(scheduler, &mut self.flip_loop, flip_wants, "flip");
        ensure_loop(scheduler, &mut self.confetti_loop, confetti_wants, "confetti");
    }

    /// Declarative snapshot for renderers. Reads committed state only.
    pub fn scene(&self, now: FrameTime) -> CardScene {
        let config = &self.config;
        let elements = self
            .border
            .elements()
            .iter()
            .filter(|el| !self.border.is_hidden(&el.id))
            .filter_map(|el| {
                self.border.frame_for(&el.id).map(|frame| SceneElement {
                    id: el.id.clone(),
                    kind: el.kind,
                    content: el.content.clone(),
                    frame: frame.clone(),
                })
            })
            .collect();

        let cover = self.reveal.as_ref().and_then(|reveal| {
            let frame = reveal.cover_at(now);
            if frame.is_gone() {
                return None;
            }
            let reveal_settings = &config.interactive_reveal;
            Some(SceneCover {
                frame,
                background: cover_background_settings(
                    &reveal_settings.cover_background.clone().unwrap_or_default(),
                ),
                back_content: reveal_settings.back_content.clone(),
                hint: reveal.hint(),
            })
        });

        let flip = self.flip.as_ref().map(|flip| SceneFlip {
            rotation_deg: flip.rotation_at(now),
            face: flip.visible_face(now),
            back_content: config.flip_card.back_content.clone(),
            hint: flip.hint(now),
        });

        CardScene {
            layout: self.layout,
            size: self.border.size(),
            viewport: self.viewport,
            background: config.background_settings.clone(),
            border: self.border.border_frame(),
            content_padding: self.border.content_padding(),
            content_visible: self.reveal.as_ref().is_none_or(RevealMachine::content_visible),
            header: SceneHeader {
                emoji: config.event_emoji(),
                event_name: config.event_name(),
                text: config.header_text.clone(),
            },
            texts: config.texts.clone(),
            media: config.media.iter().map(|m| m.url.clone()).collect(),
            sender_name: config.sender_name.clone(),
            elements,
            emojis: config.emojis.clone(),
            cover,
            flip,
            confetti: self
                .confetti
                .canvas()
                .map(|c| c.commands().to_vec())
                .unwrap_or_default(),
            audio_url: config.audio_url.clone(),
        }
    }
}

fn ensure_loop(
    scheduler: &mut FrameScheduler,
    slot: &mut Option<LoopHandle>,
    wanted: bool,
    label: &'static str,
) {
    match (*slot, wanted) {
        (None, true) => *slot = Some(scheduler.request(label)),
        (Some(handle), false) => {
            scheduler.cancel(handle);
            *slot = None;
        }
        (Some(handle), true) if !scheduler.is_active(handle) => {
            *slot = Some(scheduler.request(label));
        }
        _ => {}
    }
}

impl Drop for CardPreview {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/composer.rs"]
mod tests;
