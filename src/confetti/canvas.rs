use crate::foundation::core::{Point, Size};

/// Immediate-mode drawing surface the confetti engine paints on.
pub trait Canvas2d {
    fn size(&self) -> Size;
    fn resize(&mut self, size: Size);
    fn clear(&mut self);
    /// Fill a `size` rectangle centered on `center`, rotated by `rotation_rad` about it.
    fn fill_rotated_rect(&mut self, center: Point, size: Size, rotation_rad: f64, color: &str);
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RectCommand {
    pub center: Point,
    pub size: Size,
    pub rotation_rad: f64,
    pub color: String,
}

/// Canvas that keeps the commands drawn since the last clear.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<RectCommand>,
    clears: u64,
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[RectCommand] {
        &self.commands
    }

    /// Number of times the canvas has been cleared.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }
}

impl Canvas2d for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        // Resizing a canvas element wipes its bitmap.
        self.size = size;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_rotated_rect(&mut self, center: Point, size: Size, rotation_rad: f64, color: &str) {
        self.commands.push(RectCommand {
            center,
            size,
            rotation_rad,
            color: color.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/confetti/canvas.rs"]
mod tests;
