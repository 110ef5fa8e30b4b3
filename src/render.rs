//! Renderer interface
//!
//! The simulation never touches a drawing surface directly. It issues these calls
//! against whatever surface the host provides.

use serde::Serialize;

use crate::config::Color;

/// Drawing surface consumed by the simulation clock
pub trait Renderer {
    /// Whether the surface can accept draw calls yet
    fn is_ready(&self) -> bool {
        true
    }

    /// Wipe the whole surface
    fn clear(&mut self);

    /// Outline a dot's bounding box
    fn draw_dot(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    /// Stroke a line between two dot centers
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, opacity: f64);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum RenderCommand {
    Clear,
    Dot {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        opacity: f64,
    },
}

/// Renderer that records every command issued since the last clear
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandBuffer {
    pub commands: Vec<RenderCommand>,
    /// Number of frames started (clears issued)
    pub frames: u64,
    /// Reported by `is_ready`; lets hosts simulate a surface that is not up yet
    #[serde(skip)]
    pub unavailable: bool,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dot_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Dot { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Line { .. }))
            .count()
    }
}

impl Renderer for CommandBuffer {
    fn is_ready(&self) -> bool {
        !self.unavailable
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(RenderCommand::Clear);
        self.frames += 1;
    }

    fn draw_dot(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(RenderCommand::Dot {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, opacity: f64) {
        self.commands.push(RenderCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            opacity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_frame() {
        let mut buffer = CommandBuffer::new();
        buffer.clear();
        buffer.draw_dot(1.0, 2.0, 4.0, 4.0, Color::WHITE);
        buffer.draw_line(0.0, 0.0, 3.0, 4.0, Color::WHITE, 0.5);
        assert_eq!(buffer.dot_count(), 1);
        assert_eq!(buffer.line_count(), 1);

        buffer.clear();
        assert_eq!(buffer.commands, vec![RenderCommand::Clear]);
        assert_eq!(buffer.frames, 2);
    }

    #[test]
    fn test_serializes_tagged() {
        let mut buffer = CommandBuffer::new();
        buffer.clear();
        let json = serde_json::to_string(&buffer.commands).unwrap();
        assert_eq!(json, r#"[{"op":"clear"}]"#);
    }
}
