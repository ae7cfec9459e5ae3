use crate::utils::rect::Rect;
use crate::utils::vector::Vector;

/// Colour in BGR order
pub type Colour = (u8, u8, u8);

pub const DEFAULT_THICKNESS: i32 = 2;
pub const DEFAULT_FONT_SCALE: f32 = 0.5;

/// Stroke settings for annotating a tracked object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    colour: Colour,
    thickness: i32,
    font_scale: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            colour: (0, 255, 0),
            thickness: DEFAULT_THICKNESS,
            font_scale: DEFAULT_FONT_SCALE,
        }
    }
}

impl DrawStyle {
    pub fn colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn font_scale(mut self, font_scale: f32) -> Self {
        self.font_scale = font_scale;
        self
    }
}

/// Receiver of drawing commands for a frame. Coordinates are not validated against the
/// frame bounds.
///
pub trait DrawingSink {
    fn draw_rect(&mut self, rect: &Rect, colour: Colour, thickness: i32);

    fn draw_line(&mut self, from: &Vector, to: &Vector, colour: Colour, thickness: i32);

    fn draw_text(
        &mut self,
        text: &str,
        position: &Vector,
        colour: Colour,
        font_scale: f32,
        thickness: i32,
    );

    /// Box with a label at its top-left corner
    fn annotate(&mut self, rect: &Rect, label: &str, style: &DrawStyle) {
        self.draw_rect(rect, style.colour, style.thickness);
        self.draw_text(
            label,
            &rect.position(),
            style.colour,
            style.font_scale,
            style.thickness,
        );
    }
}

/// Drawing command in integer pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Rect {
        top_left: (i32, i32),
        bottom_right: (i32, i32),
        colour: Colour,
        thickness: i32,
    },
    Line {
        from: (i32, i32),
        to: (i32, i32),
        colour: Colour,
        thickness: i32,
    },
    Text {
        text: String,
        origin: (i32, i32),
        colour: Colour,
        font_scale: f32,
        thickness: i32,
    },
}

/// Sink that records the commands for a renderer to replay
#[derive(Debug, Default, Clone)]
pub struct AnnotationLog {
    annotations: Vec<Annotation>,
}

impl AnnotationLog {
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Hands the recorded commands over and starts a fresh log
    pub fn take(&mut self) -> Vec<Annotation> {
        std::mem::take(&mut self.annotations)
    }
}

impl DrawingSink for AnnotationLog {
    fn draw_rect(&mut self, rect: &Rect, colour: Colour, thickness: i32) {
        let (top_left, bottom_right) = rect.to_pixel_corners();
        self.annotations.push(Annotation::Rect {
            top_left,
            bottom_right,
            colour,
            thickness,
        });
    }

    fn draw_line(&mut self, from: &Vector, to: &Vector, colour: Colour, thickness: i32) {
        self.annotations.push(Annotation::Line {
            from: from.to_pixel(),
            to: to.to_pixel(),
            colour,
            thickness,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: &Vector,
        colour: Colour,
        font_scale: f32,
        thickness: i32,
    ) {
        self.annotations.push(Annotation::Text {
            text: text.to_string(),
            origin: position.to_pixel(),
            colour,
            font_scale,
            thickness,
        });
    }
}
