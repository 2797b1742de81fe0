use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// 2D drawing primitives the particle field needs. Coordinates are canvas-local.
pub(in crate::app) trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
}

pub(in crate::app) struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub(in crate::app) fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, position: Pos2) -> Pos2 {
        self.rect.min + position.to_vec2()
    }

    pub(in crate::app) fn size(&self) -> Vec2 {
        self.rect.size()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color),
        );
    }
}

#[cfg(test)]
pub(in crate::app) mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(in crate::app) enum DrawCall {
        Clear,
        Circle { center: Pos2, radius: f32, alpha: u8 },
        Line { from: Pos2, to: Pos2, width: f32, alpha: u8 },
    }

    #[derive(Default)]
    pub(in crate::app) struct RecordingSurface {
        pub(in crate::app) calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub(in crate::app) fn lines(&self) -> impl Iterator<Item = &DrawCall> {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Line { .. }))
        }

        pub(in crate::app) fn circles(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| matches!(call, DrawCall::Circle { .. }))
                .count()
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                alpha: color.a(),
            });
        }

        fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
            self.calls.push(DrawCall::Line {
                from,
                to,
                width,
                alpha: color.a(),
            });
        }
    }
}
