//! Drop-target detection from pointer geometry.
//!
//! # Responsibility
//! - Pick the droppable the active entity is currently over.
//!
//! # Invariants
//! - Pointer containment wins over proximity.
//! - Column drags only ever resolve to column droppables.
//! - Ties keep the droppable registered first.

use crate::drag::DragKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned screen rectangle; `top` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right(), self.top),
            Point::new(self.left, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }
}

/// A registered drop target.
#[derive(Debug, Clone, PartialEq)]
pub struct Droppable {
    pub id: String,
    pub kind: DragKind,
    pub rect: Rect,
}

impl Droppable {
    pub fn new(id: impl Into<String>, kind: DragKind, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            rect,
        }
    }
}

/// Returns the droppable the active entity is over, if any.
///
/// `active_rect` is the dragged item's current (translated) rectangle.
pub fn detect_collision<'a>(
    active_kind: DragKind,
    pointer: Option<Point>,
    active_rect: Rect,
    droppables: &'a [Droppable],
) -> Option<&'a Droppable> {
    let candidates: Vec<&Droppable> = droppables
        .iter()
        .filter(|droppable| active_kind == DragKind::Card || droppable.kind == DragKind::Column)
        .collect();

    if let Some(pointer) = pointer {
        let within = closest_by(
            candidates
                .iter()
                .copied()
                .filter(|droppable| droppable.rect.contains(pointer)),
            |droppable| mean_corner_distance_from_point(pointer, &droppable.rect),
        );
        if within.is_some() {
            return within;
        }
    }

    closest_by(candidates.into_iter(), |droppable| {
        mean_corner_distance(&active_rect, &droppable.rect)
    })
}

fn closest_by<'a>(
    candidates: impl Iterator<Item = &'a Droppable>,
    distance: impl Fn(&Droppable) -> f64,
) -> Option<&'a Droppable> {
    let mut best: Option<(&Droppable, f64)> = None;
    for candidate in candidates {
        let value = distance(candidate);
        match best {
            Some((_, current)) if current <= value => {}
            _ => best = Some((candidate, value)),
        }
    }
    best.map(|(droppable, _)| droppable)
}

fn mean_corner_distance(a: &Rect, b: &Rect) -> f64 {
    a.corners()
        .iter()
        .zip(b.corners().iter())
        .map(|(lhs, rhs)| lhs.distance_to(*rhs))
        .sum::<f64>()
        / 4.0
}

fn mean_corner_distance_from_point(point: Point, rect: &Rect) -> f64 {
    rect.corners()
        .iter()
        .map(|corner| corner.distance_to(point))
        .sum::<f64>()
        / 4.0
}

#[cfg(test)]
mod tests {
    use super::{detect_collision, Droppable, Point, Rect};
    use crate::drag::DragKind;

    fn layout() -> Vec<Droppable> {
        vec![
            Droppable::new("todo", DragKind::Column, Rect::new(0.0, 0.0, 200.0, 600.0)),
            Droppable::new("a", DragKind::Card, Rect::new(10.0, 40.0, 180.0, 50.0)),
            Droppable::new("b", DragKind::Card, Rect::new(10.0, 100.0, 180.0, 50.0)),
            Droppable::new("doing", DragKind::Column, Rect::new(220.0, 0.0, 200.0, 600.0)),
        ]
    }

    #[test]
    fn pointer_inside_card_prefers_card_over_enclosing_column() {
        let droppables = layout();
        let hit = detect_collision(
            DragKind::Card,
            Some(Point::new(100.0, 120.0)),
            Rect::new(60.0, 95.0, 180.0, 50.0),
            &droppables,
        )
        .unwrap();
        assert_eq!(hit.id, "b");
    }

    #[test]
    fn column_drag_ignores_card_targets() {
        let droppables = layout();
        let hit = detect_collision(
            DragKind::Column,
            Some(Point::new(100.0, 120.0)),
            Rect::new(10.0, 0.0, 200.0, 600.0),
            &droppables,
        )
        .unwrap();
        assert_eq!(hit.id, "todo");
    }

    #[test]
    fn falls_back_to_closest_corners_outside_all_targets() {
        let droppables = layout();
        let hit = detect_collision(
            DragKind::Column,
            Some(Point::new(900.0, 50.0)),
            Rect::new(400.0, 0.0, 200.0, 600.0),
            &droppables,
        )
        .unwrap();
        assert_eq!(hit.id, "doing");
    }

    #[test]
    fn no_droppables_yields_none() {
        assert!(detect_collision(DragKind::Card, None, Rect::new(0.0, 0.0, 1.0, 1.0), &[]).is_none());
    }
}
