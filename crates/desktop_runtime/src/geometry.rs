//! Pointer-to-geometry math for dragging and resizing desktop surfaces.
//!
//! Everything here is pure: callers pass the anchor captured on pointer-down plus the current
//! pointer and get back the geometry to commit. Nothing in this module touches the stores.

use crate::model::{Point, PointerPosition, Size, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn from_parts(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }

    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Which side of an axis a handle drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    /// The axis is untouched by the handle.
    None,
    /// Left or top: the far edge stays anchored while the origin moves.
    Start,
    /// Right or bottom: the origin stays anchored.
    End,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn horizontal(self) -> EdgeSide {
        match self {
            Self::West | Self::NorthWest | Self::SouthWest => EdgeSide::Start,
            Self::East | Self::NorthEast | Self::SouthEast => EdgeSide::End,
            Self::North | Self::South => EdgeSide::None,
        }
    }

    pub fn vertical(self) -> EdgeSide {
        match self {
            Self::North | Self::NorthEast | Self::NorthWest => EdgeSide::Start,
            Self::South | Self::SouthEast | Self::SouthWest => EdgeSide::End,
            Self::East | Self::West => EdgeSide::None,
        }
    }

    pub fn css_token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

/// Offset between the pointer and a surface origin, captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    offset: Point,
}

impl DragAnchor {
    pub fn new(pointer: PointerPosition, origin: Point) -> Self {
        Self {
            offset: Point::new(pointer.x - origin.x, pointer.y - origin.y),
        }
    }

    pub fn offset(self) -> Point {
        self.offset
    }

    /// Origin that keeps the grabbed point under `pointer`, before clamping.
    pub fn candidate(self, pointer: PointerPosition) -> Point {
        Point::new(pointer.x - self.offset.x, pointer.y - self.offset.y)
    }
}

/// Pointer and geometry captured when a resize starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAnchor {
    pub pointer: PointerPosition,
    pub rect: WindowRect,
}

impl ResizeAnchor {
    pub fn new(pointer: PointerPosition, position: Point, size: Size) -> Self {
        Self {
            pointer,
            rect: WindowRect::from_parts(position, size),
        }
    }
}

/// Clamps one axis of an origin so a span of `len` stays inside `[0, bound]`.
///
/// When the span is larger than the bound the origin pins to zero.
pub fn clamp_axis(value: i32, len: i32, bound: Option<i32>) -> i32 {
    let value = match bound {
        Some(bound) => value.min((bound - len).max(0)),
        None => value,
    };
    value.max(0)
}

/// Origin to commit for a drag of a `size`-sized surface when the pointer is at `pointer`.
pub fn drag_position(
    anchor: DragAnchor,
    pointer: PointerPosition,
    size: Size,
    bounds: Option<Viewport>,
) -> Point {
    let candidate = anchor.candidate(pointer);
    Point::new(
        clamp_axis(candidate.x, size.width, bounds.map(Viewport::width)),
        clamp_axis(candidate.y, size.height, bounds.map(Viewport::height)),
    )
}

/// Geometry to commit for a resize through `edge` when the pointer is at `pointer`.
///
/// Each axis is resolved independently. Dimensions never drop below `min`; once a dimension is
/// floored the origin on that axis stops moving, so the anchored opposite edge never drifts.
pub fn resize_rect(
    anchor: ResizeAnchor,
    edge: ResizeEdge,
    pointer: PointerPosition,
    min: Size,
    bounds: Option<Viewport>,
) -> WindowRect {
    let start = anchor.rect;
    let dx = pointer.x - anchor.pointer.x;
    let dy = pointer.y - anchor.pointer.y;

    let (x, w) = resize_axis(
        edge.horizontal(),
        start.x,
        start.w,
        dx,
        min.width,
        bounds.map(Viewport::width),
    );
    let (y, h) = resize_axis(
        edge.vertical(),
        start.y,
        start.h,
        dy,
        min.height,
        bounds.map(Viewport::height),
    );

    WindowRect { x, y, w, h }
}

fn resize_axis(
    side: EdgeSide,
    origin: i32,
    len: i32,
    delta: i32,
    min_len: i32,
    bound: Option<i32>,
) -> (i32, i32) {
    match side {
        EdgeSide::None => (origin, len),
        EdgeSide::End => {
            let mut next = len + delta;
            if let Some(bound) = bound {
                next = next.min(bound - origin);
            }
            (origin, next.max(min_len))
        }
        EdgeSide::Start => {
            // A surface already overhanging the work area is pulled back inside it.
            let far = match bound {
                Some(bound) => (origin + len).min(bound),
                None => origin + len,
            };
            let next_origin = (origin + delta).min(far - min_len).max(0);
            (next_origin, (far - next_origin).max(min_len))
        }
    }
}
