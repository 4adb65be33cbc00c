//! Nearest-target geometry

/// Pointer position in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Element bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// False for the empty box of an element that is not laid out
    /// (`display: none`), whose centre would sit at the page origin.
    pub fn is_rendered(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Key of the candidate whose centre is closest to `pointer`.
///
/// Ties go to the earliest candidate. Candidates that are not rendered are
/// skipped. Returns `None` when nothing is left.
pub fn nearest<K, I>(pointer: Point, candidates: I) -> Option<K>
where
    I: IntoIterator<Item = (K, Rect)>,
{
    let mut best: Option<(K, f64)> = None;
    for (key, rect) in candidates.into_iter().filter(|(_, rect)| rect.is_rendered()) {
        let distance = pointer.distance_to(rect.center());
        match &best {
            Some((_, min)) if distance >= *min => {}
            _ => best = Some((key, distance)),
        }
    }
    best.map(|(key, _)| key)
}
