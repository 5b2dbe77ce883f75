//! Axis-aligned bounding boxes as the index sees them

/// Anything that exposes a center-based axis-aligned bounding box
///
/// The index reads these four values when a key is added or updated and
/// never stores the implementor itself.
///
/// # Example
/// ```
/// use gridindex::Extent;
///
/// struct Ship { pos: (f64, f64), hull: f64 }
///
/// impl Extent for Ship {
///     fn x(&self) -> f64 { self.pos.0 }
///     fn y(&self) -> f64 { self.pos.1 }
///     fn width(&self) -> f64 { self.hull }
///     fn height(&self) -> f64 { self.hull }
/// }
///
/// let ship = Ship { pos: (4.0, 4.0), hull: 2.0 };
/// assert_eq!(ship.min_x(), 3.0);
/// assert_eq!(ship.max_y(), 5.0);
/// ```
pub trait Extent {
    /// Center x
    fn x(&self) -> f64;
    /// Center y
    fn y(&self) -> f64;
    /// Full width (non-negative)
    fn width(&self) -> f64;
    /// Full height (non-negative)
    fn height(&self) -> f64;

    /// Left edge
    #[inline]
    fn min_x(&self) -> f64 {
        self.x() - self.width() / 2.0
    }

    /// Bottom edge
    #[inline]
    fn min_y(&self) -> f64 {
        self.y() - self.height() / 2.0
    }

    /// Right edge
    #[inline]
    fn max_x(&self) -> f64 {
        self.x() + self.width() / 2.0
    }

    /// Top edge
    #[inline]
    fn max_y(&self) -> f64 {
        self.y() + self.height() / 2.0
    }
}

impl<T: Extent + ?Sized> Extent for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }

    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }
}

/// Plain center + extents rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Center x
    pub x: f64,
    /// Center y
    pub y: f64,
    /// Full width
    pub width: f64,
    /// Full height
    pub height: f64,
}

impl Bounds {
    /// Creates a rectangle from its center and extents
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from its corners (`min_x`, `min_y`, `max_x`, `max_y`)
    ///
    /// # Example
    /// ```
    /// use gridindex::Bounds;
    /// let b = Bounds::from_corners(0.0, 0.0, 10.0, 4.0);
    /// assert_eq!(b, Bounds::new(5.0, 2.0, 10.0, 4.0));
    /// ```
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            x: (min_x + max_x) / 2.0,
            y: (min_y + max_y) / 2.0,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Copy of this rectangle with its center moved to (x, y)
    #[must_use]
    pub const fn moved_to(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Closed-interval overlap test against another rectangle
    ///
    /// Handy as the narrow-phase check after a grid query.
    pub fn overlaps<E: Extent + ?Sized>(&self, other: &E) -> bool {
        self.min_x() <= other.max_x()
            && self.max_x() >= other.min_x()
            && self.min_y() <= other.max_y()
            && self.max_y() >= other.min_y()
    }
}

impl Extent for Bounds {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    fn height(&self) -> f64 {
        self.height
    }
}
