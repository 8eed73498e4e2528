use serde::{Deserialize, Serialize};

/// Axis-aligned region of the town map, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A position on the town map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        BoundingBox {
            x,
            y,
            width,
            height,
        }
    }

    /// Lower edges are inclusive, upper edges exclusive, so regions that
    /// share an edge never claim the same point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Splits the box into `n` equal-width columns, left to right.
    pub fn split_columns(&self, n: usize) -> Vec<BoundingBox> {
        let width = self.width / n as f64;
        (0..n)
            .map(|i| BoundingBox::new(self.x + width * i as f64, self.y, width, self.height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_lower_inclusive_upper_exclusive() {
        let region = BoundingBox::new(10.0, 20.0, 30.0, 40.0);

        assert!(region.contains(Point::new(10.0, 20.0)));
        assert!(region.contains(Point::new(39.5, 59.5)));
        assert!(!region.contains(Point::new(40.0, 20.0)));
        assert!(!region.contains(Point::new(10.0, 60.0)));
        assert!(!region.contains(Point::new(9.5, 25.0)));
    }

    #[test]
    fn split_columns_tiles_the_region() {
        let region = BoundingBox::new(100.0, 0.0, 90.0, 30.0);

        let columns = region.split_columns(3);

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0], BoundingBox::new(100.0, 0.0, 30.0, 30.0));
        assert_eq!(columns[1], BoundingBox::new(130.0, 0.0, 30.0, 30.0));
        assert_eq!(columns[2], BoundingBox::new(160.0, 0.0, 30.0, 30.0));
    }

    #[test]
    fn a_seam_point_belongs_to_exactly_one_column() {
        let region = BoundingBox::new(0.0, 0.0, 200.0, 100.0);

        let columns = region.split_columns(2);
        let seam = Point::new(100.0, 50.0);

        assert_eq!(columns.iter().filter(|c| c.contains(seam)).count(), 1);
    }
}
