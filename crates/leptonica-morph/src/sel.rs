//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element is a small grid of HIT / MISS / DONT_CARE cells
//! with a designated origin. It defines the neighborhood a morphological
//! operator probes at every pixel.

use crate::error::{MorphError, MorphResult};

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - must match foreground (set pixels)
    Hit = 1,
    /// Miss - must match background (unset pixels)
    Miss = 2,
}

/// Structuring Element (SEL)
///
/// Defines the neighborhood pattern for morphological operations.
/// The origin (cx, cy) is the reference point for the operation.
#[derive(Debug, Clone)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
    name: Option<String>,
}

impl Sel {
    /// Create a new empty (all don't-care) structuring element, with the
    /// origin at `(width/2, height/2)` (integer division), matching
    /// Leptonica's default brick origin convention.
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "sel dimensions must be nonzero, got {width}x{height}"
            )));
        }
        Ok(Sel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![SelElement::DontCare; (width * height) as usize],
            name: None,
        })
    }

    /// Create a rectangular "brick" structuring element with all hits.
    ///
    /// # See also
    ///
    /// C Leptonica: `selCreateBrick()` in `sel1.c`
    pub fn create_brick(width: u32, height: u32) -> MorphResult<Self> {
        let mut sel = Self::new(width, height)?;
        sel.data.fill(SelElement::Hit);
        Ok(sel)
    }

    /// Create a square structuring element with all hits.
    pub fn create_square(size: u32) -> MorphResult<Self> {
        Self::create_brick(size, size)
    }

    /// Create a horizontal line structuring element.
    pub fn create_horizontal(length: u32) -> MorphResult<Self> {
        Self::create_brick(length, 1)
    }

    /// Create a vertical line structuring element.
    pub fn create_vertical(length: u32) -> MorphResult<Self> {
        Self::create_brick(1, length)
    }

    /// Create a cross (+) structuring element: hits along the full middle
    /// row and column of a `size x size` grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or even (a cross needs a unique
    /// center row/column).
    pub fn create_cross(size: u32) -> MorphResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(MorphError::InvalidSel(
                "cross sel size must be odd and nonzero".to_string(),
            ));
        }
        let mut sel = Self::new(size, size)?;
        let c = size / 2;
        for x in 0..size {
            sel.set_element(x, c, SelElement::Hit);
        }
        for y in 0..size {
            sel.set_element(c, y, SelElement::Hit);
        }
        Ok(sel)
    }

    /// Create a diamond structuring element (L1 ball of the given radius).
    pub fn create_diamond(radius: u32) -> MorphResult<Self> {
        let size = 2 * radius + 1;
        let mut sel = Self::new(size, size)?;
        let c = radius as i32;
        let r = radius as i32;
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                if (x - c).abs() + (y - c).abs() <= r {
                    sel.set_element(x as u32, y as u32, SelElement::Hit);
                }
            }
        }
        Ok(sel)
    }

    /// Create a disk (approximate circle) structuring element (L2 ball of
    /// the given radius).
    pub fn create_disk(radius: u32) -> MorphResult<Self> {
        let size = 2 * radius + 1;
        let mut sel = Self::new(size, size)?;
        let c = radius as i32;
        let r2 = (radius * radius) as i32;
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                let (dx, dy) = (x - c, y - c);
                if dx * dx + dy * dy <= r2 {
                    sel.set_element(x as u32, y as u32, SelElement::Hit);
                }
            }
        }
        Ok(sel)
    }

    /// Create a structuring element from a string pattern.
    ///
    /// Rows are separated by newlines and must all have the same length.
    /// `'x'`/`'X'` is a hit, `'o'`/`'O'` is a miss, `'.'` or a space is
    /// don't-care.
    ///
    /// # Arguments
    ///
    /// * `pattern` - multi-line pattern string
    /// * `origin_x`, `origin_y` - coordinates of the origin within the pattern
    pub fn from_string(pattern: &str, origin_x: u32, origin_y: u32) -> MorphResult<Self> {
        let lines: Vec<&str> = pattern.lines().filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(MorphError::InvalidSel("empty sel pattern".to_string()));
        }

        let height = lines.len() as u32;
        let width = lines[0].chars().count() as u32;
        if lines.iter().any(|l| l.chars().count() as u32 != width) {
            return Err(MorphError::InvalidSel(
                "sel pattern rows must all have the same length".to_string(),
            ));
        }
        if origin_x >= width || origin_y >= height {
            return Err(MorphError::InvalidSel(format!(
                "origin ({origin_x}, {origin_y}) is outside a {width}x{height} pattern"
            )));
        }

        let mut data = Vec::with_capacity((width * height) as usize);
        for line in &lines {
            for ch in line.chars() {
                let elem = match ch {
                    'x' | 'X' => SelElement::Hit,
                    'o' | 'O' => SelElement::Miss,
                    '.' | ' ' => SelElement::DontCare,
                    other => {
                        return Err(MorphError::InvalidSel(format!(
                            "unrecognized sel pattern character '{other}'"
                        )));
                    }
                };
                data.push(elem);
            }
        }

        Ok(Sel {
            width,
            height,
            cx: origin_x,
            cy: origin_y,
            data,
            name: None,
        })
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.cx
    }

    /// Get the origin y coordinate
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.cy
    }

    /// Set the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `(cx, cy)` falls outside the sel's grid.
    pub fn set_origin(&mut self, cx: u32, cy: u32) -> MorphResult<()> {
        if cx >= self.width || cy >= self.height {
            return Err(MorphError::InvalidSel(format!(
                "origin ({cx}, {cy}) is outside a {}x{} sel",
                self.width, self.height
            )));
        }
        self.cx = cx;
        self.cy = cy;
        Ok(())
    }

    /// Get the name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Get an element at (x, y)
    #[inline]
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set an element at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if `x >= width()` or `y >= height()`.
    #[inline]
    pub fn set_element(&mut self, x: u32, y: u32, elem: SelElement) {
        self.data[(y * self.width + x) as usize] = elem;
    }

    /// Get raw element data
    pub fn data(&self) -> &[SelElement] {
        &self.data
    }

    /// Count the number of hit elements
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Hit).count()
    }

    /// Count the number of miss elements
    pub fn miss_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Miss).count()
    }

    /// Create the reflected (180-degree rotated) SEL.
    ///
    /// Used to turn a dilation SEL into the corresponding erosion SEL (and
    /// vice versa) for operations defined in terms of each other, per the
    /// hit-miss duality `erode(b) == ~dilate(~a, reflect(b))`.
    pub fn reflect(&self) -> Self {
        let mut data = vec![SelElement::DontCare; self.data.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let src = self.data[(y * self.width + x) as usize];
                let rx = self.width - 1 - x;
                let ry = self.height - 1 - y;
                data[(ry * self.width + rx) as usize] = src;
            }
        }
        Sel {
            width: self.width,
            height: self.height,
            cx: self.width - 1 - self.cx,
            cy: self.height - 1 - self.cy,
            data,
            name: self.name.clone(),
        }
    }

    /// Rotate the SEL by 90 degrees clockwise, `rotation` times (0-3).
    pub fn rotate_orth(&self, rotation: u32) -> Self {
        let mut result = self.clone();
        for _ in 0..(rotation % 4) {
            result = result.rotate_90();
        }
        result
    }

    fn rotate_90(&self) -> Self {
        let (w, h) = (self.width, self.height);
        let mut data = vec![SelElement::DontCare; (w * h) as usize];
        for y in 0..h {
            for x in 0..w {
                let src = self.data[(y * w + x) as usize];
                let nx = h - 1 - y;
                let ny = x;
                data[(ny * h + nx) as usize] = src;
            }
        }
        Sel {
            width: h,
            height: w,
            cx: h - 1 - self.cy,
            cy: self.cx,
            data,
            name: self.name.clone(),
        }
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data.iter().enumerate().filter_map(move |(idx, &elem)| {
            if elem == SelElement::Hit {
                let x = (idx as u32 % width) as i32;
                let y = (idx as u32 / width) as i32;
                Some((x - cx, y - cy))
            } else {
                None
            }
        })
    }

    /// Iterate over miss positions relative to origin
    pub fn miss_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data.iter().enumerate().filter_map(move |(idx, &elem)| {
            if elem == SelElement::Miss {
                let x = (idx as u32 % width) as i32;
                let y = (idx as u32 / width) as i32;
                Some((x - cx, y - cy))
            } else {
                None
            }
        })
    }

    /// Maximum translation distances `(xp, yp, xn, yn)`, over every cell
    /// marked `Hit` or `Miss`: `xp`/`yp` are how far left/up of the origin
    /// the farthest hit-or-miss cell sits, `xn`/`yn` how far right/down.
    /// These size the edge strips that erosion and HMT must clear under the
    /// asymmetric boundary condition, and the padding `pixCloseSafe` needs.
    ///
    /// Unlike a bounding-box measure, this is based solely on the actual
    /// hit/miss offsets, so a SEL with cells only to one side of the origin
    /// yields zero translation on the other side.
    ///
    /// # See also
    ///
    /// C Leptonica: `selFindMaxTranslations()` in `sel2.c`
    pub fn max_translations(&self) -> (u32, u32, u32, u32) {
        let mut xp = 0i32;
        let mut xn = 0i32;
        let mut yp = 0i32;
        let mut yn = 0i32;

        for (dx, dy) in self.hit_offsets().chain(self.miss_offsets()) {
            // dx = j - cx, dy = i - cy: positive means right/below origin.
            xp = xp.max(-dx);
            xn = xn.max(dx);
            yp = yp.max(-dy);
            yn = yn.max(dy);
        }

        (xp.max(0) as u32, yp.max(0) as u32, xn.max(0) as u32, yn.max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_brick() {
        let sel = Sel::create_brick(3, 5).unwrap();
        assert_eq!(sel.width(), 3);
        assert_eq!(sel.height(), 5);
        assert_eq!(sel.origin_x(), 1);
        assert_eq!(sel.origin_y(), 2);
        assert_eq!(sel.hit_count(), 15);
        assert_eq!(sel.miss_count(), 0);
    }

    #[test]
    fn test_create_cross_rejects_even_size() {
        assert!(Sel::create_cross(4).is_err());
        let sel = Sel::create_cross(5).unwrap();
        assert_eq!(sel.hit_count(), 9); // 5 + 5 - 1 (center counted once)
    }

    #[test]
    fn test_from_string() {
        let sel = Sel::from_string("x.o\n.x.\no.x", 1, 1).unwrap();
        assert_eq!(sel.width(), 3);
        assert_eq!(sel.height(), 3);
        assert_eq!(sel.get_element(0, 0), Some(SelElement::Hit));
        assert_eq!(sel.get_element(2, 0), Some(SelElement::Miss));
        assert_eq!(sel.get_element(1, 0), Some(SelElement::DontCare));
        assert_eq!(sel.hit_count(), 3);
        assert_eq!(sel.miss_count(), 2);
    }

    #[test]
    fn test_from_string_rejects_ragged_rows() {
        assert!(Sel::from_string("xx\nx", 0, 0).is_err());
    }

    #[test]
    fn test_reflect_brick_is_identity_on_symmetric_origin() {
        let sel = Sel::create_brick(3, 3).unwrap();
        let reflected = sel.reflect();
        assert_eq!(reflected.width(), 3);
        assert_eq!(reflected.origin_x(), 1);
        assert_eq!(reflected.origin_y(), 1);
        assert_eq!(reflected.hit_count(), sel.hit_count());
    }

    #[test]
    fn test_reflect_asymmetric_hit_pattern() {
        // Hit only to the right of origin; reflecting should move it left.
        let mut sel = Sel::new(3, 1).unwrap();
        sel.set_element(2, 0, SelElement::Hit);
        let reflected = sel.reflect();
        assert_eq!(reflected.get_element(0, 0), Some(SelElement::Hit));
        assert_eq!(reflected.get_element(2, 0), Some(SelElement::DontCare));
    }

    #[test]
    fn test_rotate_orth_90_swaps_dimensions() {
        let sel = Sel::create_brick(5, 3).unwrap();
        let rotated = sel.rotate_orth(1);
        assert_eq!(rotated.width(), 3);
        assert_eq!(rotated.height(), 5);

        let back = sel.rotate_orth(4);
        assert_eq!(back.width(), sel.width());
        assert_eq!(back.height(), sel.height());
        assert_eq!(back.data(), sel.data());
    }

    #[test]
    fn test_max_translations_brick() {
        let sel = Sel::create_brick(5, 3).unwrap();
        // origin at (2, 1); hits span the whole grid
        assert_eq!(sel.max_translations(), (2, 1, 2, 1));
    }

    #[test]
    fn test_max_translations_asymmetric() {
        // Hit at (4, 0), origin at (0, 0): the hit sits 4 cells to the
        // right of the origin, so xn = 4 and everything else is 0.
        let mut sel = Sel::new(5, 1).unwrap();
        sel.set_origin(0, 0).unwrap();
        sel.set_element(4, 0, SelElement::Hit);
        assert_eq!(sel.max_translations(), (0, 0, 4, 0));
    }

    #[test]
    fn test_max_translations_includes_miss_cells() {
        let mut sel = Sel::new(3, 1).unwrap();
        sel.set_element(0, 0, SelElement::Miss);
        // origin defaults to (1, 0); the miss at (0, 0) is 1 cell to the left.
        assert_eq!(sel.max_translations(), (1, 0, 0, 0));
    }

    #[test]
    fn test_hit_offsets_relative_to_origin() {
        let sel = Sel::create_brick(3, 3).unwrap();
        let mut offsets: Vec<_> = sel.hit_offsets().collect();
        offsets.sort();
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&(-1, -1)));
        assert!(offsets.contains(&(1, 1)));
        assert!(offsets.contains(&(0, 0)));
    }
}
