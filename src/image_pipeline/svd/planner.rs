use crate::image_pipeline::svd::channels::Orientation;

/// Longest side, in pixels, the SVD stage works at by default.
pub const DEFAULT_COST_CAP: usize = 512;

/// Resolution the channel matrices are built at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingDimensions {
    pub width: usize,
    pub height: usize,
}

impl WorkingDimensions {
    /// Bounds the longer side of `width`x`height` by `cap`, keeping the aspect
    /// ratio. Images already within the cap keep their size.
    pub fn plan(width: usize, height: usize, cap: usize) -> Self {
        let cap = cap.max(1);
        let longer = width.max(height);

        if longer <= cap {
            return Self { width, height };
        }

        let shorter = width.min(height);
        let scaled = ((shorter * cap + longer / 2) / longer).max(1);

        if width >= height {
            Self {
                width: cap,
                height: scaled,
            }
        } else {
            Self {
                width: scaled,
                height: cap,
            }
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::for_dimensions(self.width, self.height)
    }

    /// `(rows, columns)` of every channel matrix at this resolution.
    pub fn matrix_shape(&self) -> (usize, usize) {
        self.orientation().matrix_shape(self.width, self.height)
    }

    /// Highest rank any channel matrix at this resolution can have.
    pub fn achievable_rank(&self) -> usize {
        self.width.min(self.height)
    }

    pub fn is_downscaled_from(&self, width: usize, height: usize) -> bool {
        (self.width, self.height) != (width, height)
    }
}
