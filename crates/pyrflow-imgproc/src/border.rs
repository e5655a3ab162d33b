/// A border type for sampling outside the image domain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderMode {
    /// This border type fills the border with a single, constant value.
    ///
    /// Example: ...d c b a | v v v v...
    Constant(f32),

    /// This border type takes the outermost row or column of pixels and repeats it into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    #[default]
    Replicate,

    /// This border type reflects the pixel values at the boundary, starting with the pixel 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,

    /// This border type reflects the pixel values at the boundary, starting with the edge pixel itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,

    /// This border type wraps the content from the opposite side to fill the border.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

impl BorderMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let period = 2 * len as isize;
        let i = i.rem_euclid(period);
        if i < len as isize {
            i as usize
        } else {
            (period - i - 1) as usize
        }
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let period = 2 * (len as isize - 1);
        let i = i.rem_euclid(period);
        if i < len as isize {
            i as usize
        } else {
            (period - i) as usize
        }
    }

    #[inline]
    fn wrap(i: isize, len: usize) -> usize {
        i.rem_euclid(len as isize) as usize
    }

    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the border mode.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Reflect101`: mirror excluding edge
    /// - `Wrap`: circular wrap
    /// - `Constant`: `None` for indices outside the domain
    ///
    /// `len` must be greater than zero.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        match self {
            BorderMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            BorderMode::Reflect => Some(Self::reflect(i, len)),
            BorderMode::Reflect101 => Some(Self::reflect101(i, len)),
            BorderMode::Wrap => Some(Self::wrap(i, len)),
            BorderMode::Constant(_) => {
                if i >= 0 && i < len as isize {
                    Some(i as usize)
                } else {
                    None
                }
            }
        }
    }

    /// The fill value used for samples without a source pixel.
    #[inline]
    pub fn fill_value(&self) -> f32 {
        match self {
            BorderMode::Constant(val) => *val,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BorderMode;

    fn mapped(mode: BorderMode, range: std::ops::Range<isize>, len: usize) -> Vec<Option<usize>> {
        range.map(|i| mode.map_index(i, len)).collect()
    }

    #[test]
    fn replicate() {
        assert_eq!(
            mapped(BorderMode::Replicate, -2..6, 4),
            vec![Some(0), Some(0), Some(0), Some(1), Some(2), Some(3), Some(3), Some(3)]
        );
    }

    #[test]
    fn reflect() {
        assert_eq!(
            mapped(BorderMode::Reflect, -3..7, 4),
            vec![
                Some(2),
                Some(1),
                Some(0),
                Some(0),
                Some(1),
                Some(2),
                Some(3),
                Some(3),
                Some(2),
                Some(1)
            ]
        );
    }

    #[test]
    fn reflect101() {
        assert_eq!(
            mapped(BorderMode::Reflect101, -3..7, 4),
            vec![
                Some(3),
                Some(2),
                Some(1),
                Some(0),
                Some(1),
                Some(2),
                Some(3),
                Some(2),
                Some(1),
                Some(0)
            ]
        );
    }

    #[test]
    fn wrap() {
        assert_eq!(
            mapped(BorderMode::Wrap, -2..6, 4),
            vec![Some(2), Some(3), Some(0), Some(1), Some(2), Some(3), Some(0), Some(1)]
        );
    }

    #[test]
    fn constant() {
        let mode = BorderMode::Constant(7.0);
        assert_eq!(mode.map_index(-1, 4), None);
        assert_eq!(mode.map_index(4, 4), None);
        assert_eq!(mode.map_index(2, 4), Some(2));
        assert_eq!(mode.fill_value(), 7.0);
        assert_eq!(BorderMode::default().fill_value(), 0.0);
    }

    #[test]
    fn single_sample() {
        for mode in [
            BorderMode::Replicate,
            BorderMode::Reflect,
            BorderMode::Reflect101,
            BorderMode::Wrap,
        ] {
            assert_eq!(mapped(mode, -3..4, 1), vec![Some(0); 7]);
        }
    }
}
