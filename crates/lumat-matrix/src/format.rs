//! Text rendering of matrices.
//!
//! A matrix renders as nested brace lists, row-major, with six fractional
//! digits per value unless the formatter specifies a precision:
//!
//! ```text
//! {{1.000000,2.000000},{3.000000,4.000000}}
//! ```

use std::fmt::{self, Write};

use crate::matrix::Matrix;

const DEFAULT_PRECISION: usize = 6;

impl fmt::Display for Matrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_char('{')?;
        for i in 0..self.rows() {
            if i > 0 {
                f.write_char(',')?;
            }
            f.write_char('{')?;
            for (j, value) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_char(',')?;
                }
                write!(f, "{value:.precision$}")?;
            }
            f.write_char('}')?;
        }
        f.write_char('}')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumat_arena::HeapAllocator;

    #[test]
    fn renders_nested_braces() {
        let heap = HeapAllocator;
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, -4.5]], &heap).unwrap();
        assert_eq!(
            m.to_string(),
            "{{1.000000,2.000000},{3.000000,-4.500000}}"
        );
    }

    #[test]
    fn honours_explicit_precision() {
        let heap = HeapAllocator;
        let m = Matrix::from_rows(&[[1.0 / 3.0]], &heap).unwrap();
        assert_eq!(format!("{m:.2}"), "{{0.33}}");
    }

    #[test]
    fn empty_matrix_renders_outer_braces() {
        let heap = HeapAllocator;
        let m = Matrix::new(0, 0, &heap).unwrap();
        assert_eq!(m.to_string(), "{}");
    }

    #[test]
    fn zero_width_rows_render_empty_lists() {
        let heap = HeapAllocator;
        let m = Matrix::new(2, 0, &heap).unwrap();
        assert_eq!(m.to_string(), "{{},{}}");
    }
}
