//! Element reductions over slices and row-major matrices.
//!
//! Integer accumulation is wrapping: the surface reproduces the native
//! two's-complement arithmetic of the original library, with no
//! saturation and no overflow checks. Float accumulation happens in
//! strict row-major order (y outer, x inner) so rounding is
//! reproducible across the two matrix encodings.

/// An accumulator element: zero plus the addition the surface uses.
pub trait Accumulate: Copy {
    const ZERO: Self;

    fn accumulate(self, rhs: Self) -> Self;
}

macro_rules! impl_accumulate_int {
    ($($ty:ty),*) => {$(
        impl Accumulate for $ty {
            const ZERO: Self = 0;

            #[inline]
            fn accumulate(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
        }
    )*};
}

macro_rules! impl_accumulate_float {
    ($($ty:ty),*) => {$(
        impl Accumulate for $ty {
            const ZERO: Self = 0.0;

            #[inline]
            fn accumulate(self, rhs: Self) -> Self {
                self + rhs
            }
        }
    )*};
}

impl_accumulate_int!(i8, i16, i32, i64);
impl_accumulate_float!(f32, f64);

/// Sum of a slice, accumulated as `A`.
///
/// `A` differs from `T` only for the narrow integer matrix families,
/// which widen into `i32` to keep the returned total meaningful.
pub fn sum_slice<T, A>(xs: &[T]) -> A
where
    T: Copy,
    A: Accumulate + From<T>,
{
    xs.iter()
        .fold(A::ZERO, |acc, &x| acc.accumulate(A::from(x)))
}

/// Element-wise two-slice sum: `Σ (a[i] + b[i])` over the shorter length.
pub fn sum_slice_pair<T, A>(a: &[T], b: &[T]) -> A
where
    T: Copy,
    A: Accumulate + From<T>,
{
    a.iter().zip(b.iter()).fold(A::ZERO, |acc, (&x, &y)| {
        acc.accumulate(A::from(x)).accumulate(A::from(y))
    })
}

/// Row-major sum over a flat `rows * cols` buffer, indexed `y*cols + x`.
///
/// This is one of the two matrix encodings; [`sum_matrix_rows`] is the
/// other. They are deliberately independent code paths that the tests
/// require to agree.
pub fn sum_matrix_flat<T, A>(cells: &[T], rows: usize, cols: usize) -> A
where
    T: Copy,
    A: Accumulate + From<T>,
{
    let mut total = A::ZERO;
    for y in 0..rows {
        for x in 0..cols {
            total = total.accumulate(A::from(cells[y * cols + x]));
        }
    }
    total
}

/// Row-major sum over independently-bounded row slices
/// (the pointer-to-pointer matrix encoding).
pub fn sum_matrix_rows<'a, T, A, I>(rows: I) -> A
where
    T: Copy + 'a,
    A: Accumulate + From<T>,
    I: IntoIterator<Item = &'a [T]>,
{
    let mut total = A::ZERO;
    for row in rows {
        for &x in row {
            total = total.accumulate(A::from(x));
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sum_slice_basic() {
        let total: f64 = sum_slice(&[1.0f64, 2.0, 3.0]);
        assert_relative_eq!(total, 6.0);

        let total: i64 = sum_slice(&[1i64, 2, 3]);
        assert_eq!(total, 6);
    }

    #[test]
    fn sum_slice_empty_is_identity() {
        let total: f64 = sum_slice::<f64, f64>(&[]);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn sum_slice_widens_narrow_ints() {
        // 200 i8 values of 100 each overflow i8 but not the i32 accumulator.
        let xs = [100i8; 200];
        let total: i32 = sum_slice(&xs);
        assert_eq!(total, 20_000);
    }

    #[test]
    fn integer_sum_wraps_at_native_width() {
        let total: i8 = sum_slice(&[i8::MAX, 1]);
        assert_eq!(total, i8::MIN);
    }

    #[test]
    fn sum_slice_pair_is_elementwise() {
        let total: f64 = sum_slice_pair(&[1.0f64, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_relative_eq!(total, 21.0);
    }

    #[test]
    fn matrix_encodings_agree() {
        let flat: Vec<i64> = (0..12).collect();
        let by_rows: Vec<&[i64]> = flat.chunks(4).collect();

        let a: i64 = sum_matrix_flat(&flat, 3, 4);
        let b: i64 = sum_matrix_rows(by_rows);
        assert_eq!(a, b);
        assert_eq!(a, 66);
    }

    #[test]
    fn matrix_empty_shapes() {
        let none: i32 = sum_matrix_flat::<i16, i32>(&[], 0, 7);
        assert_eq!(none, 0);
        let none: i32 = sum_matrix_rows::<i16, i32, _>(std::iter::empty());
        assert_eq!(none, 0);
    }
}
