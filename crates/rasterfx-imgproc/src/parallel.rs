use rayon::prelude::*;

use rasterfx_image::Image;

/// Apply a function to each pixel in the image in parallel.
///
/// `src` and `dst` must share the same size; rows are distributed over the
/// rayon thread pool and each pixel is visited exactly once. Empty images are
/// a no-op.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    if src.is_empty() {
        return;
    }

    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each channel value in the image in parallel.
pub fn par_iter_rows_val<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    if src.is_empty() {
        return;
    }

    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use rasterfx_image::{Image, ImageError, ImageSize};

    #[test]
    fn par_iter_rows_pixels() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            (0..12).collect(),
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        super::par_iter_rows(&src, &mut dst, |s, d| d[0] = s[2]);
        assert_eq!(dst.as_slice(), &[2, 5, 8, 11]);

        Ok(())
    }

    #[test]
    fn par_iter_rows_val_elements() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new([1, 2].into(), vec![1, 2, 3, 4, 5, 6])?;
        let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;

        super::par_iter_rows_val(&src, &mut dst, |s, d| *d = s * 2);
        assert_eq!(dst.as_slice(), &[2, 4, 6, 8, 10, 12]);

        Ok(())
    }

    #[test]
    fn par_iter_rows_empty() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::new([0, 3].into(), vec![])?;
        let mut dst = src.clone();
        super::par_iter_rows(&src, &mut dst, |_, _| unreachable!());
        super::par_iter_rows_val(&src, &mut dst, |_, _| unreachable!());
        Ok(())
    }
}
