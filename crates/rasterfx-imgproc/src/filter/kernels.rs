/// Create the 3x3 sobel kernels.
///
/// # Returns
///
/// The horizontal and vertical derivative kernels, row-major.
///
/// # Example
///
/// ```
/// use rasterfx_imgproc::filter::kernels::sobel_kernel_3x3;
///
/// let (kx, ky) = sobel_kernel_3x3();
/// assert_eq!(kx[1], [-2, 0, 2]);
/// assert_eq!(ky[0], [-1, -2, -1]);
/// ```
pub fn sobel_kernel_3x3() -> ([[i32; 3]; 3], [[i32; 3]; 3]) {
    let kernel_x = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
    let kernel_y = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];
    (kernel_x, kernel_y)
}
