/// Create the pair of 3x3 first-difference kernels used for class-boundary
/// detection.
///
/// # Returns
///
/// A tuple of the x and y kernels. The x kernel differences each pixel
/// against its upper neighbor, the y kernel against its left neighbor.
pub fn edge_difference_kernels_3x3() -> ([[f32; 3]; 3], [[f32; 3]; 3]) {
    let kernel_x = [[0.0, 1.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 0.0]];
    let kernel_y = [[0.0, 0.0, 0.0], [1.0, -1.0, 0.0], [0.0, 0.0, 0.0]];
    (kernel_x, kernel_y)
}
