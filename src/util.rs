/// Scales an integer length by `factor`, truncating the result toward zero.
///
/// The product is computed in single precision. Results outside the range of
/// `i32` saturate and a NaN product becomes 0.
pub fn scale_length(len: i32, factor: f32) -> i32 {
    (len as f32 * factor) as i32
}
