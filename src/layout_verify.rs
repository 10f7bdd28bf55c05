// Layout verification - Vector4 and LinearColor must stay four packed f32s
// so they can be viewed as [f32; 4] and uploaded as raw bytes.
// Run with: cargo test layout_verify

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn verify_struct_sizes() {
        assert_eq!(std::mem::size_of::<Vector4>(), 16, "Vector4 size mismatch");
        assert_eq!(std::mem::align_of::<Vector4>(), 4, "Vector4 align mismatch");
        assert_eq!(
            std::mem::size_of::<LinearColor>(),
            16,
            "LinearColor size mismatch"
        );
    }

    #[test]
    fn verify_vector4_layout() {
        assert_eq!(std::mem::offset_of!(Vector4, x), 0);
        assert_eq!(std::mem::offset_of!(Vector4, y), 4);
        assert_eq!(std::mem::offset_of!(Vector4, z), 8);
        assert_eq!(std::mem::offset_of!(Vector4, w), 12);
    }

    #[test]
    fn verify_linear_color_layout() {
        assert_eq!(std::mem::offset_of!(LinearColor, r), 0);
        assert_eq!(std::mem::offset_of!(LinearColor, g), 4);
        assert_eq!(std::mem::offset_of!(LinearColor, b), 8);
        assert_eq!(std::mem::offset_of!(LinearColor, a), 12);
    }

    #[test]
    fn verify_byte_order() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &2.0f32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &4.0f32.to_ne_bytes());
    }
}
