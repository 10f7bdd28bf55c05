use bytemuck::{Pod, Zeroable};
use cgmath::{Vector2, Vector3};
use std::fmt;

use crate::color::LinearColor;
use crate::consts::{KINDA_SMALL_NUMBER, SMALL_NUMBER};
use crate::diagnostics::check_nan;

mod parse;

pub use parse::ParseVector4Error;

/// Four `f32` components laid out contiguously as x, y, z, w.
///
/// Used for homogeneous coordinates (w = 1 for points, w = 0 for directions),
/// colors and plane equations. Methods suffixed with `3` only look at xyz.
/// Nothing is validated on construction; NaN and infinity propagate through
/// arithmetic the usual IEEE-754 way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A point: `w` is 1.
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub fn from_vector3(v: Vector3<f32>, w: f32) -> Self {
        let output = Self::new(v.x, v.y, v.z, w);
        check_nan(&output);
        output
    }

    pub fn from_xy_zw(xy: Vector2<f32>, zw: Vector2<f32>) -> Self {
        let output = Self::new(xy.x, xy.y, zw.x, zw.y);
        check_nan(&output);
        output
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        check_nan(self);
    }

    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    /// Same as indexing. Panics if `index > 3`.
    pub fn component(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }

    pub fn component_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_array_mut()[index]
    }

    /// # Safety
    ///
    /// `index` must be less than 4.
    pub unsafe fn component_unchecked(&self, index: usize) -> f32 {
        // SAFETY: the caller keeps `index` inside the four-element view.
        unsafe { *self.as_array().get_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than 4.
    pub unsafe fn component_unchecked_mut(&mut self, index: usize) -> &mut f32 {
        // SAFETY: see `component_unchecked`.
        unsafe { self.as_array_mut().get_unchecked_mut(index) }
    }

    pub fn dot3(&self, other: &Self) -> f32 {
        dot3(self, other)
    }

    pub fn dot4(&self, other: &Self) -> f32 {
        dot4(self, other)
    }

    /// Cross product of the xyz parts, with `w` set to zero. Same as `^`.
    pub fn cross3(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            0.0,
        )
    }

    /// Component-wise comparison within `tolerance`.
    pub fn equals(&self, other: &Self, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
            && (self.w - other.w).abs() <= tolerance
    }

    pub fn equals_default(&self, other: &Self) -> bool {
        self.equals(other, KINDA_SMALL_NUMBER)
    }

    pub fn size3(&self) -> f32 {
        self.size_squared3().sqrt()
    }

    pub fn size_squared3(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn size(&self) -> f32 {
        self.size_squared().sqrt()
    }

    pub fn size_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Normalized xyz with `w` = 0, or [`Vector4::ZERO`] when the squared xyz
    /// length is not above `tolerance`.
    pub fn safe_normal(&self, tolerance: f32) -> Self {
        let square_sum = self.size_squared3();
        if square_sum > tolerance {
            let scale = 1.0 / square_sum.sqrt();
            return Self::new(self.x * scale, self.y * scale, self.z * scale, 0.0);
        }
        Self::ZERO
    }

    pub fn safe_normal_default(&self) -> Self {
        self.safe_normal(SMALL_NUMBER)
    }

    /// Normalized xyz with `w` = 0. A zero-length input gives NaN or infinity.
    pub fn unsafe_normal3(&self) -> Self {
        let scale = 1.0 / self.size_squared3().sqrt();
        Self::new(self.x * scale, self.y * scale, self.z * scale, 0.0)
    }

    pub fn is_unit3(&self, length_squared_tolerance: f32) -> bool {
        (1.0 - self.size_squared3()).abs() < length_squared_tolerance
    }

    pub fn is_unit3_default(&self) -> bool {
        self.is_unit3(KINDA_SMALL_NUMBER)
    }

    pub fn is_nearly_zero3(&self, tolerance: f32) -> bool {
        self.x.abs() <= tolerance && self.y.abs() <= tolerance && self.z.abs() <= tolerance
    }

    pub fn is_nearly_zero3_default(&self) -> bool {
        self.is_nearly_zero3(KINDA_SMALL_NUMBER)
    }

    /// True if any component is NaN or infinite.
    pub fn contains_nan(&self) -> bool {
        !self.x.is_finite() || !self.y.is_finite() || !self.z.is_finite() || !self.w.is_finite()
    }

    /// Reflects about `normal`, which is expected to be unit length.
    pub fn reflect3(&self, normal: &Self) -> Self {
        2.0 * dot3(self, normal) * *normal - *self
    }

    /// Builds two axes that, together with `self`, form an orthogonal basis.
    ///
    /// Starts from whichever of the world X or Z axis is less parallel to
    /// `self`, removes its projection onto `self`, and normalizes it. The
    /// second axis is the cross product of the first with `self`. Both have
    /// `w` = 0.
    pub fn find_best_axis_vectors3(&self) -> (Self, Self) {
        let nx = self.x.abs();
        let ny = self.y.abs();
        let nz = self.z.abs();

        let seed = if nz > nx && nz > ny { Self::X } else { Self::Z };

        let axis1 = (seed - *self * dot3(&seed, self)).safe_normal_default();
        let axis2 = axis1 ^ *self;
        (axis1, axis2)
    }
}

#[inline]
pub fn dot3(a: &Vector4, b: &Vector4) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[inline]
pub fn dot4(a: &Vector4, b: &Vector4) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:.3} y={:.3} z={:.3} w={:.3}",
            self.x, self.y, self.z, self.w
        )
    }
}

impl From<Vector3<f32>> for Vector4 {
    fn from(value: Vector3<f32>) -> Self {
        Self::from_vector3(value, 1.0)
    }
}

impl From<Vector4> for Vector3<f32> {
    fn from(value: Vector4) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<cgmath::Vector4<f32>> for Vector4 {
    fn from(value: cgmath::Vector4<f32>) -> Self {
        let output = Self::new(value.x, value.y, value.z, value.w);
        check_nan(&output);
        output
    }
}

impl From<Vector4> for cgmath::Vector4<f32> {
    fn from(value: Vector4) -> Self {
        Self::new(value.x, value.y, value.z, value.w)
    }
}

impl From<LinearColor> for Vector4 {
    fn from(value: LinearColor) -> Self {
        let output = Self::new(value.r, value.g, value.b, value.a);
        check_nan(&output);
        output
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(value: [f32; 4]) -> Self {
        let output: Self = bytemuck::cast(value);
        check_nan(&output);
        output
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(value: Vector4) -> Self {
        bytemuck::cast(value)
    }
}

impl core::ops::Index<usize> for Vector4 {
    type Output = f32;
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl core::ops::IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_array_mut()[index]
    }
}

impl core::ops::Neg for Vector4 {
    type Output = Vector4;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl core::ops::Add<Vector4> for Vector4 {
    type Output = Vector4;

    fn add(self, rhs: Vector4) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl core::ops::Sub<Vector4> for Vector4 {
    type Output = Vector4;

    fn sub(self, rhs: Vector4) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl core::ops::Add<&Vector4> for &Vector4 {
    type Output = Vector4;

    fn add(self, rhs: &Vector4) -> Self::Output {
        *self + *rhs
    }
}

impl core::ops::Sub<&Vector4> for &Vector4 {
    type Output = Vector4;

    fn sub(self, rhs: &Vector4) -> Self::Output {
        *self - *rhs
    }
}

impl core::ops::Mul<f32> for Vector4 {
    type Output = Vector4;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl core::ops::Mul<Vector4> for f32 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs * self
    }
}

// Multiplies by the reciprocal, so results can differ in the last bit from
// dividing each component.
impl core::ops::Div<f32> for Vector4 {
    type Output = Vector4;

    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl core::ops::Mul<Vector4> for Vector4 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl core::ops::Div<Vector4> for Vector4 {
    type Output = Vector4;

    fn div(self, rhs: Vector4) -> Self::Output {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z, self.w / rhs.w)
    }
}

impl core::ops::BitXor<Vector4> for Vector4 {
    type Output = Vector4;

    fn bitxor(self, rhs: Vector4) -> Self::Output {
        self.cross3(&rhs)
    }
}

impl core::ops::AddAssign<Vector4> for Vector4 {
    fn add_assign(&mut self, rhs: Vector4) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
        check_nan(self);
    }
}

impl core::ops::SubAssign<Vector4> for Vector4 {
    fn sub_assign(&mut self, rhs: Vector4) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
        check_nan(self);
    }
}

impl core::ops::MulAssign<f32> for Vector4 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
        check_nan(self);
    }
}

impl core::ops::DivAssign<f32> for Vector4 {
    fn div_assign(&mut self, rhs: f32) {
        *self *= 1.0 / rhs;
    }
}

impl core::ops::MulAssign<Vector4> for Vector4 {
    fn mul_assign(&mut self, rhs: Vector4) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
        self.w *= rhs.w;
        check_nan(self);
    }
}

impl core::ops::DivAssign<Vector4> for Vector4 {
    fn div_assign(&mut self, rhs: Vector4) {
        self.x /= rhs.x;
        self.y /= rhs.y;
        self.z /= rhs.z;
        self.w /= rhs.w;
        check_nan(self);
    }
}
