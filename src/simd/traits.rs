/// Alignment query for SIMD vector types.
pub trait Alignment<T> {
    /// Returns `true` if `ptr` satisfies the vector's natural alignment.
    fn is_aligned(ptr: *const T) -> bool;
}

/// Loading packed elements from memory into a SIMD register.
pub trait SimdLoad<T> {
    type Output;

    /// Loads a full vector, picking aligned or unaligned access from `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `size` readable elements and `size` must
    /// equal the lane count.
    unsafe fn load(ptr: *const T, size: usize) -> Self::Output;

    /// # Safety
    ///
    /// `ptr` must be aligned to the vector width and point to a full vector.
    unsafe fn load_aligned(ptr: *const T) -> Self::Output;

    /// # Safety
    ///
    /// `ptr` must point to a full vector of readable elements.
    unsafe fn load_unaligned(ptr: *const T) -> Self::Output;

    /// Loads fewer elements than the lane count; remaining lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `size` readable elements.
    unsafe fn load_partial(ptr: *const T, size: usize) -> Self::Output;
}

/// Storing a SIMD register back to memory.
pub trait SimdStore<T> {
    /// Stores the valid lanes at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `self.size` writable elements.
    unsafe fn store_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must be aligned to the vector width and point to a full vector.
    unsafe fn store_aligned_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must point to a full vector of writable elements.
    unsafe fn store_unaligned_at(&self, ptr: *mut T);

    /// # Safety
    ///
    /// `ptr` must point to at least `self.size` writable elements.
    unsafe fn store_at_partial(&self, ptr: *mut T);
}
