//! Branch weight hints for stable Rust.
//!
//! Stand-ins for the unstable `std::hint::likely` and `std::hint::unlikely`.
//! Calling a `#[cold]` function on one side of a branch makes the compiler
//! lay out that side as the unlikely one.

#[inline]
#[cold]
fn cold_path() {}

/// Mark `cond` as usually true.
#[inline]
pub(crate) fn likely(cond: bool) -> bool {
    if !cond {
        cold_path();
    }
    cond
}

/// Mark `cond` as usually false.
#[inline]
pub(crate) fn unlikely(cond: bool) -> bool {
    if cond {
        cold_path();
    }
    cond
}
