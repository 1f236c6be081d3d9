#[cfg(feature = "std")]
pub trait PageKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> PageKey for T {}

#[cfg(not(feature = "std"))]
pub trait PageKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> PageKey for T {}
