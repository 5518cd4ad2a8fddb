use slotmap::{SlotMap, DenseSlotMap, Key};
use super::Storage;

// Slotmap keys are Copy, so every method here just dereferences the key it's given.
macro_rules! impl_storage_for_slotmap {
    ($($map:ident),+ $(,)?) => {$(
        impl<K: Key, V> Storage for $map<K, V> {
            type Key = K;
            type Element = V;

            #[inline(always)]
            fn add(&mut self, element: Self::Element) -> Self::Key {
                self.insert(element)
            }
            #[inline(always)]
            fn remove(&mut self, key: &Self::Key) -> Option<Self::Element> {
                self.remove(*key)
            }
            #[inline(always)]
            fn len(&self) -> usize {
                self.len()
            }
            #[inline(always)]
            fn with_capacity(capacity: usize) -> Self {
                Self::with_capacity_and_key(capacity)
            }
            #[inline(always)]
            fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
                self.get(*key)
            }
            #[inline(always)]
            fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
                self.get_mut(*key)
            }
            #[inline(always)]
            fn clear(&mut self) {
                self.clear()
            }
            #[inline(always)]
            fn contains_key(&self, key: &Self::Key) -> bool {
                self.contains_key(*key)
            }
            #[inline(always)]
            fn capacity(&self) -> usize {
                self.capacity()
            }
            #[inline(always)]
            fn reserve(&mut self, additional: usize) {
                self.reserve(additional)
            }
            // FIXME slotmaps don't have a shrink_to_fit method
        }
    )+};
}

impl_storage_for_slotmap!(SlotMap, DenseSlotMap);
