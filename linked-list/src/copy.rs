//! Deep-copy capability.
//!
//! Any type that can be copied safely implements [`DeepCopy`]. The copy
//! is total: it never fails, it degrades. A type that cannot produce an
//! independent copy returns its shared handle flagged
//! [`CopyFidelity::Shared`] so the caller can observe (and log) that the
//! "independent copy" invariant was not met.

use std::rc::Rc;

use crate::LinkedList;

/// How faithful a copy turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyFidelity {
    /// Fully independent: mutating the copy never touches the source.
    Deep,
    /// At least one part of the copy aliases the source.
    Shared,
}

impl CopyFidelity {
    /// Folds two fidelities; `Shared` is sticky.
    pub fn combine(self, other: CopyFidelity) -> CopyFidelity {
        if self == CopyFidelity::Shared || other == CopyFidelity::Shared {
            CopyFidelity::Shared
        } else {
            CopyFidelity::Deep
        }
    }
}

/// A copied value together with its fidelity.
#[derive(Debug)]
pub struct CopyOutcome<T> {
    pub value: T,
    pub fidelity: CopyFidelity,
}

impl<T> CopyOutcome<T> {
    pub fn deep(value: T) -> Self {
        CopyOutcome {
            value,
            fidelity: CopyFidelity::Deep,
        }
    }

    pub fn shared(value: T) -> Self {
        CopyOutcome {
            value,
            fidelity: CopyFidelity::Shared,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.fidelity == CopyFidelity::Shared
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Capability for producing a safe copy of a value.
///
/// Immutable scalars copy by value (sharing is indistinguishable from
/// copying there), containers copy node by node dispatching on every
/// element, and reference-counted handles fall back to sharing with a
/// degraded fidelity.
pub trait DeepCopy: Sized {
    fn deep_copy(&self) -> CopyOutcome<Self>;
}

macro_rules! impl_deep_copy_by_value {
    ($($t:ty),*) => {
        $(
            impl DeepCopy for $t {
                fn deep_copy(&self) -> CopyOutcome<Self> {
                    CopyOutcome::deep(self.clone())
                }
            }
        )*
    };
}

impl_deep_copy_by_value!(
    String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> CopyOutcome<Self> {
        match self {
            None => CopyOutcome::deep(None),
            Some(value) => {
                let copied = value.deep_copy();
                CopyOutcome {
                    value: Some(copied.value),
                    fidelity: copied.fidelity,
                }
            }
        }
    }
}

// Last-resort fallback: no independent copy is known for an opaque
// shared handle, so the handle itself is cloned and the outcome flagged.
impl<T> DeepCopy for Rc<T> {
    fn deep_copy(&self) -> CopyOutcome<Self> {
        CopyOutcome::shared(Rc::clone(self))
    }
}

impl<T: DeepCopy> DeepCopy for LinkedList<T> {
    fn deep_copy(&self) -> CopyOutcome<Self> {
        let mut copy = LinkedList::new();
        let mut fidelity = CopyFidelity::Deep;
        let mut current = self.head.clone();
        while let Some(node) = current {
            let element = node.borrow().elem.deep_copy();
            fidelity = fidelity.combine(element.fidelity);
            copy.add_last(element.value);
            let next = node.borrow().next.clone();
            current = next;
        }
        CopyOutcome { value: copy, fidelity }
    }
}
