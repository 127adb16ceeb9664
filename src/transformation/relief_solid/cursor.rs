use super::{ReliefError, SolidSection, SOLID_SECTIONS};
use crate::shape::Triangle;

/// A write cursor over a pre-allocated run of triangle slots.
///
/// The cursor starts at the first slot and advances by exactly one slot per
/// emitted triangle, so every slot is written once and in order. It lives for a
/// single generation run: [`TriangleCursor::finish`] consumes it and checks that
/// the whole run was filled.
pub struct TriangleCursor<'a> {
    slots: &'a mut [Triangle],
    next: usize,
    section: SolidSection,
}

impl<'a> TriangleCursor<'a> {
    /// Creates a cursor writing into `slots`, starting at the first one.
    pub fn new(slots: &'a mut [Triangle]) -> Self {
        Self {
            slots,
            next: 0,
            section: SOLID_SECTIONS[0],
        }
    }

    /// Records which section the next triangles belong to.
    ///
    /// Only used to give context to errors.
    #[inline]
    pub fn begin_section(&mut self, section: SolidSection) {
        self.section = section;
    }

    /// The section currently being emitted.
    #[inline]
    pub fn section(&self) -> SolidSection {
        self.section
    }

    /// The index of the next slot to be written, i.e., the number of triangles emitted so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.next
    }

    /// The number of slots left to write.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.next
    }

    /// Writes `triangle` into the next slot.
    ///
    /// Fails with [`ReliefError::BufferSizeMismatch`] if every slot was already written.
    #[inline]
    pub fn emit(&mut self, triangle: Triangle) -> Result<(), ReliefError> {
        match self.slots.get_mut(self.next) {
            Some(slot) => {
                *slot = triangle;
                self.next += 1;
                Ok(())
            }
            None => Err(ReliefError::BufferSizeMismatch {
                section: self.section,
                expected: self.slots.len(),
                written: self.next + 1,
            }),
        }
    }

    /// Ends the run, checking that every slot was written.
    ///
    /// Returns the number of triangles written.
    pub fn finish(self) -> Result<usize, ReliefError> {
        if self.next != self.slots.len() {
            return Err(ReliefError::BufferSizeMismatch {
                section: self.section,
                expected: self.slots.len(),
                written: self.next,
            });
        }

        Ok(self.next)
    }
}
