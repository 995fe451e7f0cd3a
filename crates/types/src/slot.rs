//! Mutable destination slots.
//!
//! A [`Slot`] is a typed mutable view into one destination location: a
//! struct field, a local variable, or an element of a sequence that is
//! itself being populated. The coercion engine only ever writes through
//! slots, which keeps the conversion table independent of where the
//! destination actually lives.

use std::time::Duration;

use crate::kind::TypeKind;

/// A mutable view into one destination of a known kind.
pub enum Slot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Bool(&'a mut bool),
    Text(&'a mut String),
    Duration(&'a mut Duration),
    /// A sequence destination, accessed through the object-safe [`SeqSlot`].
    Seq(&'a mut dyn SeqSlot),
}

impl Slot<'_> {
    /// The declared kind of this destination.
    pub fn kind(&self) -> TypeKind {
        match self {
            Slot::I8(_) => TypeKind::I8,
            Slot::I16(_) => TypeKind::I16,
            Slot::I32(_) => TypeKind::I32,
            Slot::I64(_) => TypeKind::I64,
            Slot::Isize(_) => TypeKind::Isize,
            Slot::U8(_) => TypeKind::U8,
            Slot::U16(_) => TypeKind::U16,
            Slot::U32(_) => TypeKind::U32,
            Slot::U64(_) => TypeKind::U64,
            Slot::Usize(_) => TypeKind::Usize,
            Slot::F32(_) => TypeKind::F32,
            Slot::F64(_) => TypeKind::F64,
            Slot::Bool(_) => TypeKind::Bool,
            Slot::Text(_) => TypeKind::Text,
            Slot::Duration(_) => TypeKind::Duration,
            Slot::Seq(seq) => TypeKind::Seq(Box::new(seq.element_kind())),
        }
    }

    /// Resets the destination to its type's zero value.
    ///
    /// This is the nil-marker semantics: a resolved `Value::Null` zeroes
    /// the field instead of erroring.
    pub fn zero(self) {
        match self {
            Slot::I8(dest) => *dest = 0,
            Slot::I16(dest) => *dest = 0,
            Slot::I32(dest) => *dest = 0,
            Slot::I64(dest) => *dest = 0,
            Slot::Isize(dest) => *dest = 0,
            Slot::U8(dest) => *dest = 0,
            Slot::U16(dest) => *dest = 0,
            Slot::U32(dest) => *dest = 0,
            Slot::U64(dest) => *dest = 0,
            Slot::Usize(dest) => *dest = 0,
            Slot::F32(dest) => *dest = 0.0,
            Slot::F64(dest) => *dest = 0.0,
            Slot::Bool(dest) => *dest = false,
            Slot::Text(dest) => dest.clear(),
            Slot::Duration(dest) => *dest = Duration::default(),
            Slot::Seq(seq) => seq.begin(0),
        }
    }
}

/// Maps a concrete Rust type to its declared kind and its slot.
///
/// Implemented for every scalar destination type, `String`, `Duration`,
/// and generically for `Vec<T>` of any slotted element. The `record!`
/// macro and the standalone conversion entry points are written against
/// this trait, so supporting a new destination kind is one impl here
/// plus its arms in the engine's dispatch.
pub trait Slotted {
    /// Declared kind of `Self`.
    fn kind() -> TypeKind;
    /// A mutable slot over `self`.
    fn slot(&mut self) -> Slot<'_>;
}

macro_rules! scalar_slotted {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl Slotted for $ty {
            fn kind() -> TypeKind {
                TypeKind::$variant
            }

            fn slot(&mut self) -> Slot<'_> {
                Slot::$variant(self)
            }
        }
    )*};
}

scalar_slotted! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    String => Text,
    Duration => Duration,
}

/// Object-safe mutable access to a sequence destination.
///
/// Sequence coercion sizes the destination to the source length up
/// front, then appends one zero-value element per source element and
/// coerces into it. Elements whose coercion fails are left at their
/// zero value, so indices always line up with the source sequence.
pub trait SeqSlot {
    /// Declared kind of the sequence elements.
    fn element_kind(&self) -> TypeKind;

    /// Clears the destination and reserves room for `len` elements.
    fn begin(&mut self, len: usize);

    /// Appends a zero-value element and returns a slot over it.
    fn push_default(&mut self) -> Slot<'_>;

    /// Current element count.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Slotted + Default> SeqSlot for Vec<T> {
    fn element_kind(&self) -> TypeKind {
        T::kind()
    }

    fn begin(&mut self, len: usize) {
        self.clear();
        self.reserve(len);
    }

    fn push_default(&mut self) -> Slot<'_> {
        let index = Vec::len(self);
        self.push(T::default());
        self[index].slot()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Slotted + Default> Slotted for Vec<T> {
    fn kind() -> TypeKind {
        TypeKind::Seq(Box::new(T::kind()))
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Seq(self)
    }
}
