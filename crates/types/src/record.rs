//! Record and field descriptors.
//!
//! A destination struct takes part in binding by enumerating its fields
//! as descriptors: a declared name plus write access to the field's
//! storage. Because the descriptor table is built inside the struct's
//! own scope (by hand or through [`record!`](crate::record)), private
//! fields are reachable without `unsafe`; a descriptor can instead be
//! [`Access::Sealed`] to deny the binder write access entirely.

use crate::slot::Slot;

/// Write access granted (or denied) for one destination field.
pub enum Access<'a> {
    /// The field can be written through this slot.
    Slot(Slot<'a>),
    /// No write access is available. Binding a sealed field fails with
    /// an unsettable-field error and moves on to the next field.
    Sealed,
}

/// One field descriptor of a destination record.
pub struct Field<'a> {
    /// Declared field name, used to derive candidate source keys.
    pub name: &'static str,
    pub access: Access<'a>,
}

impl<'a> Field<'a> {
    /// A writable field descriptor.
    pub fn new(name: &'static str, slot: Slot<'a>) -> Self {
        Self {
            name,
            access: Access::Slot(slot),
        }
    }

    /// A field the binder may see but never write.
    pub fn sealed(name: &'static str) -> Self {
        Self {
            name,
            access: Access::Sealed,
        }
    }
}

/// A typed destination whose fields can be enumerated for binding.
///
/// Descriptors must come back in declaration order; the binder processes
/// them in that order and reports failures against the declared names.
pub trait Record {
    /// Field descriptors over `self`, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Generates a [`Record`] impl from a struct's field list.
///
/// Every listed field must implement `Slotted`. The expansion is the
/// compile-time field-descriptor table: one `Field` per listed name, in
/// the listed order.
///
/// ```
/// #[derive(Default)]
/// struct Limits {
///     jobs: i64,
///     paths: Vec<String>,
/// }
/// mapbind_types::record!(Limits { jobs, paths });
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $($crate::Field::new(
                        stringify!($field),
                        $crate::Slotted::slot(&mut self.$field),
                    )),+
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TypeKind;

    #[derive(Default)]
    struct Sample {
        count: i64,
        tags: Vec<String>,
        secret: String,
    }

    impl Record for Sample {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("count", Slot::I64(&mut self.count)),
                Field::new("tags", Slot::Seq(&mut self.tags)),
                Field::sealed("secret"),
            ]
        }
    }

    #[derive(Default)]
    struct Generated {
        size: u32,
        label: String,
    }
    crate::record!(Generated { size, label });

    #[test]
    fn hand_written_descriptors_preserve_order_and_access() {
        let mut sample = Sample::default();
        let fields = sample.fields();
        let names: Vec<_> = fields.iter().map(|field| field.name).collect();
        assert_eq!(names, ["count", "tags", "secret"]);
        assert!(matches!(fields[2].access, Access::Sealed));
    }

    #[test]
    fn generated_descriptors_expose_slots() {
        let mut generated = Generated::default();
        let mut fields = generated.fields();
        assert_eq!(fields.len(), 2);
        let field = fields.remove(0);
        assert_eq!(field.name, "size");
        match field.access {
            Access::Slot(slot) => assert_eq!(slot.kind(), TypeKind::U32),
            Access::Sealed => panic!("size should be writable"),
        }
    }
}
