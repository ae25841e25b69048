//! Operator-forwarding helpers.
//!
//! The fallible core operations live on [`Mpi`](crate::Mpi) and return
//! [`Result`](crate::Result); the operator traits forward to them and panic
//! on the failure cases, like the primitive integer operators do.

/// Implement a binary operator trait for all owned/borrowed combinations by
/// forwarding to a fallible inherent method.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident => $inner:ident, $msg:expr) => {
        impl $imp<&Mpi> for &Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: &Mpi) -> Mpi {
                self.$inner(rhs).expect($msg)
            }
        }

        impl $imp<Mpi> for &Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: Mpi) -> Mpi {
                $imp::$method(self, &rhs)
            }
        }

        impl $imp<&Mpi> for Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: &Mpi) -> Mpi {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Mpi> for Mpi {
            type Output = Mpi;

            #[inline]
            fn $method(self, rhs: Mpi) -> Mpi {
                $imp::$method(&self, &rhs)
            }
        }
    };
}

/// Implement the compound-assignment form of an operator on top of the
/// by-reference binary form.
macro_rules! forward_assign {
    (impl $imp:ident, $method:ident => $op:tt) => {
        impl $imp<&Mpi> for Mpi {
            #[inline]
            fn $method(&mut self, rhs: &Mpi) {
                let x = &*self $op rhs;
                *self = x;
            }
        }

        impl $imp<Mpi> for Mpi {
            #[inline]
            fn $method(&mut self, rhs: Mpi) {
                $imp::$method(self, &rhs);
            }
        }
    };
}
