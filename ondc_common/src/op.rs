/// Implements the standard operator traits for single-field integer newtypes, using the given method of the inner
/// value (e.g. `saturating_add`) in place of the plain operator.
///
/// * `op!(binary T, Add, add, saturating_add)` implements `Add<T> for T`
/// * `op!(inplace T, AddAssign, add_assign, saturating_add)` implements `AddAssign<T> for T`
/// * `op!(unary T, Neg, neg, saturating_neg)` implements `Neg for T`
#[macro_export]
macro_rules! op {
    (binary $type:ty, $trait:ident, $fn:ident, $inner:ident) => {
        impl std::ops::$trait for $type {
            type Output = Self;

            fn $fn(self, rhs: Self) -> Self::Output {
                Self(self.0.$inner(rhs.0))
            }
        }
    };
    (inplace $type:ty, $trait:ident, $fn:ident, $inner:ident) => {
        impl std::ops::$trait for $type {
            fn $fn(&mut self, rhs: Self) {
                self.0 = self.0.$inner(rhs.0);
            }
        }
    };
    (unary $type:ty, $trait:ident, $fn:ident, $inner:ident) => {
        impl std::ops::$trait for $type {
            type Output = Self;

            fn $fn(self) -> Self::Output {
                Self(self.0.$inner())
            }
        }
    };
}
