use std::cmp::Ordering;

pub trait Compare<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    fn lt(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }
    fn le(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) != Ordering::Greater
    }
    fn gt(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Greater
    }
    fn ge(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) != Ordering::Less
    }
    fn eq(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Equal
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { lhs.cmp(rhs) }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReverseOrder<C>(pub C);

impl<T, C: Compare<T>> Compare<T> for ReverseOrder<C> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CmpBy<F>(pub F);

impl<T, F: Fn(&T, &T) -> Ordering> Compare<T> for CmpBy<F> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { (self.0)(lhs, rhs) }
}

#[macro_export]
macro_rules! def_compare {
    ( $name:ident = ($ty:ty, $cmp:expr $(,)?) ) => {
        struct $name;
        impl $crate::Compare<$ty> for $name {
            fn compare(
                &self,
                lhs: &$ty,
                rhs: &$ty,
            ) -> std::cmp::Ordering {
                ($cmp)(lhs, rhs)
            }
        }
        impl Default for $name {
            fn default() -> Self { Self }
        }
    };
    ( $($name:ident = ($($impl:tt)*)),* ) => { $(
        $crate::def_compare! { $name = ($($impl)*) }
    )* };
    ( $($name:ident = ($($impl:tt)*),)* ) => { $(
        $crate::def_compare! { $name = ($($impl)*) }
    )* };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order() {
        let cmp = NaturalOrder;
        assert!(cmp.lt(&1, &2));
        assert!(cmp.le(&2, &2));
        assert!(Compare::eq(&cmp, &2, &2));
        assert!(cmp.gt(&3, &2));
        assert!(cmp.ge(&3, &3));
    }

    #[test]
    fn reverse_order() {
        let cmp = ReverseOrder(NaturalOrder);
        assert!(cmp.lt(&2, &1));
        assert!(cmp.gt(&1, &2));
        assert!(Compare::eq(&cmp, &1, &1));
    }

    #[test]
    fn cmp_by_closure() {
        let by_abs = CmpBy(|x: &i32, y: &i32| x.abs().cmp(&y.abs()));
        assert!(by_abs.lt(&1, &-2));
        assert!(by_abs.eq(&-3, &3));
    }

    #[test]
    fn def_compare_macro() {
        def_compare! {
            Desc = (u32, |x: &u32, y: &u32| y.cmp(x)),
            ByLen = (&'static str, |x: &&str, y: &&str| x.len().cmp(&y.len())),
        }

        let desc = Desc;
        assert!(desc.lt(&3, &2));

        let by_len = ByLen::default();
        assert!(by_len.lt(&"ab", &"abc"));
        assert!(by_len.eq(&"xy", &"ab"));
    }
}
